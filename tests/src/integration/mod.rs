//! # Integration Tests
//!
//! Cross-crate flows through the light node pipeline.

pub mod flows;
