//! Domain types for range queries.

pub mod config;
pub mod range;
pub mod types;
