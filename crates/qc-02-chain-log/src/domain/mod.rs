//! # Domain Layer
//!
//! - `errors` - Append and lookup failures
//! - `invariants` - Pure checks run before every append

pub mod errors;
pub mod invariants;
