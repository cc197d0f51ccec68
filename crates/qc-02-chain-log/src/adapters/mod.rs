//! # Adapters Layer
//!
//! - `memory` - `RwLock`-guarded in-memory log

pub mod memory;
