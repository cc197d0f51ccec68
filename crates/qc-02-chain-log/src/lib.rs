//! # Chain Log (qc-02)
//!
//! Append-only log of finalized headers, addressable by height.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Dense Heights | Heights start at 1 and grow by exactly 1 per append |
//! | 2 | Time Monotonicity | Each header is strictly later than its predecessor |
//! | 3 | Parent Linkage | `last_block_id` equals the digest of the previous header |
//! | 4 | Serialized Appends | Concurrent appends at one height have exactly one winner |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Append checks and error types
//! - `ports/` - The `ChainLog` trait consumed by other subsystems
//! - `adapters/` - In-memory reference implementation
//!
//! ## Usage
//!
//! ```ignore
//! use qc_02_chain_log::{ChainLog, InMemoryChainLog};
//!
//! let log = InMemoryChainLog::new();
//! log.append(genesis)?;
//! let tip = log.get(log.latest_height())?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::memory::InMemoryChainLog;
pub use domain::errors::ChainLogError;
pub use domain::invariants::check_append;
pub use ports::inbound::ChainLog;
