//! QC-16 Range Query - bounded "chain info between heights" reads.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              RANGE QUERY (qc-16)             │
//! │                                              │
//! │  query(min, max)                             │
//! │     │                                        │
//! │     ▼                                        │
//! │  normalize: min ≥ 1, max ≤ tip (saturating)  │
//! │     │          min > max ⇒ empty             │
//! │     ▼                                        │
//! │  width clamp: max ≤ min + width - 1          │
//! │     │                                        │
//! └─────┼────────────────────────────────────────┘
//!       ▼
//!  ChainLog::range (qc-02)
//! ```
//!
//! Range queries never fail: an empty or out-of-range request yields an
//! empty result.

pub mod domain;
pub mod service;

pub use domain::config::{QueryConfig, QueryConfigError, MAX_RANGE_WIDTH};
pub use domain::range::{normalize, HeightRange};
pub use domain::types::ChainInfo;
pub use service::RangeQueryService;
