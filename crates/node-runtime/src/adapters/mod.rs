//! # Adapters
//!
//! Port implementations connecting the verifier to downstream subsystems.
//! Cross-subsystem glue lives here so subsystem crates never depend on each
//! other directly.

pub mod sinks;

pub use sinks::{ChainLogSink, QueueSink};
