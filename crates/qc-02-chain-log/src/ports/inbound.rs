//! # Inbound Ports (Driving Ports)
//!
//! The API other subsystems use to read and extend the log.

use crate::domain::errors::ChainLogError;
use shared_types::{Header, Height};

/// Append-only store of finalized headers.
///
/// Implementations serialize appends per log instance: of two concurrent
/// appends at the same height exactly one succeeds and the other fails with
/// `HeightGap`.
pub trait ChainLog: Send + Sync {
    /// Append the next header.
    ///
    /// ## Errors
    ///
    /// - `HeightGap`: height is not `latest_height() + 1`
    /// - `TimeRegression`: time is not strictly after the tip's
    /// - `ParentMismatch`: `last_block_id` does not reference the tip
    fn append(&self, header: Header) -> Result<(), ChainLogError>;

    /// Header at `height`.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: height is outside `[1, latest_height()]`
    fn get(&self, height: Height) -> Result<Header, ChainLogError>;

    /// Headers in `[min_height, max_height] ∩ [1, latest_height()]`,
    /// ascending. Empty if the intersection is empty.
    ///
    /// Callers bound the width; this method does not.
    fn range(&self, min_height: Height, max_height: Height) -> Vec<Header>;

    /// Current tip height, 0 for an empty log.
    fn latest_height(&self) -> Height;
}
