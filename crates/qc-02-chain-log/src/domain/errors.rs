//! # Domain Errors

use shared_types::{Height, ShortHex, Time};
use thiserror::Error;

/// Chain log errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainLogError {
    /// Appended height is not `tip + 1` (also returned to the loser of a
    /// concurrent append race).
    #[error("Height gap: expected {expected}, got {got}")]
    HeightGap { expected: Height, got: Height },

    /// Appended header is not strictly later than the tip.
    #[error("Time regression at height {height}: {time} is not after {tip_time}")]
    TimeRegression {
        height: Height,
        time: Time,
        tip_time: Time,
    },

    /// `last_block_id` does not reference the tip.
    #[error("Parent mismatch at height {height}: expected {}, got {}", ShortHex(expected), ShortHex(got))]
    ParentMismatch {
        height: Height,
        expected: [u8; 32],
        got: [u8; 32],
    },

    /// No header at this height.
    #[error("No header at height {0}")]
    NotFound(Height),
}

impl ChainLogError {
    /// Stable label for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            ChainLogError::HeightGap { .. } => "height_gap",
            ChainLogError::TimeRegression { .. } => "time_regression",
            ChainLogError::ParentMismatch { .. } => "parent_mismatch",
            ChainLogError::NotFound(_) => "not_found",
        }
    }
}
