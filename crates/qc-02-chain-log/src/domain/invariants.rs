//! # Append Invariants
//!
//! Pure checks over the current tip and a candidate header. Evaluated in
//! order, first failure wins:
//!
//! 1. height is exactly `tip + 1` (or 1 on an empty log)
//! 2. time is strictly after the tip's time
//! 3. `last_block_id` is the tip's digest
//!
//! Genesis (height 1) has no predecessor, so only check 1 applies to it.

use crate::domain::errors::ChainLogError;
use shared_types::{Header, Height, ZERO_HASH};

/// Height the next append must carry.
pub fn next_height(tip: Option<&Header>) -> Height {
    tip.map_or(1, |h| h.height.saturating_add(1))
}

/// Validate `header` as the successor of `tip`.
pub fn check_append(tip: Option<&Header>, header: &Header) -> Result<(), ChainLogError> {
    let expected = next_height(tip);
    if header.height != expected {
        return Err(ChainLogError::HeightGap {
            expected,
            got: header.height,
        });
    }

    let Some(tip) = tip else {
        return Ok(());
    };

    if header.time <= tip.time {
        return Err(ChainLogError::TimeRegression {
            height: header.height,
            time: header.time,
            tip_time: tip.time,
        });
    }

    // A stored tip has height >= 1 and is never the empty header.
    let parent = tip.hash().unwrap_or(ZERO_HASH);
    if header.last_block_id != parent {
        return Err(ChainLogError::ParentMismatch {
            height: header.height,
            expected: parent,
            got: header.last_block_id,
        });
    }

    Ok(())
}
