//! Overflow-safe range normalization.
//!
//! Inputs are arbitrary `i64`s, `Height::MIN` and `Height::MAX` included.
//! All arithmetic saturates; nothing here can wrap.

use shared_types::Height;
use std::num::NonZeroU32;

/// Non-empty inclusive height window, `1 <= min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightRange {
    pub min: Height,
    pub max: Height,
}

// An empty window is represented as `None`, never as a `HeightRange`.
#[allow(clippy::len_without_is_empty)]
impl HeightRange {
    /// Number of heights in the window, always at least 1.
    pub fn len(&self) -> u64 {
        // min >= 1 and max >= min, so the difference is non-negative.
        self.max.abs_diff(self.min).saturating_add(1)
    }
}

/// Clamp `[min_height, max_height]` to `[1, tip]`, then cap its width.
///
/// Returns `None` when nothing remains.
pub fn normalize(
    min_height: Height,
    max_height: Height,
    tip: Height,
    max_width: NonZeroU32,
) -> Option<HeightRange> {
    let min = min_height.max(1);
    let max = max_height.min(tip);
    if min > max {
        return None;
    }

    let span = Height::from(max_width.get()) - 1;
    let max = max.min(min.saturating_add(span));
    Some(HeightRange { min, max })
}
