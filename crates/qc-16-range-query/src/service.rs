//! Range query service.

use crate::domain::config::{QueryConfig, QueryConfigError, MAX_RANGE_WIDTH};
use crate::domain::range::normalize;
use crate::domain::types::ChainInfo;
use qc_02_chain_log::ChainLog;
use shared_types::{Header, Height};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::debug;

/// Answers height-range reads against a chain log.
///
/// Read-only: never appends, never fails.
pub struct RangeQueryService<L: ChainLog + ?Sized> {
    log: Arc<L>,
    max_width: NonZeroU32,
}

impl<L: ChainLog + ?Sized> RangeQueryService<L> {
    /// Service with the default width cap.
    pub fn new(log: Arc<L>) -> Self {
        Self {
            log,
            max_width: NonZeroU32::new(MAX_RANGE_WIDTH).unwrap_or(NonZeroU32::MIN),
        }
    }

    /// Service with an explicit width cap.
    pub fn with_max_width(log: Arc<L>, max_width: NonZeroU32) -> Self {
        Self { log, max_width }
    }

    /// Service from validated configuration.
    pub fn from_config(log: Arc<L>, config: &QueryConfig) -> Result<Self, QueryConfigError> {
        Ok(Self::with_max_width(log, config.validate()?))
    }

    pub fn max_width(&self) -> NonZeroU32 {
        self.max_width
    }

    /// Headers for the normalized `[min_height, max_height]`, ascending.
    pub fn query(&self, min_height: Height, max_height: Height) -> Vec<Header> {
        self.chain_info(min_height, max_height).headers
    }

    /// Tip height plus the normalized window.
    pub fn chain_info(&self, min_height: Height, max_height: Height) -> ChainInfo {
        let last_height = self.log.latest_height();

        let headers = match normalize(min_height, max_height, last_height, self.max_width) {
            Some(range) => self.log.range(range.min, range.max),
            None => Vec::new(),
        };

        debug!(
            min_height,
            max_height,
            last_height,
            returned = headers.len(),
            "Range query served"
        );
        ChainInfo {
            last_height,
            headers,
        }
    }
}
