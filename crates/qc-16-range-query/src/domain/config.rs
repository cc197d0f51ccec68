//! Range query configuration with validation.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use thiserror::Error;

/// Default cap on headers returned by one query.
pub const MAX_RANGE_WIDTH: u32 = 20;

/// Range query configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Maximum headers per response
    pub max_range_width: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_range_width: MAX_RANGE_WIDTH,
        }
    }
}

/// Invalid range query configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryConfigError {
    #[error("max_range_width must be at least 1")]
    ZeroWidth,
}

impl QueryConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<NonZeroU32, QueryConfigError> {
        NonZeroU32::new(self.max_range_width).ok_or(QueryConfigError::ZeroWidth)
    }
}
