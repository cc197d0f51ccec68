//! # Verifier Configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default tolerated clock skew for the liveness check.
pub const DEFAULT_MAX_CLOCK_DRIFT: Duration = Duration::from_secs(10);

/// Header verifier configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Reject headers timestamped further than this past the local clock.
    ///
    /// `None` disables the liveness check; the correctness checks never
    /// consult the clock.
    pub max_clock_drift: Option<Duration>,

    /// Accept only the direct child of the trusted header (height + 1,
    /// parent linked). Off by default: verification may skip ahead.
    #[serde(default)]
    pub sequential: bool,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            max_clock_drift: Some(DEFAULT_MAX_CLOCK_DRIFT),
            sequential: false,
        }
    }
}

impl VerifierConfig {
    /// Config with the liveness check turned off.
    pub fn without_liveness_check() -> Self {
        Self {
            max_clock_drift: None,
            ..Self::default()
        }
    }

    /// Same config, restricted to direct successors.
    pub fn with_sequential_heights(self) -> Self {
        Self {
            sequential: true,
            ..self
        }
    }

    /// Drift as a signed duration. `None` if disabled or out of range.
    pub fn clock_drift(&self) -> Option<chrono::Duration> {
        self.max_clock_drift
            .and_then(|d| chrono::Duration::from_std(d).ok())
    }
}
