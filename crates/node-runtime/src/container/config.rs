//! # Node Configuration
//!
//! Unified configuration for all components and runtime parameters.
//!
//! ## Security Requirements
//!
//! - `p2p.allow_duplicate_ip` defaults to `false` and MUST stay `false` in
//!   production (one peer per IP limits cheap eclipse attempts)
//! - Queue capacity and range width are always bounded; zero is rejected
//! - The verifier runs in sequential mode: the chain log is dense, so trust
//!   must never advance past a height the log cannot append

use qc_13_header_verifier::VerifierConfig;
use qc_16_range_query::QueryConfig;
use quantum_telemetry::TelemetryConfig;
use shared_bus::DEFAULT_QUEUE_CAPACITY;
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Complete node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Peer-to-peer configuration.
    pub p2p: P2pConfig,
    /// Header verifier configuration.
    pub verifier: VerifierConfig,
    /// Verifier → chain log queue configuration.
    pub queue: QueueConfig,
    /// Range query configuration.
    pub query: QueryConfig,
    /// Logging configuration.
    pub telemetry: TelemetryConfig,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            p2p: P2pConfig::default(),
            verifier: VerifierConfig::default().with_sequential_heights(),
            queue: QueueConfig::default(),
            query: QueryConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl NodeConfig {
    /// Defaults overridden by environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `QC_P2P_PORT`, `QC_MAX_PEERS`
    /// - `QC_ALLOW_DUPLICATE_IP` (`true`/`1` to enable)
    /// - `QC_MAX_CLOCK_DRIFT_SECS` (`0` disables the liveness check)
    /// - `QC_QUEUE_CAPACITY`
    /// - `QC_MAX_RANGE_WIDTH`
    /// - `QC_METRICS_PORT` (`0` disables the metrics endpoint)
    /// - telemetry variables, see `TelemetryConfig::from_env`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading from an arbitrary source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self {
            telemetry: TelemetryConfig::from_lookup(&lookup),
            ..Self::default()
        };

        if let Some(port) = parse_var(&lookup, "QC_P2P_PORT")? {
            config.p2p.p2p_port = port;
        }
        if let Some(max_peers) = parse_var(&lookup, "QC_MAX_PEERS")? {
            config.p2p.max_peers = max_peers;
        }
        if let Some(raw) = lookup("QC_ALLOW_DUPLICATE_IP") {
            config.p2p.allow_duplicate_ip = raw.eq_ignore_ascii_case("true") || raw == "1";
        }
        if let Some(secs) = parse_var::<u64>(&lookup, "QC_MAX_CLOCK_DRIFT_SECS")? {
            config.verifier.max_clock_drift = (secs > 0).then(|| Duration::from_secs(secs));
        }
        if let Some(capacity) = parse_var(&lookup, "QC_QUEUE_CAPACITY")? {
            config.queue.capacity = capacity;
        }
        if let Some(width) = parse_var(&lookup, "QC_MAX_RANGE_WIDTH")? {
            config.query.max_range_width = width;
        }

        config.validate()?;
        Ok(config)
    }

    /// Structural checks every configuration must pass.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue.capacity == 0 {
            return Err(ConfigError::ZeroQueueCapacity);
        }
        if self.query.max_range_width == 0 {
            return Err(ConfigError::ZeroRangeWidth);
        }
        if !self.verifier.sequential {
            return Err(ConfigError::NonSequentialVerifier);
        }
        Ok(())
    }

    /// Validate configuration for production readiness.
    ///
    /// # Returns
    ///
    /// Returns `Err` if:
    /// - any structural check fails
    /// - duplicate IPs are allowed
    pub fn validate_for_production(&self) -> Result<(), ConfigError> {
        self.validate()?;
        if self.p2p.allow_duplicate_ip {
            return Err(ConfigError::DuplicateIpAllowed);
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(var)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { var, value })
        })
        .transpose()
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Duplicate peer IPs are allowed.
    #[error(
        "SECURITY VIOLATION: allow_duplicate_ip is enabled. \
         Unset QC_ALLOW_DUPLICATE_IP for production nodes."
    )]
    DuplicateIpAllowed,

    /// Queue capacity is zero.
    #[error("queue capacity must be at least 1")]
    ZeroQueueCapacity,

    /// Range width is zero.
    #[error("max_range_width must be at least 1")]
    ZeroRangeWidth,

    /// The verifier may skip heights the dense chain log cannot append.
    #[error("verifier must run in sequential mode to feed the chain log")]
    NonSequentialVerifier,

    /// An environment variable did not parse.
    #[error("invalid value {value:?} for {var}")]
    InvalidValue {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
    },
}

/// Peer-to-peer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct P2pConfig {
    /// P2P listening port.
    pub p2p_port: u16,
    /// Maximum connected peers.
    pub max_peers: usize,
    /// Accept several peers from the same IP address.
    pub allow_duplicate_ip: bool,
}

impl Default for P2pConfig {
    fn default() -> Self {
        Self {
            p2p_port: 26656,
            max_peers: 50,
            allow_duplicate_ip: false,
        }
    }
}

/// Bounded queue configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueConfig {
    /// Maximum verified headers buffered before the verifier waits.
    pub capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}
