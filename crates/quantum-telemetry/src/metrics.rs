//! Prometheus metrics for the light node.
//!
//! All metrics follow the naming convention: `qc_<subsystem>_<metric>_<unit>`
//!
//! ## Metric Types
//!
//! - **Counter**: Monotonically increasing value (e.g., headers_verified_total)
//! - **Gauge**: Value that can go up or down (e.g., queue_depth)
//! - **Histogram**: Distribution of values (e.g., verification_duration_seconds)

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, linear_buckets, Counter, CounterVec, Encoder, Gauge, Histogram, Opts,
    Registry, TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // HEADER VERIFIER METRICS (Subsystem 13)
    // =========================================================================

    /// Headers accepted by the verifier
    pub static ref HEADERS_VERIFIED: Counter = Counter::new(
        "qc_verifier_headers_verified_total",
        "Total number of headers that advanced trusted state"
    ).expect("metric creation failed");

    /// Rejected (header, commit) pairs
    pub static ref VERIFICATION_REJECTIONS: CounterVec = CounterVec::new(
        Opts::new("qc_verifier_rejections_total", "Rejected header/commit pairs"),
        &["reason"]  // reason: VerificationError::reason()
    ).expect("metric creation failed");

    /// Validator set rotations accepted
    pub static ref VALIDATOR_SET_ROTATIONS: Counter = Counter::new(
        "qc_verifier_validator_set_rotations_total",
        "Total number of accepted validator set rotations"
    ).expect("metric creation failed");

    /// Current trusted height
    pub static ref TRUSTED_HEIGHT: Gauge = Gauge::new(
        "qc_verifier_trusted_height",
        "Height of the current trusted header"
    ).expect("metric creation failed");

    /// Verification duration histogram
    pub static ref VERIFICATION_DURATION: Histogram = Histogram::with_opts(
        prometheus::HistogramOpts::new(
            "qc_verifier_verification_duration_seconds",
            "Time spent verifying a header/commit pair"
        ).buckets(exponential_buckets(0.00001, 2.0, 15).expect("valid buckets"))
    ).expect("metric creation failed");

    // =========================================================================
    // CHAIN LOG METRICS (Subsystem 2)
    // =========================================================================

    /// Headers appended to the chain log
    pub static ref HEADERS_APPENDED: Counter = Counter::new(
        "qc_chainlog_headers_appended_total",
        "Total number of headers appended to the chain log"
    ).expect("metric creation failed");

    /// Rejected appends
    pub static ref APPEND_REJECTIONS: CounterVec = CounterVec::new(
        Opts::new("qc_chainlog_append_rejections_total", "Rejected chain log appends"),
        &["reason"]  // reason: ChainLogError::reason()
    ).expect("metric creation failed");

    /// Current chain height
    pub static ref CHAIN_HEIGHT: Gauge = Gauge::new(
        "qc_chainlog_chain_height",
        "Current chain log tip height"
    ).expect("metric creation failed");

    // =========================================================================
    // RANGE QUERY METRICS (Subsystem 16)
    // =========================================================================

    /// Range queries served
    pub static ref RANGE_QUERIES: Counter = Counter::new(
        "qc_query_range_queries_total",
        "Total number of range queries served"
    ).expect("metric creation failed");

    /// Headers returned per query
    pub static ref RANGE_QUERY_RESULTS: Histogram = Histogram::with_opts(
        prometheus::HistogramOpts::new(
            "qc_query_range_results",
            "Number of headers returned per range query"
        ).buckets(linear_buckets(0.0, 5.0, 11).expect("valid buckets"))
    ).expect("metric creation failed");

    // =========================================================================
    // QUEUE METRICS (shared-bus)
    // =========================================================================

    /// Items buffered between verifier and consumer
    pub static ref QUEUE_DEPTH: Gauge = Gauge::new(
        "qc_queue_depth",
        "Number of verified headers waiting in the bounded queue"
    ).expect("metric creation failed");

    /// Failed pushes by reason
    pub static ref QUEUE_PUSH_FAILURES: CounterVec = CounterVec::new(
        Opts::new("qc_queue_push_failures_total", "Failed bounded queue pushes"),
        &["reason"]  // reason: full/closed
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Idempotent: metrics already registered are skipped.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Verifier
        Box::new(HEADERS_VERIFIED.clone()),
        Box::new(VERIFICATION_REJECTIONS.clone()),
        Box::new(VALIDATOR_SET_ROTATIONS.clone()),
        Box::new(TRUSTED_HEIGHT.clone()),
        Box::new(VERIFICATION_DURATION.clone()),
        // Chain log
        Box::new(HEADERS_APPENDED.clone()),
        Box::new(APPEND_REJECTIONS.clone()),
        Box::new(CHAIN_HEIGHT.clone()),
        // Query
        Box::new(RANGE_QUERIES.clone()),
        Box::new(RANGE_QUERY_RESULTS.clone()),
        // Queue
        Box::new(QUEUE_DEPTH.clone()),
        Box::new(QUEUE_PUSH_FAILURES.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        self.histogram.observe(duration);
    }
}

/// Start timing for a histogram. Observation happens on drop.
#[macro_export]
macro_rules! time_histogram {
    ($histogram:expr) => {
        $crate::metrics::HistogramTimer::new(&$histogram)
    };
}
