//! # Light Node Pipeline
//!
//! ```text
//! submit(SignedHeader)
//!        │
//!        ↓
//! HeaderCommitVerifier ──QueueSink──→ BoundedQueue ──consumer task──→ ChainLog
//!                                                                        │
//!                                               RangeQueryService ←──────┘
//! ```
//!
//! The chain log is dense, so the node runs the verifier in sequential mode:
//! only the direct child of the trusted header is accepted, and trust never
//! moves past a height the log cannot append. The verification service
//! queues headers in the order trust advanced. A header the log still
//! refuses is counted as dropped.
//!
//! ## Shutdown Sequence
//!
//! 1. Close the queue (new submissions fail with `SinkError::Closed`)
//! 2. Wait for the consumer task to observe the close
//! 3. Append whatever was still queued

use crate::adapters::sinks::append_recorded;
use crate::adapters::QueueSink;
use crate::container::{ConfigError, NodeConfig};
use crate::genesis::{Genesis, GenesisError};
use qc_02_chain_log::{ChainLog, ChainLogError, InMemoryChainLog};
use qc_13_header_verifier::{
    HeaderCommitVerifier, HeaderVerifierApi, InMemoryValidatorSetProvider, SubmitError,
    VerificationService, VerifiedHeader,
};
use qc_16_range_query::{ChainInfo, QueryConfigError, RangeQueryService};
use quantum_telemetry::{
    log_event, log_header_event, metric_inc, metric_observe, subsystem_span, time_histogram,
    HEADERS_VERIFIED,
    QUEUE_DEPTH, RANGE_QUERIES, RANGE_QUERY_RESULTS, TRUSTED_HEIGHT, VALIDATOR_SET_ROTATIONS,
    VERIFICATION_DURATION, VERIFICATION_REJECTIONS,
};
use shared_bus::{BoundedQueue, QueueError};
use shared_types::{Hash, Header, Height, ShortHex, SignedHeader, ValidatorSet};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Node startup errors.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Genesis could not be built or trusted.
    #[error(transparent)]
    Genesis(#[from] GenesisError),

    /// The chain log refused the genesis header.
    #[error("Failed to store genesis header: {0}")]
    GenesisStore(#[from] ChainLogError),

    /// Queue could not be created.
    #[error(transparent)]
    Queue(#[from] QueueError),

    /// Query service could not be created.
    #[error(transparent)]
    Query(#[from] QueryConfigError),

    /// The consumer task panicked or was cancelled.
    #[error("Consumer task failed: {0}")]
    Consumer(String),
}

/// What the consumer did with the verified headers it received.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConsumerStats {
    /// Headers appended to the chain log.
    pub appended: u64,
    /// Headers the chain log refused.
    pub dropped: u64,
}

impl ConsumerStats {
    fn record(&mut self, log: &InMemoryChainLog, verified: VerifiedHeader) {
        let height = verified.height();
        let hash = verified.hash;
        match append_recorded(log, verified.header) {
            Ok(()) => {
                self.appended += 1;
                log_header_event!(debug, "pipeline", "Header appended", height, ShortHex(&hash));
            }
            Err(e) => {
                self.dropped += 1;
                log_header_event!(
                    warn,
                    "pipeline",
                    "Verified header not appended",
                    height,
                    ShortHex(&hash),
                    reason = e.reason(),
                    error = %e
                );
            }
        }
    }
}

/// A running light node.
pub struct LightNode {
    service: VerificationService<HeaderCommitVerifier>,
    validator_sets: Arc<InMemoryValidatorSetProvider>,
    queue: Arc<BoundedQueue<VerifiedHeader>>,
    chain_log: Arc<InMemoryChainLog>,
    queries: RangeQueryService<InMemoryChainLog>,
    consumer: JoinHandle<ConsumerStats>,
}

impl LightNode {
    /// Seed every component from `genesis` and spawn the consumer task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: &NodeConfig, genesis: &Genesis) -> Result<Self, NodeError> {
        config.validate()?;
        let trusted = genesis.trusted_state()?;

        let chain_log = Arc::new(InMemoryChainLog::new());
        append_recorded(chain_log.as_ref(), genesis.header.clone())?;

        let validator_sets = Arc::new(InMemoryValidatorSetProvider::new());
        validator_sets.insert(genesis.validator_set.clone());

        let verifier = Arc::new(HeaderCommitVerifier::with_defaults(
            trusted,
            config.verifier.clone(),
            validator_sets.clone(),
        ));
        TRUSTED_HEIGHT.set(verifier.trusted_height() as f64);

        let queue = Arc::new(BoundedQueue::new(config.queue.capacity)?);
        let service = VerificationService::new(verifier, Arc::new(QueueSink::new(queue.clone())));
        let queries = RangeQueryService::from_config(chain_log.clone(), &config.query)?;

        let consumer = tokio::spawn(run_consumer(queue.clone(), chain_log.clone()));

        log_event!(
            info,
            "pipeline",
            "Light node started",
            trusted_height = genesis.header.height,
            validators = genesis.validator_set.len(),
            queue_capacity = queue.capacity()
        );

        Ok(Self {
            service,
            validator_sets,
            queue,
            chain_log,
            queries,
            consumer,
        })
    }

    /// Verify an untrusted signed header and queue it for the chain log.
    ///
    /// Waits while the queue is full.
    pub async fn submit(&self, signed: &SignedHeader) -> Result<VerifiedHeader, SubmitError> {
        let result = {
            let _timer = time_histogram!(VERIFICATION_DURATION);
            self.service
                .submit(signed)
                .instrument(subsystem_span!("submit", subsystem = "pipeline", height = signed.height()))
                .await
        };

        match &result {
            Ok(verified) => {
                metric_inc!(HEADERS_VERIFIED);
                if verified.rotated {
                    metric_inc!(VALIDATOR_SET_ROTATIONS);
                }
                TRUSTED_HEIGHT.set(verified.height() as f64);
            }
            Err(SubmitError::Verification(e)) => {
                metric_inc!(VERIFICATION_REJECTIONS, &[e.reason()]);
            }
            Err(SubmitError::Delivery { height, .. }) => {
                // Trust advanced even though the header was not queued.
                metric_inc!(HEADERS_VERIFIED);
                TRUSTED_HEIGHT.set(*height as f64);
            }
        }
        result
    }

    /// Make a validator set resolvable for rotations.
    pub fn register_validator_set(&self, set: ValidatorSet) -> Hash {
        self.validator_sets.insert(set)
    }

    /// Headers in the normalized `[min_height, max_height]`.
    pub fn query_range(&self, min_height: Height, max_height: Height) -> Vec<Header> {
        self.chain_info(min_height, max_height).headers
    }

    /// Chain tip plus the normalized window.
    pub fn chain_info(&self, min_height: Height, max_height: Height) -> ChainInfo {
        let info = self.queries.chain_info(min_height, max_height);
        metric_inc!(RANGE_QUERIES);
        metric_observe!(RANGE_QUERY_RESULTS, info.headers.len() as f64);
        info
    }

    /// Height of the verifier's trusted state.
    pub fn trusted_height(&self) -> Height {
        self.service.verifier().trusted_height()
    }

    /// Height of the chain log tip.
    pub fn chain_height(&self) -> Height {
        self.chain_log.latest_height()
    }

    /// Verified headers waiting for the consumer.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Close the queue, stop the consumer and flush what was still queued.
    pub async fn shutdown(self) -> Result<ConsumerStats, NodeError> {
        log_event!(info, "pipeline", "Initiating graceful shutdown", queued = self.queue.len());
        self.queue.close();

        let mut stats = self
            .consumer
            .await
            .map_err(|e| NodeError::Consumer(e.to_string()))?;

        for verified in self.queue.drain() {
            stats.record(&self.chain_log, verified);
        }
        QUEUE_DEPTH.set(0.0);

        log_event!(
            info,
            "pipeline",
            "Shutdown complete",
            appended = stats.appended,
            dropped = stats.dropped,
            chain_height = self.chain_log.latest_height()
        );
        Ok(stats)
    }
}

async fn run_consumer(
    queue: Arc<BoundedQueue<VerifiedHeader>>,
    chain_log: Arc<InMemoryChainLog>,
) -> ConsumerStats {
    let mut stats = ConsumerStats::default();
    while let Ok(verified) = queue.pop_front().await {
        QUEUE_DEPTH.set(queue.len() as f64);
        stats.record(&chain_log, verified);
    }
    log_event!(debug, "pipeline", "Consumer stopped", appended = stats.appended);
    stats
}
