//! # Verified Header Sinks
//!
//! Two ways to hand a verified header downstream:
//!
//! - [`ChainLogSink`]: append directly into a chain log
//! - [`QueueSink`]: forward into a bounded queue for an asynchronous
//!   consumer; a full queue makes the verifier wait

use async_trait::async_trait;
use qc_02_chain_log::{ChainLog, ChainLogError};
use qc_13_header_verifier::{SinkError, VerifiedHeader, VerifiedHeaderSink};
use quantum_telemetry::{
    log_header_event, metric_inc, APPEND_REJECTIONS, CHAIN_HEIGHT, HEADERS_APPENDED,
    QUEUE_DEPTH, QUEUE_PUSH_FAILURES,
};
use shared_bus::BoundedQueue;
use shared_types::{Header, ShortHex};
use std::sync::Arc;

/// Append `header` to `log`, recording chain log metrics.
pub(crate) fn append_recorded<L: ChainLog + ?Sized>(
    log: &L,
    header: Header,
) -> Result<(), ChainLogError> {
    let height = header.height;
    match log.append(header) {
        Ok(()) => {
            metric_inc!(HEADERS_APPENDED);
            CHAIN_HEIGHT.set(height as f64);
            Ok(())
        }
        Err(e) => {
            metric_inc!(APPEND_REJECTIONS, &[e.reason()]);
            Err(e)
        }
    }
}

/// Appends verified headers to a chain log.
pub struct ChainLogSink<L: ChainLog + ?Sized> {
    log: Arc<L>,
}

impl<L: ChainLog + ?Sized> ChainLogSink<L> {
    /// Sink writing into `log`.
    pub fn new(log: Arc<L>) -> Self {
        Self { log }
    }
}

#[async_trait]
impl<L: ChainLog + ?Sized + 'static> VerifiedHeaderSink for ChainLogSink<L> {
    async fn deliver(&self, verified: VerifiedHeader) -> Result<(), SinkError> {
        let height = verified.height();
        let hash = verified.hash;
        append_recorded(self.log.as_ref(), verified.header)
            .map_err(|e| SinkError::Rejected(e.to_string()))?;
        log_header_event!(debug, "chain-log", "Verified header appended", height, ShortHex(&hash));
        Ok(())
    }
}

/// Forwards verified headers into a bounded queue.
pub struct QueueSink {
    queue: Arc<BoundedQueue<VerifiedHeader>>,
}

impl QueueSink {
    /// Sink feeding `queue`.
    pub fn new(queue: Arc<BoundedQueue<VerifiedHeader>>) -> Self {
        Self { queue }
    }
}

#[async_trait]
impl VerifiedHeaderSink for QueueSink {
    async fn deliver(&self, verified: VerifiedHeader) -> Result<(), SinkError> {
        match self.queue.push_back(verified).await {
            Ok(()) => {
                QUEUE_DEPTH.set(self.queue.len() as f64);
                Ok(())
            }
            Err(e) if e.is_closed() => {
                metric_inc!(QUEUE_PUSH_FAILURES, &["closed"]);
                Err(SinkError::Closed)
            }
            Err(e) => {
                metric_inc!(QUEUE_PUSH_FAILURES, &["capacity_exceeded"]);
                Err(SinkError::Rejected(e.error.to_string()))
            }
        }
    }
}
