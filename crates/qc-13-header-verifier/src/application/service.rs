//! # Verification Service
//!
//! Application service: verify an untrusted pair, then hand the verified
//! header to the configured sink (chain log, bounded queue, ...).

use crate::domain::{SubmitError, VerifiedHeader};
use crate::ports::inbound::HeaderVerifierApi;
use crate::ports::outbound::VerifiedHeaderSink;
use shared_types::SignedHeader;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error};

/// Verify-then-deliver pipeline stage.
pub struct VerificationService<V: HeaderVerifierApi> {
    verifier: Arc<V>,
    sink: Arc<dyn VerifiedHeaderSink>,
    /// Held from verification through delivery: the sink sees headers in
    /// the order trust advanced.
    ordered: Mutex<()>,
}

impl<V: HeaderVerifierApi> VerificationService<V> {
    /// Create a new service.
    pub fn new(verifier: Arc<V>, sink: Arc<dyn VerifiedHeaderSink>) -> Self {
        Self {
            verifier,
            sink,
            ordered: Mutex::new(()),
        }
    }

    /// The underlying verifier.
    pub fn verifier(&self) -> &Arc<V> {
        &self.verifier
    }

    /// Verify `signed` and deliver it downstream.
    ///
    /// Trusted state advances as soon as verification passes. A delivery
    /// failure afterwards is reported as `SubmitError::Delivery`; it does not
    /// roll the trusted state back.
    ///
    /// Concurrent submissions are serialized; a slow sink delays the next
    /// verification.
    pub async fn submit(&self, signed: &SignedHeader) -> Result<VerifiedHeader, SubmitError> {
        let _ordered = self.ordered.lock().await;
        let verified = self.verifier.verify_signed(signed)?;

        match self.sink.deliver(verified.clone()).await {
            Ok(()) => {
                debug!(height = verified.height(), "Verified header delivered");
                Ok(verified)
            }
            Err(source) => {
                error!(
                    height = verified.height(),
                    error = %source,
                    "Verified header not delivered"
                );
                Err(SubmitError::Delivery {
                    height: verified.height(),
                    source,
                })
            }
        }
    }
}
