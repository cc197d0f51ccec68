//! # Header Commit Verifier
//!
//! Owns the trusted state and serializes its transitions.

use crate::adapters::{Ed25519SignatureVerifier, SystemClock};
use crate::algorithms::{verify_transition, VerificationContext};
use crate::config::VerifierConfig;
use crate::domain::{TrustedState, VerificationError, VerifiedHeader};
use crate::ports::inbound::HeaderVerifierApi;
use crate::ports::outbound::{Clock, SignatureVerifier, ValidatorSetProvider};
use parking_lot::RwLock;
use shared_types::{Commit, Header, ShortHex};
use std::sync::Arc;
use tracing::{debug, warn};

/// Verifier instance holding one trusted state.
///
/// Transitions are compare-and-swap on the `Arc` snapshot: the checks run
/// without the lock, the swap happens only if no other verification
/// committed in between.
pub struct HeaderCommitVerifier {
    state: RwLock<Arc<TrustedState>>,
    config: VerifierConfig,
    validator_sets: Arc<dyn ValidatorSetProvider>,
    signatures: Arc<dyn SignatureVerifier>,
    clock: Arc<dyn Clock>,
}

impl HeaderCommitVerifier {
    /// Create a verifier from explicit collaborators.
    pub fn new(
        trusted: TrustedState,
        config: VerifierConfig,
        validator_sets: Arc<dyn ValidatorSetProvider>,
        signatures: Arc<dyn SignatureVerifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            state: RwLock::new(Arc::new(trusted)),
            config,
            validator_sets,
            signatures,
            clock,
        }
    }

    /// Ed25519 signatures and the system clock.
    pub fn with_defaults(
        trusted: TrustedState,
        config: VerifierConfig,
        validator_sets: Arc<dyn ValidatorSetProvider>,
    ) -> Self {
        Self::new(
            trusted,
            config,
            validator_sets,
            Arc::new(Ed25519SignatureVerifier),
            Arc::new(SystemClock),
        )
    }

    /// Active configuration.
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    fn snapshot(&self) -> Arc<TrustedState> {
        self.state.read().clone()
    }

    fn latest_acceptable(&self) -> Option<shared_types::Time> {
        let drift = self.config.clock_drift()?;
        self.clock.now().checked_add_signed(drift)
    }
}

impl HeaderVerifierApi for HeaderCommitVerifier {
    fn verify(&self, header: &Header, commit: &Commit) -> Result<VerifiedHeader, VerificationError> {
        let ctx = VerificationContext {
            signatures: self.signatures.as_ref(),
            validator_sets: self.validator_sets.as_ref(),
            latest_acceptable: self.latest_acceptable(),
            sequential: self.config.sequential,
        };

        loop {
            let snapshot = self.snapshot();

            let (next, verified) = match verify_transition(&snapshot, header, commit, &ctx) {
                Ok(transition) => transition,
                Err(e) => {
                    warn!(
                        height = header.height,
                        trusted_height = snapshot.height(),
                        reason = e.reason(),
                        error = %e,
                        "Header rejected"
                    );
                    return Err(e);
                }
            };

            let mut state = self.state.write();
            if Arc::ptr_eq(&*state, &snapshot) {
                *state = Arc::new(next);
                drop(state);
                debug!(
                    height = verified.height(),
                    hash = %ShortHex(&verified.hash),
                    endorsed = verified.endorsed_power,
                    total = verified.total_power,
                    rotated = verified.rotated,
                    "Trusted state advanced"
                );
                return Ok(verified);
            }
            // Another verification committed first; re-check against it.
        }
    }

    fn trusted_state(&self) -> Arc<TrustedState> {
        self.snapshot()
    }
}
