//! # Inbound Ports
//!
//! API trait defining what the verifier exposes to RPC/CLI callers.

use crate::domain::{TrustedState, VerificationError, VerifiedHeader};
use shared_types::{Commit, Header, Height, SignedHeader};
use std::sync::Arc;

/// Header verifier API - inbound port.
pub trait HeaderVerifierApi: Send + Sync {
    /// Verify `(header, commit)` and, on success, advance trusted state.
    ///
    /// All-or-nothing: on error the trusted state is untouched.
    fn verify(&self, header: &Header, commit: &Commit) -> Result<VerifiedHeader, VerificationError>;

    /// Verify a paired signed header.
    fn verify_signed(&self, signed: &SignedHeader) -> Result<VerifiedHeader, VerificationError> {
        self.verify(&signed.header, &signed.commit)
    }

    /// Current trusted snapshot.
    fn trusted_state(&self) -> Arc<TrustedState>;

    /// Current trusted height.
    fn trusted_height(&self) -> Height {
        self.trusted_state().height()
    }
}
