//! # Outbound Ports
//!
//! Traits for collaborators the verifier depends on.

use crate::domain::{SinkError, VerifiedHeader};
use async_trait::async_trait;
use shared_types::{Hash, PublicKey, Signature, Time, ValidatorSet};

/// Resolves a validator set by identifier.
pub trait ValidatorSetProvider: Send + Sync {
    /// The set whose `hash()` is `hash`, if known.
    fn get_validator_set(&self, hash: &Hash) -> Option<ValidatorSet>;
}

/// Wall clock. Only used for the optional liveness check.
pub trait Clock: Send + Sync {
    /// Current time.
    fn now(&self) -> Time;
}

/// Signature primitive.
pub trait SignatureVerifier: Send + Sync {
    /// True iff `signature` by `public_key` covers exactly `message`.
    fn verify(&self, public_key: &PublicKey, message: &[u8], signature: &Signature) -> bool;
}

/// Downstream consumer of verified headers.
#[async_trait]
pub trait VerifiedHeaderSink: Send + Sync {
    /// Deliver one verified header. May wait for back-pressure to clear.
    async fn deliver(&self, header: VerifiedHeader) -> Result<(), SinkError>;
}
