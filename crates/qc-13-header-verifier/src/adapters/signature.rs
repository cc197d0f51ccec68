//! Ed25519 signature adapter.

use crate::ports::outbound::SignatureVerifier;
use shared_types::{PublicKey, Signature};
use tracing::trace;

/// Strict Ed25519 verification via `shared-crypto`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ed25519SignatureVerifier;

impl SignatureVerifier for Ed25519SignatureVerifier {
    fn verify(&self, public_key: &PublicKey, message: &[u8], signature: &Signature) -> bool {
        match shared_crypto::verify_ed25519(public_key, message, signature) {
            Ok(()) => true,
            Err(e) => {
                trace!(error = %e, "Endorsement signature rejected");
                false
            }
        }
    }
}
