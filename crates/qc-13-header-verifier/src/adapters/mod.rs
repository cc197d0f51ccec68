//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the verifier's outbound port traits.

mod clock;
mod signature;
mod validator_sets;

pub use clock::{FixedClock, SystemClock};
pub use signature::Ed25519SignatureVerifier;
pub use validator_sets::InMemoryValidatorSetProvider;
