//! # Algorithms Module
//!
//! Pure verification functions. No shared state, no I/O.

pub mod block_validation;
pub mod verification;

pub use block_validation::validate_block;
pub use verification::{tally_endorsements, verify_transition, VerificationContext};
