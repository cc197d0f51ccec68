//! # Application Layer
//!
//! - `verifier` - `HeaderCommitVerifier`, the trusted-state owner
//! - `service` - verify-then-deliver orchestration

mod service;
mod verifier;

pub use service::VerificationService;
pub use verifier::HeaderCommitVerifier;
