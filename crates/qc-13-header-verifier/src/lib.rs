//! # QC-13 Header Commit Verifier
//!
//! Decides whether an untrusted (header, commit) pair may move the node's
//! trusted state forward.
//!
//! **Subsystem ID:** 13  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Verification Pipeline
//!
//! Every step must pass; the first failure short-circuits.
//!
//! | Step | Check | Error |
//! |------|-------|-------|
//! | 1 | `commit.header_hash == digest(header)`, header not empty | `MalformedHeader` |
//! | 2 | `header.height > trusted.height` | `StaleHeader` |
//! | 2b | sequential mode: height is `trusted + 1`, parent is the trusted header | `NonAdjacentHeader` / `ParentMismatch` |
//! | 3 | `header.time > trusted.time` (strict, absolute) | `TimeRegression` |
//! | 3b | `header.time <= now + max_clock_drift` (optional) | `FutureHeader` |
//! | 4 | endorsements from the trusted set carry > 2/3 power | `InsufficientEndorsement` / `BadSignature` |
//! | 5 | declared rotation resolves to a known set | `UnknownValidatorSet` |
//!
//! Only then is the trusted state replaced, atomically.
//!
//! ## Concurrency
//!
//! The trusted state is an immutable `Arc<TrustedState>` snapshot. A
//! verification runs the pure checks against its snapshot and installs the
//! result only if the snapshot is still current (compare-and-swap); otherwise
//! it re-runs against the newer state. No caller ever observes a half-applied
//! transition. `VerificationService` additionally serializes verify-then-
//! deliver so sinks see headers in the order trust advanced.
//!
//! ## Module Structure
//!
//! ```text
//! qc-13-header-verifier/
//! ├── domain/          # TrustedState, VerifiedHeader, step predicates, errors
//! ├── algorithms/      # Pure transition function, block-vs-signed-header check
//! ├── ports/           # API trait (inbound) + dependency traits (outbound)
//! ├── adapters/        # Clocks, validator-set provider, Ed25519 verifier
//! ├── application/     # HeaderCommitVerifier (CAS), VerificationService
//! └── config.rs        # VerifierConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-exports
pub use adapters::{Ed25519SignatureVerifier, FixedClock, InMemoryValidatorSetProvider, SystemClock};
pub use algorithms::{tally_endorsements, validate_block, verify_transition, VerificationContext};
pub use application::{HeaderCommitVerifier, VerificationService};
pub use config::VerifierConfig;
pub use domain::{SinkError, SubmitError, TrustedState, VerificationError, VerifiedHeader};
pub use ports::{Clock, HeaderVerifierApi, SignatureVerifier, ValidatorSetProvider, VerifiedHeaderSink};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
