//! # Shared Crypto - Trusted Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `signatures` | Ed25519 | Validator endorsements |
//!
//! ## Security Properties
//!
//! - **Ed25519**: Deterministic nonces, strict verification (rejects
//!   malleable and small-order encodings)
//! - **Secret hygiene**: signing seeds are zeroized on drop

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod signatures;

// Re-exports
pub use errors::CryptoError;
pub use signatures::{verify_ed25519, ValidatorKey};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
