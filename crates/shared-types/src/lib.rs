//! # Shared Types Crate
//!
//! Domain entities shared by every light-node subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Header`, `Commit` and `ValidatorSet` are
//!   defined once and reused by storage, verification and queries.
//! - **Canonical Identity**: a header's identity is the SHA-256 digest of its
//!   canonical encoding. The empty header has *no* digest (`None`), which is
//!   never confused with a real digest.
//! - **Untrusted by Default**: a `SignedHeader` is only a pairing; nothing in
//!   this crate marks it as verified.

pub mod digest;
pub mod entities;
pub mod validators;

pub use digest::{tagged_digest, GENESIS_DATA_TAG, HEADER_TAG, VALIDATOR_SET_TAG};
pub use entities::*;
pub use validators::*;
