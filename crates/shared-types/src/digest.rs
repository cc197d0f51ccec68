//! # Tagged Digests
//!
//! Every identifier in the chain (header hash, validator set hash, genesis
//! data root) is SHA-256 over a domain tag followed by a canonical encoding.
//! Distinct tags keep identifiers of different kinds from colliding.

use crate::entities::Hash;
use sha2::{Digest, Sha256};

/// Domain tag for header identities.
pub const HEADER_TAG: &[u8] = b"qc/header/v1";

/// Domain tag for validator set identifiers.
pub const VALIDATOR_SET_TAG: &[u8] = b"qc/validator-set/v1";

/// Domain tag for the genesis data root.
pub const GENESIS_DATA_TAG: &[u8] = b"qc/genesis-data/v1";

/// SHA-256 of `tag` followed by each of `parts`.
///
/// Callers feed fixed-width or otherwise length-unambiguous parts.
pub fn tagged_digest<I>(tag: &[u8], parts: I) -> Hash
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut hasher = Sha256::new();
    hasher.update(tag);
    for part in parts {
        hasher.update(part.as_ref());
    }
    hasher.finalize().into()
}
