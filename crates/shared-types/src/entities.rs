//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Chain**: `Header`, `Height`, `Time`
//! - **Finalization**: `Commit`, `Endorsement`, `SignedHeader`

use crate::digest::{tagged_digest, HEADER_TAG};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use std::fmt;

// =============================================================================
// PRIMITIVES
// =============================================================================

/// A 32-byte SHA-256 digest.
pub type Hash = [u8; 32];

/// All-zero digest, used for "no previous block".
pub const ZERO_HASH: Hash = [0u8; 32];

/// A 64-byte Ed25519 signature.
pub type Signature = [u8; 64];

/// A 32-byte Ed25519 public key. Doubles as the validator identity.
pub type PublicKey = [u8; 32];

/// Block height. Signed to match the wire representation; valid heights are >= 1.
pub type Height = i64;

/// Block time (UTC, nanosecond precision).
pub type Time = DateTime<Utc>;

/// Short hex rendering of a digest for log fields.
#[derive(Clone, Copy)]
pub struct ShortHex<'a>(pub &'a [u8]);

impl fmt::Display for ShortHex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.0.len().min(6);
        write!(f, "{}", hex::encode(&self.0[..len]))
    }
}

impl fmt::Debug for ShortHex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// =============================================================================
// CLUSTER A: THE CHAIN
// =============================================================================

/// Block header.
///
/// `Header::default()` is the distinguished *empty header*: every field is
/// zero and its digest is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Header {
    /// Height in the chain (1 = genesis).
    pub height: Height,
    /// Proposal time.
    pub time: Time,
    /// Digest of the previous header.
    pub last_block_id: Hash,
    /// Root of the block's data.
    pub data_hash: Hash,
    /// Identifier of the validator set that signs this header.
    pub validators_hash: Hash,
}

impl Header {
    /// Create a header from its parts.
    pub fn new(
        height: Height,
        time: Time,
        last_block_id: Hash,
        data_hash: Hash,
        validators_hash: Hash,
    ) -> Self {
        Self {
            height,
            time,
            last_block_id,
            data_hash,
            validators_hash,
        }
    }

    /// True for the all-zero header.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Canonical encoding: fixed-width big-endian fields in declaration order.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + 8 + 4 + 32 * 3);
        out.extend_from_slice(&self.height.to_be_bytes());
        out.extend_from_slice(&self.time.timestamp().to_be_bytes());
        out.extend_from_slice(&self.time.timestamp_subsec_nanos().to_be_bytes());
        out.extend_from_slice(&self.last_block_id);
        out.extend_from_slice(&self.data_hash);
        out.extend_from_slice(&self.validators_hash);
        out
    }

    /// Compute the header identity.
    ///
    /// Returns `None` for the empty header; an absent digest can never be
    /// referenced by a legitimate commit.
    pub fn hash(&self) -> Option<Hash> {
        if self.is_empty() {
            return None;
        }
        Some(tagged_digest(HEADER_TAG, [self.canonical_bytes()]))
    }

    /// Check if this is the genesis header.
    pub fn is_genesis(&self) -> bool {
        self.height == 1
    }
}

// =============================================================================
// CLUSTER B: FINALIZATION
// =============================================================================

/// A validator's signature over a header identifier.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endorsement {
    /// Declared signer identity.
    pub validator: PublicKey,
    /// Signature over `Commit::header_hash`.
    #[serde_as(as = "Bytes")]
    pub signature: Signature,
}

impl Endorsement {
    /// Create an endorsement.
    pub fn new(validator: PublicKey, signature: Signature) -> Self {
        Self {
            validator,
            signature,
        }
    }
}

/// A set of endorsements asserting that one header is finalized.
///
/// References the header by identifier only; it never embeds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Commit {
    /// Height of the referenced header.
    pub height: Height,
    /// Identifier of the referenced header.
    pub header_hash: Hash,
    /// Endorsements in signer order.
    pub endorsements: Vec<Endorsement>,
}

impl Commit {
    /// Create a commit.
    pub fn new(height: Height, header_hash: Hash, endorsements: Vec<Endorsement>) -> Self {
        Self {
            height,
            header_hash,
            endorsements,
        }
    }

    /// Exact bytes every endorsement must sign.
    pub fn sign_bytes(&self) -> &[u8] {
        &self.header_hash
    }
}

/// An untrusted (header, commit) pairing as received from the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SignedHeader {
    /// The candidate header.
    pub header: Header,
    /// The commit claiming to finalize it.
    pub commit: Commit,
}

impl SignedHeader {
    /// Pair a header with its commit.
    pub fn new(header: Header, commit: Commit) -> Self {
        Self { header, commit }
    }

    /// Height of the candidate header.
    pub fn height(&self) -> Height {
        self.header.height
    }

    /// Digest of the candidate header (absent for the empty header).
    pub fn hash(&self) -> Option<Hash> {
        self.header.hash()
    }
}
