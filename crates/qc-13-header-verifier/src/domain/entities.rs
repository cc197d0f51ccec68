//! # Domain Entities

use super::errors::VerificationError;
use shared_types::{Hash, Header, Height, Time, ValidatorSet};
use std::sync::Arc;

/// The verifier's current belief: the last verified header and the
/// validator set that must endorse its successor.
///
/// Immutable once built; the verifier swaps whole snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrustedState {
    header: Header,
    header_hash: Hash,
    validator_set: Arc<ValidatorSet>,
    validator_set_hash: Hash,
}

impl TrustedState {
    /// Build a trust root (e.g. from a checkpoint).
    ///
    /// # Errors
    /// - `MalformedHeader` if `header` is the empty header
    pub fn new(header: Header, validator_set: ValidatorSet) -> Result<Self, VerificationError> {
        let header_hash = header.hash().ok_or(VerificationError::MalformedHeader {
            reason: "trusted header is empty",
        })?;
        Ok(Self::from_parts(header, header_hash, Arc::new(validator_set)))
    }

    pub(crate) fn from_parts(
        header: Header,
        header_hash: Hash,
        validator_set: Arc<ValidatorSet>,
    ) -> Self {
        let validator_set_hash = validator_set.hash();
        Self {
            header,
            header_hash,
            validator_set,
            validator_set_hash,
        }
    }

    /// Trusted height.
    pub fn height(&self) -> Height {
        self.header.height
    }

    /// Trusted header time.
    pub fn time(&self) -> Time {
        self.header.time
    }

    /// Trusted header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Digest of the trusted header.
    pub fn header_hash(&self) -> Hash {
        self.header_hash
    }

    /// Set whose quorum is required for the next transition.
    pub fn validator_set(&self) -> &Arc<ValidatorSet> {
        &self.validator_set
    }

    /// Identifier of `validator_set()`.
    pub fn validator_set_hash(&self) -> Hash {
        self.validator_set_hash
    }
}

/// A header that passed verification, as handed to downstream sinks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedHeader {
    /// The accepted header.
    pub header: Header,
    /// Its digest.
    pub hash: Hash,
    /// Distinct member power that endorsed it.
    pub endorsed_power: u128,
    /// Total power of the set that endorsed it.
    pub total_power: u128,
    /// True if the header moved trust to a new validator set.
    pub rotated: bool,
}

impl VerifiedHeader {
    /// Height of the accepted header.
    pub fn height(&self) -> Height {
        self.header.height
    }
}
