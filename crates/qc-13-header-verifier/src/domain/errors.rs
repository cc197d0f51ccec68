//! # Domain Errors
//!
//! Every verification failure is terminal for the (header, commit) pair that
//! produced it: retrying the same pair yields the same result.

use shared_types::{Hash, Height, PublicKey, ShortHex, Time};
use thiserror::Error;

/// Reasons a (header, commit) pair is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// Header is empty or the commit does not reference it.
    #[error("Malformed header: {reason}")]
    MalformedHeader {
        /// What did not line up
        reason: &'static str,
    },

    /// Height does not advance past the trusted height.
    #[error("Stale header: height {height} <= trusted height {trusted_height}")]
    StaleHeader {
        /// Candidate height
        height: Height,
        /// Trusted height
        trusted_height: Height,
    },

    /// Sequential mode: height is not exactly trusted height + 1.
    #[error("Non-adjacent header: height {height}, expected {expected}")]
    NonAdjacentHeader {
        /// Candidate height
        height: Height,
        /// The only height accepted next
        expected: Height,
    },

    /// Sequential mode: `last_block_id` does not reference the trusted header.
    #[error("Parent mismatch at height {height}: parent {}", ShortHex(parent))]
    ParentMismatch {
        /// Candidate height
        height: Height,
        /// Declared parent digest
        parent: Hash,
    },

    /// Time does not strictly advance past the trusted time.
    #[error("Time regression at height {height}: {time} is not after trusted {trusted_time}")]
    TimeRegression {
        /// Candidate height
        height: Height,
        /// Candidate time
        time: Time,
        /// Trusted header time
        trusted_time: Time,
    },

    /// Header is timestamped too far past the local clock.
    #[error("Header from the future: {time} is after {latest_acceptable}")]
    FutureHeader {
        /// Candidate time
        time: Time,
        /// Local clock plus tolerated drift
        latest_acceptable: Time,
    },

    /// Endorsing members of the trusted set hold at most 2/3 of its power.
    #[error("Insufficient endorsement: {endorsed} of {total} voting power")]
    InsufficientEndorsement {
        /// Power of distinct, valid, member endorsements
        endorsed: u128,
        /// Total power of the trusted set
        total: u128,
    },

    /// A member's signature does not verify over the commit's header hash.
    #[error("Bad signature from validator {}", ShortHex(validator))]
    BadSignature {
        /// Declared signer
        validator: PublicKey,
    },

    /// The header rotates to a validator set that cannot be resolved.
    #[error("Unknown validator set {}", ShortHex(hash))]
    UnknownValidatorSet {
        /// Declared set identifier
        hash: Hash,
    },
}

impl VerificationError {
    /// Stable label for metrics and logs.
    pub fn reason(&self) -> &'static str {
        match self {
            VerificationError::MalformedHeader { .. } => "malformed_header",
            VerificationError::StaleHeader { .. } => "stale_header",
            VerificationError::NonAdjacentHeader { .. } => "non_adjacent_header",
            VerificationError::ParentMismatch { .. } => "parent_mismatch",
            VerificationError::TimeRegression { .. } => "time_regression",
            VerificationError::FutureHeader { .. } => "future_header",
            VerificationError::InsufficientEndorsement { .. } => "insufficient_endorsement",
            VerificationError::BadSignature { .. } => "bad_signature",
            VerificationError::UnknownValidatorSet { .. } => "unknown_validator_set",
        }
    }
}

/// Failures delivering a verified header downstream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// Downstream has shut down.
    #[error("Sink closed")]
    Closed,

    /// Downstream refused the header.
    #[error("Sink rejected header: {0}")]
    Rejected(String),
}

/// Result of submitting a pair to the verification service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The pair was rejected; trusted state is unchanged.
    #[error(transparent)]
    Verification(#[from] VerificationError),

    /// The pair was accepted (trusted state advanced) but could not be
    /// delivered downstream.
    #[error("Verified header {height} not delivered: {source}")]
    Delivery {
        /// Height of the accepted header
        height: Height,
        /// Sink failure
        source: SinkError,
    },
}
