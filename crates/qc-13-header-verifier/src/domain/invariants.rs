//! # Domain Invariants
//!
//! Single-step predicates over an immutable trusted snapshot. Each returns
//! the error for its step or `Ok`.

use super::entities::TrustedState;
use super::errors::VerificationError;
use shared_types::{Commit, Hash, Header, Time};

/// Step 1: the commit must reference exactly this, non-empty, header.
///
/// Returns the header digest on success.
pub fn invariant_identity_linkage(
    header: &Header,
    commit: &Commit,
) -> Result<Hash, VerificationError> {
    let hash = header.hash().ok_or(VerificationError::MalformedHeader {
        reason: "header is empty",
    })?;
    if commit.header_hash != hash {
        return Err(VerificationError::MalformedHeader {
            reason: "commit references a different header",
        });
    }
    if commit.height != header.height {
        return Err(VerificationError::MalformedHeader {
            reason: "commit height does not match header height",
        });
    }
    Ok(hash)
}

/// Step 2: height strictly advances.
pub fn invariant_height_advances(
    trusted: &TrustedState,
    header: &Header,
) -> Result<(), VerificationError> {
    if header.height <= trusted.height() {
        return Err(VerificationError::StaleHeader {
            height: header.height,
            trusted_height: trusted.height(),
        });
    }
    Ok(())
}

/// Sequential mode: `header` is the direct child of the trusted header.
pub fn invariant_direct_successor(
    trusted: &TrustedState,
    header: &Header,
) -> Result<(), VerificationError> {
    let expected = trusted.height().saturating_add(1);
    if header.height != expected {
        return Err(VerificationError::NonAdjacentHeader {
            height: header.height,
            expected,
        });
    }
    if header.last_block_id != trusted.header_hash() {
        return Err(VerificationError::ParentMismatch {
            height: header.height,
            parent: header.last_block_id,
        });
    }
    Ok(())
}

/// Step 3: time strictly advances, compared as absolute timestamps.
pub fn invariant_time_advances(
    trusted: &TrustedState,
    header: &Header,
) -> Result<(), VerificationError> {
    if header.time <= trusted.time() {
        return Err(VerificationError::TimeRegression {
            height: header.height,
            time: header.time,
            trusted_time: trusted.time(),
        });
    }
    Ok(())
}

/// Liveness: header is not later than `latest_acceptable`.
pub fn invariant_not_from_future(
    header: &Header,
    latest_acceptable: Time,
) -> Result<(), VerificationError> {
    if header.time > latest_acceptable {
        return Err(VerificationError::FutureHeader {
            time: header.time,
            latest_acceptable,
        });
    }
    Ok(())
}
