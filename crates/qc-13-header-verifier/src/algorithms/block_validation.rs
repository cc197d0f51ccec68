//! # Block vs Signed Header
//!
//! Check that a header fetched from an untrusted full node is the header a
//! (separately verified) signed header vouches for. Comparing heights or
//! structure alone is not enough: two headers at the same height that differ
//! in any field, time included, must not match.

use crate::domain::VerificationError;
use shared_types::{Header, SignedHeader};

/// Validate `block` against `signed`.
///
/// # Errors
/// - `MalformedHeader` if heights differ, the signed header is empty, or the
///   digests differ
pub fn validate_block(block: &Header, signed: &SignedHeader) -> Result<(), VerificationError> {
    if block.height != signed.height() {
        return Err(VerificationError::MalformedHeader {
            reason: "block height does not match signed header height",
        });
    }

    let Some(expected) = signed.hash() else {
        return Err(VerificationError::MalformedHeader {
            reason: "signed header is empty",
        });
    };

    if block.hash() != Some(expected) {
        return Err(VerificationError::MalformedHeader {
            reason: "block does not match signed header",
        });
    }

    Ok(())
}
