//! # Trusted State Transition
//!
//! The pure function behind `HeaderCommitVerifier::verify`: given one
//! trusted snapshot and a candidate pair, either produce the successor
//! snapshot or the first failing step.

use crate::domain::{
    invariant_direct_successor, invariant_height_advances, invariant_identity_linkage, invariant_not_from_future,
    invariant_time_advances, TrustedState, VerificationError, VerifiedHeader,
};
use crate::ports::outbound::{SignatureVerifier, ValidatorSetProvider};
use shared_types::{Commit, Header, PublicKey, Time, ValidatorSet};
use std::collections::HashSet;
use std::sync::Arc;

/// Collaborators and clock reading for one verification.
pub struct VerificationContext<'a> {
    /// Signature primitive.
    pub signatures: &'a dyn SignatureVerifier,
    /// Resolves rotated-to validator sets.
    pub validator_sets: &'a dyn ValidatorSetProvider,
    /// `now + max_clock_drift`, or `None` when the liveness check is off.
    pub latest_acceptable: Option<Time>,
    /// Require the direct child of the trusted header.
    pub sequential: bool,
}

/// Sum the voting power of distinct members of `set` that endorsed `commit`.
///
/// - Endorsements from non-members are ignored.
/// - Every member endorsement must verify over `commit.sign_bytes()`.
/// - A member endorsing more than once counts once.
///
/// # Errors
/// - `BadSignature` for the first member endorsement that does not verify
pub fn tally_endorsements(
    commit: &Commit,
    set: &ValidatorSet,
    signatures: &dyn SignatureVerifier,
) -> Result<u128, VerificationError> {
    let message = commit.sign_bytes();
    let mut counted: HashSet<PublicKey> = HashSet::with_capacity(commit.endorsements.len());
    let mut power: u128 = 0;

    for endorsement in &commit.endorsements {
        let Some(member) = set.get(&endorsement.validator) else {
            continue;
        };
        if !signatures.verify(&endorsement.validator, message, &endorsement.signature) {
            return Err(VerificationError::BadSignature {
                validator: endorsement.validator,
            });
        }
        if counted.insert(member.public_key) {
            power = power.saturating_add(u128::from(member.voting_power));
        }
    }

    Ok(power)
}

/// Run every verification step against `trusted`, short-circuiting on the
/// first failure.
///
/// Returns the successor trusted state and the record handed downstream.
pub fn verify_transition(
    trusted: &TrustedState,
    header: &Header,
    commit: &Commit,
    ctx: &VerificationContext<'_>,
) -> Result<(TrustedState, VerifiedHeader), VerificationError> {
    // 1. identity linkage
    let hash = invariant_identity_linkage(header, commit)?;
    // 2. height
    invariant_height_advances(trusted, header)?;
    if ctx.sequential {
        invariant_direct_successor(trusted, header)?;
    }
    // 3. time
    invariant_time_advances(trusted, header)?;
    if let Some(latest) = ctx.latest_acceptable {
        invariant_not_from_future(header, latest)?;
    }

    // 4. old-set quorum
    let set = trusted.validator_set();
    let endorsed = tally_endorsements(commit, set, ctx.signatures)?;
    if !set.has_quorum(endorsed) {
        return Err(VerificationError::InsufficientEndorsement {
            endorsed,
            total: set.total_voting_power(),
        });
    }

    // 5. rotation
    let rotated = header.validators_hash != trusted.validator_set_hash();
    let next_set = if rotated {
        let declared = header.validators_hash;
        let resolved = ctx
            .validator_sets
            .get_validator_set(&declared)
            .filter(|s| s.hash() == declared)
            .ok_or(VerificationError::UnknownValidatorSet { hash: declared })?;
        Arc::new(resolved)
    } else {
        Arc::clone(set)
    };

    let verified = VerifiedHeader {
        header: header.clone(),
        hash,
        endorsed_power: endorsed,
        total_power: set.total_voting_power(),
        rotated,
    };
    let next = TrustedState::from_parts(header.clone(), hash, next_set);
    Ok((next, verified))
}
