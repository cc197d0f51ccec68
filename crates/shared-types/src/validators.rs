//! Validator set entity
//!
//! A weighted set of identities authorized to endorse headers at some point
//! in the chain's history. Members are kept sorted by public key so that the
//! set identifier does not depend on insertion order.

use crate::digest::{tagged_digest, VALIDATOR_SET_TAG};
use crate::entities::{Hash, PublicKey};
use serde::{Deserialize, Serialize};

/// Validator with voting weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    pub public_key: PublicKey,
    pub voting_power: u64,
}

impl Validator {
    pub fn new(public_key: PublicKey, voting_power: u64) -> Self {
        Self {
            public_key,
            voting_power,
        }
    }
}

/// Sorted, de-duplicated set of validators.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorSet {
    validators: Vec<Validator>,
    total_voting_power: u128,
}

impl ValidatorSet {
    /// Build a set. Later duplicates of the same key are ignored; members
    /// with zero voting power are dropped.
    pub fn new(validators: Vec<Validator>) -> Self {
        let mut validators: Vec<Validator> = validators
            .into_iter()
            .filter(|v| v.voting_power > 0)
            .collect();
        // Stable sort keeps the first occurrence of a duplicate key in front.
        validators.sort_by(|a, b| a.public_key.cmp(&b.public_key));
        validators.dedup_by(|later, earlier| later.public_key == earlier.public_key);

        let total_voting_power = validators
            .iter()
            .map(|v| u128::from(v.voting_power))
            .sum();

        Self {
            validators,
            total_voting_power,
        }
    }

    /// Identifier of this set (what headers carry as `validators_hash`).
    pub fn hash(&self) -> Hash {
        let members = self.validators.iter().map(|v| {
            let mut member = [0u8; 40];
            member[..32].copy_from_slice(&v.public_key);
            member[32..].copy_from_slice(&v.voting_power.to_be_bytes());
            member
        });
        tagged_digest(VALIDATOR_SET_TAG, members)
    }

    /// Look up a member by identity.
    pub fn get(&self, public_key: &PublicKey) -> Option<&Validator> {
        self.validators
            .binary_search_by(|v| v.public_key.cmp(public_key))
            .ok()
            .map(|idx| &self.validators[idx])
    }

    /// Check membership.
    pub fn contains(&self, public_key: &PublicKey) -> bool {
        self.get(public_key).is_some()
    }

    /// Sum of all voting power.
    pub fn total_voting_power(&self) -> u128 {
        self.total_voting_power
    }

    /// True if `power` is strictly more than two thirds of the total.
    ///
    /// An empty set never reaches quorum.
    pub fn has_quorum(&self, power: u128) -> bool {
        // u64 powers summed into u128 cannot overflow when tripled.
        power.saturating_mul(3) > self.total_voting_power.saturating_mul(2)
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Validator> {
        self.validators.iter()
    }
}
