//! In-memory validator set provider.

use crate::ports::outbound::ValidatorSetProvider;
use parking_lot::RwLock;
use shared_types::{Hash, ValidatorSet};
use std::collections::HashMap;

/// Validator sets indexed by identifier.
#[derive(Debug, Default)]
pub struct InMemoryValidatorSetProvider {
    sets: RwLock<HashMap<Hash, ValidatorSet>>,
}

impl InMemoryValidatorSetProvider {
    /// Empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a set under its own identifier; returns the identifier.
    pub fn insert(&self, set: ValidatorSet) -> Hash {
        let hash = set.hash();
        self.sets.write().insert(hash, set);
        hash
    }

    /// Number of known sets.
    pub fn len(&self) -> usize {
        self.sets.read().len()
    }

    /// True if no set is known.
    pub fn is_empty(&self) -> bool {
        self.sets.read().is_empty()
    }
}

impl ValidatorSetProvider for InMemoryValidatorSetProvider {
    fn get_validator_set(&self, hash: &Hash) -> Option<ValidatorSet> {
        self.sets.read().get(hash).cloned()
    }
}
