//! Shared fixtures for unit tests.

use crate::adapters::InMemoryValidatorSetProvider;
use crate::domain::TrustedState;
use chrono::{TimeZone, Utc};
use shared_crypto::ValidatorKey;
use shared_types::{Commit, Endorsement, Header, Height, SignedHeader, Time, Validator, ValidatorSet};
use std::sync::Arc;

/// Voting power given to every fixture validator.
pub const POWER: u64 = 10;

pub fn time(y: i32, m: u32, d: u32) -> Time {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

/// A validator set of deterministic keys plus a provider that knows it.
pub struct Fixture {
    pub keys: Vec<ValidatorKey>,
    pub set: ValidatorSet,
    pub provider: Arc<InMemoryValidatorSetProvider>,
}

impl Fixture {
    /// `n` validators seeded from `seed_base + i`.
    pub fn new(n: u8, seed_base: u8) -> Self {
        let keys: Vec<ValidatorKey> = (0..n)
            .map(|i| ValidatorKey::from_seed([seed_base.wrapping_add(i); 32]))
            .collect();
        let set = ValidatorSet::new(
            keys.iter()
                .map(|k| Validator::new(k.public_key(), POWER))
                .collect(),
        );
        let provider = Arc::new(InMemoryValidatorSetProvider::new());
        provider.insert(set.clone());
        Self {
            keys,
            set,
            provider,
        }
    }

    pub fn header(&self, height: Height, time: Time) -> Header {
        Header::new(height, time, [0x11; 32], [0x22; 32], self.set.hash())
    }

    /// Commit for `header` endorsed by the keys at `signers`.
    pub fn commit_by(&self, header: &Header, signers: &[usize]) -> Commit {
        let hash = header.hash().unwrap();
        let endorsements = signers
            .iter()
            .map(|&i| Endorsement::new(self.keys[i].public_key(), self.keys[i].sign(&hash)))
            .collect();
        Commit::new(header.height, hash, endorsements)
    }

    /// Commit endorsed by every key.
    pub fn commit(&self, header: &Header) -> Commit {
        let all: Vec<usize> = (0..self.keys.len()).collect();
        self.commit_by(header, &all)
    }

    pub fn signed(&self, height: Height, time: Time) -> SignedHeader {
        let header = self.header(height, time);
        let commit = self.commit(&header);
        SignedHeader::new(header, commit)
    }

    pub fn trusted(&self, height: Height, time: Time) -> TrustedState {
        TrustedState::new(self.header(height, time), self.set.clone()).unwrap()
    }
}
