//! # Genesis Builder
//!
//! Creates the genesis header and the initial validator set.

use chrono::{DateTime, Utc};
use qc_13_header_verifier::{TrustedState, VerificationError};
use shared_crypto::ValidatorKey;
use shared_types::{
    tagged_digest, Commit, Endorsement, Header, SignedHeader, Time, Validator, ValidatorSet,
    GENESIS_DATA_TAG, ZERO_HASH,
};
use thiserror::Error;

/// Genesis creation errors.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// Invalid genesis configuration.
    #[error("Invalid genesis configuration: {0}")]
    InvalidConfig(String),

    /// The built header cannot seed a trusted state.
    #[error("Genesis header rejected: {0}")]
    Rejected(#[from] VerificationError),
}

/// Genesis configuration.
#[derive(Debug, Clone)]
pub struct GenesisConfig {
    /// Genesis timestamp (Unix seconds).
    pub timestamp: i64,

    /// Seeds of the initial validators' signing keys.
    ///
    /// Only development networks know the seeds; production genesis files
    /// carry public keys.
    pub validator_seeds: Vec<[u8; 32]>,

    /// Voting power of each initial validator.
    pub voting_power: u64,

    /// Extra data committed into the genesis `data_hash` (max 32 bytes).
    pub extra_data: Vec<u8>,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self::devnet(4)
    }
}

impl GenesisConfig {
    /// Development network with `validators` deterministic keys.
    pub fn devnet(validators: u8) -> Self {
        Self {
            // 2024-01-01T00:00:00Z
            timestamp: 1_704_067_200,
            validator_seeds: (1..=validators).map(|i| [i; 32]).collect(),
            voting_power: 10,
            extra_data: b"Quantum-Chain Devnet".to_vec(),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), GenesisError> {
        if self.validator_seeds.is_empty() {
            return Err(GenesisError::InvalidConfig(
                "At least one validator is required".to_string(),
            ));
        }
        if self.voting_power == 0 {
            return Err(GenesisError::InvalidConfig(
                "Voting power must be positive".to_string(),
            ));
        }
        if self.extra_data.len() > 32 {
            return Err(GenesisError::InvalidConfig(
                "Extra data exceeds 32 bytes".to_string(),
            ));
        }
        Ok(())
    }

    fn genesis_time(&self) -> Result<Time, GenesisError> {
        DateTime::<Utc>::from_timestamp(self.timestamp, 0).ok_or_else(|| {
            GenesisError::InvalidConfig(format!("Timestamp {} out of range", self.timestamp))
        })
    }
}

/// Everything a node needs to start from genesis.
pub struct Genesis {
    /// The height-1 header.
    pub header: Header,
    /// Validators trusted at genesis.
    pub validator_set: ValidatorSet,
    /// Signing keys, in `validator_seeds` order.
    pub keys: Vec<ValidatorKey>,
}

impl Genesis {
    /// Trusted state anchored at the genesis header.
    pub fn trusted_state(&self) -> Result<TrustedState, GenesisError> {
        Ok(TrustedState::new(
            self.header.clone(),
            self.validator_set.clone(),
        )?)
    }

    /// Sign `header` with every genesis key.
    ///
    /// Devnet only: stands in for the validators of a real network.
    pub fn sign(&self, header: Header) -> Option<SignedHeader> {
        let hash = header.hash()?;
        let endorsements = self
            .keys
            .iter()
            .map(|k| Endorsement::new(k.public_key(), k.sign(&hash)))
            .collect();
        let commit = Commit::new(header.height, hash, endorsements);
        Some(SignedHeader::new(header, commit))
    }

    /// Devnet successor of `parent`, `spacing` later, signed by every key.
    pub fn next_signed(&self, parent: &Header, spacing: chrono::Duration) -> Option<SignedHeader> {
        let header = Header::new(
            parent.height.checked_add(1)?,
            parent.time.checked_add_signed(spacing)?,
            parent.hash()?,
            ZERO_HASH,
            parent.validators_hash,
        );
        self.sign(header)
    }
}

impl std::fmt::Debug for Genesis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Genesis")
            .field("header", &self.header)
            .field("validators", &self.validator_set.len())
            .finish_non_exhaustive()
    }
}

/// Builder for the genesis header.
pub struct GenesisBuilder {
    config: GenesisConfig,
}

impl GenesisBuilder {
    /// Create a new builder.
    pub fn new(config: GenesisConfig) -> Self {
        Self { config }
    }

    /// Build the genesis header and validator set.
    pub fn build(self) -> Result<Genesis, GenesisError> {
        self.config.validate()?;
        let time = self.config.genesis_time()?;

        let keys: Vec<ValidatorKey> = self
            .config
            .validator_seeds
            .iter()
            .map(|seed| ValidatorKey::from_seed(*seed))
            .collect();
        let validator_set = ValidatorSet::new(
            keys.iter()
                .map(|k| Validator::new(k.public_key(), self.config.voting_power))
                .collect(),
        );

        let header = Header::new(
            1,
            time,
            ZERO_HASH,
            tagged_digest(GENESIS_DATA_TAG, [&self.config.extra_data]),
            validator_set.hash(),
        );

        Ok(Genesis {
            header,
            validator_set,
            keys,
        })
    }
}
