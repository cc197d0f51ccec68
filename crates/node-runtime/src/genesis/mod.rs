//! # Genesis Module
//!
//! The initial trusted state of a light node.
//!
//! The genesis header is trusted by configuration, not by signatures:
//!
//! - Height: 1
//! - Parent hash: 32 zero bytes
//! - Validators hash: identifier of the initial validator set
//!
//! It seeds both the verifier's trusted state and the chain log.

pub mod builder;

pub use builder::{Genesis, GenesisBuilder, GenesisConfig, GenesisError};
