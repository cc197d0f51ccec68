//! # Node Runtime Library
//!
//! This library exposes the internal modules of the node runtime for testing.
//! The main entry point is the `main.rs` binary.
//!
//! ## Modular Structure
//!
//! - `container/` - Node configuration with secure defaults
//! - `genesis/` - Genesis header and initial validator set
//! - `adapters/` - Verified-header sinks connecting subsystems
//! - `wiring/` - The verifier → queue → chain log pipeline and admin endpoint

#![warn(missing_docs)]
#![allow(clippy::type_complexity)]

pub mod adapters;
pub mod container;
pub mod genesis;
pub mod wiring;

pub use container::{ConfigError, NodeConfig};
pub use genesis::{Genesis, GenesisBuilder, GenesisConfig, GenesisError};
pub use wiring::{ConsumerStats, LightNode, NodeError};
