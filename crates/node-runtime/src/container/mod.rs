//! # Node Container
//!
//! Configuration for every component the light node wires together.

pub mod config;

pub use config::{ConfigError, NodeConfig, P2pConfig, QueueConfig};
