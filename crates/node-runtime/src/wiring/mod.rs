//! # Wiring
//!
//! Connects the subsystems into the running light node pipeline and
//! exposes its metrics on the admin port.

pub mod admin;
pub mod pipeline;

pub use admin::{admin_addr, admin_router, serve_admin};
pub use pipeline::{ConsumerStats, LightNode, NodeError};
