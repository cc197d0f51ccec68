//! # Ports Layer
//!
//! - `inbound.rs` - Driving port (the log API exposed to other subsystems)

pub mod inbound;
