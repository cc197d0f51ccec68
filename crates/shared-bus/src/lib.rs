//! # Shared Bus - Bounded Hand-off Between Node Components
//!
//! Verified headers, gossip items and other work flow from producers to
//! consumers through a [`BoundedQueue`]. Capacity is fixed at construction and
//! is enforced structurally: a full queue either applies back-pressure
//! (`push_back` waits) or reports [`QueueError::CapacityExceeded`]
//! (`try_push_back`). It never grows, truncates or overwrites.
//!
//! ```text
//! ┌──────────────┐   push_back()   ┌──────────────┐   pop_front()   ┌──────────────┐
//! │   Producer   │ ──────────────→ │ BoundedQueue │ ──────────────→ │   Consumer   │
//! └──────────────┘  (waits if full)└──────────────┘ (waits if empty)└──────────────┘
//!                                        │
//!                                    close() releases every waiter
//! ```

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod errors;
pub mod queue;

// Re-export main types
pub use errors::{PushError, QueueError};
pub use queue::BoundedQueue;

/// Default queue capacity for verified-header hand-off.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1000;
