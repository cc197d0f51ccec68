//! # Bounded Queue
//!
//! Fixed-capacity FIFO shared by many producers and many consumers.
//!
//! ## Guarantees
//!
//! - `0 <= len <= capacity` at every observation point.
//! - FIFO with respect to *completed* pushes and pops.
//! - `close()` is idempotent and releases every parked producer and
//!   consumer with [`QueueError::Closed`]; nothing deadlocks.
//!
//! Waiters park on [`tokio::sync::Notify`]. Each waiter registers its
//! interest (`Notified::enable`) *before* inspecting the state, so a wake-up
//! issued between the check and the `.await` is never lost.

use crate::errors::{PushError, QueueError};
use parking_lot::Mutex;
use std::collections::VecDeque;
use tokio::sync::Notify;
use tracing::debug;

/// Upper bound on the slots reserved up front; larger queues grow on demand
/// (still never past `capacity`).
const MAX_PREALLOCATED_SLOTS: usize = 1024;

struct QueueState<T> {
    items: VecDeque<T>,
    closed: bool,
}

/// Bounded, thread-safe FIFO queue with back-pressure.
pub struct BoundedQueue<T> {
    state: Mutex<QueueState<T>>,
    capacity: usize,
    /// Signalled when a slot frees up (or on close).
    not_full: Notify,
    /// Signalled when an item arrives (or on close).
    not_empty: Notify,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue.
    ///
    /// # Errors
    /// - `Config` if `capacity` is zero
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::Config(
                "capacity must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            state: Mutex::new(QueueState {
                items: VecDeque::with_capacity(capacity.min(MAX_PREALLOCATED_SLOTS)),
                closed: false,
            }),
            capacity,
            not_full: Notify::new(),
            not_empty: Notify::new(),
        })
    }

    /// Append without waiting.
    ///
    /// # Errors
    /// - `CapacityExceeded` if the queue is full
    /// - `Closed` if the queue was closed
    ///
    /// The rejected item is handed back inside the error.
    pub fn try_push_back(&self, item: T) -> Result<(), PushError<T>> {
        {
            let mut state = self.state.lock();
            if state.closed {
                return Err(PushError::new(QueueError::Closed, item));
            }
            if state.items.len() >= self.capacity {
                return Err(PushError::new(
                    QueueError::CapacityExceeded {
                        capacity: self.capacity,
                    },
                    item,
                ));
            }
            state.items.push_back(item);
            assert!(
                state.items.len() <= self.capacity,
                "bounded queue invariant violated: len {} > capacity {}",
                state.items.len(),
                self.capacity
            );
        }
        self.not_empty.notify_one();
        Ok(())
    }

    /// Append, waiting for a free slot while the queue is full.
    ///
    /// # Errors
    /// - `Closed` if the queue is (or becomes) closed while waiting
    pub async fn push_back(&self, item: T) -> Result<(), PushError<T>> {
        let mut item = item;
        loop {
            let notified = self.not_full.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            match self.try_push_back(item) {
                Ok(()) => return Ok(()),
                Err(rejected) if rejected.is_full() => item = rejected.into_inner(),
                Err(rejected) => return Err(rejected),
            }

            notified.await;
        }
    }

    /// Remove the oldest item without waiting.
    ///
    /// Returns `Ok(None)` if the queue is empty.
    ///
    /// # Errors
    /// - `Closed` if the queue was closed
    pub fn try_pop_front(&self) -> Result<Option<T>, QueueError> {
        let item = {
            let mut state = self.state.lock();
            if state.closed {
                return Err(QueueError::Closed);
            }
            state.items.pop_front()
        };
        if item.is_some() {
            self.not_full.notify_one();
        }
        Ok(item)
    }

    /// Remove the oldest item, waiting while the queue is empty.
    ///
    /// # Errors
    /// - `Closed` if the queue is (or becomes) closed while waiting
    pub async fn pop_front(&self) -> Result<T, QueueError> {
        loop {
            let notified = self.not_empty.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if let Some(item) = self.try_pop_front()? {
                return Ok(item);
            }

            notified.await;
        }
    }

    /// Blocking `push_back` for plain OS threads.
    ///
    /// Must not be called from inside an async runtime worker.
    pub fn blocking_push_back(&self, item: T) -> Result<(), PushError<T>> {
        futures::executor::block_on(self.push_back(item))
    }

    /// Blocking `pop_front` for plain OS threads.
    ///
    /// Must not be called from inside an async runtime worker.
    pub fn blocking_pop_front(&self) -> Result<T, QueueError> {
        futures::executor::block_on(self.pop_front())
    }

    /// Close the queue. Idempotent.
    ///
    /// Every parked and future `push_back`/`pop_front` fails with `Closed`.
    pub fn close(&self) {
        let len = {
            let mut state = self.state.lock();
            state.closed = true;
            state.items.len()
        };
        self.not_full.notify_waiters();
        self.not_empty.notify_waiters();
        debug!(buffered = len, capacity = self.capacity, "Bounded queue closed");
    }

    /// Take every buffered item, oldest first.
    ///
    /// Works on open and closed queues; used to hand leftovers to a shutdown
    /// path after `close()`.
    pub fn drain(&self) -> Vec<T> {
        let drained: Vec<T> = {
            let mut state = self.state.lock();
            state.items.drain(..).collect()
        };
        if !drained.is_empty() {
            self.not_full.notify_waiters();
        }
        drained
    }

    /// Whether `close()` has been called.
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Number of buffered items.
    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    /// True if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if a push would have to wait.
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    /// Fixed capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> std::fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("BoundedQueue")
            .field("len", &state.items.len())
            .field("capacity", &self.capacity)
            .field("closed", &state.closed)
            .finish()
    }
}
