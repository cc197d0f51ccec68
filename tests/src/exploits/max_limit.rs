//! # Unbounded List Growth
//!
//! ## Attack Vector
//!
//! A shared list with a documented maximum length panicked when a producer
//! pushed past it, taking the node down. Filling a list to its maximum must
//! succeed, and one more push must be refused with an error.

#[cfg(test)]
mod tests {
    use shared_bus::{BoundedQueue, QueueError, DEFAULT_QUEUE_CAPACITY};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_fill_to_capacity_then_refuse() {
        let queue = BoundedQueue::new(DEFAULT_QUEUE_CAPACITY).unwrap();
        for i in 0..DEFAULT_QUEUE_CAPACITY {
            queue.try_push_back(i).unwrap();
        }
        assert!(queue.is_full());

        let err = queue.try_push_back(usize::MAX).unwrap_err();
        assert_eq!(
            err.error,
            QueueError::CapacityExceeded {
                capacity: DEFAULT_QUEUE_CAPACITY
            }
        );
        assert_eq!(err.into_inner(), usize::MAX);
        assert_eq!(queue.len(), DEFAULT_QUEUE_CAPACITY);
    }

    #[test]
    fn test_large_capacity_fill() {
        let capacity = 1 << 20;
        let queue = BoundedQueue::new(capacity).unwrap();
        for i in 0..capacity {
            queue.try_push_back(i as u32).unwrap();
        }
        assert!(queue.try_push_back(0).is_err());
        assert_eq!(queue.try_pop_front().unwrap(), Some(0));
        assert!(queue.try_push_back(0).is_ok());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_flooding_producers_never_exceed_capacity() {
        let queue = Arc::new(BoundedQueue::new(16).unwrap());

        let producers: Vec<_> = (0..8)
            .map(|p| {
                let queue = queue.clone();
                tokio::spawn(async move {
                    let mut refused = 0u32;
                    for i in 0..1_000u32 {
                        if queue.try_push_back(p * 1_000 + i).is_err() {
                            refused += 1;
                        }
                        assert!(queue.len() <= 16);
                    }
                    refused
                })
            })
            .collect();

        let mut refused = 0;
        for p in producers {
            refused += tokio::time::timeout(Duration::from_secs(10), p)
                .await
                .unwrap()
                .unwrap();
        }

        assert_eq!(queue.len(), 16);
        assert_eq!(refused, 8 * 1_000 - 16);
    }
}
