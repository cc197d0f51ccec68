//! # Range Query Overflow
//!
//! ## Attack Vector
//!
//! A chain-info request with `min = i64::MIN`, `max = i64::MIN + 20`. The
//! vulnerable normalisation computed `max - min` and `min = max - limit + 1`
//! with wrapping arithmetic, ending in a loop that never terminated.
//!
//! ## Defense
//!
//! Saturating clamps (`min ≥ 1`, `max ≤ tip`, width ≤ 20) before any
//! iteration; such requests return an empty window.

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;
    use qc_02_chain_log::{ChainLog, InMemoryChainLog};
    use qc_16_range_query::{RangeQueryService, MAX_RANGE_WIDTH};
    use shared_types::{Header, ZERO_HASH};
    use std::sync::Arc;
    use std::time::Duration as StdDuration;

    fn chain(n: i64) -> Arc<InMemoryChainLog> {
        let log = Arc::new(InMemoryChainLog::new());
        let start = Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap();
        let mut parent = ZERO_HASH;
        for h in 1..=n {
            let header = Header::new(h, start + Duration::seconds(h), parent, ZERO_HASH, [7u8; 32]);
            parent = header.hash().unwrap();
            log.append(header).unwrap();
        }
        log
    }

    #[test]
    fn test_min_bound_near_i64_min() {
        let service = RangeQueryService::new(chain(50));

        let info = service.chain_info(i64::MIN, i64::MIN + 20);
        assert_eq!(info.last_height, 50);
        assert!(info.headers.is_empty());
    }

    #[test]
    fn test_extreme_bounds_terminate_quickly() {
        let service = Arc::new(RangeQueryService::new(chain(50)));

        let cases = [
            (i64::MIN, i64::MIN + 20),
            (i64::MIN, i64::MAX),
            (i64::MAX - 20, i64::MAX),
            (i64::MAX, i64::MIN),
            (-1, -1),
            (0, 0),
        ];

        let handle = {
            let service = service.clone();
            std::thread::spawn(move || {
                cases
                    .iter()
                    .map(|&(min, max)| service.query(min, max).len())
                    .collect::<Vec<_>>()
            })
        };

        let start = std::time::Instant::now();
        let lens = handle.join().unwrap();
        assert!(start.elapsed() < StdDuration::from_secs(5));
        assert_eq!(lens, vec![0, MAX_RANGE_WIDTH as usize, 0, 0, 0, 0]);
    }

    #[test]
    fn test_full_span_returns_newest_window_from_min() {
        let service = RangeQueryService::new(chain(50));
        let headers = service.query(i64::MIN, i64::MAX);

        assert_eq!(headers.len(), MAX_RANGE_WIDTH as usize);
        assert_eq!(headers.first().map(|h| h.height), Some(1));
        assert_eq!(headers.last().map(|h| h.height), Some(20));
    }

    #[test]
    fn test_empty_chain() {
        let service = RangeQueryService::new(Arc::new(InMemoryChainLog::new()));
        let info = service.chain_info(i64::MIN, i64::MAX);
        assert_eq!(info.last_height, 0);
        assert!(info.headers.is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_any_bounds_are_bounded(min in any::<i64>(), max in any::<i64>()) {
            let service = RangeQueryService::new(chain(30));
            let headers = service.query(min, max);

            prop_assert!(headers.len() <= MAX_RANGE_WIDTH as usize);
            for h in &headers {
                prop_assert!(h.height >= min.max(1) && h.height <= max.min(30));
            }
            for pair in headers.windows(2) {
                prop_assert_eq!(pair[1].height, pair[0].height + 1);
            }
        }
    }
}
