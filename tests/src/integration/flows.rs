//! # Integration Test Flows
//!
//! Tests that qc-13-header-verifier, shared-bus, qc-02-chain-log and
//! qc-16-range-query work together.
//!
//! ## Flows Tested:
//!
//! 1. **Verifier (13) → Chain Log (2)**: direct sink, dense chain
//! 2. **Verifier (13) → Queue → Chain Log (2)**: back-pressured hand-off
//! 3. **Chain Log (2) → Range Query (16)**: reads over what was verified
//! 4. **Node pipeline**: submit, query, graceful shutdown

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use std::sync::Arc;
    use std::time::Duration as StdDuration;
    use tokio::time::timeout;

    // Node runtime
    use node_runtime::adapters::{ChainLogSink, QueueSink};
    use node_runtime::{Genesis, GenesisBuilder, GenesisConfig, LightNode, NodeConfig};

    // Subsystems
    use qc_02_chain_log::{ChainLog, InMemoryChainLog};
    use qc_13_header_verifier::{
        HeaderCommitVerifier, HeaderVerifierApi, InMemoryValidatorSetProvider, SubmitError,
        VerificationError, VerificationService, VerifiedHeader, VerifierConfig,
    };
    use qc_16_range_query::RangeQueryService;
    use shared_bus::BoundedQueue;
    use shared_types::SignedHeader;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn genesis() -> Genesis {
        GenesisBuilder::new(GenesisConfig::devnet(4)).build().unwrap()
    }

    fn verifier(genesis: &Genesis) -> Arc<HeaderCommitVerifier> {
        let provider = Arc::new(InMemoryValidatorSetProvider::new());
        provider.insert(genesis.validator_set.clone());
        Arc::new(HeaderCommitVerifier::with_defaults(
            genesis.trusted_state().unwrap(),
            VerifierConfig::without_liveness_check().with_sequential_heights(),
            provider,
        ))
    }

    fn seeded_log(genesis: &Genesis) -> Arc<InMemoryChainLog> {
        let log = Arc::new(InMemoryChainLog::new());
        log.append(genesis.header.clone()).unwrap();
        log
    }

    fn chain(genesis: &Genesis, n: usize) -> Vec<SignedHeader> {
        let mut out = Vec::with_capacity(n);
        let mut parent = genesis.header.clone();
        for _ in 0..n {
            let next = genesis.next_signed(&parent, Duration::seconds(6)).unwrap();
            parent = next.header.clone();
            out.push(next);
        }
        out
    }

    // =============================================================================
    // FLOW 1: VERIFIER → CHAIN LOG
    // =============================================================================

    #[tokio::test]
    async fn test_verifier_appends_directly_to_chain_log() {
        let genesis = genesis();
        let log = seeded_log(&genesis);
        let service = VerificationService::new(
            verifier(&genesis),
            Arc::new(ChainLogSink::new(log.clone())),
        );

        for signed in chain(&genesis, 10) {
            service.submit(&signed).await.unwrap();
        }

        assert_eq!(log.latest_height(), 11);
        assert_eq!(service.verifier().trusted_height(), 11);
    }

    #[tokio::test]
    async fn test_skip_ahead_refused_before_trust_moves() {
        let genesis = genesis();
        let log = seeded_log(&genesis);
        let service = VerificationService::new(
            verifier(&genesis),
            Arc::new(ChainLogSink::new(log.clone())),
        );

        let headers = chain(&genesis, 5);
        let err = service.submit(&headers[4]).await.unwrap_err();

        // Trust and the dense log both stay at genesis.
        assert_eq!(
            err,
            SubmitError::Verification(VerificationError::NonAdjacentHeader {
                height: 6,
                expected: 2
            })
        );
        assert_eq!(service.verifier().trusted_height(), 1);
        assert_eq!(log.latest_height(), 1);

        for signed in &headers {
            service.submit(signed).await.unwrap();
        }
        assert_eq!(log.latest_height(), 6);
    }

    // =============================================================================
    // FLOW 2: VERIFIER → QUEUE → CHAIN LOG
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_queue_hand_off_preserves_order() {
        let genesis = genesis();
        let log = seeded_log(&genesis);
        let queue = Arc::new(BoundedQueue::<VerifiedHeader>::new(2).unwrap());
        let service = VerificationService::new(
            verifier(&genesis),
            Arc::new(QueueSink::new(queue.clone())),
        );

        let consumer = {
            let queue = queue.clone();
            let log = log.clone();
            tokio::spawn(async move {
                while let Ok(verified) = queue.pop_front().await {
                    log.append(verified.header).unwrap();
                }
            })
        };

        for signed in chain(&genesis, 25) {
            service.submit(&signed).await.unwrap();
            assert!(queue.len() <= 2);
        }

        timeout(StdDuration::from_secs(5), async {
            while !queue.is_empty() {
                tokio::task::yield_now().await;
            }
        })
        .await
        .unwrap();
        queue.close();
        timeout(StdDuration::from_secs(5), consumer)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(log.latest_height(), 26);
    }

    // =============================================================================
    // FLOW 3: CHAIN LOG → RANGE QUERY
    // =============================================================================

    #[tokio::test]
    async fn test_range_queries_over_verified_chain() {
        let genesis = genesis();
        let log = seeded_log(&genesis);
        let service = VerificationService::new(
            verifier(&genesis),
            Arc::new(ChainLogSink::new(log.clone())),
        );
        for signed in chain(&genesis, 40) {
            service.submit(&signed).await.unwrap();
        }

        let queries = RangeQueryService::new(log.clone());
        let info = queries.chain_info(i64::MIN, i64::MIN + 20);
        assert_eq!(info.last_height, 41);
        assert!(info.headers.is_empty());

        let window = queries.query(30, 100);
        assert_eq!(
            window.iter().map(|h| h.height).collect::<Vec<_>>(),
            (30..=41).collect::<Vec<_>>()
        );

        for pair in queries.query(1, 20).windows(2) {
            assert_eq!(pair[1].last_block_id, pair[0].hash().unwrap());
        }
    }

    // =============================================================================
    // FLOW 4: NODE PIPELINE
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_light_node_end_to_end() {
        let genesis = genesis();
        let mut config = NodeConfig::default();
        config.verifier.max_clock_drift = None;
        config.queue.capacity = 4;
        let node = LightNode::start(&config, &genesis).unwrap();

        let headers = chain(&genesis, 30);
        for signed in &headers {
            node.submit(signed).await.unwrap();
        }

        // Replays and regressions are refused.
        assert!(matches!(
            node.submit(&headers[10]).await,
            Err(SubmitError::Verification(VerificationError::StaleHeader { .. }))
        ));

        let stats = node.shutdown().await.unwrap();
        assert_eq!(stats.appended, 30);
        assert_eq!(stats.dropped, 0);
    }

    #[tokio::test]
    async fn test_light_node_queries_after_consumption() {
        let genesis = genesis();
        let mut config = NodeConfig::default();
        config.verifier.max_clock_drift = None;
        let node = LightNode::start(&config, &genesis).unwrap();

        for signed in chain(&genesis, 5) {
            node.submit(&signed).await.unwrap();
        }
        timeout(StdDuration::from_secs(5), async {
            while node.chain_height() < 6 {
                tokio::task::yield_now().await;
            }
        })
        .await
        .unwrap();

        let info = node.chain_info(0, i64::MAX);
        assert_eq!(info.last_height, 6);
        assert_eq!(info.headers.len(), 6);
        assert_eq!(info.headers[0], genesis.header);

        node.shutdown().await.unwrap();
    }
}
