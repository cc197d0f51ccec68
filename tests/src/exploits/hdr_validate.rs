//! # Header Validation Bypass
//!
//! ## Attack Vectors
//!
//! 1. **Empty header identity**: an all-zero header must have no digest, so
//!    no commit can ever reference it
//! 2. **Block vs signed header**: a proxy accepted a block whose height
//!    matched a signed header while its time (and so its digest) differed
//! 3. **Time regression after skipping**: trusted 11 @ 2018-01-01, accepted
//!    50 @ 2018-06-01, then 111 @ 2018-01-01 must be refused

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use qc_13_header_verifier::{
        validate_block, HeaderCommitVerifier, HeaderVerifierApi, InMemoryValidatorSetProvider,
        TrustedState, VerificationError, VerifierConfig,
    };
    use shared_crypto::ValidatorKey;
    use shared_types::{
        Commit, Endorsement, Header, SignedHeader, Validator, ValidatorSet, ZERO_HASH,
    };
    use std::sync::Arc;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 1, 1, 1).unwrap() + Duration::nanoseconds(1)
    }

    struct Validators {
        keys: Vec<ValidatorKey>,
        set: ValidatorSet,
    }

    impl Validators {
        fn new(n: u8) -> Self {
            let keys: Vec<ValidatorKey> =
                (1..=n).map(|i| ValidatorKey::from_seed([i; 32])).collect();
            let set = ValidatorSet::new(
                keys.iter()
                    .map(|k| Validator::new(k.public_key(), 10))
                    .collect(),
            );
            Self { keys, set }
        }

        fn header(&self, height: i64, time: DateTime<Utc>) -> Header {
            Header::new(height, time, ZERO_HASH, ZERO_HASH, self.set.hash())
        }

        fn signed(&self, height: i64, time: DateTime<Utc>) -> SignedHeader {
            let header = self.header(height, time);
            let hash = header.hash().unwrap();
            let endorsements = self
                .keys
                .iter()
                .map(|k| Endorsement::new(k.public_key(), k.sign(&hash)))
                .collect();
            SignedHeader::new(header, Commit::new(height, hash, endorsements))
        }

        fn verifier(&self, height: i64, time: DateTime<Utc>) -> HeaderCommitVerifier {
            let trusted = TrustedState::new(self.header(height, time), self.set.clone()).unwrap();
            HeaderCommitVerifier::with_defaults(
                trusted,
                VerifierConfig::without_liveness_check(),
                Arc::new(InMemoryValidatorSetProvider::new()),
            )
        }
    }

    // =============================================================================
    // ATTACK 1: EMPTY HEADER IDENTITY
    // =============================================================================

    #[test]
    fn test_header_hash_absent_only_for_empty_header() {
        let cases = [
            (Header::default(), true),
            (
                Header {
                    height: 100,
                    time: Utc::now(),
                    ..Header::default()
                },
                false,
            ),
            (
                Header {
                    height: 111,
                    time: at(2018, 12, 2) + Duration::seconds(2),
                    ..Header::default()
                },
                false,
            ),
        ];

        for (i, (header, want_absent)) in cases.iter().enumerate() {
            assert_eq!(header.hash().is_none(), *want_absent, "case #{i}");
        }
    }

    #[test]
    fn test_empty_header_cannot_be_verified() {
        let v = Validators::new(4);
        let verifier = v.verifier(1, at(2018, 1, 1));

        let commit = Commit::new(0, ZERO_HASH, vec![]);
        let err = verifier.verify(&Header::default(), &commit).unwrap_err();
        assert!(matches!(err, VerificationError::MalformedHeader { .. }));
        assert_eq!(verifier.trusted_height(), 1);
    }

    // =============================================================================
    // ATTACK 2: BLOCK VS SIGNED HEADER
    // =============================================================================

    #[test]
    fn test_block_with_different_time_rejected() {
        let v = Validators::new(1);
        let block = v.header(11, at(2018, 1, 1));
        let signed = v.signed(11, at(2017, 1, 1));

        assert!(
            validate_block(&block, &signed).is_err(),
            "block accepted against a signed header with another time"
        );
    }

    #[test]
    fn test_block_against_empty_signed_header_rejected() {
        let block = Header {
            height: 0,
            ..Header::default()
        };
        assert!(validate_block(&block, &SignedHeader::default()).is_err());
    }

    // =============================================================================
    // ATTACK 3: TIME REGRESSION AFTER SKIPPING
    // =============================================================================

    #[test]
    fn test_time_regression_after_skip() {
        let v = Validators::new(4);
        let verifier = v.verifier(11, at(2018, 1, 1));

        verifier.verify_signed(&v.signed(50, at(2018, 6, 1))).unwrap();

        let err = verifier
            .verify_signed(&v.signed(111, at(2018, 1, 1)))
            .unwrap_err();
        assert!(matches!(err, VerificationError::TimeRegression { height: 111, .. }));
        assert_eq!(verifier.trusted_height(), 50);
    }

    #[test]
    fn test_commit_reused_for_forged_header() {
        let v = Validators::new(4);
        let verifier = v.verifier(11, at(2018, 1, 1));

        let real = v.signed(12, at(2018, 2, 1));
        let forged = v.header(12, at(2018, 3, 1));
        let err = verifier.verify(&forged, &real.commit).unwrap_err();
        assert!(matches!(err, VerificationError::MalformedHeader { .. }));
    }

    #[test]
    fn test_forged_signatures_rejected() {
        let v = Validators::new(3);
        let verifier = v.verifier(1, at(2018, 1, 1));

        let mut signed = v.signed(2, at(2018, 1, 2));
        for e in &mut signed.commit.endorsements {
            e.signature = [0u8; 64];
        }
        assert!(matches!(
            verifier.verify_signed(&signed),
            Err(VerificationError::BadSignature { .. })
        ));
    }
}
