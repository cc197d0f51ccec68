//! # Insecure Configuration Default
//!
//! ## Attack Vector
//!
//! With `allow_duplicate_ip` on by default, one host can occupy every peer
//! slot of a node (eclipse). The flag must default to off and production
//! validation must refuse it.

#[cfg(test)]
mod tests {
    use node_runtime::{ConfigError, NodeConfig};

    #[test]
    fn test_p2p_default_refuses_duplicate_ip() {
        let config = NodeConfig::default();
        assert!(!config.p2p.allow_duplicate_ip);
    }

    #[test]
    fn test_default_passes_production_validation() {
        assert!(NodeConfig::default().validate_for_production().is_ok());
    }

    #[test]
    fn test_enabled_duplicate_ip_fails_production_validation() {
        let config = NodeConfig::from_lookup(|key| {
            (key == "QC_ALLOW_DUPLICATE_IP").then(|| "true".to_string())
        })
        .unwrap();

        assert!(config.p2p.allow_duplicate_ip);
        assert_eq!(
            config.validate_for_production(),
            Err(ConfigError::DuplicateIpAllowed)
        );
    }

    #[test]
    fn test_unrelated_env_keeps_default() {
        let config = NodeConfig::from_lookup(|key| {
            (key == "QC_ALLOW_DUPLICATE_IP").then(|| "no".to_string())
        })
        .unwrap();
        assert!(!config.p2p.allow_duplicate_ip);
    }
}
