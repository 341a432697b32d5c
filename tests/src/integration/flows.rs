//! # Integration Test Flows
//!
//! Tests that the registry, the service and the keyring options bundle
//! work together the way a keyring framework drives them.
//!
//! ## Flows Tested:
//!
//! 1. **Registry → Service → TypedPrivateKey**: derive, wrap, public key
//! 2. **KeyringOptions**: derive for any tag, keygen only for `eth_secp256k1`
//! 3. **Custom registries**: restricted algorithm sets and ledger subsets
//! 4. **Random mnemonics**: strategy properties hold beyond fixed vectors

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use key_derivation::{
        AlgorithmEntry, AlgorithmRegistry, AlgorithmTag, DerivationError, DerivationStrategy,
        KeyDerivationApi, KeyringConfig, KeyringOptions, KeyringService, MnemonicFault,
        DEFAULT_ETH_HD_PATH, ETH_PRIV_KEY_NAME, ETH_PUB_KEY_NAME, STD_PRIV_KEY_NAME,
    };
    use rand::RngCore;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn ethermint_service() -> KeyringService {
        KeyringService::new(
            Arc::new(AlgorithmRegistry::ethermint()),
            KeyringConfig::default(),
        )
        .unwrap()
    }

    /// Fresh 12-word mnemonic from random entropy
    fn random_mnemonic() -> String {
        let mut entropy = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut entropy);
        bip39::Mnemonic::from_entropy(&entropy)
            .unwrap()
            .to_string()
    }

    // =============================================================================
    // FLOW 1: REGISTRY → SERVICE → TYPED KEY
    // =============================================================================

    #[test]
    fn test_eth_flow_end_to_end() {
        let service = ethermint_service();

        let key = service
            .derive_typed(TEST_MNEMONIC, "", DEFAULT_ETH_HD_PATH, &AlgorithmTag::ETH_SECP256K1)
            .unwrap();

        assert_eq!(key.type_name(), Some(ETH_PRIV_KEY_NAME));
        assert_eq!(key.public_key_type_name(), Some(ETH_PUB_KEY_NAME));
        assert_eq!(
            hex::encode(key.public_key().unwrap().as_bytes()),
            "03d902f35f560e0470c63313c7369168d9d7df2d49bf295fd9fb7cb109ccee0494"
        );
    }

    #[test]
    fn test_standard_flow_end_to_end() {
        let service = ethermint_service();

        let key = service
            .derive_typed(TEST_MNEMONIC, "", "m/44'/60'/0'/0/1", &AlgorithmTag::SECP256K1)
            .unwrap();

        assert_eq!(key.type_name(), Some(STD_PRIV_KEY_NAME));
        assert_eq!(
            hex::encode(key.as_bytes()),
            "9a983cb3d832fbde5ab49d692b7a8bf5b5d232479c99333d0fc8e1d21f1b55b6"
        );
    }

    #[test]
    fn test_error_precedence_through_service() {
        let service = ethermint_service();
        let corrupted = TEST_MNEMONIC.replace("about", "zoo");

        // Unknown algorithm wins over a bad mnemonic
        let err = service
            .derive_key(&corrupted, "", "bogus", &AlgorithmTag::new("sr25519"))
            .unwrap_err();
        assert!(matches!(err, DerivationError::UnsupportedAlgorithm { .. }));

        // Mnemonic is checked before the path
        let err = service
            .derive_key(&corrupted, "", "bogus", &AlgorithmTag::SECP256K1)
            .unwrap_err();
        assert_eq!(err, DerivationError::InvalidMnemonic(MnemonicFault::Checksum));

        // Valid mnemonic, bad path
        let err = service
            .derive_key(TEST_MNEMONIC, "", "bogus", &AlgorithmTag::SECP256K1)
            .unwrap_err();
        assert!(matches!(err, DerivationError::InvalidHdPath { .. }));

        // The eth strategy never looks at the path
        assert!(service
            .derive_key(TEST_MNEMONIC, "", "bogus", &AlgorithmTag::ETH_SECP256K1)
            .is_ok());
    }

    // =============================================================================
    // FLOW 2: KEYRING OPTIONS
    // =============================================================================

    #[test]
    fn test_options_derive_then_keygen() {
        let options = KeyringOptions::eth_secp256k1(Arc::new(AlgorithmRegistry::ethermint()));

        assert_eq!(
            options.supported_algorithms,
            vec![AlgorithmTag::ETH_SECP256K1, AlgorithmTag::SECP256K1]
        );
        assert_eq!(options.supported_algorithms_ledger, options.supported_algorithms);

        let bytes = options
            .derive_key(TEST_MNEMONIC, "", DEFAULT_ETH_HD_PATH, &AlgorithmTag::ETH_SECP256K1)
            .unwrap();
        let key = options
            .keygen
            .construct(bytes.as_bytes(), &AlgorithmTag::ETH_SECP256K1)
            .unwrap();
        assert_eq!(key.as_bytes(), bytes.as_bytes());
    }

    #[test]
    fn test_options_keygen_rejects_standard_tag() {
        let options = KeyringOptions::eth_secp256k1(Arc::new(AlgorithmRegistry::ethermint()));

        let bytes = options
            .derive_key(TEST_MNEMONIC, "", DEFAULT_ETH_HD_PATH, &AlgorithmTag::SECP256K1)
            .unwrap();
        let err = options
            .keygen
            .construct(bytes.as_bytes(), &AlgorithmTag::SECP256K1)
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Signing algorithm must be eth_secp256k1, got secp256k1"
        );
    }

    // =============================================================================
    // FLOW 3: CUSTOM REGISTRIES
    // =============================================================================

    #[test]
    fn test_standard_only_registry() {
        let registry = AlgorithmRegistry::new(
            vec![AlgorithmEntry::new(
                AlgorithmTag::SECP256K1,
                DerivationStrategy::Standard,
            )],
            vec![],
        )
        .unwrap();
        let config = KeyringConfig {
            default_algorithm: AlgorithmTag::SECP256K1,
            ..Default::default()
        };
        let service = KeyringService::new(Arc::new(registry), config).unwrap();

        assert_eq!(service.supported_algorithms(), vec![AlgorithmTag::SECP256K1]);
        assert!(service.supported_algorithms_ledger().is_empty());
        assert_eq!(
            hex::encode(service.derive_default(TEST_MNEMONIC, "").unwrap().as_bytes()),
            "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727"
        );

        let err = service
            .derive_key(TEST_MNEMONIC, "", "", &AlgorithmTag::ETH_SECP256K1)
            .unwrap_err();
        assert!(matches!(err, DerivationError::UnsupportedAlgorithm { .. }));
    }

    #[test]
    fn test_default_config_needs_eth_registered() {
        let registry = AlgorithmRegistry::new(
            vec![AlgorithmEntry::new(
                AlgorithmTag::SECP256K1,
                DerivationStrategy::Standard,
            )],
            vec![],
        )
        .unwrap();

        let result = KeyringService::new(Arc::new(registry), KeyringConfig::default());
        assert!(matches!(
            result,
            Err(DerivationError::UnsupportedAlgorithm { .. })
        ));
    }

    // =============================================================================
    // FLOW 4: RANDOM MNEMONICS
    // =============================================================================

    #[test]
    fn test_eth_matches_master_key_for_random_mnemonics() {
        for _ in 0..8 {
            let mnemonic = random_mnemonic();

            let eth = DerivationStrategy::EthCompatible
                .derive(&mnemonic, "pass", DEFAULT_ETH_HD_PATH)
                .unwrap();
            let master = DerivationStrategy::Standard
                .derive(&mnemonic, "pass", "m")
                .unwrap();

            assert_eq!(eth, master);
        }
    }

    #[test]
    fn test_eth_ignores_path_for_random_mnemonics() {
        let mnemonic = random_mnemonic();
        let service = ethermint_service();

        let keys: Vec<_> = ["", "m", DEFAULT_ETH_HD_PATH, "m/44'/118'/0'/0/7", "junk"]
            .iter()
            .map(|path| {
                service
                    .derive_key(&mnemonic, "", path, &AlgorithmTag::ETH_SECP256K1)
                    .unwrap()
            })
            .collect();

        assert!(keys.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_concurrent_mixed_algorithms() {
        let service = ethermint_service();
        let mnemonics: Vec<String> = (0..4).map(|_| random_mnemonic()).collect();

        std::thread::scope(|scope| {
            for mnemonic in &mnemonics {
                for tag in [AlgorithmTag::ETH_SECP256K1, AlgorithmTag::SECP256K1] {
                    let service = &service;
                    scope.spawn(move || {
                        let first = service
                            .derive_key(mnemonic, "", DEFAULT_ETH_HD_PATH, &tag)
                            .unwrap();
                        let second = service
                            .derive_key(mnemonic, "", DEFAULT_ETH_HD_PATH, &tag)
                            .unwrap();
                        assert_eq!(first, second);
                    });
                }
            }
        });
    }
}
