use cryptobench::spec::cipher;
use cryptobench::{
    data, install_alternate_provider, CipherSession, CipherSpec, Direction, ProductSelector,
    PRODUCTS,
};

fn init() {
    let _ = env_logger::try_init();
    install_alternate_provider();
}

fn session(product: ProductSelector, transformation: &str, direction: Direction) -> CipherSession {
    let spec: CipherSpec = transformation.parse().unwrap();
    CipherSession::new(product, spec, direction, data::DATA_256B.as_slice())
}

// ----- Round trips -----

#[test]
fn test_decrypt_reproduces_plaintext_for_every_transformation() {
    init();
    for product in PRODUCTS {
        for transformation in cipher::CATALOG {
            let mut decrypt = session(product, transformation, Direction::Decrypt);
            decrypt.setup().unwrap();
            let plaintext = decrypt.execute().unwrap();
            assert_eq!(
                plaintext,
                data::DATA_256B.as_slice(),
                "{product}/{transformation}"
            );
        }
    }
}

#[test]
fn test_decrypt_output_is_stable_across_calls() {
    init();
    let mut decrypt = session(ProductSelector::Alternate, "AES/GCM/NoPadding", Direction::Decrypt);
    decrypt.setup().unwrap();
    assert_eq!(decrypt.execute().unwrap(), decrypt.execute().unwrap());
}

// ----- Nonce freshness -----

#[test]
fn test_nonce_sensitive_encryption_never_reuses_a_nonce() {
    init();
    for product in PRODUCTS {
        for transformation in ["AES/GCM/NoPadding", "ChaCha20", "ChaCha20-Poly1305"] {
            let mut encrypt = session(product, transformation, Direction::Encrypt);
            encrypt.setup().unwrap();
            let first = encrypt.execute().unwrap();
            let first_params = encrypt.current_params().cloned().unwrap();
            let second = encrypt.execute().unwrap();
            let second_params = encrypt.current_params().cloned().unwrap();

            // Key is fixed, so distinct ciphertext can only come from a
            // distinct nonce.
            assert_ne!(first_params, second_params, "{product}/{transformation}");
            assert_ne!(first, second, "{product}/{transformation}");
        }
    }
}

// ----- Concrete scenarios -----

#[test]
fn test_gcm_ciphertext_is_plaintext_plus_tag() {
    init();
    for product in PRODUCTS {
        let mut encrypt = session(product, "AES/GCM/NoPadding", Direction::Encrypt);
        encrypt.setup().unwrap();
        let ciphertext = encrypt.execute().unwrap();
        assert_eq!(ciphertext.len(), data::DATA_256B.len() + 16, "{product}");
    }
}

#[test]
fn test_providers_agree_on_deterministic_cbc() {
    use cryptobench::params::CipherParams;
    use cryptobench::provider::{registry, CryptoProvider as _, ProviderId};

    init();
    let spec: CipherSpec = "AES/CBC/PKCS5Padding".parse().unwrap();
    let params = CipherParams::Iv([0x17; 16]);
    let key = [b'a'; 16];

    let mut outputs = Vec::new();
    for id in [ProviderId::RustCrypto, ProviderId::OpenSsl] {
        let provider = registry::provider(id).unwrap();
        let instance = provider
            .cipher(&spec, Direction::Encrypt, &key, &params)
            .unwrap();
        outputs.push(instance.process(data::DATA_256B.as_slice()).unwrap());
    }
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_unknown_transformations_are_configuration_errors() {
    use cryptobench::Error;

    for bad in ["", "AES", "AES/OFB/NoPadding", "Salsa20"] {
        match bad.parse::<CipherSpec>() {
            Err(Error::Configuration(_)) => {}
            other => panic!("expected a configuration error for '{bad}', got {other:?}"),
        }
    }
}
