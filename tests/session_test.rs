use cryptobench::spec::{digest, key_exchange, key_pair, mac};
use cryptobench::{
    data, install_alternate_provider, DigestSession, KeyExchangeSession, KeyPairGenSession,
    MacSession, ProductSelector, PRODUCTS,
};

fn init() {
    let _ = env_logger::try_init();
    install_alternate_provider();
}

// ----- Digest sessions -----

#[test]
fn test_digest_sessions_are_idempotent() {
    init();
    for product in PRODUCTS {
        for algorithm in digest::CATALOG {
            let mut session = DigestSession::new(product, algorithm, data::DATA_256B.as_slice());
            session.setup().unwrap();
            let first = session.execute().unwrap();
            let second = session.execute().unwrap();
            assert_eq!(first, second, "{product}/{algorithm}");
            assert_eq!(first.len(), algorithm.output_len(), "{product}/{algorithm}");
        }
    }
}

#[test]
fn test_products_agree_on_digests() {
    init();
    for algorithm in digest::CATALOG {
        let mut outputs = Vec::new();
        for product in PRODUCTS {
            let mut session = DigestSession::new(product, algorithm, data::DATA_256B.as_slice());
            session.setup().unwrap();
            outputs.push(session.execute().unwrap());
        }
        assert_eq!(outputs[0], outputs[1], "{algorithm}");
    }
}

// ----- MAC sessions -----

#[test]
fn test_mac_sessions_are_idempotent() {
    init();
    for product in PRODUCTS {
        for algorithm in mac::catalog() {
            let mut session = MacSession::new(product, algorithm, data::DATA_256B.as_slice());
            session.setup().unwrap();
            let first = session.execute().unwrap();
            assert_eq!(first, session.execute().unwrap(), "{product}/{algorithm}");
            assert_eq!(first.len(), algorithm.output_len(), "{product}/{algorithm}");
        }
    }
}

#[test]
fn test_products_agree_on_macs() {
    init();
    for algorithm in mac::catalog() {
        let mut outputs = Vec::new();
        for product in PRODUCTS {
            let mut session = MacSession::new(product, algorithm, data::DATA_256B.as_slice());
            session.setup().unwrap();
            outputs.push(session.execute().unwrap());
        }
        assert_eq!(outputs[0], outputs[1], "{algorithm}");
    }
}

// ----- Key exchange sessions -----

#[test]
fn test_key_exchange_derives_stable_secrets() {
    init();
    for product in PRODUCTS {
        for algorithm in key_exchange::CATALOG {
            let mut session = KeyExchangeSession::new(product, algorithm);
            session.setup().unwrap();
            let first = session.execute().unwrap();
            assert!(!first.is_empty(), "{product}/{algorithm}");
            assert_eq!(first, session.execute().unwrap(), "{product}/{algorithm}");
        }
    }
}

// ----- Key pair generation sessions -----

#[test]
fn test_key_pair_generation_produces_fresh_pairs() {
    init();
    for product in PRODUCTS {
        for params in key_pair::CATALOG {
            let mut session = KeyPairGenSession::new(product, params);
            session.setup().unwrap();
            let key_pair = session.execute().unwrap();
            let expected = match product {
                ProductSelector::Default => "rustcrypto",
                ProductSelector::Alternate => "openssl",
            };
            assert_eq!(key_pair.stack(), expected, "{product}/{params}");
        }
    }
}
