use cryptobench::provider::{self, registry, ProductSelector, ProviderId, PRODUCTS};
use cryptobench::spec::AlgorithmFamily;
use cryptobench::Error;

// ----- Resolver properties -----

#[test]
fn test_every_pair_resolves_to_a_nonempty_provider() {
    for product in PRODUCTS {
        for family in AlgorithmFamily::ALL {
            let id = provider::resolve(product, family);
            assert!(!id.name().is_empty(), "{product}/{family}");
        }
    }
}

#[test]
fn test_alternate_resolves_to_the_fixed_identifier_for_every_family() {
    for family in AlgorithmFamily::ALL {
        assert_eq!(
            provider::resolve(ProductSelector::Alternate, family),
            ProviderId::OpenSsl
        );
    }
}

#[test]
fn test_default_product_is_partitioned_by_family() {
    let resolve = |family| provider::resolve(ProductSelector::Default, family);
    assert_eq!(resolve(AlgorithmFamily::BlockCipher), ProviderId::RustCrypto);
    assert_eq!(resolve(AlgorithmFamily::StreamCipherAead), ProviderId::RustCrypto);
    assert_eq!(resolve(AlgorithmFamily::Mac), ProviderId::RustCrypto);
    assert_eq!(resolve(AlgorithmFamily::Digest), ProviderId::RustCryptoHashes);
    assert_eq!(resolve(AlgorithmFamily::Signature), ProviderId::RustCryptoAsymmetric);
    assert_eq!(resolve(AlgorithmFamily::KeyExchange), ProviderId::RustCryptoAsymmetric);
    assert_eq!(
        resolve(AlgorithmFamily::KeyPairGeneration),
        ProviderId::RustCryptoAsymmetric
    );
}

// ----- Registry lifecycle -----
//
// Checking the unregistered state and the registration in one test keeps
// the ordering deterministic; no other test in this binary touches the
// alternate provider.

#[test]
fn test_alternate_provider_requires_registration() {
    match registry::provider(ProviderId::OpenSsl).err() {
        Some(Error::ProviderNotRegistered(id)) => assert_eq!(id, ProviderId::OpenSsl),
        other => panic!("expected a provider lookup failure, got {other:?}"),
    }

    provider::install_alternate_provider();
    provider::install_alternate_provider();
    assert!(registry::provider(ProviderId::OpenSsl).is_ok());
}

#[test]
fn test_default_providers_are_always_registered() {
    for id in [
        ProviderId::RustCrypto,
        ProviderId::RustCryptoHashes,
        ProviderId::RustCryptoAsymmetric,
    ] {
        assert_eq!(registry::provider(id).unwrap().id(), id);
    }
}

#[test]
fn test_family_partitioned_providers_reject_foreign_operations() {
    use cryptobench::provider::CryptoProvider as _;
    use cryptobench::spec::DigestAlgorithm;

    let symmetric = registry::provider(ProviderId::RustCrypto).unwrap();
    match symmetric.digest(DigestAlgorithm::Sha256).err() {
        Some(Error::UnsupportedOperation { provider, family }) => {
            assert_eq!(provider, ProviderId::RustCrypto);
            assert_eq!(family, AlgorithmFamily::Digest);
        }
        other => panic!("expected an unsupported-operation failure, got {other:?}"),
    }
}
