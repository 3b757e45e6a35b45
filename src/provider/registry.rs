/*!
Process-wide provider registry.

The three default providers are registered the first time the registry is
touched. The alternate provider must be registered explicitly, once, at
process start; the call is idempotent, and resolving the alternate product
before it has happened is a provider lookup error.
*/

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::provider::ossl::OpenSslProvider;
use crate::provider::rustcrypto::{
    RustCryptoAsymmetric, RustCryptoHashes, RustCryptoSymmetric,
};
use crate::provider::{CryptoProvider, ProviderId};

static RUSTCRYPTO_SYMMETRIC: RustCryptoSymmetric = RustCryptoSymmetric;
static RUSTCRYPTO_HASHES: RustCryptoHashes = RustCryptoHashes;
static RUSTCRYPTO_ASYMMETRIC: RustCryptoAsymmetric = RustCryptoAsymmetric;
static OPENSSL: OpenSslProvider = OpenSslProvider;

static REGISTRY: Lazy<RwLock<HashMap<ProviderId, &'static dyn CryptoProvider>>> =
    Lazy::new(|| {
        let mut providers: HashMap<ProviderId, &'static dyn CryptoProvider> = HashMap::new();
        for p in [
            &RUSTCRYPTO_SYMMETRIC as &'static dyn CryptoProvider,
            &RUSTCRYPTO_HASHES,
            &RUSTCRYPTO_ASYMMETRIC,
        ] {
            providers.insert(p.id(), p);
        }
        log::debug!("registered default providers: {:?}", providers.keys());
        RwLock::new(providers)
    });

/// Register the alternate provider with the process registry.
///
/// Must run before any session resolves the alternate product. Safe to call
/// from every entry point; repeated calls are no-ops.
pub fn install_alternate_provider() {
    let mut providers = REGISTRY.write().unwrap();
    if providers
        .insert(ProviderId::OpenSsl, &OPENSSL as &'static dyn CryptoProvider)
        .is_none()
    {
        log::info!("registered alternate provider '{}'", ProviderId::OpenSsl);
    }
}

/// Look up a registered provider by identifier
pub fn provider(id: ProviderId) -> Result<&'static dyn CryptoProvider> {
    REGISTRY
        .read()
        .unwrap()
        .get(&id)
        .copied()
        .ok_or(Error::ProviderNotRegistered(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_providers_always_present() {
        for id in [
            ProviderId::RustCrypto,
            ProviderId::RustCryptoHashes,
            ProviderId::RustCryptoAsymmetric,
        ] {
            assert_eq!(provider(id).unwrap().id(), id);
        }
    }

    #[test]
    fn test_alternate_registration_is_idempotent() {
        install_alternate_provider();
        install_alternate_provider();
        assert_eq!(provider(ProviderId::OpenSsl).unwrap().id(), ProviderId::OpenSsl);
    }
}
