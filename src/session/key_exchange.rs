/*!
Key exchange sessions (stable shape).

The key pair is generated once during setup with parameters derived from
the exchange algorithm; the timed operation is the shared-secret
derivation.
*/

use crate::error::{Error, Result};
use crate::params;
use crate::provider::{self, registry, KeyExchangeInstance, ProductSelector};
use crate::spec::{AlgorithmFamily, KeyExchangeAlgorithm};

/// A key exchange session for one (product, algorithm) pair
pub struct KeyExchangeSession {
    product: ProductSelector,
    algorithm: KeyExchangeAlgorithm,
    instance: Option<Box<dyn KeyExchangeInstance>>,
}

impl KeyExchangeSession {
    /// Create an unconfigured session
    pub fn new(product: ProductSelector, algorithm: KeyExchangeAlgorithm) -> Self {
        Self {
            product,
            algorithm,
            instance: None,
        }
    }

    /// Configure the session; later calls are no-ops
    pub fn setup(&mut self) -> Result<()> {
        if self.instance.is_some() {
            return Ok(());
        }
        let id = provider::resolve(self.product, AlgorithmFamily::KeyExchange);
        let provider = registry::provider(id)?;

        let key_gen = params::key_exchange_setup(self.algorithm);
        let generator = provider.key_pair_generator(&key_gen)?;
        let key_pair = generator.generate()?;
        self.instance = Some(provider.key_exchange(self.algorithm, &key_pair)?);
        Ok(())
    }

    /// Derive the shared secret
    pub fn execute(&mut self) -> Result<Vec<u8>> {
        let instance = self.instance.as_ref().ok_or(Error::SessionNotConfigured)?;
        instance.derive_shared_secret()
    }
}
