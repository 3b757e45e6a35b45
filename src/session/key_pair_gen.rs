/*!
Key pair generation sessions (stable shape).

Only the generator is configured during setup; no session-level key pair
is pre-created, since generation itself is the timed operation.
*/

use crate::error::{Error, Result};
use crate::provider::{self, registry, KeyPair, KeyPairGenerator, ProductSelector};
use crate::spec::{AlgorithmFamily, KeyGenParams};

/// A key pair generation session for one (product, parameter set) pair
pub struct KeyPairGenSession {
    product: ProductSelector,
    params: KeyGenParams,
    generator: Option<Box<dyn KeyPairGenerator>>,
}

impl KeyPairGenSession {
    /// Create an unconfigured session
    pub fn new(product: ProductSelector, params: KeyGenParams) -> Self {
        Self {
            product,
            params,
            generator: None,
        }
    }

    /// Configure the session; later calls are no-ops
    pub fn setup(&mut self) -> Result<()> {
        if self.generator.is_some() {
            return Ok(());
        }
        let id = provider::resolve(self.product, AlgorithmFamily::KeyPairGeneration);
        let provider = registry::provider(id)?;
        self.generator = Some(provider.key_pair_generator(&self.params)?);
        Ok(())
    }

    /// Generate a fresh key pair
    pub fn execute(&mut self) -> Result<KeyPair> {
        let generator = self.generator.as_ref().ok_or(Error::SessionNotConfigured)?;
        generator.generate()
    }
}
