/*!
Digest sessions (stable shape).
*/

use crate::error::{Error, Result};
use crate::provider::{self, registry, DigestInstance, ProductSelector};
use crate::spec::{AlgorithmFamily, DigestAlgorithm};

/// A digest session for one (product, algorithm) pair
pub struct DigestSession {
    product: ProductSelector,
    algorithm: DigestAlgorithm,
    message: &'static [u8],
    instance: Option<Box<dyn DigestInstance>>,
}

impl DigestSession {
    /// Create an unconfigured session over `message`
    pub fn new(
        product: ProductSelector,
        algorithm: DigestAlgorithm,
        message: &'static [u8],
    ) -> Self {
        Self {
            product,
            algorithm,
            message,
            instance: None,
        }
    }

    /// Configure the session; later calls are no-ops
    pub fn setup(&mut self) -> Result<()> {
        if self.instance.is_some() {
            return Ok(());
        }
        let id = provider::resolve(self.product, AlgorithmFamily::Digest);
        let provider = registry::provider(id)?;
        self.instance = Some(provider.digest(self.algorithm)?);
        Ok(())
    }

    /// Digest the message
    pub fn execute(&mut self) -> Result<Vec<u8>> {
        let instance = self.instance.as_ref().ok_or(Error::SessionNotConfigured)?;
        instance.digest(self.message)
    }
}
