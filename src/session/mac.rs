/*!
MAC sessions (stable shape).
*/

use crate::error::{Error, Result};
use crate::params;
use crate::provider::{self, registry, MacInstance, ProductSelector};
use crate::spec::{AlgorithmFamily, MacAlgorithm};

/// A MAC session for one (product, algorithm) pair
pub struct MacSession {
    product: ProductSelector,
    algorithm: MacAlgorithm,
    message: &'static [u8],
    instance: Option<Box<dyn MacInstance>>,
}

impl MacSession {
    /// Create an unconfigured session over `message`
    pub fn new(product: ProductSelector, algorithm: MacAlgorithm, message: &'static [u8]) -> Self {
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
        let id = provider::resolve(self.product, AlgorithmFamily::Mac);
        let provider = registry::provider(id)?;
        self.instance = Some(provider.mac(self.algorithm, params::mac_key())?);
        Ok(())
    }

    /// Compute the MAC of the message
    pub fn execute(&mut self) -> Result<Vec<u8>> {
        let instance = self.instance.as_ref().ok_or(Error::SessionNotConfigured)?;
        instance.compute(self.message)
    }
}
