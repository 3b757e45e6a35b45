/*!
Signature sessions (stable shape).

Sign and verify variants share one composed session type; the direction
decides what `execute()` does and whether a signature fixture is captured
during setup.
*/

use crate::error::{Error, Result};
use crate::params;
use crate::provider::{self, registry, ProductSelector, SignatureInstance};
use crate::spec::{AlgorithmFamily, SignatureDirection, SignatureScheme};

/// Output of one signature session execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureOutcome {
    /// A produced signature
    Signature(Vec<u8>),
    /// A verification verdict
    Verified(bool),
}

/// A signature session for one (product, scheme, direction) triple
pub struct SignatureSession {
    product: ProductSelector,
    scheme: SignatureScheme,
    direction: SignatureDirection,
    message: &'static [u8],
    instance: Option<Box<dyn SignatureInstance>>,
    fixture: Option<Vec<u8>>,
}

impl SignatureSession {
    /// Create an unconfigured session over `message`
    pub fn new(
        product: ProductSelector,
        scheme: SignatureScheme,
        direction: SignatureDirection,
        message: &'static [u8],
    ) -> Self {
        Self {
            product,
            scheme,
            direction,
            message,
            instance: None,
            fixture: None,
        }
    }

    /// Configure the session: generate the key pair, instantiate the
    /// engine, and for verify sessions capture the signature fixture.
    /// Later calls are no-ops.
    pub fn setup(&mut self) -> Result<()> {
        if self.instance.is_some() {
            return Ok(());
        }
        let id = provider::resolve(self.product, AlgorithmFamily::Signature);
        let provider = registry::provider(id)?;

        let setup = params::signature_setup(self.scheme);
        let generator = provider.key_pair_generator(&setup.key_gen)?;
        let key_pair = generator.generate()?;
        let instance = provider.signature(self.scheme, &key_pair, setup.pss.as_ref())?;

        if self.direction == SignatureDirection::Verify {
            self.fixture = Some(instance.sign(self.message)?);
        }
        self.instance = Some(instance);
        log::debug!(
            "signature session {}/{}/{} configured on provider '{id}'",
            self.product,
            self.scheme,
            self.direction,
        );
        Ok(())
    }

    /// Sign the message, or verify the captured fixture against it
    pub fn execute(&mut self) -> Result<SignatureOutcome> {
        let instance = self.instance.as_ref().ok_or(Error::SessionNotConfigured)?;
        match self.direction {
            SignatureDirection::Sign => {
                Ok(SignatureOutcome::Signature(instance.sign(self.message)?))
            }
            SignatureDirection::Verify => {
                let fixture = self.fixture.as_ref().ok_or(Error::SessionNotConfigured)?;
                Ok(SignatureOutcome::Verified(
                    instance.verify(self.message, fixture)?,
                ))
            }
        }
    }

    /// Verify the captured fixture against an arbitrary message
    pub fn verify_against(&self, message: &[u8]) -> Result<bool> {
        let instance = self.instance.as_ref().ok_or(Error::SessionNotConfigured)?;
        let fixture = self.fixture.as_ref().ok_or(Error::SessionNotConfigured)?;
        instance.verify(message, fixture)
    }

    /// The signature fixture of a configured verify session
    pub fn fixture(&self) -> Option<&[u8]> {
        self.fixture.as_deref()
    }
}
