/*!
Error handling for the benchmark core.

Configuration problems and provider lookup failures are fatal to the
affected benchmark configuration and surface during setup; failures inside
a cryptographic primitive surface from the timed operation itself. Nothing
is retried: parameter mismatches are deterministic.
*/

use thiserror::Error;

use crate::provider::ProviderId;
use crate::spec::AlgorithmFamily;

/// Result type for the benchmark core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the benchmark core
#[derive(Error, Debug)]
pub enum Error {
    /// Unresolvable product/algorithm combination, malformed algorithm
    /// string, or unsupported parameter set
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The resolved provider is not present in the process registry
    #[error("provider '{0}' is not registered")]
    ProviderNotRegistered(ProviderId),

    /// The provider is registered but does not implement the requested
    /// operation family
    #[error("provider '{provider}' does not implement {family}")]
    UnsupportedOperation {
        /// Provider that was asked
        provider: ProviderId,
        /// Operation family it lacks
        family: AlgorithmFamily,
    },

    /// A cryptographic primitive failed (e.g. authentication tag mismatch,
    /// malformed key or signature)
    #[error("cryptographic operation failed: {0}")]
    Crypto(String),

    /// Error from the OpenSSL layer
    #[error("openssl error: {0}")]
    OpenSsl(#[from] openssl::error::ErrorStack),

    /// `execute` was invoked on a session that was never configured
    #[error("session is not configured")]
    SessionNotConfigured,
}

impl Error {
    /// Create a Configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }

    /// Create a Crypto error
    pub fn crypto(msg: impl Into<String>) -> Self {
        Error::Crypto(msg.into())
    }
}
