/*!
Key exchange algorithm catalog.
*/

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::spec::key_pair::{KeyGenParams, NamedCurve};

/// Supported key exchange algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyExchangeAlgorithm {
    /// Elliptic-curve Diffie-Hellman over P-256
    EcdhP256,
    /// X25519
    X25519,
}

/// The fixed key exchange catalog
pub const CATALOG: [KeyExchangeAlgorithm; 2] = [
    KeyExchangeAlgorithm::EcdhP256,
    KeyExchangeAlgorithm::X25519,
];

impl Default for KeyExchangeAlgorithm {
    fn default() -> Self {
        KeyExchangeAlgorithm::X25519
    }
}

impl KeyExchangeAlgorithm {
    /// Get the name of the algorithm as a string
    pub fn name(&self) -> &'static str {
        match self {
            KeyExchangeAlgorithm::EcdhP256 => "ECDH-P256",
            KeyExchangeAlgorithm::X25519 => "X25519",
        }
    }

    /// Key generation parameters for the key pair the exchange runs with.
    ///
    /// ECDH needs an EC key pair, not a generator named after the exchange.
    pub fn key_gen_params(&self) -> KeyGenParams {
        match self {
            KeyExchangeAlgorithm::EcdhP256 => KeyGenParams::Ec(NamedCurve::P256),
            KeyExchangeAlgorithm::X25519 => KeyGenParams::X25519,
        }
    }
}

impl fmt::Display for KeyExchangeAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyExchangeAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        CATALOG
            .iter()
            .find(|alg| alg.name() == s)
            .copied()
            .ok_or_else(|| Error::config(format!("unknown key exchange algorithm: '{s}'")))
    }
}
