/*!
Key pair generation parameters.

These double as the key-pair-generation benchmark catalog and as the
generation parameters derived for signature and key-exchange sessions.
*/

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Named elliptic curves in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedCurve {
    /// NIST P-256 (secp256r1)
    P256,
}

impl NamedCurve {
    /// Get the name of the curve as a string
    pub fn name(&self) -> &'static str {
        match self {
            NamedCurve::P256 => "P-256",
        }
    }
}

/// Key pair generation parameter sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyGenParams {
    /// Elliptic-curve key over a named curve
    Ec(NamedCurve),
    /// Ed25519 signing key
    Ed25519,
    /// RSA key of the given modulus size and public exponent
    Rsa {
        /// Modulus size in bits
        modulus_bits: usize,
        /// Public exponent (F4 in the catalog)
        public_exponent: u64,
    },
    /// X25519 agreement key
    X25519,
}

/// RSA parameters used throughout the catalog: 2048-bit modulus, F4 exponent
pub const RSA_2048: KeyGenParams = KeyGenParams::Rsa {
    modulus_bits: 2048,
    public_exponent: 65537,
};

/// The fixed key-pair-generation catalog
pub const CATALOG: [KeyGenParams; 4] = [
    KeyGenParams::Ec(NamedCurve::P256),
    KeyGenParams::Ed25519,
    RSA_2048,
    KeyGenParams::X25519,
];

impl KeyGenParams {
    /// Get the name of the parameter set as a string
    pub fn name(&self) -> &'static str {
        match self {
            KeyGenParams::Ec(NamedCurve::P256) => "EC-P256",
            KeyGenParams::Ed25519 => "Ed25519",
            KeyGenParams::Rsa { .. } => "RSA-2048",
            KeyGenParams::X25519 => "X25519",
        }
    }
}

impl fmt::Display for KeyGenParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyGenParams {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        CATALOG
            .iter()
            .find(|p| p.name() == s)
            .copied()
            .ok_or_else(|| Error::config(format!("unknown key generation algorithm: '{s}'")))
    }
}
