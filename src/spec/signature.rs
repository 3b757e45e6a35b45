/*!
Signature scheme catalog.
*/

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::spec::key_pair::{self, KeyGenParams, NamedCurve};

/// Supported digital signature schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureScheme {
    /// ECDSA over P-256 with SHA-256
    EcdsaP256Sha256,
    /// ECDSA over P-256 with SHA3-256
    EcdsaP256Sha3_256,
    /// Ed25519
    Ed25519,
    /// RSA PKCS#1 v1.5 with SHA-256
    RsaPkcs1Sha256,
    /// RSA PKCS#1 v1.5 with SHA3-256
    RsaPkcs1Sha3_256,
    /// RSASSA-PSS with SHA-256 and MGF1-SHA-256
    RsaPss,
}

/// The fixed signature catalog
pub const CATALOG: [SignatureScheme; 6] = [
    SignatureScheme::EcdsaP256Sha256,
    SignatureScheme::EcdsaP256Sha3_256,
    SignatureScheme::Ed25519,
    SignatureScheme::RsaPkcs1Sha256,
    SignatureScheme::RsaPkcs1Sha3_256,
    SignatureScheme::RsaPss,
];

impl Default for SignatureScheme {
    fn default() -> Self {
        SignatureScheme::Ed25519
    }
}

impl SignatureScheme {
    /// Get the name of the scheme as a string
    pub fn name(&self) -> &'static str {
        match self {
            SignatureScheme::EcdsaP256Sha256 => "ECDSA-P256-SHA256",
            SignatureScheme::EcdsaP256Sha3_256 => "ECDSA-P256-SHA3-256",
            SignatureScheme::Ed25519 => "Ed25519",
            SignatureScheme::RsaPkcs1Sha256 => "RSA-PKCS1-SHA256",
            SignatureScheme::RsaPkcs1Sha3_256 => "RSA-PKCS1-SHA3-256",
            SignatureScheme::RsaPss => "RSA-PSS",
        }
    }

    /// Key generation parameters for the key pair this scheme signs with.
    ///
    /// ECDSA schemes need an EC key, not a generator named after the
    /// scheme itself.
    pub fn key_gen_params(&self) -> KeyGenParams {
        match self {
            SignatureScheme::EcdsaP256Sha256 | SignatureScheme::EcdsaP256Sha3_256 => {
                KeyGenParams::Ec(NamedCurve::P256)
            }
            SignatureScheme::Ed25519 => KeyGenParams::Ed25519,
            SignatureScheme::RsaPkcs1Sha256
            | SignatureScheme::RsaPkcs1Sha3_256
            | SignatureScheme::RsaPss => key_pair::RSA_2048,
        }
    }

    /// Whether the scheme takes probabilistic-padding parameters
    pub fn is_pss(&self) -> bool {
        matches!(self, SignatureScheme::RsaPss)
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignatureScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        CATALOG
            .iter()
            .find(|scheme| scheme.name() == s)
            .copied()
            .ok_or_else(|| Error::config(format!("unknown signature scheme: '{s}'")))
    }
}
