/*!
Traits for cryptographic providers and their primitive instances.

A provider hands out configured primitive instances; an instance owns
everything it needs to run its operation repeatedly. Family-partitioned
providers only override the constructors for the families they serve; the
default method bodies report the operation as unsupported.
*/

use crate::error::{Error, Result};
use crate::params::{CipherParams, PssParams};
use crate::provider::ProviderId;
use crate::spec::{AlgorithmFamily, CipherSpec, DigestAlgorithm, Direction, KeyExchangeAlgorithm,
                  KeyGenParams, MacAlgorithm, SignatureScheme};

/// A configured cipher, bound to one direction, key and nonce/IV
pub trait CipherInstance: Send {
    /// Run the configured operation over `input`, returning ciphertext
    /// (with the tag appended for AEADs) or plaintext
    fn process(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// A message digest instance
pub trait DigestInstance: Send {
    /// Digest `input`
    fn digest(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// A keyed MAC instance
pub trait MacInstance: Send {
    /// Compute the MAC of `input`
    fn compute(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// A signature engine bound to one key pair
pub trait SignatureInstance: Send {
    /// Sign `message`
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>>;

    /// Verify `signature` over `message`. A failed verification is an
    /// `Ok(false)` outcome, not an error.
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool>;
}

/// A key agreement instance bound to one key pair
pub trait KeyExchangeInstance: Send {
    /// Derive the shared secret
    fn derive_shared_secret(&self) -> Result<Vec<u8>>;
}

/// A configured key pair generator
pub trait KeyPairGenerator: Send {
    /// Generate a fresh key pair; this is the timed operation of the
    /// key-pair-generation benchmarks
    fn generate(&self) -> Result<KeyPair>;
}

/// A generated key pair, carried as the concrete key type of the stack
/// that produced it. Handing a provider a foreign variant is a
/// configuration error.
pub enum KeyPair {
    /// P-256 secret key (serves both ECDSA and ECDH)
    EcP256(p256::SecretKey),
    /// Ed25519 signing key
    Ed25519(ed25519_dalek::SigningKey),
    /// RSA private key
    Rsa(Box<rsa::RsaPrivateKey>),
    /// X25519 secret
    X25519(x25519_dalek::StaticSecret),
    /// OpenSSL private key of any algorithm
    OpenSsl(openssl::pkey::PKey<openssl::pkey::Private>),
}

impl KeyPair {
    /// Get the name of the holding stack, for diagnostics
    pub fn stack(&self) -> &'static str {
        match self {
            KeyPair::EcP256(_) | KeyPair::Ed25519(_) | KeyPair::Rsa(_) | KeyPair::X25519(_) => {
                "rustcrypto"
            }
            KeyPair::OpenSsl(_) => "openssl",
        }
    }

    /// Configuration error for a key pair that does not fit the requested
    /// scheme or provider
    pub(crate) fn mismatch(&self, wanted: &str) -> Error {
        Error::config(format!(
            "key pair from the {} stack does not fit {wanted}",
            self.stack()
        ))
    }
}

/// A cryptographic provider: a named factory for configured primitive
/// instances
pub trait CryptoProvider: Send + Sync {
    /// Identifier this provider is registered under
    fn id(&self) -> ProviderId;

    /// Create a cipher configured for one direction, key and parameter set
    fn cipher(
        &self,
        _spec: &CipherSpec,
        _direction: Direction,
        _key: &[u8],
        _params: &CipherParams,
    ) -> Result<Box<dyn CipherInstance>> {
        Err(self.unsupported(AlgorithmFamily::BlockCipher))
    }

    /// Create a digest instance
    fn digest(&self, _algorithm: DigestAlgorithm) -> Result<Box<dyn DigestInstance>> {
        Err(self.unsupported(AlgorithmFamily::Digest))
    }

    /// Create a MAC instance keyed with `key`
    fn mac(&self, _algorithm: MacAlgorithm, _key: &[u8]) -> Result<Box<dyn MacInstance>> {
        Err(self.unsupported(AlgorithmFamily::Mac))
    }

    /// Create a signature engine over `key_pair`, applying `pss` after
    /// instantiation when present
    fn signature(
        &self,
        _scheme: SignatureScheme,
        _key_pair: &KeyPair,
        _pss: Option<&PssParams>,
    ) -> Result<Box<dyn SignatureInstance>> {
        Err(self.unsupported(AlgorithmFamily::Signature))
    }

    /// Create a key agreement instance over `key_pair`
    fn key_exchange(
        &self,
        _algorithm: KeyExchangeAlgorithm,
        _key_pair: &KeyPair,
    ) -> Result<Box<dyn KeyExchangeInstance>> {
        Err(self.unsupported(AlgorithmFamily::KeyExchange))
    }

    /// Create a key pair generator for `params`
    fn key_pair_generator(&self, _params: &KeyGenParams) -> Result<Box<dyn KeyPairGenerator>> {
        Err(self.unsupported(AlgorithmFamily::KeyPairGeneration))
    }

    /// Provider lookup error for a family this provider does not serve
    fn unsupported(&self, family: AlgorithmFamily) -> Error {
        Error::UnsupportedOperation {
            provider: self.id(),
            family,
        }
    }
}
