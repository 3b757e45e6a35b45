/*!
Algorithm specifications.

This module defines the fixed catalog of benchmarked algorithms as
structured types. Algorithm strings are parsed once at the boundary; all
further dispatch is on the parsed variants.
*/

use std::fmt;

pub mod cipher;
pub mod digest;
pub mod key_exchange;
pub mod key_pair;
pub mod mac;
pub mod signature;

pub use cipher::{AesMode, CipherSpec, Padding};
pub use digest::DigestAlgorithm;
pub use key_exchange::KeyExchangeAlgorithm;
pub use key_pair::{KeyGenParams, NamedCurve};
pub use mac::MacAlgorithm;
pub use signature::SignatureScheme;

/// Operation families recognized by the provider resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmFamily {
    /// Block ciphers and their operation modes (AES/CBC, AES/GCM, ...)
    BlockCipher,
    /// Stream ciphers and stream-based AEADs (ChaCha20 family)
    StreamCipherAead,
    /// Message digests
    Digest,
    /// Message authentication codes
    Mac,
    /// Digital signatures
    Signature,
    /// Key agreement
    KeyExchange,
    /// Key pair generation
    KeyPairGeneration,
}

impl AlgorithmFamily {
    /// All families, for exhaustive resolver checks
    pub const ALL: [AlgorithmFamily; 7] = [
        AlgorithmFamily::BlockCipher,
        AlgorithmFamily::StreamCipherAead,
        AlgorithmFamily::Digest,
        AlgorithmFamily::Mac,
        AlgorithmFamily::Signature,
        AlgorithmFamily::KeyExchange,
        AlgorithmFamily::KeyPairGeneration,
    ];

    /// Get the name of the family as a string
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmFamily::BlockCipher => "block-cipher",
            AlgorithmFamily::StreamCipherAead => "stream-cipher-aead",
            AlgorithmFamily::Digest => "digest",
            AlgorithmFamily::Mac => "mac",
            AlgorithmFamily::Signature => "signature",
            AlgorithmFamily::KeyExchange => "key-exchange",
            AlgorithmFamily::KeyPairGeneration => "key-pair-generation",
        }
    }
}

impl fmt::Display for AlgorithmFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cipher operation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Encryption
    Encrypt,
    /// Decryption
    Decrypt,
}

impl Direction {
    /// Get the name of the direction as a string
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signature operation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureDirection {
    /// Produce a signature
    Sign,
    /// Verify a signature
    Verify,
}

impl SignatureDirection {
    /// Get the name of the direction as a string
    pub fn name(&self) -> &'static str {
        match self {
            SignatureDirection::Sign => "sign",
            SignatureDirection::Verify => "verify",
        }
    }
}

impl fmt::Display for SignatureDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
