/*!
Cipher transformation specifications.

Transformation strings use the `cipher/mode/padding` form for block ciphers
(e.g. `AES/CBC/PKCS5Padding`) and a bare algorithm name for the ChaCha20
family. They are parsed into a structured spec here; nothing downstream
looks at the string again.
*/

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::spec::AlgorithmFamily;

/// AES operation modes in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AesMode {
    /// Cipher block chaining
    Cbc,
    /// Counter mode
    Ctr,
    /// Electronic codebook
    Ecb,
    /// Galois/counter mode (AEAD)
    Gcm,
}

impl AesMode {
    /// Get the name of the mode as a string
    pub fn name(&self) -> &'static str {
        match self {
            AesMode::Cbc => "CBC",
            AesMode::Ctr => "CTR",
            AesMode::Ecb => "ECB",
            AesMode::Gcm => "GCM",
        }
    }
}

/// Block cipher padding schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// No padding; input must be block-aligned
    None,
    /// PKCS#5/PKCS#7 padding
    Pkcs5,
}

impl Padding {
    /// Get the name of the padding as a string
    pub fn name(&self) -> &'static str {
        match self {
            Padding::None => "NoPadding",
            Padding::Pkcs5 => "PKCS5Padding",
        }
    }
}

/// A parsed cipher transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherSpec {
    /// AES-128 under one of the catalog operation modes
    Aes {
        /// Operation mode
        mode: AesMode,
        /// Padding scheme
        padding: Padding,
    },
    /// Plain ChaCha20 stream cipher
    ChaCha20,
    /// ChaCha20-Poly1305 AEAD
    ChaCha20Poly1305,
}

/// The fixed transformation catalog, as accepted by [`CipherSpec::from_str`]
pub const CATALOG: [&str; 8] = [
    "AES/CBC/NoPadding",
    "AES/CBC/PKCS5Padding",
    "AES/CTR/NoPadding",
    "AES/ECB/NoPadding",
    "AES/ECB/PKCS5Padding",
    "AES/GCM/NoPadding",
    "ChaCha20",
    "ChaCha20-Poly1305",
];

impl CipherSpec {
    /// Family used for provider resolution
    pub fn family(&self) -> AlgorithmFamily {
        match self {
            CipherSpec::Aes { .. } => AlgorithmFamily::BlockCipher,
            CipherSpec::ChaCha20 | CipherSpec::ChaCha20Poly1305 => {
                AlgorithmFamily::StreamCipherAead
            }
        }
    }

    /// Key length in bytes mandated by the algorithm
    pub fn key_len(&self) -> usize {
        match self {
            CipherSpec::Aes { .. } => 16,
            CipherSpec::ChaCha20 | CipherSpec::ChaCha20Poly1305 => 32,
        }
    }

    /// Nonce/IV length in bytes, or 0 when the mode takes none
    pub fn iv_len(&self) -> usize {
        match self {
            CipherSpec::Aes { mode: AesMode::Ecb, .. } => 0,
            CipherSpec::Aes { .. } => 16,
            CipherSpec::ChaCha20 | CipherSpec::ChaCha20Poly1305 => 12,
        }
    }

    /// Whether reusing a nonce under a fixed key breaks the mode
    pub fn nonce_sensitive(&self) -> bool {
        matches!(
            self,
            CipherSpec::Aes { mode: AesMode::Gcm, .. }
                | CipherSpec::ChaCha20
                | CipherSpec::ChaCha20Poly1305
        )
    }

    /// Whether the transformation carries an authentication tag
    pub fn is_aead(&self) -> bool {
        matches!(
            self,
            CipherSpec::Aes { mode: AesMode::Gcm, .. } | CipherSpec::ChaCha20Poly1305
        )
    }

    /// Get the transformation string for this spec
    pub fn name(&self) -> String {
        match self {
            CipherSpec::Aes { mode, padding } => {
                format!("AES/{}/{}", mode.name(), padding.name())
            }
            CipherSpec::ChaCha20 => "ChaCha20".to_string(),
            CipherSpec::ChaCha20Poly1305 => "ChaCha20-Poly1305".to_string(),
        }
    }
}

impl fmt::Display for CipherSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for CipherSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "ChaCha20" => return Ok(CipherSpec::ChaCha20),
            "ChaCha20-Poly1305" => return Ok(CipherSpec::ChaCha20Poly1305),
            _ => {}
        }

        let mut parts = s.split('/');
        let (cipher, mode, padding) = match (parts.next(), parts.next(), parts.next(), parts.next())
        {
            (Some(c), Some(m), Some(p), None) => (c, m, p),
            _ => {
                return Err(Error::config(format!(
                    "unknown cipher transformation: '{s}'"
                )));
            }
        };

        if cipher != "AES" {
            return Err(Error::config(format!("unknown cipher algorithm: '{cipher}'")));
        }

        let mode = match mode {
            "CBC" => AesMode::Cbc,
            "CTR" => AesMode::Ctr,
            "ECB" => AesMode::Ecb,
            "GCM" => AesMode::Gcm,
            _ => {
                return Err(Error::config(format!(
                    "unknown operation mode in the transformation: '{s}'"
                )));
            }
        };

        let padding = match padding {
            "NoPadding" => Padding::None,
            "PKCS5Padding" | "PKCS7Padding" => Padding::Pkcs5,
            _ => {
                return Err(Error::config(format!(
                    "unknown padding in the transformation: '{s}'"
                )));
            }
        };

        // Streaming and AEAD modes never take padding.
        if matches!(mode, AesMode::Ctr | AesMode::Gcm) && padding != Padding::None {
            return Err(Error::config(format!(
                "{} does not support padding: '{s}'",
                mode.name()
            )));
        }

        Ok(CipherSpec::Aes { mode, padding })
    }
}
