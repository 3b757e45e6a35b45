/*!
Parameter builder.

Given a resolved provider and a parsed algorithm spec, this module derives
the key material, the algorithm-specific parameter object, and the nonce/IV
discipline for one operation session. It is the central decision table of
the crate; providers only interpret what is built here.
*/

use crate::data::{self, KEY_16, KEY_32};
use crate::error::{Error, Result};
use crate::provider::ProviderId;
use crate::spec::{AesMode, CipherSpec, Direction, KeyExchangeAlgorithm, KeyGenParams,
                  SignatureScheme};

/// Tag length for every AEAD in the catalog, in bits
pub const AEAD_TAG_BITS: usize = 128;

/// PSS salt length used by the RSA-PSS scheme, in bytes
pub const PSS_SALT_LEN: usize = 20;

/// Algorithm-specific cipher parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherParams {
    /// No parameter object (ECB)
    None,
    /// Plain 16-byte IV (CBC, CTR)
    Iv([u8; 16]),
    /// GCM nonce plus authentication tag length
    GcmNonce {
        /// 16-byte nonce
        nonce: [u8; 16],
        /// Tag length in bits
        tag_bits: usize,
    },
    /// Counter-augmented ChaCha20 parameter (pure-Rust provider)
    ChaCha20 {
        /// 12-byte nonce
        nonce: [u8; 12],
        /// Initial block counter
        counter: u32,
    },
    /// Bare 12-byte nonce (pure-Rust ChaCha20-Poly1305)
    Iv12([u8; 12]),
    /// Unified AEAD parameter carrying nonce and tag length (OpenSSL
    /// ChaCha20 family)
    Aead {
        /// 12-byte nonce
        nonce: [u8; 12],
        /// Tag length in bits
        tag_bits: usize,
    },
}

impl CipherParams {
    /// The nonce/IV bytes carried by this parameter object, if any
    pub fn iv(&self) -> Option<&[u8]> {
        match self {
            CipherParams::None => None,
            CipherParams::Iv(iv) => Some(iv),
            CipherParams::GcmNonce { nonce, .. } => Some(nonce),
            CipherParams::ChaCha20 { nonce, .. } => Some(nonce),
            CipherParams::Iv12(nonce) => Some(nonce),
            CipherParams::Aead { nonce, .. } => Some(nonce),
        }
    }
}

/// Key material plus parameter object for one cipher configuration
#[derive(Debug, Clone)]
pub struct CipherSetup {
    /// Symmetric key, selected from the fixed pool by algorithm
    pub key: &'static [u8],
    /// Mode- and provider-specific parameters
    pub params: CipherParams,
}

/// Probabilistic-padding parameters for RSA-PSS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PssParams {
    /// Salt length in bytes
    pub salt_len: usize,
}

/// Signature configuration: key generation parameters and, for PSS, the
/// padding parameters applied after the engine is instantiated
#[derive(Debug, Clone, Copy)]
pub struct SignatureSetup {
    /// Parameters for generating the signing key pair
    pub key_gen: KeyGenParams,
    /// PSS parameters, present only for probabilistic padding schemes
    pub pss: Option<PssParams>,
}

fn fresh_iv<const N: usize>() -> [u8; N] {
    let mut iv = [0u8; N];
    iv.copy_from_slice(&data::random_bytes(N));
    iv
}

/// Build key material and parameters for one cipher configuration.
///
/// Encrypt-direction parameters always carry a freshly generated nonce/IV.
/// Decrypt-direction parameters must be the ones captured from the matching
/// encrypt-direction build; they are never generated independently.
pub fn cipher_setup(
    provider: ProviderId,
    spec: &CipherSpec,
    direction: Direction,
    captured: Option<&CipherParams>,
) -> Result<CipherSetup> {
    let key: &'static [u8] = match spec.key_len() {
        16 => &KEY_16,
        32 => &KEY_32,
        n => return Err(Error::config(format!("no fixed key of {n} bytes in the pool"))),
    };

    let params = match direction {
        Direction::Encrypt => fresh_params(provider, spec),
        Direction::Decrypt => captured
            .cloned()
            .ok_or_else(|| {
                Error::config("decrypt parameters must be captured from an encryption")
            })?,
    };

    Ok(CipherSetup { key, params })
}

fn fresh_params(provider: ProviderId, spec: &CipherSpec) -> CipherParams {
    match spec {
        CipherSpec::Aes { mode, .. } => match mode {
            AesMode::Cbc | AesMode::Ctr => CipherParams::Iv(fresh_iv()),
            AesMode::Ecb => CipherParams::None,
            AesMode::Gcm => CipherParams::GcmNonce {
                nonce: fresh_iv(),
                tag_bits: AEAD_TAG_BITS,
            },
        },
        // The parameter shape for the ChaCha20 family is provider-dependent:
        // OpenSSL takes one unified AEAD parameter for both algorithms, the
        // pure-Rust stack takes a counter-augmented parameter for the plain
        // stream cipher and a bare nonce for the AEAD.
        CipherSpec::ChaCha20 => match provider {
            ProviderId::OpenSsl => CipherParams::Aead {
                nonce: fresh_iv(),
                tag_bits: AEAD_TAG_BITS,
            },
            _ => CipherParams::ChaCha20 {
                nonce: fresh_iv(),
                counter: 0,
            },
        },
        CipherSpec::ChaCha20Poly1305 => match provider {
            ProviderId::OpenSsl => CipherParams::Aead {
                nonce: fresh_iv(),
                tag_bits: AEAD_TAG_BITS,
            },
            _ => CipherParams::Iv12(fresh_iv()),
        },
    }
}

/// Key material for MAC sessions: every catalog MAC runs with the fixed
/// 16-byte key
pub fn mac_key() -> &'static [u8] {
    &KEY_16
}

/// Build the signature configuration for a scheme
pub fn signature_setup(scheme: SignatureScheme) -> SignatureSetup {
    SignatureSetup {
        key_gen: scheme.key_gen_params(),
        pss: scheme.is_pss().then_some(PssParams { salt_len: PSS_SALT_LEN }),
    }
}

/// Derive the key generation parameters for a key exchange algorithm
pub fn key_exchange_setup(algorithm: KeyExchangeAlgorithm) -> KeyGenParams {
    algorithm.key_gen_params()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::cipher;

    // ----- Cipher parameter shapes -----

    #[test]
    fn test_block_mode_params() {
        let cbc: CipherSpec = "AES/CBC/NoPadding".parse().unwrap();
        let setup = cipher_setup(ProviderId::RustCrypto, &cbc, Direction::Encrypt, None).unwrap();
        assert_eq!(setup.key.len(), 16);
        assert!(matches!(setup.params, CipherParams::Iv(_)));

        let ecb: CipherSpec = "AES/ECB/NoPadding".parse().unwrap();
        let setup = cipher_setup(ProviderId::OpenSsl, &ecb, Direction::Encrypt, None).unwrap();
        assert_eq!(setup.params, CipherParams::None);

        let gcm: CipherSpec = "AES/GCM/NoPadding".parse().unwrap();
        let setup = cipher_setup(ProviderId::RustCrypto, &gcm, Direction::Encrypt, None).unwrap();
        match setup.params {
            CipherParams::GcmNonce { tag_bits, .. } => assert_eq!(tag_bits, 128),
            other => panic!("unexpected GCM params: {other:?}"),
        }
    }

    #[test]
    fn test_chacha20_params_branch_on_provider() {
        let setup = cipher_setup(
            ProviderId::RustCrypto,
            &CipherSpec::ChaCha20,
            Direction::Encrypt,
            None,
        )
        .unwrap();
        assert!(matches!(setup.params, CipherParams::ChaCha20 { counter: 0, .. }));

        let setup = cipher_setup(
            ProviderId::OpenSsl,
            &CipherSpec::ChaCha20,
            Direction::Encrypt,
            None,
        )
        .unwrap();
        assert!(matches!(setup.params, CipherParams::Aead { tag_bits: 128, .. }));

        let setup = cipher_setup(
            ProviderId::RustCrypto,
            &CipherSpec::ChaCha20Poly1305,
            Direction::Encrypt,
            None,
        )
        .unwrap();
        assert!(matches!(setup.params, CipherParams::Iv12(_)));
        assert_eq!(setup.key.len(), 32);
    }

    #[test]
    fn test_encrypt_ivs_are_fresh() {
        let ctr: CipherSpec = "AES/CTR/NoPadding".parse().unwrap();
        let a = cipher_setup(ProviderId::RustCrypto, &ctr, Direction::Encrypt, None).unwrap();
        let b = cipher_setup(ProviderId::RustCrypto, &ctr, Direction::Encrypt, None).unwrap();
        assert_ne!(a.params.iv().unwrap(), b.params.iv().unwrap());
    }

    #[test]
    fn test_decrypt_requires_captured_params() {
        let gcm: CipherSpec = "AES/GCM/NoPadding".parse().unwrap();
        assert!(matches!(
            cipher_setup(ProviderId::RustCrypto, &gcm, Direction::Decrypt, None),
            Err(Error::Configuration(_))
        ));

        let enc = cipher_setup(ProviderId::RustCrypto, &gcm, Direction::Encrypt, None).unwrap();
        let dec = cipher_setup(
            ProviderId::RustCrypto,
            &gcm,
            Direction::Decrypt,
            Some(&enc.params),
        )
        .unwrap();
        assert_eq!(dec.params, enc.params);
    }

    #[test]
    fn test_every_catalog_entry_builds() {
        for name in cipher::CATALOG {
            let spec: CipherSpec = name.parse().unwrap();
            for provider in [ProviderId::RustCrypto, ProviderId::OpenSsl] {
                let setup = cipher_setup(provider, &spec, Direction::Encrypt, None).unwrap();
                match setup.params.iv() {
                    Some(iv) => assert_eq!(iv.len(), spec.iv_len(), "{name}"),
                    None => assert_eq!(spec.iv_len(), 0, "{name}"),
                }
            }
        }
    }

    // ----- Signature and key exchange derivation -----

    #[test]
    fn test_signature_setup() {
        let setup = signature_setup(SignatureScheme::RsaPss);
        assert_eq!(setup.pss, Some(PssParams { salt_len: 20 }));

        let setup = signature_setup(SignatureScheme::Ed25519);
        assert_eq!(setup.key_gen, KeyGenParams::Ed25519);
        assert!(setup.pss.is_none());
    }

    #[test]
    fn test_key_exchange_setup() {
        use crate::spec::NamedCurve;
        assert_eq!(
            key_exchange_setup(KeyExchangeAlgorithm::EcdhP256),
            KeyGenParams::Ec(NamedCurve::P256)
        );
        assert_eq!(
            key_exchange_setup(KeyExchangeAlgorithm::X25519),
            KeyGenParams::X25519
        );
    }
}
