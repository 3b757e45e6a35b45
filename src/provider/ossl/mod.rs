/*!
The alternate product: one OpenSSL-backed provider covering every family.

OpenSSL engines borrow their key objects, so instances own the key and
rebuild the short-lived engine (Crypter, Signer, Deriver) on each call.
Construction validates the configuration once so unsupported combinations
fail during setup rather than in the timed path.
*/

use openssl::bn::BigNum;
use openssl::derive::Deriver;
use openssl::ec::{EcGroup, EcKey};
use openssl::hash::{hash, MessageDigest};
use openssl::nid::Nid;
use openssl::pkey::{Id, PKey, Private};
use openssl::rsa::{Padding as RsaPadding, Rsa};
use openssl::sign::{RsaPssSaltlen, Signer, Verifier};
use openssl::symm::{decrypt_aead, encrypt_aead, Cipher as SymmCipher, Crypter, Mode};

use crate::error::{Error, Result};
use crate::params::{CipherParams, PssParams};
use crate::provider::traits::{
    CipherInstance, CryptoProvider, DigestInstance, KeyExchangeInstance, KeyPair,
    KeyPairGenerator, MacInstance, SignatureInstance,
};
use crate::provider::ProviderId;
use crate::spec::{AesMode, CipherSpec, DigestAlgorithm, Direction, KeyExchangeAlgorithm,
                  KeyGenParams, MacAlgorithm, NamedCurve, Padding, SignatureScheme};

/// OpenSSL-backed provider, registered as the alternate product
pub struct OpenSslProvider;

impl CryptoProvider for OpenSslProvider {
    fn id(&self) -> ProviderId {
        ProviderId::OpenSsl
    }

    fn cipher(
        &self,
        spec: &CipherSpec,
        direction: Direction,
        key: &[u8],
        params: &CipherParams,
    ) -> Result<Box<dyn CipherInstance>> {
        match (spec, params) {
            (CipherSpec::Aes { mode: AesMode::Gcm, .. }, CipherParams::GcmNonce { nonce, .. }) => {
                Ok(Box::new(OsslAead {
                    cipher: SymmCipher::aes_128_gcm(),
                    direction,
                    key: key.to_vec(),
                    iv: nonce.to_vec(),
                }))
            }
            (CipherSpec::ChaCha20Poly1305, CipherParams::Aead { nonce, .. }) => {
                Ok(Box::new(OsslAead {
                    cipher: SymmCipher::chacha20_poly1305(),
                    direction,
                    key: key.to_vec(),
                    iv: nonce.to_vec(),
                }))
            }
            (CipherSpec::ChaCha20, CipherParams::Aead { nonce, .. }) => {
                // OpenSSL's ChaCha20 IV is the 4-byte little-endian block
                // counter followed by the 12-byte nonce.
                let mut iv = vec![0u8; 4];
                iv.extend_from_slice(nonce);
                let instance = OsslCipher {
                    cipher: SymmCipher::chacha20(),
                    mode: mode(direction),
                    key: key.to_vec(),
                    iv: Some(iv),
                    pad: false,
                };
                instance.build_crypter()?;
                Ok(Box::new(instance))
            }
            (CipherSpec::Aes { mode: aes_mode, padding }, _) => {
                let (cipher, iv) = match (aes_mode, params) {
                    (AesMode::Cbc, CipherParams::Iv(iv)) => {
                        (SymmCipher::aes_128_cbc(), Some(iv.to_vec()))
                    }
                    (AesMode::Ctr, CipherParams::Iv(iv)) => {
                        (SymmCipher::aes_128_ctr(), Some(iv.to_vec()))
                    }
                    (AesMode::Ecb, CipherParams::None) => (SymmCipher::aes_128_ecb(), None),
                    _ => {
                        return Err(Error::config(format!(
                            "parameter object {params:?} does not fit {spec} on provider '{}'",
                            self.id()
                        )));
                    }
                };
                let instance = OsslCipher {
                    cipher,
                    mode: mode(direction),
                    key: key.to_vec(),
                    iv,
                    pad: *padding == Padding::Pkcs5,
                };
                instance.build_crypter()?;
                Ok(Box::new(instance))
            }
            (spec, params) => Err(Error::config(format!(
                "parameter object {params:?} does not fit {spec} on provider '{}'",
                self.id()
            ))),
        }
    }

    fn digest(&self, algorithm: DigestAlgorithm) -> Result<Box<dyn DigestInstance>> {
        Ok(Box::new(OsslDigest {
            md: message_digest(algorithm)?,
        }))
    }

    fn mac(&self, algorithm: MacAlgorithm, key: &[u8]) -> Result<Box<dyn MacInstance>> {
        let instance = OsslHmac {
            md: message_digest(algorithm.digest())?,
            key: PKey::hmac(key)?,
        };
        // Validate the digest/key combination during setup.
        Signer::new(instance.md, &instance.key)?;
        Ok(Box::new(instance))
    }

    fn signature(
        &self,
        scheme: SignatureScheme,
        key_pair: &KeyPair,
        pss: Option<&PssParams>,
    ) -> Result<Box<dyn SignatureInstance>> {
        if scheme.is_pss() != pss.is_some() {
            return Err(Error::config(format!(
                "PSS parameters {} for {scheme}",
                if pss.is_some() { "supplied" } else { "missing" }
            )));
        }

        let KeyPair::OpenSsl(key) = key_pair else {
            return Err(key_pair.mismatch(scheme.name()));
        };

        let expected = match scheme {
            SignatureScheme::EcdsaP256Sha256 | SignatureScheme::EcdsaP256Sha3_256 => Id::EC,
            SignatureScheme::Ed25519 => Id::ED25519,
            SignatureScheme::RsaPkcs1Sha256
            | SignatureScheme::RsaPkcs1Sha3_256
            | SignatureScheme::RsaPss => Id::RSA,
        };
        if key.id() != expected {
            return Err(key_pair.mismatch(scheme.name()));
        }

        let md = match scheme {
            SignatureScheme::EcdsaP256Sha256 | SignatureScheme::RsaPkcs1Sha256 => {
                Some(MessageDigest::sha256())
            }
            SignatureScheme::EcdsaP256Sha3_256 | SignatureScheme::RsaPkcs1Sha3_256 => {
                Some(MessageDigest::sha3_256())
            }
            SignatureScheme::RsaPss => Some(MessageDigest::sha256()),
            SignatureScheme::Ed25519 => None,
        };

        let instance = OsslSignature {
            md,
            pss: pss.copied(),
            key: key.clone(),
        };
        // Validate the engine configuration during setup.
        instance.build_signer()?;
        Ok(Box::new(instance))
    }

    fn key_exchange(
        &self,
        algorithm: KeyExchangeAlgorithm,
        key_pair: &KeyPair,
    ) -> Result<Box<dyn KeyExchangeInstance>> {
        let KeyPair::OpenSsl(key) = key_pair else {
            return Err(key_pair.mismatch(algorithm.name()));
        };
        let expected = match algorithm {
            KeyExchangeAlgorithm::EcdhP256 => Id::EC,
            KeyExchangeAlgorithm::X25519 => Id::X25519,
        };
        if key.id() != expected {
            return Err(key_pair.mismatch(algorithm.name()));
        }
        Ok(Box::new(OsslKeyExchange { key: key.clone() }))
    }

    fn key_pair_generator(&self, params: &KeyGenParams) -> Result<Box<dyn KeyPairGenerator>> {
        Ok(Box::new(OsslKeyGen { params: *params }))
    }
}

fn mode(direction: Direction) -> Mode {
    match direction {
        Direction::Encrypt => Mode::Encrypt,
        Direction::Decrypt => Mode::Decrypt,
    }
}

fn message_digest(algorithm: DigestAlgorithm) -> Result<MessageDigest> {
    let md = match algorithm {
        DigestAlgorithm::Sha1 => MessageDigest::sha1(),
        DigestAlgorithm::Sha224 => MessageDigest::sha224(),
        DigestAlgorithm::Sha256 => MessageDigest::sha256(),
        DigestAlgorithm::Sha384 => MessageDigest::sha384(),
        DigestAlgorithm::Sha512 => MessageDigest::sha512(),
        // The truncated SHA-512 variants have no dedicated constructor.
        DigestAlgorithm::Sha512_224 => named_digest("SHA512-224")?,
        DigestAlgorithm::Sha512_256 => named_digest("SHA512-256")?,
        DigestAlgorithm::Sha3_224 => MessageDigest::sha3_224(),
        DigestAlgorithm::Sha3_256 => MessageDigest::sha3_256(),
        DigestAlgorithm::Sha3_384 => MessageDigest::sha3_384(),
        DigestAlgorithm::Sha3_512 => MessageDigest::sha3_512(),
    };
    Ok(md)
}

fn named_digest(name: &str) -> Result<MessageDigest> {
    MessageDigest::from_name(name)
        .ok_or_else(|| Error::config(format!("openssl build does not provide {name}")))
}

// ----- Ciphers -----

const AEAD_TAG_LEN: usize = 16;

struct OsslCipher {
    cipher: SymmCipher,
    mode: Mode,
    key: Vec<u8>,
    iv: Option<Vec<u8>>,
    pad: bool,
}

impl OsslCipher {
    fn build_crypter(&self) -> Result<Crypter> {
        let mut crypter = Crypter::new(self.cipher, self.mode, &self.key, self.iv.as_deref())?;
        crypter.pad(self.pad);
        Ok(crypter)
    }
}

impl CipherInstance for OsslCipher {
    fn process(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut crypter = self.build_crypter()?;
        let mut out = vec![0u8; input.len() + self.cipher.block_size()];
        let mut count = crypter.update(input, &mut out)?;
        count += crypter.finalize(&mut out[count..])?;
        out.truncate(count);
        Ok(out)
    }
}

struct OsslAead {
    cipher: SymmCipher,
    direction: Direction,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl CipherInstance for OsslAead {
    fn process(&self, input: &[u8]) -> Result<Vec<u8>> {
        match self.direction {
            Direction::Encrypt => {
                let mut tag = [0u8; AEAD_TAG_LEN];
                let mut out =
                    encrypt_aead(self.cipher, &self.key, Some(&self.iv), &[], input, &mut tag)?;
                out.extend_from_slice(&tag);
                Ok(out)
            }
            Direction::Decrypt => {
                if input.len() < AEAD_TAG_LEN {
                    return Err(Error::crypto("ciphertext shorter than the tag"));
                }
                let (data, tag) = input.split_at(input.len() - AEAD_TAG_LEN);
                decrypt_aead(self.cipher, &self.key, Some(&self.iv), &[], data, tag)
                    .map_err(|_| Error::crypto("authentication tag verification failed"))
            }
        }
    }
}

// ----- Digest and MAC -----

struct OsslDigest {
    md: MessageDigest,
}

impl DigestInstance for OsslDigest {
    fn digest(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(hash(self.md, input)?.to_vec())
    }
}

struct OsslHmac {
    md: MessageDigest,
    key: PKey<Private>,
}

impl MacInstance for OsslHmac {
    fn compute(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut signer = Signer::new(self.md, &self.key)?;
        Ok(signer.sign_oneshot_to_vec(input)?)
    }
}

// ----- Signatures -----

struct OsslSignature {
    md: Option<MessageDigest>,
    pss: Option<PssParams>,
    key: PKey<Private>,
}

impl OsslSignature {
    fn build_signer(&self) -> Result<Signer<'_>> {
        let mut signer = match self.md {
            Some(md) => Signer::new(md, &self.key)?,
            None => Signer::new_without_digest(&self.key)?,
        };
        if let Some(pss) = &self.pss {
            signer.set_rsa_padding(RsaPadding::PKCS1_PSS)?;
            signer.set_rsa_pss_saltlen(RsaPssSaltlen::custom(pss.salt_len as i32))?;
            signer.set_rsa_mgf1_md(MessageDigest::sha256())?;
        }
        Ok(signer)
    }

    fn build_verifier(&self) -> Result<Verifier<'_>> {
        let mut verifier = match self.md {
            Some(md) => Verifier::new(md, &self.key)?,
            None => Verifier::new_without_digest(&self.key)?,
        };
        if let Some(pss) = &self.pss {
            verifier.set_rsa_padding(RsaPadding::PKCS1_PSS)?;
            verifier.set_rsa_pss_saltlen(RsaPssSaltlen::custom(pss.salt_len as i32))?;
            verifier.set_rsa_mgf1_md(MessageDigest::sha256())?;
        }
        Ok(verifier)
    }
}

impl SignatureInstance for OsslSignature {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let mut signer = self.build_signer()?;
        Ok(signer.sign_oneshot_to_vec(message)?)
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        let mut verifier = self.build_verifier()?;
        // OpenSSL reports structurally malformed signatures through the
        // error stack; both cases are a failed verification.
        Ok(verifier.verify_oneshot(signature, message).unwrap_or(false))
    }
}

// ----- Key exchange and key generation -----

struct OsslKeyExchange {
    key: PKey<Private>,
}

impl KeyExchangeInstance for OsslKeyExchange {
    fn derive_shared_secret(&self) -> Result<Vec<u8>> {
        let mut deriver = Deriver::new(&self.key)?;
        deriver.set_peer(&self.key)?;
        Ok(deriver.derive_to_vec()?)
    }
}

struct OsslKeyGen {
    params: KeyGenParams,
}

impl KeyPairGenerator for OsslKeyGen {
    fn generate(&self) -> Result<KeyPair> {
        let key = match self.params {
            KeyGenParams::Ec(NamedCurve::P256) => {
                let group = EcGroup::from_curve_name(Nid::X9_62_PRIME256V1)?;
                PKey::from_ec_key(EcKey::generate(&group)?)?
            }
            KeyGenParams::Ed25519 => PKey::generate_ed25519()?,
            KeyGenParams::Rsa { modulus_bits, public_exponent } => {
                let rsa = if public_exponent == 65537 {
                    Rsa::generate(modulus_bits as u32)?
                } else {
                    let e = BigNum::from_dec_str(&public_exponent.to_string())?;
                    Rsa::generate_with_e(modulus_bits as u32, &e)?
                };
                PKey::from_rsa(rsa)?
            }
            KeyGenParams::X25519 => PKey::generate_x25519()?,
        };
        Ok(KeyPair::OpenSsl(key))
    }
}
