/*!
Pure-Rust symmetric ciphers and MACs.

Every instance holds plain key/nonce bytes and builds the underlying
cipher object freshly on each call, so instances stay stateless across
repeated invocations.
*/

use aes::Aes128;
use aes::cipher::block_padding::{NoPadding, Pkcs7};
use aes::cipher::consts::U16;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};
use aes_gcm::AesGcm;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, KeyInit as AeadKeyInit};
use chacha20::ChaCha20;
use chacha20::cipher::{StreamCipher, StreamCipherSeek};
use chacha20poly1305::ChaCha20Poly1305;
use hmac::{Hmac, Mac};

use crate::error::{Error, Result};
use crate::params::CipherParams;
use crate::provider::traits::{CipherInstance, CryptoProvider, MacInstance};
use crate::provider::ProviderId;
use crate::spec::{AesMode, CipherSpec, DigestAlgorithm, Direction, MacAlgorithm, Padding};

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes128EcbEnc = ecb::Encryptor<Aes128>;
type Aes128EcbDec = ecb::Decryptor<Aes128>;
type Aes128Ctr = ctr::Ctr128BE<Aes128>;

// AES/GCM in the catalog runs with a 16-byte nonce; non-96-bit nonces are
// processed through GHASH per NIST SP 800-38D.
type Aes128Gcm16 = AesGcm<Aes128, U16>;

/// Pure-Rust provider for block ciphers, stream ciphers/AEADs and MACs
pub struct RustCryptoSymmetric;

impl CryptoProvider for RustCryptoSymmetric {
    fn id(&self) -> ProviderId {
        ProviderId::RustCrypto
    }

    fn cipher(
        &self,
        spec: &CipherSpec,
        direction: Direction,
        key: &[u8],
        params: &CipherParams,
    ) -> Result<Box<dyn CipherInstance>> {
        match (spec, params) {
            (CipherSpec::Aes { mode: AesMode::Cbc, padding }, CipherParams::Iv(iv)) => {
                Ok(Box::new(AesCbc {
                    key: key_16(key)?,
                    iv: *iv,
                    padding: *padding,
                    direction,
                }))
            }
            (CipherSpec::Aes { mode: AesMode::Ctr, .. }, CipherParams::Iv(iv)) => {
                Ok(Box::new(AesCtr { key: key_16(key)?, iv: *iv }))
            }
            (CipherSpec::Aes { mode: AesMode::Ecb, padding }, CipherParams::None) => {
                Ok(Box::new(AesEcb {
                    key: key_16(key)?,
                    padding: *padding,
                    direction,
                }))
            }
            (
                CipherSpec::Aes { mode: AesMode::Gcm, .. },
                CipherParams::GcmNonce { nonce, tag_bits: 128 },
            ) => Ok(Box::new(AesGcmCipher {
                key: key_16(key)?,
                nonce: *nonce,
                direction,
            })),
            (CipherSpec::ChaCha20, CipherParams::ChaCha20 { nonce, counter }) => {
                Ok(Box::new(ChaCha20Cipher {
                    key: key_32(key)?,
                    nonce: *nonce,
                    counter: *counter,
                }))
            }
            (CipherSpec::ChaCha20Poly1305, CipherParams::Iv12(nonce)) => {
                Ok(Box::new(ChaChaPolyCipher {
                    key: key_32(key)?,
                    nonce: *nonce,
                    direction,
                }))
            }
            (spec, params) => Err(Error::config(format!(
                "parameter object {params:?} does not fit {spec} on provider '{}'",
                self.id()
            ))),
        }
    }

    fn mac(&self, algorithm: MacAlgorithm, key: &[u8]) -> Result<Box<dyn MacInstance>> {
        Ok(Box::new(HmacMac {
            digest: algorithm.digest(),
            key: key.to_vec(),
        }))
    }
}

fn key_16(key: &[u8]) -> Result<[u8; 16]> {
    key.try_into()
        .map_err(|_| Error::config(format!("AES-128 requires a 16-byte key, got {}", key.len())))
}

fn key_32(key: &[u8]) -> Result<[u8; 32]> {
    key.try_into()
        .map_err(|_| Error::config(format!("ChaCha20 requires a 32-byte key, got {}", key.len())))
}

fn check_block_aligned(input: &[u8]) -> Result<()> {
    if input.len() % 16 != 0 {
        return Err(Error::crypto(
            "input length is not a multiple of the block size",
        ));
    }
    Ok(())
}

// ----- Block modes -----

struct AesCbc {
    key: [u8; 16],
    iv: [u8; 16],
    padding: Padding,
    direction: Direction,
}

impl CipherInstance for AesCbc {
    fn process(&self, input: &[u8]) -> Result<Vec<u8>> {
        match self.direction {
            Direction::Encrypt => {
                let cipher = Aes128CbcEnc::new(&self.key.into(), &self.iv.into());
                match self.padding {
                    Padding::Pkcs5 => Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(input)),
                    Padding::None => {
                        check_block_aligned(input)?;
                        Ok(cipher.encrypt_padded_vec_mut::<NoPadding>(input))
                    }
                }
            }
            Direction::Decrypt => {
                let cipher = Aes128CbcDec::new(&self.key.into(), &self.iv.into());
                match self.padding {
                    Padding::Pkcs5 => cipher
                        .decrypt_padded_vec_mut::<Pkcs7>(input)
                        .map_err(|_| Error::crypto("invalid PKCS padding")),
                    Padding::None => {
                        check_block_aligned(input)?;
                        cipher
                            .decrypt_padded_vec_mut::<NoPadding>(input)
                            .map_err(|_| Error::crypto("unaligned ciphertext"))
                    }
                }
            }
        }
    }
}

struct AesEcb {
    key: [u8; 16],
    padding: Padding,
    direction: Direction,
}

impl CipherInstance for AesEcb {
    fn process(&self, input: &[u8]) -> Result<Vec<u8>> {
        match self.direction {
            Direction::Encrypt => {
                let cipher = Aes128EcbEnc::new(&self.key.into());
                match self.padding {
                    Padding::Pkcs5 => Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(input)),
                    Padding::None => {
                        check_block_aligned(input)?;
                        Ok(cipher.encrypt_padded_vec_mut::<NoPadding>(input))
                    }
                }
            }
            Direction::Decrypt => {
                let cipher = Aes128EcbDec::new(&self.key.into());
                match self.padding {
                    Padding::Pkcs5 => cipher
                        .decrypt_padded_vec_mut::<Pkcs7>(input)
                        .map_err(|_| Error::crypto("invalid PKCS padding")),
                    Padding::None => {
                        check_block_aligned(input)?;
                        cipher
                            .decrypt_padded_vec_mut::<NoPadding>(input)
                            .map_err(|_| Error::crypto("unaligned ciphertext"))
                    }
                }
            }
        }
    }
}

struct AesCtr {
    key: [u8; 16],
    iv: [u8; 16],
}

impl CipherInstance for AesCtr {
    // CTR is its own inverse; the same keystream serves both directions.
    fn process(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut cipher = Aes128Ctr::new(&self.key.into(), &self.iv.into());
        let mut buf = input.to_vec();
        cipher.apply_keystream(&mut buf);
        Ok(buf)
    }
}

// ----- AEADs and stream ciphers -----

struct AesGcmCipher {
    key: [u8; 16],
    nonce: [u8; 16],
    direction: Direction,
}

impl CipherInstance for AesGcmCipher {
    fn process(&self, input: &[u8]) -> Result<Vec<u8>> {
        let cipher = <Aes128Gcm16 as AeadKeyInit>::new(&self.key.into());
        let nonce = GenericArray::from_slice(&self.nonce);
        match self.direction {
            Direction::Encrypt => cipher
                .encrypt(nonce, input)
                .map_err(|_| Error::crypto("GCM encryption failed")),
            Direction::Decrypt => cipher
                .decrypt(nonce, input)
                .map_err(|_| Error::crypto("authentication tag verification failed")),
        }
    }
}

struct ChaCha20Cipher {
    key: [u8; 32],
    nonce: [u8; 12],
    counter: u32,
}

impl CipherInstance for ChaCha20Cipher {
    // Plain ChaCha20 is a keystream XOR; both directions run the same way.
    fn process(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut cipher = ChaCha20::new(&self.key.into(), &self.nonce.into());
        if self.counter != 0 {
            cipher.seek(u64::from(self.counter) * 64);
        }
        let mut buf = input.to_vec();
        cipher.apply_keystream(&mut buf);
        Ok(buf)
    }
}

struct ChaChaPolyCipher {
    key: [u8; 32],
    nonce: [u8; 12],
    direction: Direction,
}

impl CipherInstance for ChaChaPolyCipher {
    fn process(&self, input: &[u8]) -> Result<Vec<u8>> {
        let cipher = <ChaCha20Poly1305 as AeadKeyInit>::new(&self.key.into());
        let nonce = GenericArray::from_slice(&self.nonce);
        match self.direction {
            Direction::Encrypt => cipher
                .encrypt(nonce, input)
                .map_err(|_| Error::crypto("ChaCha20-Poly1305 encryption failed")),
            Direction::Decrypt => cipher
                .decrypt(nonce, input)
                .map_err(|_| Error::crypto("authentication tag verification failed")),
        }
    }
}

// ----- MAC -----

struct HmacMac {
    digest: DigestAlgorithm,
    key: Vec<u8>,
}

macro_rules! hmac_compute {
    ($digest:ty, $key:expr, $input:expr) => {{
        let mut mac = <Hmac<$digest> as Mac>::new_from_slice($key)
            .map_err(|_| Error::crypto("invalid HMAC key"))?;
        mac.update($input);
        Ok(mac.finalize().into_bytes().to_vec())
    }};
}

impl MacInstance for HmacMac {
    fn compute(&self, input: &[u8]) -> Result<Vec<u8>> {
        match self.digest {
            DigestAlgorithm::Sha1 => hmac_compute!(sha1::Sha1, &self.key, input),
            DigestAlgorithm::Sha224 => hmac_compute!(sha2::Sha224, &self.key, input),
            DigestAlgorithm::Sha256 => hmac_compute!(sha2::Sha256, &self.key, input),
            DigestAlgorithm::Sha384 => hmac_compute!(sha2::Sha384, &self.key, input),
            DigestAlgorithm::Sha512 => hmac_compute!(sha2::Sha512, &self.key, input),
            DigestAlgorithm::Sha512_224 => hmac_compute!(sha2::Sha512_224, &self.key, input),
            DigestAlgorithm::Sha512_256 => hmac_compute!(sha2::Sha512_256, &self.key, input),
            DigestAlgorithm::Sha3_224 => hmac_compute!(sha3::Sha3_224, &self.key, input),
            DigestAlgorithm::Sha3_256 => hmac_compute!(sha3::Sha3_256, &self.key, input),
            DigestAlgorithm::Sha3_384 => hmac_compute!(sha3::Sha3_384, &self.key, input),
            DigestAlgorithm::Sha3_512 => hmac_compute!(sha3::Sha3_512, &self.key, input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::AEAD_TAG_BITS;

    #[test]
    fn test_cbc_round_trip_with_padding() {
        let provider = RustCryptoSymmetric;
        let spec: CipherSpec = "AES/CBC/PKCS5Padding".parse().unwrap();
        let params = CipherParams::Iv([7u8; 16]);
        let key = [b'a'; 16];

        let enc = provider
            .cipher(&spec, Direction::Encrypt, &key, &params)
            .unwrap();
        let dec = provider
            .cipher(&spec, Direction::Decrypt, &key, &params)
            .unwrap();

        let plaintext = b"not block aligned";
        let ciphertext = enc.process(plaintext).unwrap();
        assert_eq!(ciphertext.len() % 16, 0);
        assert_eq!(dec.process(&ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn test_no_padding_rejects_unaligned_input() {
        let provider = RustCryptoSymmetric;
        let spec: CipherSpec = "AES/CBC/NoPadding".parse().unwrap();
        let enc = provider
            .cipher(&spec, Direction::Encrypt, &[b'a'; 16], &CipherParams::Iv([0u8; 16]))
            .unwrap();
        assert!(enc.process(b"seventeen bytes!!").is_err());
    }

    #[test]
    fn test_gcm_tamper_detection() {
        let provider = RustCryptoSymmetric;
        let spec: CipherSpec = "AES/GCM/NoPadding".parse().unwrap();
        let params = CipherParams::GcmNonce {
            nonce: [3u8; 16],
            tag_bits: AEAD_TAG_BITS,
        };
        let key = [b'a'; 16];

        let enc = provider
            .cipher(&spec, Direction::Encrypt, &key, &params)
            .unwrap();
        let dec = provider
            .cipher(&spec, Direction::Decrypt, &key, &params)
            .unwrap();

        let mut ciphertext = enc.process(b"some message").unwrap();
        ciphertext[0] ^= 0xff;
        assert!(dec.process(&ciphertext).is_err());
    }

    #[test]
    fn test_mismatched_params_are_rejected() {
        let provider = RustCryptoSymmetric;
        let spec: CipherSpec = "AES/GCM/NoPadding".parse().unwrap();
        let result = provider.cipher(
            &spec,
            Direction::Encrypt,
            &[b'a'; 16],
            &CipherParams::Iv([0u8; 16]),
        );
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_hmac_is_deterministic() {
        let provider = RustCryptoSymmetric;
        let mac = provider
            .mac(MacAlgorithm::Hmac(DigestAlgorithm::Sha256), &[b'a'; 16])
            .unwrap();
        let a = mac.compute(b"message").unwrap();
        let b = mac.compute(b"message").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
    }
}
