/*!
Pure-Rust signatures, key exchange and key pair generation.
*/

use std::marker::PhantomData;

use ed25519_dalek::{Signer as _, Verifier as _};
use p256::ecdsa::signature::{DigestSigner, DigestVerifier};
use p256::ecdsa::{
    Signature as P256Signature, SigningKey as P256SigningKey, VerifyingKey as P256VerifyingKey,
};
use rand::rngs::OsRng;
use rsa::signature::{RandomizedSigner, SignatureEncoding, Signer as _, Verifier as _};
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use sha2::digest::const_oid::AssociatedOid;
use sha2::{Digest, Sha256};
use sha3::Sha3_256;

use crate::error::{Error, Result};
use crate::params::PssParams;
use crate::provider::traits::{
    CryptoProvider, KeyExchangeInstance, KeyPair, KeyPairGenerator, SignatureInstance,
};
use crate::provider::ProviderId;
use crate::spec::{KeyExchangeAlgorithm, KeyGenParams, NamedCurve, SignatureScheme};

/// Pure-Rust provider for signatures, key exchange and key generation
pub struct RustCryptoAsymmetric;

impl CryptoProvider for RustCryptoAsymmetric {
    fn id(&self) -> ProviderId {
        ProviderId::RustCryptoAsymmetric
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

        match (scheme, key_pair) {
            (SignatureScheme::EcdsaP256Sha256, KeyPair::EcP256(secret)) => {
                Ok(Box::new(EcdsaP256::<Sha256>::new(secret)))
            }
            (SignatureScheme::EcdsaP256Sha3_256, KeyPair::EcP256(secret)) => {
                Ok(Box::new(EcdsaP256::<Sha3_256>::new(secret)))
            }
            (SignatureScheme::Ed25519, KeyPair::Ed25519(signing)) => Ok(Box::new(Ed25519 {
                signing: signing.clone(),
                verifying: signing.verifying_key(),
            })),
            (SignatureScheme::RsaPkcs1Sha256, KeyPair::Rsa(private)) => {
                Ok(Box::new(RsaPkcs1::<Sha256>::new(private)))
            }
            (SignatureScheme::RsaPkcs1Sha3_256, KeyPair::Rsa(private)) => {
                Ok(Box::new(RsaPkcs1::<Sha3_256>::new(private)))
            }
            (SignatureScheme::RsaPss, KeyPair::Rsa(private)) => {
                // Checked above: PSS schemes always arrive with parameters.
                let salt_len = pss.map(|p| p.salt_len).unwrap_or_default();
                Ok(Box::new(RsaPss::new(private, salt_len)))
            }
            (scheme, key_pair) => Err(key_pair.mismatch(scheme.name())),
        }
    }

    fn key_exchange(
        &self,
        algorithm: KeyExchangeAlgorithm,
        key_pair: &KeyPair,
    ) -> Result<Box<dyn KeyExchangeInstance>> {
        match (algorithm, key_pair) {
            (KeyExchangeAlgorithm::EcdhP256, KeyPair::EcP256(secret)) => {
                Ok(Box::new(EcdhP256 { secret: secret.clone() }))
            }
            (KeyExchangeAlgorithm::X25519, KeyPair::X25519(secret)) => {
                Ok(Box::new(X25519 { secret: secret.clone() }))
            }
            (algorithm, key_pair) => Err(key_pair.mismatch(algorithm.name())),
        }
    }

    fn key_pair_generator(&self, params: &KeyGenParams) -> Result<Box<dyn KeyPairGenerator>> {
        Ok(Box::new(RcKeyGen { params: *params }))
    }
}

// ----- Signatures -----

struct EcdsaP256<D> {
    signing: P256SigningKey,
    verifying: P256VerifyingKey,
    _digest: PhantomData<D>,
}

impl<D> EcdsaP256<D> {
    fn new(secret: &p256::SecretKey) -> Self {
        let signing = P256SigningKey::from(secret.clone());
        let verifying = P256VerifyingKey::from(&signing);
        Self {
            signing,
            verifying,
            _digest: PhantomData,
        }
    }
}

impl<D> SignatureInstance for EcdsaP256<D>
where
    D: Digest + Send,
    P256SigningKey: DigestSigner<D, P256Signature>,
    P256VerifyingKey: DigestVerifier<D, P256Signature>,
{
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let mut digest = D::new();
        digest.update(message);
        let signature: P256Signature = self
            .signing
            .try_sign_digest(digest)
            .map_err(|e| Error::crypto(format!("ECDSA signing failed: {e}")))?;
        Ok(signature.to_bytes().to_vec())
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        let signature = P256Signature::from_slice(signature)
            .map_err(|e| Error::crypto(format!("malformed ECDSA signature: {e}")))?;
        let mut digest = D::new();
        digest.update(message);
        Ok(self.verifying.verify_digest(digest, &signature).is_ok())
    }
}

struct Ed25519 {
    signing: ed25519_dalek::SigningKey,
    verifying: ed25519_dalek::VerifyingKey,
}

impl SignatureInstance for Ed25519 {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let signature = self
            .signing
            .try_sign(message)
            .map_err(|e| Error::crypto(format!("Ed25519 signing failed: {e}")))?;
        Ok(signature.to_bytes().to_vec())
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        let signature = ed25519_dalek::Signature::from_slice(signature)
            .map_err(|e| Error::crypto(format!("malformed Ed25519 signature: {e}")))?;
        Ok(self.verifying.verify(message, &signature).is_ok())
    }
}

struct RsaPkcs1<D>
where
    D: Digest,
{
    signing: rsa::pkcs1v15::SigningKey<D>,
    verifying: rsa::pkcs1v15::VerifyingKey<D>,
}

impl<D> RsaPkcs1<D>
where
    D: Digest + AssociatedOid,
{
    fn new(private: &RsaPrivateKey) -> Self {
        let public = RsaPublicKey::from(private);
        Self {
            signing: rsa::pkcs1v15::SigningKey::new(private.clone()),
            verifying: rsa::pkcs1v15::VerifyingKey::new(public),
        }
    }
}

impl<D> SignatureInstance for RsaPkcs1<D>
where
    D: Digest + AssociatedOid + Send,
{
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let signature = self
            .signing
            .try_sign(message)
            .map_err(|e| Error::crypto(format!("RSA signing failed: {e}")))?;
        Ok(signature.to_vec())
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        let signature = rsa::pkcs1v15::Signature::try_from(signature)
            .map_err(|e| Error::crypto(format!("malformed RSA signature: {e}")))?;
        Ok(self.verifying.verify(message, &signature).is_ok())
    }
}

struct RsaPss {
    signing: rsa::pss::SigningKey<Sha256>,
    verifying: rsa::pss::VerifyingKey<Sha256>,
}

impl RsaPss {
    fn new(private: &RsaPrivateKey, salt_len: usize) -> Self {
        let public = RsaPublicKey::from(private);
        Self {
            signing: rsa::pss::SigningKey::new_with_salt_len(private.clone(), salt_len),
            verifying: rsa::pss::VerifyingKey::new(public),
        }
    }
}

impl SignatureInstance for RsaPss {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let signature = self
            .signing
            .try_sign_with_rng(&mut OsRng, message)
            .map_err(|e| Error::crypto(format!("RSA-PSS signing failed: {e}")))?;
        Ok(signature.to_vec())
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        let signature = rsa::pss::Signature::try_from(signature)
            .map_err(|e| Error::crypto(format!("malformed RSA-PSS signature: {e}")))?;
        Ok(self.verifying.verify(message, &signature).is_ok())
    }
}

// ----- Key exchange -----

struct EcdhP256 {
    secret: p256::SecretKey,
}

impl KeyExchangeInstance for EcdhP256 {
    fn derive_shared_secret(&self) -> Result<Vec<u8>> {
        let public = self.secret.public_key();
        let shared =
            p256::ecdh::diffie_hellman(self.secret.to_nonzero_scalar(), public.as_affine());
        Ok(shared.raw_secret_bytes().to_vec())
    }
}

struct X25519 {
    secret: x25519_dalek::StaticSecret,
}

impl KeyExchangeInstance for X25519 {
    fn derive_shared_secret(&self) -> Result<Vec<u8>> {
        let public = x25519_dalek::PublicKey::from(&self.secret);
        let shared = self.secret.diffie_hellman(&public);
        Ok(shared.as_bytes().to_vec())
    }
}

// ----- Key pair generation -----

struct RcKeyGen {
    params: KeyGenParams,
}

impl KeyPairGenerator for RcKeyGen {
    fn generate(&self) -> Result<KeyPair> {
        match self.params {
            KeyGenParams::Ec(NamedCurve::P256) => {
                Ok(KeyPair::EcP256(p256::SecretKey::random(&mut OsRng)))
            }
            KeyGenParams::Ed25519 => Ok(KeyPair::Ed25519(ed25519_dalek::SigningKey::generate(
                &mut OsRng,
            ))),
            KeyGenParams::Rsa { modulus_bits, public_exponent } => {
                let private = if public_exponent == 65537 {
                    RsaPrivateKey::new(&mut OsRng, modulus_bits)
                } else {
                    RsaPrivateKey::new_with_exp(
                        &mut OsRng,
                        modulus_bits,
                        &BigUint::from(public_exponent),
                    )
                }
                .map_err(|e| Error::crypto(format!("RSA key generation failed: {e}")))?;
                Ok(KeyPair::Rsa(Box::new(private)))
            }
            KeyGenParams::X25519 => Ok(KeyPair::X25519(x25519_dalek::StaticSecret::random_from_rng(
                OsRng,
            ))),
        }
    }
}
