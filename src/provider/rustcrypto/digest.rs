/*!
Pure-Rust message digests.
*/

use sha2::Digest;

use crate::error::Result;
use crate::provider::traits::{CryptoProvider, DigestInstance};
use crate::provider::ProviderId;
use crate::spec::DigestAlgorithm;

/// Pure-Rust provider for message digests
pub struct RustCryptoHashes;

impl CryptoProvider for RustCryptoHashes {
    fn id(&self) -> ProviderId {
        ProviderId::RustCryptoHashes
    }

    fn digest(&self, algorithm: DigestAlgorithm) -> Result<Box<dyn DigestInstance>> {
        Ok(Box::new(RcDigest { algorithm }))
    }
}

struct RcDigest {
    algorithm: DigestAlgorithm,
}

impl DigestInstance for RcDigest {
    fn digest(&self, input: &[u8]) -> Result<Vec<u8>> {
        let out = match self.algorithm {
            DigestAlgorithm::Sha1 => sha1::Sha1::digest(input).to_vec(),
            DigestAlgorithm::Sha224 => sha2::Sha224::digest(input).to_vec(),
            DigestAlgorithm::Sha256 => sha2::Sha256::digest(input).to_vec(),
            DigestAlgorithm::Sha384 => sha2::Sha384::digest(input).to_vec(),
            DigestAlgorithm::Sha512 => sha2::Sha512::digest(input).to_vec(),
            DigestAlgorithm::Sha512_224 => sha2::Sha512_224::digest(input).to_vec(),
            DigestAlgorithm::Sha512_256 => sha2::Sha512_256::digest(input).to_vec(),
            DigestAlgorithm::Sha3_224 => sha3::Sha3_224::digest(input).to_vec(),
            DigestAlgorithm::Sha3_256 => sha3::Sha3_256::digest(input).to_vec(),
            DigestAlgorithm::Sha3_384 => sha3::Sha3_384::digest(input).to_vec(),
            DigestAlgorithm::Sha3_512 => sha3::Sha3_512::digest(input).to_vec(),
        };
        Ok(out)
    }
}
