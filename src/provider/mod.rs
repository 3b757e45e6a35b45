/*!
Provider resolution and the provider seam.

Two products are compared: the platform-default pure-Rust stack, which is
partitioned into one provider per capability area the way its crates are
organized, and one alternate provider (OpenSSL) that covers every family
under a single identifier.
*/

use std::fmt;
use std::str::FromStr;

pub mod ossl;
pub mod registry;
pub mod rustcrypto;
pub mod traits;

pub use registry::{install_alternate_provider, provider};
pub use traits::{
    CipherInstance, CryptoProvider, DigestInstance, KeyExchangeInstance, KeyPair,
    KeyPairGenerator, MacInstance, SignatureInstance,
};

use crate::error::Error;
use crate::spec::AlgorithmFamily;

/// Logical product under test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSelector {
    /// The platform-default provider stack
    Default,
    /// The alternate provider
    Alternate,
}

/// Both products, for benchmark cross-products
pub const PRODUCTS: [ProductSelector; 2] = [ProductSelector::Default, ProductSelector::Alternate];

impl ProductSelector {
    /// Get the name of the product as a string
    pub fn name(&self) -> &'static str {
        match self {
            ProductSelector::Default => "default",
            ProductSelector::Alternate => "alternate",
        }
    }
}

impl fmt::Display for ProductSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProductSelector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "default" => Ok(ProductSelector::Default),
            "alternate" => Ok(ProductSelector::Alternate),
            _ => Err(Error::config(format!("unknown product selector: '{s}'"))),
        }
    }
}

/// Concrete provider identifiers registered with the process registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    /// Pure-Rust symmetric ciphers and MACs
    RustCrypto,
    /// Pure-Rust message digests
    RustCryptoHashes,
    /// Pure-Rust signatures, key exchange and key generation
    RustCryptoAsymmetric,
    /// OpenSSL, all families
    OpenSsl,
}

impl ProviderId {
    /// Get the name of the provider as a string
    pub fn name(&self) -> &'static str {
        match self {
            ProviderId::RustCrypto => "rustcrypto",
            ProviderId::RustCryptoHashes => "rustcrypto-hashes",
            ProviderId::RustCryptoAsymmetric => "rustcrypto-asymmetric",
            ProviderId::OpenSsl => "openssl",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a product and algorithm family to a concrete provider.
///
/// The default product is partitioned by family; the alternate product maps
/// to the one fixed external provider regardless of family. The mapping is
/// a lookup table over two closed enums, so it is total: unknown algorithm
/// strings have already failed at parse time.
pub fn resolve(product: ProductSelector, family: AlgorithmFamily) -> ProviderId {
    match product {
        ProductSelector::Alternate => ProviderId::OpenSsl,
        ProductSelector::Default => match family {
            AlgorithmFamily::BlockCipher
            | AlgorithmFamily::StreamCipherAead
            | AlgorithmFamily::Mac => ProviderId::RustCrypto,
            AlgorithmFamily::Digest => ProviderId::RustCryptoHashes,
            AlgorithmFamily::Signature
            | AlgorithmFamily::KeyExchange
            | AlgorithmFamily::KeyPairGeneration => ProviderId::RustCryptoAsymmetric,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_is_total_and_nonempty() {
        for product in PRODUCTS {
            for family in AlgorithmFamily::ALL {
                let id = resolve(product, family);
                assert!(!id.name().is_empty());
            }
        }
    }

    #[test]
    fn test_alternate_is_fixed_across_families() {
        for family in AlgorithmFamily::ALL {
            assert_eq!(resolve(ProductSelector::Alternate, family), ProviderId::OpenSsl);
        }
    }

    #[test]
    fn test_default_is_partitioned() {
        assert_eq!(
            resolve(ProductSelector::Default, AlgorithmFamily::BlockCipher),
            ProviderId::RustCrypto
        );
        assert_eq!(
            resolve(ProductSelector::Default, AlgorithmFamily::Digest),
            ProviderId::RustCryptoHashes
        );
        assert_eq!(
            resolve(ProductSelector::Default, AlgorithmFamily::Signature),
            ProviderId::RustCryptoAsymmetric
        );
        assert_eq!(
            resolve(ProductSelector::Default, AlgorithmFamily::Mac),
            ProviderId::RustCrypto
        );
    }
}
