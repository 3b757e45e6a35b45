/*!
The default product: pure-Rust providers.

The pure-Rust ecosystem partitions its capabilities across crate families,
so the default product registers one provider per capability area:
symmetric ciphers and MACs, message digests, and asymmetric operations.
*/

mod asymmetric;
mod digest;
mod symmetric;

pub use asymmetric::RustCryptoAsymmetric;
pub use digest::RustCryptoHashes;
pub use symmetric::RustCryptoSymmetric;
