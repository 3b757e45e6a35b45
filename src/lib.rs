/*!
# cryptobench

Benchmarks for symmetric ciphers, message digests, MACs, signatures,
key-pair generation and key exchange, comparing two cryptographic provider
stacks: the pure-Rust crate ecosystem (the default product, partitioned
into one provider per capability area) and OpenSSL (the alternate
product).

## Overview

The measurement itself is criterion's job; this crate owns everything the
timed loop depends on:

- A provider resolver mapping a `(product, algorithm family)` pair to the
  concrete provider registered with the process registry
- A parameter builder deriving key material, nonces/IVs and
  algorithm-specific parameter objects for every catalog entry
- Operation sessions holding a configured primitive per benchmark
  configuration, with per-call nonce regeneration for cipher encryption
  and captured fixtures for decryption and verification

The alternate provider must be registered once at startup via
[`provider::install_alternate_provider`]; benches and tests do this in
their entry points.

```no_run
use cryptobench::provider::{self, ProductSelector};
use cryptobench::session::CipherSession;
use cryptobench::spec::Direction;
use cryptobench::data;

provider::install_alternate_provider();

let spec = "AES/GCM/NoPadding".parse().unwrap();
let mut session = CipherSession::new(
    ProductSelector::Alternate,
    spec,
    Direction::Encrypt,
    data::DATA_1MB.as_slice(),
);
session.setup().unwrap();
let ciphertext = session.execute().unwrap();
assert_eq!(ciphertext.len(), data::DATA_1MB.len() + 16);
```
*/

// Fixed data pool
pub mod data;

// Error handling
pub mod error;

// Parameter builder
pub mod params;

// Providers and the process registry
pub mod provider;

// Operation sessions
pub mod session;

// Algorithm catalog
pub mod spec;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use provider::{install_alternate_provider, ProductSelector, ProviderId, PRODUCTS};
pub use session::{
    CipherSession, DigestSession, KeyExchangeSession, KeyPairGenSession, MacSession,
    SignatureOutcome, SignatureSession,
};
pub use spec::{
    AlgorithmFamily, CipherSpec, DigestAlgorithm, Direction, KeyExchangeAlgorithm, KeyGenParams,
    MacAlgorithm, SignatureDirection, SignatureScheme,
};
