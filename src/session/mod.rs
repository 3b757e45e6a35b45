/*!
Operation sessions.

A session binds one algorithm spec, product and direction to a configured
primitive instance. Sessions come in two shapes: stable sessions configure
once in `setup()` and reuse the instance for every `execute()`; cipher
encrypt sessions regenerate their nonce/IV and primitive on every
`execute()` so that no nonce is ever reused under the fixed key.

Sessions are single-owner: all state is mutated through `&mut self` and a
session is never shared between threads. The external driver's only
contract is `setup()` followed by any number of `execute()` calls.
*/

mod cipher;
mod digest;
mod key_exchange;
mod key_pair_gen;
mod mac;
mod signature;

pub use cipher::CipherSession;
pub use digest::DigestSession;
pub use key_exchange::KeyExchangeSession;
pub use key_pair_gen::KeyPairGenSession;
pub use mac::MacSession;
pub use signature::{SignatureOutcome, SignatureSession};
