/*!
Fixed data pool for the benchmarks.

Message buffers and key material are generated once at process start and
treated as read-only afterwards. Keys are fixed test material, not secrets,
so they may be shared freely across sessions.
*/

use once_cell::sync::Lazy;
use rand::RngCore;

/// 256 bytes of message data
pub static DATA_256B: Lazy<Vec<u8>> = Lazy::new(|| bytes(256));

/// 256 KiB of message data
pub static DATA_256KB: Lazy<Vec<u8>> = Lazy::new(|| kbytes(256));

/// 1 MiB of message data
pub static DATA_1MB: Lazy<Vec<u8>> = Lazy::new(|| mbytes(1));

/// Fixed 16-byte symmetric key
pub const KEY_16: [u8; 16] = [b'a'; 16];

/// Fixed 32-byte symmetric key
pub const KEY_32: [u8; 32] = [b'a'; 32];

/// Build a buffer of `size` bytes, each set to `b'a'`
pub fn bytes(size: usize) -> Vec<u8> {
    vec![b'a'; size]
}

/// Build a buffer of `size_in_kb` KiB
pub fn kbytes(size_in_kb: usize) -> Vec<u8> {
    bytes(size_in_kb * 1024)
}

/// Build a buffer of `size_in_mb` MiB
pub fn mbytes(size_in_mb: usize) -> Vec<u8> {
    kbytes(size_in_mb * 1024)
}

/// Fill a fresh buffer of `size` bytes from the process RNG
pub fn random_bytes(size: usize) -> Vec<u8> {
    let mut data = vec![0u8; size];
    rand::thread_rng().fill_bytes(&mut data);
    data
}

/// Hex-encode a byte slice
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string, or None if it is malformed
pub fn from_hex(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}
