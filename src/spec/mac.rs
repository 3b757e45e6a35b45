/*!
MAC algorithm catalog.

Every MAC in the catalog is an HMAC over one of the catalog digests, keyed
with the fixed 16-byte key from the data pool.
*/

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::spec::digest::{self, DigestAlgorithm};

/// Supported MAC algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacAlgorithm {
    /// HMAC over the given digest
    Hmac(DigestAlgorithm),
}

impl Default for MacAlgorithm {
    fn default() -> Self {
        MacAlgorithm::Hmac(DigestAlgorithm::Sha256)
    }
}

/// The fixed MAC catalog: HMAC over every catalog digest
pub fn catalog() -> impl Iterator<Item = MacAlgorithm> {
    digest::CATALOG.into_iter().map(MacAlgorithm::Hmac)
}

impl MacAlgorithm {
    /// The digest underlying this MAC
    pub fn digest(&self) -> DigestAlgorithm {
        match self {
            MacAlgorithm::Hmac(d) => *d,
        }
    }

    /// MAC output length in bytes
    pub fn output_len(&self) -> usize {
        self.digest().output_len()
    }

    /// Get the name of the algorithm as a string (e.g. `Hmac-SHA-256`)
    pub fn name(&self) -> String {
        match self {
            MacAlgorithm::Hmac(d) => format!("Hmac-{}", d.name()),
        }
    }
}

impl fmt::Display for MacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for MacAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let digest = s
            .strip_prefix("Hmac-")
            .ok_or_else(|| Error::config(format!("unknown MAC algorithm: '{s}'")))?;
        Ok(MacAlgorithm::Hmac(digest.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for alg in catalog() {
            assert_eq!(alg.name().parse::<MacAlgorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("".parse::<MacAlgorithm>().is_err());
        assert!("Hmac-MD5".parse::<MacAlgorithm>().is_err());
        assert!("Cmac-AES".parse::<MacAlgorithm>().is_err());
    }
}
