//! Error type for cipher construction.

use crate::config::Config;
use core::fmt;

/// The key length matches none of a family's configurations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationError {
    algorithm: &'static str,
    key_len: usize,
    accepted: &'static [Config],
}

impl ConfigurationError {
    pub(crate) fn new(algorithm: &'static str, key_len: usize, accepted: &'static [Config]) -> Self {
        Self {
            algorithm,
            key_len,
            accepted,
        }
    }

    /// Family that rejected the key, e.g. `"Simon48"`.
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// Length of the rejected key in bytes.
    pub fn key_len(&self) -> usize {
        self.key_len
    }

    /// Key lengths the family accepts, in bytes.
    pub fn accepted_key_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.accepted.iter().map(Config::key_len)
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid key length {} for {}, expected one of",
            self.key_len, self.algorithm
        )?;
        for (i, len) in self.accepted_key_lengths().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{len}")?;
        }
        f.write_str(" bytes")
    }
}

impl core::error::Error for ConfigurationError {}
