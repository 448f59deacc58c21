//! Static parameter tables of every Simon variant.

use crate::consts::ZSequence;
use crate::error::ConfigurationError;
use crate::primitives::Word;
use crate::rounds::Stepping;
use crate::schedule::Feedback;

/// Parameters of one Simon variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Config {
    pub word_bits: u32,
    pub key_words: usize,
    pub rounds: usize,
    pub z: ZSequence,
    pub feedback: Feedback,
    pub stepping: Stepping,
}

impl Config {
    /// Builds a configuration at compile time. Unknown `(word_bits, key_words)`
    /// shapes and odd round counts under paired stepping fail const evaluation.
    pub const fn new(word_bits: u32, key_words: usize, rounds: usize, stepping: Stepping) -> Self {
        let z = match ZSequence::lookup(word_bits, key_words) {
            Some(z) => z,
            None => panic!("no z-sequence for this word size and key word count"),
        };
        if let Stepping::Paired = stepping {
            assert!(rounds % 2 == 0, "paired stepping needs an even round count");
        }
        assert!(key_words < rounds);
        Self {
            word_bits,
            key_words,
            rounds,
            z,
            feedback: Feedback::for_key_words(key_words),
            stepping,
        }
    }

    /// Key length in bytes.
    pub const fn key_len(&self) -> usize {
        self.key_words * self.word_bits as usize / 8
    }

    /// Block length in bytes.
    pub const fn block_len(&self) -> usize {
        2 * self.word_bits as usize / 8
    }

    /// Selects the configuration of family `W` whose key is `key_len` bytes long.
    pub fn resolve<W: Word>(key_len: usize) -> Result<&'static Config, ConfigurationError> {
        W::CONFIGS
            .iter()
            .find(|config| config.key_len() == key_len)
            .ok_or(ConfigurationError::new(W::FAMILY, key_len, W::CONFIGS))
    }
}

pub const SIMON32: &[Config] = &[Config::new(16, 4, 32, Stepping::Paired)];

pub const SIMON48: &[Config] = &[
    Config::new(24, 3, 36, Stepping::Paired),
    Config::new(24, 4, 36, Stepping::Paired),
];

pub const SIMON64: &[Config] = &[
    Config::new(32, 3, 42, Stepping::Paired),
    Config::new(32, 4, 44, Stepping::Paired),
];

pub const SIMON96: &[Config] = &[
    Config::new(48, 2, 52, Stepping::SingleStep),
    Config::new(48, 3, 54, Stepping::SingleStep),
];

// 128/192 runs an odd number of rounds, so the whole family steps singly
pub const SIMON128: &[Config] = &[
    Config::new(64, 2, 68, Stepping::SingleStep),
    Config::new(64, 3, 69, Stepping::SingleStep),
    Config::new(64, 4, 72, Stepping::SingleStep),
];
