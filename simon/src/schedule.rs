//! Key schedule expansion.

use crate::config::Config;
use crate::consts::{KS_C, KS_ROT_FIRST, KS_ROT_SECOND};
use crate::primitives::Word;
use alloc::vec::Vec;
use cipher::zeroize::{Zeroize, ZeroizeOnDrop};
use core::ops::Deref;

/// Extra feedback term of the key schedule recurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// `tmp = k[i-1] >>> 3`, used with two or three key words.
    PreviousWord,
    /// `tmp = (k[i-1] >>> 3) ^ k[i-3]`, used with four key words.
    ThirdWord,
}

impl Feedback {
    pub const fn for_key_words(key_words: usize) -> Self {
        if key_words == 4 {
            Feedback::ThirdWord
        } else {
            Feedback::PreviousWord
        }
    }

    #[inline(always)]
    fn apply<W: Word>(self, k: &[W], i: usize) -> W {
        let tmp = k[i - 1].rotate_right(KS_ROT_FIRST);
        match self {
            Feedback::PreviousWord => tmp,
            Feedback::ThirdWord => tmp ^ k[i - 3],
        }
    }
}

/// Expanded round keys, one word per round.
#[derive(Clone, PartialEq, Eq)]
pub struct RoundKeys<W: Word>(Vec<W>);

impl<W: Word> Deref for RoundKeys<W> {
    type Target = [W];

    fn deref(&self) -> &[W] {
        &self.0
    }
}

impl<W: Word> Drop for RoundKeys<W> {
    fn drop(&mut self) {
        self.0.as_mut_slice().zeroize();
    }
}

impl<W: Word> ZeroizeOnDrop for RoundKeys<W> {}

/// Expands `key` into `config.rounds` round keys.
///
/// The first `key_words` round keys are the little-endian words of the key;
/// each later one is
///
/// ```text
/// tmp  = (k[i-1] >>> 3) [^ k[i-3]]
/// tmp ^= tmp >>> 1
/// k[i] = ~k[i-m] ^ tmp ^ z[i-m] ^ 3
/// ```
///
/// # Panics
///
/// If `key` is not `config.key_len()` bytes or `config` belongs to another word size.
pub fn expand<W: Word>(key: &[u8], config: &Config) -> RoundKeys<W> {
    assert_eq!(config.word_bits, W::BITS);
    assert_eq!(key.len(), config.key_len());

    let m = config.key_words;
    let mut k = Vec::with_capacity(config.rounds);
    k.extend(key.chunks_exact(W::BYTES).map(W::from_le_bytes));

    for i in m..config.rounds {
        let mut tmp = config.feedback.apply(&k, i);
        tmp = tmp ^ tmp.rotate_right(KS_ROT_SECOND);
        let z = W::new(config.z.bit(i - m));
        // ~k ^ 3 is k ^ (2^n - 4)
        k.push(!k[i - m] ^ tmp ^ z ^ W::new(KS_C));
    }

    RoundKeys(k)
}
