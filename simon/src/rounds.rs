//! Round engine over a `(x, y)` word pair.

use crate::primitives::{scramble, Word};

/// How round keys are consumed.
///
/// Both conventions compute the same permutation for an even number of
/// rounds; `Paired` avoids the swap and requires an even count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stepping {
    /// Two rounds per step, updating `y` then `x` in place.
    Paired,
    /// One round per step: `(x, y) <- (y ^ f(x) ^ k, x)`.
    SingleStep,
}

impl Stepping {
    #[inline]
    pub fn encrypt<W: Word>(self, (mut x, mut y): (W, W), keys: &[W]) -> (W, W) {
        match self {
            Stepping::Paired => {
                debug_assert!(keys.len() % 2 == 0);
                for k in keys.chunks_exact(2) {
                    y = y ^ scramble(x) ^ k[0];
                    x = x ^ scramble(y) ^ k[1];
                }
            }
            Stepping::SingleStep => {
                for &k in keys {
                    (x, y) = (y ^ scramble(x) ^ k, x);
                }
            }
        }
        (x, y)
    }

    #[inline]
    pub fn decrypt<W: Word>(self, (mut x, mut y): (W, W), keys: &[W]) -> (W, W) {
        match self {
            Stepping::Paired => {
                debug_assert!(keys.len() % 2 == 0);
                for k in keys.chunks_exact(2).rev() {
                    x = x ^ scramble(y) ^ k[1];
                    y = y ^ scramble(x) ^ k[0];
                }
            }
            Stepping::SingleStep => {
                for &k in keys.iter().rev() {
                    (x, y) = (y, x ^ scramble(y) ^ k);
                }
            }
        }
        (x, y)
    }
}
