//! Fixed constants of the Simon family.

/// Period of every z-sequence.
pub const Z_PERIOD: usize = 62;

/// The five z-sequences, stored least-significant bit first: bit `j` of the
/// sequence is bit `j` of the word.
pub const Z: [u64; 5] = [
    0x19c3_522f_b386_a45f,
    0x1686_4fb8_ad0c_9f71,
    0x3369_f885_192c_0ef5,
    0x3c2c_e512_07a6_35db,
    0x3dc9_4c3a_046d_678b,
];

// round function: (S^1 x & S^8 x) ^ S^2 x
pub const F_ROT_AND_A: u32 = 1;
pub const F_ROT_AND_B: u32 = 8;
pub const F_ROT_XOR: u32 = 2;

// key schedule: S^-3, then S^-1
pub const KS_ROT_FIRST: u32 = 3;
pub const KS_ROT_SECOND: u32 = 1;

/// Two-bit constant folded into every expanded round key. Together with the
/// complement of `k[i - m]` it forms `c = 2^n - 4`.
pub const KS_C: u64 = 3;

/// One of the five z-sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZSequence {
    Z0,
    Z1,
    Z2,
    Z3,
    Z4,
}

impl ZSequence {
    /// Returns the sequence used by the `(word_bits, key_words)` configuration,
    /// or `None` if no Simon variant has that shape.
    pub const fn lookup(word_bits: u32, key_words: usize) -> Option<Self> {
        Some(match (word_bits, key_words) {
            (16, 4) => ZSequence::Z0,
            (24, 3) => ZSequence::Z0,
            (24, 4) => ZSequence::Z1,
            (32, 3) => ZSequence::Z2,
            (32, 4) => ZSequence::Z3,
            (48, 2) => ZSequence::Z2,
            (48, 3) => ZSequence::Z3,
            (64, 2) => ZSequence::Z2,
            (64, 3) => ZSequence::Z3,
            (64, 4) => ZSequence::Z4,
            _ => return None,
        })
    }

    /// Raw 62-bit literal.
    pub const fn bits(self) -> u64 {
        Z[self as usize]
    }

    /// Bit `i mod 62` of the sequence, as `0` or `1`.
    #[inline(always)]
    pub const fn bit(self, i: usize) -> u64 {
        (self.bits() >> (i % Z_PERIOD)) & 1
    }
}
