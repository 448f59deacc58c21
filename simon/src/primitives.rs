use crate::config::Config;
use crate::consts::{F_ROT_AND_A, F_ROT_AND_B, F_ROT_XOR};
use cipher::zeroize::DefaultIsZeroes;
use core::fmt::Debug;
use core::ops::{BitAnd, BitXor, Not};

/// An unsigned integer of exactly `BITS` significant bits.
///
/// Bits above `BITS` are zero for every value of an implementing type:
/// constructors mask, and every operation that could set a high bit (left
/// rotation, complement) masks its result.
pub trait Word:
    Copy
    + Eq
    + Debug
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + DefaultIsZeroes
    + 'static
{
    /// Width in bits.
    const BITS: u32;
    /// Width in bytes.
    const BYTES: usize;
    /// `2^BITS - 1`, widened to `u64`.
    const MASK: u64;
    /// Family name, e.g. `"Simon48"`.
    const FAMILY: &'static str;
    /// Accepted configurations, one per key length.
    const CONFIGS: &'static [Config];

    /// Masks `value` to `BITS`.
    fn new(value: u64) -> Self;

    fn get(self) -> u64;

    /// Rotates left within the `BITS`-wide field. `s` must be in `1..BITS`.
    fn rotate_left(self, s: u32) -> Self;

    /// Rotates right within the `BITS`-wide field. `s` must be in `1..BITS`.
    fn rotate_right(self, s: u32) -> Self;

    /// Little-endian decode of the first `BYTES` bytes of `bytes`.
    fn from_le_bytes(bytes: &[u8]) -> Self;

    /// Little-endian encode into the first `BYTES` bytes of `out`.
    fn write_le_bytes(self, out: &mut [u8]);
}

/// The round function's nonlinear step: `(x <<< 1 & x <<< 8) ^ x <<< 2`.
#[inline(always)]
pub fn scramble<W: Word>(x: W) -> W {
    (x.rotate_left(F_ROT_AND_A) & x.rotate_left(F_ROT_AND_B)) ^ x.rotate_left(F_ROT_XOR)
}

macro_rules! impl_word {
    ($name:ident, $primitive:ident, $bits:expr, $family:expr, $configs:expr) => {
        #[doc = concat!("A ", stringify!($bits), "-bit word stored in a `", stringify!($primitive), "`.")]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name($primitive);

        impl $name {
            const LIMB: $primitive = $primitive::MAX >> ($primitive::BITS - $bits);
        }

        impl BitAnd for $name {
            type Output = Self;

            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl BitXor for $name {
            type Output = Self;

            #[inline(always)]
            fn bitxor(self, rhs: Self) -> Self {
                Self(self.0 ^ rhs.0)
            }
        }

        impl Not for $name {
            type Output = Self;

            #[inline(always)]
            fn not(self) -> Self {
                Self(!self.0 & Self::LIMB)
            }
        }

        impl DefaultIsZeroes for $name {}

        impl Word for $name {
            const BITS: u32 = $bits;
            const BYTES: usize = $bits / 8;
            const MASK: u64 = $name::LIMB as u64;
            const FAMILY: &'static str = $family;
            const CONFIGS: &'static [Config] = $configs;

            #[inline(always)]
            fn new(value: u64) -> Self {
                Self(value as $primitive & Self::LIMB)
            }

            #[inline(always)]
            fn get(self) -> u64 {
                self.0 as u64
            }

            #[inline(always)]
            fn rotate_left(self, s: u32) -> Self {
                debug_assert!(s > 0 && s < $bits);
                Self(((self.0 << s) | (self.0 >> ($bits - s))) & Self::LIMB)
            }

            #[inline(always)]
            fn rotate_right(self, s: u32) -> Self {
                debug_assert!(s > 0 && s < $bits);
                Self(((self.0 >> s) | (self.0 << ($bits - s))) & Self::LIMB)
            }

            #[inline(always)]
            fn from_le_bytes(bytes: &[u8]) -> Self {
                let mut buf = [0u8; core::mem::size_of::<$primitive>()];
                buf[..Self::BYTES].copy_from_slice(&bytes[..Self::BYTES]);
                Self($primitive::from_le_bytes(buf))
            }

            #[inline(always)]
            fn write_le_bytes(self, out: &mut [u8]) {
                out[..Self::BYTES].copy_from_slice(&self.0.to_le_bytes()[..Self::BYTES]);
            }
        }
    };
}

impl_word!(W16, u16, 16, "Simon32", crate::config::SIMON32);
impl_word!(W24, u32, 24, "Simon48", crate::config::SIMON48);
impl_word!(W32, u32, 32, "Simon64", crate::config::SIMON64);
impl_word!(W48, u64, 48, "Simon96", crate::config::SIMON96);
impl_word!(W64, u64, 64, "Simon128", crate::config::SIMON128);
