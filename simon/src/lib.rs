//! Pure Rust implementation of the [Simon][1] family of lightweight block ciphers.
//!
//! Each family member is fixed by its word size and accepts every key length
//! defined for that word size; the key length selects the round count and
//! z-sequence at construction.
//!
//! | Type       | Block  | Key lengths (bytes) | Rounds     |
//! |------------|--------|---------------------|------------|
//! | [Simon32]  | 32 bit | 8                   | 32         |
//! | [Simon48]  | 48 bit | 9, 12               | 36, 36     |
//! | [Simon64]  | 64 bit | 12, 16              | 42, 44     |
//! | [Simon96]  | 96 bit | 12, 18              | 52, 54     |
//! | [Simon128] | 128 bit| 16, 24, 32          | 68, 69, 72 |
//!
//! Blocks and keys are little-endian word-major: the first word of a block is
//! the right half `y`, and the first key word is `k[0]`.
//!
//! # Example
//! ```
//! use simon::cipher::{Block, BlockCipherDecrypt, BlockCipherEncrypt};
//! use simon::Simon48;
//!
//! let cipher = Simon48::new(&[0u8; 9]).unwrap();
//! let mut block = Block::<Simon48>::default();
//! cipher.encrypt_block(&mut block);
//! assert_eq!(block[..], [0x97, 0x50, 0x24, 0x7b, 0x5c, 0x5a]);
//! cipher.decrypt_block(&mut block);
//! assert_eq!(block[..], [0u8; 6]);
//! ```
//!
//! No side-channel resistance is claimed beyond what plain word operations give.
//!
//! [1]: https://eprint.iacr.org/2013/404
#![no_std]

extern crate alloc;

pub use cipher;

pub mod config;
pub mod consts;
pub mod error;
pub mod primitives;
pub mod rounds;
pub mod schedule;

pub use config::Config;
pub use error::ConfigurationError;
pub use primitives::{Word, W16, W24, W32, W48, W64};

use cipher::consts::{U1, U12, U16, U4, U6, U8};
use cipher::inout::InOut;
use cipher::zeroize::ZeroizeOnDrop;
use cipher::{
    AlgorithmName, Block, BlockBackend, BlockCipher, BlockCipherDecrypt, BlockCipherEncrypt,
    BlockClosure, BlockSizeUser, ParBlocksSizeUser,
};
use core::fmt;
use schedule::RoundKeys;

/// Simon with 16-bit words.
pub type Simon32 = Simon<W16>;
/// Simon with 24-bit words.
pub type Simon48 = Simon<W24>;
/// Simon with 32-bit words.
pub type Simon64 = Simon<W32>;
/// Simon with 48-bit words.
pub type Simon96 = Simon<W48>;
/// Simon with 64-bit words.
pub type Simon128 = Simon<W64>;

/// Simon block cipher over words of type `W`.
#[derive(Clone)]
pub struct Simon<W: Word> {
    keys: RoundKeys<W>,
    config: &'static Config,
}

impl<W: Word> Simon<W> {
    /// Expands `key` into a cipher instance. The key length selects the variant.
    pub fn new(key: &[u8]) -> Result<Self, ConfigurationError> {
        let config = Config::resolve::<W>(key.len())?;
        Ok(Self {
            keys: schedule::expand(key, config),
            config,
        })
    }

    /// Block size in bytes.
    pub fn block_size(&self) -> usize {
        2 * W::BYTES
    }

    pub fn config(&self) -> &'static Config {
        self.config
    }

    /// Expanded round keys, in encryption order.
    pub fn round_keys(&self) -> &[W] {
        &self.keys
    }

    #[inline(always)]
    fn read_block(block: &[u8]) -> (W, W) {
        let y = W::from_le_bytes(&block[..W::BYTES]);
        let x = W::from_le_bytes(&block[W::BYTES..]);
        (x, y)
    }

    #[inline(always)]
    fn write_block((x, y): (W, W), block: &mut [u8]) {
        let (lo, hi) = block.split_at_mut(W::BYTES);
        y.write_le_bytes(lo);
        x.write_le_bytes(hi);
    }
}

macro_rules! impl_block_size {
    ($word:ident, $block:ty) => {
        impl BlockSizeUser for Simon<$word> {
            type BlockSize = $block;
        }
    };
}

impl_block_size!(W16, U4);
impl_block_size!(W24, U6);
impl_block_size!(W32, U8);
impl_block_size!(W48, U12);
impl_block_size!(W64, U16);

impl<W: Word> BlockCipher for Simon<W> where Self: BlockSizeUser {}

impl<W: Word> ZeroizeOnDrop for Simon<W> {}

impl<W: Word> AlgorithmName for Simon<W> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(W::FAMILY)
    }
}

impl<W: Word> fmt::Debug for Simon<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ ... }}", W::FAMILY)
    }
}

impl<W: Word> BlockCipherEncrypt for Simon<W>
where
    Self: BlockSizeUser,
{
    fn encrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut SimonEncBackend { cipher: self })
    }
}

struct SimonEncBackend<'a, W: Word> {
    cipher: &'a Simon<W>,
}

impl<W: Word> BlockSizeUser for SimonEncBackend<'_, W>
where
    Simon<W>: BlockSizeUser,
{
    type BlockSize = <Simon<W> as BlockSizeUser>::BlockSize;
}

impl<W: Word> ParBlocksSizeUser for SimonEncBackend<'_, W>
where
    Simon<W>: BlockSizeUser,
{
    type ParBlocksSize = U1;
}

impl<W: Word> BlockBackend for SimonEncBackend<'_, W>
where
    Simon<W>: BlockSizeUser,
{
    #[inline]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let words = Simon::<W>::read_block(block.get_in());
        let cipher = self.cipher;
        let words = cipher.config.stepping.encrypt(words, &cipher.keys);
        Simon::<W>::write_block(words, block.get_out());
    }
}

impl<W: Word> BlockCipherDecrypt for Simon<W>
where
    Self: BlockSizeUser,
{
    fn decrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut SimonDecBackend { cipher: self })
    }
}

struct SimonDecBackend<'a, W: Word> {
    cipher: &'a Simon<W>,
}

impl<W: Word> BlockSizeUser for SimonDecBackend<'_, W>
where
    Simon<W>: BlockSizeUser,
{
    type BlockSize = <Simon<W> as BlockSizeUser>::BlockSize;
}

impl<W: Word> ParBlocksSizeUser for SimonDecBackend<'_, W>
where
    Simon<W>: BlockSizeUser,
{
    type ParBlocksSize = U1;
}

impl<W: Word> BlockBackend for SimonDecBackend<'_, W>
where
    Simon<W>: BlockSizeUser,
{
    #[inline]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let words = Simon::<W>::read_block(block.get_in());
        let cipher = self.cipher;
        let words = cipher.config.stepping.decrypt(words, &cipher.keys);
        Simon::<W>::write_block(words, block.get_out());
    }
}
