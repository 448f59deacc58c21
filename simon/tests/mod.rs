extern crate simon;

use cipher::array::Array;
use cipher::{AlgorithmName, Block, BlockCipherDecrypt, BlockCipherEncrypt, BlockSizeUser};
use hex_literal::hex;
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};
use simon::{Simon, Simon128, Simon32, Simon48, Simon64, Simon96, Word};

// test vectors taken from https://eprint.iacr.org/2013/404, written least significant word first

fn check<W: Word>(key: &[u8], plain_text: &[u8], cipher_text: &[u8])
where
    Simon<W>: BlockCipherEncrypt + BlockCipherDecrypt,
{
    let cipher = Simon::<W>::new(key).expect("Failed to create Simon");
    assert_eq!(cipher.block_size(), plain_text.len());

    let mut block = Block::<Simon<W>>::try_from(plain_text).unwrap();
    cipher.encrypt_block(&mut block);
    assert_eq!(cipher_text, &block[..]);

    cipher.decrypt_block(&mut block);
    assert_eq!(plain_text, &block[..]);
}

#[test]
fn simon32_64() {
    check::<simon::W16>(&hex!("0001080910111819"), &hex!("77686565"), &hex!("bbe99bc6"));
}

#[test]
fn simon48_72() {
    check::<simon::W24>(
        &hex!("00010208090a101112"),
        &hex!("6c696e672061"),
        &hex!("ac2c29ace5da"),
    );
}

#[test]
fn simon48_96() {
    check::<simon::W24>(
        &hex!("00010208090a10111218191a"),
        &hex!("6e6420636972"),
        &hex!("56f1aca5066e"),
    );
}

#[test]
fn simon64_96() {
    check::<simon::W32>(
        &hex!("0001020308090a0b10111213"),
        &hex!("636c696e6720726f"),
        &hex!("c88f1a117fe2a25c"),
    );
}

#[test]
fn simon64_128() {
    check::<simon::W32>(
        &hex!("0001020308090a0b1011121318191a1b"),
        &hex!("756e64206c696b65"),
        &hex!("7aa0dfb920fcc844"),
    );
}

#[test]
fn simon96_96() {
    check::<simon::W48>(
        &hex!("00010203040508090a0b0c0d"),
        &hex!("207468652070696c6c617220"),
        &hex!("82f08f3d0669b462a4072860"),
    );
}

#[test]
fn simon96_144() {
    check::<simon::W48>(
        &hex!("00010203040508090a0b0c0d101112131415"),
        &hex!("6f6620647573742074686174"),
        &hex!("e91adbc5593f1e456c1cadec"),
    );
}

#[test]
fn simon128_128() {
    check::<simon::W64>(
        &hex!("000102030405060708090a0b0c0d0e0f"),
        &hex!("2074726176656c6c6572732064657363"),
        &hex!("bc0b4ef82a83aa653ffe541e1e1b6849"),
    );
}

#[test]
fn simon128_192() {
    check::<simon::W64>(
        &hex!("000102030405060708090a0b0c0d0e0f1011121314151617"),
        &hex!("72696265207768656e20746865726520"),
        &hex!("5bb897256e8d9c6c4f0ddcfcef61acc4"),
    );
}

#[test]
fn simon128_256() {
    check::<simon::W64>(
        &hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"),
        &hex!("697320612073696d6f6f6d20696e2074"),
        &hex!("68b8e7ef872af73ba0a3c8af79552b8d"),
    );
}

#[test]
fn simon48_72_zero_key_zero_block() {
    let plain_text = [0u8; 6];
    let cipher_text = hex!("9750247b5c5a");

    let cipher = Simon48::new(&[0u8; 9]).expect("Failed to create Simon48");

    let mut block = *Array::from_slice(&plain_text);
    cipher.encrypt_block(&mut block);
    assert_eq!(cipher_text, block[..]);

    cipher.decrypt_block(&mut block);
    assert_eq!(plain_text, block[..]);
}

#[test]
fn zero_key_zero_block_all_variants() {
    fn zero<W: Word>(key_len: usize) -> Vec<u8>
    where
        Simon<W>: BlockCipherEncrypt,
    {
        let cipher = Simon::<W>::new(&vec![0u8; key_len]).unwrap();
        let mut block = Block::<Simon<W>>::default();
        cipher.encrypt_block(&mut block);
        block.to_vec()
    }

    assert_eq!(zero::<simon::W16>(8), hex!("ec28e85a"));
    assert_eq!(zero::<simon::W24>(12), hex!("7dad0e3f906d"));
    assert_eq!(zero::<simon::W32>(12), hex!("b97d252a35f38e46"));
    assert_eq!(zero::<simon::W32>(16), hex!("51bfd9540abef1ed"));
    assert_eq!(zero::<simon::W48>(12), hex!("13e08548dbc5bbfebddc984b"));
    assert_eq!(zero::<simon::W48>(18), hex!("501e39d143b0779b8f0b6ca5"));
    assert_eq!(zero::<simon::W64>(16), hex!("31ff1cac55a0b18702f7e6316f35c7d4"));
    assert_eq!(zero::<simon::W64>(24), hex!("d7ff589c0ac062c123e2ef5a6b050d66"));
    assert_eq!(zero::<simon::W64>(32), hex!("3564ab84491779fbbf278e56566be2cd"));
}

#[test]
fn rejects_unknown_key_lengths() {
    for len in [0, 8, 10, 11, 13, 16] {
        let err = Simon48::new(&vec![0u8; len]).unwrap_err();
        assert_eq!(err.key_len(), len);
        assert_eq!(err.algorithm(), "Simon48");
        assert!(err.accepted_key_lengths().eq([9, 12]));
    }
    assert!(Simon32::new(&[0u8; 9]).is_err());
    assert!(Simon64::new(&[0u8; 8]).is_err());
    assert!(Simon96::new(&[0u8; 16]).is_err());
    assert!(Simon128::new(&[0u8; 12]).is_err());

    let err = Simon96::new(&[0u8; 17]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid key length 17 for Simon96, expected one of 12, 18 bytes"
    );
}

#[test]
fn block_sizes_and_names() {
    assert_eq!(Simon32::new(&[0; 8]).unwrap().block_size(), 4);
    assert_eq!(Simon48::new(&[0; 9]).unwrap().block_size(), 6);
    assert_eq!(Simon64::new(&[0; 16]).unwrap().block_size(), 8);
    assert_eq!(Simon96::new(&[0; 18]).unwrap().block_size(), 12);
    assert_eq!(Simon128::new(&[0; 32]).unwrap().block_size(), 16);
    assert_eq!(<Simon96 as BlockSizeUser>::block_size(), 12);

    struct Name<T>(core::marker::PhantomData<T>);
    impl<T: AlgorithmName> core::fmt::Display for Name<T> {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            T::write_alg_name(f)
        }
    }
    assert_eq!(Name::<Simon48>(core::marker::PhantomData).to_string(), "Simon48");

    let cipher = Simon128::new(&[7u8; 24]).unwrap();
    assert_eq!(format!("{:?}", cipher), "Simon128 { ... }");
    assert_eq!(cipher.config().rounds, 69);
}

fn random_round_trips<W: Word>(key_len: usize, seed: u64)
where
    Simon<W>: BlockCipherEncrypt + BlockCipherDecrypt,
{
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut key = vec![0u8; key_len];
    rng.fill_bytes(&mut key);
    let cipher = Simon::<W>::new(&key).unwrap();

    let mut blocks = vec![Block::<Simon<W>>::default(); 10_000];
    for block in blocks.iter_mut() {
        rng.fill_bytes(block);
    }
    let original = blocks.clone();

    cipher.encrypt_blocks(&mut blocks);
    assert_ne!(blocks, original);
    cipher.decrypt_blocks(&mut blocks);
    assert_eq!(blocks, original);
}

#[test]
fn round_trip_random_blocks() {
    random_round_trips::<simon::W16>(8, 1);
    random_round_trips::<simon::W24>(9, 2);
    random_round_trips::<simon::W24>(12, 3);
    random_round_trips::<simon::W32>(12, 4);
    random_round_trips::<simon::W32>(16, 5);
    random_round_trips::<simon::W48>(12, 6);
    random_round_trips::<simon::W48>(18, 7);
    random_round_trips::<simon::W64>(16, 8);
    random_round_trips::<simon::W64>(24, 9);
    random_round_trips::<simon::W64>(32, 10);
}

#[test]
fn same_key_same_schedule() {
    let key = hex!("0f1e2d3c4b5a69788796a5b4c3d2");
    let a = Simon96::new(&key[..12]).unwrap();
    let b = Simon96::new(&key[..12]).unwrap();
    assert_eq!(a.round_keys(), b.round_keys());
    assert_eq!(a.round_keys().len(), 52);

    let plain_text = *Array::from_slice(&key[..12]);
    let (mut x, mut y) = (plain_text, plain_text);
    a.encrypt_block(&mut x);
    b.encrypt_block(&mut y);
    assert_eq!(x, y);
}

#[test]
fn round_keys_are_masked() {
    let cipher = Simon48::new(&[0xff; 12]).unwrap();
    assert!(cipher.round_keys().iter().all(|k| (k.get() & !simon::W24::MASK) == 0));

    let cipher = Simon96::new(&[0xff; 18]).unwrap();
    assert!(cipher.round_keys().iter().all(|k| (k.get() & !simon::W48::MASK) == 0));
}

#[test]
fn in_place_matches_buffer_to_buffer() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    let cipher = Simon48::new(&hex!("00010208090a10111218191a")).unwrap();

    for _ in 0..1000 {
        let mut buf = Block::<Simon48>::default();
        rng.fill_bytes(&mut buf);

        let mut tmp = Block::<Simon48>::default();
        cipher.encrypt_block_b2b(&buf, &mut tmp);
        let src = buf;
        cipher.encrypt_block(&mut buf);
        assert_eq!(buf, tmp);

        cipher.decrypt_block_b2b(&tmp, &mut buf);
        assert_eq!(buf, src);
    }
}
