//! Threefish-256, the tweakable ARX block cipher underlying [Skein-256](crate::hash::skein256).
//!
//! Operates on 256-bit blocks and keys, with an optional 128-bit tweak that
//! diversifies the permutation without changing the key. The permutation is
//! an initial subkey whitening followed by 9 "big rounds" of 8 MIX-and-permute
//! steps each, with a subkey injected after the 4th and 8th MIX of every big
//! round. `MIX(a, b, r)` is `a += b; b = rol(b, r); b ^= a`; the inverse undoes
//! this in reverse, subtracting/XORing/rotating right.

use crate::{block::BlockCipher, Error};

/// Block size, in bytes, of Threefish-256.
pub const BLOCK_SIZE: usize = 32;

/// Extended-key-word constant XORed into the key schedule, per the Threefish
/// specification.
const KEY_SCHEDULE_CONST: u64 = 0x1BD1_1BDA_A9FC_1A22;

/// Optional tweak for [`Threefish256`], diversifying the permutation without
/// changing the key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tweak(pub [u64; 2]);

/// Threefish-256 block cipher state: the 19 round subkeys derived from a
/// 256-bit key and an optional tweak.
#[derive(Debug, Clone)]
pub struct Threefish256 {
    subkeys: [[u64; 4]; 19],
}

/// `(s0, s1, s2, s3, t0, t1)` index tuples for each of the 19 subkeys, as
/// given by the Threefish-256 key schedule.
#[rustfmt::skip]
const SUBKEY_INDICES: [(usize, usize, usize, usize, usize, usize); 19] = [
    (0, 1, 2, 3, 0, 1),
    (1, 2, 3, 4, 1, 2),
    (2, 3, 4, 0, 2, 0),
    (3, 4, 0, 1, 0, 1),
    (4, 0, 1, 2, 1, 2),
    (0, 1, 2, 3, 2, 0),
    (1, 2, 3, 4, 0, 1),
    (2, 3, 4, 0, 1, 2),
    (3, 4, 0, 1, 2, 0),
    (4, 0, 1, 2, 0, 1),
    (0, 1, 2, 3, 1, 2),
    (1, 2, 3, 4, 2, 0),
    (2, 3, 4, 0, 0, 1),
    (3, 4, 0, 1, 1, 2),
    (4, 0, 1, 2, 2, 0),
    (0, 1, 2, 3, 0, 1),
    (1, 2, 3, 4, 1, 2),
    (2, 3, 4, 0, 2, 0),
    (3, 4, 0, 1, 0, 1),
];

/// Rotation constants for the 8 MIX operations within one big round, in
/// order.
const ROTATIONS: [u32; 8] = [14, 16, 52, 57, 23, 40, 5, 37];
const ROTATIONS2: [u32; 8] = [25, 33, 46, 12, 58, 22, 32, 32];

/// Derives the 19 Threefish-256 subkeys from a key and tweak.
pub fn key_schedule(key: [u64; 4], tweak: Tweak) -> [[u64; 4]; 19] {
    let extended_key = key[0] ^ key[1] ^ key[2] ^ key[3] ^ KEY_SCHEDULE_CONST;
    let key_words = [key[0], key[1], key[2], key[3], extended_key];

    let tweak_words = [tweak.0[0], tweak.0[1], tweak.0[0] ^ tweak.0[1]];

    let mut subkeys = [[0u64; 4]; 19];
    for (n, &(s0, s1, s2, s3, t0, t1)) in SUBKEY_INDICES.iter().enumerate() {
        subkeys[n] = [
            key_words[s0],
            key_words[s1].wrapping_add(tweak_words[t0]),
            key_words[s2].wrapping_add(tweak_words[t1]),
            key_words[s3].wrapping_add(n as u64),
        ];
    }
    subkeys
}

/// One MIX step on words 0/1, then the parallel MIX step on words 2/3, each
/// with its own rotation amount, followed by the permutation (swap words 1
/// and 3).
fn mix_and_permute(block: &mut [u64; 4], r01: u32, r23: u32) {
    block[0] = block[0].wrapping_add(block[1]);
    block[1] = block[1].rotate_left(r01);
    block[1] ^= block[0];

    block[2] = block[2].wrapping_add(block[3]);
    block[3] = block[3].rotate_left(r23);
    block[3] ^= block[2];

    block.swap(1, 3);
}

fn add_subkey(block: &mut [u64; 4], subkey: &[u64; 4]) {
    for i in 0..4 {
        block[i] = block[i].wrapping_add(subkey[i]);
    }
}

fn sub_subkey(block: &mut [u64; 4], subkey: &[u64; 4]) {
    for i in 0..4 {
        block[i] = block[i].wrapping_sub(subkey[i]);
    }
}

/// Standalone Threefish-256 forward permutation, taking the subkeys
/// directly. Used both by [`Threefish256::forward`] and by
/// [Skein-256](crate::hash::skein256)'s UBI compression function, which keys
/// Threefish with its own running hash state rather than a user key.
pub fn forward_raw(block: &mut [u64; 4], subkeys: &[[u64; 4]; 19]) {
    add_subkey(block, &subkeys[0]);

    for t in 0..9 {
        mix_and_permute(block, ROTATIONS[0], ROTATIONS[1]);
        mix_and_permute(block, ROTATIONS[2], ROTATIONS[3]);
        mix_and_permute(block, ROTATIONS[4], ROTATIONS[5]);
        mix_and_permute(block, ROTATIONS[6], ROTATIONS[7]);
        add_subkey(block, &subkeys[t * 2 + 1]);

        mix_and_permute(block, ROTATIONS2[0], ROTATIONS2[1]);
        mix_and_permute(block, ROTATIONS2[2], ROTATIONS2[3]);
        mix_and_permute(block, ROTATIONS2[4], ROTATIONS2[5]);
        mix_and_permute(block, ROTATIONS2[6], ROTATIONS2[7]);
        add_subkey(block, &subkeys[t * 2 + 2]);
    }
}

/// Inverse of [`mix_and_permute`]: undoes the permutation, then the two MIX
/// steps in reverse (XOR, rotate right, subtract).
fn inverse_mix_and_permute(block: &mut [u64; 4], r01: u32, r23: u32) {
    block.swap(1, 3);

    block[1] ^= block[0];
    block[1] = block[1].rotate_right(r01);
    block[0] = block[0].wrapping_sub(block[1]);

    block[3] ^= block[2];
    block[3] = block[3].rotate_right(r23);
    block[2] = block[2].wrapping_sub(block[3]);
}

/// Standalone Threefish-256 inverse permutation, the exact reverse of
/// [`forward_raw`].
pub fn inverse_raw(block: &mut [u64; 4], subkeys: &[[u64; 4]; 19]) {
    for t in (0..9).rev() {
        sub_subkey(block, &subkeys[t * 2 + 2]);
        inverse_mix_and_permute(block, ROTATIONS2[6], ROTATIONS2[7]);
        inverse_mix_and_permute(block, ROTATIONS2[4], ROTATIONS2[5]);
        inverse_mix_and_permute(block, ROTATIONS2[2], ROTATIONS2[3]);
        inverse_mix_and_permute(block, ROTATIONS2[0], ROTATIONS2[1]);

        sub_subkey(block, &subkeys[t * 2 + 1]);
        inverse_mix_and_permute(block, ROTATIONS[6], ROTATIONS[7]);
        inverse_mix_and_permute(block, ROTATIONS[4], ROTATIONS[5]);
        inverse_mix_and_permute(block, ROTATIONS[2], ROTATIONS[3]);
        inverse_mix_and_permute(block, ROTATIONS[0], ROTATIONS[1]);
    }

    sub_subkey(block, &subkeys[0]);
}

fn words_from_bytes(block: &[u8]) -> [u64; 4] {
    let mut words = [0u64; 4];
    for (w, chunk) in words.iter_mut().zip(block.chunks_exact(8)) {
        *w = u64::from_le_bytes(chunk.try_into().unwrap());
    }
    words
}

fn bytes_from_words(words: [u64; 4], block: &mut [u8]) {
    for (chunk, w) in block.chunks_exact_mut(8).zip(words) {
        chunk.copy_from_slice(&w.to_le_bytes());
    }
}

impl Threefish256 {
    /// Initialize Threefish-256 with an explicit tweak, as opposed to the
    /// all-zero tweak [`BlockCipher::new`] assumes.
    pub fn with_tweak(key: &[u8], tweak: Tweak) -> Result<Self, Error> {
        if key.len() != 32 {
            return Err(Error::KeySize { got: key.len() });
        }
        let key_words = words_from_bytes(key);
        Ok(Threefish256 {
            subkeys: key_schedule(key_words, tweak),
        })
    }
}

impl BlockCipher for Threefish256 {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn new(key: &[u8]) -> Result<Self, Error> {
        Self::with_tweak(key, Tweak::default())
    }

    fn forward(&self, block: &mut [u8]) {
        let mut words = words_from_bytes(block);
        forward_raw(&mut words, &self.subkeys);
        bytes_from_words(words, block);
    }

    fn inverse(&self, block: &mut [u8]) {
        let mut words = words_from_bytes(block);
        inverse_raw(&mut words, &self.subkeys);
        bytes_from_words(words, block);
    }
}
