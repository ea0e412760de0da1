//! AES, the FIPS-197 block cipher.
//!
//! AES works on 128-bit blocks, and supports key sizes of 128, 192, and 256
//! bits (10, 12, and 14 rounds respectively, chosen at [`Aes::new`] from the
//! key length). It applies a series of rounds of substitutions and
//! permutations to the plaintext, using a substitution box (S-box) and XORing
//! the output with a different round key every round. The round keys are
//! derived from the encryption key by [`key_expansion`].
//!
//! The S-box is a fixed, non-linear mapping from original to substituted
//! bytes, implemented as a lookup table. The permutations are achieved by
//! treating the plaintext block as a 4x4 matrix, then shifting rows and
//! mixing columns together.
//!
//! The specification for this cipher is available as [FIPS 197](https://doi.org/10.6028/NIST.FIPS.197).
//!
//! This port implements the software fallback only; AES-NI is not used.

use crate::{block::BlockCipher, Error};
use docext::docext;

/// AES word size in bytes.
const WORD_SIZE: usize = 4;

/// AES block size in words (and in bytes, `NB * WORD_SIZE == 16`).
const NB: usize = 4;

/// Block size, in bytes, of AES (independent of key size).
pub const BLOCK_SIZE: usize = NB * WORD_SIZE;

/// The substitution table, defined in Figure 7 of the AES specification.
pub const S_BOX: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76,
    0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0,
    0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15,
    0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75,
    0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84,
    0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf,
    0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8,
    0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2,
    0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73,
    0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb,
    0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79,
    0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08,
    0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a,
    0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e,
    0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16,
];

/// Inverse [substitution table](S_BOX), defined in Figure 14 of the AES
/// specification.
pub const INV_S_BOX: [u8; 256] = [
    0x52, 0x09, 0x6a, 0xd5, 0x30, 0x36, 0xa5, 0x38, 0xbf, 0x40, 0xa3, 0x9e, 0x81, 0xf3, 0xd7, 0xfb,
    0x7c, 0xe3, 0x39, 0x82, 0x9b, 0x2f, 0xff, 0x87, 0x34, 0x8e, 0x43, 0x44, 0xc4, 0xde, 0xe9, 0xcb,
    0x54, 0x7b, 0x94, 0x32, 0xa6, 0xc2, 0x23, 0x3d, 0xee, 0x4c, 0x95, 0x0b, 0x42, 0xfa, 0xc3, 0x4e,
    0x08, 0x2e, 0xa1, 0x66, 0x28, 0xd9, 0x24, 0xb2, 0x76, 0x5b, 0xa2, 0x49, 0x6d, 0x8b, 0xd1, 0x25,
    0x72, 0xf8, 0xf6, 0x64, 0x86, 0x68, 0x98, 0x16, 0xd4, 0xa4, 0x5c, 0xcc, 0x5d, 0x65, 0xb6, 0x92,
    0x6c, 0x70, 0x48, 0x50, 0xfd, 0xed, 0xb9, 0xda, 0x5e, 0x15, 0x46, 0x57, 0xa7, 0x8d, 0x9d, 0x84,
    0x90, 0xd8, 0xab, 0x00, 0x8c, 0xbc, 0xd3, 0x0a, 0xf7, 0xe4, 0x58, 0x05, 0xb8, 0xb3, 0x45, 0x06,
    0xd0, 0x2c, 0x1e, 0x8f, 0xca, 0x3f, 0x0f, 0x02, 0xc1, 0xaf, 0xbd, 0x03, 0x01, 0x13, 0x8a, 0x6b,
    0x3a, 0x91, 0x11, 0x41, 0x4f, 0x67, 0xdc, 0xea, 0x97, 0xf2, 0xcf, 0xce, 0xf0, 0xb4, 0xe6, 0x73,
    0x96, 0xac, 0x74, 0x22, 0xe7, 0xad, 0x35, 0x85, 0xe2, 0xf9, 0x37, 0xe8, 0x1c, 0x75, 0xdf, 0x6e,
    0x47, 0xf1, 0x1a, 0x71, 0x1d, 0x29, 0xc5, 0x89, 0x6f, 0xb7, 0x62, 0x0e, 0xaa, 0x18, 0xbe, 0x1b,
    0xfc, 0x56, 0x3e, 0x4b, 0xc6, 0xd2, 0x79, 0x20, 0x9a, 0xdb, 0xc0, 0xfe, 0x78, 0xcd, 0x5a, 0xf4,
    0x1f, 0xdd, 0xa8, 0x33, 0x88, 0x07, 0xc7, 0x31, 0xb1, 0x12, 0x10, 0x59, 0x27, 0x80, 0xec, 0x5f,
    0x60, 0x51, 0x7f, 0xa9, 0x19, 0xb5, 0x4a, 0x0d, 0x2d, 0xe5, 0x7a, 0x9f, 0x93, 0xc9, 0x9c, 0xef,
    0xa0, 0xe0, 0x3b, 0x4d, 0xae, 0x2a, 0xf5, 0xb0, 0xc8, 0xeb, 0xbb, 0x3c, 0x83, 0x53, 0x99, 0x61,
    0x17, 0x2b, 0x04, 0x7e, 0xba, 0x77, 0xd6, 0x26, 0xe1, 0x69, 0x14, 0x63, 0x55, 0x21, 0x0c, 0x7d,
];

/// The round constant word array, defined in Section 5.2 of the AES
/// specification.
pub const RCON: [u8; 15] = [
    0x0, 0x1, 0x2, 0x4, 0x8, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36, 0x6c, 0xd8, 0xab, 0x4d,
];

/// AES block cipher state: the expanded round-key schedule, plus the round
/// count it was expanded for (10/12/14, determined by the key length at
/// [`Aes::new`]).
#[derive(Debug, Clone)]
pub struct Aes {
    rounds: usize,
    schedule: Vec<u8>,
}

/// `(key words, rounds)` for each of the three supported AES key sizes.
fn params_for_key_len(len: usize) -> Result<(usize, usize), Error> {
    match len {
        16 => Ok((4, 10)),
        24 => Ok((6, 12)),
        32 => Ok((8, 14)),
        _ => Err(Error::KeySize { got: len }),
    }
}

impl BlockCipher for Aes {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn new(key: &[u8]) -> Result<Self, Error> {
        let (nk, rounds) = params_for_key_len(key.len())?;
        Ok(Aes {
            rounds,
            schedule: key_expansion(key, nk, rounds),
        })
    }

    fn forward(&self, block: &mut [u8]) {
        encrypt(block, &self.schedule, self.rounds);
    }

    fn inverse(&self, block: &mut [u8]) {
        decrypt(block, &self.schedule, self.rounds);
    }
}

/// AES encryption routine defined in Section 5.1 of the AES specification.
///
/// Applies [SubBytes](sub_bytes), [ShiftRows](shift_rows),
/// [MixColumns](mix_columns), and [AddRoundKey](add_round_key) to the
/// internal state in each round. The initial state is the plaintext block.
fn encrypt(state: &mut [u8], w: &[u8], rounds: usize) {
    add_round_key(state, w, 0);

    for round in 1..rounds {
        sub_bytes(state);
        shift_rows(state);
        mix_columns(state);
        add_round_key(state, w, round);
    }

    sub_bytes(state);
    shift_rows(state);
    add_round_key(state, w, rounds);
}

/// AES decryption routine defined in Section 5.3 of the AES specification.
/// The exact reverse of [`encrypt`].
fn decrypt(state: &mut [u8], w: &[u8], rounds: usize) {
    add_round_key(state, w, rounds);

    for round in (1..rounds).rev() {
        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, w, round);
        inv_mix_columns(state);
    }

    inv_shift_rows(state);
    inv_sub_bytes(state);
    add_round_key(state, w, 0);
}

/// The AddRoundKey transformation defined in Section 5.1.4 of the AES
/// specification. XORs bytes in the state with the corresponding bytes in
/// the round key.
fn add_round_key(state: &mut [u8], w: &[u8], round: usize) {
    state
        .iter_mut()
        .zip(&w[round * NB * WORD_SIZE..(round + 1) * NB * WORD_SIZE])
        .for_each(|(s, k)| *s ^= k);
}

/// The SubBytes transformation defined in Section 5.1.1 of the AES
/// specification: replaces each byte with the corresponding [S-box](S_BOX)
/// entry.
fn sub_bytes(bytes: &mut [u8]) {
    for b in bytes.iter_mut() {
        *b = S_BOX[usize::from(*b)];
    }
}

/// The InvSubBytes transformation defined in Section 5.3.2 of the AES
/// specification. Inverse of [`sub_bytes`].
fn inv_sub_bytes(bytes: &mut [u8]) {
    for b in bytes.iter_mut() {
        *b = INV_S_BOX[usize::from(*b)];
    }
}

/// The ShiftRows transformation defined in Section 5.1.2 of the AES
/// specification: rotates all rows by an offset, except the first one.
fn shift_rows(state: &mut [u8]) {
    state.swap(1, 13);
    state.swap(5, 9);
    state.swap(1, 9);

    state.swap(2, 10);
    state.swap(6, 14);

    state.swap(3, 7);
    state.swap(11, 15);
    state.swap(3, 11);
}

/// The InvShiftRows transformation defined in Section 5.3.1 of the AES
/// specification. Inverse of [`shift_rows`].
fn inv_shift_rows(state: &mut [u8]) {
    state.swap(1, 13);
    state.swap(5, 9);
    state.swap(5, 13);

    state.swap(2, 10);
    state.swap(6, 14);

    state.swap(3, 15);
    state.swap(7, 11);
    state.swap(3, 11);
}

/// The MixColumns transformation defined in Section 5.1.3 of the AES
/// specification: multiplies each column of the state, viewed as a vector of
/// $GF(2^8)$ polynomials, by a fixed matrix.
#[docext]
fn mix_columns(state: &mut [u8]) {
    let copy: Vec<u8> = state.to_vec();
    state.chunks_mut(4).zip(copy.chunks(4)).for_each(|(s, c)| {
        s[0] = times_02(c[0]) ^ times_03(c[1]) ^ c[2] ^ c[3];
        s[1] = c[0] ^ times_02(c[1]) ^ times_03(c[2]) ^ c[3];
        s[2] = c[0] ^ c[1] ^ times_02(c[2]) ^ times_03(c[3]);
        s[3] = times_03(c[0]) ^ c[1] ^ c[2] ^ times_02(c[3]);
    });
}

/// The InvMixColumns transformation defined in Section 5.3.1 of the AES
/// specification. Inverse of [`mix_columns`].
fn inv_mix_columns(state: &mut [u8]) {
    let copy: Vec<u8> = state.to_vec();
    state.chunks_mut(4).zip(copy.chunks(4)).for_each(|(s, c)| {
        s[0] = times_0e(c[0]) ^ times_0b(c[1]) ^ times_0d(c[2]) ^ times_09(c[3]);
        s[1] = times_09(c[0]) ^ times_0e(c[1]) ^ times_0b(c[2]) ^ times_0d(c[3]);
        s[2] = times_0d(c[0]) ^ times_09(c[1]) ^ times_0e(c[2]) ^ times_0b(c[3]);
        s[3] = times_0b(c[0]) ^ times_0d(c[1]) ^ times_09(c[2]) ^ times_0e(c[3]);
    });
}

/// Multiply `b` by 0x02 in the Galois field $GF(2^8)$, per Section 4.2.1 of
/// the AES specification: a left shift, XORed with the reduction polynomial
/// $0x1b$ if the high bit was set before the shift.
fn times_02(b: u8) -> u8 {
    let mut r = b << 1;
    if b & 0x80 != 0 {
        r ^= 0x1b;
    }
    r
}

fn times_03(b: u8) -> u8 {
    times_02(b) ^ b
}

fn times_04(b: u8) -> u8 {
    times_02(times_02(b))
}

fn times_08(b: u8) -> u8 {
    times_02(times_04(b))
}

fn times_09(b: u8) -> u8 {
    times_08(b) ^ b
}

fn times_0b(b: u8) -> u8 {
    times_08(b) ^ times_03(b)
}

fn times_0d(b: u8) -> u8 {
    times_08(b) ^ times_04(b) ^ b
}

fn times_0e(b: u8) -> u8 {
    times_08(b) ^ times_04(b) ^ times_02(b)
}

/// The KeyExpansion routine defined in Section 5.2 of the AES specification.
/// Expands the key into the round-key schedule used once per round by
/// [`add_round_key`].
fn key_expansion(key: &[u8], nk: usize, rounds: usize) -> Vec<u8> {
    let expansion_words = NB * (rounds + 1);
    let mut w = vec![0u8; expansion_words * WORD_SIZE];
    w[0..nk * WORD_SIZE].copy_from_slice(key);

    for i in nk..expansion_words {
        let mut temp = [0u8; WORD_SIZE];
        temp.copy_from_slice(&w[(i - 1) * WORD_SIZE..i * WORD_SIZE]);
        if i % nk == 0 {
            rot_word(&mut temp);
            sub_bytes(&mut temp);
            temp[0] ^= RCON[i / nk];
        } else if nk > 6 && i % nk == 4 {
            sub_bytes(&mut temp);
        }
        for j in 0..WORD_SIZE {
            w[i * WORD_SIZE + j] = w[(i - nk) * WORD_SIZE + j];
        }
        w[i * WORD_SIZE..(i + 1) * WORD_SIZE]
            .iter_mut()
            .zip(temp)
            .for_each(|(w, t)| *w ^= t);
    }
    w
}

/// The RotWord function defined in Section 5.2 of the AES specification:
/// rotates the byte array left by one index.
fn rot_word(word: &mut [u8; WORD_SIZE]) {
    word.rotate_left(1);
}
