//! Skein-256: a hash function built from [Threefish-256](crate::block::threefish256)
//! via Unique Block Iteration (UBI) in Matyas-Meyer-Oseas mode, with a
//! configurable output length.

use crate::{
    block::threefish256::{self, Tweak},
    hash::Hash,
    util::xor_buffer,
};

const STATE_SIZE: usize = 32;
const BLOCK_SIZE: usize = 32;

const UBI_CFG: u64 = 4;
const UBI_MSG: u64 = 48;
const UBI_OUT: u64 = 63;

const INITIAL_STATE: [u64; 4] = [
    0xFC9DA860D048B449,
    0x2FCA66479FA7D833,
    0xB33BC3896656840F,
    0x6A54E920FDE8DA69,
];

/// Skein's UBI configuration string, identifying this as the default
/// 256-bit-output Skein-256 configuration. Personalization, tree hashing,
/// and other optional UBI blocks are not implemented.
#[derive(Debug, Clone, Copy)]
pub struct Params {
    pub output_len_bits: u64,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            output_len_bits: (STATE_SIZE * 8) as u64,
        }
    }
}

impl Params {
    /// Serialize into the 32-byte UBI configuration block: 4-byte schema
    /// identifier `"SHA3"`, 2-byte version, 2 reserved bytes, the 8-byte
    /// output length in bits, and 16 reserved bytes.
    fn config_block(&self) -> [u8; BLOCK_SIZE] {
        let mut block = [0u8; BLOCK_SIZE];
        block[0..4].copy_from_slice(b"SHA3");
        block[4..6].copy_from_slice(&1u16.to_le_bytes());
        block[8..16].copy_from_slice(&self.output_len_bits.to_le_bytes());
        block
    }
}

fn make_tweak(ubi_type: u64, position: u64, first: bool, last: bool) -> Tweak {
    let hi = ((last as u64) << 63) | ((first as u64) << 62) | (ubi_type << 56);
    Tweak([position, hi])
}

fn words_from_bytes(bytes: &[u8; BLOCK_SIZE]) -> [u64; 4] {
    let mut words = [0u64; 4];
    for (w, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        *w = u64::from_le_bytes(chunk.try_into().unwrap());
    }
    words
}

fn bytes_from_words(words: [u64; 4]) -> [u8; BLOCK_SIZE] {
    let mut bytes = [0u8; BLOCK_SIZE];
    for (chunk, w) in bytes.chunks_exact_mut(8).zip(words) {
        chunk.copy_from_slice(&w.to_le_bytes());
    }
    bytes
}

/// Skein's UBI compression function: keys Threefish-256 with the running
/// hash state and the UBI tweak, encrypts the message block, then feeds the
/// block forward (Matyas-Meyer-Oseas).
fn compress(block: [u64; 4], state: [u64; 4], tweak: Tweak) -> [u64; 4] {
    let subkeys = threefish256::key_schedule(state, tweak);
    let mut out = block;
    threefish256::forward_raw(&mut out, &subkeys);
    for i in 0..4 {
        out[i] ^= block[i];
    }
    out
}

#[derive(Debug, Clone)]
pub struct Skein256 {
    state: [u64; 4],
    block: [u8; BLOCK_SIZE],
    block_len: usize,
    message_len: u64,
    output_len: u64,
}

impl Skein256 {
    /// Initialize Skein-256 to emit `output_len_bytes` of digest rather than
    /// the default 32.
    pub fn with_output_len(output_len_bytes: u64) -> Self {
        let params = Params {
            output_len_bits: output_len_bytes * 8,
        };
        let config = params.config_block();
        let tweak = make_tweak(UBI_CFG, BLOCK_SIZE as u64, true, true);
        let state = compress(words_from_bytes(&config), [0u64; 4], tweak);

        Skein256 {
            state,
            block: [0u8; BLOCK_SIZE],
            block_len: 0,
            message_len: 0,
            output_len: output_len_bytes,
        }
    }

    fn absorb_block(&mut self, last: bool) {
        self.message_len += self.block_len as u64;
        let first = self.message_len <= BLOCK_SIZE as u64;
        let tweak = make_tweak(UBI_MSG, self.message_len, first, last);
        self.state = compress(words_from_bytes(&self.block), self.state, tweak);
        self.block_len = 0;
    }
}

impl Hash for Skein256 {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn digest_size(&self) -> usize {
        self.output_len as usize
    }

    fn new() -> Self {
        Skein256 {
            state: INITIAL_STATE,
            block: [0u8; BLOCK_SIZE],
            block_len: 0,
            message_len: 0,
            output_len: STATE_SIZE as u64,
        }
    }

    fn update(&mut self, mut data: &[u8]) {
        if self.block_len + data.len() > BLOCK_SIZE {
            let pad = BLOCK_SIZE - self.block_len;
            self.block[self.block_len..].copy_from_slice(&data[..pad]);
            self.block_len = BLOCK_SIZE;
            self.absorb_block(false);
            data = &data[pad..];

            while data.len() > BLOCK_SIZE {
                self.block.copy_from_slice(&data[..BLOCK_SIZE]);
                self.block_len = BLOCK_SIZE;
                self.absorb_block(false);
                data = &data[BLOCK_SIZE..];
            }
        }

        self.block[self.block_len..self.block_len + data.len()].copy_from_slice(data);
        self.block_len += data.len();
    }

    fn finish(mut self) -> Vec<u8> {
        for b in &mut self.block[self.block_len..] {
            *b = 0;
        }
        self.absorb_block(true);

        let mut out = Vec::with_capacity(self.output_len as usize);
        let mut counter = 0u64;
        let mut remaining = self.output_len;
        while remaining != 0 {
            let mut counter_block = [0u64; 4];
            counter_block[0] = counter;
            let tweak = make_tweak(UBI_OUT, 8, true, true);
            let output_words = compress(counter_block, self.state, tweak);
            let output_bytes = bytes_from_words(output_words);
            let take = remaining.min(BLOCK_SIZE as u64) as usize;
            out.extend_from_slice(&output_bytes[..take]);
            remaining -= take as u64;
            counter += 1;
        }
        out
    }
}
