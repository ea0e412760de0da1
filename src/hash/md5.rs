//! MD5, a Merkle-Damgard hash function producing a 128-bit digest.
//!
//! MD5 is cryptographically broken (collisions are practical); it is
//! implemented here for interoperability with legacy protocols, not for new
//! designs.

use crate::hash::Hash;

const DIGEST_SIZE: usize = 16;
const BLOCK_SIZE: usize = 64;

const INITIAL_STATE: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

#[derive(Debug, Clone)]
pub struct Md5 {
    digest: [u32; 4],
    block: [u8; BLOCK_SIZE],
    block_len: usize,
    message_len: u64,
}

/// The MD5 compression function: runs the 64-step Merkle-Damgard round
/// function over one message block and feeds the result forward into
/// `digest`.
fn compress(block: &[u8; BLOCK_SIZE], digest: &mut [u32; 4]) {
    let mut words = [0u32; 16];
    for (w, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *w = u32::from_le_bytes(chunk.try_into().unwrap());
    }

    let (mut a, mut b, mut c, mut d) = (digest[0], digest[1], digest[2], digest[3]);

    macro_rules! step {
        ($a:ident, $b:ident, $c:ident, $d:ident, $f:expr, $k:expr, $m:expr, $s:expr) => {
            $a = $a
                .wrapping_add($f)
                .wrapping_add($k)
                .wrapping_add(words[$m]);
            $a = $a.rotate_left($s).wrapping_add($b);
        };
    }

    step!(a, b, c, d, d ^ (b & (c ^ d)), 0xD76AA478, 0, 7);
    step!(d, a, b, c, c ^ (a & (b ^ c)), 0xE8C7B756, 1, 12);
    step!(c, d, a, b, b ^ (d & (a ^ b)), 0x242070DB, 2, 17);
    step!(b, c, d, a, a ^ (c & (d ^ a)), 0xC1BDCEEE, 3, 22);
    step!(a, b, c, d, d ^ (b & (c ^ d)), 0xF57C0FAF, 4, 7);
    step!(d, a, b, c, c ^ (a & (b ^ c)), 0x4787C62A, 5, 12);
    step!(c, d, a, b, b ^ (d & (a ^ b)), 0xA8304613, 6, 17);
    step!(b, c, d, a, a ^ (c & (d ^ a)), 0xFD469501, 7, 22);
    step!(a, b, c, d, d ^ (b & (c ^ d)), 0x698098D8, 8, 7);
    step!(d, a, b, c, c ^ (a & (b ^ c)), 0x8B44F7AF, 9, 12);
    step!(c, d, a, b, b ^ (d & (a ^ b)), 0xFFFF5BB1, 10, 17);
    step!(b, c, d, a, a ^ (c & (d ^ a)), 0x895CD7BE, 11, 22);
    step!(a, b, c, d, d ^ (b & (c ^ d)), 0x6B901122, 12, 7);
    step!(d, a, b, c, c ^ (a & (b ^ c)), 0xFD987193, 13, 12);
    step!(c, d, a, b, b ^ (d & (a ^ b)), 0xA679438E, 14, 17);
    step!(b, c, d, a, a ^ (c & (d ^ a)), 0x49B40821, 15, 22);

    step!(a, b, c, d, c ^ (d & (b ^ c)), 0xF61E2562, 1, 5);
    step!(d, a, b, c, b ^ (c & (a ^ b)), 0xC040B340, 6, 9);
    step!(c, d, a, b, a ^ (b & (d ^ a)), 0x265E5A51, 11, 14);
    step!(b, c, d, a, d ^ (a & (c ^ d)), 0xE9B6C7AA, 0, 20);
    step!(a, b, c, d, c ^ (d & (b ^ c)), 0xD62F105D, 5, 5);
    step!(d, a, b, c, b ^ (c & (a ^ b)), 0x02441453, 10, 9);
    step!(c, d, a, b, a ^ (b & (d ^ a)), 0xD8A1E681, 15, 14);
    step!(b, c, d, a, d ^ (a & (c ^ d)), 0xE7D3FBC8, 4, 20);
    step!(a, b, c, d, c ^ (d & (b ^ c)), 0x21E1CDE6, 9, 5);
    step!(d, a, b, c, b ^ (c & (a ^ b)), 0xC33707D6, 14, 9);
    step!(c, d, a, b, a ^ (b & (d ^ a)), 0xF4D50D87, 3, 14);
    step!(b, c, d, a, d ^ (a & (c ^ d)), 0x455A14ED, 8, 20);
    step!(a, b, c, d, c ^ (d & (b ^ c)), 0xA9E3E905, 13, 5);
    step!(d, a, b, c, b ^ (c & (a ^ b)), 0xFCEFA3F8, 2, 9);
    step!(c, d, a, b, a ^ (b & (d ^ a)), 0x676F02D9, 7, 14);
    step!(b, c, d, a, d ^ (a & (c ^ d)), 0x8D2A4C8A, 12, 20);

    step!(a, b, c, d, b ^ c ^ d, 0xFFFA3942, 5, 4);
    step!(d, a, b, c, a ^ b ^ c, 0x8771F681, 8, 11);
    step!(c, d, a, b, d ^ a ^ b, 0x6D9D6122, 11, 16);
    step!(b, c, d, a, c ^ d ^ a, 0xFDE5380C, 14, 23);
    step!(a, b, c, d, b ^ c ^ d, 0xA4BEEA44, 1, 4);
    step!(d, a, b, c, a ^ b ^ c, 0x4BDECFA9, 4, 11);
    step!(c, d, a, b, d ^ a ^ b, 0xF6BB4B60, 7, 16);
    step!(b, c, d, a, c ^ d ^ a, 0xBEBFBC70, 10, 23);
    step!(a, b, c, d, b ^ c ^ d, 0x289B7EC6, 13, 4);
    step!(d, a, b, c, a ^ b ^ c, 0xEAA127FA, 0, 11);
    step!(c, d, a, b, d ^ a ^ b, 0xD4EF3085, 3, 16);
    step!(b, c, d, a, c ^ d ^ a, 0x04881D05, 6, 23);
    step!(a, b, c, d, b ^ c ^ d, 0xD9D4D039, 9, 4);
    step!(d, a, b, c, a ^ b ^ c, 0xE6DB99E5, 12, 11);
    step!(c, d, a, b, d ^ a ^ b, 0x1FA27CF8, 15, 16);
    step!(b, c, d, a, c ^ d ^ a, 0xC4AC5665, 2, 23);

    step!(a, b, c, d, c ^ (b | !d), 0xF4292244, 0, 6);
    step!(d, a, b, c, b ^ (a | !c), 0x432AFF97, 7, 10);
    step!(c, d, a, b, a ^ (d | !b), 0xAB9423A7, 14, 15);
    step!(b, c, d, a, d ^ (c | !a), 0xFC93A039, 5, 21);
    step!(a, b, c, d, c ^ (b | !d), 0x655B59C3, 12, 6);
    step!(d, a, b, c, b ^ (a | !c), 0x8F0CCC92, 3, 10);
    step!(c, d, a, b, a ^ (d | !b), 0xFFEFF47D, 10, 15);
    step!(b, c, d, a, d ^ (c | !a), 0x85845DD1, 1, 21);
    step!(a, b, c, d, c ^ (b | !d), 0x6FA87E4F, 8, 6);
    step!(d, a, b, c, b ^ (a | !c), 0xFE2CE6E0, 15, 10);
    step!(c, d, a, b, a ^ (d | !b), 0xA3014314, 6, 15);
    step!(b, c, d, a, d ^ (c | !a), 0x4E0811A1, 13, 21);
    step!(a, b, c, d, c ^ (b | !d), 0xF7537E82, 4, 6);
    step!(d, a, b, c, b ^ (a | !c), 0xBD3AF235, 11, 10);
    step!(c, d, a, b, a ^ (d | !b), 0x2AD7D2BB, 2, 15);
    step!(b, c, d, a, d ^ (c | !a), 0xEB86D391, 9, 21);

    digest[0] = digest[0].wrapping_add(a);
    digest[1] = digest[1].wrapping_add(b);
    digest[2] = digest[2].wrapping_add(c);
    digest[3] = digest[3].wrapping_add(d);
}

impl Md5 {
    fn absorb_block(&mut self) {
        compress(&self.block, &mut self.digest);
        self.block_len = 0;
    }
}

impl Hash for Md5 {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn digest_size(&self) -> usize {
        DIGEST_SIZE
    }

    fn new() -> Self {
        Md5 {
            digest: INITIAL_STATE,
            block: [0u8; BLOCK_SIZE],
            block_len: 0,
            message_len: 0,
        }
    }

    fn update(&mut self, mut data: &[u8]) {
        self.message_len = self.message_len.wrapping_add(data.len() as u64);

        if self.block_len + data.len() >= BLOCK_SIZE {
            let pad = BLOCK_SIZE - self.block_len;
            self.block[self.block_len..].copy_from_slice(&data[..pad]);
            self.absorb_block();
            data = &data[pad..];

            while data.len() >= BLOCK_SIZE {
                self.block.copy_from_slice(&data[..BLOCK_SIZE]);
                self.absorb_block();
                data = &data[BLOCK_SIZE..];
            }
        }

        self.block[self.block_len..self.block_len + data.len()].copy_from_slice(data);
        self.block_len += data.len();
    }

    fn finish(mut self) -> Vec<u8> {
        let bit_len = self.message_len.wrapping_mul(8);

        self.update(&[0x80]);
        let zero_bytes = (2 * BLOCK_SIZE - 8 - self.block_len) % BLOCK_SIZE;
        let zeros = vec![0u8; zero_bytes];
        self.update(&zeros);
        self.update(&bit_len.to_le_bytes());

        let mut out = vec![0u8; DIGEST_SIZE];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.digest) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }
}
