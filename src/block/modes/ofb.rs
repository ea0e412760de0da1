use crate::{block::BlockCipher, Error};

/// Output Feedback: a synchronous stream mode. The keystream is the
/// cipher's running output, re-encrypted block by block independently of
/// the data; encryption and decryption are the same XOR operation.
pub struct Ofb<C: BlockCipher> {
    cipher: C,
    iv: Vec<u8>,
    remaining: usize,
}

impl<C: BlockCipher> Ofb<C> {
    /// `iv` may be shorter than the cipher's block size, in which case it is
    /// zero-extended; longer than the block size is [`Error::Arg`].
    pub fn new(cipher: C, iv: &[u8]) -> Result<Self, Error> {
        let block_size = cipher.block_size();
        if iv.len() > block_size {
            return Err(Error::Arg);
        }
        let mut iv_buf = vec![0u8; block_size];
        iv_buf[..iv.len()].copy_from_slice(iv);
        cipher.forward(&mut iv_buf);
        Ok(Ofb {
            cipher,
            iv: iv_buf,
            remaining: block_size,
        })
    }

    /// XOR `input` with the keystream, advancing it as needed.
    pub fn apply(&mut self, input: &[u8]) -> Vec<u8> {
        let block_size = self.iv.len();
        let mut out = vec![0u8; input.len()];
        let mut pos = 0;
        while pos < input.len() {
            if self.remaining == 0 {
                self.cipher.forward(&mut self.iv);
                self.remaining = block_size;
            }
            let process = (input.len() - pos).min(self.remaining);
            let offset = block_size - self.remaining;
            for i in 0..process {
                out[pos + i] = input[pos + i] ^ self.iv[offset + i];
            }
            self.remaining -= process;
            pos += process;
        }
        out
    }
}
