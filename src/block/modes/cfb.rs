use crate::{block::BlockCipher, Error};

/// Cipher Feedback: a self-synchronizing stream mode. The keystream is the
/// cipher's running output, but unlike [OFB](super::Ofb), the next
/// keystream block is derived from the _ciphertext_ (not the previous
/// keystream), so decryption feeds ciphertext back through the permutation.
pub struct Cfb<C: BlockCipher> {
    cipher: C,
    iv: Vec<u8>,
    remaining: usize,
}

impl<C: BlockCipher> Cfb<C> {
    /// `iv` must be exactly one block long.
    pub fn new(cipher: C, iv: &[u8]) -> Result<Self, Error> {
        let block_size = cipher.block_size();
        if iv.len() != block_size {
            return Err(Error::Arg);
        }
        let mut iv = iv.to_vec();
        cipher.forward(&mut iv);
        Ok(Cfb {
            cipher,
            iv,
            remaining: block_size,
        })
    }

    pub fn encrypt(&mut self, input: &[u8]) -> Vec<u8> {
        self.apply(input, true)
    }

    pub fn decrypt(&mut self, input: &[u8]) -> Vec<u8> {
        self.apply(input, false)
    }

    fn apply(&mut self, input: &[u8], encrypting: bool) -> Vec<u8> {
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
            // The feedback slot becomes the ciphertext byte, whichever
            // direction produced it.
            let feedback = if encrypting {
                &out[pos..pos + process]
            } else {
                &input[pos..pos + process]
            };
            self.iv[offset..offset + process].copy_from_slice(feedback);
            self.remaining -= process;
            pos += process;
        }
        out
    }
}
