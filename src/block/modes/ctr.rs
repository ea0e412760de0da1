use crate::{block::BlockCipher, util::inc_buffer, Error};

/// Counter mode: turns the cipher into a keystream generator by encrypting a
/// counter that increments once per block, then XORs the keystream with the
/// data. Encryption and decryption are the same operation.
pub struct Ctr<C: BlockCipher> {
    cipher: C,
    counter: Vec<u8>,
    keystream: Vec<u8>,
    remaining: usize,
}

impl<C: BlockCipher> Ctr<C> {
    /// `iv` (the initial counter value) must be exactly one block long.
    pub fn new(cipher: C, iv: &[u8]) -> Result<Self, Error> {
        let block_size = cipher.block_size();
        if iv.len() != block_size {
            return Err(Error::Arg);
        }
        let mut keystream = iv.to_vec();
        cipher.forward(&mut keystream);
        Ok(Ctr {
            cipher,
            counter: iv.to_vec(),
            keystream,
            remaining: block_size,
        })
    }

    /// XOR `input` with the keystream, advancing the counter as needed.
    /// Returns the same number of bytes as `input`; this mode never buffers.
    pub fn apply(&mut self, input: &[u8]) -> Vec<u8> {
        let block_size = self.keystream.len();
        let mut out = vec![0u8; input.len()];
        let mut pos = 0;
        while pos < input.len() {
            if self.remaining == 0 {
                inc_buffer(&mut self.counter);
                self.keystream.copy_from_slice(&self.counter);
                self.cipher.forward(&mut self.keystream);
                self.remaining = block_size;
            }
            let process = (input.len() - pos).min(self.remaining);
            let offset = block_size - self.remaining;
            for i in 0..process {
                out[pos + i] = input[pos + i] ^ self.keystream[offset + i];
            }
            self.remaining -= process;
            pos += process;
        }
        out
    }
}
