use crate::{
    block::{modes::Direction, BlockCipher, Padding, Pkcs7},
    util::xor_buffer,
    Error,
};

/// Cipher Block Chaining: each plaintext block is XORed with the previous
/// ciphertext block (or the IV, for the first block) before encryption.
/// Optionally pads the final short block with [`Pkcs7`].
pub struct Cbc<C: BlockCipher> {
    cipher: C,
    iv: Vec<u8>,
    block: Vec<u8>,
    available: usize,
    padding: bool,
    direction: Direction,
}

impl<C: BlockCipher> Cbc<C> {
    /// `iv` may be shorter than the cipher's block size, in which case it is
    /// zero-extended; longer than the block size is [`Error::Arg`].
    pub fn new(cipher: C, iv: &[u8], direction: Direction, padding: bool) -> Result<Self, Error> {
        let block_size = cipher.block_size();
        if iv.len() > block_size {
            return Err(Error::Arg);
        }
        let mut iv_buf = vec![0u8; block_size];
        iv_buf[..iv.len()].copy_from_slice(iv);
        Ok(Cbc {
            cipher,
            iv: iv_buf,
            block: vec![0u8; block_size],
            available: 0,
            padding,
            direction,
        })
    }

    pub fn update(&mut self, input: &[u8]) -> Vec<u8> {
        match self.direction {
            Direction::Encrypt => self.encrypt_update(input),
            Direction::Decrypt => self.decrypt_update(input),
        }
    }

    fn encrypt_update(&mut self, mut input: &[u8]) -> Vec<u8> {
        let block_size = self.block.len();
        let mut out = Vec::new();
        while self.available + input.len() >= block_size {
            let take = block_size - self.available;
            self.block[self.available..].copy_from_slice(&input[..take]);
            xor_buffer(&mut self.block, &self.iv);
            self.cipher.forward(&mut self.block);
            self.iv.copy_from_slice(&self.block);
            out.extend_from_slice(&self.block);
            input = &input[take..];
            self.available = 0;
        }
        self.block[self.available..self.available + input.len()].copy_from_slice(input);
        self.available += input.len();
        out
    }

    fn decrypt_update(&mut self, mut input: &[u8]) -> Vec<u8> {
        let block_size = self.block.len();
        let threshold = if self.padding { block_size } else { 0 };
        let mut out = Vec::new();
        while self.available + input.len() > threshold {
            let take = block_size - self.available;
            self.block[self.available..].copy_from_slice(&input[..take]);
            let ciphertext = self.block.clone();
            self.cipher.inverse(&mut self.block);
            xor_buffer(&mut self.block, &self.iv);
            self.iv.copy_from_slice(&ciphertext);
            out.extend_from_slice(&self.block);
            input = &input[take..];
            self.available = 0;
        }
        self.block[self.available..self.available + input.len()].copy_from_slice(input);
        self.available += input.len();
        out
    }

    pub fn finish(mut self) -> Result<Vec<u8>, Error> {
        match self.direction {
            Direction::Encrypt => self.encrypt_finish(),
            Direction::Decrypt => self.decrypt_finish(),
        }
    }

    fn encrypt_finish(&mut self) -> Result<Vec<u8>, Error> {
        if !self.padding {
            return if self.available == 0 {
                Ok(Vec::new())
            } else {
                Err(Error::Leftover)
            };
        }
        Pkcs7::pad(&mut self.block, self.available);
        xor_buffer(&mut self.block, &self.iv);
        self.cipher.forward(&mut self.block);
        Ok(self.block.clone())
    }

    fn decrypt_finish(&mut self) -> Result<Vec<u8>, Error> {
        if !self.padding {
            return if self.available == 0 {
                Ok(Vec::new())
            } else {
                Err(Error::Leftover)
            };
        }
        self.cipher.inverse(&mut self.block);
        xor_buffer(&mut self.block, &self.iv);
        let pad_len = Pkcs7::unpad(&self.block)?;
        Ok(self.block[..self.block.len() - pad_len].to_vec())
    }
}
