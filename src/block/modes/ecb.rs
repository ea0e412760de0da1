use crate::{
    block::{modes::Direction, BlockCipher, Padding, Pkcs7},
    Error,
};

/// Electronic Codebook: each block is encrypted independently, with no
/// chaining between blocks. Optionally pads the final short block with
/// [`Pkcs7`].
///
/// This is the weakest of the modes here (identical plaintext blocks
/// produce identical ciphertext blocks) and exists mainly as a baseline and
/// for use with ciphers in contexts where that doesn't matter, e.g. as the
/// compression step of a hash function.
pub struct Ecb<C: BlockCipher> {
    cipher: C,
    block: Vec<u8>,
    available: usize,
    padding: bool,
    direction: Direction,
}

impl<C: BlockCipher> Ecb<C> {
    pub fn new(cipher: C, direction: Direction, padding: bool) -> Self {
        let block_size = cipher.block_size();
        Ecb {
            cipher,
            block: vec![0u8; block_size],
            available: 0,
            padding,
            direction,
        }
    }

    /// Feed more input through the mode, returning whatever full blocks it
    /// could produce. Input shorter than one block is buffered internally.
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
            self.cipher.forward(&mut self.block);
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
            self.cipher.inverse(&mut self.block);
            out.extend_from_slice(&self.block);
            input = &input[take..];
            self.available = 0;
        }
        self.block[self.available..self.available + input.len()].copy_from_slice(input);
        self.available += input.len();
        out
    }

    /// Consume the mode, emitting the final (possibly padded) block.
    /// [`Error::Leftover`] if padding is disabled and a partial block
    /// remains; [`Error::Padding`] on decrypt if the recovered padding is
    /// invalid.
    pub fn finish(mut self) -> Result<Vec<u8>, Error> {
        match self.direction {
            Direction::Encrypt => self.encrypt_finish(),
            Direction::Decrypt => self.decrypt_finish(),
        }
    }

    fn encrypt_finish(&mut self) -> Result<Vec<u8>, Error> {
        let block_size = self.block.len();
        if !self.padding {
            return if self.available == 0 {
                Ok(Vec::new())
            } else {
                Err(Error::Leftover)
            };
        }
        Pkcs7::pad(&mut self.block, self.available);
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
        let pad_len = Pkcs7::unpad(&self.block)?;
        Ok(self.block[..self.block.len() - pad_len].to_vec())
    }
}
