use crate::{block::BlockCipher, Error};

/// The identity block cipher: `forward` and `inverse` leave the block
/// unchanged. Accepts any key length (the key is ignored). Exists so that
/// [modes](super::modes) can be exercised in isolation from any real
/// permutation.
#[derive(Debug, Clone, Default)]
pub struct NullCipher;

/// Block size, in bytes, of [`NullCipher`].
pub const BLOCK_SIZE: usize = 16;

impl BlockCipher for NullCipher {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn new(_key: &[u8]) -> Result<Self, Error> {
        Ok(NullCipher)
    }

    fn forward(&self, _block: &mut [u8]) {}

    fn inverse(&self, _block: &mut [u8]) {}
}
