//! Block ciphers: fixed-size permutations keyed by a secret, the leaf
//! primitives that [modes](modes) turn into ciphers over arbitrary-length
//! data.

pub mod aes;
pub mod modes;
mod null;
mod padding;
pub mod threefish256;

pub use {
    aes::Aes,
    null::NullCipher,
    padding::{Padding, Pkcs7},
    threefish256::Threefish256,
};

use crate::Error;

/// A block cipher encrypts and decrypts data one fixed-size block at a time.
///
/// This plays the role of the source's per-primitive vtable: `new` is
/// `alloc`+`init` combined (there is no benefit in the target language to
/// splitting allocation from initialization), `forward`/`inverse` are the
/// permutation, and `Clone` stands in for `copy`. There is no explicit
/// `free`; secret round-key material is dropped through [`Secured`](crate::secure::Secured)
/// wherever an implementation stores it.
pub trait BlockCipher: Sized + Clone {
    /// Size of one block, in bytes. Constant per concrete type.
    fn block_size(&self) -> usize;

    /// Initialize cipher state from a key. Returns [`Error::KeySize`] if
    /// `key.len()` is not supported by this cipher.
    fn new(key: &[u8]) -> Result<Self, Error>;

    /// Encrypt one block in place. Panics if `block.len() != self.block_size()`;
    /// callers within this crate always pass correctly sized blocks.
    fn forward(&self, block: &mut [u8]);

    /// Decrypt one block in place. Panics if `block.len() != self.block_size()`.
    fn inverse(&self, block: &mut [u8]);
}

/// Runtime-selected block cipher, dispatching to one of the three ciphers
/// this crate implements.
///
/// Per the design notes, leaf primitive state is modeled as a tagged enum
/// rather than a trait object: the set of block ciphers is small and closed,
/// and this lets [`registry`](crate::registry) look one up by name or id and
/// hand back an ordinary value that still implements [`BlockCipher`], so the
/// generic mode engines in [`modes`] work unchanged whether they are
/// monomorphized over a concrete cipher or over this enum.
#[derive(Debug, Clone)]
pub enum AnyBlockCipher {
    NullCipher(NullCipher),
    Threefish256(Threefish256),
    Aes(Aes),
}

impl AnyBlockCipher {
    /// Construct a cipher of the named kind. `name` is matched as a prefix
    /// against the canonical names (`"NullCipher"`, `"Threefish-256"`,
    /// `"AES"`), mirroring the source's `*_by_name` lookup.
    pub fn by_name(name: &str, key: &[u8]) -> Result<Self, Error> {
        if name.starts_with("NullCipher") {
            NullCipher::new(key).map(AnyBlockCipher::NullCipher)
        } else if name.starts_with("Threefish-256") {
            Threefish256::new(key).map(AnyBlockCipher::Threefish256)
        } else if name.starts_with("AES") {
            Aes::new(key).map(AnyBlockCipher::Aes)
        } else {
            Err(Error::Arg)
        }
    }
}

impl BlockCipher for AnyBlockCipher {
    fn block_size(&self) -> usize {
        match self {
            AnyBlockCipher::NullCipher(c) => c.block_size(),
            AnyBlockCipher::Threefish256(c) => c.block_size(),
            AnyBlockCipher::Aes(c) => c.block_size(),
        }
    }

    fn new(_key: &[u8]) -> Result<Self, Error> {
        // There is no canonical default member of this enum; callers select
        // a concrete variant via `by_name`/`by_id` (see `registry`) rather
        // than through the trait's generic constructor.
        Err(Error::Arg)
    }

    fn forward(&self, block: &mut [u8]) {
        match self {
            AnyBlockCipher::NullCipher(c) => c.forward(block),
            AnyBlockCipher::Threefish256(c) => c.forward(block),
            AnyBlockCipher::Aes(c) => c.forward(block),
        }
    }

    fn inverse(&self, block: &mut [u8]) {
        match self {
            AnyBlockCipher::NullCipher(c) => c.inverse(block),
            AnyBlockCipher::Threefish256(c) => c.inverse(block),
            AnyBlockCipher::Aes(c) => c.inverse(block),
        }
    }
}
