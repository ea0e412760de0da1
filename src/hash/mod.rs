//! Hash functions: compress an arbitrary-length message down to a
//! fixed-size digest.

pub mod md5;
pub mod sha256;
pub mod skein256;

pub use {md5::Md5, sha256::Sha256, skein256::Skein256};

use crate::Error;

/// A streaming hash function.
///
/// This plays the role of the source's `HASH_FUNCTION` vtable: `new` is
/// `alloc`+`init`, `update` can be called any number of times with
/// arbitrary-length chunks, and `finish` is `final`, consuming `self` since
/// a finished digest cannot be updated further.
pub trait Hash: Clone {
    /// Size, in bytes, of one compression block. [`mac::Hmac`](crate::mac::Hmac)
    /// uses this to decide whether a key needs reducing.
    fn block_size(&self) -> usize;

    /// Size, in bytes, of the digest this hash produces.
    fn digest_size(&self) -> usize;

    /// Initialize hash state with the default configuration.
    fn new() -> Self;

    /// Feed more message data into the hash.
    fn update(&mut self, data: &[u8]);

    /// Consume the hash state, producing the final digest.
    fn finish(self) -> Vec<u8>;
}

/// Runtime-selected hash function, dispatching to one of the three hashes
/// this crate implements.
///
/// Unlike [`AnyBlockCipher`](crate::block::AnyBlockCipher), this enum can
/// implement [`Hash`] itself: `block_size`/`digest_size` are now per-instance
/// methods rather than associated constants, so the generic composite layer
/// ([`Hmac`](crate::mac::Hmac), [`pbkdf2`](crate::kdf::pbkdf2)) works
/// identically whether monomorphized over a concrete hash or instantiated
/// over this runtime-selected one.
#[derive(Clone)]
pub enum AnyHash {
    Md5(Md5),
    Sha256(Sha256),
    Skein256(Skein256),
}

impl AnyHash {
    pub fn by_name(name: &str) -> Result<Self, Error> {
        if name.starts_with("MD5") {
            Ok(AnyHash::Md5(Md5::new()))
        } else if name.starts_with("SHA-256") {
            Ok(AnyHash::Sha256(Sha256::new()))
        } else if name.starts_with("Skein-256") {
            Ok(AnyHash::Skein256(Skein256::new()))
        } else {
            Err(Error::Arg)
        }
    }
}

impl Hash for AnyHash {
    fn block_size(&self) -> usize {
        match self {
            AnyHash::Md5(h) => h.block_size(),
            AnyHash::Sha256(h) => h.block_size(),
            AnyHash::Skein256(h) => h.block_size(),
        }
    }

    fn digest_size(&self) -> usize {
        match self {
            AnyHash::Md5(h) => h.digest_size(),
            AnyHash::Sha256(h) => h.digest_size(),
            AnyHash::Skein256(h) => h.digest_size(),
        }
    }

    fn new() -> Self {
        // There is no canonical default member; callers select a concrete
        // variant via `by_name`/`by_id` (see `registry`) rather than through
        // the trait's generic constructor.
        AnyHash::Sha256(Sha256::new())
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            AnyHash::Md5(h) => h.update(data),
            AnyHash::Sha256(h) => h.update(data),
            AnyHash::Skein256(h) => h.update(data),
        }
    }

    fn finish(self) -> Vec<u8> {
        match self {
            AnyHash::Md5(h) => h.finish(),
            AnyHash::Sha256(h) => h.finish(),
            AnyHash::Skein256(h) => h.finish(),
        }
    }
}
