//! Primitive lookup by name or stable numeric id.
//!
//! Mirrors `primitives.c`'s `load_primitives` table: a small, fixed,
//! process-wide list of the primitives this crate implements, searchable by
//! name (prefix match, as the source does with `strncmp`) or by a stable
//! index. There is no runtime registration step; the list below is the
//! entire table, known at compile time.

use crate::{
    block::AnyBlockCipher,
    hash::AnyHash,
    stream::AnyStreamCipher,
    Error,
};

/// Canonical names of the block ciphers, in registry order.
pub const BLOCK_CIPHER_NAMES: [&str; 3] = ["NullCipher", "Threefish-256", "AES"];

/// Canonical names of the stream ciphers, in registry order.
pub const STREAM_CIPHER_NAMES: [&str; 1] = ["RC4"];

/// Canonical names of the hash functions, in registry order.
pub const HASH_NAMES: [&str; 3] = ["SHA-256", "MD5", "Skein-256"];

/// Construct a block cipher by stable id (its index into [`BLOCK_CIPHER_NAMES`]).
pub fn block_cipher_by_id(id: usize, key: &[u8]) -> Result<AnyBlockCipher, Error> {
    let name = BLOCK_CIPHER_NAMES.get(id).ok_or(Error::Arg)?;
    AnyBlockCipher::by_name(name, key)
}

/// Construct a block cipher by name, matched as a prefix of a canonical name.
pub fn block_cipher_by_name(name: &str, key: &[u8]) -> Result<AnyBlockCipher, Error> {
    AnyBlockCipher::by_name(name, key)
}

/// Construct a stream cipher by stable id (its index into [`STREAM_CIPHER_NAMES`]).
pub fn stream_cipher_by_id(id: usize, key: &[u8]) -> Result<AnyStreamCipher, Error> {
    let name = STREAM_CIPHER_NAMES.get(id).ok_or(Error::Arg)?;
    AnyStreamCipher::by_name(name, key)
}

/// Construct a stream cipher by name, matched as a prefix of a canonical name.
pub fn stream_cipher_by_name(name: &str, key: &[u8]) -> Result<AnyStreamCipher, Error> {
    AnyStreamCipher::by_name(name, key)
}

/// Construct a hash function by stable id (its index into [`HASH_NAMES`]).
pub fn hash_by_id(id: usize) -> Result<AnyHash, Error> {
    let name = HASH_NAMES.get(id).ok_or(Error::Arg)?;
    AnyHash::by_name(name)
}

/// Construct a hash function by name, matched as a prefix of a canonical name.
pub fn hash_by_name(name: &str) -> Result<AnyHash, Error> {
    AnyHash::by_name(name)
}
