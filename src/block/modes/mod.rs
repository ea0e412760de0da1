//! Block cipher modes of operation: turn a fixed-size [`BlockCipher`] into a
//! cipher over arbitrary-length data, each with its own buffering, IV
//! handling, and (where applicable) padding.
//!
//! Every mode here owns its buffering as `self` rather than a `void*`
//! context handed back to free functions: `update` takes `&mut self` and
//! returns the bytes it could produce so far, and `finish` consumes `self`
//! by value, since a mode cannot be usefully updated again after its final
//! block has been emitted.

mod cbc;
mod cfb;
mod ctr;
mod ecb;
mod ofb;

pub use {cbc::Cbc, cfb::Cfb, ctr::Ctr, ecb::Ecb, ofb::Ofb};

/// Whether a mode instance is set up to encrypt or decrypt. Mirrors the
/// source's `dir` flag passed to every mode's `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}
