//! Block ciphers, stream ciphers, hash functions, and the modes and
//! composite constructions built from them.
//!
//! Primitives are reached either directly by concrete type (`Aes`,
//! `Threefish256`, `Sha256`, ...), generically (`Hmac<H: Hash>`,
//! `pbkdf2::<H>`), or at runtime by name/id through [`registry`]. The
//! [`facade`] module wraps the common cases in one-shot functions for
//! callers that don't need streaming.

#[cfg(test)]
mod test;

mod key;
mod text;
mod util;

pub mod block;
pub mod error;
pub mod facade;
pub mod hash;
pub mod kdf;
pub mod mac;
pub mod registry;
pub mod secure;
pub mod stream;

pub use error::Error;
pub use key::Key;
pub use text::{Ciphertext, Plaintext};
