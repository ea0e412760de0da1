//! Stream ciphers: ciphers that generate a keystream and XOR it directly
//! with data, with no block structure of their own.

mod rc4;

pub use rc4::Rc4;

use crate::Error;

/// A stream cipher encrypts and decrypts data of any length by XORing it
/// with a keystream it generates internally. Encryption and decryption are
/// the same operation.
pub trait StreamCipher: Sized {
    /// Initialize cipher state from a key. Returns [`Error::KeySize`] if
    /// `key.len()` is not supported by this cipher.
    fn new(key: &[u8]) -> Result<Self, Error>;

    /// XOR `buffer` with the next `buffer.len()` keystream bytes, in place.
    /// Consecutive calls continue the keystream rather than restarting it.
    fn apply(&mut self, buffer: &mut [u8]);
}

/// Runtime-selected stream cipher. RC4 is the only stream cipher this crate
/// implements, so this only has one variant today, but callers that go
/// through [`registry`](crate::registry) get a stable type regardless of
/// how many are added later.
pub enum AnyStreamCipher {
    Rc4(Rc4),
}

impl AnyStreamCipher {
    pub fn by_name(name: &str, key: &[u8]) -> Result<Self, Error> {
        if name.starts_with("RC4") {
            Rc4::new(key).map(AnyStreamCipher::Rc4)
        } else {
            Err(Error::Arg)
        }
    }
}

impl StreamCipher for AnyStreamCipher {
    fn new(_key: &[u8]) -> Result<Self, Error> {
        Err(Error::Arg)
    }

    fn apply(&mut self, buffer: &mut [u8]) {
        match self {
            AnyStreamCipher::Rc4(c) => c.apply(buffer),
        }
    }
}
