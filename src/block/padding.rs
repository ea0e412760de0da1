//! Padding schemes for block modes that need to extend the final block of a
//! message up to the cipher's block size.

use crate::Error;

/// A reversible way of filling the unused tail of a final, short block.
///
/// This plays the role of the source's `PADDING` vtable: `pad` fills the
/// `plaintext.len()..block_size` tail of a block in place, and `unpad` looks
/// at a full decrypted block and reports how many trailing bytes were
/// padding, or [`Error::Padding`] if it doesn't recognize the scheme.
pub trait Padding {
    /// Fill `block[plaintext_len..]` with padding bytes. `plaintext_len` is
    /// always strictly less than `block.len()`, since a full block needs no
    /// padding.
    fn pad(block: &mut [u8], plaintext_len: usize);

    /// Given a fully decrypted final block, return the number of padding
    /// bytes appended by [`pad`](Padding::pad), or [`Error::Padding`] if the
    /// block's tail isn't a valid padding for this scheme.
    fn unpad(block: &[u8]) -> Result<usize, Error>;
}

/// PKCS#7 padding (RFC 5652 §6.3): every padding byte is set to the padding
/// length, including a full extra block of padding when the plaintext is
/// already block-aligned. This is the only scheme [modes](super::modes)
/// implement, since it is the only one the source's `PADDING` instance uses.
pub struct Pkcs7;

impl Padding for Pkcs7 {
    fn pad(block: &mut [u8], plaintext_len: usize) {
        let pad_len = (block.len() - plaintext_len) as u8;
        block[plaintext_len..].iter_mut().for_each(|b| *b = pad_len);
    }

    fn unpad(block: &[u8]) -> Result<usize, Error> {
        let pad_len = *block.last().ok_or(Error::Padding)? as usize;
        if pad_len == 0 || pad_len > block.len() {
            return Err(Error::Padding);
        }
        let tail = &block[block.len() - pad_len..];
        if tail.iter().all(|&b| b as usize == pad_len) {
            Ok(pad_len)
        } else {
            Err(Error::Padding)
        }
    }
}
