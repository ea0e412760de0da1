//! HMAC (RFC 2104): a hash-based message authentication code built from any
//! [`Hash`].

use crate::{hash::Hash, util::xor_buffer};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Streaming HMAC over a generic hash `H`.
///
/// Holds the outer-padded key and the inner hash state; [`finish`](Hmac::finish)
/// reduces to one more hash over the outer key and the inner digest, per
/// RFC 2104.
#[derive(Clone)]
pub struct Hmac<H: Hash> {
    outer_key: Vec<u8>,
    inner: H,
}

impl<H: Hash> Hmac<H> {
    pub fn new(key: &[u8]) -> Self {
        let block_size = H::new().block_size();
        let mut padded_key = vec![0u8; block_size];
        if key.len() > block_size {
            let mut reducer = H::new();
            reducer.update(key);
            let reduced = reducer.finish();
            padded_key[..reduced.len()].copy_from_slice(&reduced);
        } else {
            padded_key[..key.len()].copy_from_slice(key);
        }

        let mut inner_key = padded_key.clone();
        xor_buffer(&mut inner_key, &vec![IPAD; block_size]);

        let mut inner = H::new();
        inner.update(&inner_key);

        let mut outer_key = padded_key;
        xor_buffer(&mut outer_key, &vec![OPAD; block_size]);

        Hmac { outer_key, inner }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    pub fn finish(self) -> Vec<u8> {
        let inner_digest = self.inner.finish();
        let mut outer = H::new();
        outer.update(&self.outer_key);
        outer.update(&inner_digest);
        outer.finish()
    }
}

/// One-shot HMAC over a complete message.
pub fn hmac<H: Hash>(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut mac = Hmac::<H>::new(key);
    mac.update(message);
    mac.finish()
}
