//! RC4, a byte-oriented stream cipher built around a continually shuffled
//! 256-entry permutation.

use crate::{stream::StreamCipher, Error};

/// Number of keystream bytes discarded right after key scheduling, by
/// default. The first bytes of RC4's keystream are known to be
/// statistically biased; dropping them is the standard mitigation
/// (RC4-drop[n]).
pub const DEFAULT_DROP: usize = 2048;

/// RC4 stream cipher state: the permutation of `0..256` and the two
/// indices into it.
#[derive(Clone)]
pub struct Rc4 {
    s: [u8; 256],
    i: u8,
    j: u8,
}

impl Rc4 {
    /// Initialize RC4 with an explicit number of keystream bytes to drop,
    /// as opposed to the [`DEFAULT_DROP`] [`StreamCipher::new`] assumes.
    pub fn with_drop(key: &[u8], drop: usize) -> Result<Self, Error> {
        if key.len() < 5 || key.len() > 256 {
            return Err(Error::KeySize { got: key.len() });
        }

        let mut s = [0u8; 256];
        for (t, slot) in s.iter_mut().enumerate() {
            *slot = t as u8;
        }

        let mut j = 0u8;
        for t in 0..256 {
            j = j.wrapping_add(s[t]).wrapping_add(key[t % key.len()]);
            s.swap(t, usize::from(j));
        }

        let mut rc4 = Rc4 { s, i: 0, j: 0 };
        let mut sink = [0u8; 1];
        for _ in 0..drop {
            rc4.apply(&mut sink);
        }
        Ok(rc4)
    }
}

impl StreamCipher for Rc4 {
    fn new(key: &[u8]) -> Result<Self, Error> {
        Self::with_drop(key, DEFAULT_DROP)
    }

    fn apply(&mut self, buffer: &mut [u8]) {
        for byte in buffer.iter_mut() {
            self.i = self.i.wrapping_add(1);
            self.j = self.j.wrapping_add(self.s[usize::from(self.i)]);
            self.s.swap(usize::from(self.i), usize::from(self.j));
            let k = self.s[usize::from(self.i)].wrapping_add(self.s[usize::from(self.j)]);
            *byte ^= self.s[usize::from(k)];
        }
    }
}
