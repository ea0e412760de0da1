//! Secret material (keys, subkeys, HMAC masks, intermediate digests) is kept
//! in [`Secured`], a small wrapper that overwrites its contents with zero
//! when dropped.
//!
//! This mirrors `secure_erase` from the original library: a byte-by-byte
//! write loop the compiler cannot prove is dead, rather than a plain
//! `drop`. Page locking (`mlock`/`VirtualLock`) is not attempted here; it is
//! OS-specific and orthogonal to the zeroize guarantee this type provides.

use std::ops::{Deref, DerefMut};

/// A zeroize-on-drop wrapper around secret byte material.
#[derive(Clone)]
pub struct Secured<T: AsMut<[u8]> + Default>(T);

impl<T: AsMut<[u8]> + Default> Secured<T> {
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    pub fn into_inner(mut self) -> T {
        // Swap the secret out for a harmless default; `self`'s `Drop` impl
        // then erases that default value instead of the bytes we're handing
        // back to the caller.
        std::mem::take(&mut self.0)
    }
}

impl<T: AsMut<[u8]> + Default> Deref for Secured<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: AsMut<[u8]> + Default> DerefMut for Secured<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: AsMut<[u8]> + Default> Drop for Secured<T> {
    fn drop(&mut self) {
        secure_erase(self.0.as_mut());
    }
}

/// Overwrites `buf` with zero in a manner the compiler should not elide, even
/// if `buf` is never read again afterwards.
pub fn secure_erase(buf: &mut [u8]) {
    for byte in buf.iter_mut() {
        unsafe { std::ptr::write_volatile(byte, 0) };
    }
    std::sync::atomic::compiler_fence(std::sync::atomic::Ordering::SeqCst);
}
