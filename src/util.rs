//! Small byte-level helpers shared by the primitives, modes, and composite
//! constructions.

/// XORs `src` into `dst` byte by byte. `dst` and `src` may alias; XORing a
/// buffer with itself yields all zeroes, which is a legal (if useless)
/// outcome.
pub fn xor_buffer(dst: &mut [u8], src: &[u8]) {
    dst.iter_mut().zip(src).for_each(|(d, s)| *d ^= s);
}

/// Increments `buf`, treated as a little-endian arbitrary-precision integer,
/// by one. Carry propagates left to right through memory order (i.e. from
/// the least-significant byte towards the most-significant one) and wraps
/// silently on overflow of the whole buffer.
pub fn inc_buffer(buf: &mut [u8]) {
    for byte in buf.iter_mut() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            return;
        }
    }
}

/// Checks whether the last `padding` bytes of `buf` all equal `padding`
/// (the PKCS#7 validity check).
pub fn pad_check(buf: &[u8], padding: u8) -> bool {
    buf.iter().all(|&b| b == padding)
}

/// Constant-time equality check for two equal-length byte slices, used to
/// compare digests and MAC tags without leaking timing information about the
/// position of the first mismatch.
///
/// Returns `false` immediately if the lengths differ; the length of a digest
/// is not secret.
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b) {
        diff |= x ^ y;
    }
    diff == 0
}
