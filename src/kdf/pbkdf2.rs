//! PBKDF2 (RFC 8018 §5.2): derives a key of any length from a password and
//! salt by iterating [`Hmac`].

use crate::{hash::Hash, mac::Hmac, util::xor_buffer, Error};

/// Derive `output_len` bytes of key material from `password` and `salt`,
/// iterating the HMAC-based PRF `iterations` times per output block.
///
/// The one-shot [`Hmac`] keyed with `password` is computed once per output
/// block and cloned for every iteration rather than rebuilt from scratch,
/// since its key-dependent inner state never changes across iterations.
pub fn pbkdf2<H: Hash>(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    output_len: usize,
) -> Result<Vec<u8>, Error> {
    if iterations == 0 || output_len == 0 {
        return Err(Error::Arg);
    }

    let digest_len = H::new().digest_size();
    // RFC 8018 §5.2 step 1: the output length must not exceed (2^32 - 1) * hLen,
    // since each output block is tagged with a 32-bit big-endian block index.
    if output_len as u64 > 0xFFFFFFFEu64 * digest_len as u64 {
        return Err(Error::Arg);
    }

    let block_count = output_len.div_ceil(digest_len);
    let mut output = Vec::with_capacity(block_count * digest_len);

    for block_index in 1..=block_count as u32 {
        let mut first = Hmac::<H>::new(password);
        first.update(salt);
        first.update(&block_index.to_be_bytes());
        let mut feedback = first.finish();
        let mut accumulated = feedback.clone();

        let prototype = Hmac::<H>::new(password);
        for _ in 1..iterations {
            let mut round = prototype.clone();
            round.update(&feedback);
            feedback = round.finish();
            xor_buffer(&mut accumulated, &feedback);
        }

        output.extend_from_slice(&accumulated);
    }

    output.truncate(output_len);
    Ok(output)
}
