//! One-shot entry points that allocate, run, and tear down a primitive or
//! mode in a single call, for callers who do not need streaming.
//!
//! Grounded on `enc_block.c`/`enc_stream.c`/`digest.c`: each allocates
//! a context, initializes it, streams the whole input through `update`,
//! finalizes, and frees — returning the first error encountered. Here that
//! whole lifecycle is just the struct's constructor plus `update`/`finish`
//! going out of scope at the end of the function.

use crate::{
    block::{
        modes::{Cbc, Cfb, Ctr, Direction, Ecb, Ofb},
        AnyBlockCipher,
    },
    hash::AnyHash,
    stream::AnyStreamCipher,
    Error,
};

/// Encrypt or decrypt `input` in one call, using the named block cipher
/// under the named mode of operation.
///
/// `mode` is matched as a prefix of `"ECB"`, `"CBC"`, `"CTR"`, `"CFB"`, or
/// `"OFB"`. `padding` only affects ECB and CBC; the streaming modes ignore
/// it, since they never produce a partial final block.
pub fn enc_block(
    cipher: &str,
    mode: &str,
    direction: Direction,
    key: &[u8],
    iv: &[u8],
    padding: bool,
    input: &[u8],
) -> Result<Vec<u8>, Error> {
    let cipher = AnyBlockCipher::by_name(cipher, key)?;

    if mode.starts_with("ECB") {
        let mut ctx = Ecb::new(cipher, direction, padding);
        let mut out = ctx.update(input);
        out.extend(ctx.finish()?);
        Ok(out)
    } else if mode.starts_with("CBC") {
        let mut ctx = Cbc::new(cipher, iv, direction, padding)?;
        let mut out = ctx.update(input);
        out.extend(ctx.finish()?);
        Ok(out)
    } else if mode.starts_with("CTR") {
        let mut ctx = Ctr::new(cipher, iv)?;
        Ok(ctx.apply(input))
    } else if mode.starts_with("CFB") {
        let mut ctx = Cfb::new(cipher, iv)?;
        Ok(match direction {
            Direction::Encrypt => ctx.encrypt(input),
            Direction::Decrypt => ctx.decrypt(input),
        })
    } else if mode.starts_with("OFB") {
        let mut ctx = Ofb::new(cipher, iv)?;
        Ok(ctx.apply(input))
    } else {
        Err(Error::Arg)
    }
}

/// Hash `input` in one call, using the named hash function.
pub fn digest(hash: &str, input: &[u8]) -> Result<Vec<u8>, Error> {
    let mut ctx = AnyHash::by_name(hash)?;
    crate::hash::Hash::update(&mut ctx, input);
    Ok(crate::hash::Hash::finish(ctx))
}

/// Encrypt `buffer` in place, in one call, using the named stream cipher.
/// Since stream ciphers are their own inverse, this is used for decryption
/// too.
pub fn enc_stream(cipher: &str, key: &[u8], buffer: &mut [u8]) -> Result<(), Error> {
    let mut ctx = AnyStreamCipher::by_name(cipher, key)?;
    crate::stream::StreamCipher::apply(&mut ctx, buffer);
    Ok(())
}
