use crate::{
    block::modes::Direction,
    facade::{digest, enc_block, enc_stream},
    hash::{Hash, Sha256},
    Error,
};

#[test]
fn enc_block_ecb_roundtrip() {
    let key = [0x2bu8; 16];
    let ct = enc_block(
        "AES",
        "ECB",
        Direction::Encrypt,
        &key,
        &[],
        true,
        b"attack at dawn",
    )
    .unwrap();
    let pt = enc_block("AES", "ECB", Direction::Decrypt, &key, &[], true, &ct).unwrap();
    assert_eq!(pt, b"attack at dawn");
}

#[test]
fn enc_block_ctr_roundtrip() {
    let key: Vec<u8> = (0..32).collect();
    let iv = [0u8; 32];
    let ct = enc_block(
        "Threefish-256",
        "CTR",
        Direction::Encrypt,
        &key,
        &iv,
        false,
        b"some data longer than one block, spanning several",
    )
    .unwrap();
    let pt = enc_block(
        "Threefish-256",
        "CTR",
        Direction::Decrypt,
        &key,
        &iv,
        false,
        &ct,
    )
    .unwrap();
    assert_eq!(pt, b"some data longer than one block, spanning several");
}

#[test]
fn enc_block_unknown_mode_is_an_error() {
    assert_eq!(
        enc_block("AES", "XYZ", Direction::Encrypt, &[0u8; 16], &[], true, b"").unwrap_err(),
        Error::Arg
    );
}

#[test]
fn digest_matches_direct_hash() {
    let mut h = Sha256::new();
    h.update(b"hello");
    let expected = h.finish();
    assert_eq!(digest("SHA-256", b"hello").unwrap(), expected);
}

#[test]
fn enc_stream_roundtrip() {
    let key = b"some key";
    let mut buf = *b"top secret message";
    enc_stream("RC4", key, &mut buf).unwrap();
    assert_ne!(&buf[..], b"top secret message");
    enc_stream("RC4", key, &mut buf).unwrap();
    assert_eq!(&buf[..], b"top secret message");
}
