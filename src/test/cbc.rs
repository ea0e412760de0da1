use crate::{
    block::{
        modes::{Cbc, Direction},
        BlockCipher, Threefish256,
    },
    Error,
};

fn roundtrip(padding: bool, msg: &[u8]) {
    let key: Vec<u8> = (0..32).collect();
    let iv: Vec<u8> = (0..32).map(|i: u8| i.wrapping_mul(3)).collect();
    let cipher = Threefish256::new(&key).unwrap();

    let mut enc = Cbc::new(cipher.clone(), &iv, Direction::Encrypt, padding).unwrap();
    let mut ct = enc.update(msg);
    ct.extend(enc.finish().unwrap());

    let mut dec = Cbc::new(cipher, &iv, Direction::Decrypt, padding).unwrap();
    let mut pt = dec.update(&ct);
    pt.extend(dec.finish().unwrap());
    assert_eq!(pt, msg);
}

#[test]
fn padded_roundtrip_short() {
    roundtrip(true, b"the quick brown fox");
}

#[test]
fn padded_roundtrip_block_aligned() {
    roundtrip(true, &[0xaa; 64]);
}

#[test]
fn unpadded_roundtrip_block_aligned() {
    roundtrip(false, &[0x55; 64]);
}

#[test]
fn rejects_oversized_iv() {
    let key = [0u8; 32];
    let cipher = Threefish256::new(&key).unwrap();
    assert_eq!(
        Cbc::new(cipher, &[0u8; 40], Direction::Encrypt, true).unwrap_err(),
        Error::Arg
    );
}

// A short IV is zero-extended rather than rejected: encrypting under an
// explicitly zero-extended IV should produce identical ciphertext to
// encrypting under the short one.
#[test]
fn short_iv_is_zero_extended() {
    let key = [0u8; 32];
    let cipher = Threefish256::new(&key).unwrap();
    let msg = [0x42u8; 32];

    let mut short = Cbc::new(cipher.clone(), &[1, 2, 3], Direction::Encrypt, true).unwrap();
    let mut ct_short = short.update(&msg);
    ct_short.extend(short.finish().unwrap());

    let mut zero_extended = vec![0u8; 32];
    zero_extended[..3].copy_from_slice(&[1, 2, 3]);
    let mut long = Cbc::new(cipher, &zero_extended, Direction::Encrypt, true).unwrap();
    let mut ct_long = long.update(&msg);
    ct_long.extend(long.finish().unwrap());

    assert_eq!(ct_short, ct_long);
}
