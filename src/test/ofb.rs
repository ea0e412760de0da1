use crate::{
    block::{modes::Ofb, BlockCipher, Threefish256},
    Error,
};

#[test]
fn roundtrip_across_many_block_boundaries() {
    let key: Vec<u8> = (0..32).collect();
    let iv = [0u8; 32];
    let msg: Vec<u8> = (0..200u32).map(|i| i as u8).collect();

    let cipher = Threefish256::new(&key).unwrap();
    let mut enc = Ofb::new(cipher.clone(), &iv).unwrap();
    let ct = enc.apply(&msg);
    assert_ne!(ct, msg);

    let mut dec = Ofb::new(cipher, &iv).unwrap();
    let pt = dec.apply(&ct);
    assert_eq!(pt, msg);
}

#[test]
fn rejects_oversized_iv() {
    let cipher = Threefish256::new(&[0u8; 32]).unwrap();
    assert_eq!(Ofb::new(cipher, &[0u8; 40]).unwrap_err(), Error::Arg);
}
