use crate::{
    block::{modes::Ctr, BlockCipher, Threefish256},
    Error,
};

#[test]
fn roundtrip_across_many_block_boundaries() {
    let key: Vec<u8> = (0..32).collect();
    let iv = [0u8; 32];
    let msg: Vec<u8> = (0..200u32).map(|i| i as u8).collect();

    let cipher = Threefish256::new(&key).unwrap();
    let mut enc = Ctr::new(cipher.clone(), &iv).unwrap();
    let ct = enc.apply(&msg);
    assert_ne!(ct, msg);

    let mut dec = Ctr::new(cipher, &iv).unwrap();
    let pt = dec.apply(&ct);
    assert_eq!(pt, msg);
}

#[test]
fn piecewise_matches_one_shot() {
    let key = [0u8; 32];
    let iv = [0u8; 32];
    let msg: Vec<u8> = (0..70u32).map(|i| i as u8).collect();
    let cipher = Threefish256::new(&key).unwrap();

    let mut one_shot = Ctr::new(cipher.clone(), &iv).unwrap();
    let whole = one_shot.apply(&msg);

    let mut piecewise = Ctr::new(cipher, &iv).unwrap();
    let mut split = piecewise.apply(&msg[..10]);
    split.extend(piecewise.apply(&msg[10..]));
    assert_eq!(split, whole);
}

#[test]
fn rejects_short_iv() {
    let cipher = Threefish256::new(&[0u8; 32]).unwrap();
    assert_eq!(Ctr::new(cipher, &[0u8; 16]).unwrap_err(), Error::Arg);
}
