use crate::{
    block::{Padding, Pkcs7},
    Error,
};

#[test]
fn pads_and_unpads() {
    let mut block = [0u8; 16];
    block[..11].copy_from_slice(b"hello world");
    Pkcs7::pad(&mut block, 11);
    assert_eq!(&block[11..], &[5, 5, 5, 5, 5]);
    assert_eq!(Pkcs7::unpad(&block).unwrap(), 5);
}

#[test]
fn full_block_of_padding() {
    let mut block = [0xffu8; 8];
    Pkcs7::pad(&mut block, 0);
    assert_eq!(block, [8u8; 8]);
    assert_eq!(Pkcs7::unpad(&block).unwrap(), 8);
}

#[test]
fn rejects_bad_padding() {
    let block = [1, 2, 3, 4, 5, 6, 7, 0];
    assert_eq!(Pkcs7::unpad(&block).unwrap_err(), Error::Padding);
}

#[test]
fn rejects_inconsistent_padding() {
    let block = [1, 2, 3, 4, 5, 3, 3, 2];
    assert_eq!(Pkcs7::unpad(&block).unwrap_err(), Error::Padding);
}
