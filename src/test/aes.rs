use crate::{
    block::{Aes, BlockCipher},
    Error,
};

fn round_trip(key_len: usize) {
    let key: Vec<u8> = (0..key_len as u8).collect();
    let cip = Aes::new(&key).unwrap();
    let mut block: Vec<u8> = (0..16u8).collect();
    let orig = block.clone();
    cip.forward(&mut block);
    assert_ne!(block, orig);
    cip.inverse(&mut block);
    assert_eq!(block, orig);
}

#[test]
fn round_trip_128() {
    round_trip(16);
}

#[test]
fn round_trip_192() {
    round_trip(24);
}

#[test]
fn round_trip_256() {
    round_trip(32);
}

#[test]
fn rejects_bad_key_size() {
    assert_eq!(Aes::new(&[0u8; 20]).unwrap_err(), Error::KeySize { got: 20 });
}

// FIPS-197 Appendix B test vector: 128-bit key.
#[test]
fn fips197_appendix_b() {
    let key = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    let mut block = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    let expected = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];
    let cip = Aes::new(&key).unwrap();
    cip.forward(&mut block);
    assert_eq!(block, expected);
    cip.inverse(&mut block);
    assert_eq!(
        block,
        [
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
            0xee, 0xff,
        ]
    );
}
