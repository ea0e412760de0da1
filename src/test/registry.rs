use crate::{
    block::BlockCipher,
    hash::Hash,
    registry::{
        block_cipher_by_id, block_cipher_by_name, hash_by_id, hash_by_name,
        stream_cipher_by_id, stream_cipher_by_name,
    },
    Error,
};

#[test]
fn block_cipher_lookup_by_id_and_name_agree() {
    let by_id = block_cipher_by_id(2, &[0u8; 16]).unwrap();
    let by_name = block_cipher_by_name("AES", &[0u8; 16]).unwrap();
    let mut a = [0x11u8; 16];
    let mut b = a;
    by_id.forward(&mut a);
    by_name.forward(&mut b);
    assert_eq!(a, b);
}

#[test]
fn unknown_block_cipher_name_is_an_error() {
    assert_eq!(
        block_cipher_by_name("NotACipher", &[0u8; 16]).unwrap_err(),
        Error::Arg
    );
}

#[test]
fn block_cipher_id_out_of_range_is_an_error() {
    assert_eq!(block_cipher_by_id(99, &[0u8; 16]).unwrap_err(), Error::Arg);
}

#[test]
fn hash_lookup_by_id_and_name_agree() {
    let mut by_id = hash_by_id(1).unwrap();
    let mut by_name = hash_by_name("MD5").unwrap();
    by_id.update(b"hello");
    by_name.update(b"hello");
    assert_eq!(by_id.finish(), by_name.finish());
}

#[test]
fn stream_cipher_lookup_by_id_and_name_agree() {
    use crate::stream::StreamCipher;
    let mut by_id = stream_cipher_by_id(0, b"some key").unwrap();
    let mut by_name = stream_cipher_by_name("RC4", b"some key").unwrap();
    let mut a = *b"hello, world!!!!";
    let mut b = a;
    by_id.apply(&mut a);
    by_name.apply(&mut b);
    assert_eq!(a, b);
}
