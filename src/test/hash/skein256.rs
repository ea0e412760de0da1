use crate::hash::{Hash, Skein256};

#[test]
fn default_digest_is_32_bytes() {
    let mut h = Skein256::new();
    h.update(b"hello world");
    assert_eq!(h.finish().len(), 32);
}

#[test]
fn empty_and_nonempty_differ() {
    let mut a = Skein256::new();
    a.update(b"");
    let mut b = Skein256::new();
    b.update(b"x");
    assert_ne!(a.finish(), b.finish());
}

#[test]
fn piecewise_matches_one_shot() {
    let msg = b"the quick brown fox jumps over the lazy dog, many times over and over again and again";
    let mut one_shot = Skein256::new();
    one_shot.update(msg);
    let whole = one_shot.finish();

    let mut piecewise = Skein256::new();
    for chunk in msg.chunks(11) {
        piecewise.update(chunk);
    }
    assert_eq!(piecewise.finish(), whole);
}

#[test]
fn variable_output_length() {
    let mut h = Skein256::with_output_len(64);
    h.update(b"hello world");
    assert_eq!(h.finish().len(), 64);
}

#[test]
fn block_aligned_message() {
    let mut one_shot = Skein256::new();
    one_shot.update(&[0x42u8; 32]);
    let whole = one_shot.finish();

    let mut piecewise = Skein256::new();
    piecewise.update(&[0x42u8; 16]);
    piecewise.update(&[0x42u8; 16]);
    assert_eq!(piecewise.finish(), whole);
}
