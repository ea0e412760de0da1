use crate::hash::{Hash, Sha256};

fn sha256_hex(input: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(input);
    h.finish().iter().map(|b| format!("{b:02x}")).collect()
}

#[test]
fn empty_message() {
    assert_eq!(
        sha256_hex(b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b85"
    );
}

#[test]
fn fips_180_4_abc() {
    assert_eq!(
        sha256_hex(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn piecewise_matches_one_shot() {
    let msg = b"the quick brown fox jumps over the lazy dog, many times over and over";
    let mut one_shot = Sha256::new();
    one_shot.update(msg);
    let whole = one_shot.finish();

    let mut piecewise = Sha256::new();
    for chunk in msg.chunks(9) {
        piecewise.update(chunk);
    }
    assert_eq!(piecewise.finish(), whole);
}
