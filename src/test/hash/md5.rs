use crate::hash::{Hash, Md5};

fn md5_hex(input: &[u8]) -> String {
    let mut h = Md5::new();
    h.update(input);
    h.finish().iter().map(|b| format!("{b:02x}")).collect()
}

#[test]
fn empty_message() {
    assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
}

#[test]
fn rfc1321_vectors() {
    assert_eq!(md5_hex(b"a"), "0cc175b9c0f1b6a831c399e269772661");
    assert_eq!(md5_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(
        md5_hex(b"message digest"),
        "f96b697d7cb7938d525a2f31aaf161d0"
    );
    assert_eq!(
        md5_hex(b"abcdefghijklmnopqrstuvwxyz"),
        "c3fcd3d76192e4007dfb496cca67e13b"
    );
}

#[test]
fn piecewise_matches_one_shot() {
    let msg = b"the quick brown fox jumps over the lazy dog, many times over";
    let mut one_shot = Md5::new();
    one_shot.update(msg);
    let whole = one_shot.finish();

    let mut piecewise = Md5::new();
    for chunk in msg.chunks(7) {
        piecewise.update(chunk);
    }
    assert_eq!(piecewise.finish(), whole);
}
