use crate::{
    hash::Sha256,
    mac::{hmac, Hmac},
};

// RFC 4231 test case 1.
#[test]
fn rfc4231_case_1() {
    let key = [0x0bu8; 20];
    let data = b"Hi There";
    let mac = hmac::<Sha256>(&key, data);
    let hex: String = mac.iter().map(|b| format!("{b:02x}")).collect();
    assert_eq!(
        hex,
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
    );
}

#[test]
fn piecewise_matches_one_shot() {
    let key = b"some key longer than a block maybe, who knows, it varies in length";
    let msg = b"authenticate this message please";

    let whole = hmac::<Sha256>(key, msg);

    let mut piecewise = Hmac::<Sha256>::new(key);
    for chunk in msg.chunks(5) {
        piecewise.update(chunk);
    }
    assert_eq!(piecewise.finish(), whole);
}

#[test]
fn long_key_is_reduced() {
    let short_key = hmac::<Sha256>(b"k", b"msg");
    let long_key = hmac::<Sha256>(&[b'k'; 1000], b"msg");
    assert_ne!(short_key, long_key);
}
