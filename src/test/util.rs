use crate::util::{ct_eq, inc_buffer, pad_check, xor_buffer};

#[test]
fn xor_buffer_self_is_zero() {
    let mut buf = [1, 2, 3, 4];
    let src = buf;
    xor_buffer(&mut buf, &src);
    assert_eq!(buf, [0, 0, 0, 0]);
}

#[test]
fn inc_buffer_carries() {
    let mut buf = [0xff, 0x00];
    inc_buffer(&mut buf);
    assert_eq!(buf, [0x00, 0x01]);
}

#[test]
fn inc_buffer_wraps() {
    let mut buf = [0xff, 0xff];
    inc_buffer(&mut buf);
    assert_eq!(buf, [0x00, 0x00]);
}

#[test]
fn pad_check_detects_mismatch() {
    assert!(pad_check(&[4, 4, 4, 4], 4));
    assert!(!pad_check(&[4, 4, 4, 5], 4));
}

#[test]
fn ct_eq_compares_equal_and_unequal() {
    assert!(ct_eq(b"abc", b"abc"));
    assert!(!ct_eq(b"abc", b"abd"));
    assert!(!ct_eq(b"abc", b"ab"));
}
