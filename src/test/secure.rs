use crate::secure::{secure_erase, Secured};

#[test]
fn secure_erase_zeroes_buffer() {
    let mut buf = [1u8, 2, 3, 4];
    secure_erase(&mut buf);
    assert_eq!(buf, [0, 0, 0, 0]);
}

#[test]
fn secured_zeroizes_on_drop() {
    // There's no direct way to observe memory after drop from safe code;
    // this only checks that wrapping and unwrapping round-trips the value
    // while alive.
    let secured = Secured::new([1u8, 2, 3, 4]);
    assert_eq!(*secured, [1, 2, 3, 4]);
    assert_eq!(secured.into_inner(), [1, 2, 3, 4]);
}
