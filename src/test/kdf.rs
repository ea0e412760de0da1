use crate::{hash::Sha256, kdf::pbkdf2, Error};

// RFC 7914 test vector for PBKDF2-HMAC-SHA-256, P="passwd", S="salt", c=1, dkLen=64.
#[test]
fn rfc7914_vector() {
    let out = pbkdf2::<Sha256>(b"passwd", b"salt", 1, 64).unwrap();
    let hex: String = out.iter().map(|b| format!("{b:02x}")).collect();
    assert_eq!(
        hex,
        "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc49ca9cccf179b645991664b39d77ef317c71b845b1e30bd509112041d3a19835"
    );
}

#[test]
fn rejects_zero_iterations() {
    assert_eq!(
        pbkdf2::<Sha256>(b"pw", b"salt", 0, 32).unwrap_err(),
        Error::Arg
    );
}

#[test]
fn rejects_zero_output_len() {
    assert_eq!(
        pbkdf2::<Sha256>(b"pw", b"salt", 1, 0).unwrap_err(),
        Error::Arg
    );
}

#[test]
fn rejects_output_len_over_the_rfc8018_bound() {
    // hLen for SHA-256 is 32, so the limit is (2^32 - 1) * 32.
    let too_long = 0xFFFFFFFEusize * 32 + 1;
    assert_eq!(
        pbkdf2::<Sha256>(b"pw", b"salt", 1, too_long).unwrap_err(),
        Error::Arg
    );
}

#[test]
fn truncates_to_requested_length() {
    let full = pbkdf2::<Sha256>(b"pw", b"salt", 4, 32).unwrap();
    let truncated = pbkdf2::<Sha256>(b"pw", b"salt", 4, 20).unwrap();
    assert_eq!(&truncated[..], &full[..20]);
}
