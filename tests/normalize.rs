//! Integration tests for text normalization with the `std` feature:
//! io error classification and the encoding fallback ladder.

use std::io;

use reraise::{Error, IntoError, SpecialKind, prelude::*};

#[test]
fn io_errors_classify_as_os_failures() {
    let error = io::Error::other("message").into_error();
    assert!(error.is(SpecialKind::Os));
    assert_eq!(normalize(&error), "message");
}

#[test]
fn raw_os_errors_render_with_their_code() {
    let error = io::Error::from_raw_os_error(2).into_error();
    assert!(error.is(SpecialKind::FileNotFound));
    assert!(error.is(SpecialKind::Os));

    let text = normalize(&error);
    assert!(text.starts_with("[Errno 2] "), "got {text:?}");
    assert!(!text.contains("(os error"), "got {text:?}");
}

#[test]
fn not_found_refines_to_file_not_found() {
    let error = io::Error::new(io::ErrorKind::NotFound, "missing.toml").into_error();
    assert!(error.is(SpecialKind::FileNotFound));

    let error = reraise(error, "While loading the config");
    assert!(error.is(SpecialKind::FileNotFound));
    assert_eq!(
        normalize(&error),
        "\nWhile loading the config\nmissing.toml"
    );
}

#[test]
fn permission_denied_stays_a_plain_os_failure() {
    let error = io::Error::new(io::ErrorKind::PermissionDenied, "locked").into_error();
    assert!(error.is(SpecialKind::Os));
    assert!(!error.is(SpecialKind::FileNotFound));
}

#[test]
fn decode_failures_normalize_to_their_message() {
    // A non-ASCII byte sequence cut in the middle of a code point.
    let error = std::str::from_utf8(b"\xc2").unwrap_err().into_error();
    assert!(error.is(SpecialKind::Decode));

    let text = normalize(&error);
    assert!(!text.is_empty());

    let error = reraise(error, "While reading the manifest");
    let reraised = normalize(&error);
    assert!(reraised.starts_with("\nWhile reading the manifest\n"));
    assert!(reraised.ends_with(&text));
}

#[test]
fn decode_constructor_renders_the_native_shape() {
    let error = Error::decode("ascii", vec![0xc2, 0xa3], 0, 1, "ordinal not in range(128)");
    assert_eq!(
        normalize(&error),
        "'ascii' codec can't decode byte 0xc2 in position 0: ordinal not in range(128)"
    );
}

#[test]
fn encode_constructor_renders_the_native_shape() {
    let error = Error::encode("ascii", "£", 0, 1, "ordinal not in range(128)");
    assert_eq!(
        normalize(&error),
        "'ascii' codec can't encode character '£' in position 0: ordinal not in range(128)"
    );
}

#[test]
fn byte_payloads_with_broken_encodings_never_fail() {
    let error = Error::os_with_message(2, "£ message");
    assert_eq!(normalize(&error), "[Errno 2] £ message");

    // The same payload as raw bytes, malformed under UTF-8.
    let args = [
        reraise::Arg::Code(2),
        reraise::Arg::Bytes(vec![0xa3, b' ', b'm']),
    ]
    .into_iter()
    .collect();
    let error = Error::new(
        reraise::Kind::Special(SpecialKind::Os),
        args,
    );
    let text = normalize(&error);
    assert!(text.starts_with("[Errno 2] "), "got {text:?}");

    let error = reraise(error, "While copying");
    assert!(normalize(&error).starts_with("\nWhile copying\n[Errno 2] "));
}

#[test]
fn non_ascii_text_passes_through_untouched() {
    let error = reraise(Error::msg("исключение"), "While doing 'bar'");
    assert_eq!(normalize(&error), "\nWhile doing 'bar'\nисключение");
}
