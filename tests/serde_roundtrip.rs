//! Round-trip tests for the `serde` feature: the accumulated context, the
//! kind and the payload of a re-raised error must survive
//! serialize-then-reconstruct unchanged.

use reraise::{Error, prelude::*};

fn roundtrip(error: &Error) -> Error {
    let json = serde_json::to_string(error).expect("serializing an error cannot fail");
    serde_json::from_str(&json).expect("reconstructing an error cannot fail")
}

fn triple_reraise(error: Error) -> Error {
    let error = reraise(error, "While doing 'bar'");
    let error = reraise(error, "While doing x:");
    reraise(error, "While doing y:")
}

#[test]
fn reraised_errors_roundtrip_exactly() {
    let cases = [
        Error::msg("message"),
        Error::key_not_found("message"),
        Error::os_with_message(2, "£ message"),
        Error::syntax_at("invalid syntax", "<string>", 1),
        Error::decode("ascii", vec![0xc2, 0xa3], 0, 1, "ordinal not in range(128)"),
        Error::encode("ascii", "£", 0, 1, "ordinal not in range(128)"),
    ];

    for error in cases {
        let reraised = triple_reraise(error);
        let rebuilt = roundtrip(&reraised);

        assert_eq!(normalize(&rebuilt), normalize(&reraised));
        assert!(!normalize(&rebuilt).is_empty());
        assert_eq!(rebuilt.kind(), reraised.kind());
        assert_eq!(rebuilt.args(), reraised.args());
        assert_eq!(rebuilt.context(), reraised.context());
    }
}

#[test]
fn non_ascii_context_survives_the_roundtrip() {
    let error = reraise(Error::msg("исключение"), "While doing 'bar'");
    let rebuilt = roundtrip(&error);
    assert_eq!(normalize(&rebuilt), "\nWhile doing 'bar'\nисключение");
}

#[test]
fn fresh_errors_roundtrip_too() {
    let error = Error::file_not_found("missing.toml");
    let rebuilt = roundtrip(&error);
    assert_eq!(rebuilt.kind(), error.kind());
    assert_eq!(normalize(&rebuilt), "missing.toml");
    assert!(rebuilt.context().is_none());
}

#[test]
fn the_origin_trail_survives_the_roundtrip() {
    let error = triple_reraise(Error::msg("boom"));
    let rebuilt = roundtrip(&error);
    assert_eq!(
        rebuilt.origin().raised_at().file(),
        error.origin().raised_at().file()
    );
    assert_eq!(rebuilt.origin().reraised_at().len(), 3);
}
