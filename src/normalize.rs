//! Conversion of an [`Error`] into display text. Never fails.
//!
//! Most kinds render by joining their payload; the special kinds render
//! with the native format their originals are known by. Byte payloads are
//! decoded through a fallback ladder whose last rung cannot fail.

use alloc::{
    borrow::Cow,
    format,
    string::{String, ToString},
    vec::Vec,
};

use crate::{
    args::{Arg, Args},
    error::Error,
    kind::{Kind, SpecialKind},
};

/// Converts an error into display text.
///
/// The result is the display-override set by a previous
/// [`reraise`](crate::reraise()) when present (it is already decoded text),
/// otherwise the native format of the error's kind and payload. This
/// function always returns a printable value; undecodable bytes fall back
/// to a lossy decode with the replacement character.
///
/// # Examples
///
/// ```
/// use reraise::{normalize, Error};
///
/// let error = Error::key_not_found("port");
/// assert_eq!(normalize(&error), "'port'");
/// ```
#[must_use]
pub fn normalize(error: &Error) -> String {
    if let Some(message) = error.message() {
        return String::from(message);
    }
    native_text(error.kind(), error.args())
}

/// Renders the native display form of a kind and payload.
pub(crate) fn native_text(kind: &Kind, args: &Args) -> String {
    match kind {
        Kind::Special(SpecialKind::KeyNotFound) => match args.as_slice() {
            [key] => format!("'{}'", decode_arg(key)),
            other => join(other),
        },
        Kind::Special(SpecialKind::Os | SpecialKind::FileNotFound) => match args.as_slice() {
            [] => String::new(),
            [Arg::Code(code)] => code.to_string(),
            [Arg::Code(code), message] => format!("[Errno {code}] {}", decode_arg(message)),
            other => join(other),
        },
        Kind::Special(SpecialKind::Syntax) => match args.as_slice() {
            [Arg::Text(message), Arg::Text(file), Arg::Code(line)] => {
                format!("{message} ({file}, line {line})")
            }
            [message] => decode_arg(message),
            other => join(other),
        },
        Kind::Special(SpecialKind::Decode) => match args.as_slice() {
            [Arg::Text(encoding), Arg::Bytes(object), Arg::Code(start), Arg::Code(_), Arg::Text(reason)] => {
                match usize::try_from(*start).ok().and_then(|i| object.get(i)) {
                    Some(byte) => format!(
                        "'{encoding}' codec can't decode byte {byte:#04x} in position {start}: {reason}"
                    ),
                    None => format!("'{encoding}' codec can't decode position {start}: {reason}"),
                }
            }
            [message] => decode_arg(message),
            other => join(other),
        },
        Kind::Special(SpecialKind::Encode) => match args.as_slice() {
            [Arg::Text(encoding), Arg::Text(object), Arg::Code(start), Arg::Code(_), Arg::Text(reason)] => {
                match usize::try_from(*start)
                    .ok()
                    .and_then(|i| object.chars().nth(i))
                {
                    Some(character) => format!(
                        "'{encoding}' codec can't encode character '{character}' in position {start}: {reason}"
                    ),
                    None => format!("'{encoding}' codec can't encode position {start}: {reason}"),
                }
            }
            [message] => decode_arg(message),
            other => join(other),
        },
        Kind::Other(_) => join(args.as_slice()),
    }
}

fn join(args: &[Arg]) -> String {
    match args {
        [] => String::new(),
        [arg] => decode_arg(arg),
        args => {
            let parts: Vec<String> = args.iter().map(decode_arg).collect();
            parts.join(", ")
        }
    }
}

fn decode_arg(arg: &Arg) -> String {
    match arg {
        Arg::Text(text) => text.clone(),
        Arg::Bytes(bytes) => decode_bytes(bytes).into_owned(),
        Arg::Code(code) => code.to_string(),
    }
}

/// Decodes bytes of unknown provenance into text.
///
/// The ladder: strict UTF-8 first; then, with the `std` feature, a strict
/// decode with the locale-preferred encoding; finally a lossy decode that
/// substitutes the replacement character for undecodable bytes and cannot
/// fail.
pub(crate) fn decode_bytes(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = core::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    #[cfg(feature = "std")]
    if let Some(text) = crate::locale::decode(bytes) {
        return Cow::Owned(text);
    }

    String::from_utf8_lossy(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8_decodes_borrowed() {
        assert_eq!(decode_bytes("£ message".as_bytes()), "£ message");
    }

    #[test]
    fn undecodable_bytes_never_fail() {
        // 0x81 is malformed in UTF-8 and unmapped in the common
        // single-byte encodings, so every rung past the first can only
        // produce replacement characters or locale text, never a panic.
        let text = decode_bytes(b"\x81");
        assert!(!text.is_empty());
    }

    #[cfg(not(feature = "std"))]
    #[test]
    fn without_locale_support_the_lossy_rung_is_final() {
        assert_eq!(decode_bytes(b"\xff\xfe"), "\u{fffd}\u{fffd}");
    }

    #[test]
    fn os_payload_shapes_follow_the_native_format() {
        let kind = Kind::Special(SpecialKind::Os);
        assert_eq!(native_text(&kind, &Args::new()), "");
        assert_eq!(native_text(&kind, &Args::single(Arg::Code(1))), "1");
        let args: Args = [Arg::Code(2), Arg::from("message")].into_iter().collect();
        assert_eq!(native_text(&kind, &args), "[Errno 2] message");
    }

    #[test]
    fn keys_are_quoted() {
        let kind = Kind::Special(SpecialKind::KeyNotFound);
        let args = Args::single(Arg::from("message"));
        assert_eq!(native_text(&kind, &args), "'message'");
    }

    #[test]
    fn plain_kinds_join_their_payload() {
        let kind = Kind::Other("Plain".into());
        let args: Args = [Arg::from("a"), Arg::Code(3)].into_iter().collect();
        assert_eq!(native_text(&kind, &args), "a, 3");
    }
}
