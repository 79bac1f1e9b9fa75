//! Failure kinds and the classification table for foreign error types.
//!
//! A small closed set of built-in kinds ([`SpecialKind`]) has display
//! formatting this crate controls directly, because re-raising must be able
//! to override their text without losing the payload. Every other kind is
//! carried as a dynamic kind name ([`Kind::Other`]).
//!
//! Foreign [`core::error::Error`] values entering the crate are classified
//! through a process-wide read-only table keyed by runtime type identity,
//! built lazily on first use.

use alloc::{borrow::Cow, string::ToString};
use core::any::TypeId;

use hashbrown::HashMap;
use rustc_hash::FxBuildHasher;

use crate::args::{Arg, Args};

/// The closed set of built-in failure kinds whose display text is owned by
/// this crate.
///
/// Re-raising an error of one of these kinds reconstructs it with the same
/// tag and the same payload, overriding only its display text, so an
/// [`Error::is`](crate::Error::is) check against the original kind keeps
/// succeeding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialKind {
    /// A lookup failed because the key was not present.
    KeyNotFound,
    /// An operating-system-level failure, usually carrying an error code.
    Os,
    /// Input could not be parsed.
    Syntax,
    /// Bytes could not be decoded into text.
    Decode,
    /// Text could not be encoded into bytes.
    Encode,
    /// A file or directory was not found. Satisfies `is(Os)`.
    FileNotFound,
}

impl SpecialKind {
    /// The name of this kind, as shown in [`Debug`](core::fmt::Debug)
    /// output of an [`Error`](crate::Error).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SpecialKind::KeyNotFound => "KeyNotFound",
            SpecialKind::Os => "Os",
            SpecialKind::Syntax => "Syntax",
            SpecialKind::Decode => "Decode",
            SpecialKind::Encode => "Encode",
            SpecialKind::FileNotFound => "FileNotFound",
        }
    }

    /// Checks whether this kind satisfies an "is a" check against `other`.
    ///
    /// The relation is reflexive; in addition [`FileNotFound`] is an
    /// [`Os`] failure, mirroring the subtype relation of the kinds this
    /// set was modeled on.
    ///
    /// [`FileNotFound`]: SpecialKind::FileNotFound
    /// [`Os`]: SpecialKind::Os
    #[must_use]
    pub const fn is(self, other: SpecialKind) -> bool {
        match (self, other) {
            (SpecialKind::FileNotFound, SpecialKind::Os) => true,
            _ => self as u8 == other as u8,
        }
    }
}

/// The kind of an [`Error`](crate::Error).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    /// One of the closed set of built-in kinds.
    Special(SpecialKind),
    /// Any other kind, carried by name. For converted foreign errors this
    /// is the short type name of the source error type.
    Other(Cow<'static, str>),
}

impl Kind {
    /// The name of this kind.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Kind::Special(kind) => kind.name(),
            Kind::Other(name) => name,
        }
    }

    /// Returns the special kind tag, if this kind belongs to the closed
    /// set.
    #[must_use]
    pub const fn special(&self) -> Option<SpecialKind> {
        match self {
            Kind::Special(kind) => Some(*kind),
            Kind::Other(_) => None,
        }
    }

    /// Returns `true` if this kind belongs to the closed special set.
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(self, Kind::Special(_))
    }
}

type KindTable = HashMap<TypeId, SpecialKind, FxBuildHasher>;

fn build_table() -> KindTable {
    let mut table = KindTable::with_hasher(FxBuildHasher);
    table.insert(TypeId::of::<core::str::Utf8Error>(), SpecialKind::Decode);
    table.insert(
        TypeId::of::<alloc::string::FromUtf8Error>(),
        SpecialKind::Decode,
    );
    table.insert(
        TypeId::of::<alloc::string::FromUtf16Error>(),
        SpecialKind::Decode,
    );
    table.insert(
        TypeId::of::<core::char::DecodeUtf16Error>(),
        SpecialKind::Decode,
    );
    table.insert(TypeId::of::<core::num::ParseIntError>(), SpecialKind::Syntax);
    table.insert(
        TypeId::of::<core::num::ParseFloatError>(),
        SpecialKind::Syntax,
    );
    table.insert(
        TypeId::of::<core::char::ParseCharError>(),
        SpecialKind::Syntax,
    );
    table.insert(TypeId::of::<core::str::ParseBoolError>(), SpecialKind::Syntax);
    #[cfg(feature = "std")]
    table.insert(TypeId::of::<std::io::Error>(), SpecialKind::Os);
    table
}

fn special_kind_table() -> &'static KindTable {
    #[cfg(feature = "std")]
    {
        static TABLE: std::sync::OnceLock<KindTable> = std::sync::OnceLock::new();
        TABLE.get_or_init(build_table)
    }

    #[cfg(not(feature = "std"))]
    {
        static TABLE: spin::Once<KindTable> = spin::Once::new();
        TABLE.call_once(build_table)
    }
}

fn short_type_name<E: ?Sized>() -> &'static str {
    let name = core::any::type_name::<E>();
    name.rsplit("::").next().unwrap_or(name)
}

/// Classifies a foreign error into a kind and extracts its payload.
pub(crate) fn classify<E>(error: &E) -> (Kind, Args)
where
    E: core::error::Error + 'static,
{
    let Some(&special) = special_kind_table().get(&TypeId::of::<E>()) else {
        return (
            Kind::Other(Cow::Borrowed(short_type_name::<E>())),
            Args::single(Arg::Text(error.to_string())),
        );
    };

    #[cfg(feature = "std")]
    {
        let error: &(dyn core::error::Error + 'static) = error;
        if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
            let kind = if io_error.kind() == std::io::ErrorKind::NotFound {
                SpecialKind::FileNotFound
            } else {
                special
            };
            return (Kind::Special(kind), io_args(io_error));
        }
    }

    (Kind::Special(special), Args::single(Arg::Text(error.to_string())))
}

/// Extracts the payload of an io error: the error code (when the error
/// came from the OS) followed by the message with the redundant
/// `(os error N)` suffix stripped.
#[cfg(feature = "std")]
fn io_args(error: &std::io::Error) -> Args {
    let text = error.to_string();
    match error.raw_os_error() {
        Some(code) => {
            let suffix = alloc::format!(" (os error {code})");
            let message = match text.strip_suffix(suffix.as_str()) {
                Some(stripped) => stripped.to_string(),
                None => text,
            };
            let mut args = Args::single(Arg::Code(i64::from(code)));
            args.push(Arg::Text(message));
            args
        }
        None => Args::single(Arg::Text(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_is_an_os_failure() {
        assert!(SpecialKind::FileNotFound.is(SpecialKind::Os));
        assert!(!SpecialKind::Os.is(SpecialKind::FileNotFound));
        assert!(SpecialKind::Os.is(SpecialKind::Os));
        assert!(!SpecialKind::Decode.is(SpecialKind::Encode));
    }

    #[test]
    fn parse_errors_classify_as_syntax() {
        let error = "x".parse::<u16>().unwrap_err();
        let (kind, args) = classify(&error);
        assert_eq!(kind, Kind::Special(SpecialKind::Syntax));
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn utf8_errors_classify_as_decode() {
        let error = core::str::from_utf8(b"\xc2").unwrap_err();
        let (kind, _) = classify(&error);
        assert_eq!(kind, Kind::Special(SpecialKind::Decode));
    }

    #[test]
    fn unknown_errors_keep_their_short_type_name() {
        #[derive(Debug)]
        struct OddError;

        impl core::fmt::Display for OddError {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("odd")
            }
        }

        impl core::error::Error for OddError {}

        let (kind, args) = classify(&OddError);
        assert_eq!(kind, Kind::Other(Cow::Borrowed("OddError")));
        assert_eq!(args.get(0).and_then(Arg::as_text), Some("odd"));
    }
}
