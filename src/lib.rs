#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Re-raise errors with added context while keeping the original failure
//! site observable.
//!
//! ## Overview
//!
//! This crate provides a single error value, [`Error`], together with one
//! central operation: [`reraise()`]. Catching an error and re-raising it with
//! a short line of context builds up a human-readable trail of what the
//! program was doing at every level of the call stack, newest line on top,
//! while the location where the failure originally happened stays attached
//! to the value and is never replaced by the location of the re-raise.
//!
//! The second half of the crate is [`normalize()`]: a conversion from any
//! [`Error`] to display text that cannot fail, even when the payload of the
//! error contains bytes in an unknown or broken encoding.
//!
//! ## Quick Example
//!
//! ```
//! use reraise::prelude::*;
//!
//! fn parse_port(raw: &str) -> Result<u16, reraise::Error> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Ok(port),
//!         Err(error) => Err(reraise(error, "While parsing the listen port")),
//!     }
//! }
//!
//! let error = parse_port("not-a-port").unwrap_err();
//! let text = normalize(&error);
//! assert!(text.starts_with("\nWhile parsing the listen port\n"));
//! ```
//!
//! The same flow reads more naturally through [`ResultExt`]:
//!
//! ```
//! use reraise::prelude::*;
//!
//! fn parse_port(raw: &str) -> Result<u16, reraise::Error> {
//!     raw.parse::<u16>().reraise("While parsing the listen port")
//! }
//! # assert!(parse_port("8080").is_ok());
//! ```
//!
//! ## Core Concepts
//!
//! An [`Error`] carries four things:
//!
//! - A **kind**: either one of the closed set of [`SpecialKind`] tags
//!   (key-not-found, OS failure, syntax failure, text decoding/encoding
//!   failure, file-not-found) or a dynamic kind name for everything else.
//! - An ordered **payload** ([`Args`]): the values the failure was
//!   constructed from — text, raw bytes in an unknown encoding, or
//!   auxiliary numbers such as an OS error code.
//! - The **accumulated context**, one line per [`reraise()`] call.
//! - An **origin**: the site where the value was first raised, the trail of
//!   re-raise sites, and (with the `backtrace` feature) a captured stack
//!   with this crate's own frames filtered out.
//!
//! Re-raising a special kind never changes its kind tag, so recovery code
//! that checks [`Error::is`] against the original kind keeps working no
//! matter how many context lines have been stacked on top. The payload of a
//! special kind is passed through re-raising untouched; only its display
//! text is overridden.
//!
//! ## Normalization
//!
//! [`normalize()`] renders the payload with the native format of the error's
//! kind. Byte payloads go through a fallback ladder: strict UTF-8, then
//! (with the `std` feature) the process's locale-preferred encoding, then a
//! lossy decode that substitutes the replacement character and cannot fail.
//!
//! ## Feature Flags
//!
//! - `std`: locale-aware decoding and classification of
//!   [`std::io::Error`]. Off by default; the crate is `no_std` + `alloc`.
//! - `backtrace`: capture a stack at the first raise site (implies `std`).
//! - `serde`: `Serialize`/`Deserialize` for [`Error`] and its parts. The
//!   accumulated context and the kind survive a round trip unchanged.
//!
//! [`std::io::Error`]: https://doc.rust-lang.org/std/io/struct.Error.html

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod origin;
pub mod prelude;

mod args;
mod error;
mod into_error;
mod kind;
#[cfg(feature = "std")]
mod locale;
mod normalize;
mod reraise;
mod result_ext;

pub use self::{
    args::{Arg, Args},
    error::Error,
    into_error::IntoError,
    kind::{Kind, SpecialKind},
    normalize::normalize,
    reraise::{reraise, reraise_with_separator},
    result_ext::ResultExt,
};

/// A [`Result`](core::result::Result) type alias where the error defaults
/// to [`Error`].
///
/// # Examples
///
/// ```
/// use reraise::prelude::*;
///
/// fn might_fail() -> reraise::Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T, E = Error> = core::result::Result<T, E>;

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    use alloc::fmt;
    #[doc(hidden)]
    pub use core::{format_args, result::Result::Err};

    use crate::Error;

    #[doc(hidden)]
    #[inline]
    #[cold]
    #[must_use]
    #[track_caller]
    pub fn format_error(args: fmt::Arguments<'_>) -> Error {
        if let Some(message) = args.as_str() {
            Error::msg(message)
        } else {
            Error::msg(fmt::format(args))
        }
    }
}
