//! The re-raise operation.

use alloc::string::ToString;
use core::fmt;

use crate::{error::Error, into_error::IntoError};

/// Re-raises `error` with one added line of context.
///
/// The newest context line goes on top of whatever context the error
/// already carries, separated by a newline, and the returned value is what
/// the caller propagates. The error's origin is threaded through
/// unchanged; this call only appends its own site to the re-raise trail.
///
/// Special kinds are reconstructed with their payload untouched so that
/// [`Error::is`] checks against the original kind keep succeeding; every
/// other kind has its payload replaced with the combined message.
///
/// # Examples
///
/// ```
/// use reraise::prelude::*;
///
/// fn load() -> Result<(), reraise::Error> {
///     Err(Error::msg("original message"))
/// }
///
/// let error = match load() {
///     Ok(()) => unreachable!(),
///     Err(error) => reraise(error, "While starting up"),
/// };
/// assert_eq!(normalize(&error), "\nWhile starting up\noriginal message");
/// ```
#[must_use]
#[track_caller]
pub fn reraise<E, M>(error: E, message: M) -> Error
where
    E: IntoError,
    M: fmt::Display,
{
    reraise_with_separator(error, message, "\n")
}

/// Re-raises `error` with one added line of context and an explicit
/// separator.
///
/// The separator governs only the seam between the new line and the
/// immediately prior message; lines stacked by earlier calls keep the
/// separators they were stacked with.
///
/// # Examples
///
/// ```
/// use reraise::prelude::*;
///
/// let error = Error::msg("original message");
/// let error = reraise_with_separator(error, "[message]", " ");
/// assert_eq!(normalize(&error), "\n[message] original message");
/// ```
#[must_use]
#[track_caller]
pub fn reraise_with_separator<E, M>(error: E, message: M, separator: &str) -> Error
where
    E: IntoError,
    M: fmt::Display,
{
    error.into_error().augment(&message.to_string(), separator)
}
