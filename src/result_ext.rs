//! Re-raising adapters for [`Result`].

use core::fmt;

use crate::{error::Error, into_error::IntoError};

mod sealed {
    pub trait Sealed {}
    impl<T, E> Sealed for Result<T, E> {}
}

/// Extension methods that re-raise the error half of a [`Result`].
///
/// These adapters are the idiomatic way to call
/// [`reraise`](crate::reraise()) at the point where an error crosses a
/// layer boundary.
///
/// # Examples
///
/// ```
/// use reraise::prelude::*;
///
/// fn listen_port(raw: &str) -> Result<u16, reraise::Error> {
///     raw.parse::<u16>()
///         .reraise_lazy(|| format!("While parsing the listen port {raw:?}"))
/// }
///
/// let error = listen_port("?").unwrap_err();
/// assert!(normalize(&error).starts_with("\nWhile parsing the listen port \"?\"\n"));
/// ```
pub trait ResultExt<T, E>: sealed::Sealed {
    /// Converts the error half into an [`Error`] without adding context.
    #[track_caller]
    #[must_use]
    fn into_error(self) -> Result<T, Error>
    where
        E: IntoError;

    /// Re-raises the error half with one added line of context.
    #[track_caller]
    #[must_use]
    fn reraise<M>(self, message: M) -> Result<T, Error>
    where
        E: IntoError,
        M: fmt::Display;

    /// Re-raises the error half with a lazily built context line. The
    /// closure only runs on the error path.
    #[track_caller]
    #[must_use]
    fn reraise_lazy<M, F>(self, message: F) -> Result<T, Error>
    where
        E: IntoError,
        F: FnOnce() -> M,
        M: fmt::Display;

    /// Re-raises the error half with an explicit separator between the
    /// new line and the prior message.
    #[track_caller]
    #[must_use]
    fn reraise_with_separator<M>(self, message: M, separator: &str) -> Result<T, Error>
    where
        E: IntoError,
        M: fmt::Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline(always)]
    fn into_error(self) -> Result<T, Error>
    where
        E: IntoError,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error.into_error()),
        }
    }

    #[inline(always)]
    fn reraise<M>(self, message: M) -> Result<T, Error>
    where
        E: IntoError,
        M: fmt::Display,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(crate::reraise::reraise(error, message)),
        }
    }

    #[inline(always)]
    fn reraise_lazy<M, F>(self, message: F) -> Result<T, Error>
    where
        E: IntoError,
        F: FnOnce() -> M,
        M: fmt::Display,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(crate::reraise::reraise(error, message())),
        }
    }

    #[inline(always)]
    fn reraise_with_separator<M>(self, message: M, separator: &str) -> Result<T, Error>
    where
        E: IntoError,
        M: fmt::Display,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(crate::reraise::reraise_with_separator(
                error, message, separator,
            )),
        }
    }
}
