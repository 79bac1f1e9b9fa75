//! Conversion of arbitrary failures into [`Error`].

use crate::error::Error;

/// Converts a failure into an [`Error`].
///
/// This trait is the seam that lets [`reraise`](crate::reraise()) and the
/// [`ResultExt`](crate::ResultExt) adapters accept both an [`Error`] that
/// is already in flight and any foreign [`core::error::Error`] value.
///
/// # Automatic Implementations
///
/// - [`Error`] itself (identity — re-raising an already augmented error
///   continues its context chain).
/// - Every `E: core::error::Error + 'static` (classification through the
///   process-wide kind table; see [`Error::from_error`]).
///
/// # Examples
///
/// ```
/// use reraise::IntoError;
///
/// let error = "x".parse::<u16>().unwrap_err().into_error();
/// assert!(error.is(reraise::SpecialKind::Syntax));
/// ```
pub trait IntoError {
    /// Converts `self` into an [`Error`], capturing the caller's location
    /// as the origin for values entering the crate here.
    #[track_caller]
    #[must_use]
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl<E> IntoError for E
where
    E: core::error::Error + 'static,
{
    #[inline]
    fn into_error(self) -> Error {
        Error::from_error(self)
    }
}
