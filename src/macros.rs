/// Macro to build an [`Error`](crate::Error) from a message.
///
/// When invoked with a literal as the first argument, the arguments are
/// interpreted and evaluated the same way as by the [`format!()`] macro,
/// and the resulting string becomes the error's payload. Any other single
/// expression is used as the message through its
/// [`Display`](core::fmt::Display) implementation.
///
/// [`format!()`]: std::format
///
/// # Examples
///
/// ```
/// use reraise::raised;
///
/// let error = reraise::raised!("the cache is gone");
/// assert_eq!(error.to_text(), "the cache is gone");
///
/// let missing = 3;
/// let error = raised!("{missing} chunks are missing");
/// assert_eq!(error.to_text(), "3 chunks are missing");
/// ```
#[macro_export]
macro_rules! raised {
    ($msg:literal $(,)?) => {
        $crate::__private::format_error($crate::__private::format_args!($msg))
    };
    ($msg:expr $(,)?) => {
        $crate::Error::msg($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__private::format_error($crate::__private::format_args!($fmt, $($arg)*))
    };
}

/// Return early with an error built from a message.
///
/// This constructs a new error using the same arguments as the
/// [`raised!`] macro and returns early from the function with that error
/// wrapped in an `Err`. Equivalent to writing
/// `return Err(raised!(...).into())`.
///
/// # Examples
///
/// ```
/// use reraise::prelude::*;
///
/// fn check(value: i32) -> Result<(), reraise::Error> {
///     if value < 0 {
///         raise!("value must be non-negative, got {}", value);
///     }
///     Ok(())
/// }
///
/// assert!(check(-1).is_err());
/// ```
#[macro_export]
macro_rules! raise {
    ($($args:tt)*) => {
        return $crate::__private::Err($crate::raised!($($args)*).into())
    };
}
