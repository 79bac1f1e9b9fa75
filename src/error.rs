//! The in-flight error value manipulated by [`reraise`](crate::reraise()).

use alloc::string::{String, ToString};
use core::fmt;

use crate::{
    args::{Arg, Args},
    kind::{Kind, SpecialKind},
    normalize::normalize,
    origin::Origin,
};

/// An in-flight failure: a kind, an ordered payload, the context
/// accumulated by re-raising, and the captured origin.
///
/// `Error` deliberately does not implement [`core::error::Error`], so that
/// any type which does can be converted into it with `?` or
/// [`IntoError`](crate::IntoError).
///
/// # Examples
///
/// ```
/// use reraise::{reraise, Error, SpecialKind};
///
/// let error = Error::key_not_found("session");
/// let error = reraise(error, "While restoring state");
///
/// // The kind survives re-raising, so recovery code keeps matching.
/// assert!(error.is(SpecialKind::KeyNotFound));
/// assert_eq!(error.to_text(), "\nWhile restoring state\n'session'");
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Error {
    kind: Kind,
    args: Args,
    message: Option<String>,
    context: Option<String>,
    origin: Origin,
}

impl Error {
    /// Creates an error from a kind and payload.
    ///
    /// This is the fully general constructor; the typed constructors below
    /// cover the common shapes.
    #[must_use]
    #[track_caller]
    pub fn new(kind: Kind, args: Args) -> Self {
        Error {
            kind,
            args,
            message: None,
            context: None,
            origin: Origin::capture(),
        }
    }

    /// Creates an error from a plain message.
    ///
    /// # Examples
    ///
    /// ```
    /// let error = reraise::Error::msg("the cache is gone");
    /// assert_eq!(error.to_text(), "the cache is gone");
    /// ```
    #[must_use]
    #[track_caller]
    pub fn msg<M: fmt::Display>(message: M) -> Self {
        Error::new(
            Kind::Other("Error".into()),
            Args::single(Arg::Text(message.to_string())),
        )
    }

    /// Creates a key-not-found error. Its native text is the quoted key.
    #[must_use]
    #[track_caller]
    pub fn key_not_found<K: Into<String>>(key: K) -> Self {
        Error::new(
            Kind::Special(SpecialKind::KeyNotFound),
            Args::single(Arg::Text(key.into())),
        )
    }

    /// Creates an OS failure from a bare error code.
    #[must_use]
    #[track_caller]
    pub fn os(code: i32) -> Self {
        Error::new(
            Kind::Special(SpecialKind::Os),
            Args::single(Arg::Code(i64::from(code))),
        )
    }

    /// Creates an OS failure from an error code and a message.
    #[must_use]
    #[track_caller]
    pub fn os_with_message<M: Into<String>>(code: i32, message: M) -> Self {
        let mut args = Args::single(Arg::Code(i64::from(code)));
        args.push(Arg::Text(message.into()));
        Error::new(Kind::Special(SpecialKind::Os), args)
    }

    /// Creates a file-not-found failure. Satisfies
    /// [`is(SpecialKind::Os)`](Error::is) in addition to its own kind.
    #[must_use]
    #[track_caller]
    pub fn file_not_found<M: Into<String>>(message: M) -> Self {
        Error::new(
            Kind::Special(SpecialKind::FileNotFound),
            Args::single(Arg::Text(message.into())),
        )
    }

    /// Creates a syntax failure from a bare message.
    #[must_use]
    #[track_caller]
    pub fn syntax<M: Into<String>>(message: M) -> Self {
        Error::new(
            Kind::Special(SpecialKind::Syntax),
            Args::single(Arg::Text(message.into())),
        )
    }

    /// Creates a syntax failure pointing at a source location. Its native
    /// text has the `message (file, line N)` shape.
    #[must_use]
    #[track_caller]
    pub fn syntax_at<M: Into<String>, F: Into<String>>(message: M, file: F, line: u32) -> Self {
        let mut args = Args::single(Arg::Text(message.into()));
        args.push(Arg::Text(file.into()));
        args.push(Arg::Code(i64::from(line)));
        Error::new(Kind::Special(SpecialKind::Syntax), args)
    }

    /// Creates a text-decoding failure over a byte sequence.
    ///
    /// `start..end` is the undecodable range; the native text names the
    /// encoding, the first offending byte and `reason`, without ever
    /// trying to decode `object` itself.
    #[must_use]
    #[track_caller]
    pub fn decode<E, O, R>(encoding: E, object: O, start: usize, end: usize, reason: R) -> Self
    where
        E: Into<String>,
        O: Into<alloc::vec::Vec<u8>>,
        R: Into<String>,
    {
        let mut args = Args::single(Arg::Text(encoding.into()));
        args.push(Arg::Bytes(object.into()));
        args.push(Arg::Code(start as i64));
        args.push(Arg::Code(end as i64));
        args.push(Arg::Text(reason.into()));
        Error::new(Kind::Special(SpecialKind::Decode), args)
    }

    /// Creates a text-encoding failure over a string.
    #[must_use]
    #[track_caller]
    pub fn encode<E, O, R>(encoding: E, object: O, start: usize, end: usize, reason: R) -> Self
    where
        E: Into<String>,
        O: Into<String>,
        R: Into<String>,
    {
        let mut args = Args::single(Arg::Text(encoding.into()));
        args.push(Arg::Text(object.into()));
        args.push(Arg::Code(start as i64));
        args.push(Arg::Code(end as i64));
        args.push(Arg::Text(reason.into()));
        Error::new(Kind::Special(SpecialKind::Encode), args)
    }

    /// Converts any [`core::error::Error`] value into an `Error`.
    ///
    /// The kind is classified through the process-wide table of well-known
    /// error types; everything unrecognized keeps its short type name as a
    /// dynamic kind. The origin is captured at the caller's location — for
    /// errors raised by this crate's own constructors that is the raise
    /// site itself, for foreign errors it is where the value first entered
    /// this crate.
    #[must_use]
    #[track_caller]
    pub fn from_error<E>(error: E) -> Self
    where
        E: core::error::Error + 'static,
    {
        let (kind, args) = crate::kind::classify(&error);
        Error::new(kind, args)
    }

    /// The kind of this error.
    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// The ordered construction payload of this error.
    #[must_use]
    pub fn args(&self) -> &Args {
        &self.args
    }

    /// The display-override message, set by
    /// [`reraise`](crate::reraise()).
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The accumulated context, set by [`reraise`](crate::reraise()).
    /// Present exactly when the error has been re-raised at least once.
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// The captured origin of this error.
    #[must_use]
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Checks this error's kind against a special kind, honoring the
    /// subtype relation of [`SpecialKind::is`].
    #[must_use]
    pub fn is(&self, kind: SpecialKind) -> bool {
        match self.kind.special() {
            Some(own) => own.is(kind),
            None => false,
        }
    }

    /// Returns `true` if this error is a substituted special kind, i.e. a
    /// special kind whose display text has been overridden by a previous
    /// [`reraise`](crate::reraise()).
    #[must_use]
    pub fn is_substituted(&self) -> bool {
        self.kind.is_special() && self.message.is_some()
    }

    /// Converts this error into display text. Equivalent to
    /// [`normalize`].
    #[must_use]
    pub fn to_text(&self) -> String {
        normalize(self)
    }

    /// Augments this error with one line of context and returns the value
    /// to re-propagate. This is the whole re-raise step; see
    /// [`reraise`](crate::reraise()) for the ergonomic entry points.
    #[must_use]
    #[track_caller]
    pub(crate) fn augment(self, message: &str, separator: &str) -> Self {
        let mut current = match self.context {
            Some(ref context) => context.clone(),
            None => normalize(&self),
        };
        if !current.starts_with(separator) {
            current.insert_str(0, separator);
        }
        let combined = alloc::format!("\n{message}{current}");

        let mut error = if self.kind.is_special() && self.message.is_none() {
            // A special kind seen for the first time: reconstruct it as
            // the substituted variant. The payload passes through
            // untouched so recovery code can still read it.
            Error {
                kind: self.kind,
                args: self.args,
                message: None,
                context: None,
                origin: self.origin,
            }
        } else if self.kind.is_special() {
            // Already substituted: only the display text changes.
            self
        } else {
            // Every other kind formats by joining its payload, so the
            // combined message becomes the sole argument.
            let mut error = self;
            error.args = Args::single(Arg::Text(combined.clone()));
            error
        };

        error.message = Some(combined.clone());
        error.context = Some(combined);
        error.origin.record_reraise();
        error
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.name(), self.to_text())?;
        write!(f, "\n  {}", DisplayIndented(&self.origin))?;

        #[cfg(feature = "backtrace")]
        if let Some(stack) = self.origin.stack() {
            write!(f, "\n  stack:\n{stack}")?;
        }

        Ok(())
    }
}

/// Helper that re-indents the multi-line origin display to the debug
/// layout.
struct DisplayIndented<'a>(&'a Origin);

impl fmt::Display for DisplayIndented<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.to_string();
        let mut lines = text.lines();
        if let Some(first) = lines.next() {
            f.write_str(first)?;
        }
        for line in lines {
            write!(f, "\n  {line}")?;
        }
        Ok(())
    }
}

impl<E> From<E> for Error
where
    E: core::error::Error + 'static,
{
    fn from(error: E) -> Self {
        Error::from_error(error)
    }
}
