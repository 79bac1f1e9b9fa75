//! The ordered construction payload of an [`Error`](crate::Error).
//!
//! Most failure kinds render their display text by joining their payload,
//! so the payload keeps the values a failure was constructed from in the
//! order they were given: pre-decoded text, raw bytes in an unknown
//! encoding, or an auxiliary number such as an OS error code or a byte
//! position.

use alloc::{string::String, vec::Vec};

/// A single payload value of an [`Error`](crate::Error).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arg {
    /// Text that has already been decoded.
    Text(String),
    /// Raw bytes in an unknown, possibly broken, encoding.
    Bytes(Vec<u8>),
    /// An auxiliary number, e.g. an OS error code or a byte position.
    Code(i64),
}

impl Arg {
    /// Returns the text value, if this argument is [`Arg::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Arg::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the byte value, if this argument is [`Arg::Bytes`].
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Arg::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Returns the numeric value, if this argument is [`Arg::Code`].
    #[must_use]
    pub fn as_code(&self) -> Option<i64> {
        match self {
            Arg::Code(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<String> for Arg {
    fn from(text: String) -> Self {
        Arg::Text(text)
    }
}

impl From<&str> for Arg {
    fn from(text: &str) -> Self {
        Arg::Text(String::from(text))
    }
}

impl From<Vec<u8>> for Arg {
    fn from(bytes: Vec<u8>) -> Self {
        Arg::Bytes(bytes)
    }
}

impl From<i64> for Arg {
    fn from(code: i64) -> Self {
        Arg::Code(code)
    }
}

/// The ordered construction payload of an [`Error`](crate::Error).
///
/// # Examples
///
/// ```
/// use reraise::{Arg, Args};
///
/// let args: Args = [Arg::Code(2), Arg::from("no such file")].into_iter().collect();
/// assert_eq!(args.len(), 2);
/// assert_eq!(args.get(0).and_then(Arg::as_code), Some(2));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Args(Vec<Arg>);

impl Args {
    /// Creates an empty payload.
    #[must_use]
    pub const fn new() -> Self {
        Args(Vec::new())
    }

    /// Creates a payload holding a single argument.
    #[must_use]
    pub fn single(arg: Arg) -> Self {
        let mut args = Vec::with_capacity(1);
        args.push(arg);
        Args(args)
    }

    /// Appends an argument to the payload.
    pub fn push(&mut self, arg: Arg) {
        self.0.push(arg);
    }

    /// Returns the argument at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arg> {
        self.0.get(index)
    }

    /// Returns the number of arguments in the payload.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the payload holds no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the payload as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Arg] {
        &self.0
    }

    /// Iterates over the arguments in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Arg> {
        self.0.iter()
    }
}

impl From<Vec<Arg>> for Args {
    fn from(args: Vec<Arg>) -> Self {
        Args(args)
    }
}

impl FromIterator<Arg> for Args {
    fn from_iter<I: IntoIterator<Item = Arg>>(iter: I) -> Self {
        Args(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = &'a Arg;
    type IntoIter = core::slice::Iter<'a, Arg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
