//! Where a failure was first raised, and where it has been re-raised.
//!
//! The origin of an [`Error`](crate::Error) is captured exactly once, when
//! the value is first created, and is threaded through every
//! [`reraise`](crate::reraise()) unchanged — it is never recomputed. Each
//! re-raise appends its own call site to the trail instead, so the full
//! history reads: the original raise site, then every handler that added
//! context, and never an internal frame of this crate.

use alloc::{borrow::Cow, vec::Vec};
use core::{fmt, panic::Location};

/// A single source location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Site {
    file: Cow<'static, str>,
    line: u32,
    column: u32,
}

impl Site {
    /// Captures the caller's location.
    #[must_use]
    #[track_caller]
    pub fn here() -> Self {
        let location = Location::caller();
        Site {
            file: Cow::Borrowed(location.file()),
            line: location.line(),
            column: location.column(),
        }
    }

    /// The source file of this site.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The line number of this site, 1-based.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// The column of this site, 1-based.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// The captured origin of an [`Error`](crate::Error).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Origin {
    raised_at: Site,
    reraised_at: Vec<Site>,
    #[cfg(feature = "backtrace")]
    #[cfg_attr(feature = "serde", serde(skip))]
    stack: Option<Stack>,
}

impl Origin {
    /// Captures the origin for a failure raised at the caller's location.
    ///
    /// With the `backtrace` feature a stack is captured as well, with the
    /// frames of this crate filtered out of the top.
    #[must_use]
    #[track_caller]
    pub fn capture() -> Self {
        Origin {
            raised_at: Site::here(),
            reraised_at: Vec::new(),
            #[cfg(feature = "backtrace")]
            stack: Stack::capture(),
        }
    }

    /// The site where the failure was first raised.
    #[must_use]
    pub fn raised_at(&self) -> &Site {
        &self.raised_at
    }

    /// The sites that re-raised the failure, oldest first.
    #[must_use]
    pub fn reraised_at(&self) -> &[Site] {
        &self.reraised_at
    }

    /// The stack captured at the first raise site, if any.
    #[cfg(feature = "backtrace")]
    #[cfg_attr(docsrs, doc(cfg(feature = "backtrace")))]
    #[must_use]
    pub fn stack(&self) -> Option<&Stack> {
        self.stack.as_ref()
    }

    /// Records the caller's location as a re-raise site.
    #[track_caller]
    pub(crate) fn record_reraise(&mut self) {
        self.reraised_at.push(Site::here());
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "raised at {}", self.raised_at)?;
        for site in &self.reraised_at {
            write!(f, "\nreraised at {site}")?;
        }
        Ok(())
    }
}

/// A stack captured at the first raise site.
///
/// Frames belonging to this crate and to the capture machinery are
/// filtered off the top, so the first frame is the raise site itself.
#[cfg(feature = "backtrace")]
#[cfg_attr(docsrs, doc(cfg(feature = "backtrace")))]
#[derive(Clone, Debug)]
pub struct Stack {
    frames: Vec<StackFrame>,
    omitted: usize,
}

/// A single frame of a captured [`Stack`].
#[cfg(feature = "backtrace")]
#[cfg_attr(docsrs, doc(cfg(feature = "backtrace")))]
#[derive(Clone, Debug)]
pub struct StackFrame {
    /// The demangled symbol name of the frame.
    pub symbol: alloc::string::String,
    /// The source file of the frame, if known.
    pub file: Option<alloc::string::String>,
    /// The line number of the frame, if known.
    pub line: Option<u32>,
}

#[cfg(feature = "backtrace")]
impl Stack {
    const MAX_FRAMES: usize = 20;

    /// Symbol prefixes that never belong in the captured history: the
    /// capture machinery itself and this crate's internals.
    const INTERNAL_PREFIXES: &'static [&'static str] = &["backtrace::", "reraise::"];

    /// Captures the current stack, skipping internal frames at the top and
    /// limiting the depth. Returns `None` when no frame could be resolved.
    #[must_use]
    pub fn capture() -> Option<Self> {
        let mut frames = Vec::new();
        let mut omitted = 0usize;
        let mut skipping_internal = true;

        backtrace::trace(|frame| {
            backtrace::resolve_frame(frame, |symbol| {
                let Some(name) = symbol.name() else {
                    return;
                };
                let symbol_name = alloc::format!("{name:#}");

                if skipping_internal {
                    if Self::INTERNAL_PREFIXES
                        .iter()
                        .any(|prefix| symbol_name.starts_with(prefix))
                    {
                        return;
                    }
                    skipping_internal = false;
                }

                if frames.len() >= Self::MAX_FRAMES {
                    omitted += 1;
                    return;
                }

                frames.push(StackFrame {
                    symbol: symbol_name,
                    file: symbol
                        .filename()
                        .map(|path| alloc::format!("{}", path.display())),
                    line: symbol.lineno(),
                });
            });
            true
        });

        if frames.is_empty() {
            None
        } else {
            Some(Stack { frames, omitted })
        }
    }

    /// The captured frames, most recent first.
    #[must_use]
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    /// The number of frames dropped by the depth limit.
    #[must_use]
    pub const fn omitted(&self) -> usize {
        self.omitted
    }
}

#[cfg(feature = "backtrace")]
impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.frames {
            write!(f, "{}", frame.symbol)?;
            if let Some(file) = &frame.file {
                write!(f, " - {file}")?;
                if let Some(line) = frame.line {
                    write!(f, ":{line}")?;
                }
            }
            writeln!(f)?;
        }
        if self.omitted > 0 {
            writeln!(f, "note: {} frame(s) omitted.", self.omitted)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reraise_sites_accumulate_in_order() {
        let mut origin = Origin::capture();
        let raised = origin.raised_at().clone();
        origin.record_reraise();
        origin.record_reraise();
        assert_eq!(origin.raised_at(), &raised);
        assert_eq!(origin.reraised_at().len(), 2);
        assert!(origin.reraised_at()[0].line() < origin.reraised_at()[1].line());
    }

    #[test]
    fn site_displays_file_line_column() {
        let site = Site::here();
        let text = alloc::format!("{site}");
        assert!(text.contains("origin.rs"));
        assert!(text.contains(':'));
    }
}
