//! Core text processor abstraction.
//!
//! A [`TextProcessor`] is a pure `Cow<str> -> Cow<str>` transform plus a flag
//! telling the [`Tasks`](crate::tasks::Tasks) engine whether it may be
//! re-applied on every convergence pass or only on the first one.
//!
//! Every processor follows the same allocation rule: when nothing changes, the
//! input `Cow` is handed back as-is, so a borrowed input stays borrowed and the
//! engine's per-pass comparison never pays for a copy.

pub mod cut_at_separator;
pub mod cut_to_first_token;
pub mod extract_by_pattern;
pub mod fn_processor;
pub mod remove_by_pattern;
pub mod trim_charset;
pub mod trim_whitespace;

use std::borrow::Cow;
use std::ops::Range;
use thiserror::Error;

/// Construction-time failure of a pattern-based processor.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid pattern `{pattern}`: {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A single text transformation step.
pub trait TextProcessor: Send + Sync {
    /// Human-readable name – used in logs and `Debug` output.
    fn name(&self) -> &'static str;

    /// `true` if the processor runs only on the first pass of the
    /// convergence loop. Must be a constant per instance.
    fn once(&self) -> bool;

    /// Total, side-effect-free transformation. Returns `text` untouched when
    /// there is nothing to change.
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}

/// Keep only `range` of `text`, without allocating when the input is borrowed.
///
/// `range` must lie on char boundaries.
#[inline]
pub(crate) fn narrow(text: Cow<'_, str>, range: Range<usize>) -> Cow<'_, str> {
    if range.start == 0 && range.end == text.len() {
        return text;
    }
    match text {
        Cow::Borrowed(s) => Cow::Borrowed(&s[range]),
        Cow::Owned(mut s) => {
            s.truncate(range.end);
            s.drain(..range.start);
            Cow::Owned(s)
        }
    }
}

/// Byte range left after stripping leading and trailing chars matching `strip`.
#[inline]
pub(crate) fn trimmed_range(text: &str, strip: impl Fn(char) -> bool) -> Range<usize> {
    let start = text.len() - text.trim_start_matches(&strip).len();
    let end = text.trim_end_matches(&strip).len().max(start);
    start..end
}
