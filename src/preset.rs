//! Shared processors and ready-made pipelines.
//!
//! Everything here is immutable and safe to share between threads and
//! between pipelines.

use crate::{
    processor::{
        cut_to_first_token::CutToFirstToken, remove_by_pattern::RemoveByPattern,
        trim_whitespace::TrimWhitespace,
    },
    tasks::Tasks,
};
use once_cell::sync::Lazy;

/// Trims leading/trailing Unicode whitespace.
pub const TRIM_SPACE: TrimWhitespace = TrimWhitespace;

/// Keeps only the first whitespace-delimited token.
pub const CUT_SPACE: CutToFirstToken = CutToFirstToken;

/// Removes ASCII `(...)` and full-width `（...）` groups.
///
/// Matching is non-nested: a group ends at the nearest closing bracket of the
/// same width, and a full-width opener never pairs with an ASCII closer.
/// Nested groups are peeled one layer per convergence pass.
pub static REMOVE_PARENTHESES: Lazy<Tasks> = Lazy::new(|| {
    let ascii = RemoveByPattern::new(r"\([^)]*\)")
        .expect("ASCII parentheses pattern failed to compile – this is a bug");
    let full_width = RemoveByPattern::new(r"（[^）]*）")
        .expect("full-width parentheses pattern failed to compile – this is a bug");
    Tasks::builder().add(ascii).add(full_width).build()
});

/// Trim, then drop parenthetical annotations. Interior spacing is kept.
pub fn strip_annotations() -> Tasks {
    Tasks::builder()
        .add(TRIM_SPACE)
        .flatten(&REMOVE_PARENTHESES)
        .add(TRIM_SPACE)
        .build()
}

/// Reduce a noisy label to its first bare token: trim, drop parenthetical
/// annotations, keep the first whitespace-delimited word.
pub fn clean_label() -> Tasks {
    Tasks::builder()
        .add(TRIM_SPACE)
        .flatten(&REMOVE_PARENTHESES)
        .add(CUT_SPACE)
        .build()
}
