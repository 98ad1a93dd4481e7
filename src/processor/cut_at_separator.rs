use crate::processor::{TextProcessor, narrow};
use memchr::memmem::Finder;
use std::borrow::Cow;

/// Keeps everything before the first occurrence of a literal separator.
///
/// | input          | separator | output      |
/// |----------------|-----------|-------------|
/// | `"abc 123"`    | `" "`     | `"abc"`     |
/// | `" abc 123"`   | `" "`     | `""`        |
/// | `"abc"`        | `" "`     | `"abc"`     |
/// | anything       | `""`      | `""`        |
///
/// Runs once: a cut is a destructive narrowing, applied on the first pass only.
#[derive(Debug, Clone)]
pub struct CutAtSeparator {
    separator: String,
    finder: Finder<'static>,
}

impl CutAtSeparator {
    pub fn new(separator: impl Into<String>) -> Self {
        let separator: String = separator.into();
        let finder = Finder::new(separator.as_bytes()).into_owned();
        Self { separator, finder }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl TextProcessor for CutAtSeparator {
    fn name(&self) -> &'static str {
        "cut_at_separator"
    }

    #[inline]
    fn once(&self) -> bool {
        true
    }

    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        // A UTF-8 needle can only match at a char boundary of UTF-8 text.
        match self.finder.find(text.as_bytes()) {
            Some(index) => narrow(text, 0..index),
            None => text,
        }
    }
}

#[cfg(test)]
impl crate::testing::processor_contract::ProcessorTestConfig for CutAtSeparator {
    fn samples(&self) -> &'static [&'static str] {
        &["abc 123", " abc 123", "abc", "", "東京 タワー"]
    }

    fn should_pass_through(&self) -> &'static [&'static str] {
        &["hello", "test123", ""]
    }

    fn should_transform(&self) -> &'static [(&'static str, &'static str)] {
        &[("abc 123", "abc"), (" abc 123", ""), ("東京 タワー", "東京")]
    }
}
