use crate::processor::{PatternError, TextProcessor};
use regex::Regex;
use std::borrow::Cow;
use tracing::debug;

/// Removes **every** non-overlapping match of a regular expression.
///
/// `regex` always replaces globally, so there is no "first match only" mode
/// to guard against.
///
/// ```
/// use std::borrow::Cow;
/// use stp::processor::{TextProcessor, remove_by_pattern::RemoveByPattern};
///
/// let digits = RemoveByPattern::new(r"\d+").unwrap();
/// assert_eq!(digits.process(Cow::Borrowed("a1b22c333")), "abc");
/// ```
#[derive(Debug, Clone)]
pub struct RemoveByPattern {
    regex: Regex,
}

impl RemoveByPattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern).map_err(|source| PatternError::Invalid {
            pattern: pattern.to_owned(),
            source,
        })?;
        debug!(pattern, "compiled removal pattern");
        Ok(Self { regex })
    }

    pub fn from_regex(regex: Regex) -> Self {
        Self { regex }
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl TextProcessor for RemoveByPattern {
    fn name(&self) -> &'static str {
        "remove_by_pattern"
    }

    #[inline]
    fn once(&self) -> bool {
        false
    }

    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let removed = match self.regex.replace_all(&text, "") {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        match removed {
            Some(s) if s.len() != text.len() => Cow::Owned(s),
            // Only empty matches – content is unchanged.
            _ => text,
        }
    }
}

#[cfg(test)]
impl crate::testing::processor_contract::ProcessorTestConfig for RemoveByPattern {
    fn samples(&self) -> &'static [&'static str] {
        &["abc123", "123abc456", "no digits", "", "٣٤٥ arabic-indic"]
    }

    fn should_pass_through(&self) -> &'static [&'static str] {
        &["hello", "no digits", "abc def", ""]
    }

    fn should_transform(&self) -> &'static [(&'static str, &'static str)] {
        &[("abc123", "abc"), ("1a2b3c", "abc"), ("123", "")]
    }
}
