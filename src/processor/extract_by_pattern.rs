use crate::processor::{PatternError, TextProcessor, narrow};
use regex::Regex;
use std::borrow::Cow;
use tracing::debug;

/// Keeps only the **first** match of a regular expression, or `""` when the
/// pattern does not match at all.
#[derive(Debug, Clone)]
pub struct ExtractByPattern {
    regex: Regex,
}

impl ExtractByPattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern).map_err(|source| PatternError::Invalid {
            pattern: pattern.to_owned(),
            source,
        })?;
        debug!(pattern, "compiled extraction pattern");
        Ok(Self { regex })
    }

    pub fn from_regex(regex: Regex) -> Self {
        Self { regex }
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl TextProcessor for ExtractByPattern {
    fn name(&self) -> &'static str {
        "extract_by_pattern"
    }

    #[inline]
    fn once(&self) -> bool {
        false
    }

    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        match self.regex.find(&text).map(|m| m.range()) {
            Some(range) => narrow(text, range),
            None => Cow::Borrowed(""),
        }
    }
}

#[cfg(test)]
impl crate::testing::processor_contract::ProcessorTestConfig for ExtractByPattern {
    fn samples(&self) -> &'static [&'static str] {
        &["Order 123456 and 789", "all lowercase", "42", "", "x ٣٤ y"]
    }

    fn should_pass_through(&self) -> &'static [&'static str] {
        &["123", "42", ""]
    }

    fn should_transform(&self) -> &'static [(&'static str, &'static str)] {
        &[("Order 123456 and 789", "123456"), ("no digits", "")]
    }
}
