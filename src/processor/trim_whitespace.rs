use crate::processor::{TextProcessor, narrow, trimmed_range};
use std::borrow::Cow;

/// Strips leading and trailing Unicode whitespace (`White_Space=Yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TrimWhitespace;

impl TrimWhitespace {
    #[inline(always)]
    fn needs_trim(text: &str) -> bool {
        // Fast ASCII path
        let b = text.as_bytes();
        if b.first().is_some_and(u8::is_ascii_whitespace)
            || b.last().is_some_and(u8::is_ascii_whitespace)
        {
            return true;
        }
        // Fallback for Unicode whitespace
        text.chars().next().is_some_and(char::is_whitespace)
            || text.chars().next_back().is_some_and(char::is_whitespace)
    }
}

impl TextProcessor for TrimWhitespace {
    fn name(&self) -> &'static str {
        "trim_whitespace"
    }

    #[inline]
    fn once(&self) -> bool {
        false
    }

    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !Self::needs_trim(&text) {
            return text;
        }
        let range = trimmed_range(&text, char::is_whitespace);
        narrow(text, range)
    }
}

#[cfg(test)]
impl crate::testing::processor_contract::ProcessorTestConfig for TrimWhitespace {
    fn samples(&self) -> &'static [&'static str] {
        &[
            "Hello World 123",
            " déjà-vu ",
            "",
            " \t\n hello \r\n ",
            "\u{3000}こんにちは\u{3000}",
            "a b c",
        ]
    }

    fn should_pass_through(&self) -> &'static [&'static str] {
        &["hello", "a b c", "abc def", ""]
    }

    fn should_transform(&self) -> &'static [(&'static str, &'static str)] {
        &[
            (" abc", "abc"),
            ("abc\n", "abc"),
            ("\u{3000}こんにちは\u{3000}", "こんにちは"),
            ("\u{00A0}nbsp\u{202F}", "nbsp"),
            (" \t ", ""),
        ]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_ascii_and_unicode_edges() {
        let t = TrimWhitespace;
        assert_eq!(t.process(Cow::Borrowed("")), "");
        assert_eq!(t.process(Cow::Borrowed(" abc")), "abc");
        assert_eq!(t.process(Cow::Borrowed("abc\n")), "abc");
        assert_eq!(t.process(Cow::Borrowed("a b c")), "a b c");
    }

    #[test]
    fn zero_copy_no_whitespace() {
        let input = "hello";
        let out = TrimWhitespace.process(Cow::Borrowed(input));
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn borrowed_result_points_into_input() {
        let input = "  hello  ";
        let out = TrimWhitespace.process(Cow::Borrowed(input));
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input[2..].as_ptr()));
    }
}
