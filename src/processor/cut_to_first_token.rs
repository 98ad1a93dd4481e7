use crate::processor::{TextProcessor, narrow};
use std::borrow::Cow;

/// Keeps the first maximal run of non-whitespace characters, or `""` when the
/// input is empty or all whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct CutToFirstToken;

impl TextProcessor for CutToFirstToken {
    fn name(&self) -> &'static str {
        "cut_to_first_token"
    }

    #[inline]
    fn once(&self) -> bool {
        true
    }

    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let Some(start) = text.find(|c: char| !c.is_whitespace()) else {
            return Cow::Borrowed("");
        };
        let end = text[start..]
            .find(char::is_whitespace)
            .map_or(text.len(), |len| start + len);
        narrow(text, start..end)
    }
}

#[cfg(test)]
impl crate::testing::processor_contract::ProcessorTestConfig for CutToFirstToken {
    fn samples(&self) -> &'static [&'static str] {
        &["abc def", " abc", "abc\ndef", "", "   ", "東京\u{3000}タワー"]
    }

    fn should_pass_through(&self) -> &'static [&'static str] {
        &["hello", "test123", ""]
    }

    fn should_transform(&self) -> &'static [(&'static str, &'static str)] {
        &[
            (" abc", "abc"),
            ("abc def", "abc"),
            ("abc\ndef", "abc"),
            ("\t\n", ""),
            ("東京\u{3000}タワー", "東京"),
        ]
    }
}
