use crate::processor::{TextProcessor, narrow, trimmed_range};
use smallvec::SmallVec;
use std::borrow::Cow;

/// Strips leading and trailing runs of characters drawn from a cutset.
///
/// Every char of the cutset string is taken literally: `"a-z"` means the three
/// chars `a`, `-` and `z`, not a range. An empty cutset strips nothing.
#[derive(Debug, Clone)]
pub struct TrimCharset {
    cutset: SmallVec<[char; 8]>,
}

impl TrimCharset {
    pub fn new(cutset: &str) -> Self {
        let mut chars: SmallVec<[char; 8]> = cutset.chars().collect();
        chars.sort_unstable();
        chars.dedup();
        Self { cutset: chars }
    }

    pub fn cutset(&self) -> &[char] {
        &self.cutset
    }

    #[inline(always)]
    fn contains(&self, c: char) -> bool {
        self.cutset.binary_search(&c).is_ok()
    }
}

impl TextProcessor for TrimCharset {
    fn name(&self) -> &'static str {
        "trim_charset"
    }

    #[inline]
    fn once(&self) -> bool {
        false
    }

    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if self.cutset.is_empty() {
            return text;
        }
        let range = trimmed_range(&text, |c| self.contains(c));
        narrow(text, range)
    }
}

#[cfg(test)]
impl crate::testing::processor_contract::ProcessorTestConfig for TrimCharset {
    fn samples(&self) -> &'static [&'static str] {
        &[" abc 123 ", " abc 123\n", "\n\n", "", "\u{3000}x\u{3000}"]
    }

    fn should_transform(&self) -> &'static [(&'static str, &'static str)] {
        &[
            (" abc 123 ", "abc 123"),
            (" abc 123\n", "abc 123"),
            ("\n \n", ""),
        ]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn trim(cutset: &str, input: &str) -> String {
        TrimCharset::new(cutset)
            .process(Cow::Borrowed(input))
            .into_owned()
    }

    #[test]
    fn strips_only_configured_chars() {
        assert_eq!(trim(" ", " abc 123 "), "abc 123");
        assert_eq!(trim(" ", " abc 123\n"), "abc 123\n");
        assert_eq!(trim(" \n", " abc 123\n"), "abc 123");
    }

    #[test]
    fn empty_cutset_is_identity() {
        assert_eq!(trim("", ""), "");
        let input = "  padded  ";
        let out = TrimCharset::new("").process(Cow::Borrowed(input));
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn interior_chars_untouched() {
        assert_eq!(trim("-", "--a-b--"), "a-b");
    }

    #[test]
    fn cutset_is_literal_not_a_class() {
        assert_eq!(trim("a-c", "bab"), "bab");
        assert_eq!(trim("a-c", "-a-"), "");
        assert_eq!(TrimCharset::new("cab-a").cutset(), &['-', 'a', 'b', 'c']);
    }

    #[test]
    fn full_width_cutset() {
        assert_eq!(trim("【】", "【東京】"), "東京");
    }
}
