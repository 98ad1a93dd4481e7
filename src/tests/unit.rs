#[cfg(test)]
mod unit_tests {

    use crate::{
        CUT_SPACE, CutAtSeparator, ExtractByPattern, REMOVE_PARENTHESES, RemoveByPattern,
        TRIM_SPACE, Tasks, TextProcessor, TrimCharset,
    };
    use std::borrow::Cow;

    fn run<P: TextProcessor>(p: &P, input: &str) -> String {
        p.process(Cow::Borrowed(input)).into_owned()
    }

    #[test]
    fn remove_by_pattern() {
        assert_eq!(run(&RemoveByPattern::new("").unwrap(), ""), "");
        assert_eq!(run(&RemoveByPattern::new(r"\d+").unwrap(), "abc123"), "abc");
        assert_eq!(run(&RemoveByPattern::new(r"\d+$").unwrap(), "123abc456"), "123abc");
    }

    #[test]
    fn extract_by_pattern() {
        let cases = [
            (r"\d+", "Order 123456 and 789", "123456"),
            (r"[A-Z]+", "all lowercase", ""),
            (r"\w+$", "File is ready.txt", "txt"),
            (r"[\w.]+@\w+\.com", "Contact user@domain.com now!", "user@domain.com"),
            (r"\w+", "", ""),
            (r"\w+", "first second third", "first"),
        ];
        for (pattern, input, expected) in cases {
            let p = ExtractByPattern::new(pattern).unwrap();
            assert_eq!(run(&p, input), expected, "pattern `{pattern}` on `{input}`");
        }
    }

    #[test]
    fn cut() {
        assert_eq!(run(&CutAtSeparator::new(""), ""), "");
        assert_eq!(run(&CutAtSeparator::new(" "), "abc 123"), "abc");
        assert_eq!(run(&CutAtSeparator::new(" "), " abc 123"), "");
        assert_eq!(run(&CutAtSeparator::new("abc"), "123abc456"), "123");
    }

    #[test]
    fn trim() {
        assert_eq!(run(&TrimCharset::new(""), ""), "");
        assert_eq!(run(&TrimCharset::new(" "), " abc 123 "), "abc 123");
        assert_eq!(run(&TrimCharset::new(" "), " abc 123\n"), "abc 123\n");
        assert_eq!(run(&TrimCharset::new(" \n"), " abc 123\n"), "abc 123");
    }

    #[test]
    fn trim_space() {
        assert_eq!(run(&TRIM_SPACE, ""), "");
        assert_eq!(run(&TRIM_SPACE, " abc"), "abc");
        assert_eq!(run(&TRIM_SPACE, "abc\n"), "abc");
        assert_eq!(run(&TRIM_SPACE, "a b c"), "a b c");
    }

    #[test]
    fn cut_space() {
        assert_eq!(run(&CUT_SPACE, ""), "");
        assert_eq!(run(&CUT_SPACE, " abc"), "abc");
        assert_eq!(run(&CUT_SPACE, "abc def"), "abc");
        assert_eq!(run(&CUT_SPACE, "abc\ndef"), "abc");
    }

    #[test]
    fn remove_parentheses() {
        assert_eq!(REMOVE_PARENTHESES.process(""), "");
        assert_eq!(REMOVE_PARENTHESES.process("abc"), "abc");
        assert_eq!(REMOVE_PARENTHESES.process("abc（123）"), "abc");
        assert_eq!(REMOVE_PARENTHESES.process("abc（123)"), "abc（123)");
        assert_eq!(REMOVE_PARENTHESES.process("abc(123)def"), "abcdef");
    }

    #[test]
    fn once_flags() {
        assert!(CutAtSeparator::new(" ").once());
        assert!(CUT_SPACE.once());
        assert!(!TRIM_SPACE.once());
        assert!(!TrimCharset::new(" ").once());
        assert!(!RemoveByPattern::new("x").unwrap().once());
        assert!(!ExtractByPattern::new("x").unwrap().once());
    }

    #[test]
    fn zero_copy_through_converged_pipeline() {
        let tasks = Tasks::builder()
            .add(TRIM_SPACE)
            .flatten(&REMOVE_PARENTHESES)
            .add(CUT_SPACE)
            .build();
        let input = "clean";
        let out = tasks.process(input);
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }
}
