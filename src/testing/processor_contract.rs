use crate::processor::TextProcessor;
use std::borrow::Cow;

/// Trait that processors implement to opt into the universal test suite.
///
/// Methods take `&self` because most processors are configured (pattern,
/// separator, cutset) and their samples depend on that configuration.
pub trait ProcessorTestConfig: TextProcessor {
    /// General samples (may or may not trigger changes).
    fn samples(&self) -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", ""]
    }

    /// Samples that must come back unchanged and still borrowed.
    fn should_pass_through(&self) -> &'static [&'static str] {
        &["hello", "world", "test123", ""]
    }

    /// Input/output pairs that verify known transformations.
    fn should_transform(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Whether `process(process(s)) == process(s)` is expected to hold.
    fn idempotent(&self) -> bool {
        true
    }
}

/// Assert that a processor satisfies every universal contract.
///
/// 1. `zero_copy_when_unchanged` → unchanged output is the borrowed input
/// 2. `once_is_constant` → `once()` never flips between calls
/// 3. `processor_is_idempotent` → applying twice yields the same as once
/// 4. `handles_empty_string` → `""` never panics
/// 5. `no_panic_on_mixed_scripts`
/// 6. `transforms_as_expected` → `should_transform` pairs hold
#[macro_export]
macro_rules! assert_processor_contract {
    ($processor:expr) => {{
        let processor = $processor;
        $crate::testing::processor_contract::zero_copy_when_unchanged(&processor);
        $crate::testing::processor_contract::once_is_constant(&processor);
        $crate::testing::processor_contract::processor_is_idempotent(&processor);
        $crate::testing::processor_contract::handles_empty_string(&processor);
        $crate::testing::processor_contract::no_panic_on_mixed_scripts(&processor);
        $crate::testing::processor_contract::transforms_as_expected(&processor);
    }};
}

pub fn zero_copy_when_unchanged<P: ProcessorTestConfig>(processor: &P) {
    for &input in processor.should_pass_through() {
        let out = processor.process(Cow::Borrowed(input));
        assert_eq!(out.as_ref(), input, "`{}` changed `{input}`", processor.name());
        assert!(
            matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr() || input.is_empty()),
            "zero-copy violated by `{}` on pass-through sample `{input}`",
            processor.name()
        );
    }

    // Any sample whose output equals its input must also come back borrowed.
    for &input in processor.samples() {
        let out = processor.process(Cow::Borrowed(input));
        if out == input && !input.is_empty() {
            assert!(
                matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()),
                "`{}` allocated for unchanged sample `{input}`",
                processor.name()
            );
        }
    }
}

pub fn once_is_constant<P: ProcessorTestConfig>(processor: &P) {
    let before = processor.once();
    for &input in processor.samples() {
        let _ = processor.process(Cow::Borrowed(input));
        assert_eq!(
            before,
            processor.once(),
            "`{}` flipped its once() flag after processing",
            processor.name()
        );
    }
}

pub fn processor_is_idempotent<P: ProcessorTestConfig>(processor: &P) {
    if !processor.idempotent() {
        return;
    }
    for &input in processor.samples() {
        let once = processor.process(Cow::Borrowed(input));
        let twice = processor.process(once.clone());
        assert_eq!(
            once,
            twice,
            "`{}` is not idempotent on `{input}`",
            processor.name()
        );
    }
}

pub fn handles_empty_string<P: ProcessorTestConfig>(processor: &P) {
    let out = processor.process(Cow::Borrowed(""));
    assert_eq!(out.as_ref(), "", "`{}` invented text from ``", processor.name());
    let out = processor.process(Cow::Owned(String::new()));
    assert_eq!(out.as_ref(), "");
}

pub fn no_panic_on_mixed_scripts<P: ProcessorTestConfig>(processor: &P) {
    let _ = processor.process(Cow::Borrowed(
        "Hello 世界 русский Türkçe العربية （简体）(中文)",
    ));
    let _ = processor.process(Cow::Owned("\u{3000}\u{00A0}ß\u{200B} ".to_string()));
}

pub fn transforms_as_expected<P: ProcessorTestConfig>(processor: &P) {
    for &(input, expected) in processor.should_transform() {
        let borrowed = processor.process(Cow::Borrowed(input));
        assert_eq!(borrowed.as_ref(), expected, "`{}` on `{input}`", processor.name());
        // Owned input must agree with the borrowed path.
        let owned = processor.process(Cow::Owned(input.to_owned()));
        assert_eq!(owned.as_ref(), expected, "`{}` on owned `{input}`", processor.name());
    }
}
