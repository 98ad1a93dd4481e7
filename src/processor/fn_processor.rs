use crate::processor::TextProcessor;
use std::borrow::Cow;
use std::fmt;

/// Ad-hoc processor wrapping a plain `Fn(&str) -> String`.
///
/// The closure must be pure: the engine may call it many times per input
/// and expects it to settle on a fixed point.
pub struct FnProcessor<F> {
    name: &'static str,
    once: bool,
    f: F,
}

impl<F> FnProcessor<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    pub fn new(once: bool, f: F) -> Self {
        Self::named("fn", once, f)
    }

    pub fn named(name: &'static str, once: bool, f: F) -> Self {
        Self { name, once, f }
    }
}

impl<F> fmt::Debug for FnProcessor<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProcessor")
            .field("name", &self.name)
            .field("once", &self.once)
            .finish_non_exhaustive()
    }
}

impl<F> TextProcessor for FnProcessor<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    fn once(&self) -> bool {
        self.once
    }

    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let out = (self.f)(&text);
        if out == *text { text } else { Cow::Owned(out) }
    }
}

#[cfg(test)]
impl<F> crate::testing::processor_contract::ProcessorTestConfig for FnProcessor<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn should_pass_through(&self) -> &'static [&'static str] {
        &["hello", "world", "abc def", ""]
    }
}
