//! Hook for external script/orthography converters (e.g. Simplified ↔
//! Traditional Chinese).
//!
//! No converter ships with this crate. A conversion library hands out a
//! [`ConvertText`] for a pair of [`Locale`]s, and [`processor`] turns it into
//! an always-on pipeline step.

use crate::processor::fn_processor::FnProcessor;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Converter produced by an external locale-conversion service.
pub type ConvertText = Box<dyn Fn(&str) -> String + Send + Sync>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("unknown locale code `{0}`")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Simplified Chinese (Mainland China).
    Cn,
    /// Traditional Chinese (Taiwan).
    Tw,
    /// Traditional Chinese (Taiwan) with phrase conversion.
    Twp,
    /// Traditional Chinese (Hong Kong).
    Hk,
    /// Japanese Shinjitai.
    Jp,
    /// Traditional Chinese (OpenCC standard).
    T,
}

impl Locale {
    pub const ALL: [Locale; 6] = [
        Locale::Cn,
        Locale::Tw,
        Locale::Twp,
        Locale::Hk,
        Locale::Jp,
        Locale::T,
    ];

    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        match self {
            Locale::Cn => "cn",
            Locale::Tw => "tw",
            Locale::Twp => "twp",
            Locale::Hk => "hk",
            Locale::Jp => "jp",
            Locale::T => "t",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| LocaleError::Unknown(s.to_owned()))
    }
}

/// Source and target locale requested from a converter. `None` leaves the
/// choice to the conversion service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConverterOptions {
    pub from: Option<Locale>,
    pub to: Option<Locale>,
}

impl ConverterOptions {
    pub fn new(from: Locale, to: Locale) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }
}

/// Wrap a converter as a pipeline step re-applied on every pass.
pub fn processor(convert: ConvertText) -> FnProcessor<ConvertText> {
    FnProcessor::named("convert_locale", false, convert)
}
