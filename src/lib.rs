pub mod locale;
pub mod preset;
pub mod processor;
pub mod tasks;

#[cfg(test)]
pub(crate) mod testing {
    pub mod processor_contract;
}

pub use preset::{CUT_SPACE, REMOVE_PARENTHESES, TRIM_SPACE};
pub use processor::cut_at_separator::CutAtSeparator;
pub use processor::cut_to_first_token::CutToFirstToken;
pub use processor::extract_by_pattern::ExtractByPattern;
pub use processor::fn_processor::FnProcessor;
pub use processor::remove_by_pattern::RemoveByPattern;
pub use processor::trim_charset::TrimCharset;
pub use processor::trim_whitespace::TrimWhitespace;
pub use processor::{PatternError, TextProcessor};
pub use tasks::{Tasks, TasksBuilder, TasksError};
