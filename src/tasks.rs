//! Fixed-point composition of text processors.
//!
//! A [`Tasks`] applies its processors left to right, then repeats the whole
//! sequence until a pass leaves the text unchanged. Processors whose
//! [`once()`](TextProcessor::once) is `true` take part in the first pass only;
//! the remaining ones keep iterating to convergence.
//!
//! ```
//! use stp::{CutToFirstToken, TrimWhitespace, preset::REMOVE_PARENTHESES, tasks::Tasks};
//!
//! let label = Tasks::builder()
//!     .add(TrimWhitespace)
//!     .flatten(&REMOVE_PARENTHESES)
//!     .add(CutToFirstToken)
//!     .build();
//!
//! assert_eq!(label.process(" abc(123)\n"), "abc");
//! assert_eq!(label.process("(123)abc"), "abc");
//! ```
//!
//! # Termination
//!
//! [`Tasks::process`] does not bound the number of passes. Every processor is
//! expected to converge on its own output (be idempotent after one or two
//! applications); a processor that keeps growing or oscillating makes the
//! loop run forever. Callers composing untrusted processors should set a cap
//! with [`TasksBuilder::max_passes`] and use [`Tasks::try_process`].

use crate::processor::TextProcessor;
use smallvec::SmallVec;
use std::{borrow::Cow, fmt, num::NonZeroUsize, sync::Arc};
use thiserror::Error;
use tracing::{debug, trace, warn};

#[derive(Debug, Error)]
pub enum TasksError {
    #[error("text still changing after {passes} passes")]
    ConvergenceExceeded {
        passes: usize,
        /// Text as it stood after the last pass that ran.
        last: String,
    },
}

/// Ordered, shareable sequence of processors applied to a fixed point.
#[derive(Clone, Default)]
pub struct Tasks {
    processors: SmallVec<[Arc<dyn TextProcessor>; 8]>,
    max_passes: Option<NonZeroUsize>,
}

impl Tasks {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> TasksBuilder {
        TasksBuilder::default()
    }

    /// Extend the sequence in place. Later `process` calls see the new
    /// processors.
    pub fn append<I>(&mut self, processors: I) -> &mut Self
    where
        I: IntoIterator<Item = Arc<dyn TextProcessor>>,
    {
        self.processors.extend(processors);
        self
    }

    pub fn push<T: TextProcessor + 'static>(&mut self, processor: T) -> &mut Self {
        self.processors.push(Arc::new(processor));
        self
    }

    pub fn push_shared(&mut self, processor: Arc<dyn TextProcessor>) -> &mut Self {
        self.processors.push(processor);
        self
    }

    /// Append the processors of `other` (not `other` itself), sharing the
    /// same instances.
    pub fn extend_from(&mut self, other: &Tasks) -> &mut Self {
        self.processors.extend(other.processors.iter().cloned());
        self
    }

    pub fn processors(&self) -> &[Arc<dyn TextProcessor>] {
        &self.processors
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    pub fn max_passes(&self) -> Option<NonZeroUsize> {
        self.max_passes
    }

    /// Cap used by [`try_process`](Self::try_process) on passes that change
    /// the text; the confirming pass does not count. `0` removes the cap.
    pub fn set_max_passes(&mut self, max_passes: usize) -> &mut Self {
        self.max_passes = NonZeroUsize::new(max_passes);
        self
    }

    /// Run the pipeline until the text stops changing.
    ///
    /// Never fails and never consults [`max_passes`](Self::max_passes); see
    /// the module docs on termination.
    pub fn process<'a>(&self, text: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        match self.converge(text.into(), None) {
            Ok(text) => text,
            // Unreachable: no cap means no `ConvergenceExceeded`.
            Err(TasksError::ConvergenceExceeded { last, .. }) => Cow::Owned(last),
        }
    }

    /// Like [`process`](Self::process), but gives up with
    /// [`TasksError::ConvergenceExceeded`] once the configured pass cap is hit.
    pub fn try_process<'a>(
        &self,
        text: impl Into<Cow<'a, str>>,
    ) -> Result<Cow<'a, str>, TasksError> {
        self.converge(text.into(), self.max_passes)
    }

    /// Process each input independently, preserving order and length.
    pub fn process_all<I, S>(&self, inputs: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .map(|s| self.process(s.as_ref()).into_owned())
            .collect()
    }

    /// Bounded [`process_all`](Self::process_all); stops at the first input
    /// that does not converge within the cap.
    pub fn try_process_all<I, S>(&self, inputs: I) -> Result<Vec<String>, TasksError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .map(|s| self.try_process(s.as_ref()).map(Cow::into_owned))
            .collect()
    }

    fn converge<'a>(
        &self,
        text: Cow<'a, str>,
        limit: Option<NonZeroUsize>,
    ) -> Result<Cow<'a, str>, TasksError> {
        let mut current = text;
        // Snapshot of owned text; reused across passes so only growth allocates.
        let mut scratch = String::new();
        let mut pass = 0usize;
        loop {
            pass += 1;
            let first_pass = pass == 1;
            let borrowed_before = match &current {
                Cow::Borrowed(s) => Some(*s),
                Cow::Owned(s) => {
                    scratch.clear();
                    scratch.push_str(s);
                    None
                }
            };
            for processor in &self.processors {
                if first_pass || !processor.once() {
                    current = processor.process(current);
                }
            }
            trace!(pass, processors = self.processors.len(), "pass complete");

            let unchanged = match borrowed_before {
                Some(before) => current == before,
                None => *current == *scratch,
            };
            if unchanged {
                debug!(passes = pass, "converged");
                return Ok(current);
            }
            // `max` counts changing passes; the pass that confirms the
            // fixed point is free.
            if limit.is_some_and(|max| pass > max.get()) {
                warn!(passes = pass, "pass cap reached before convergence");
                return Err(TasksError::ConvergenceExceeded {
                    passes: pass,
                    last: current.into_owned(),
                });
            }
        }
    }
}

impl fmt::Debug for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tasks")
            .field(
                "processors",
                &self.processors.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .field("max_passes", &self.max_passes)
            .finish()
    }
}

impl FromIterator<Arc<dyn TextProcessor>> for Tasks {
    fn from_iter<I: IntoIterator<Item = Arc<dyn TextProcessor>>>(iter: I) -> Self {
        Self {
            processors: iter.into_iter().collect(),
            max_passes: None,
        }
    }
}

impl Extend<Arc<dyn TextProcessor>> for Tasks {
    fn extend<I: IntoIterator<Item = Arc<dyn TextProcessor>>>(&mut self, iter: I) {
        self.append(iter);
    }
}

#[derive(Default)]
pub struct TasksBuilder {
    tasks: Tasks,
}

impl TasksBuilder {
    pub fn add<T: TextProcessor + 'static>(mut self, processor: T) -> Self {
        self.tasks.push(processor);
        self
    }

    pub fn add_shared(mut self, processor: Arc<dyn TextProcessor>) -> Self {
        self.tasks.push_shared(processor);
        self
    }

    /// Splice in the processors of another pipeline.
    pub fn flatten(mut self, other: &Tasks) -> Self {
        self.tasks.extend_from(other);
        self
    }

    /// Cap on text-changing passes for the `try_*` entry points. `0` means
    /// unbounded.
    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.tasks.set_max_passes(max_passes);
        self
    }

    pub fn build(self) -> Tasks {
        self.tasks
    }
}

/// Build a [`Tasks`] from processors given by value.
///
/// ```
/// use stp::{CutToFirstToken, TrimWhitespace, tasks};
///
/// let t = tasks![TrimWhitespace, CutToFirstToken];
/// assert_eq!(t.len(), 2);
/// assert_eq!(t.process("  hello world"), "hello");
/// ```
#[macro_export]
macro_rules! tasks {
    () => {
        $crate::tasks::Tasks::new()
    };
    ($($processor:expr),+ $(,)?) => {{
        let mut tasks = $crate::tasks::Tasks::new();
        $( tasks.push($processor); )+
        tasks
    }};
}
