//! Builder for creating SelectionEngine instances.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{InputSpec, OutputSpec};
use crate::engine::SelectionEngine;
use crate::io::{FileInput, FileOutput, InputProvider, OutputTarget, StdinInput, StdoutOutput};
use crate::observer::{NullObserver, ProgressObserver};

/// Builder resolving CLI-style arguments into a [`SelectionEngine`].
///
/// Input and output arguments follow the usual convention: `-` means
/// stdin/stdout, anything else is a file path. Defaults: stdin in, stdout
/// out, count 1, no observer.
pub struct TopScoresBuilder {
    input: Option<InputSpec>,
    output: Option<OutputSpec>,
    count: usize,
    observer: Box<dyn ProgressObserver>,
}

impl TopScoresBuilder {
    pub fn new() -> Self {
        Self {
            input: None,
            output: None,
            count: 1,
            observer: Box::new(NullObserver),
        }
    }

    /// Set the input from a CLI argument (`-` for stdin, else a path).
    pub fn input(mut self, arg: impl Into<String>) -> Self {
        let raw = arg.into();
        let provider: Arc<dyn InputProvider> = if raw == "-" {
            Arc::new(StdinInput::new())
        } else {
            Arc::new(FileInput::new(PathBuf::from(&raw)))
        };
        self.input = Some(InputSpec::new(raw, provider));
        self
    }

    /// Set a pre-built input specification.
    pub fn input_spec(mut self, spec: InputSpec) -> Self {
        self.input = Some(spec);
        self
    }

    /// Set the output from a CLI argument (`-` for stdout, else a path).
    pub fn output(mut self, arg: impl Into<String>) -> Self {
        let raw = arg.into();
        let target: Arc<dyn OutputTarget> = if raw == "-" {
            Arc::new(StdoutOutput::new())
        } else {
            Arc::new(FileOutput::new(PathBuf::from(&raw)))
        };
        self.output = Some(OutputSpec::new(raw, target));
        self
    }

    /// Set a pre-built output specification.
    pub fn output_spec(mut self, spec: OutputSpec) -> Self {
        self.output = Some(spec);
        self
    }

    /// Set the number of top records to select. Values below 1 are
    /// normalized to 1.
    pub fn count(mut self, n: usize) -> Self {
        self.count = n.max(1);
        self
    }

    /// Install a progress observer.
    pub fn observer(mut self, observer: Box<dyn ProgressObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Build the engine, applying the stdin/stdout defaults.
    pub fn build(self) -> SelectionEngine {
        let input = self
            .input
            .unwrap_or_else(|| InputSpec::new("-", Arc::new(StdinInput::new())));
        let output = self
            .output
            .unwrap_or_else(|| OutputSpec::new("-", Arc::new(StdoutOutput::new())));

        SelectionEngine::new(input, output, self.count, self.observer)
    }
}

impl Default for TopScoresBuilder {
    fn default() -> Self {
        TopScoresBuilder::new()
    }
}
