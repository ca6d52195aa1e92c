//! Synchronous engine orchestrating the selection pipeline.

use std::io::Write;

use crate::config::{InputSpec, OutputSpec};
use crate::emit;
use crate::error::{PipelineError, Stage};
use crate::observer::ProgressObserver;
use crate::record::{ScoredRecord, parse_record};
use crate::select::TopSelector;
use crate::source::LineSource;

/// Engine running the full pipeline: lines → records → top-N → JSON.
///
/// The run is a single finite batch job. Any formatting failure aborts it
/// immediately; the output target is only opened after the entire input
/// parsed cleanly, so an aborted run emits zero output bytes.
pub struct SelectionEngine {
    input: InputSpec,
    output: OutputSpec,
    count: usize,
    observer: Box<dyn ProgressObserver>,
}

impl SelectionEngine {
    /// Create a new engine.
    pub fn new(
        input: InputSpec,
        output: OutputSpec,
        count: usize,
        observer: Box<dyn ProgressObserver>,
    ) -> Self {
        Self {
            input,
            output,
            count,
            observer,
        }
    }

    /// Get the input specification.
    pub fn input(&self) -> &InputSpec {
        &self.input
    }

    /// Get the output specification.
    pub fn output(&self) -> &OutputSpec {
        &self.output
    }

    /// Get the requested record count.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Run the pipeline to completion.
    ///
    /// On success the rendered output has been written to the target and
    /// the output list is returned. On failure the observer has seen
    /// `on_error` and nothing has been written.
    pub fn run(&mut self) -> Result<Vec<ScoredRecord>, PipelineError> {
        match self.run_inner() {
            Ok(list) => {
                self.observer.on_done(list.len());
                Ok(list)
            }
            Err(e) => {
                self.observer.on_error(&e);
                Err(e)
            }
        }
    }

    fn run_inner(&mut self) -> Result<Vec<ScoredRecord>, PipelineError> {
        let source = LineSource::open(self.input.provider.as_ref())?;
        self.observer.on_start(&self.input.raw);

        let mut selector = TopSelector::new(self.count);
        let mut line_no = 0u64;

        for line in source {
            line_no += 1;
            let line = line.map_err(|e| PipelineError::Io {
                stage: Stage::Read,
                target: self.input.raw.clone(),
                source: e,
            })?;

            if let Some(record) = parse_record(&line, line_no)? {
                selector.push(record);
                self.observer.on_record(selector.seen());
            }
        }

        let list = selector.into_sorted();
        let bytes = emit::render(&list)?;

        let mut writer = self.output.target.create().map_err(|e| PipelineError::Io {
            stage: Stage::Open,
            target: self.output.raw.clone(),
            source: e,
        })?;

        writer
            .write_all(&bytes)
            .and_then(|()| writer.flush())
            .map_err(|e| PipelineError::Io {
                stage: Stage::Write,
                target: self.output.raw.clone(),
                source: e,
            })?;

        Ok(list)
    }
}
