//! Progress observation hooks for the selection pipeline.
//!
//! The engine reports checkpoints (start, per-record progress, done,
//! error) to an injected observer instead of threading UI state through
//! the stages. Observers never influence the data flow.

use crate::error::PipelineError;

/// Checkpoint hooks invoked by [`SelectionEngine`](crate::SelectionEngine).
///
/// All methods default to no-ops so implementors only override what they
/// care about.
pub trait ProgressObserver: Send {
    /// The input stream has been opened.
    fn on_start(&mut self, _input: &str) {}

    /// A record was accepted by the selector. `seen` counts accepted
    /// records so far, starting at 1.
    fn on_record(&mut self, _seen: u64) {}

    /// The run finished; `emitted` is the output list length.
    fn on_done(&mut self, _emitted: usize) {}

    /// The run aborted with the given error.
    fn on_error(&mut self, _error: &PipelineError) {}
}

/// Observer that ignores every checkpoint. The engine default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ProgressObserver for NullObserver {}

/// Observer that forwards checkpoints to `tracing` events.
///
/// Per-record progress is sampled so large inputs do not flood the log.
#[derive(Debug, Clone)]
pub struct TraceObserver {
    every: u64,
}

impl TraceObserver {
    pub fn new() -> Self {
        Self { every: 100_000 }
    }

    /// Emit a progress event every `every` accepted records.
    pub fn with_interval(every: u64) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl Default for TraceObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for TraceObserver {
    fn on_start(&mut self, input: &str) {
        tracing::info!(input, "processing data file");
    }

    fn on_record(&mut self, seen: u64) {
        if seen % self.every == 0 {
            tracing::debug!(records = seen, "streaming records");
        }
    }

    fn on_done(&mut self, emitted: usize) {
        tracing::info!(emitted, "selection complete");
    }

    fn on_error(&mut self, error: &PipelineError) {
        tracing::error!(%error, "pipeline aborted");
    }
}
