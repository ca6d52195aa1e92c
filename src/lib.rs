//! # topscores
//!
//! Streaming top-N selection over scored record files.
//!
//! ## Overview
//!
//! topscores ingests a text file of newline-delimited scored records
//! (each line a decimal score, a colon, and a JSON object carrying at
//! least an `id` field) and emits the N records with the highest scores,
//! highest first, as formatted JSON:
//!
//! ```text
//! 5: {"id": "a", "type": "purple"}
//! 3: {"id": "b", "type": "black"}
//! 9: {"id": "c", "type": "purple"}
//! ```
//!
//! The crate provides:
//! - **Streaming ingestion**: lines are parsed one at a time, never
//!   buffering the whole file
//! - **Bounded selection**: a size-N min-heap keeps memory at O(N) for
//!   any input size
//! - **Fail-fast formatting**: one malformed record aborts the run with
//!   no partial output
//! - **Pluggable I/O**: `InputProvider`/`OutputTarget` seams for files,
//!   stdin/stdout, and in-memory buffers
//! - **Progress observation**: checkpoint hooks decoupled from the data
//!   flow
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use topscores::TopScoresBuilder;
//!
//! fn main() -> Result<(), topscores::PipelineError> {
//!     let list = TopScoresBuilder::new()
//!         .input("score_recs.data")
//!         .output("-") // stdout
//!         .count(5)
//!         .build()
//!         .run()?;
//!
//!     eprintln!("selected {} records", list.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `gen` - Synthetic data generator and the `topscores_gen` binary
//!   (enabled by default)
//! - `miette` - Pretty error reporting with miette
//!
//! ## Record format & semantics
//!
//! - A line splits at the first `:` followed (after optional whitespace)
//!   by `{`; everything before is the score, everything from the brace on
//!   is the payload object.
//! - Only the payload's top-level `id` is read; all other fields are
//!   ignored. A missing, null, empty, or non-string `id` is a fatal
//!   formatting error (exit code 2), as is a non-numeric score.
//! - Empty lines are skipped silently.
//! - Ties on equal scores resolve to first-seen order; see
//!   [`TopSelector`] for the exact rule.

// Core modules
pub mod builder;
pub mod cli;
pub mod config;
pub mod emit;
pub mod engine;
pub mod error;
pub mod io;
pub mod observer;
pub mod record;
pub mod select;
pub mod source;

// Generator (feature-gated)
#[cfg(feature = "gen")]
pub mod generator;

// Re-exports for convenience
pub use builder::TopScoresBuilder;
pub use config::{InputSpec, OutputSpec};
pub use engine::SelectionEngine;
pub use error::{
    EXIT_FORMATTING, EXIT_RESOURCE, EXIT_SUCCESS, FormattingErrorKind, PipelineError, Stage,
};
pub use io::{
    FileInput, FileOutput, InMemorySink, InMemorySource, InputProvider, OutputTarget, StdinInput,
    StdoutOutput,
};
pub use observer::{NullObserver, ProgressObserver, TraceObserver};
pub use record::ScoredRecord;
pub use select::TopSelector;
pub use source::LineSource;

#[cfg(feature = "gen")]
pub use generator::GeneratorConfig;

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::PipelineDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
