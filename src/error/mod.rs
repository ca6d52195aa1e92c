//! Error types and exit-code mapping for the selection pipeline.
//!
//! This module provides:
//! - `Stage`: Indicates where an I/O error occurred in the pipeline
//! - `FormattingErrorKind`: The ways a record can violate the input format
//! - `PipelineError`: The pipeline error taxonomy with process exit codes

use std::fmt;
use std::io;

use thiserror::Error;

/// Process exit code for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Process exit code when the input cannot be opened or read.
pub const EXIT_RESOURCE: i32 = 1;
/// Process exit code when a record violates the input format.
pub const EXIT_FORMATTING: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while opening the I/O stream
    Open,
    /// Error while reading lines from the input
    Read,
    /// Error while writing the rendered output
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Open => write!(f, "Open"),
            Stage::Read => write!(f, "Read"),
            Stage::Write => write!(f, "Write"),
        }
    }
}

/// The ways a single record can violate the `<score>: <JSON object>` format.
#[derive(Debug, Error)]
pub enum FormattingErrorKind {
    /// No `:` separator followed by a JSON object was found on the line
    #[error("no `: {{...}}` payload found")]
    MissingPayload,

    /// The payload is not a parseable JSON object
    #[error("payload is not a JSON object: {0}")]
    Payload(#[source] serde_json::Error),

    /// The payload object has no `id` key (or it is null)
    #[error("payload has no usable `id` field")]
    MissingId,

    /// The payload `id` is present but empty
    #[error("payload `id` is empty")]
    EmptyId,

    /// The score before the separator is not a decimal number
    #[error("score `{0}` is not a number")]
    InvalidScore(String),
}

/// Errors raised by the selection pipeline.
///
/// Formatting errors are fatal to the whole run: one bad record invalidates
/// the batch and no partial output is emitted. Everything else is surfaced
/// as a resource failure. No error is retried.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input path does not resolve to a readable resource
    #[error("cannot open input '{path}': {source}")]
    Resource {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A record violated the input format (1-based line number)
    #[error("line {line}: {kind}")]
    Formatting {
        line: u64,
        #[source]
        kind: FormattingErrorKind,
    },

    /// An I/O failure mid-stream
    #[error("[{stage}] {target}: {source}")]
    Io {
        stage: Stage,
        target: String,
        #[source]
        source: io::Error,
    },

    /// The output list could not be serialized
    #[error("cannot render output: {source}")]
    Render {
        #[source]
        source: serde_json::Error,
    },
}

impl PipelineError {
    pub(crate) fn formatting(line: u64, kind: FormattingErrorKind) -> Self {
        PipelineError::Formatting { line, kind }
    }

    /// Map this error onto the process exit code contract.
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::Formatting { .. } => EXIT_FORMATTING,
            _ => EXIT_RESOURCE,
        }
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
