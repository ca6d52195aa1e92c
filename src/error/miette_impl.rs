//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::PipelineError;

/// A diagnostic wrapper for pipeline errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct PipelineDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<PipelineError> for PipelineDiagnostic {
    fn from(e: PipelineError) -> Self {
        let (message, help) = match &e {
            PipelineError::Resource { path, .. } => (
                format!("cannot read data file '{path}'"),
                "Check that the data file path exists and is readable",
            ),
            PipelineError::Formatting { line, .. } => (
                format!("record format violated on line {line}"),
                "Each line must look like `<score>: {\"id\": \"...\", ...}`",
            ),
            PipelineError::Io { stage, target, .. } => (
                format!("[{stage}] failed on '{target}'"),
                "Check your I/O arguments",
            ),
            PipelineError::Render { .. } => (
                "cannot render the output list".to_string(),
                "Check your I/O arguments",
            ),
        };

        PipelineDiagnostic {
            message,
            source: Some(Box::new(e)),
            help: Some(help.into()),
            severity: Severity::Error,
        }
    }
}

impl From<PipelineError> for miette::Report {
    fn from(e: PipelineError) -> Self {
        miette::Report::new(PipelineDiagnostic::from(e))
    }
}
