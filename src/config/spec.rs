//! Input and output specifications.

use std::sync::Arc;

use crate::io::{InputProvider, OutputTarget};

/// Specification for the input source.
#[derive(Debug, Clone)]
pub struct InputSpec {
    /// Raw input argument, used as the display id in errors and logs
    pub raw: String,
    /// The input provider implementation
    pub provider: Arc<dyn InputProvider>,
}

impl InputSpec {
    /// Create a new input specification.
    pub fn new(raw: impl Into<String>, provider: Arc<dyn InputProvider>) -> Self {
        Self {
            raw: raw.into(),
            provider,
        }
    }
}

/// Specification for the output target.
#[derive(Debug, Clone)]
pub struct OutputSpec {
    /// Raw output argument, used as the display id in errors and logs
    pub raw: String,
    /// The output target implementation
    pub target: Arc<dyn OutputTarget>,
}

impl OutputSpec {
    /// Create a new output specification.
    pub fn new(raw: impl Into<String>, target: Arc<dyn OutputTarget>) -> Self {
        Self {
            raw: raw.into(),
            target,
        }
    }
}
