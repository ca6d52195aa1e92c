//! Lazy line streaming over an input provider.

use std::io::{self, BufRead, BufReader, Read};

use crate::error::PipelineError;
use crate::io::InputProvider;

/// A lazy sequence of raw lines read from an input provider.
///
/// Lines are split on `\n`, with a trailing `\r` stripped so `\r\n` line
/// endings are handled as well. The final line need not be newline
/// terminated. Empty lines are yielded as-is; skipping them is the
/// parser's concern, not the source's.
///
/// The underlying handle is owned by the source and released when it is
/// dropped, whether the stream was exhausted or abandoned after an error.
pub struct LineSource {
    lines: io::Lines<BufReader<Box<dyn Read + Send>>>,
}

impl LineSource {
    /// Open the provider's stream and return a line source over it.
    ///
    /// Fails with [`PipelineError::Resource`] when the underlying resource
    /// does not exist or cannot be opened.
    pub fn open(provider: &dyn InputProvider) -> Result<Self, PipelineError> {
        let reader = provider.open().map_err(|e| PipelineError::Resource {
            path: provider.id().to_string(),
            source: e,
        })?;

        Ok(Self {
            lines: BufReader::new(reader).lines(),
        })
    }
}

impl Iterator for LineSource {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next()
    }
}
