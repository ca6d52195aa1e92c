//! Rendering the output list as formatted JSON.

use crate::error::PipelineError;
use crate::record::ScoredRecord;

/// Render the output list as human-readable JSON bytes.
///
/// The list is rendered as a 2-space-indented JSON array of
/// `{score, id}` objects followed by a trailing newline. Scores render as
/// JSON numbers, ids as JSON strings. An empty list renders as `[]`.
pub fn render(list: &[ScoredRecord]) -> Result<Vec<u8>, PipelineError> {
    let mut buf =
        serde_json::to_vec_pretty(list).map_err(|e| PipelineError::Render { source: e })?;
    buf.push(b'\n');
    Ok(buf)
}
