//! Record parsing: one raw line into a scored record.
//!
//! A record line is `<score>: <JSON object>`. The score substring ends at
//! the first `:` that is followed, after optional whitespace, by the `{`
//! opening the payload object. Scores cannot contain `: {`, while payload
//! JSON may itself contain colons, so this is the only reliable split.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::{FormattingErrorKind, PipelineError};

/// One parsed record: the numeric sort key and the payload identifier.
///
/// The score is kept as a JSON number so integer scores round-trip through
/// rendering without precision loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub score: Number,
    pub id: String,
}

/// Projection of the payload object: only the top-level `id` is read,
/// every other field is dropped.
#[derive(Debug, Deserialize)]
struct PayloadId {
    #[serde(default)]
    id: Option<String>,
}

/// Split a line into its score and payload substrings.
///
/// The split point is the first `:` followed (after optional whitespace)
/// by `{`. The returned payload starts at the `{`.
fn split_line(line: &str) -> Option<(&str, &str)> {
    let mut from = 0;
    while let Some(rel) = line[from..].find(':') {
        let at = from + rel;
        let payload = line[at + 1..].trim_start();
        if payload.starts_with('{') {
            return Some((&line[..at], payload));
        }
        from = at + 1;
    }
    None
}

/// Parse one raw line into a [`ScoredRecord`].
///
/// Empty (zero-length) lines produce `Ok(None)` and are skipped silently.
/// Every other deviation from the record format is a fatal
/// [`PipelineError::Formatting`] carrying the 1-based line number: a
/// missing payload object, malformed payload JSON, a missing, null or
/// empty `id`, or a non-numeric score.
pub fn parse_record(line: &str, line_no: u64) -> Result<Option<ScoredRecord>, PipelineError> {
    if line.is_empty() {
        return Ok(None);
    }

    let (score_str, payload) = split_line(line)
        .ok_or_else(|| PipelineError::formatting(line_no, FormattingErrorKind::MissingPayload))?;

    let projected: PayloadId = serde_json::from_str(payload)
        .map_err(|e| PipelineError::formatting(line_no, FormattingErrorKind::Payload(e)))?;

    let id = match projected.id {
        Some(id) if !id.is_empty() => id,
        Some(_) => {
            return Err(PipelineError::formatting(
                line_no,
                FormattingErrorKind::EmptyId,
            ));
        }
        None => {
            return Err(PipelineError::formatting(
                line_no,
                FormattingErrorKind::MissingId,
            ));
        }
    };

    let score_str = score_str.trim();
    let score: Number = score_str.parse().map_err(|_| {
        PipelineError::formatting(
            line_no,
            FormattingErrorKind::InvalidScore(score_str.to_string()),
        )
    })?;

    Ok(Some(ScoredRecord { score, id }))
}
