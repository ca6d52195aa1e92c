//! Synthetic score-record generator.
//!
//! Produces files in the same `<score>: <JSON object>` format the
//! pipeline consumes: every record has a globally-unique `id`, a `type`
//! tag alternating between two fixed values, and filler fields the parser
//! ignores. Scores are unique within one generation run.

use std::collections::HashSet;
use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use uuid::Builder;

/// The two `type` tags records alternate between.
const TYPE_TAGS: [&str; 2] = ["purple", "black"];

/// Configuration for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of records to generate.
    pub records: u64,
    /// Seed for reproducible output. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            records: 1_000_000,
            seed: None,
        }
    }
}

#[derive(Serialize)]
struct Payload<'a> {
    id: String,
    #[serde(rename = "type")]
    tag: &'a str,
    y: u64,
    x: u64,
    payload: String,
}

/// Write `config.records` score records to `writer`, one per line.
///
/// Scores are drawn uniformly from `1..=records` and rejection-sampled
/// against a seen-set so each value appears exactly once per run.
pub fn write_records(config: &GeneratorConfig, writer: &mut dyn Write) -> io::Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let range = config.records.max(1);
    let mut used: HashSet<u64> = HashSet::with_capacity(config.records as usize);
    let mut writer = io::BufWriter::new(writer);

    for i in 0..config.records {
        let score = loop {
            let candidate = rng.random_range(1..=range);
            if used.insert(candidate) {
                break candidate;
            }
        };

        let payload = Payload {
            id: Builder::from_random_bytes(rng.random()).into_uuid().to_string(),
            tag: TYPE_TAGS[(i % 2) as usize],
            y: i,
            x: i + rng.random_range(1..=100),
            payload: "payload data".repeat((i % 4 + 1) as usize),
        };

        writeln!(writer, "{}: {}", score, serde_json::to_string(&payload)?)?;
    }

    writer.flush()
}
