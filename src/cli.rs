//! CLI integration helpers.
//!
//! Keeps argument normalization out of the binaries so the defaulting
//! rules are testable without spawning a process.

/// Parse the requested record count from its raw CLI argument.
///
/// Absent, non-numeric, and non-positive values all default to 1, so
/// omitting the argument behaves identically to passing `1`.
pub fn parse_count(arg: Option<&str>) -> usize {
    arg.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n >= 1)
        .map(|n| n as usize)
        .unwrap_or(1)
}
