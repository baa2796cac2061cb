//! Modification-time staleness check.
//!
//! Advisory only: skipping an up-to-date output never changes what would
//! have been written.

use std::path::Path;
use std::time::SystemTime;

/// Modification time of `path`, or the epoch if it can't be read.
pub fn modified_time(path: &Path) -> SystemTime {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

/// Whether `output` needs regenerating from `input`.
///
/// Only an output strictly newer than its input counts as up to date.
pub fn is_stale(input: &Path, output: &Path) -> bool {
    modified_time(output) <= modified_time(input)
}
