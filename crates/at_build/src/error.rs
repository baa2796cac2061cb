//! Build error types.

use std::path::PathBuf;

/// Errors from the file-level build.
///
/// Malformed directives are never an error; only the environment can fail.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("monitor mode is not implemented")]
    MonitorUnsupported,

    #[error("invalid input pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("output would overwrite its input: {}", path.display())]
    OutputIsInput { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
