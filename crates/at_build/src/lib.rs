//! File-level glue around the atsugar rewriter.
//!
//! Turns command-line arguments into input paths, decides where each output
//! goes, skips inputs whose output is already newer, and runs the
//! read → rewrite → write sequence for the rest.

mod build;
mod error;
mod inputs;
mod output;
mod stale;

pub use build::{build, compile_file, BuildOptions, BuildReport, Outcome, Status};
pub use error::BuildError;
pub use inputs::expand_inputs;
pub use output::{output_path, DEFAULT_EXTENSION};
pub use stale::{is_stale, modified_time};
