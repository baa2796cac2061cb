//! The read → rewrite → write loop.

use std::fs;
use std::path::{Path, PathBuf};

use at_ast::AtSyntax;
use at_rewrite::Rewriter;

use crate::{is_stale, output_path, BuildError, DEFAULT_EXTENSION};

/// Settings for one build invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Output root. `None` writes each output next to its input.
    pub out_dir: Option<PathBuf>,
    /// Extension of output files, without the leading dot.
    pub extension: String,
    /// Rewrite even when the output is newer than the input.
    pub force: bool,
    /// Continuous recompilation. Not supported; requesting it fails the build.
    pub monitor: bool,
    pub syntax: AtSyntax,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            out_dir: None,
            extension: DEFAULT_EXTENSION.to_string(),
            force: false,
            monitor: false,
            syntax: AtSyntax::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Compiled,
    UpToDate,
}

/// What happened to one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub status: Status,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub outcomes: Vec<Outcome>,
}

impl BuildReport {
    pub fn compiled(&self) -> usize {
        self.count(Status::Compiled)
    }

    pub fn up_to_date(&self) -> usize {
        self.count(Status::UpToDate)
    }

    fn count(&self, status: Status) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }
}

/// Rewrite one file, creating the output's directory if needed.
pub fn compile_file(input: &Path, output: &Path, rewriter: &Rewriter) -> Result<(), BuildError> {
    let source = fs::read_to_string(input).map_err(|source| BuildError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let rewritten = rewriter.rewrite(&source);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| BuildError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(output, rewritten).map_err(|source| BuildError::Write {
        path: output.to_path_buf(),
        source,
    })
}

/// Build every input in order, stopping at the first failure.
///
/// `on_outcome` sees each input as soon as it is handled, so callers can
/// report progress even when a later input fails.
pub fn build(
    inputs: &[PathBuf],
    options: &BuildOptions,
    mut on_outcome: impl FnMut(&Outcome),
) -> Result<BuildReport, BuildError> {
    if options.monitor {
        return Err(BuildError::MonitorUnsupported);
    }

    let rewriter = Rewriter::new(&options.syntax);
    let mut report = BuildReport::default();

    for input in inputs {
        let output = output_path(input, options);
        if same_file(input, &output) {
            return Err(BuildError::OutputIsInput { path: output });
        }

        let status = if options.force || is_stale(input, &output) {
            tracing::info!(input = %input.display(), output = %output.display(), "compiling");
            compile_file(input, &output, &rewriter)?;
            Status::Compiled
        } else {
            tracing::debug!(input = %input.display(), "output is up to date");
            Status::UpToDate
        };

        let outcome = Outcome {
            input: input.clone(),
            output,
            status,
        };
        on_outcome(&outcome);
        report.outcomes.push(outcome);
    }

    Ok(report)
}

/// Whether `output` names the existing file `input`, however it is spelled.
fn same_file(input: &Path, output: &Path) -> bool {
    if input == output {
        return true;
    }
    match (fs::canonicalize(input), fs::canonicalize(output)) {
        (Ok(input), Ok(output)) => input == output,
        _ => false,
    }
}
