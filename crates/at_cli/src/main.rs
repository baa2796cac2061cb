use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use at_build::{build, expand_inputs, BuildOptions, Outcome, Status, DEFAULT_EXTENSION};
use at_rewrite::{check, rewrite, scan};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jc", version, about = "Expand atsugar @-directives into plain JavaScript")]
struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite each input file to a sibling output file.
    Build {
        /// Input files or glob patterns.
        #[arg(required = true)]
        files: Vec<String>,
        /// Recompile whenever an input changes (not implemented).
        #[arg(long)]
        monitor: bool,
        /// Rewrite even when the output is newer than the input.
        #[arg(short, long)]
        force: bool,
        /// Write outputs under this directory instead of next to the inputs.
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Output file extension.
        #[arg(long, default_value = DEFAULT_EXTENSION)]
        ext: String,
    },
    /// Rewrite one file to stdout or to the given output.
    Preprocess {
        input: PathBuf,
        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Rewrite one file and report whether the result parses as JavaScript.
    Check { input: PathBuf },
    /// List the directives found in a file.
    Scan {
        input: PathBuf,
        /// Print the directives as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --verbose forces DEBUG, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    run(cli.command, &mut stdout.lock())
}

fn run(command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Build {
            files,
            monitor,
            force,
            out_dir,
            ext,
        } => {
            let options = BuildOptions {
                out_dir,
                extension: ext,
                force,
                monitor,
                ..BuildOptions::default()
            };
            let inputs = expand_inputs(&files)?;

            // The first failed progress write is reported once the build is done.
            let mut progress: io::Result<()> = Ok(());
            let report = build(&inputs, &options, |outcome| {
                if progress.is_ok() {
                    progress = print_outcome(out, outcome);
                }
            })?;
            progress.context("failed to write build progress")?;

            tracing::debug!(
                compiled = report.compiled(),
                up_to_date = report.up_to_date(),
                "build finished"
            );
        }
        Commands::Preprocess { input, output } => {
            let source = read_source(&input)?;
            let rewritten = rewrite(&source);

            match &output {
                Some(path) => std::fs::write(path, &rewritten)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => write!(out, "{rewritten}")?,
            }
        }
        Commands::Check { input } => {
            let source = read_source(&input)?;
            let filename = input.display().to_string();

            check(&rewrite(&source), &filename)?;
            writeln!(out, "OK: {filename}")?;
        }
        Commands::Scan { input, json } => {
            let source = read_source(&input)?;
            let directives = scan(&source);

            if json {
                let json = serde_json::to_string_pretty(&directives)?;
                writeln!(out, "{json}")?;
            } else {
                for directive in &directives {
                    writeln!(out, "{} {} {:?}", directive.span, directive.kind, directive.text)?;
                }
            }
        }
    }

    Ok(())
}

fn print_outcome(out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    match outcome.status {
        Status::Compiled => writeln!(
            out,
            "compiling {} -> {}",
            outcome.input.display(),
            outcome.output.display()
        ),
        Status::UpToDate => writeln!(out, "up to date: {}", outcome.input.display()),
    }
}

fn read_source(input: &Path) -> Result<String> {
    std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
}
