mod common;
mod error;
mod parser;

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ProgressBar;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::CnfError;

#[derive(Parser, Debug)]
pub struct Flags {
    #[arg(short, long)]
    /// Show a progress bar over the declared number of clauses while the input is checked.
    progress: bool,
    /// DIMACS CNF file to summarize. Reads from standard input when omitted or `-`.
    cnf: Option<PathBuf>,
}

/// Open the input for line-wise reading. The file, if any, is closed when the reader is dropped.
fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, CnfError> {
    match path {
        Some(path) if path != Path::new("-") => {
            let not_found = |source: io::Error| CnfError::FileNotFound {
                path: path.to_path_buf(),
                source,
            };
            let file = File::open(path).map_err(not_found)?;
            // opening a directory succeeds on unix, reading it does not
            if file.metadata().map_err(not_found)?.is_dir() {
                return Err(not_found(io::Error::new(
                    io::ErrorKind::Other,
                    "is a directory",
                )));
            }
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

fn run(flags: Flags) -> Result<()> {
    let progress = if flags.progress {
        ProgressBar::new(0)
    } else {
        ProgressBar::hidden()
    };

    let summary = {
        let input = open_input(flags.cnf.as_deref())?;
        let summary = parser::cnf::parse(input, &progress);
        progress.finish_and_clear();
        summary?
    };
    tracing::info!("{} clause lines accepted", summary.histogram.total());

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", summary).context("failed to write summary")?;
    stdout.flush().context("failed to write summary")?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
    let flags = Flags::parse();

    match run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
