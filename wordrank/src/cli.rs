// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::num::IntErrorKind;
use std::path::PathBuf;

use crate::core::analyzer::analyze_file;
use crate::core::container::Backend;
use crate::error::Error;
use crate::utils::print_report;

/// Rows shown when no limit is given.
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text document to analyse
    pub file: PathBuf,

    /// Data structure used to count words: bst, avl or hash
    pub backend: String,

    /// Number of most common words to show (defaults to 10)
    #[arg(allow_negative_numbers = true)]
    pub limit: Option<String>,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub file: PathBuf,
    pub backend: Backend,
    pub limit: usize,
}

impl Settings {
    /// Resolves the backend selector and limit.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The backend is not one of `bst`, `avl` or `hash`
    /// * The limit is not an integer of at least 1
    pub fn from_args(args: &Args) -> Result<Self, Error> {
        let backend = args.backend.parse()?;
        let limit = match args.limit.as_deref() {
            Some(raw) => parse_limit(raw)?,
            None => DEFAULT_LIMIT,
        };
        Ok(Self {
            file: args.file.clone(),
            backend,
            limit,
        })
    }
}

/// Parses a positive row limit. Values too large for `usize` saturate, since
/// the ranker clamps to the number of distinct words anyway.
fn parse_limit(raw: &str) -> Result<usize, Error> {
    match raw.parse::<usize>() {
        Ok(limit) if limit >= 1 => Ok(limit),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Ok(usize::MAX),
        _ => Err(Error::InvalidLimit(raw.to_owned())),
    }
}

/// Validates `args`, ranks the words of the file and prints the report.
///
/// # Errors
///
/// This function may return an error if:
/// * The arguments are invalid
/// * The file cannot be opened or read
/// * Writing the report to stdout fails
pub fn run(args: Args) -> Result<()> {
    let settings = Settings::from_args(&args)?;
    let report = analyze_file(&settings.file, settings.backend, settings.limit)?;
    print_report(&report)?;
    Ok(())
}
