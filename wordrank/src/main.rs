// src/main.rs
use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use wordrank::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    let outcome = init_logging(args.verbose).and_then(|()| wordrank::run(args));
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
