use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use docnum_validator::prelude::*;

#[derive(Parser)]
#[command(name = "docnum_validator")]
#[command(
    about = "Validates document numbers from a list of files and writes a single report",
    long_about = "Reads file paths from stdin, one per line, until a line containing only 0. \
                  Every line of every listed file is a document number; repeated numbers are \
                  validated once."
)]
struct Cli {
    /// Report destination
    #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
    output: PathBuf,

    /// Append to an existing report instead of replacing it
    #[arg(long)]
    append: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Run in batch mode (no interactive prompt)
    #[arg(long)]
    batch: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            output: self.output.clone(),
            write_mode: if self.append {
                WriteMode::Append
            } else {
                WriteMode::Truncate
            },
            format: self.format,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    if !cli.batch && stdin.is_terminal() {
        eprintln!(
            "Set the file paths. To finish entering the list of files, enter {}",
            SENTINEL
        );
    }

    let config = cli.run_config();
    let outcome = run(&config, stdin.lock()).context("Validation run failed")?;

    let summary = outcome.summary;
    println!("==================================================");
    println!("VALIDATION COMPLETE");
    println!("==================================================");
    println!("Files read: {}", outcome.files_read);
    println!("Document numbers read: {}", outcome.total_lines);
    println!("Duplicates skipped: {}", outcome.duplicates);
    println!("Valid document numbers: {}", summary.valid);
    println!("Invalid document numbers: {}", summary.invalid());
    if cli.verbose {
        println!("  {}: {}", Verdict::InvalidLength, summary.invalid_length);
        println!("  {}: {}", Verdict::InvalidPrefix, summary.invalid_prefix);
        println!("  {}: {}", Verdict::InvalidCharacters, summary.invalid_characters);
    }
    println!();
    println!("The path to the report file: {}", outcome.report_path.display());

    Ok(())
}
