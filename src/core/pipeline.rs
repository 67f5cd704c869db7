//! End-to-end validation run: paths in, report file out

use std::fs;
use std::io::BufRead;
use std::path::PathBuf;
use tracing::info;

use super::config::RunConfig;
use super::error::Result;
use crate::reporting::report_writer::{build_report, write_report, ReportSummary};
use crate::scanner::duplicate_detector::{collect_unique, read_identifier_files};
use crate::scanner::path_collector::collect_paths;

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Resolved location of the written report
    pub report_path: PathBuf,
    pub summary: ReportSummary,
    pub files_read: usize,
    pub total_lines: usize,
    /// Lines skipped because their identifier was already seen
    pub duplicates: usize,
}

/// Run the whole pipeline
///
/// # Arguments
/// * `config` - Output location, write mode and format
/// * `input` - Stream of file paths terminated by the sentinel line
///
/// # Returns
/// Run statistics, or the first I/O failure. Every input file is read and
/// the report is fully built before the output file is opened.
pub fn run<R: BufRead>(config: &RunConfig, input: R) -> Result<RunOutcome> {
    config.validate()?;

    let paths = collect_paths(input)?;
    info!(count = paths.len(), "collected input file paths");

    let contents = read_identifier_files(&paths)?;
    let unique = collect_unique(&contents);
    info!(
        lines = unique.total_lines(),
        unique = unique.len(),
        duplicates = unique.duplicates(),
        "deduplicated document numbers"
    );

    let report = build_report(&unique);
    write_report(&config.output, &report, config)?;

    let report_path = fs::canonicalize(&config.output).unwrap_or_else(|_| config.output.clone());
    info!(path = %report_path.display(), entries = report.len(), "report written");

    Ok(RunOutcome {
        report_path,
        summary: report.summary(),
        files_read: paths.len(),
        total_lines: unique.total_lines(),
        duplicates: unique.duplicates(),
    })
}
