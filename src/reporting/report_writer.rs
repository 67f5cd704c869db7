//! Report building and writing functionality

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::core::config::{ReportFormat, RunConfig, WriteMode};
use crate::core::error::{DocNumError, Result};
use crate::core::validator::{classify, Verdict};
use crate::scanner::duplicate_detector::UniqueIdentifiers;

/// One verdict per unique document number, kept sorted so repeated runs
/// over the same input render identically
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: BTreeMap<String, Verdict>,
}

impl Report {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, identifier: &str) -> Option<Verdict> {
        self.entries.get(identifier).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Verdict)> {
        self.entries.iter().map(|(id, verdict)| (id.as_str(), *verdict))
    }

    /// Count entries per verdict
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            total: self.entries.len(),
            ..ReportSummary::default()
        };
        for verdict in self.entries.values() {
            match verdict {
                Verdict::Valid => summary.valid += 1,
                Verdict::InvalidLength => summary.invalid_length += 1,
                Verdict::InvalidPrefix => summary.invalid_prefix += 1,
                Verdict::InvalidCharacters => summary.invalid_characters += 1,
            }
        }
        summary
    }
}

/// Per-verdict entry counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid_length: usize,
    pub invalid_prefix: usize,
    pub invalid_characters: usize,
}

impl ReportSummary {
    pub fn invalid(&self) -> usize {
        self.total - self.valid
    }
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    identifier: &'a str,
    verdict: Verdict,
    message: &'static str,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: ReportSummary,
    entries: Vec<JsonEntry<'a>>,
}

/// Classify every unique identifier exactly once
pub fn build_report(ids: &UniqueIdentifiers) -> Report {
    let entries = ids
        .iter()
        .map(|id| (id.to_owned(), classify(id)))
        .collect();
    Report { entries }
}

/// Render the report as `<identifier> - <message>` lines
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    for (id, verdict) in report.iter() {
        out.push_str(id);
        out.push_str(" - ");
        out.push_str(verdict.message());
        out.push('\n');
    }
    out
}

/// Render the report as a pretty-printed JSON document
pub fn render_json(report: &Report) -> Result<String> {
    let doc = JsonReport {
        summary: report.summary(),
        entries: report
            .iter()
            .map(|(identifier, verdict)| JsonEntry {
                identifier,
                verdict,
                message: verdict.message(),
            })
            .collect(),
    };
    let mut out = serde_json::to_string_pretty(&doc)
        .map_err(|source| DocNumError::Serialization { source })?;
    out.push('\n');
    Ok(out)
}

/// Write the report to a file
///
/// # Arguments
/// * `output_path` - Destination file; its parent directory is created if needed
/// * `report` - Report to write
/// * `config` - Selects the format and whether an existing file is replaced or extended
///
/// # Returns
/// Result indicating success or failure. The report is rendered completely
/// before the file is opened, so a rendering failure never touches it.
pub fn write_report(output_path: &Path, report: &Report, config: &RunConfig) -> Result<()> {
    let rendered = match config.format {
        ReportFormat::Text => render_text(report),
        ReportFormat::Json => render_json(report)?,
    };

    let unwritable = |source: std::io::Error| DocNumError::OutputFileUnwritable {
        path: output_path.to_path_buf(),
        source,
    };

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(unwritable)?;
    }

    let mut options = OpenOptions::new();
    match config.write_mode {
        WriteMode::Truncate => options.write(true).create(true).truncate(true),
        WriteMode::Append => options.append(true).create(true),
    };

    let mut file = options.open(output_path).map_err(unwritable)?;
    file.write_all(rendered.as_bytes()).map_err(unwritable)?;
    file.flush().map_err(unwritable)?;

    Ok(())
}
