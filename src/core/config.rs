//! Run configuration

use clap::ValueEnum;
use std::path::PathBuf;

use super::error::{DocNumError, Result};

/// Where the report goes when no output path is given
pub const DEFAULT_REPORT_PATH: &str = "resources/checkedDocNums.txt";

/// How an existing report file is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum WriteMode {
    /// Replace the previous report with this run's report
    #[default]
    Truncate,
    /// Add this run's lines after whatever the file already holds
    Append,
}

/// Report serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// One `<identifier> - <message>` line per entry
    #[default]
    Text,
    /// A single JSON document with a summary and the entries
    Json,
}

/// Settings for one validation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub output: PathBuf,
    pub write_mode: WriteMode,
    pub format: ReportFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_REPORT_PATH),
            write_mode: WriteMode::default(),
            format: ReportFormat::default(),
        }
    }
}

impl RunConfig {
    pub fn with_output(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }

    /// Reject combinations that would produce an unusable report
    pub fn validate(&self) -> Result<()> {
        if self.write_mode == WriteMode::Append && self.format == ReportFormat::Json {
            return Err(DocNumError::config(
                "append mode is only supported for text reports",
            ));
        }
        if self.output.as_os_str().is_empty() {
            return Err(DocNumError::config("output path must not be empty"));
        }
        Ok(())
    }
}
