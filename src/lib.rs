//! Document Number Validator Library
//!
//! Reads document numbers from a list of files, drops duplicates and writes
//! a single report with one verdict per unique number.

pub mod core;
pub mod scanner;
pub mod reporting;

pub use crate::core::validator;
pub use crate::scanner::duplicate_detector;
pub use crate::reporting::report_writer;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::config::{ReportFormat, RunConfig, WriteMode, DEFAULT_REPORT_PATH};
    pub use crate::core::error::{DocNumError, Result};
    pub use crate::core::pipeline::{run, RunOutcome};
    pub use crate::core::validator::{classify, is_valid_number, Verdict};
    pub use crate::scanner::path_collector::{collect_paths, CollectorState, PathCollector, SENTINEL};
    pub use crate::scanner::duplicate_detector::{collect_unique, read_identifier_files, UniqueIdentifiers};
    pub use crate::reporting::report_writer::{
        build_report, render_json, render_text, write_report, Report, ReportSummary,
    };
}
