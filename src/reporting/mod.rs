//! Report generation

pub mod report_writer;

pub use report_writer::{build_report, render_json, render_text, write_report, Report, ReportSummary};
