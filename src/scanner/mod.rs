//! Input path collection and identifier deduplication

pub mod path_collector;
pub mod duplicate_detector;

pub use path_collector::{collect_paths, CollectorState, PathCollector, SENTINEL};
pub use duplicate_detector::{collect_unique, read_identifier_files, UniqueIdentifiers};
