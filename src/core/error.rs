//! Error types for document number validation runs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for library operations.
pub type Result<T> = std::result::Result<T, DocNumError>;

/// Everything that can abort a validation run.
///
/// Classification itself never fails; only I/O and configuration do.
#[derive(Error, Debug)]
pub enum DocNumError {
    /// A listed input file does not exist or cannot be read
    #[error("cannot read input file #{index} ({})", .path.display())]
    InputFileUnreadable {
        /// 1-based position of the path in the entered list
        index: usize,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The report destination cannot be created or written
    #[error("cannot write report file {}", .path.display())]
    OutputFileUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The list of paths could not be read from the input stream
    #[error("cannot read the list of input files")]
    InputStream {
        #[source]
        source: io::Error,
    },

    #[error("cannot serialize report")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl DocNumError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
