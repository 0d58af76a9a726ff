//! sa-results: typed access to the Simulated Annealing result documents.
//!
//! Contains:
//! - keys (strategy, solution type and iteration count selectors)
//! - document (nested result mappings + lookups)
//! - format (thousands-separated number rendering)
//! - load (reading documents from disk)

pub mod document;
pub mod format;
pub mod keys;
pub mod load;

pub use document::{HORIZON_YEARS, StudyDocument};
pub use format::{format_thousands, group_digits};
pub use keys::*;
pub use load::{RESULTS_FILE_NAME, VPL_FILE_NAME, load_document};

use std::path::PathBuf;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing key: {path}")]
    MissingKey { path: String },

    #[error("Unexpected series length at {path} (expected {expected}, found {found})")]
    ShapeMismatch {
        path: String,
        expected: usize,
        found: usize,
    },

    #[error("Empty series at {path}")]
    EmptySeries { path: String },

    #[error("Expected a list of numbers at {path}")]
    NotASequence { path: String },

    #[error("Non-numeric value at {path}[{index}]")]
    NotANumber { path: String, index: usize },
}

impl ResultsError {
    /// True when the error came from a file that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResultsError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
