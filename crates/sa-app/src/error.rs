//! Error types for the dashboard service layer.

use crate::page::{MISSING_FILES_MESSAGE, PROCESSING_ERROR_PREFIX};
use sa_charts::ChartError;
use sa_results::ResultsError;
use std::path::PathBuf;

/// The two failure kinds a page render can end in.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Input file not found: {path}")]
    MissingInputFile { path: PathBuf },

    #[error("{0}")]
    Processing(String),
}

/// Result type for sa-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Text shown inline in place of the charts.
    pub fn user_message(&self) -> String {
        match self {
            AppError::MissingInputFile { .. } => MISSING_FILES_MESSAGE.to_string(),
            AppError::Processing(message) => format!("{PROCESSING_ERROR_PREFIX}{message}"),
        }
    }

    pub fn is_missing_file(&self) -> bool {
        matches!(self, AppError::MissingInputFile { .. })
    }
}

impl From<ResultsError> for AppError {
    fn from(err: ResultsError) -> Self {
        match err {
            ResultsError::Io { path, source } if source.kind() == std::io::ErrorKind::NotFound => {
                AppError::MissingInputFile { path }
            }
            other => AppError::Processing(other.to_string()),
        }
    }
}

impl From<ChartError> for AppError {
    fn from(err: ChartError) -> Self {
        match err {
            ChartError::Lookup(inner) => inner.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_missing_file() {
        let err: AppError = ResultsError::Io {
            path: PathBuf::from("sa_vpl.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
        .into();
        assert!(err.is_missing_file());
        assert_eq!(err.user_message(), MISSING_FILES_MESSAGE);
    }

    #[test]
    fn other_failures_are_processing_errors() {
        let err: AppError = ResultsError::MissingKey {
            path: "aleatoria/25000".to_string(),
        }
        .into();
        assert!(!err.is_missing_file());
        assert_eq!(
            err.user_message(),
            "Ocorreu um erro ao processar os arquivos: Missing key: aleatoria/25000"
        );

        let denied: AppError = ResultsError::Io {
            path: PathBuf::from("sa_vpl.json"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        }
        .into();
        assert!(!denied.is_missing_file());
    }
}
