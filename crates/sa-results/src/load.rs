//! Reading result documents from disk.

use crate::document::StudyDocument;
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::Path;

/// Per-year horizon results.
pub const RESULTS_FILE_NAME: &str = "sa_resultados.json";
/// Total VPL per iteration count.
pub const VPL_FILE_NAME: &str = "sa_vpl.json";

pub fn load_document(path: &Path) -> ResultsResult<StudyDocument> {
    let content = fs::read_to_string(path).map_err(|source| ResultsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ResultsError::Json {
        path: path.to_path_buf(),
        source,
    })
}
