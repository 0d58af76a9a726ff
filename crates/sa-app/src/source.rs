//! Where the result documents are read from.

use sa_results::{RESULTS_FILE_NAME, VPL_FILE_NAME};
use std::path::{Path, PathBuf};

/// Directory holding `sa_resultados.json` and `sa_vpl.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    dir: PathBuf,
}

impl Default for DataSource {
    /// The current working directory.
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

impl DataSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn results_path(&self) -> PathBuf {
        self.dir.join(RESULTS_FILE_NAME)
    }

    pub fn vpl_path(&self) -> PathBuf {
        self.dir.join(VPL_FILE_NAME)
    }
}
