use crate::domain::ports::AssetStorage;
use crate::utils::error::{PromptError, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Storage rooted at this crate's own directory, independent of the
    /// process working directory.
    pub fn crate_root() -> Self {
        Self::new(env!("CARGO_MANIFEST_DIR"))
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl AssetStorage for LocalStorage {
    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading {}", full_path.display());
        fs::read(&full_path).map_err(|e| PromptError::from_io(full_path, e))
    }
}
