use crate::utils::error::Result;
use std::path::PathBuf;

pub trait AssetStorage: Send + Sync {
    /// Absolute location of `path` for this storage.
    fn resolve(&self, path: &str) -> PathBuf;

    fn read(&self, path: &str) -> Result<Vec<u8>>;
}
