use crate::core::{AssetStorage, LoadedPrompt, PromptAsset};
use crate::utils::error::{PromptError, Result};
use std::path::{Path, PathBuf};

fn decode(path: PathBuf, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|source| PromptError::Decode { path, source })
}

/// Reads `path` and decodes it as UTF-8. No other transformation is applied.
pub fn load_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| PromptError::from_io(path, e))?;
    decode(path.to_path_buf(), bytes)
}

pub async fn load_text_async<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| PromptError::from_io(path, e))?;
    decode(path.to_path_buf(), bytes)
}

pub struct PromptLoader<S: AssetStorage> {
    storage: S,
}

impl<S: AssetStorage> PromptLoader<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn load(&self, asset: &PromptAsset) -> Result<LoadedPrompt> {
        let path = self.storage.resolve(&asset.path);

        let text = match self
            .storage
            .read(&asset.path)
            .and_then(|bytes| decode(path.clone(), bytes))
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to load prompt '{}': {}", asset.name, e);
                return Err(e);
            }
        };

        tracing::info!(
            "Loaded prompt '{}' ({} bytes) from {}",
            asset.name,
            text.len(),
            path.display()
        );

        Ok(LoadedPrompt {
            name: asset.name.clone(),
            path,
            text,
        })
    }
}
