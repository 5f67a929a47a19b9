use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A prompt known by name, stored at a path relative to an asset root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptAsset {
    pub name: String,
    pub path: String,
}

impl PromptAsset {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// The verbatim text of a prompt after a successful load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedPrompt {
    pub name: String,
    pub path: PathBuf,
    pub text: String,
}
