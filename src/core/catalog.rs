use crate::core::asset::{SECURITY_REVIEW_PROMPT_NAME, SECURITY_REVIEW_PROMPT_PATH};
use crate::core::PromptAsset;
use crate::utils::error::{PromptError, Result};

/// Named prompt assets. Later registrations replace earlier ones with the
/// same name; listing order is registration order.
#[derive(Debug, Clone, Default)]
pub struct PromptCatalog {
    assets: Vec<PromptAsset>,
}

impl PromptCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(PromptAsset::new(
            SECURITY_REVIEW_PROMPT_NAME,
            SECURITY_REVIEW_PROMPT_PATH,
        ));
        catalog
    }

    pub fn register(&mut self, asset: PromptAsset) {
        match self.assets.iter_mut().find(|a| a.name == asset.name) {
            Some(existing) => {
                tracing::debug!(
                    "Prompt '{}' re-registered: {} -> {}",
                    asset.name,
                    existing.path,
                    asset.path
                );
                *existing = asset;
            }
            None => self.assets.push(asset),
        }
    }

    pub fn get(&self, name: &str) -> Result<&PromptAsset> {
        self.assets
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| PromptError::UnknownPrompt {
                name: name.to_string(),
                known: self.names().map(str::to_string).collect(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.assets.iter().map(|a| a.name.as_str())
    }
}
