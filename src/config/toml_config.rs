use crate::core::catalog::PromptCatalog;
use crate::core::PromptAsset;
use crate::utils::error::{PromptError, Result};
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_path, validate_relative_path,
    Validate, PROMPT_EXTENSIONS,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptConfig {
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub prompts: Vec<PromptAsset>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory prompt paths are resolved against. Defaults to the crate root.
    pub root: Option<String>,
}

impl PromptConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| PromptError::from_io(path, e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PromptError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` from the environment; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn asset_root(&self) -> PathBuf {
        self.assets
            .root
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")))
    }

    /// Builtin prompts plus the ones declared here; declared entries win on
    /// name collisions.
    pub fn catalog(&self) -> PromptCatalog {
        let mut catalog = PromptCatalog::builtin();
        for asset in &self.prompts {
            catalog.register(asset.clone());
        }
        catalog
    }
}

impl Validate for PromptConfig {
    fn validate(&self) -> Result<()> {
        if let Some(root) = &self.assets.root {
            validate_path("assets.root", root)?;
            if root.contains("${") {
                return Err(PromptError::InvalidConfigValueError {
                    field: "assets.root".to_string(),
                    value: root.clone(),
                    reason: "Environment variable is not set".to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        for asset in &self.prompts {
            validate_non_empty_string("prompts.name", &asset.name)?;
            validate_relative_path("prompts.path", &asset.path)?;
            validate_file_extensions(
                "prompts.path",
                std::slice::from_ref(&asset.path),
                PROMPT_EXTENSIONS,
            )?;
            if !seen.insert(asset.name.as_str()) {
                return Err(PromptError::InvalidConfigValueError {
                    field: "prompts.name".to_string(),
                    value: asset.name.clone(),
                    reason: "Prompt name is declared more than once".to_string(),
                });
            }
        }

        Ok(())
    }
}
