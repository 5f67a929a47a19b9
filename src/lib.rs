pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::LocalStorage;
pub use crate::config::toml_config::PromptConfig;
pub use crate::core::asset::{
    security_review_prompt, security_review_prompt_path, EMBEDDED_SECURITY_REVIEW_PROMPT,
    SECURITY_REVIEW_PROMPT, SECURITY_REVIEW_PROMPT_NAME, SECURITY_REVIEW_PROMPT_PATH,
};
pub use crate::core::catalog::PromptCatalog;
pub use crate::core::loader::{load_text, load_text_async, PromptLoader};
pub use crate::domain::model::{LoadedPrompt, PromptAsset};
pub use crate::utils::error::{PromptError, Result};
