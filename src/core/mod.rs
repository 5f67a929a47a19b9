pub mod asset;
pub mod catalog;
pub mod loader;

pub use crate::domain::model::{LoadedPrompt, PromptAsset};
pub use crate::domain::ports::AssetStorage;
pub use crate::utils::error::Result;
