pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::asset::SECURITY_REVIEW_PROMPT_NAME;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "prompt-cat")]
#[command(about = "Print a bundled prompt asset verbatim")]
pub struct CliConfig {
    /// Name of the prompt to print
    #[arg(short, long, default_value = SECURITY_REVIEW_PROMPT_NAME)]
    pub name: String,

    /// Directory prompt paths are resolved against (overrides the config file)
    #[arg(long)]
    pub root: Option<String>,

    /// Path to a TOML file declaring additional prompts
    #[arg(short, long)]
    pub config: Option<String>,

    /// List known prompt names and exit
    #[arg(long)]
    pub list: bool,

    /// Print name, path and text as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the copy of the security review prompt compiled into the binary
    #[arg(long, conflicts_with_all = ["list", "root", "config"])]
    pub embedded: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        if let Some(root) = &self.root {
            validate_path("root", root)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}
