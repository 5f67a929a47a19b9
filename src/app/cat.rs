use crate::config::toml_config::PromptConfig;
use crate::config::CliConfig;
use crate::core::asset::{
    security_review_prompt_path, EMBEDDED_SECURITY_REVIEW_PROMPT, SECURITY_REVIEW_PROMPT_NAME,
};
use crate::utils::error::{PromptError, Result};
use crate::utils::validation::Validate;
use crate::{LoadedPrompt, LocalStorage, PromptLoader};
use std::io::Write;
use std::path::PathBuf;

/// Validates `cli` and writes the requested output to `out`.
pub fn run<W: Write>(cli: &CliConfig, out: &mut W) -> Result<()> {
    cli.validate()?;

    if cli.embedded {
        if cli.name != SECURITY_REVIEW_PROMPT_NAME {
            return Err(PromptError::UnknownPrompt {
                name: cli.name.clone(),
                known: vec![SECURITY_REVIEW_PROMPT_NAME.to_string()],
            });
        }
        let prompt = LoadedPrompt {
            name: SECURITY_REVIEW_PROMPT_NAME.to_string(),
            path: security_review_prompt_path(),
            text: EMBEDDED_SECURITY_REVIEW_PROMPT.to_string(),
        };
        return write_prompt(cli, &prompt, out);
    }

    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = PromptConfig::from_file(path)?;
            config.validate()?;
            config
        }
        None => PromptConfig::default(),
    };

    let catalog = file_config.catalog();
    if cli.list {
        for name in catalog.names() {
            writeln!(out, "{}", name)?;
        }
        out.flush()?;
        return Ok(());
    }

    let root = cli
        .root
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| file_config.asset_root());
    let loader = PromptLoader::new(LocalStorage::new(root));
    let prompt = loader.load(catalog.get(&cli.name)?)?;

    write_prompt(cli, &prompt, out)
}

fn write_prompt<W: Write>(cli: &CliConfig, prompt: &LoadedPrompt, out: &mut W) -> Result<()> {
    if cli.json {
        // Serialize up front so write failures surface as I/O errors.
        let json = serde_json::to_string_pretty(prompt)?;
        writeln!(out, "{}", json)?;
    } else {
        out.write_all(prompt.text.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}
