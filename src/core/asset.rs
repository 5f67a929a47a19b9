//! The security review prompt for REST APIs.
//!
//! The file is resolved against this crate's manifest directory, never the
//! caller's working directory. A successful read is cached for the life of the
//! process; a failed read is reported to the caller and retried on next access.

use crate::core::loader::load_text;
use crate::utils::error::Result;
use std::path::PathBuf;
use std::sync::{LazyLock, Mutex, OnceLock, PoisonError};

pub const SECURITY_REVIEW_PROMPT_NAME: &str = "security-review-rest-api";

/// Location of the prompt relative to the crate root.
pub const SECURITY_REVIEW_PROMPT_PATH: &str = "prompts/security-review-rest-api.prompt.md";

/// Compile-time copy of the prompt. A missing or non-UTF-8 file fails the build.
pub const EMBEDDED_SECURITY_REVIEW_PROMPT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/security-review-rest-api.prompt.md"
));

/// The prompt as a lazily initialized constant.
///
/// Panics on first dereference if the file cannot be loaded. Use
/// [`security_review_prompt`] to handle the error instead.
pub static SECURITY_REVIEW_PROMPT: LazyLock<&'static str> = LazyLock::new(|| {
    match security_review_prompt() {
        Ok(text) => text,
        Err(e) => panic!("failed to load security review prompt: {e}"),
    }
});

static PROMPT: OnceLock<String> = OnceLock::new();
static INIT: Mutex<()> = Mutex::new(());

pub fn security_review_prompt_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(SECURITY_REVIEW_PROMPT_PATH)
}

pub fn security_review_prompt() -> Result<&'static str> {
    cached_load(&PROMPT, &INIT, || load_text(security_review_prompt_path()))
}

/// Runs `load` at most once successfully; concurrent first callers wait on
/// `init` rather than reading the file twice.
fn cached_load<F>(
    cell: &'static OnceLock<String>,
    init: &Mutex<()>,
    load: F,
) -> Result<&'static str>
where
    F: FnOnce() -> Result<String>,
{
    if let Some(text) = cell.get() {
        return Ok(text.as_str());
    }

    let _guard = init.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(text) = cell.get() {
        return Ok(text.as_str());
    }

    let text = load()?;
    tracing::debug!("Cached prompt text ({} bytes)", text.len());
    Ok(cell.get_or_init(|| text).as_str())
}
