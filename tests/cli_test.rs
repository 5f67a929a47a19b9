#![cfg(feature = "cli")]

use clap::Parser;
use prompt_assets::app::cat;
use prompt_assets::{
    security_review_prompt, CliConfig, PromptError, EMBEDDED_SECURITY_REVIEW_PROMPT,
};
use std::io::{self, Write};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> prompt_assets::Result<String> {
    let cli = CliConfig::try_parse_from(std::iter::once("prompt-cat").chain(args.iter().copied()))
        .expect("arguments should parse");
    let mut out = Vec::new();
    cat::run(&cli, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

#[test]
fn test_default_prints_prompt_verbatim() {
    let output = run_cli(&[]).unwrap();
    assert_eq!(output, security_review_prompt().unwrap());
}

#[test]
fn test_no_trailing_newline_is_added() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("prompts")).unwrap();
    std::fs::write(
        temp_dir
            .path()
            .join("prompts/security-review-rest-api.prompt.md"),
        "Hello, world!",
    )
    .unwrap();

    let root = temp_dir.path().to_str().unwrap();
    assert_eq!(run_cli(&["--root", root]).unwrap(), "Hello, world!");
}

#[test]
fn test_json_output_shape() {
    let output = run_cli(&["--json"]).unwrap();
    assert!(output.ends_with("}\n"));

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["name"], "security-review-rest-api");
    assert_eq!(value["text"], security_review_prompt().unwrap());
    assert!(value["path"]
        .as_str()
        .unwrap()
        .ends_with("security-review-rest-api.prompt.md"));
}

#[test]
fn test_list_prints_builtin_and_configured_names() {
    assert_eq!(run_cli(&["--list"]).unwrap(), "security-review-rest-api\n");

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("prompts.toml");
    std::fs::write(
        &config_path,
        "[[prompts]]\nname = \"threat-model\"\npath = \"prompts/threat-model.prompt.md\"\n",
    )
    .unwrap();

    let output = run_cli(&["--list", "--config", config_path.to_str().unwrap()]).unwrap();
    assert_eq!(output, "security-review-rest-api\nthreat-model\n");
}

#[test]
fn test_embedded_prints_compiled_copy() {
    assert_eq!(
        run_cli(&["--embedded"]).unwrap(),
        EMBEDDED_SECURITY_REVIEW_PROMPT
    );
}

#[test]
fn test_embedded_honors_json() {
    let output = run_cli(&["--embedded", "--json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["name"], "security-review-rest-api");
    assert_eq!(value["text"], EMBEDDED_SECURITY_REVIEW_PROMPT);
}

#[test]
fn test_embedded_rejects_other_names() {
    let err = run_cli(&["--embedded", "--json", "--name", "nope"]).unwrap_err();
    match &err {
        PromptError::UnknownPrompt { name, known } => {
            assert_eq!(name, "nope");
            assert_eq!(known, &vec!["security-review-rest-api".to_string()]);
        }
        other => panic!("expected UnknownPrompt, got {:?}", other),
    }
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_unknown_name_exits_with_two() {
    let err = run_cli(&["--name", "nope", "--json"]).unwrap_err();
    assert!(matches!(err, PromptError::UnknownPrompt { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_invalid_config_file_exits_with_one() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("prompts.toml");
    std::fs::write(&config_path, "[assets\nroot = 1").unwrap();

    let err = run_cli(&["--config", config_path.to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, PromptError::ConfigError { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_blank_name_exits_with_one() {
    let err = run_cli(&["--name", "  "]).unwrap_err();
    assert!(matches!(err, PromptError::InvalidConfigValueError { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_missing_asset_under_root_exits_with_two() {
    let temp_dir = TempDir::new().unwrap();
    let err = run_cli(&["--root", temp_dir.path().to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, PromptError::NotFound { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_closed_output_is_not_a_failure() {
    let cli = CliConfig::parse_from(["prompt-cat"]);
    let err = cat::run(&cli, &mut ClosedPipe).unwrap_err();
    assert!(err.is_broken_pipe());
    assert_eq!(err.exit_code(), 0);

    let json_cli = CliConfig::parse_from(["prompt-cat", "--json"]);
    let err = cat::run(&json_cli, &mut ClosedPipe).unwrap_err();
    assert!(err.is_broken_pipe());
}
