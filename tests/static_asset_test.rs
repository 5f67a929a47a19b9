use prompt_assets::{
    load_text, security_review_prompt, security_review_prompt_path, PromptError,
    EMBEDDED_SECURITY_REVIEW_PROMPT, SECURITY_REVIEW_PROMPT, SECURITY_REVIEW_PROMPT_PATH,
};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_prompt_equals_file_contents() {
    let expected = std::fs::read(security_review_prompt_path()).unwrap();
    let text = security_review_prompt().unwrap();

    assert_eq!(text.as_bytes(), expected.as_slice());
    assert_eq!(*SECURITY_REVIEW_PROMPT, text);
    assert_eq!(EMBEDDED_SECURITY_REVIEW_PROMPT, text);
}

#[test]
fn test_prompt_path_is_independent_of_working_directory() {
    let path = security_review_prompt_path();
    assert!(path.is_absolute());
    assert!(path.starts_with(env!("CARGO_MANIFEST_DIR")));
    assert!(path.ends_with(Path::new(SECURITY_REVIEW_PROMPT_PATH)));
}

#[test]
fn test_repeated_access_returns_same_value() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| security_review_prompt().unwrap()))
        .collect();
    let first = security_review_prompt().unwrap();

    for handle in handles {
        assert!(std::ptr::eq(handle.join().unwrap(), first));
    }
}

#[test]
fn test_prompt_is_a_markdown_document() {
    let text = security_review_prompt().unwrap();
    assert!(text.starts_with("# "));
    assert!(!text.trim().is_empty());
}

#[test]
fn test_hello_world_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hello.md");
    std::fs::write(&path, "Hello, world!").unwrap();

    assert_eq!(load_text(&path).unwrap(), "Hello, world!");
}

#[test]
fn test_deleted_file_errors_instead_of_empty_value() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hello.md");
    std::fs::write(&path, "Hello, world!").unwrap();
    std::fs::remove_file(&path).unwrap();

    let err = load_text(&path).unwrap_err();
    assert!(matches!(err, PromptError::NotFound { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_invalid_utf8_is_decode_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.md");
    std::fs::write(&path, [0x48, 0x69, 0xFF, 0xFE]).unwrap();

    let err = load_text(&path).unwrap_err();
    assert!(matches!(err, PromptError::Decode { .. }));
    assert!(err.user_friendly_message().contains("not valid UTF-8"));
}
