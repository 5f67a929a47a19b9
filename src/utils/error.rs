use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Prompt file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown prompt '{name}'. Known prompts: {}", known.join(", "))]
    UnknownPrompt { name: String, known: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    MissingAsset,
    Io,
    Encoding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PromptError {
    /// Maps an I/O failure on `path` to `NotFound` or `Io`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            PromptError::NotFound { path }
        } else {
            PromptError::Io { path, source }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PromptError::NotFound { .. } | PromptError::UnknownPrompt { .. } => {
                ErrorCategory::MissingAsset
            }
            PromptError::Io { .. } | PromptError::IoError(_) => ErrorCategory::Io,
            PromptError::Decode { .. } | PromptError::SerializationError(_) => {
                ErrorCategory::Encoding
            }
            PromptError::ConfigError { .. } | PromptError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// The reader of our output went away, e.g. `prompt-cat | head -1`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, PromptError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }

    pub fn severity(&self) -> ErrorSeverity {
        if self.is_broken_pipe() {
            return ErrorSeverity::Low;
        }
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::MissingAsset => ErrorSeverity::High,
            ErrorCategory::Io | ErrorCategory::Encoding => ErrorSeverity::Critical,
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 1,
            ErrorSeverity::High => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PromptError::NotFound { path } => format!(
                "Make sure {} exists, or point --root at the directory that contains it",
                path.display()
            ),
            PromptError::Io { path, .. } => {
                format!("Check that {} is a readable regular file", path.display())
            }
            PromptError::Decode { path, .. } => {
                format!("Re-save {} with UTF-8 encoding", path.display())
            }
            PromptError::UnknownPrompt { .. } => {
                "Run with --list to see the available prompt names".to_string()
            }
            PromptError::ConfigError { .. } | PromptError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again".to_string()
            }
            PromptError::IoError(_) | PromptError::SerializationError(_) => {
                "Retry the command; if it keeps failing, run with --verbose".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PromptError::NotFound { path } => {
                format!("The prompt file {} does not exist", path.display())
            }
            PromptError::Io { path, source } => {
                format!("Could not read {}: {}", path.display(), source)
            }
            PromptError::Decode { path, .. } => {
                format!("The prompt file {} is not valid UTF-8 text", path.display())
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PromptError>;
