//! Error types and exit codes for listrec
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid option values)
//! - 3: Data error (corpus shape, alternate lookup, empty vocabulary)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed corpus, missing alternate, empty vocabulary (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while cleaning, vectorizing or ranking listings
#[derive(Error, Debug)]
pub enum ListrecError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("part-of-speech filtering needs an nlprule tokenizer (set tokenizer_path or pass --tokenizer)")]
    TaggerUnavailable,

    // Data errors (exit code 3)
    #[error("text list has {texts} entries but label list has {labels}")]
    LengthMismatch { texts: usize, labels: usize },

    #[error("duplicate label in corpus: {label}")]
    DuplicateLabel { label: String },

    #[error("alternate listing not found: {id}")]
    AlternateNotFound { id: String },

    #[error("alternate listing {id} is ambiguous ({matches} matching records)")]
    AlternateAmbiguous { id: String, matches: usize },

    #[error("empty vocabulary; perhaps the documents only contain stop words")]
    EmptyVocabulary,

    #[error("invalid dataset {path}: {reason}")]
    InvalidDataset { path: String, reason: String },

    // Generic failures (exit code 1)
    #[error("failed to load tokenizer {path}: {reason}")]
    TaggerLoad { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl ListrecError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ListrecError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a dataset file that could not be interpreted
    pub fn invalid_dataset(path: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        ListrecError::InvalidDataset {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ListrecError::UsageError(_)
            | ListrecError::InvalidValue { .. }
            | ListrecError::TaggerUnavailable => ExitCode::Usage,

            ListrecError::LengthMismatch { .. }
            | ListrecError::DuplicateLabel { .. }
            | ListrecError::AlternateNotFound { .. }
            | ListrecError::AlternateAmbiguous { .. }
            | ListrecError::EmptyVocabulary
            | ListrecError::InvalidDataset { .. } => ExitCode::Data,

            ListrecError::TaggerLoad { .. }
            | ListrecError::Io(_)
            | ListrecError::Json(_)
            | ListrecError::Toml(_)
            | ListrecError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            ListrecError::UsageError(_) => "usage_error",
            ListrecError::InvalidValue { .. } => "invalid_value",
            ListrecError::TaggerUnavailable => "tagger_unavailable",
            ListrecError::TaggerLoad { .. } => "tagger_load",
            ListrecError::LengthMismatch { .. } => "length_mismatch",
            ListrecError::DuplicateLabel { .. } => "duplicate_label",
            ListrecError::AlternateNotFound { .. } => "alternate_not_found",
            ListrecError::AlternateAmbiguous { .. } => "alternate_ambiguous",
            ListrecError::EmptyVocabulary => "empty_vocabulary",
            ListrecError::InvalidDataset { .. } => "invalid_dataset",
            ListrecError::Io(_) => "io_error",
            ListrecError::Json(_) => "json_error",
            ListrecError::Toml(_) => "toml_error",
            ListrecError::Other(_) => "other",
        }
    }

    /// Structured fields for errors a caller can act on (which id, which file)
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            ListrecError::LengthMismatch { texts, labels } => {
                Some(serde_json::json!({ "texts": texts, "labels": labels }))
            }
            ListrecError::DuplicateLabel { label } => Some(serde_json::json!({ "label": label })),
            ListrecError::AlternateNotFound { id } => Some(serde_json::json!({ "id": id })),
            ListrecError::AlternateAmbiguous { id, matches } => {
                Some(serde_json::json!({ "id": id, "matches": matches }))
            }
            ListrecError::InvalidDataset { path, reason }
            | ListrecError::TaggerLoad { path, reason } => {
                Some(serde_json::json!({ "path": path, "reason": reason }))
            }
            _ => None,
        }
    }

    /// Convert error to JSON representation for structured error output.
    ///
    /// `details` is present only for errors that name an id, label or file.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });
        if let Some(details) = self.details() {
            error["details"] = details;
        }
        serde_json::json!({ "error": error })
    }
}

/// Result type alias for listrec operations
pub type Result<T> = std::result::Result<T, ListrecError>;
