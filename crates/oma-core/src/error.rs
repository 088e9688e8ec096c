//! Error types and exit codes for oma
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, failed checks, out-of-sync generated files)
//! - 2: Usage error (bad flags/args, unknown command, invalid scope)
//! - 3: Data error (invalid catalog manifest)

mod macros;

use std::path::PathBuf;
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
    /// Data error - invalid catalog manifest (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during oma operations
#[derive(Error, Debug)]
pub enum OmaError {
    // Usage errors (exit code 2)
    #[error("Invalid scope: {0}. Expected user, project-local, or project.")]
    InvalidScope(String),

    #[error("Missing value for {flag}")]
    MissingFlagValue { flag: String },

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("catalog manifest invalid: {field}")]
    ManifestInvalid { field: String },

    // Generic failures (exit code 1)
    #[error("{what} out of sync. Run: {remedy}")]
    OutOfSync { what: String, remedy: String },

    #[error("{passed}/{total} checks passed")]
    ChecksFailed { passed: usize, total: usize },

    #[error("{context} not found: {path:?}")]
    NotFound { context: String, path: PathBuf },

    #[error("{command} exited with status {status}")]
    CommandFailed { command: String, status: i32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("{0}")]
    Other(String),
}

impl OmaError {
    /// Create a manifest validation error naming the offending field path
    pub fn manifest(field: impl Into<String>) -> Self {
        OmaError::ManifestInvalid {
            field: field.into(),
        }
    }

    /// Create an error for a flag that requires a value but received none
    pub fn missing_flag_value(flag: &str) -> Self {
        OmaError::MissingFlagValue {
            flag: flag.to_string(),
        }
    }

    /// Create an error for a path that was expected to exist
    pub fn not_found(context: &str, path: impl Into<PathBuf>) -> Self {
        OmaError::NotFound {
            context: context.to_string(),
            path: path.into(),
        }
    }

    /// The offending field path of a manifest error
    pub fn manifest_field(&self) -> Option<&str> {
        match self {
            OmaError::ManifestInvalid { field } => Some(field),
            _ => None,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            OmaError::InvalidScope(_)
            | OmaError::MissingFlagValue { .. }
            | OmaError::UsageError(_) => ExitCode::Usage,

            OmaError::ManifestInvalid { .. } => ExitCode::Data,

            OmaError::OutOfSync { .. }
            | OmaError::ChecksFailed { .. }
            | OmaError::NotFound { .. }
            | OmaError::CommandFailed { .. }
            | OmaError::Io(_)
            | OmaError::Json(_)
            | OmaError::Walk(_)
            | OmaError::Pattern(_)
            | OmaError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            OmaError::InvalidScope(_) => "invalid_scope",
            OmaError::MissingFlagValue { .. } => "missing_flag_value",
            OmaError::UsageError(_) => "usage_error",
            OmaError::ManifestInvalid { .. } => "manifest_invalid",
            OmaError::OutOfSync { .. } => "out_of_sync",
            OmaError::ChecksFailed { .. } => "checks_failed",
            OmaError::NotFound { .. } => "not_found",
            OmaError::CommandFailed { .. } => "command_failed",
            OmaError::Io(_) => "io_error",
            OmaError::Json(_) => "json_error",
            OmaError::Walk(_) => "walk_error",
            OmaError::Pattern(_) => "pattern_error",
            OmaError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let OmaError::ManifestInvalid { field } = self {
            error_obj["field"] = serde_json::json!(field);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for oma operations
pub type Result<T> = std::result::Result<T, OmaError>;
