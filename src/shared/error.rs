use std::fmt;
use std::io;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a failed join from
/// a usage or configuration problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the output resource was written
    Success = 0,
    /// The join pipeline failed at one of its stages
    JoinFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (invalid config file, invalid request, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::JoinFailed => write!(f, "Join Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-level errors raised before the join pipeline starts.
#[derive(Debug, Error)]
pub enum JoinerError {
    /// Validation error for request construction
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid config value for '{field}': {value}\n\n💡 Hint: {hint}")]
    InvalidConfigValue {
        field: String,
        value: String,
        hint: String,
    },
}

/// Errors reported by a text storage provider.
///
/// Every variant carries the resource key it concerns and a human-readable
/// description of the underlying cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Resource not found: {key}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists")]
    NotFound { key: String, details: String },

    #[error("Permission denied: {key}\nDetails: {details}\n\n💡 Hint: Please verify that you have the required permissions")]
    PermissionDenied { key: String, details: String },

    #[error("Resource is not valid UTF-8 text: {key}\nDetails: {details}")]
    InvalidEncoding { key: String, details: String },

    #[error("No space left to write: {key}\nDetails: {details}")]
    NoSpace { key: String, details: String },

    #[error("Security violation: {key}\nReason: {details}")]
    Rejected { key: String, details: String },

    #[error("I/O error: {key}\nDetails: {details}")]
    Io { key: String, details: String },
}

impl StorageError {
    /// Maps an I/O error onto the storage taxonomy.
    pub fn from_io(key: &str, error: &io::Error) -> Self {
        let key = key.to_string();
        let details = error.to_string();
        match error.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound { key, details },
            io::ErrorKind::PermissionDenied => StorageError::PermissionDenied { key, details },
            io::ErrorKind::StorageFull => StorageError::NoSpace { key, details },
            io::ErrorKind::InvalidData => StorageError::InvalidEncoding { key, details },
            _ => StorageError::Io { key, details },
        }
    }

    pub fn key(&self) -> &str {
        match self {
            StorageError::NotFound { key, .. }
            | StorageError::PermissionDenied { key, .. }
            | StorageError::InvalidEncoding { key, .. }
            | StorageError::NoSpace { key, .. }
            | StorageError::Rejected { key, .. }
            | StorageError::Io { key, .. } => key,
        }
    }

    pub fn details(&self) -> &str {
        match self {
            StorageError::NotFound { details, .. }
            | StorageError::PermissionDenied { details, .. }
            | StorageError::InvalidEncoding { details, .. }
            | StorageError::NoSpace { details, .. }
            | StorageError::Rejected { details, .. }
            | StorageError::Io { details, .. } => details,
        }
    }

    /// Short machine-friendly name of the failure kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            StorageError::NotFound { .. } => "not-found",
            StorageError::PermissionDenied { .. } => "permission-denied",
            StorageError::InvalidEncoding { .. } => "invalid-encoding",
            StorageError::NoSpace { .. } => "no-space",
            StorageError::Rejected { .. } => "rejected",
            StorageError::Io { .. } => "io",
        }
    }
}
