use super::JoinStage;
use crate::shared::error::StorageError;
use thiserror::Error;

/// Failure of a join, tagged with the stage it originated in.
///
/// `Read` and `Write` expose the storage error as their `source()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinFailure {
    #[error("Join failed at stage {stage}: could not read {key}")]
    Read {
        stage: JoinStage,
        key: String,
        #[source]
        cause: StorageError,
    },

    #[error("Join failed at stage compose: {cause}")]
    Compose { cause: String },

    #[error("Join failed at stage write: could not write {key}")]
    Write {
        key: String,
        /// The joined text that could not be persisted
        composed: String,
        #[source]
        cause: StorageError,
    },
}

impl JoinFailure {
    pub fn read_first(key: impl Into<String>, cause: StorageError) -> Self {
        JoinFailure::Read {
            stage: JoinStage::ReadFirst,
            key: key.into(),
            cause,
        }
    }

    pub fn read_second(key: impl Into<String>, cause: StorageError) -> Self {
        JoinFailure::Read {
            stage: JoinStage::ReadSecond,
            key: key.into(),
            cause,
        }
    }

    pub fn stage(&self) -> JoinStage {
        match self {
            JoinFailure::Read { stage, .. } => *stage,
            JoinFailure::Compose { .. } => JoinStage::Compose,
            JoinFailure::Write { .. } => JoinStage::Write,
        }
    }

    /// Human-readable description of the underlying cause
    pub fn cause(&self) -> String {
        match self {
            JoinFailure::Read { cause, .. } | JoinFailure::Write { cause, .. } => {
                cause.details().to_string()
            }
            JoinFailure::Compose { cause } => cause.clone(),
        }
    }

    pub fn storage_error(&self) -> Option<&StorageError> {
        match self {
            JoinFailure::Read { cause, .. } | JoinFailure::Write { cause, .. } => Some(cause),
            JoinFailure::Compose { .. } => None,
        }
    }

    /// The joined text, available only when the write stage failed
    pub fn composed(&self) -> Option<&str> {
        match self {
            JoinFailure::Write { composed, .. } => Some(composed),
            _ => None,
        }
    }

    /// Key of the resource involved, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            JoinFailure::Read { key, .. } | JoinFailure::Write { key, .. } => Some(key),
            JoinFailure::Compose { .. } => None,
        }
    }
}
