//! Error types for task store operations.
//!
//! Every failure a store operation can produce is a [`TaskError`]. Errors fall
//! into three groups, exposed through [`TaskError::severity`]:
//!
//! - **Validation**: bad input from the user (empty description, empty search
//!   keyword, missing or out-of-range selection). The operation is aborted and
//!   the store is left as it was.
//! - **Not found**: loading from a file that does not exist. Reported as a
//!   warning; the store is unchanged.
//! - **Fatal**: unknown priority during a sort, I/O failures, malformed JSON
//!   or records that break the model invariants.
//!
//! None of these leave the store partially modified.

use std::path::PathBuf;
use thiserror::Error;

/// How the boundary layer should treat an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Validation,
    NotFound,
    Fatal,
}

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Task cannot be empty!")]
    EmptyDescription,

    #[error("Search keyword cannot be empty!")]
    EmptyKeyword,

    #[error("No task selected!")]
    InvalidSelection,

    #[error("No saved tasks found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Task #{} has unknown priority '{}' (expected High, Medium, Low or No priority)", .position + 1, .value)]
    UnknownPriority { position: usize, value: String },

    #[error("Saved task #{} has an empty description", .position + 1)]
    InvalidRecord { position: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Result using TaskError
pub type Result<T> = std::result::Result<T, TaskError>;

impl TaskError {
    pub fn severity(&self) -> Severity {
        match self {
            TaskError::EmptyDescription | TaskError::EmptyKeyword | TaskError::InvalidSelection => Severity::Validation,
            TaskError::NotFound(_) => Severity::NotFound,
            TaskError::UnknownPriority { .. } | TaskError::InvalidRecord { .. } | TaskError::Io(_) | TaskError::Json(_) => Severity::Fatal,
        }
    }
}
