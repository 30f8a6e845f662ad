//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`CommitGroupsError`] which provides comprehensive error
//! handling for all commit-groups operations. It uses `thiserror` for ergonomic
//! error definitions and includes specialized constructors for common failure
//! scenarios.
//!
//! # Public API
//! - [`CommitGroupsError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, CommitGroupsError>`
//!
//! # Error Categories
//! - **Group management**: Duplicate names, built-in protection, non-empty deletes
//! - **Git operations**: Repository not found, git2 library errors, subprocess failures
//! - **State persistence**: Serialization, file system, missing state errors

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for commit-groups
#[derive(Error, Debug)]
pub enum CommitGroupsError {
    // Group management errors
    #[error("Group '{name}' already exists")]
    DuplicateName { name: String },

    #[error("Group name cannot be empty")]
    EmptyGroupName,

    #[error("'{name}' is a built-in group and cannot be modified this way")]
    BuiltInGroup { name: String },

    #[error("Group '{name}' still owns {count} file(s); move them out first")]
    NonEmptyGroup { name: String, count: usize },

    #[error("Group '{name}' does not exist")]
    GroupNotFound { name: String },

    #[error("No group is currently active")]
    NoActiveGroup,

    #[error("No changed files in group '{group}' to commit")]
    NothingToCommit { group: String },

    #[error("File is not assigned to any group: {path}")]
    FileNotInGroups { path: PathBuf },

    // Git repository errors
    #[error("Not in a git repository")]
    RepositoryUnavailable,

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("git command failed: {message}")]
    GitCommandFailed { message: String },

    #[error("Invalid UTF-8 path in repository")]
    InvalidUtf8Path,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // State persistence errors
    #[error("Could not find a state directory for persisted groups")]
    StateDirectoryNotFound,

    #[error("Failed to create state directory '{path}': {source}")]
    StateDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write state file '{path}': {source}")]
    StateWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read state file '{path}': {source}")]
    StateReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse state file '{path}': {source}")]
    StateParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using CommitGroupsError
pub type Result<T> = std::result::Result<T, CommitGroupsError>;

impl CommitGroupsError {
    /// Create a duplicate group name error
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create a built-in group protection error
    pub fn built_in_group(name: impl Into<String>) -> Self {
        Self::BuiltInGroup { name: name.into() }
    }

    /// Create a non-empty group error
    pub fn non_empty_group(name: impl Into<String>, count: usize) -> Self {
        Self::NonEmptyGroup {
            name: name.into(),
            count,
        }
    }

    /// Create a group not found error
    pub fn group_not_found(name: impl Into<String>) -> Self {
        Self::GroupNotFound { name: name.into() }
    }

    /// Create a nothing-to-commit error for a group
    pub fn nothing_to_commit(group: impl Into<String>) -> Self {
        Self::NothingToCommit {
            group: group.into(),
        }
    }

    /// Create a file-not-in-groups error
    pub fn file_not_in_groups(path: impl Into<PathBuf>) -> Self {
        Self::FileNotInGroups { path: path.into() }
    }

    /// Create a git command failure error from captured stderr
    pub fn git_command_failed(message: impl Into<String>) -> Self {
        Self::GitCommandFailed {
            message: message.into(),
        }
    }

    /// Create a state directory creation failed error
    pub fn state_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::StateDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a state write failed error
    pub fn state_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StateWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a state read failed error
    pub fn state_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StateReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a state parse failed error
    pub fn state_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::StateParseFailed {
            path: path.into(),
            source,
        }
    }
}
