//! Type-safe git change status enumeration.
//!
//! This module defines [`ChangeStatus`] which replaces string-based status codes
//! with a proper enumeration. Every file record in the group store caches one of
//! these values as the last known repository state of its path.
//!
//! # Public API
//! - [`ChangeStatus`]: Main enumeration for all git change status types
//!
//! # Key Features
//! - **Type safety**: Compile-time checking instead of runtime string comparisons
//! - **git2 integration**: Direct conversion from git2::Status flags
//! - **Display formatting**: Consistent string representation for UI output

use serde::{Deserialize, Serialize};
use std::fmt;

/// Git change status enum to replace string-based status codes
///
/// Covers the index (staged) and working-tree halves of a git status
/// entry plus the untracked/ignored/conflicted states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeStatus {
    /// No change relative to HEAD
    Unmodified,
    /// Modified file (M)
    Modified,
    /// Added/new file in index (A)
    Added,
    /// Deleted file (D)
    Deleted,
    /// Renamed file (R)
    Renamed,
    /// Copied file (C)
    Copied,
    /// Type changed (T)
    TypeChanged,
    /// Marked with `git add -N` but content not staged yet
    IntentToAdd,
    /// Untracked file (??)
    Untracked,
    /// Ignored file (!!)
    Ignored,
    /// Unmerged/conflicted file (UU)
    Conflicted,
}

impl ChangeStatus {
    /// Convert git2::Status flags to the staged (index) half of the status.
    /// Returns None when the flags carry no index change.
    pub fn from_git2_staged(flags: git2::Status) -> Option<ChangeStatus> {
        if flags.contains(git2::Status::INDEX_NEW) {
            return Some(ChangeStatus::Added);
        }
        if flags.contains(git2::Status::INDEX_MODIFIED) {
            return Some(ChangeStatus::Modified);
        }
        if flags.contains(git2::Status::INDEX_DELETED) {
            return Some(ChangeStatus::Deleted);
        }
        if flags.contains(git2::Status::INDEX_RENAMED) {
            return Some(ChangeStatus::Renamed);
        }
        if flags.contains(git2::Status::INDEX_TYPECHANGE) {
            return Some(ChangeStatus::TypeChanged);
        }

        None
    }

    /// Convert git2::Status flags to the working-tree half of the status.
    /// Returns None when the flags carry no working-tree change.
    pub fn from_git2_working_tree(flags: git2::Status) -> Option<ChangeStatus> {
        // Conflicts take precedence over everything else
        if flags.contains(git2::Status::CONFLICTED) {
            return Some(ChangeStatus::Conflicted);
        }

        if flags.contains(git2::Status::WT_NEW) {
            return Some(ChangeStatus::Untracked);
        }
        if flags.contains(git2::Status::WT_MODIFIED) {
            return Some(ChangeStatus::Modified);
        }
        if flags.contains(git2::Status::WT_DELETED) {
            return Some(ChangeStatus::Deleted);
        }
        if flags.contains(git2::Status::WT_RENAMED) {
            return Some(ChangeStatus::Renamed);
        }
        if flags.contains(git2::Status::WT_TYPECHANGE) {
            return Some(ChangeStatus::TypeChanged);
        }
        if flags.contains(git2::Status::IGNORED) {
            return Some(ChangeStatus::Ignored);
        }

        None
    }

    /// Get the short-code representation for display
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeStatus::Unmodified => " ",
            ChangeStatus::Modified => "M",
            ChangeStatus::Added => "A",
            ChangeStatus::Deleted => "D",
            ChangeStatus::Renamed => "R",
            ChangeStatus::Copied => "C",
            ChangeStatus::TypeChanged => "T",
            ChangeStatus::IntentToAdd => "N",
            ChangeStatus::Untracked => "??",
            ChangeStatus::Ignored => "!!",
            ChangeStatus::Conflicted => "UU",
        }
    }

    /// Get human-readable description for status
    pub fn description(&self) -> &'static str {
        match self {
            ChangeStatus::Unmodified => "unmodified",
            ChangeStatus::Modified => "modified",
            ChangeStatus::Added => "new",
            ChangeStatus::Deleted => "deleted",
            ChangeStatus::Renamed => "renamed",
            ChangeStatus::Copied => "copied",
            ChangeStatus::TypeChanged => "type changed",
            ChangeStatus::IntentToAdd => "intent to add",
            ChangeStatus::Untracked => "untracked",
            ChangeStatus::Ignored => "ignored",
            ChangeStatus::Conflicted => "both modified",
        }
    }

    /// Whether this working-tree status routes the file into the active group
    /// during reconciliation. Untracked files route into the Untracked group
    /// instead; everything else is left alone.
    pub fn belongs_to_active_group(&self) -> bool {
        matches!(
            self,
            ChangeStatus::Modified
                | ChangeStatus::Deleted
                | ChangeStatus::IntentToAdd
                | ChangeStatus::TypeChanged
        )
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
