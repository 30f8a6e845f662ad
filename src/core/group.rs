//! Group and file record data entities.
//!
//! A [`Group`] is a named, orderable container of file paths; a [`FileRecord`]
//! binds one repository path to its owning group plus the last known change
//! status. The [`GroupStore`](crate::core::store::GroupStore) owns both and
//! enforces the invariants between them.

use crate::core::change_status::ChangeStatus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Label of the built-in default group (always exists, holds tracked changes)
pub const DEFAULT_GROUP: &str = "Default";

/// Label of the built-in untracked group (always exists, never active)
pub const UNTRACKED_GROUP: &str = "Untracked";

/// The kind of a group: two built-in kinds plus user-created ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKind {
    Default,
    Untracked,
    Custom,
}

impl GroupKind {
    /// Derive the kind from a group label. The two built-in labels are
    /// reserved; everything else is a custom group.
    pub fn from_label(label: &str) -> GroupKind {
        match label {
            DEFAULT_GROUP => GroupKind::Default,
            UNTRACKED_GROUP => GroupKind::Untracked,
            _ => GroupKind::Custom,
        }
    }

    pub fn is_built_in(&self) -> bool {
        matches!(self, GroupKind::Default | GroupKind::Untracked)
    }
}

/// A named bucket holding a disjoint subset of changed file paths.
///
/// The group is the exclusive owner of its membership list; the store's
/// path index holds back-references only.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub label: String,
    pub kind: GroupKind,
    pub active: bool,
    files: Vec<PathBuf>,
}

impl Group {
    pub fn new(label: impl Into<String>, active: bool) -> Self {
        let label = label.into();
        let kind = GroupKind::from_label(&label);
        Group {
            label,
            kind,
            active,
            files: Vec::new(),
        }
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.iter().any(|p| p == path)
    }

    /// Append a path to this group's membership list.
    /// The store is responsible for keeping the path index in sync.
    pub(crate) fn attach(&mut self, path: PathBuf) {
        self.files.push(path);
    }

    /// Remove a path from this group's membership list (no-op if absent).
    pub(crate) fn detach(&mut self, path: &Path) {
        if let Some(pos) = self.files.iter().position(|p| p == path) {
            self.files.remove(pos);
        }
    }
}

/// The store's internal entry binding a path to its owning group and the
/// last known repository status.
///
/// `status` is `None` when the record was restored from a persisted snapshot
/// and the live repository has not yet confirmed it.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub group: String,
    pub status: Option<ChangeStatus>,
}

impl FileRecord {
    pub fn new(path: PathBuf, group: impl Into<String>, status: Option<ChangeStatus>) -> Self {
        FileRecord {
            path,
            group: group.into(),
            status,
        }
    }
}

/// Persisted form of a group: `{label, active}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupEntry {
    pub label: String,
    pub active: bool,
}

/// Persisted form of a file record: `{filepath, groupLabel}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileListEntry {
    #[serde(rename = "filepath")]
    pub filepath: PathBuf,
    #[serde(rename = "groupLabel")]
    pub group_label: String,
}
