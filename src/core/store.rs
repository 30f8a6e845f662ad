//! Group/file store: the single source of truth for group definitions and
//! file-to-group assignment.
//!
//! All mutation goes through [`GroupStore`]. It enforces the consistency
//! invariants:
//! - exactly one group is active once any groups exist
//! - the built-in Default and Untracked groups cannot be deleted or renamed
//! - the Untracked group is never active
//! - every path belongs to at most one group
//!
//! Every mutating method leaves the store fully consistent before returning,
//! so callers interleaved on the same thread never observe a half-updated
//! group/file graph.

use crate::core::{
    error::{CommitGroupsError, Result},
    group::{
        FileListEntry, FileRecord, Group, GroupEntry, GroupKind, DEFAULT_GROUP, UNTRACKED_GROUP,
    },
    repository::{Change, RepositoryService},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Serialized form of the whole store: the two persisted tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub groups: Vec<GroupEntry>,
    #[serde(rename = "fileList")]
    pub file_list: Vec<FileListEntry>,
}

#[derive(Debug, Default)]
pub struct GroupStore {
    groups: Vec<Group>,
    index: HashMap<PathBuf, FileRecord>,
}

impl GroupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the two built-in groups when the store has none:
    /// Default (active) and Untracked (never active).
    pub fn bootstrap(&mut self) {
        if self.groups.is_empty() {
            // Built-in labels bypass add_group's reservation check
            self.groups.push(Group::new(DEFAULT_GROUP, true));
            self.groups.push(Group::new(UNTRACKED_GROUP, false));
        }
    }

    // === Group operations ===

    /// Add a user-created group. Built-in labels are reserved for bootstrap.
    pub fn add_group(&mut self, name: &str, is_active: bool) -> Result<()> {
        if name.is_empty() {
            return Err(CommitGroupsError::EmptyGroupName);
        }
        if self.group_exists(name) {
            return Err(CommitGroupsError::duplicate_name(name));
        }
        if GroupKind::from_label(name).is_built_in() {
            return Err(CommitGroupsError::built_in_group(name));
        }

        // The very first group always becomes active so the single-active
        // invariant holds as soon as any group exists
        let activate = is_active || self.groups.is_empty();

        self.groups.push(Group::new(name, false));
        if activate {
            self.set_active_group(name)?;
        }

        Ok(())
    }

    /// Delete a group. Built-ins refuse; non-empty groups refuse. If the
    /// deleted group was active, the first remaining non-Untracked group in
    /// sort order becomes active.
    pub fn delete_group(&mut self, name: &str) -> Result<()> {
        let group = self
            .group(name)
            .ok_or_else(|| CommitGroupsError::group_not_found(name))?;

        if group.kind.is_built_in() {
            return Err(CommitGroupsError::built_in_group(name));
        }
        if !group.is_empty() {
            return Err(CommitGroupsError::non_empty_group(name, group.file_count()));
        }

        let was_active = group.active;
        self.groups.retain(|g| g.label != name);

        if was_active {
            let next = self
                .groups_sorted()
                .into_iter()
                .find(|g| g.kind != GroupKind::Untracked)
                .map(|g| g.label.clone());
            if let Some(next) = next {
                self.set_active_group(&next)?;
            }
        }

        Ok(())
    }

    /// Rename a group in place. Built-ins refuse; `old == new` is a no-op;
    /// collisions refuse. All owned records' back-references are rebound.
    pub fn rename_group(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        if old_name == new_name {
            return Ok(());
        }
        if new_name.is_empty() {
            return Err(CommitGroupsError::EmptyGroupName);
        }

        let group = self
            .group(old_name)
            .ok_or_else(|| CommitGroupsError::group_not_found(old_name))?;
        if group.kind.is_built_in() {
            return Err(CommitGroupsError::built_in_group(old_name));
        }
        if self.group_exists(new_name) || GroupKind::from_label(new_name).is_built_in() {
            return Err(CommitGroupsError::duplicate_name(new_name));
        }

        let paths: Vec<PathBuf> = group.files().to_vec();

        if let Some(group) = self.group_mut(old_name) {
            group.label = new_name.to_string();
            group.kind = GroupKind::from_label(new_name);
        }
        for path in paths {
            if let Some(record) = self.index.get_mut(&path) {
                record.group = new_name.to_string();
            }
        }

        Ok(())
    }

    /// Mark exactly one group active. Activating Untracked is a caller error.
    pub fn set_active_group(&mut self, name: &str) -> Result<()> {
        let group = self
            .group(name)
            .ok_or_else(|| CommitGroupsError::group_not_found(name))?;
        if group.kind == GroupKind::Untracked {
            return Err(CommitGroupsError::built_in_group(name));
        }

        for group in &mut self.groups {
            group.active = group.label == name;
        }

        Ok(())
    }

    pub fn active_group(&self) -> Result<&Group> {
        self.groups
            .iter()
            .find(|g| g.active)
            .ok_or(CommitGroupsError::NoActiveGroup)
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.label == name)
    }

    fn group_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.label == name)
    }

    pub fn group_exists(&self, name: &str) -> bool {
        self.group(name).is_some()
    }

    /// Groups in display order: the active group first, Untracked last,
    /// everything else in insertion order.
    pub fn groups_sorted(&self) -> Vec<&Group> {
        let mut sorted: Vec<&Group> = self.groups.iter().collect();
        sorted.sort_by_key(|g| match () {
            _ if g.kind == GroupKind::Untracked => 2u8,
            _ if g.active => 0,
            _ => 1,
        });
        sorted
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    // === File operations ===

    /// Attach a change to the named group. Unknown group names are logged
    /// and ignored; a path already present in the store stays where it is.
    pub fn add_file(&mut self, group_name: &str, change: &Change) {
        if !self.group_exists(group_name) {
            log::warn!(
                "add_file: group '{}' does not exist, dropping {}",
                group_name,
                change.path.display()
            );
            return;
        }
        if self.index.contains_key(&change.path) {
            log::debug!(
                "add_file: {} already assigned, skipping",
                change.path.display()
            );
            return;
        }

        let record = FileRecord::new(change.path.clone(), group_name, Some(change.status));
        if let Some(group) = self.group_mut(group_name) {
            group.attach(change.path.clone());
        }
        self.index.insert(change.path.clone(), record);
    }

    /// Attach a change to the currently active group. With no resolved
    /// change the caller is expected to look one up via the repository
    /// service first.
    pub fn add_file_to_active_group(&mut self, change: &Change) -> Result<()> {
        let active = self.active_group()?.label.clone();
        self.add_file(&active, change);
        Ok(())
    }

    /// Transfer ownership of paths to a target group. Pure bookkeeping:
    /// staging side effects belong to the move coordinator. Paths with no
    /// record are skipped.
    pub fn move_files(&mut self, paths: &[PathBuf], target_group: &str) -> Result<()> {
        if !self.group_exists(target_group) {
            return Err(CommitGroupsError::group_not_found(target_group));
        }

        for path in paths {
            self.move_file(path, target_group)?;
        }

        Ok(())
    }

    /// Transfer one path to a target group.
    pub fn move_file(&mut self, path: &Path, target_group: &str) -> Result<()> {
        if !self.group_exists(target_group) {
            return Err(CommitGroupsError::group_not_found(target_group));
        }

        let source = match self.index.get(path) {
            Some(record) => record.group.clone(),
            None => {
                log::debug!("move_file: no record for {}, skipping", path.display());
                return Ok(());
            }
        };
        if source == target_group {
            return Ok(());
        }

        if let Some(group) = self.group_mut(&source) {
            group.detach(path);
        }
        if let Some(group) = self.group_mut(target_group) {
            group.attach(path.to_path_buf());
        }
        if let Some(record) = self.index.get_mut(path) {
            record.group = target_group.to_string();
        }

        Ok(())
    }

    /// Detach a path from its owning group and drop the index entry.
    /// Idempotent: unknown paths are a no-op.
    pub fn remove_file(&mut self, path: &Path) {
        if let Some(record) = self.index.remove(path) {
            if let Some(group) = self.group_mut(&record.group) {
                group.detach(path);
            }
        }
    }

    /// Update a record's cached status in place, leaving its group
    /// assignment untouched.
    pub(crate) fn update_file_status(&mut self, path: &Path, status: crate::core::ChangeStatus) {
        if let Some(record) = self.index.get_mut(path) {
            record.status = Some(status);
        }
    }

    pub fn file(&self, path: &Path) -> Option<&FileRecord> {
        self.index.get(path)
    }

    pub fn file_exists(&self, path: &Path) -> bool {
        self.index.contains_key(path)
    }

    pub fn files(&self) -> impl Iterator<Item = &FileRecord> {
        self.index.values()
    }

    pub fn file_count(&self) -> usize {
        self.index.len()
    }

    /// Paths owned by one group, in the group's own order.
    pub fn group_file_list(&self, name: &str) -> Result<Vec<PathBuf>> {
        let group = self
            .group(name)
            .ok_or_else(|| CommitGroupsError::group_not_found(name))?;
        Ok(group.files().to_vec())
    }

    /// Paths owned by the active group.
    pub fn active_group_file_list(&self) -> Result<Vec<PathBuf>> {
        Ok(self.active_group()?.files().to_vec())
    }

    // === Persistence ===

    /// Serialize the two persisted tables: `{label, active}` per group and
    /// `{filepath, groupLabel}` per file, both in stable order.
    pub fn serialize(&self) -> StoreSnapshot {
        let groups = self
            .groups
            .iter()
            .map(|g| GroupEntry {
                label: g.label.clone(),
                active: g.active,
            })
            .collect();

        // Walk groups in insertion order so the file table round-trips stably
        let file_list = self
            .groups
            .iter()
            .flat_map(|g| {
                g.files().iter().map(|path| FileListEntry {
                    filepath: path.clone(),
                    group_label: g.label.clone(),
                })
            })
            .collect();

        StoreSnapshot { groups, file_list }
    }

    /// Rebuild the store from a persisted snapshot, cross-referencing every
    /// persisted path against the live repository. Groups come first
    /// (bootstrapping the built-ins when the snapshot has none); a path with
    /// no live match or an unknown group is dropped with a warning.
    pub fn restore(&mut self, snapshot: &StoreSnapshot, repo: &dyn RepositoryService) -> Result<()> {
        self.groups.clear();
        self.index.clear();

        for entry in &snapshot.groups {
            self.groups.push(Group::new(&entry.label, entry.active));
        }
        if self.groups.is_empty() {
            self.bootstrap();
        }

        for entry in &snapshot.file_list {
            if !self.group_exists(&entry.group_label) {
                log::warn!(
                    "restore: group '{}' missing for {}, dropping",
                    entry.group_label,
                    entry.filepath.display()
                );
                continue;
            }

            match repo.change_by_path(&entry.filepath)? {
                Some(change) => self.add_file(&entry.group_label, &change),
                None => {
                    log::warn!(
                        "restore: {} has no live change, dropping",
                        entry.filepath.display()
                    );
                }
            }
        }

        Ok(())
    }
}
