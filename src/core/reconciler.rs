//! Repository change reconciler.
//!
//! Keeps the [`GroupStore`] consistent with the repository's live change
//! lists after every change notification, without discarding user-made group
//! assignments. One reconciliation pass:
//!
//! 1. snapshot the store's current paths
//! 2. upsert the untracked list into the Untracked group
//! 3. upsert the staged list into the active group
//! 4. upsert working-tree changes by status (untracked entries are filtered
//!    through the repository's ignore check first)
//! 5. remove every previously known path absent from all three lists
//!
//! The upsert never reassigns a record's group once an assignment exists:
//! only the initial placement of a path is automatic.

use crate::core::{
    error::Result,
    group::UNTRACKED_GROUP,
    repository::{Change, RepositoryService},
    store::GroupStore,
};
use std::collections::HashSet;
use std::path::PathBuf;

pub struct Reconciler;

impl Reconciler {
    /// Run one reconciliation pass against the live change lists.
    pub fn reconcile(store: &mut GroupStore, repo: &dyn RepositoryService) -> Result<()> {
        let snapshot = repo.current_changes()?;

        let old_paths: Vec<PathBuf> = store.files().map(|r| r.path.clone()).collect();
        let mut seen: HashSet<PathBuf> = HashSet::new();

        for change in &snapshot.untracked {
            seen.insert(change.path.clone());
            Self::upsert(store, UNTRACKED_GROUP, change);
        }

        let active = store.active_group()?.label.clone();
        for change in &snapshot.staged {
            seen.insert(change.path.clone());
            Self::upsert(store, &active, change);
        }

        for change in &snapshot.working_tree {
            seen.insert(change.path.clone());

            if change.status.belongs_to_active_group() {
                Self::upsert(store, &active, change);
            } else if change.status == crate::core::ChangeStatus::Untracked {
                let ignored = repo.check_ignored(std::slice::from_ref(&change.path))?;
                if ignored.contains(&change.path) {
                    seen.remove(&change.path);
                    continue;
                }
                Self::upsert(store, UNTRACKED_GROUP, change);
            } else {
                log::debug!(
                    "reconcile: leaving {} alone (status {})",
                    change.path.display(),
                    change.status
                );
            }
        }

        // Paths gone from every change list were committed or reverted
        for path in old_paths {
            if !seen.contains(&path) {
                log::debug!("reconcile: {} left the change lists, removing", path.display());
                store.remove_file(&path);
            }
        }

        Ok(())
    }

    /// Upsert one change into a target group.
    ///
    /// - no record yet: create it in the target group
    /// - cached status equals the live one: no-op
    /// - cached status absent (restored record): attach the live status
    /// - cached status differs: refresh the status in place, group untouched
    fn upsert(store: &mut GroupStore, target_group: &str, change: &Change) {
        match store.file(&change.path) {
            None => store.add_file(target_group, change),
            Some(record) => match record.status {
                Some(status) if status == change.status => {}
                _ => store.update_file_status(&change.path, change.status),
            },
        }
    }
}

/// Single-slot serialization of reconciliation triggers.
///
/// Change notifications can arrive while a pass is still running its
/// repository calls. The gate admits one pass at a time; triggers received
/// in flight coalesce into a single pending rerun.
#[derive(Debug, Default)]
pub struct ReconcileGate {
    in_flight: bool,
    pending: bool,
}

impl ReconcileGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a pass. Returns true when the caller should run one now;
    /// false when a pass is already in flight (the trigger is remembered).
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            self.pending = true;
            false
        } else {
            self.in_flight = true;
            true
        }
    }

    /// Mark the current pass finished. Returns true when a coalesced trigger
    /// arrived in flight and the caller should immediately run another pass.
    pub fn finish(&mut self) -> bool {
        self.in_flight = false;
        std::mem::take(&mut self.pending)
    }
}
