//! Centralized initialization for group commands.
//!
//! Every subcommand needs the same setup: open the repository, load the
//! persisted group state, restore the store against the live change lists,
//! and run one reconciliation pass so the store reflects reality before the
//! command's own work begins. [`GroupContext`] owns that sequence plus the
//! matching save-on-finish.

use crate::core::{
    error::{CommitGroupsError, Result},
    persist::{load_snapshot, save_snapshot, CacheStateStore},
    reconciler::Reconciler,
    repository::GitRepository,
    store::GroupStore,
};
use std::env;

/// Initialized context for a group command
pub struct GroupContext {
    pub repo: GitRepository,
    pub state: CacheStateStore,
    pub store: GroupStore,
}

impl GroupContext {
    /// Open the repository in the current directory, restore persisted
    /// groups, and reconcile against the live change lists.
    pub fn initialize() -> Result<Self> {
        let current_dir = env::current_dir()?;
        let repo = GitRepository::open(&current_dir)
            .map_err(|_| CommitGroupsError::RepositoryUnavailable)?;

        let state = CacheStateStore::open(&repo.repo_path())?;
        let snapshot = load_snapshot(&state)?;

        let mut store = GroupStore::new();
        store.restore(&snapshot, &repo)?;

        log::debug!(
            "restored {} group(s) and {} file record(s)",
            store.group_count(),
            store.file_count()
        );

        Reconciler::reconcile(&mut store, &repo)?;

        Ok(GroupContext { repo, state, store })
    }

    /// Persist the store back to the state file.
    pub fn finish(&self) -> Result<()> {
        save_snapshot(&self.state, &self.store.serialize())
    }
}
