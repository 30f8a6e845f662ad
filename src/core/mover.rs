//! Move coordinator: file moves plus their repository side effects.
//!
//! Moving a file between groups is two separate steps: the repository
//! mutation (stage when leaving Untracked, unstage when entering it) and the
//! store's own bookkeeping. The repository call runs first; when it fails,
//! that path's store membership is left unchanged and the failure is
//! reported in the batch result rather than aborting the whole move.

use crate::core::{
    error::{CommitGroupsError, Result},
    group::{GroupKind, UNTRACKED_GROUP},
    repository::RepositoryService,
    store::GroupStore,
};
use std::path::PathBuf;

/// Outcome of one batch move: which paths landed, which did not and why.
#[derive(Debug, Default)]
pub struct MoveReport {
    pub moved: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, CommitGroupsError)>,
}

impl MoveReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Move paths into `target_group`, staging or unstaging each path as it
/// crosses the tracked/untracked boundary. Partial success is preserved.
pub fn move_files(
    store: &mut GroupStore,
    repo: &dyn RepositoryService,
    paths: &[PathBuf],
    target_group: &str,
) -> Result<MoveReport> {
    let target_kind = store
        .group(target_group)
        .map(|g| g.kind)
        .ok_or_else(|| CommitGroupsError::group_not_found(target_group))?;

    let mut report = MoveReport::default();

    for path in paths {
        let source = match store.file(path) {
            Some(record) => record.group.clone(),
            None => {
                report
                    .failed
                    .push((path.clone(), CommitGroupsError::file_not_in_groups(path)));
                continue;
            }
        };
        if source == target_group {
            continue;
        }

        let source_kind = GroupKind::from_label(&source);
        let crossing = match (source_kind, target_kind) {
            (GroupKind::Untracked, t) if t != GroupKind::Untracked => {
                repo.stage(std::slice::from_ref(path))
            }
            (s, GroupKind::Untracked) if s != GroupKind::Untracked => {
                repo.unstage(std::slice::from_ref(path))
            }
            _ => Ok(()),
        };

        match crossing {
            Ok(()) => {
                store.move_file(path, target_group)?;
                report.moved.push(path.clone());
            }
            Err(e) => {
                log::warn!("move: repository call failed for {}: {e}", path.display());
                report.failed.push((path.clone(), e));
            }
        }
    }

    Ok(report)
}
