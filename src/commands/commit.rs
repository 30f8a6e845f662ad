//! Commit one group's files with a single message.

use crate::commands::context::GroupContext;
use crate::core::{
    error::{CommitGroupsError, Result},
    reconciler::Reconciler,
    repository::RepositoryService,
    print_success,
};

/// Commit the named group's files, defaulting to the active group.
pub fn execute_commit(group: Option<&str>, message: &str) -> Result<()> {
    let mut context = GroupContext::initialize()?;

    let group_label = match group {
        Some(name) => {
            if !context.store.group_exists(name) {
                return Err(CommitGroupsError::group_not_found(name));
            }
            name.to_string()
        }
        None => context.store.active_group()?.label.clone(),
    };

    let paths = context.store.group_file_list(&group_label)?;
    if paths.is_empty() {
        return Err(CommitGroupsError::nothing_to_commit(&group_label));
    }

    // Stage first so untracked members are committable too
    context.repo.stage(&paths)?;
    context.repo.commit(&paths, message)?;

    // Committed paths drop out of the change lists on the next pass
    Reconciler::reconcile(&mut context.store, &context.repo)?;
    context.finish()?;

    print_success(&format!(
        "Committed {} file(s) from group '{}'.",
        paths.len(),
        group_label
    ));
    Ok(())
}
