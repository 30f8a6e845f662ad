//! Group lifecycle commands: add, delete, rename, activate.

use crate::commands::context::GroupContext;
use crate::core::{
    error::{CommitGroupsError, Result},
    print_success,
};

pub fn execute_add_group(name: &str, activate: bool) -> Result<()> {
    // Validate at the input boundary so the bad name never reaches the store
    let name = name.trim();
    if name.is_empty() {
        return Err(CommitGroupsError::EmptyGroupName);
    }

    let mut context = GroupContext::initialize()?;
    context.store.add_group(name, activate)?;
    context.finish()?;

    if activate {
        print_success(&format!("Created group '{name}' and made it active."));
    } else {
        print_success(&format!("Created group '{name}'."));
    }
    Ok(())
}

pub fn execute_delete_group(name: &str) -> Result<()> {
    let mut context = GroupContext::initialize()?;
    context.store.delete_group(name)?;
    context.finish()?;

    print_success(&format!("Deleted group '{name}'."));
    Ok(())
}

pub fn execute_rename_group(old_name: &str, new_name: &str) -> Result<()> {
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(CommitGroupsError::EmptyGroupName);
    }

    let mut context = GroupContext::initialize()?;
    context.store.rename_group(old_name, new_name)?;
    context.finish()?;

    print_success(&format!("Renamed group '{old_name}' to '{new_name}'."));
    Ok(())
}

pub fn execute_activate_group(name: &str) -> Result<()> {
    let mut context = GroupContext::initialize()?;
    context.store.set_active_group(name)?;
    context.finish()?;

    print_success(&format!("Group '{name}' is now active."));
    Ok(())
}
