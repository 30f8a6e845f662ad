//! Show the change for one file (the open-change action).

use crate::commands::context::GroupContext;
use crate::core::{error::Result, repository::RepositoryService, print_info};
use std::path::Path;

pub fn execute_diff(path: &Path) -> Result<()> {
    let context = GroupContext::initialize()?;

    let diff = context.repo.diff(path)?;
    if diff.is_empty() {
        print_info(&format!("No changes for {}", path.display()));
    } else {
        println!("{diff}");
    }

    Ok(())
}
