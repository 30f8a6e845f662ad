//! Export a group's files to a directory, preserving relative paths.

use crate::commands::context::GroupContext;
use crate::core::{error::Result, print_success};
use std::fs;
use std::path::Path;

pub fn execute_export(group: &str, target_dir: &Path) -> Result<()> {
    let context = GroupContext::initialize()?;

    let paths = context.store.group_file_list(group)?;
    let workdir = context.repo.workdir()?;

    let mut copied = 0usize;
    for path in &paths {
        let source = workdir.join(path);
        if !source.exists() {
            // Deleted files have a record but nothing on disk to copy
            log::warn!("export: {} missing on disk, skipping", path.display());
            continue;
        }

        let destination = target_dir.join(path);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&source, &destination)?;
        copied += 1;
    }

    print_success(&format!(
        "Exported {} file(s) from group '{}' to {}.",
        copied,
        group,
        target_dir.display()
    ));
    Ok(())
}
