//! Move files between groups, staging or reverting tracking as needed.

use crate::commands::context::GroupContext;
use crate::core::{
    error::Result,
    mover::move_files,
    print_detail, print_error, print_success,
};
use std::path::PathBuf;

pub fn execute_move(target_group: &str, paths: Vec<PathBuf>) -> Result<()> {
    let mut context = GroupContext::initialize()?;

    let report = move_files(&mut context.store, &context.repo, &paths, target_group)?;
    context.finish()?;

    if !report.moved.is_empty() {
        print_success(&format!(
            "Moved {} file(s) to '{}'.",
            report.moved.len(),
            target_group
        ));
        for path in &report.moved {
            print_detail(&path.display().to_string());
        }
    }

    if !report.failed.is_empty() {
        print_error(&format!("{} file(s) could not be moved:", report.failed.len()));
        for (path, err) in &report.failed {
            print_detail(&format!("{}: {err}", path.display()));
        }
    }

    Ok(())
}
