//! Grouped status view: branch header plus every group with its files.

use crate::commands::context::GroupContext;
use crate::core::{config::UserConfig, error::Result, store::GroupStore, Group};
use colored::*;

pub fn execute_status() -> Result<()> {
    let context = GroupContext::initialize()?;
    let config = UserConfig::load_or_create()?;

    if config.show_branch_header {
        let branch = context
            .repo
            .current_branch()
            .unwrap_or_else(|_| "-none-".to_string());
        let (hash, message) = context
            .repo
            .parent_commit_info()
            .unwrap_or_else(|_| ("".to_string(), "- no commits yet -".to_string()));

        println!();
        println!("On branch {}", branch.cyan());
        if hash.is_empty() {
            println!("{}", message.bright_black());
        } else {
            println!(
                "Last commit {} {}",
                hash.yellow(),
                message.bright_black()
            );
        }
    }
    println!();

    print_groups(&context.store, &config);

    context.finish()?;
    Ok(())
}

/// Render every group in display order with its files and cached statuses.
pub fn print_groups(store: &GroupStore, config: &UserConfig) {
    for group in store.groups_sorted() {
        if group.is_empty() && !group.active && !config.show_empty_groups {
            continue;
        }
        print_group_line(group);

        for path in group.files() {
            let code = store
                .file(path)
                .and_then(|record| record.status)
                .map(|status| status.as_str())
                .unwrap_or("?");
            println!("    {:<2} {}", code.red(), path.display());
        }
    }
    println!();
}

fn print_group_line(group: &Group) {
    let files = match group.file_count() {
        1 => "1 file".to_string(),
        n => format!("{n} files"),
    };

    if group.active {
        println!(
            "{} {} {} {}",
            "●".green(),
            group.label.white().bold(),
            "(active)".green(),
            format!("— {files}").bright_black()
        );
    } else {
        println!(
            "  {} {}",
            group.label.white(),
            format!("— {files}").bright_black()
        );
    }
}
