use clap::{Parser, Subcommand};
use commit_groups::commands::*;
use commit_groups::core::{
    error::{CommitGroupsError, Result},
    print_error,
};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "commit-groups")]
#[command(about = "Organize uncommitted git changes into named commit groups")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every group with its files and statuses
    Status,
    /// Re-sync groups with the repository's current changes
    Refresh,
    /// Create a new group
    AddGroup {
        /// Name of the group to create
        name: String,
        /// Make the new group active immediately
        #[arg(long)]
        activate: bool,
    },
    /// Delete an empty, non-built-in group
    DeleteGroup {
        /// Name of the group to delete
        name: String,
    },
    /// Rename a non-built-in group
    RenameGroup {
        /// Current group name
        old_name: String,
        /// New group name
        new_name: String,
    },
    /// Make a group the active target for new changes and commits
    ActivateGroup {
        /// Name of the group to activate
        name: String,
    },
    /// Move files into a group (stages/unstages across the untracked boundary)
    Move {
        /// Target group name
        group: String,
        /// Repository-relative paths to move
        paths: Vec<PathBuf>,
    },
    /// Commit one group's files with a single message
    Commit {
        /// Group to commit (defaults to the active group)
        #[arg(short = 'g', long = "group")]
        group: Option<String>,
        /// Commit message
        #[arg(short = 'm', long = "message")]
        message: String,
    },
    /// Show the change for one file
    Diff {
        /// Repository-relative path
        path: PathBuf,
    },
    /// Copy a group's files into a directory
    Export {
        /// Group to export
        group: String,
        /// Destination directory
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = match cli.command {
        Commands::Status => execute_status(),
        Commands::Refresh => execute_refresh(),
        Commands::AddGroup { name, activate } => execute_add_group(&name, activate),
        Commands::DeleteGroup { name } => execute_delete_group(&name),
        Commands::RenameGroup { old_name, new_name } => {
            execute_rename_group(&old_name, &new_name)
        }
        Commands::ActivateGroup { name } => execute_activate_group(&name),
        Commands::Move { group, paths } => execute_move(&group, paths),
        Commands::Commit { group, message } => execute_commit(group.as_deref(), &message),
        Commands::Diff { path } => execute_diff(&path),
        Commands::Export { group, dir } => execute_export(&group, &dir),
    };

    if let Err(e) = result {
        if let CommitGroupsError::RepositoryUnavailable = e {
            print_error("Not in a git repository");
        } else {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }

    Ok(())
}
