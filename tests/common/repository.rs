//! Git repository management and setup utilities
//!
//! Provides functions for creating and managing test repositories with various
//! states, plus a preconfigured binary runner that keeps each test's persisted
//! group state isolated in its own cache directory.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository setup result. The temp directories must be kept alive for
/// the duration of the test: `temp_dir` is the working tree, `cache_dir` and
/// `config_dir` are the isolated XDG homes holding the persisted group state
/// and the user config.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub cache_dir: TempDir,
    pub config_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Get the repository path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A `commit-groups` command preconfigured to run inside this repository
    /// with its own isolated state directory.
    pub fn cli(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("commit-groups").expect("binary not built");
        cmd.current_dir(&self.path)
            .env("XDG_CACHE_HOME", self.cache_dir.path())
            .env("XDG_CONFIG_HOME", self.config_dir.path())
            .env("NO_COLOR", "1");
        cmd
    }
}

/// Sets up a fresh git repository for testing
///
/// Creates a temporary directory, initializes it as a git repository, and
/// sets up basic git configuration to avoid user prompts.
pub fn setup_test_repo() -> anyhow::Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let cache_dir = TempDir::new()?;
    let config_dir = TempDir::new()?;
    let repo_path = temp_dir.path().to_path_buf();

    // Initialize git repo
    Command::new("git")
        .args(["init"])
        .current_dir(&repo_path)
        .output()?;

    // Set git config to avoid prompts during tests
    Command::new("git")
        .args(["config", "user.name", "Test User"])
        .current_dir(&repo_path)
        .output()?;

    Command::new("git")
        .args(["config", "user.email", "test@example.com"])
        .current_dir(&repo_path)
        .output()?;

    Ok(TestRepo {
        temp_dir,
        cache_dir,
        config_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with an initial commit containing "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> anyhow::Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Creates a file with specified content in the repository
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> anyhow::Result<()> {
    let full = repo_path.join(filename);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(full, content)?;
    Ok(())
}

/// Adds a file to the git index
pub fn git_add(repo_path: &Path, filename: &str) -> anyhow::Result<()> {
    Command::new("git")
        .args(["add", filename])
        .current_dir(repo_path)
        .output()?;
    Ok(())
}

/// Creates a git commit with the specified message
pub fn git_commit(repo_path: &Path, message: &str) -> anyhow::Result<()> {
    Command::new("git")
        .args(["commit", "-m", message])
        .current_dir(repo_path)
        .output()?;
    Ok(())
}

/// Returns the subject lines of the repository's log, newest first
pub fn git_log_subjects(repo_path: &Path) -> anyhow::Result<Vec<String>> {
    let output = Command::new("git")
        .args(["log", "--format=%s"])
        .current_dir(repo_path)
        .output()?;
    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| l.to_string())
        .collect())
}

/// Returns the porcelain status lines for the repository
pub fn git_status_lines(repo_path: &Path) -> anyhow::Result<Vec<String>> {
    let output = Command::new("git")
        .args(["status", "--porcelain"])
        .current_dir(repo_path)
        .output()?;
    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| l.to_string())
        .collect())
}

/// Removes a file from the filesystem (not from git)
pub fn remove_file(repo_path: &Path, filename: &str) -> anyhow::Result<()> {
    fs::remove_file(repo_path.join(filename))?;
    Ok(())
}

/// Creates multiple test files with sequential content
pub fn create_test_files(repo_path: &Path, filenames: &[&str]) -> anyhow::Result<()> {
    for (i, filename) in filenames.iter().enumerate() {
        let content = format!("content{}\nline 2\n", i + 1);
        create_file(repo_path, filename, &content)?;
    }
    Ok(())
}

/// Modifies multiple test files with new content
pub fn modify_test_files(repo_path: &Path, filenames: &[&str]) -> anyhow::Result<()> {
    for (i, filename) in filenames.iter().enumerate() {
        let content = format!("modified{}\nline 2\nnew line\n", i + 1);
        create_file(repo_path, filename, &content)?;
    }
    Ok(())
}
