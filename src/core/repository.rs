//! Repository service: live change lists and working-tree mutations.
//!
//! The group store and reconciler never touch git directly; they consume the
//! narrow [`RepositoryService`] trait defined here. [`GitRepository`] is the
//! production implementation: status/ignore/metadata reads go through `git2`,
//! working-tree mutations (stage, unstage, commit) shell out to the
//! `git` binary.
//!
//! # Public API
//! - [`RepositoryService`]: collaborator interface consumed by the core
//! - [`GitRepository`]: git2 + subprocess implementation
//! - [`Change`], [`ChangeSnapshot`]: the live change lists

use crate::core::{
    change_status::ChangeStatus,
    error::{CommitGroupsError, Result},
};
use git2::{Repository, StatusOptions};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One changed path with its repository status
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    pub path: PathBuf,
    pub status: ChangeStatus,
}

impl Change {
    pub fn new(path: impl Into<PathBuf>, status: ChangeStatus) -> Self {
        Change {
            path: path.into(),
            status,
        }
    }
}

/// Snapshot of the repository's current change lists.
///
/// Mirrors the three lists the reconciler consumes: untracked files,
/// index (staged) changes, and working-tree changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSnapshot {
    pub untracked: Vec<Change>,
    pub staged: Vec<Change>,
    pub working_tree: Vec<Change>,
}

impl ChangeSnapshot {
    pub fn is_empty(&self) -> bool {
        self.untracked.is_empty() && self.staged.is_empty() && self.working_tree.is_empty()
    }
}

/// The external collaborator providing live change lists and
/// stage/unstage/commit/diff operations.
pub trait RepositoryService {
    /// Query the current change lists.
    fn current_changes(&self) -> Result<ChangeSnapshot>;

    /// Resolve a single path against the live change lists: index changes
    /// first, then working tree, then untracked.
    fn change_by_path(&self, path: &Path) -> Result<Option<Change>> {
        let snapshot = self.current_changes()?;
        Ok(snapshot
            .staged
            .iter()
            .chain(snapshot.working_tree.iter())
            .chain(snapshot.untracked.iter())
            .find(|c| c.path == path)
            .cloned())
    }

    /// Add paths to git tracking (stage them).
    fn stage(&self, paths: &[PathBuf]) -> Result<()>;

    /// Remove paths from the index (revert tracking).
    fn unstage(&self, paths: &[PathBuf]) -> Result<()>;

    /// Commit exactly the given paths with one message.
    fn commit(&self, paths: &[PathBuf], message: &str) -> Result<()>;

    /// Return the subset of paths matched by an ignore rule.
    fn check_ignored(&self, paths: &[PathBuf]) -> Result<HashSet<PathBuf>>;

    /// Produce a unified diff for one path against HEAD.
    fn diff(&self, path: &Path) -> Result<String>;
}

pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitRepository { repo })
    }

    /// Execute a git command in the repository's working directory
    fn execute_git_command(&self, mut cmd: std::process::Command) -> Result<String> {
        let workdir = self
            .repo
            .workdir()
            .ok_or_else(|| CommitGroupsError::git_command_failed("bare repository"))?;

        cmd.current_dir(workdir);

        let output = cmd.output().map_err(CommitGroupsError::Io)?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            return Err(CommitGroupsError::git_command_failed(error_msg.trim()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    pub fn workdir(&self) -> Result<&Path> {
        self.repo
            .workdir()
            .ok_or_else(|| CommitGroupsError::git_command_failed("bare repository"))
    }

    pub fn repo_path(&self) -> PathBuf {
        self.repo.path().to_path_buf()
    }

    pub fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;

        if let Some(branch_name) = head.shorthand() {
            if head.is_branch() {
                Ok(branch_name.to_string())
            } else if let Some(oid) = head.target() {
                Ok(format!("detached at {}", &oid.to_string()[..7]))
            } else {
                Ok("-none-".to_string())
            }
        } else {
            Ok("-none-".to_string())
        }
    }

    pub fn parent_commit_info(&self) -> Result<(String, String)> {
        match self.repo.head() {
            Ok(head) => {
                if let Some(oid) = head.target() {
                    let commit = self.repo.find_commit(oid)?;
                    let short_hash = oid.to_string()[..7].to_string();
                    let message = commit
                        .message()
                        .unwrap_or("")
                        .lines()
                        .next()
                        .unwrap_or("")
                        .to_string();
                    Ok((short_hash, message))
                } else {
                    Ok(("".to_string(), "- no commits yet -".to_string()))
                }
            }
            Err(_) => Ok(("".to_string(), "- no commits yet -".to_string())),
        }
    }
}

impl RepositoryService for GitRepository {
    fn current_changes(&self) -> Result<ChangeSnapshot> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true);
        opts.recurse_untracked_dirs(true);
        opts.include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        let mut snapshot = ChangeSnapshot::default();

        for entry in statuses.iter() {
            let path = entry.path().ok_or(CommitGroupsError::InvalidUtf8Path)?;
            let flags = entry.status();
            let path_buf = PathBuf::from(path);

            if let Some(status) = ChangeStatus::from_git2_staged(flags) {
                snapshot.staged.push(Change::new(path_buf.clone(), status));
            }

            // A path can carry a working-tree change on top of a staged one
            if let Some(status) = ChangeStatus::from_git2_working_tree(flags) {
                if status == ChangeStatus::Untracked {
                    snapshot.untracked.push(Change::new(path_buf, status));
                } else {
                    snapshot.working_tree.push(Change::new(path_buf, status));
                }
            }
        }

        Ok(snapshot)
    }

    fn stage(&self, paths: &[PathBuf]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }

        let mut cmd = std::process::Command::new("git");
        cmd.arg("add").arg("--");
        for path in paths {
            cmd.arg(path);
        }

        self.execute_git_command(cmd).map(|_| ())
    }

    fn unstage(&self, paths: &[PathBuf]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }

        let mut cmd = std::process::Command::new("git");
        cmd.arg("reset").arg("HEAD").arg("--");
        for path in paths {
            cmd.arg(path);
        }

        self.execute_git_command(cmd).map(|_| ())
    }

    fn commit(&self, paths: &[PathBuf], message: &str) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }

        let mut cmd = std::process::Command::new("git");
        cmd.arg("commit").arg("-m").arg(message).arg("--");
        for path in paths {
            cmd.arg(path);
        }

        self.execute_git_command(cmd).map(|_| ())
    }

    fn check_ignored(&self, paths: &[PathBuf]) -> Result<HashSet<PathBuf>> {
        let mut ignored = HashSet::new();
        for path in paths {
            if self.repo.is_path_ignored(path)? {
                ignored.insert(path.clone());
            }
        }
        Ok(ignored)
    }

    fn diff(&self, path: &Path) -> Result<String> {
        let mut cmd = std::process::Command::new("git");
        cmd.arg("diff").arg("HEAD").arg("--").arg(path);
        self.execute_git_command(cmd)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_repo() -> Result<(TempDir, GitRepository)> {
        let temp_dir = TempDir::new().map_err(CommitGroupsError::Io)?;
        let repo_path = temp_dir.path();

        std::process::Command::new("git")
            .args(["init"])
            .current_dir(repo_path)
            .output()
            .map_err(CommitGroupsError::Io)?;

        std::process::Command::new("git")
            .args(["config", "user.name", "Test User"])
            .current_dir(repo_path)
            .output()
            .map_err(CommitGroupsError::Io)?;

        std::process::Command::new("git")
            .args(["config", "user.email", "test@example.com"])
            .current_dir(repo_path)
            .output()
            .map_err(CommitGroupsError::Io)?;

        let repo = GitRepository::open(repo_path)?;
        Ok((temp_dir, repo))
    }

    #[test]
    fn test_open_non_git_directory() {
        let non_git_path = std::path::PathBuf::from("/tmp/definitely/not/a/git/repo");
        let result = GitRepository::open(&non_git_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_current_changes_empty_repo() -> Result<()> {
        let (_temp_dir, repo) = setup_test_repo()?;
        let snapshot = repo.current_changes()?;
        assert!(snapshot.is_empty());
        Ok(())
    }

    #[test]
    fn test_untracked_file_lands_in_untracked_list() -> Result<()> {
        let (_temp_dir, repo) = setup_test_repo()?;

        std::fs::write(repo.workdir()?.join("new.txt"), "content").map_err(CommitGroupsError::Io)?;

        let snapshot = repo.current_changes()?;
        assert_eq!(snapshot.untracked.len(), 1);
        assert_eq!(snapshot.untracked[0].path, PathBuf::from("new.txt"));
        assert_eq!(snapshot.untracked[0].status, ChangeStatus::Untracked);
        assert!(snapshot.staged.is_empty());
        assert!(snapshot.working_tree.is_empty());

        Ok(())
    }

    #[test]
    fn test_stage_moves_file_to_staged_list() -> Result<()> {
        let (_temp_dir, repo) = setup_test_repo()?;

        std::fs::write(repo.workdir()?.join("new.txt"), "content").map_err(CommitGroupsError::Io)?;
        repo.stage(&[PathBuf::from("new.txt")])?;

        let snapshot = repo.current_changes()?;
        assert!(snapshot.untracked.is_empty());
        assert_eq!(snapshot.staged.len(), 1);
        assert_eq!(snapshot.staged[0].status, ChangeStatus::Added);

        Ok(())
    }

    #[test]
    fn test_unstage_restores_untracked() -> Result<()> {
        let (_temp_dir, repo) = setup_test_repo()?;
        let workdir = repo.workdir()?.to_path_buf();

        // HEAD must resolve for reset, so seed one commit first
        std::fs::write(workdir.join("seed.txt"), "seed").map_err(CommitGroupsError::Io)?;
        repo.stage(&[PathBuf::from("seed.txt")])?;
        repo.commit(&[PathBuf::from("seed.txt")], "seed")?;

        std::fs::write(workdir.join("new.txt"), "content").map_err(CommitGroupsError::Io)?;
        repo.stage(&[PathBuf::from("new.txt")])?;
        repo.unstage(&[PathBuf::from("new.txt")])?;

        let snapshot = repo.current_changes()?;
        assert!(snapshot.staged.is_empty());
        assert_eq!(snapshot.untracked.len(), 1);

        Ok(())
    }

    #[test]
    fn test_commit_paths_clears_changes() -> Result<()> {
        let (_temp_dir, repo) = setup_test_repo()?;

        std::fs::write(repo.workdir()?.join("a.txt"), "a").map_err(CommitGroupsError::Io)?;
        std::fs::write(repo.workdir()?.join("b.txt"), "b").map_err(CommitGroupsError::Io)?;
        repo.stage(&[PathBuf::from("a.txt"), PathBuf::from("b.txt")])?;

        repo.commit(&[PathBuf::from("a.txt")], "commit a only")?;

        let snapshot = repo.current_changes()?;
        assert!(snapshot.staged.iter().all(|c| c.path != Path::new("a.txt")));
        assert!(snapshot.staged.iter().any(|c| c.path == Path::new("b.txt")));

        Ok(())
    }

    #[test]
    fn test_modified_file_lands_in_working_tree() -> Result<()> {
        let (_temp_dir, repo) = setup_test_repo()?;
        let workdir = repo.workdir()?.to_path_buf();

        std::fs::write(workdir.join("a.txt"), "initial").map_err(CommitGroupsError::Io)?;
        repo.stage(&[PathBuf::from("a.txt")])?;
        repo.commit(&[PathBuf::from("a.txt")], "initial")?;

        std::fs::write(workdir.join("a.txt"), "changed").map_err(CommitGroupsError::Io)?;

        let snapshot = repo.current_changes()?;
        assert_eq!(snapshot.working_tree.len(), 1);
        assert_eq!(snapshot.working_tree[0].status, ChangeStatus::Modified);

        Ok(())
    }

    #[test]
    fn test_check_ignored() -> Result<()> {
        let (_temp_dir, repo) = setup_test_repo()?;
        let workdir = repo.workdir()?.to_path_buf();

        std::fs::write(workdir.join(".gitignore"), "*.log\n").map_err(CommitGroupsError::Io)?;
        std::fs::write(workdir.join("debug.log"), "log").map_err(CommitGroupsError::Io)?;
        std::fs::write(workdir.join("keep.txt"), "keep").map_err(CommitGroupsError::Io)?;

        let ignored = repo.check_ignored(&[PathBuf::from("debug.log"), PathBuf::from("keep.txt")])?;
        assert!(ignored.contains(Path::new("debug.log")));
        assert!(!ignored.contains(Path::new("keep.txt")));

        Ok(())
    }

    #[test]
    fn test_change_by_path_prefers_staged() -> Result<()> {
        let (_temp_dir, repo) = setup_test_repo()?;
        let workdir = repo.workdir()?.to_path_buf();

        std::fs::write(workdir.join("a.txt"), "initial").map_err(CommitGroupsError::Io)?;
        repo.stage(&[PathBuf::from("a.txt")])?;
        repo.commit(&[PathBuf::from("a.txt")], "initial")?;

        // Stage one edit and then modify again: path is in both lists
        std::fs::write(workdir.join("a.txt"), "staged edit").map_err(CommitGroupsError::Io)?;
        repo.stage(&[PathBuf::from("a.txt")])?;
        std::fs::write(workdir.join("a.txt"), "working edit").map_err(CommitGroupsError::Io)?;

        let change = repo.change_by_path(Path::new("a.txt"))?.unwrap();
        assert_eq!(change.status, ChangeStatus::Modified);

        Ok(())
    }

    #[test]
    fn test_empty_path_lists_are_no_ops() -> Result<()> {
        let (_temp_dir, repo) = setup_test_repo()?;
        repo.stage(&[])?;
        repo.unstage(&[])?;
        repo.commit(&[], "nothing")?;
        Ok(())
    }
}
