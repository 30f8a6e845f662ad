//! Integration tests for group lifecycle commands:
//! add-group, delete-group, rename-group, activate-group.

mod common;

use common::*;
use predicates::prelude::*;

#[test]
fn test_first_run_bootstraps_builtin_groups() -> anyhow::Result<()> {
    let repo = setup_test_repo()?;

    repo.cli()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default"))
        .stdout(predicate::str::contains("Untracked"))
        .stdout(predicate::str::contains("(active)"));

    Ok(())
}

#[test]
fn test_add_group_appears_in_status() -> anyhow::Result<()> {
    let repo = setup_test_repo()?;

    repo.cli()
        .args(["add-group", "Feature-X"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created group 'Feature-X'"));

    repo.cli()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Feature-X"));

    Ok(())
}

#[test]
fn test_add_group_duplicate_name_fails() -> anyhow::Result<()> {
    let repo = setup_test_repo()?;

    repo.cli().args(["add-group", "Feature-X"]).assert().success();

    repo.cli()
        .args(["add-group", "Feature-X"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("already exists"));

    Ok(())
}

#[test]
fn test_add_group_with_activate_flag() -> anyhow::Result<()> {
    let repo = setup_test_repo()?;

    repo.cli()
        .args(["add-group", "Feature-X", "--activate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("made it active"));

    repo.cli()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Feature-X").and(predicate::str::contains("(active)")));

    Ok(())
}

#[test]
fn test_delete_builtin_group_fails() -> anyhow::Result<()> {
    let repo = setup_test_repo()?;

    for name in ["Default", "Untracked"] {
        repo.cli()
            .args(["delete-group", name])
            .assert()
            .failure()
            .stdout(predicate::str::contains("built-in group"));
    }

    Ok(())
}

#[test]
fn test_delete_custom_group() -> anyhow::Result<()> {
    let repo = setup_test_repo()?;

    repo.cli().args(["add-group", "Feature-X"]).assert().success();
    repo.cli()
        .args(["delete-group", "Feature-X"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted group 'Feature-X'"));

    repo.cli()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Feature-X").not());

    Ok(())
}

#[test]
fn test_delete_active_group_falls_back_to_default() -> anyhow::Result<()> {
    let repo = setup_test_repo()?;

    repo.cli()
        .args(["add-group", "Feature-X", "--activate"])
        .assert()
        .success();
    repo.cli()
        .args(["delete-group", "Feature-X"])
        .assert()
        .success();

    repo.cli()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default").and(predicate::str::contains("(active)")));

    Ok(())
}

#[test]
fn test_delete_non_empty_group_fails() -> anyhow::Result<()> {
    let repo = setup_test_repo_with_initial_commit()?;

    repo.cli()
        .args(["add-group", "Feature-X", "--activate"])
        .assert()
        .success();
    // Modify after activation so the change routes into Feature-X
    modify_test_files(&repo.path, &["initial.txt"])?;
    repo.cli().arg("refresh").assert().success();

    repo.cli()
        .args(["delete-group", "Feature-X"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("still owns"));

    // After moving the file out, the delete goes through
    repo.cli()
        .args(["move", "Default", "initial.txt"])
        .assert()
        .success();
    repo.cli()
        .args(["delete-group", "Feature-X"])
        .assert()
        .success();

    Ok(())
}

#[test]
fn test_rename_group_keeps_files() -> anyhow::Result<()> {
    let repo = setup_test_repo_with_initial_commit()?;

    repo.cli()
        .args(["add-group", "Feature-X", "--activate"])
        .assert()
        .success();
    modify_test_files(&repo.path, &["initial.txt"])?;
    repo.cli().arg("refresh").assert().success();

    repo.cli()
        .args(["rename-group", "Feature-X", "Feature-Y"])
        .assert()
        .success();

    repo.cli()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Feature-Y"))
        .stdout(predicate::str::contains("initial.txt"))
        .stdout(predicate::str::contains("Feature-X").not());

    Ok(())
}

#[test]
fn test_rename_builtin_group_fails() -> anyhow::Result<()> {
    let repo = setup_test_repo()?;

    repo.cli()
        .args(["rename-group", "Untracked", "Other"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("built-in group"));

    Ok(())
}

#[test]
fn test_activate_group_switches_target() -> anyhow::Result<()> {
    let repo = setup_test_repo()?;

    repo.cli().args(["add-group", "Feature-X"]).assert().success();
    repo.cli()
        .args(["activate-group", "Feature-X"])
        .assert()
        .success()
        .stdout(predicate::str::contains("now active"));

    Ok(())
}

#[test]
fn test_activate_untracked_group_is_rejected() -> anyhow::Result<()> {
    let repo = setup_test_repo()?;

    repo.cli()
        .args(["activate-group", "Untracked"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("built-in group"));

    Ok(())
}

#[test]
fn test_activate_unknown_group_fails() -> anyhow::Result<()> {
    let repo = setup_test_repo()?;

    repo.cli()
        .args(["activate-group", "missing"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("does not exist"));

    Ok(())
}

#[test]
fn test_groups_persist_across_invocations() -> anyhow::Result<()> {
    let repo = setup_test_repo()?;

    repo.cli()
        .args(["add-group", "Feature-X", "--activate"])
        .assert()
        .success();

    // A fresh invocation restores the same groups and active flag
    repo.cli()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Feature-X").and(predicate::str::contains("(active)")));

    Ok(())
}

#[test]
fn test_commands_outside_git_repo_fail() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    let cache = tempfile::TempDir::new()?;
    let config = tempfile::TempDir::new()?;

    let mut cmd = assert_cmd::Command::cargo_bin("commit-groups")?;
    cmd.current_dir(temp.path())
        .env("XDG_CACHE_HOME", cache.path())
        .env("XDG_CONFIG_HOME", config.path())
        .arg("status")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Not in a git repository"));

    Ok(())
}
