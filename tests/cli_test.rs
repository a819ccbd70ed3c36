// tests/cli_test.rs
mod common;

use std::path::Path;
use std::process::{Command, Output};

use common::{commit, init_repo, tag_lightweight};

fn semver_bump(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_semver-bump"))
        .args(args)
        .current_dir(cwd)
        .env_remove("GIT_PATH")
        .env_remove("NO_RELEASE_BUMP")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output = semver_bump(temp_dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("semver-bump"));
    assert!(stdout.contains("--no-release-bump"));
}

#[test]
fn test_prints_next_version() {
    let (temp_dir, repo) = init_repo();
    let oid = commit(&repo, "feat: first", 1_000);
    tag_lightweight(&repo, "v0.3.7", oid);
    commit(&repo, "feat: x", 2_000);
    commit(&repo, "fix: y", 3_000);

    let output = semver_bump(temp_dir.path(), &[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "0.4.0\n");
}

#[test]
fn test_path_flag_and_default_bump() {
    let (temp_dir, repo) = init_repo();
    let oid = commit(&repo, "feat: first", 1_000);
    tag_lightweight(&repo, "v0.3.7", oid);
    commit(&repo, "ci: z", 2_000);

    let elsewhere = tempfile::TempDir::new().unwrap();
    let repo_path = temp_dir.path().to_str().unwrap();

    let output = semver_bump(elsewhere.path(), &["--path", repo_path]);
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "0.3.7\n");

    let output = semver_bump(
        elsewhere.path(),
        &["--path", repo_path, "--no-release-bump", "patch"],
    );
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "0.3.8\n");
}

#[test]
fn test_environment_sets_path() {
    let (temp_dir, repo) = init_repo();
    commit(&repo, "fix!: y", 1_000);

    let elsewhere = tempfile::TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_semver-bump"))
        .current_dir(elsewhere.path())
        .env("GIT_PATH", temp_dir.path())
        .env("NO_RELEASE_BUMP", "norelease")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1.0.0\n");
}

#[test]
fn test_flags_override_environment_and_file() {
    let (temp_dir, repo) = init_repo();
    let oid = commit(&repo, "feat: first", 1_000);
    tag_lightweight(&repo, "v0.3.7", oid);
    commit(&repo, "ci: z", 2_000);

    let elsewhere = tempfile::TempDir::new().unwrap();
    let not_a_repo = elsewhere.path().join("not-a-repo");
    let config_path = elsewhere.path().join("custom.toml");
    std::fs::write(
        &config_path,
        "git_path = \"/nowhere\"\nno_release_bump = \"minor\"\n",
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_semver-bump"))
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "--path",
            temp_dir.path().to_str().unwrap(),
            "--no-release-bump",
            "patch",
        ])
        .current_dir(elsewhere.path())
        .env("GIT_PATH", &not_a_repo)
        .env("NO_RELEASE_BUMP", "major")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "0.3.8\n");
}

#[test]
fn test_environment_overrides_file() {
    let (temp_dir, repo) = init_repo();
    let oid = commit(&repo, "feat: first", 1_000);
    tag_lightweight(&repo, "v0.3.7", oid);
    commit(&repo, "ci: z", 2_000);

    let elsewhere = tempfile::TempDir::new().unwrap();
    let config_path = elsewhere.path().join("custom.toml");
    std::fs::write(&config_path, "git_path = \"/nowhere\"\nno_release_bump = \"patch\"\n")
        .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_semver-bump"))
        .args(["--config", config_path.to_str().unwrap()])
        .current_dir(elsewhere.path())
        .env("GIT_PATH", temp_dir.path())
        .env("NO_RELEASE_BUMP", "minor")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "0.4.0\n");
}

#[test]
fn test_explain_goes_to_stderr() {
    let (temp_dir, repo) = init_repo();
    commit(&repo, "feat: initial commit", 1_000);

    let output = semver_bump(temp_dir.path(), &["--explain"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "0.1.0\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Release type: minor"));
}

#[test]
fn test_missing_repository_fails() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join("toto");

    let output = semver_bump(temp_dir.path(), &["--path", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no such path"));
}
