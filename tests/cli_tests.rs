use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_cli_help() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("create-sui-dapp");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Install Sui dApp Starter with ease"))
        .stdout(predicate::str::contains("[project-name]"));
}

#[test]
fn test_cli_version() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("create-sui-dapp");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_rejects_second_positional() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("create-sui-dapp");
    cmd.args(["one", "two"]).assert().failure();
}

#[cfg(unix)]
#[test]
fn test_missing_git_fails_before_anything_else() {
    let work = tempdir().unwrap();
    let empty_path = tempdir().unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("create-sui-dapp");
    cmd.arg("my-app")
        .current_dir(work.path())
        .env("PATH", empty_path.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Git is not found"))
        .stdout(predicate::str::contains("Creating").not());

    assert!(!work.path().join("my-app").exists());
}

#[test]
fn test_existing_folder_is_a_conflict() {
    let work = tempdir().unwrap();
    fs::create_dir(work.path().join("my-app")).unwrap();
    fs::write(work.path().join("my-app").join("notes.txt"), "keep me").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("create-sui-dapp");
    let assert = cmd
        .arg("my-app")
        .current_dir(work.path())
        .env("CREATE_SUI_DAPP_SOURCE_REPO", "file:///nonexistent/starter")
        .assert();

    let output = assert.get_output();
    let stderr = String::from_utf8_lossy(&output.stderr);
    if stderr.contains("Git is not found") {
        eprintln!("Skipping test_existing_folder_is_a_conflict: git not found");
        return;
    }

    assert
        .code(1)
        .stderr(predicate::str::contains("The folder already exists"))
        .stderr(predicate::str::contains("Cloning").not());

    let entries: Vec<_> = fs::read_dir(work.path().join("my-app")).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        fs::read_to_string(work.path().join("my-app").join("notes.txt")).unwrap(),
        "keep me"
    );
}
