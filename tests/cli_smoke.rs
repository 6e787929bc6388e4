use assert_cmd::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const EMAIL: &str = "you@example.com";

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    assert!(Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn init_git_repo(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    git(dir, &["init"]);
    git(dir, &["config", "core.autocrlf", "false"]);
    git(dir, &["config", "user.email", EMAIL]);
    git(dir, &["config", "user.name", "Your Name"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

fn commit_file(dir: &Path, name: &str, content: &str) {
    let mut f = File::create(dir.join(name)).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.sync_all().unwrap();
    git(dir, &["add", "."]);
    git(dir, &["commit", "-m", &format!("add {name}")]);
}

/// Commit with explicit author and committer timestamps (seconds since epoch).
fn commit_file_dated(dir: &Path, name: &str, authored: i64, committed: i64) {
    fs::write(dir.join(name), name).unwrap();
    git(dir, &["add", "."]);
    assert!(Command::new("git")
        .args(["commit", "-m", &format!("add {name}")])
        .env("GIT_AUTHOR_DATE", format!("{authored} +0000"))
        .env("GIT_COMMITTER_DATE", format!("{committed} +0000"))
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn stats_json(list: &Path) -> serde_json::Value {
    let out = bin()
        .arg("--list")
        .arg(list)
        .args(["stats", EMAIL, "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).unwrap()
}

fn bin() -> Command {
    Command::cargo_bin("gitlocalstats").unwrap()
}

#[test]
fn scan_then_stats_json_counts_todays_commit() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    let repo = dir.path().join("work/project");
    init_git_repo(&repo);
    commit_file(&repo, "a.rs", "fn a(){}\n");
    fs::create_dir_all(dir.path().join("work/node_modules/dep/.git")).unwrap();

    let list = dir.path().join("list");

    bin()
        .arg("--list")
        .arg(&list)
        .arg("scan")
        .arg(dir.path().join("work"))
        .assert()
        .success();

    let stored = fs::read_to_string(&list).unwrap();
    assert_eq!(stored.lines().count(), 1);
    assert!(stored.contains("project"));

    let out = bin()
        .arg("--list")
        .arg(&list)
        .args(["stats", EMAIL, "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(v["total_commits"].as_u64(), Some(1));
    assert_eq!(v["window_days"].as_u64(), Some(183));
    let days = v["days"].as_array().unwrap();
    assert_eq!(days.len(), 184);
    let last = days.last().unwrap();
    assert_eq!(last["days_ago"].as_u64(), Some(0));
    assert_eq!(last["count"].as_u64(), Some(1));
}

#[test]
fn stats_skips_unreadable_repository() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    let repo = dir.path().join("project");
    init_git_repo(&repo);
    commit_file(&repo, "a.txt", "a\n");

    let list = dir.path().join("list");
    fs::write(
        &list,
        format!("{}\n{}\n", dir.path().join("gone").display(), repo.display()),
    )
    .unwrap();

    let assert = bin()
        .arg("--list")
        .arg(&list)
        .args(["stats", EMAIL, "--no-color"])
        .assert()
        .success();
    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stdout.contains(" Mon "));
    assert!(stdout.contains("  1 "));
    assert!(stderr.contains("Error processing repo at"));
    assert!(stderr.contains("gone"));
}

#[test]
fn stats_for_unknown_author_is_empty() {
    let dir = tempdir().unwrap();
    let list = dir.path().join("missing-list");

    let out = bin()
        .arg("--list")
        .arg(&list)
        .args(["stats", "nobody@example.com", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["total_commits"].as_u64(), Some(0));
    assert!(!list.exists());
}

#[test]
fn commits_are_charted_by_author_date() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    let now = chrono::Utc::now().timestamp();
    let long_ago = now - 300 * 86_400;

    let fresh = dir.path().join("fresh");
    init_git_repo(&fresh);
    commit_file_dated(&fresh, "a.txt", now, long_ago);
    let list = dir.path().join("fresh-list");
    fs::write(&list, format!("{}\n", fresh.display())).unwrap();
    assert_eq!(stats_json(&list)["total_commits"].as_u64(), Some(1));

    let stale = dir.path().join("stale");
    init_git_repo(&stale);
    commit_file_dated(&stale, "b.txt", long_ago, now);
    let list = dir.path().join("stale-list");
    fs::write(&list, format!("{}\n", stale.display())).unwrap();
    assert_eq!(stats_json(&list)["total_commits"].as_u64(), Some(0));
}

#[test]
fn scan_missing_folder_fails_with_one_line() {
    let dir = tempdir().unwrap();
    let assert = bin()
        .arg("--list")
        .arg(dir.path().join("list"))
        .arg("scan")
        .arg(dir.path().join("does-not-exist"))
        .assert()
        .failure()
        .code(1);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines.len(), 1, "{stderr}");
    assert!(lines[0].contains("Failed to read folder"));
    assert!(lines[0].contains("does-not-exist"));
    assert!(!dir.path().join("list").exists());
}

#[test]
fn no_command_prints_usage_and_fails() {
    bin().assert().failure();
}
