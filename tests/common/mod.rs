#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn anxlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("anxlog").unwrap();
    cmd.env_remove("ANXLOG_ROOT");
    cmd
}

/// Initialize a journal at `path`
pub fn init_journal(path: &Path) {
    anxlog_cmd().arg("init").arg(path).assert().success();
}

/// Record an entry and return its id
pub fn log_entry(root: &Path, level: &str, category: &str, notes: &str) -> String {
    let output = anxlog_cmd()
        .current_dir(root)
        .args(["log", "--level", level, "--category", category, "--notes", notes])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "log failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    let id = stdout
        .trim()
        .strip_prefix("Saved entry ")
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap_or_else(|| panic!("unexpected log output: {}", stdout));

    // Ids are millisecond timestamps; keep consecutive entries apart
    std::thread::sleep(std::time::Duration::from_millis(2));
    id.to_string()
}
