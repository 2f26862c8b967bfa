use assert_cmd::Command;
use std::path::Path;

pub fn journalx_cmd() -> Command {
    let mut cmd = Command::cargo_bin("journalx").unwrap();
    cmd.env_remove("JOURNALX_ROOT");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize a journal in `path`
pub fn init_journal(path: &Path) {
    journalx_cmd().arg("init").arg(path).assert().success();
}

/// Save an entry through the CLI and return its id
#[allow(dead_code)]
pub fn new_entry(path: &Path, args: &[&str]) -> String {
    let output = journalx_cmd()
        .current_dir(path)
        .arg("new")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "new failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .trim()
        .strip_prefix("Saved entry ")
        .expect("unexpected new output")
        .to_string()
}
