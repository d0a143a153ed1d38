use assert_cmd::Command;
use tempfile::TempDir;

pub fn daytrack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daytrack").unwrap();
    cmd.env_remove("DAYTRACK_ROOT");
    cmd.env_remove("DAYTRACK_LOG");
    cmd
}

/// Initialize a store in a fresh temp directory
#[allow(dead_code)]
pub fn init_store() -> TempDir {
    let temp = TempDir::new().unwrap();
    daytrack_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

/// Run a command inside the store and expect success
#[allow(dead_code)]
pub fn run_ok(temp: &TempDir, args: &[&str]) {
    daytrack_cmd()
        .current_dir(temp.path())
        .args(args)
        .assert()
        .success();
}
