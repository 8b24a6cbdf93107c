use std::path::Path;
use std::process::Command;

const HOOK: &str = env!("CARGO_BIN_EXE_cfn-guard-hook");

fn hook(install_root: &Path, work: &Path, args: &[&str]) -> Option<i32> {
    Command::new(HOOK)
        .args(args)
        .current_dir(work)
        .env("CFN_GUARD_PRE_COMMIT_HOME", install_root)
        .env_remove("CFN_GUARD_PRE_COMMIT_SHA256")
        .env_remove("RUST_LOG")
        .status()
        .unwrap()
        .code()
}

#[test]
fn empty_file_list_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(hook(dir.path(), dir.path(), &["--operation=validate"]), Some(0));
}

#[test]
fn missing_operation_is_a_clap_error() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(hook(dir.path(), dir.path(), &["t.yaml"]), Some(2));
}

#[test]
fn unknown_operation_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        hook(dir.path(), dir.path(), &["--operation=lint", "t.yaml"]),
        Some(64)
    );
}

#[test]
fn malformed_checksum_is_an_internal_error() {
    let dir = tempfile::tempdir().unwrap();
    let status = Command::new(HOOK)
        .args(["--operation=validate", "--rules=r.guard", "t.yaml"])
        .current_dir(dir.path())
        .env("CFN_GUARD_PRE_COMMIT_HOME", dir.path())
        .env("CFN_GUARD_PRE_COMMIT_SHA256", "xyz")
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(70));
}

#[cfg(unix)]
#[test]
fn preinstalled_guard_code_is_passed_through() {
    use std::os::unix::fs::PermissionsExt;

    let root = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let binary = root.path().join("cfn-guard");
    std::fs::write(
        &binary,
        "#!/bin/sh\n[ -f marker ] || exit 3\ncase \"$3\" in\n  --data=*noncompliant*) exit 19 ;;\nesac\nexit 0\n",
    )
    .unwrap();
    std::fs::set_permissions(&binary, std::fs::Permissions::from_mode(0o755)).unwrap();
    std::fs::write(
        root.path().join(guard_hook_install::VERSION_MARKER),
        format!("{}\n", guard_hook_fetch::PINNED_VERSION),
    )
    .unwrap();
    std::fs::write(work.path().join("marker"), "").unwrap();

    let args = ["--operation=validate", "--rules=rules", "good.yaml", "noncompliant.yaml"];
    assert_eq!(hook(root.path(), work.path(), &args), Some(19));

    let args = ["--operation=validate", "--rules=rules", "good.yaml", "also-good.yaml"];
    assert_eq!(hook(root.path(), work.path(), &args), Some(0));

    let args = ["--operation=test", "--dir=tests/", "good.yaml"];
    assert_eq!(hook(root.path(), work.path(), &args), Some(0));
}
