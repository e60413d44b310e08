use super::*;

#[test]
fn install_round_trips_payload_bytes() {
    let dir = tempfile::tempdir().expect("temp dir");
    let payload = b"#!/bin/sh\nexit 0\n";

    let path = install(dir.path(), "39de298a-911d-4a3b-aed4-1e8281010a9a", payload)
        .expect("install artifact");
    let on_disk = std::fs::read(&path).expect("read artifact back");
    assert_eq!(on_disk, payload);
}

#[test]
fn install_overwrites_previous_payload() {
    let dir = tempfile::tempdir().expect("temp dir");
    let test_id = "39de298a-911d-4a3b-aed4-1e8281010a9a";

    let first = install(dir.path(), test_id, b"first payload, the longer one")
        .expect("first install");
    let second = install(dir.path(), test_id, b"second").expect("second install");
    assert_eq!(first, second);

    let on_disk = std::fs::read(&second).expect("read artifact back");
    assert_eq!(on_disk, b"second");
}

#[test]
fn install_creates_missing_artifact_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let nested = dir.path().join("artifacts.example.com");

    let path = install(&nested, "abc", b"payload").expect("install into missing dir");
    assert!(path.starts_with(&nested));
    assert!(path.exists());
}

#[cfg(unix)]
#[test]
fn installed_artifact_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("temp dir");
    let path = install(dir.path(), "abc", b"#!/bin/sh\nexit 0\n").expect("install artifact");

    let mode = std::fs::metadata(&path)
        .expect("artifact metadata")
        .permissions()
        .mode()
        & 0o777;
    assert_eq!(mode, 0o755);
}

#[test]
fn artifact_path_is_deterministic() {
    let dir = std::path::Path::new("/work/artifacts.example.com");
    let a = artifact_path(dir, "abc-123");
    let b = artifact_path(dir, "abc-123");
    assert_eq!(a, b);
    assert!(a.starts_with(dir));

    #[cfg(windows)]
    assert_eq!(a.extension().and_then(|e| e.to_str()), Some("exe"));
    #[cfg(not(windows))]
    assert_eq!(a.file_name().and_then(|n| n.to_str()), Some("abc-123"));
}

#[test]
fn run_reports_missing_for_absent_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = artifact_path(dir.path(), "never-installed");

    let outcome = run(&path).expect("absence is not an error");
    assert_eq!(outcome, Outcome::Missing);
}

#[cfg(unix)]
#[test]
fn run_captures_real_exit_code() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = install(dir.path(), "exit-101", b"#!/bin/sh\nexit 101\n").expect("install script");

    let outcome = run(&path).expect("script runs");
    assert_eq!(outcome, Outcome::Completed(101));
}

#[cfg(unix)]
#[test]
fn run_captures_success_exit_code() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = install(dir.path(), "exit-0", b"#!/bin/sh\nexit 0\n").expect("install script");

    let outcome = run(&path).expect("script runs");
    assert_eq!(outcome, Outcome::Completed(0));
}

#[cfg(unix)]
#[test]
fn run_surfaces_spawn_failure_for_non_executable_file() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("temp dir");
    let path = install(dir.path(), "not-exec", b"plain data").expect("install file");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644))
        .expect("strip execute bit");

    let err = run(&path).expect_err("spawn must fail");
    assert!(matches!(err, ExecutionError::Spawn { .. }));
}
