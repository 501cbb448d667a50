//! CLI behaviour of the sysdash binary. Only paths that exit before the
//! terminal is taken over are exercised here.

use std::fs;

use assert_cmd::Command;

fn sysdash(config_home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("sysdash").expect("sysdash binary");
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env_remove("SYSDASH_REFRESH_MS")
        .env_remove("SYSDASH_SAMPLE_MS")
        .env_remove("SYSDASH_LOG");
    cmd
}

fn output_text(out: &std::process::Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    )
}

#[test]
fn help_mentions_flags_and_keys() {
    let td = tempfile::tempdir().unwrap();
    let out = sysdash(td.path()).arg("--help").output().unwrap();
    assert!(out.status.success());
    let text = output_text(&out);
    assert!(
        text.contains("--refresh") && text.contains("-r") && text.contains("--log"),
        "help text missing expected flags\n{text}"
    );
    assert!(text.contains("pause"));
}

#[test]
fn unknown_argument_is_rejected() {
    let td = tempfile::tempdir().unwrap();
    let out = sysdash(td.path()).arg("--bogus").output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(output_text(&out).contains("unexpected argument: --bogus"));
}

#[test]
fn zero_refresh_is_rejected() {
    let td = tempfile::tempdir().unwrap();
    let out = sysdash(td.path()).args(["--refresh", "0"]).output().unwrap();
    assert!(!out.status.success());
    assert!(output_text(&out).contains("greater than zero"));
}

#[test]
fn zero_refresh_from_env_is_rejected() {
    let td = tempfile::tempdir().unwrap();
    let out = sysdash(td.path())
        .env("SYSDASH_REFRESH_MS", "0")
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(output_text(&out).contains("greater than zero"));
}

#[test]
fn broken_config_file_is_reported() {
    let td = tempfile::tempdir().unwrap();
    fs::create_dir_all(td.path().join("sysdash")).unwrap();
    fs::write(td.path().join("sysdash").join("config.json"), "{ refresh_ms: ").unwrap();
    let out = sysdash(td.path()).output().unwrap();
    assert!(!out.status.success());
    assert!(output_text(&out).contains("invalid config file"));
}

#[test]
fn config_file_zero_sample_is_rejected() {
    let td = tempfile::tempdir().unwrap();
    fs::create_dir_all(td.path().join("sysdash")).unwrap();
    fs::write(
        td.path().join("sysdash").join("config.json"),
        r#"{ "refresh_ms": 500, "sample_ms": 0 }"#,
    )
    .unwrap();
    let out = sysdash(td.path()).output().unwrap();
    assert!(!out.status.success());
    assert!(output_text(&out).contains("sample interval must be greater than zero"));
}
