//! Integration tests for the overlap-check binary.
//!
//! None of these reach a real service: they either fail before the network
//! call or point the client at a closed local port.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::{NamedTempFile, TempDir};

/// Runs the binary with an isolated config directory and no `OC_*` environment.
fn run_isolated(config_body: &str, args: &[&str]) -> Output {
    let home = TempDir::new().unwrap();
    let mut config_file = NamedTempFile::new().unwrap();
    write!(config_file, "{config_body}").unwrap();
    config_file.flush().unwrap();

    Command::new(env!("CARGO_BIN_EXE_overlap-check"))
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("OC_API_TOKEN")
        .env_remove("OC_API_URL")
        .env_remove("OC_ALLOWED")
        .env_remove("OC_SINCE")
        .env_remove("OC_TIMEOUT_SECS")
        .arg("--config")
        .arg(config_file.path())
        .args(args)
        .output()
        .expect("Failed to run overlap-check")
}

/// Config pointing at a local port nothing listens on.
const UNREACHABLE: &str = r#"api_url = "http://127.0.0.1:9"
timeout_secs = 5
"#;

#[test]
fn test_missing_token_fails_before_network() {
    let output = run_isolated(UNREACHABLE, &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing API token"), "stderr: {stderr}");
    assert!(!stderr.contains("failed to fetch"), "stderr: {stderr}");
}

#[test]
fn test_unknown_since_unit_fails_before_network() {
    let output = run_isolated(UNREACHABLE, &["--token", "abc", "--since", "5 fortnights"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown time unit: fortnights"), "stderr: {stderr}");
    assert!(!stderr.contains("failed to fetch"), "stderr: {stderr}");
}

#[test]
fn test_unknown_allowed_unit_fails_before_network() {
    let output = run_isolated(UNREACHABLE, &["-t", "abc", "-a", "3 hrs"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid --allowed value"), "stderr: {stderr}");
}

#[test]
fn test_token_from_config_file_is_used() {
    let config = format!("{UNREACHABLE}api_token = \"from-file\"\n");
    let output = run_isolated(&config, &[]);

    // The token is accepted, so the run proceeds to the (failing) request.
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to fetch time entries"), "stderr: {stderr}");
}

#[test]
fn test_connection_failure_is_fatal() {
    let output = run_isolated(UNREACHABLE, &["-t", "abc", "-s", "7 days"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to fetch time entries"), "stderr: {stderr}");
}

#[test]
fn test_help_lists_flags() {
    let output = run_isolated("", &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--token", "--since", "--allowed", "--json"] {
        assert!(stdout.contains(flag), "missing {flag} in help: {stdout}");
    }
}
