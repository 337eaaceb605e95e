#![allow(deprecated)]
//! Exit-code and output contract of `tenantadm-verify`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VERIFY_PATH: &str = "/api/internal/v1/tenantadm/tenants/verify";

fn verify_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tenantadm-verify").unwrap();
    cmd.env_remove("DEVICEAUTH_TENANTADM_ADDR")
        .env_remove("DEVICEAUTH_TENANTADM_TIMEOUT")
        .env("RUST_LOG", "warn");
    cmd
}

async fn tenantadm_answering(token: &str, status: u16) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(VERIFY_PATH))
        .and(header("authorization", format!("Bearer {}", token).as_str()))
        .respond_with(ResponseTemplate::new(status))
        .mount(&mock_server)
        .await;
    mock_server
}

#[test]
fn test_version() {
    verify_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_addr_is_config_error() {
    verify_cmd().args(["verify", "abc123"]).assert().code(2);
}

#[test]
fn test_missing_token_is_config_error() {
    verify_cmd()
        .args(["verify", "--addr", "http://tenantadm"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no token given"));
}

#[test]
fn test_malformed_addr_is_config_error() {
    for addr in ["ftp://tenantadm", "not a url"] {
        verify_cmd()
            .args(["verify", "abc123", "--addr", addr])
            .assert()
            .code(2)
            .stdout(predicate::str::starts_with(
                "error: failed to create request to tenant administrator",
            ));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_verified_exit_zero() {
    let server = tenantadm_answering("abc123", 200).await;

    verify_cmd()
        .args(["verify", "abc123", "--addr", &server.uri()])
        .assert()
        .code(0)
        .stdout(predicate::str::diff("verified\n"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_exit_one() {
    let server = tenantadm_answering("abc123", 401).await;

    verify_cmd()
        .args(["verify", "abc123", "--addr", &server.uri()])
        .assert()
        .code(1)
        .stdout(predicate::str::diff("rejected\n"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unexpected_status_json() {
    let server = tenantadm_answering("abc123", 500).await;

    let output = verify_cmd()
        .args(["verify", "abc123", "--json", "--addr", &server.uri()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["outcome"], "error");
    assert_eq!(report["retryable"], true);
    assert!(report["error"].as_str().unwrap().contains("500"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_addr_and_token_from_env_and_stdin() {
    let server = tenantadm_answering("stdin-token", 200).await;

    verify_cmd()
        .env("DEVICEAUTH_TENANTADM_ADDR", server.uri())
        .env("DEVICEAUTH_TENANTADM_TIMEOUT", "2s")
        .args(["verify", "-"])
        .write_stdin("stdin-token\n")
        .assert()
        .code(0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_token_file() {
    let server = tenantadm_answering("file-token", 401).await;
    let dir = tempfile::tempdir().unwrap();
    let token_path = dir.path().join("token");
    std::fs::write(&token_path, "file-token\n").unwrap();

    verify_cmd()
        .args(["verify", "--token-file"])
        .arg(&token_path)
        .args(["--addr", &server.uri()])
        .assert()
        .code(1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_huge_timeout_does_not_abort() {
    let server = tenantadm_answering("abc123", 200).await;

    verify_cmd()
        .env("DEVICEAUTH_TENANTADM_TIMEOUT", "18446744073709551615")
        .args(["verify", "abc123", "--addr", &server.uri()])
        .assert()
        .code(0)
        .stdout(predicate::str::diff("verified\n"));
}

#[test]
fn test_unreachable_tenantadm_exit_three() {
    verify_cmd()
        .args([
            "verify",
            "abc123",
            "--addr",
            "http://127.0.0.1:9",
            "--timeout",
            "2s",
        ])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with(
            "error: request to verify token failed",
        ));
}

#[test]
fn test_token_never_logged() {
    verify_cmd()
        .env("RUST_LOG", "debug")
        .args([
            "verify",
            "super-secret-token",
            "--addr",
            "http://127.0.0.1:9",
            "--log-format",
            "json",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("super-secret-token").not());
}
