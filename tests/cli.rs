use std::process::{Command, Output};

use httpmock::prelude::*;
use serde_json::json;

fn run(vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_che-endpoints"))
        .env_clear()
        .env("RUST_LOG", "off")
        .envs(vars.iter().copied())
        .output()
        .expect("Failed to execute che-endpoints")
}

#[test]
fn missing_workspace_id_exits_before_any_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.any_request();
        then.status(200);
    });

    let api = server.url("/api");
    let output = run(&[("CHE_API", api.as_str())]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "CHE_WORKSPACE_ID is not found.\n"
    );
    mock.assert_hits(0);
}

#[test]
fn empty_workspace_id_exits_with_one() {
    let output = run(&[("CHE_API", "http://127.0.0.1:9/api"), ("CHE_WORKSPACE_ID", "")]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "CHE_WORKSPACE_ID is not found.\n"
    );
}

#[test]
fn lists_endpoints_of_workspace() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/workspace/ws1")
            .header("Authorization", "Bearer tok");
        then.status(200).json_body(json!({
            "id": "ws1",
            "runtime": {"machines": {
                "m1": {"servers": {
                    "http": {"url": "http://a"},
                    "debug": {"url": "http://b"}
                }},
                "m2": {"servers": null}
            }}
        }));
    });

    let api = server.url("/api");
    let output = run(&[
        ("CHE_API", api.as_str()),
        ("CHE_WORKSPACE_ID", "ws1"),
        ("CHE_MACHINE_TOKEN", "tok"),
    ]);

    mock.assert();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "http: http://a\ndebug: http://b\n"
    );
}

#[test]
fn empty_machines_succeeds_silently() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/workspace/ws1");
        then.status(200)
            .json_body(json!({"runtime": {"machines": {}}}));
    });

    let api = server.url("/api");
    let output = run(&[("CHE_API", api.as_str()), ("CHE_WORKSPACE_ID", "ws1")]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn fetch_failure_prints_one_line_and_exits_with_one() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/workspace/ws1");
        then.status(401).body("unauthorized");
    });

    let api = server.url("/api");
    let output = run(&[("CHE_API", api.as_str()), ("CHE_WORKSPACE_ID", "ws1")]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("GET"));
}

#[test]
fn missing_url_is_an_unhandled_fault() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/workspace/ws1");
        then.status(200).json_body(json!({"runtime": {"machines": {
            "m1": {"servers": {"s": {}}}
        }}}));
    });

    let api = server.url("/api");
    let output = run(&[("CHE_API", api.as_str()), ("CHE_WORKSPACE_ID", "ws1")]);

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("url not found for server s"));
}

#[test]
fn empty_url_is_an_unhandled_fault() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/workspace/ws1");
        then.status(200).json_body(json!({"runtime": {"machines": {
            "m1": {"servers": {"ok": {"url": "http://ok"}, "s": {"url": ""}}}
        }}}));
    });

    let api = server.url("/api");
    let output = run(&[("CHE_API", api.as_str()), ("CHE_WORKSPACE_ID", "ws1")]);

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn check_flag_does_not_contact_the_api() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.any_request();
        then.status(200);
    });

    let output = Command::new(env!("CARGO_BIN_EXE_che-endpoints"))
        .arg("--test")
        .env_clear()
        .env("RUST_LOG", "off")
        .env("CHE_API", server.url("/api"))
        .env("CHE_WORKSPACE_ID", "ws1")
        .output()
        .expect("Failed to execute che-endpoints");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    mock.assert_hits(0);
}
