//! The `analyze-message` binary: stdin JSON in, stdout JSON out, exit status

mod common;

use common::demo_model_path;
use serde_json::Value;
use std::io::Write;
use std::process::{Command, Stdio};

/// Run the binary (against the bundled model unless `--model` is given),
/// returning the exit code and the JSON printed on stdout
fn analyze_message(args: &[&str], input: &str) -> (i32, Value) {
    let mut command = Command::new(env!("CARGO_BIN_EXE_analyze-message"));
    for var in [
        "SCAM_CONFIG",
        "SCAM_MODEL_PATH",
        "SCAM_LISTEN_ADDR",
        "SCAM_SPAM_LABEL",
        "SCAM_LOG_FORMAT",
        "RUST_LOG",
    ] {
        command.env_remove(var);
    }

    if !args.contains(&"--model") {
        command.arg("--model").arg(demo_model_path());
    }

    let mut child = command
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // the process may exit before reading stdin when startup fails
    let _ = child.stdin.take().unwrap().write_all(input.as_bytes());

    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let value = serde_json::from_str(stdout.trim()).unwrap();
    (output.status.code().unwrap(), value)
}

fn error_of(value: &Value) -> &str {
    value["error"].as_str().unwrap()
}

#[test]
fn test_scam_message_prints_full_result() {
    let (code, value) = analyze_message(
        &[],
        r#"{"content": "Congratulations! You've won a $1000 gift card! Click here to claim!", "messageType": "sms"}"#,
    );

    assert_eq!(code, 0);
    assert_eq!(value["isScam"], true);
    assert_eq!(value["riskLevel"], "high");
    assert_eq!(value["detectedCategory"], "Lottery/Prize Scam");
    assert_eq!(value["indicators"].as_array().unwrap().len(), 6);
    assert_eq!(value["recommendations"].as_array().unwrap().len(), 5);
    assert!(value["confidence"].as_f64().unwrap() > 90.0);
    assert!(value.get("error").is_none());
}

#[test]
fn test_benign_message_is_legitimate() {
    let (code, value) = analyze_message(&[], r#"{"content": "Can you pick up some groceries?"}"#);

    assert_eq!(code, 0);
    assert_eq!(value["isScam"], false);
    assert_eq!(value["riskLevel"], "low");
    assert_eq!(value["detectedCategory"], "Legitimate Message");
}

#[test]
fn test_spam_label_flag_changes_verdict() {
    let (code, value) = analyze_message(
        &["--spam-label", "ham"],
        r#"{"content": "Can you pick up some groceries?"}"#,
    );

    assert_eq!(code, 0);
    assert_eq!(value["isScam"], true);
    assert_eq!(value["riskLevel"], "high");
}

#[test]
fn test_empty_content_exits_zero() {
    let (code, value) = analyze_message(&[], r#"{"content": ""}"#);

    assert_eq!(code, 0);
    assert_eq!(value, serde_json::json!({"error": "No content provided"}));
}

#[test]
fn test_missing_or_non_string_content_exits_zero() {
    for input in [r#"{}"#, r#"{"content": null}"#, r#"{"content": 42}"#] {
        let (code, value) = analyze_message(&[], input);
        assert_eq!(code, 0, "input {}", input);
        assert_eq!(error_of(&value), "No content provided");
    }
}

#[test]
fn test_missing_model_exits_one() {
    let (code, value) = analyze_message(&["--model", "/nope"], r#"{"content": "hello"}"#);

    assert_eq!(code, 1);
    assert!(error_of(&value).starts_with("Model loading failed: "));
    assert_eq!(value.as_object().unwrap().len(), 1);
}

#[test]
fn test_invalid_json_exits_one() {
    let (code, value) = analyze_message(&[], "nope");

    assert_eq!(code, 1);
    assert!(error_of(&value).starts_with("Analysis failed: "));
}

#[test]
fn test_non_object_request_exits_one() {
    for input in ["[]", r#""free prize""#, "7"] {
        let (code, value) = analyze_message(&[], input);
        assert_eq!(code, 1, "input {}", input);
        assert!(error_of(&value).starts_with("Analysis failed: "));
    }
}

#[test]
fn test_invalid_spam_label_is_config_error() {
    let (code, value) = analyze_message(&["--spam-label", " "], r#"{"content": "hello"}"#);

    assert_eq!(code, 1);
    assert!(error_of(&value).starts_with("Configuration error: "));
}
