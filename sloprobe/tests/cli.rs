use std::process::{Command, Output};

use serde_json::Value;

fn sloprobe(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sloprobe"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("SLOPROBE_CAPABILITY_MODE")
        .env_remove("SLOPROBE_BTF_PATH")
        .output()
        .expect("failed to spawn sloprobe")
}

fn json_lines(output: &Output) -> Vec<Value> {
    assert!(output.status.success(), "sloprobe failed: {:?}", output);
    String::from_utf8(output.stdout.clone())
        .expect("stdout is not UTF-8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("line is not JSON"))
        .collect()
}

#[test]
fn sample_matches_stub_output() {
    let lines = json_lines(&sloprobe(&["sample", "dns_latency_ms"]));
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["signal"], "dns_latency_ms");
    assert_eq!(lines[0]["mode"], "bcc_fallback");
    assert!(lines[0]["value"].is_f64());
}

#[test]
fn sample_rejects_core_only_signal() {
    let output = sloprobe(&["sample", "runqueue_delay_ms"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn sample_rejects_unknown_signal() {
    let output = sloprobe(&["sample", "nope"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn sample_and_collect_ignore_malformed_settings() {
    for args in [&["sample", "tcp_retransmits_total"][..], &["collect"][..]] {
        let output = Command::new(env!("CARGO_BIN_EXE_sloprobe"))
            .args(args)
            .env_remove("RUST_LOG")
            .env("SLOPROBE_BTF_PATH__X", "1")
            .output()
            .expect("failed to spawn sloprobe");
        assert!(!json_lines(&output).is_empty(), "{:?} printed nothing", args);
    }
}

#[test]
fn capabilities_without_btf_is_degraded() {
    let lines = json_lines(&sloprobe(&[
        "capabilities",
        "--mode",
        "auto",
        "--btf-path",
        "/nonexistent/sloprobe/vmlinux",
    ]));
    assert_eq!(lines.len(), 1);

    let report = &lines[0];
    assert_eq!(report["requested"], "auto");
    assert_eq!(report["mode"], "bcc_degraded");
    assert_eq!(report["btf_available"], false);
    assert_eq!(
        report["supported_signals"],
        serde_json::json!(["dns_latency_ms", "tcp_retransmits_total"])
    );
}

#[test]
fn capabilities_explicit_core_full() {
    let lines = json_lines(&sloprobe(&[
        "capabilities",
        "--mode",
        "core_full",
        "--btf-path",
        "/nonexistent/sloprobe/vmlinux",
    ]));
    assert_eq!(lines[0]["mode"], "core_full");
    assert_eq!(lines[0]["supported_signals"].as_array().unwrap().len(), 9);
}

#[test]
fn capabilities_reads_mode_from_environment() {
    let output = Command::new(env!("CARGO_BIN_EXE_sloprobe"))
        .args(["capabilities", "--btf-path", "/nonexistent/sloprobe/vmlinux"])
        .env_remove("RUST_LOG")
        .env("SLOPROBE_CAPABILITY_MODE", "core_full")
        .output()
        .expect("failed to spawn sloprobe");
    let lines = json_lines(&output);
    assert_eq!(lines[0]["requested"], "core_full");
    assert_eq!(lines[0]["mode"], "core_full");
}

#[test]
fn collect_prints_flags_then_samples() {
    let lines = json_lines(&sloprobe(&["collect"]));
    assert_eq!(lines.len(), 3);

    assert_eq!(lines[0]["mode"], "bcc_degraded");
    assert_eq!(lines[0]["degraded"], true);

    assert_eq!(lines[1]["signal"], "dns_latency_ms");
    assert_eq!(lines[2]["signal"], "tcp_retransmits_total");
    assert_eq!(lines[1]["ts_unix_nano"], lines[2]["ts_unix_nano"]);
    assert_eq!(lines[2]["value"].as_u64(), Some(0));
}
