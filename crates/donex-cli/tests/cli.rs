//! CLI smoke tests for the donex binary.

use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE: &str = "noise<s_header><s_invoice_no>INV-1</s_invoice_no>\
                      <s_seller>Acme</s_seller></s_header>\
                      <s_summary><s_total_net_worth>100</s_total_net_worth></s_summary>";

#[test]
fn decode_file_prints_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw.txt");
    std::fs::write(&input, SAMPLE).unwrap();

    Command::cargo_bin("donex")
        .unwrap()
        .arg("decode")
        .arg(&input)
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""invoice_no":"INV-1""#))
        .stdout(predicate::str::contains(r#""client":null"#));
}

#[test]
fn decode_stdin_text_format() {
    Command::cargo_bin("donex")
        .unwrap()
        .args(["decode", "-", "--format", "text"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invoice: INV-1"))
        .stdout(predicate::str::contains("Acme"));
}

#[test]
fn decode_missing_input_fails() {
    Command::cargo_bin("donex")
        .unwrap()
        .args(["decode", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn decode_reports_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw.txt");
    std::fs::write(&input, SAMPLE).unwrap();

    Command::cargo_bin("donex")
        .unwrap()
        .arg("decode")
        .arg(&input)
        .arg("--show-missing")
        .assert()
        .success()
        .stderr(predicate::str::contains("client"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    std::fs::write(dir.path().join("a.txt"), SAMPLE).unwrap();
    std::fs::write(dir.path().join("b.txt"), "no tags").unwrap();

    let pattern = dir.path().join("*.txt");
    Command::cargo_bin("donex")
        .unwrap()
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("--output-dir")
        .arg(&out)
        .arg("--summary")
        .assert()
        .success();

    assert!(out.join("a.json").exists());
    assert!(out.join("b.json").exists());

    let summary = std::fs::read_to_string(out.join("summary.csv")).unwrap();
    assert!(summary.contains("a.txt"));
    assert!(summary.contains("INV-1"));
}

#[test]
fn config_show_prints_defaults() {
    Command::cargo_bin("donex")
        .unwrap()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("katanaml-org/invoices-donut-model-v1"));
}
