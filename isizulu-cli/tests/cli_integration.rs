//! Integration tests for the isizulu CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn isizulu() -> Command {
    let mut cmd = Command::cargo_bin("isizulu").unwrap();
    cmd.env_remove("ISIZULU_RULES").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_analyze_file_annotated() {
    isizulu()
        .args(["analyze", "-i", &fixture_path("greeting.txt")])
        .assert()
        .success()
        .stdout(
            "<LINE 1>ngi[SC1s]-ya[PresLong]-bong[VRoot]-a[VerbTerm] kakhulu[Adv] .[Punc]\n\
             <LINE 2>a[NPrePre2]-ba[BPre2]-ntu[NStem] yebo[Interj]\n",
        );
}

#[test]
fn test_analyze_text_argument() {
    isizulu()
        .args(["analyze", "-t", "jongo.\n\nAfrika"])
        .assert()
        .success()
        .stdout("<LINE 1>jongo.[NStem]\n<LINE 2>Afrika[ProperName]\n");
}

#[test]
fn test_analyze_stdin() {
    isizulu()
        .arg("analyze")
        .write_stdin("yebo , cha")
        .assert()
        .success()
        .stdout("<LINE 1>yebo[Interj] ,[Punc] cha[Interj]\n");
}

#[test]
fn test_analyze_several_files_have_headers() {
    isizulu()
        .args([
            "analyze",
            "-q",
            "-i",
            &fixture_path("greeting.txt"),
            "-i",
            &fixture_path("quantifier.md"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("==> greeting.txt <=="))
        .stdout(predicate::str::contains(
            "==> quantifier.md <==\n<LINE 1>u[NPrePre3]-mu[BPre3]-ntu[NStem] onke[Quant]",
        ));
}

#[test]
fn test_analyze_json_output() {
    let output = isizulu()
        .args(["analyze", "-i", &fixture_path("greeting.txt"), "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[0]["filename"], "greeting.txt");
    assert_eq!(records[0]["type"], "text");
    assert_eq!(records[0]["status"], "completed");
    assert_eq!(records[0]["line_count"], 2);
    assert_eq!(records[0]["word_count"], 5);
}

#[test]
fn test_analyze_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("result.csv");

    isizulu()
        .args(["analyze", "-t", "yebo", "-f", "csv", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with(
        "filename,size,type,status,word_count,line_count,morpheme_count,analysis,error,processed_at\n"
    ));
    assert!(csv.contains("text,4,text,completed,1,1,1,<LINE 1>yebo[Interj],,"));
}

#[test]
fn test_analyze_failed_item_exit_code() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.txt");
    let bad = dir.path().join("bad.xlsx");
    fs::write(&good, "yebo").unwrap();
    fs::write(&bad, "PK").unwrap();

    isizulu()
        .args(["analyze", "-q", "-i"])
        .arg(&good)
        .arg("-i")
        .arg(&bad)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("<LINE 1>yebo[Interj]"))
        .stdout(predicate::str::contains("error: unsupported file type: xlsx"))
        .stderr(predicate::str::contains("1 of 2 items failed"));
}

#[test]
fn test_analyze_missing_file() {
    isizulu()
        .args(["analyze", "-i", "no/such/file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found: no/such/file.txt"));
}

#[test]
fn test_analyze_config_file() {
    isizulu()
        .args(["analyze", "-t", "cha", "-c", &fixture_path("config.toml")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("filename,size,type,status"))
        .stdout(predicate::str::contains("<LINE 1>cha[Interj]"));
}

#[test]
fn test_analyze_with_custom_rules() {
    isizulu()
        .args(["analyze", "-t", "yebo", "--rules", &fixture_path("rules.toml")])
        .assert()
        .success()
        .stdout("<LINE 1>yebo[Interj]\n");
}

#[test]
fn test_word_command() {
    isizulu()
        .args(["word", "abantu", ",", ""])
        .assert()
        .success()
        .stdout("abantu\ta[NPrePre2]-ba[BPre2]-ntu[NStem]\n,\t,[Punc]\n\t[Unknown]\n");
}

#[test]
fn test_word_explain() {
    isizulu()
        .args(["word", "--explain", "umuntu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("umuntu\tu[NPrePre3]-mu[BPre3]-ntu[NStem]"))
        .stdout(predicate::str::contains("NounPrefix"))
        .stdout(predicate::str::contains("FallbackStem"));
}

#[test]
fn test_batch_command() {
    let output = isizulu()
        .args(["batch", "-i", &fixture_path("payload.json")])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[0]["filename"], "greet");
    assert_eq!(records[0]["analysis"], "<LINE 1>yebo[Interj]");
    assert_eq!(records[1]["filename"], "text_2");
    assert_eq!(records[1]["analysis"], "<LINE 1>cha[Interj]");
}

#[test]
fn test_batch_rejects_non_array() {
    isizulu()
        .args(["batch", "-i", "-"])
        .write_stdin(r#"{"text": "yebo"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "invalid input: batch payload must be an array",
        ));
}

#[test]
fn test_batch_text_report() {
    isizulu()
        .args(["batch", "-i", &fixture_path("payload.json"), "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "isiZulu Morphological Analysis Report",
        ))
        .stdout(predicate::str::contains(
            "Total: 2 | Completed: 2 | Failed: 0",
        ));
}

#[test]
fn test_validate_reports_shadowing() {
    isizulu()
        .args(["validate", "-r", &fixture_path("rules.toml")])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Rule tables are valid!"))
        .stdout(predicate::str::contains("Vocabulary: 1"))
        .stdout(predicate::str::contains(
            "'yebo' is declared more than once in vocabulary",
        ));
}

#[test]
fn test_validate_invalid_rules() {
    isizulu()
        .args(["validate", "-r", &fixture_path("invalid_rules.toml")])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Rule tables are invalid!"))
        .stdout(predicate::str::contains("unknown noun class 12"));
}

#[test]
fn test_list_formats() {
    isizulu()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("annotated"))
        .stdout(predicate::str::contains("Input file types:"));
}

#[test]
fn test_list_tables() {
    isizulu()
        .args(["list", "tables"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("isiZulu (zu)\nnoun_prefixes:\n  umu"))
        .stdout(predicate::str::contains("verb_extensions:"));
}

#[test]
fn test_list_tables_toml() {
    isizulu()
        .args(["list", "tables", "--toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[[noun_prefixes]]"))
        .stdout(predicate::str::contains("code = \"zu\""));
}

#[test]
fn test_help_and_version() {
    isizulu()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("validate"));
    isizulu()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("isizulu"));
}
