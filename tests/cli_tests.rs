//! Integration tests for the listrec CLI

mod support;

use predicates::prelude::*;
use serde_json::Value;
use support::{listrec, setup_listings, write_file};
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    listrec()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: listrec"))
        .stdout(predicate::str::contains("recommend"))
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("stopwords"));
}

#[test]
fn test_version_flag() {
    listrec()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("listrec"));
}

#[test]
fn test_no_command_prints_banner() {
    listrec()
        .assert()
        .success()
        .stdout(predicate::str::contains("listrec --help"));
}

// ============================================================================
// recommend
// ============================================================================

#[test]
fn test_recommend_human() {
    let dir = setup_listings();

    listrec()
        .current_dir(dir.path())
        .args(["recommend", "--data", "listings.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A: D, B, C\n"))
        .stdout(predicate::str::contains("B: A, D, C\n"))
        .stdout(predicate::str::contains("C: A, B, D\n"))
        .stdout(predicate::str::contains("D: A, B, C\n"));
}

#[test]
fn test_recommend_json_is_label_map() {
    let dir = setup_listings();

    let output = listrec()
        .current_dir(dir.path())
        .args(["--format", "json", "recommend", "--data", "listings.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let map = json.as_object().unwrap();
    assert_eq!(map.len(), 4);
    assert_eq!(json["A"], serde_json::json!(["D", "B", "C"]));
    for (label, neighbors) in map {
        let neighbors = neighbors.as_array().unwrap();
        assert_eq!(neighbors.len(), 3);
        assert!(!neighbors.iter().any(|n| n == label.as_str()));
    }
}

#[test]
fn test_recommend_json_with_scores() {
    let dir = setup_listings();

    let output = listrec()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "recommend",
            "--data",
            "listings.json",
            "--scores",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let first = &json.as_array().unwrap()[0];
    assert_eq!(first["label"], "A");
    assert_eq!(first["neighbors"][0], "D");
    let top = first["scores"][0].as_f64().unwrap();
    assert!((top - 1.0).abs() < 1e-9);
    assert_eq!(first["scores"][2].as_f64().unwrap(), 0.0);
}

#[test]
fn test_recommend_records() {
    let dir = setup_listings();

    listrec()
        .current_dir(dir.path())
        .args(["--format", "records", "recommend", "--data", "listings.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H listrec=1 records=1 mode=recommend listings=4",
        ))
        .stdout(predicate::str::contains("R \"A\" rank=1 neighbor=\"D\""));
}

#[test]
fn test_recommend_group_restricts_corpus() {
    let dir = setup_listings();

    listrec()
        .current_dir(dir.path())
        .args(["recommend", "--data", "listings.json", "--group", "Wallingford"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A: D, B\n"))
        .stdout(predicate::str::contains("C:").not());
}

#[test]
fn test_recommend_unknown_group_is_usage_error() {
    let dir = setup_listings();

    listrec()
        .current_dir(dir.path())
        .args(["recommend", "--data", "listings.json", "--group", "Atlantis"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown group 'Atlantis'"))
        .stderr(predicate::str::contains("available: Capitol Hill, Wallingford"));
}

#[test]
fn test_recommend_with_alternate_from_other_file() {
    let dir = setup_listings();
    write_file(
        dir.path(),
        "alternates.jsonl",
        "{\"id\": 9001, \"remarks\": \"3 bedroom house hardwood\"}\n",
    );

    listrec()
        .current_dir(dir.path())
        .args([
            "recommend",
            "--data",
            "listings.json",
            "--alt",
            "9001",
            "--alt-data",
            "alternates.jsonl",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("A: D, 9001, B\n"))
        .stdout(predicate::str::contains("9001: A, D, B\n"));
}

#[test]
fn test_recommend_alternate_not_found_exit_code_3() {
    let dir = setup_listings();

    listrec()
        .current_dir(dir.path())
        .args(["recommend", "--data", "listings.json", "--alt", "404"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "error: alternate listing not found: 404",
        ))
        .stderr(predicate::str::contains("hint: check the id"));
}

#[test]
fn test_recommend_alternate_collision_exit_code_3() {
    let dir = setup_listings();

    listrec()
        .current_dir(dir.path())
        .args(["recommend", "--data", "listings.json", "--alt", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("duplicate label"));
}

#[test]
fn test_recommend_json_error_envelope() {
    let dir = setup_listings();

    let output = listrec()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "recommend",
            "--data",
            "listings.json",
            "--alt",
            "404",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "alternate_not_found");
    assert_eq!(json["error"]["details"]["id"], "404");
}

#[test]
fn test_malformed_dataset_json_envelope_names_file() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "listings.json", r#"{"id": "1"}"#);

    let output = listrec()
        .current_dir(dir.path())
        .args(["--format=json", "recommend", "--data", "listings.json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "invalid_dataset");
    let path = json["error"]["details"]["path"].as_str().unwrap();
    assert!(path.ends_with("listings.json"));
    assert!(json["error"]["details"]["reason"].is_string());
}

#[test]
fn test_json_envelope_for_parse_errors() {
    let output = listrec()
        .args(["--format", "json", "recommend"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
    assert!(json["error"].get("details").is_none());
}

#[test]
fn test_recommend_only_stopwords_is_empty_vocabulary() {
    let dir = tempdir().unwrap();
    write_file(
        dir.path(),
        "listings.json",
        r#"[{"id": "1", "remarks": "the and of"}, {"id": "2", "remarks": "Ballard house"}]"#,
    );

    listrec()
        .current_dir(dir.path())
        .args(["recommend", "--data", "listings.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("empty vocabulary"));
}

#[test]
fn test_recommend_missing_data_file_fails() {
    let dir = tempdir().unwrap();

    listrec()
        .current_dir(dir.path())
        .args(["recommend", "--data", "nope.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_recommend_malformed_dataset_exit_code_3() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "listings.json", r#"{"id": "1"}"#);

    listrec()
        .current_dir(dir.path())
        .args(["recommend", "--data", "listings.json"])
        .assert()
        .code(3);
}

#[test]
fn test_recommend_zero_ngram_is_usage_error() {
    let dir = setup_listings();

    listrec()
        .current_dir(dir.path())
        .args(["recommend", "--data", "listings.json", "--ngram-min", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = setup_listings();

    listrec()
        .current_dir(dir.path())
        .args(["--quiet", "recommend", "--data", "listings.json", "--alt", "404"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// clean
// ============================================================================

#[test]
fn test_clean_text_arguments() {
    listrec()
        .args(["clean", "3 br house, HW flrs"])
        .assert()
        .success()
        .stdout("bedroom house hardwood floors\n");
}

#[test]
fn test_clean_dataset_json() {
    let dir = setup_listings();

    let output = listrec()
        .current_dir(dir.path())
        .args(["--format", "json", "clean", "--data", "listings.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3]["id"], "D");
    assert_eq!(rows[3]["cleaned"], "bedroom house hardwood floor");
}

#[test]
fn test_clean_pos_tagged_needs_tokenizer() {
    let dir = tempdir().unwrap();

    listrec()
        .current_dir(dir.path())
        .args(["clean", "--pos-tagged", "quiet leafy street"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nlprule tokenizer"))
        .stderr(predicate::str::contains("hint: download en_tokenizer.bin"));
}

#[test]
fn test_clean_pos_tagged_missing_tokenizer_file_fails() {
    let dir = tempdir().unwrap();

    listrec()
        .current_dir(dir.path())
        .args([
            "clean",
            "--pos-tagged",
            "--tokenizer",
            "en_tokenizer.bin",
            "quiet leafy street",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to load tokenizer"));
}

#[test]
fn test_clean_ignores_tokenizer_without_pos_tagging() {
    listrec()
        .args(["clean", "--tokenizer", "missing.bin", "3 br house"])
        .assert()
        .success()
        .stdout("bedroom house\n");
}

#[test]
fn test_recommend_pos_tagged_needs_tokenizer() {
    let dir = setup_listings();

    listrec()
        .current_dir(dir.path())
        .args(["recommend", "--data", "listings.json", "--pos-tagged"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nlprule tokenizer"));
}

#[test]
fn test_clean_requires_input() {
    listrec().arg("clean").assert().code(2);
}

// ============================================================================
// stopwords
// ============================================================================

#[test]
fn test_stopwords_include_neighbourhoods_by_default() {
    listrec()
        .arg("stopwords")
        .assert()
        .success()
        .stdout(predicate::str::contains("seattlestreet\n"))
        .stdout(predicate::str::contains("ballard\n"));
}

#[test]
fn test_stopwords_no_extra() {
    let output = listrec()
        .args(["--format", "json", "stopwords", "--no-extra"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["combined"], false);
    assert_eq!(json["count"], 179);
    assert!(!json["words"]
        .as_array()
        .unwrap()
        .iter()
        .any(|w| w == "ballard"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_defaults() {
    let dir = tempdir().unwrap();

    listrec()
        .current_dir(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("ngram_min = 2"))
        .stdout(predicate::str::contains("text_field = \"remarks\""));
}

#[test]
fn test_config_discovered_in_working_directory() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "listrec.toml", "ngram_min = 1\nngram_max = 1\n");

    listrec()
        .current_dir(dir.path())
        .args(["--format", "records", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R ngram_min=1"));
}

#[test]
fn test_config_changes_field_names() {
    let dir = tempdir().unwrap();
    write_file(
        dir.path(),
        "custom.toml",
        "[dataset]\nid_field = \"listing_id\"\ntext_field = \"description\"\n",
    );
    write_file(
        dir.path(),
        "listings.json",
        r#"[
          {"listing_id": 1, "description": "quiet leafy street"},
          {"listing_id": 2, "description": "busy street corner"},
          {"listing_id": 3, "description": "quiet leafy lane"}
        ]"#,
    );

    listrec()
        .current_dir(dir.path())
        .args([
            "--config",
            "custom.toml",
            "recommend",
            "--data",
            "listings.json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1: 3, 2\n"));
}

#[test]
fn test_invalid_config_is_usage_error() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "listrec.toml", "ngram_min = 0\n");

    listrec()
        .current_dir(dir.path())
        .arg("config")
        .assert()
        .code(2);
}

#[test]
fn test_config_write() {
    let dir = tempdir().unwrap();

    listrec()
        .current_dir(dir.path())
        .args(["config", "--write"])
        .assert()
        .success();

    let written = std::fs::read_to_string(dir.path().join("listrec.toml")).unwrap();
    assert!(written.contains("combine_stopwords = true"));
}

// ============================================================================
// Exit codes and logging
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    listrec()
        .args(["--format", "yaml", "stopwords"])
        .assert()
        .code(2);
}

#[test]
fn test_log_level_debug_logs_to_stderr() {
    listrec()
        .args(["--log-level", "debug", "stopwords"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stdout(predicate::str::contains("parse_args").not());
}

#[test]
fn test_default_level_hides_debug_events() {
    listrec()
        .arg("stopwords")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_log_json_emits_json_lines() {
    let output = listrec()
        .args(["--log-level", "debug", "--log-json", "stopwords"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let event: Value = serde_json::from_str(first).unwrap();
    assert!(event.get("level").is_some());
}
