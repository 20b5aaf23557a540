// CLI tests: `--json` output must be machine-readable on stdout.
//
// These run the built binary against data/sample_cliques.json and parse
// stdout as JSON. Notices and logs belong on stderr; anything else on
// stdout breaks the parse.

use std::process::{Command, Output};

use serde_json::Value;

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_cliques.json");

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cliquescope"))
        .arg("--dataset")
        .arg(SAMPLE)
        .args(args)
        .env_remove("CLIQUESCOPE_DATASET")
        .env_remove("CLIQUESCOPE_TOP_N")
        .env_remove("CLIQUESCOPE_ALPHA")
        .env_remove("CLIQUESCOPE_BETA")
        .output()
        .expect("failed to run cliquescope")
}

fn stdout_json(args: &[&str]) -> Value {
    let output = run(args);
    assert!(
        output.status.success(),
        "cliquescope {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {stdout:?}"))
}

// ============================================================
// Missing slices
// ============================================================

#[test]
fn freq_on_missing_slice_is_an_empty_json_array() {
    let value = stdout_json(&["freq", "--time", "999", "--json"]);
    assert_eq!(value, Value::Array(Vec::new()));
}

#[test]
fn combos_on_missing_slice_is_an_empty_json_array() {
    let value = stdout_json(&["combos", "-k", "2", "--time", "999", "--json"]);
    assert_eq!(value, Value::Array(Vec::new()));
}

#[test]
fn extract_on_missing_slice_is_an_empty_json_array() {
    let value = stdout_json(&["extract", "--time", "999", "--members", "1,2", "--json"]);
    assert_eq!(value, Value::Array(Vec::new()));
}

// ============================================================
// Populated slices
// ============================================================

#[test]
fn freq_json_lists_key_and_count() {
    let value = stdout_json(&["freq", "--time", "0", "--json"]);
    let rows = value.as_array().expect("array");

    // slice 0: entity 2 appears in three cliques, more than any other
    assert_eq!(rows[0]["key"], 2);
    assert_eq!(rows[0]["count"], 3);
}

#[test]
fn timeline_accepts_policy_alias() {
    let value = stdout_json(&[
        "timeline",
        "--members",
        "1",
        "--policy",
        "alpha",
        "--threshold",
        "1.0",
        "--json",
    ]);
    // entity 1 is recorded at slices 0..=3
    assert_eq!(value.as_array().map(Vec::len), Some(3));
}
