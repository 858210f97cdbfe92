// tests/test_mode_override_tests.rs
//! FIXTURES_TEST_MODE forces the failure fixtures back into reports even
//! when the config file excludes them.
//!
//! Own binary — config is loaded once per process, and here it must be
//! loaded with the override active.

mod support;
use support::{init_tracing, ReportSink};

use serde_json::Value;
use std::env;
use std::fs;
use std::path::PathBuf;

use tooling_fixtures::builtin_cases;
use tooling_fixtures::export::json::export_to_json;

fn point_at_overridden_config() {
    let base = PathBuf::from("tests/data");
    fs::create_dir_all(&base).expect("failed to create tests/data");

    let config_path = base.join("test-mode-config.toml");
    fs::write(
        &config_path,
        r#"
[report]
path = "tests/data/test-mode-report.json"
pretty = true
format = "JsonV1"

[features]
include_failing = false
"#,
    )
    .expect("write test-mode config");

    env::set_var("FIXTURES_CONFIG", config_path.to_str().unwrap());
    env::set_var("FIXTURES_TEST_MODE", "1");
}

#[test]
fn test_mode_forces_include_failing_on() {
    init_tracing();
    point_at_overridden_config();

    let conf = tooling_fixtures::load_config();
    assert!(conf.features.include_failing);
    // The rest of the file still applies
    assert_eq!(conf.report.path, "tests/data/test-mode-report.json");
}

#[test]
fn test_mode_report_covers_the_failure_fixtures() {
    init_tracing();
    point_at_overridden_config();

    let sink = ReportSink::new();
    let path = sink.path("with-failing.json");

    export_to_json(&builtin_cases(), path.to_str().unwrap()).expect("export failed");

    let report: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(report["total_cases"], 10);
    assert_eq!(report["failing"], 3);

    let cases = report["cases"].as_array().unwrap();
    assert!(cases.iter().any(|c| c["name"] == "broken_arithmetic"));
    assert!(cases.iter().any(|c| c["name"] == "error_never_raised"));
}
