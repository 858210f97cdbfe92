// tests/support.rs
//! Shared test utilities — tracing setup and report scratch space

use std::path::PathBuf;

use serde_json::Value;
use tempfile::TempDir;

use tooling_fixtures::catalog::FixtureCase;
use tooling_fixtures::enums::CaseKind;

/// Initialize tracing only when the logging feature is enabled
#[cfg(feature = "logging")]
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok(); // idempotent — safe to call multiple times
}

#[cfg(not(feature = "logging"))]
pub fn init_tracing() {}

/// Scratch directory for report files, deleted on drop
#[allow(dead_code)] // not every test binary exports reports
pub struct ReportSink {
    dir: TempDir,
}

#[allow(dead_code)]
impl ReportSink {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create report tempdir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Build a one-off case without going through the built-in catalog
#[allow(dead_code)]
pub fn mk_case(name: &str, kind: CaseKind, expected: Value, actual: Value) -> FixtureCase {
    FixtureCase {
        name: name.to_owned(),
        kind,
        expected,
        actual,
        detail: None,
    }
}
