// src/consts.rs
//! Shared constants — fixture defaults

/// Prefix used by the greeting fixture
pub const GREETING_PREFIX: &str = "Hello";

/// Initial and post-reset counter value
pub const COUNTER_START: i64 = 0;

/// Format tag written into every JSON report envelope
pub const REPORT_FORMAT_TAG: &str = "tooling-fixtures-v1";

/// Default report output path
pub const DEFAULT_REPORT_PATH: &str = "tests/data/fixture-report.json";
