// src/export/json.rs
use std::path::Path;

use chrono::Utc;
use serde_json::json;

use crate::catalog::FixtureCase;
use crate::consts::REPORT_FORMAT_TAG;
use crate::core::Result;
use crate::enums::{CaseKind, ReportFormat};
use crate::error::CoreError;

/// Export fixture cases to a JSON report file.
///
/// The envelope carries a format tag, an RFC 3339 timestamp, the crate
/// version, and passing/failing totals, so a tool can validate its own
/// run without parsing this crate's source.
pub fn export_to_json(cases: &[FixtureCase], path: &str) -> Result<()> {
    let config = crate::config::load();

    if config.report.format != ReportFormat::JsonV1 {
        return Err(CoreError::UnsupportedFormat(config.report.format));
    }

    let included: Vec<&FixtureCase> = cases
        .iter()
        .filter(|c| config.features.include_failing || c.kind == CaseKind::Passing)
        .collect();

    let total = included.len();
    let passing = included
        .iter()
        .filter(|c| c.kind == CaseKind::Passing)
        .count();
    let failing = total - passing;

    let report = json!({
        "export_format": REPORT_FORMAT_TAG,
        "exported_at": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        "exporter_version": env!("CARGO_PKG_VERSION"),
        "total_cases": total,
        "passing": passing,
        "failing": failing,
        "cases": included,
    });

    let body = if config.report.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    std::fs::write(path, body)?;

    #[cfg(feature = "logging")]
    tracing::info!(path, total, "report exported");

    Ok(())
}

/// Export to the configured `report.path`, creating its parent directory.
///
/// Returns the path actually written, so callers that never touched the
/// config can still find the report.
pub fn export_to_default_path(cases: &[FixtureCase]) -> Result<String> {
    let path = crate::config::load().report.path.clone();

    if let Some(parent) = Path::new(&path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    export_to_json(cases, &path)?;
    Ok(path)
}
