// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

use crate::enums::ReportFormat;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported report format: {0:?}")]
    UnsupportedFormat(ReportFormat),
}
