// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for all #[derive(...)] enums that represent
//! user-visible choices: case kinds, report formats, etc.

use serde::{Deserialize, Serialize};

/// Whether a fixture case is expected to hold or to be broken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CaseKind {
    #[default]
    Passing,
    Failing,
}

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum ReportFormat {
    #[default]
    JsonV1,
    // Future:
    // JunitXmlV1,
    // TapV14,
}
