// src/lib.rs
//! tooling-fixtures — known-good and known-bad cases for tooling validation
//!
//! Features:
//! - Tiny sample module: sum, greeting, stateful counter
//! - A catalog of passing and intentionally failing expectations
//! - JSON report export for comparing tool output against the catalog
//! - Passing and deliberately failing test suites under `tests/`

pub mod catalog;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod export;

pub mod error;

// Re-export everything users need at the crate root
pub use catalog::{builtin_cases, FixtureCase};
pub use config::load as load_config;
pub use crate::core::{calculate_sum, greet, Counter, Result as CoreResult};
pub use enums::{CaseKind, ReportFormat};
pub use error::CoreError;
pub use export::{export_to_default_path, export_to_json};
