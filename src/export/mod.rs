// src/export/mod.rs
//! Report export for tooling-fixtures
//!
//! A report is a versioned JSON envelope of the fixture catalog, written
//! for the tool under validation to diff against its own results.

pub use json::{export_to_default_path, export_to_json};
// pub use junit::export_to_junit; // Future
// pub use tap::export_to_tap;     // Future

pub mod json;
// mod junit; // Future
// mod tap;   // Future
