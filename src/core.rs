// src/core.rs
//! The sample module itself — the code the external tooling gets pointed at
//!
//! Everything here is intentionally trivial. These functions exist so a
//! test runner, linter, or coverage tool has something real to chew on,
//! with behavior simple enough that the expected results can be written
//! down exactly (see `catalog`).

use crate::consts::{COUNTER_START, GREETING_PREFIX};
use crate::error::CoreError;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Sum of a slice of integers. Empty slice sums to 0.
pub fn calculate_sum(numbers: &[i64]) -> i64 {
    numbers.iter().sum()
}

/// Greeting message for `name`, e.g. `greet("World")` → `"Hello, World!"`
pub fn greet(name: &str) -> String {
    format!("{GREETING_PREFIX}, {name}!")
}

/// A running total with two mutations: add and reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub value: i64,
}

impl Counter {
    pub fn new() -> Self {
        Self {
            value: COUNTER_START,
        }
    }

    /// Add `value` to the running total and return the new total
    pub fn add(&mut self, value: i64) -> i64 {
        self.value += value;
        self.value
    }

    /// Reset the running total back to its starting value
    pub fn reset(&mut self) {
        self.value = COUNTER_START;
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}
