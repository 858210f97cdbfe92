// src/catalog.rs
//! The fixture catalog — every expectation in this repo, as data
//!
//! Tooling under validation runs the test suites and compares what it
//! observed against this catalog. Passing cases must hold; Failing cases
//! are deliberately broken and must not.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::core::{calculate_sum, greet, Counter};
use crate::enums::CaseKind;

/// One declared expectation: what the fixture computes vs. what the
/// fixture author claims it computes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    pub name: String,
    pub kind: CaseKind,
    pub expected: Value,
    pub actual: Value,
    pub detail: Option<String>,
}

impl FixtureCase {
    /// True when the declared expectation matches the computed value
    pub fn holds(&self) -> bool {
        self.expected == self.actual
    }
}

fn case(name: &str, kind: CaseKind, expected: Value, actual: Value) -> FixtureCase {
    FixtureCase {
        name: name.to_owned(),
        kind,
        expected,
        actual,
        detail: None,
    }
}

/// The full built-in catalog: seven passing expectations, three broken ones
pub fn builtin_cases() -> Vec<FixtureCase> {
    let mut counter = Counter::new();
    counter.add(5);
    let counter_total = counter.add(3);

    let mut reset_counter = Counter::new();
    reset_counter.add(10);
    reset_counter.reset();

    // "123" parses fine; the Failing case below insists it should not
    let parse_outcome = match "123".parse::<i64>() {
        Ok(n) => json!(n),
        Err(_) => json!("parse error"),
    };

    vec![
        case(
            "sum_empty",
            CaseKind::Passing,
            json!(0),
            json!(calculate_sum(&[])),
        ),
        case(
            "sum_one_two_three",
            CaseKind::Passing,
            json!(6),
            json!(calculate_sum(&[1, 2, 3])),
        ),
        case(
            "sum_cancels",
            CaseKind::Passing,
            json!(0),
            json!(calculate_sum(&[-1, 1])),
        ),
        case(
            "greet_world",
            CaseKind::Passing,
            json!("Hello, World!"),
            json!(greet("World")),
        ),
        case(
            "greet_alice",
            CaseKind::Passing,
            json!("Hello, Alice!"),
            json!(greet("Alice")),
        ),
        case(
            "counter_add_five_then_three",
            CaseKind::Passing,
            json!(8),
            json!(counter_total),
        ),
        case(
            "counter_reset",
            CaseKind::Passing,
            json!(0),
            json!(reset_counter.value),
        ),
        FixtureCase {
            detail: Some("assertion failure fixture: claims 1 + 1 is 3".to_owned()),
            ..case(
                "broken_arithmetic",
                CaseKind::Failing,
                json!(3),
                json!(1 + 1),
            )
        },
        FixtureCase {
            detail: Some("comparison failure fixture: last element differs".to_owned()),
            ..case(
                "broken_comparison",
                CaseKind::Failing,
                json!([1, 2, 4]),
                json!([1, 2, 3]),
            )
        },
        FixtureCase {
            detail: Some(
                "error-never-raised fixture: expects \"123\" to fail integer parsing".to_owned(),
            ),
            ..case(
                "error_never_raised",
                CaseKind::Failing,
                json!("parse error"),
                parse_outcome,
            )
        },
    ]
}
