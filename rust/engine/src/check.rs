//! Built-in self-check scenarios for the rule engine.
//!
//! A run walks a list of [`Scenario`]s, compares the evaluator's answer with
//! the expected one and accumulates the outcome into a caller-owned
//! [`CheckTally`]. Nothing is kept between runs.

use serde::Serialize;

use crate::category::{Category, CANONICAL_ORDER};
use crate::dice::Hand;
use crate::scoring::{Evaluator, ScoreResult};

/// One expectation about the rule engine.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scenario {
    /// `hand` scores `expected` in `category`
    Score {
        hand: Hand,
        category: Category,
        expected: u32,
    },
    /// `expected` is the best category for `hand`
    Best { hand: Hand, expected: Category },
}

/// Result of running a single scenario.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome<'a> {
    pub scenario: &'a Scenario,
    pub actual: ScoreResult,
    pub passed: bool,
}

/// Running totals for a check run.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
pub struct CheckTally {
    pub run: usize,
    pub passed: usize,
    pub failed: usize,
}

impl CheckTally {
    pub fn record(&mut self, passed: bool) {
        self.run += 1;
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Evaluates each scenario, records it in `tally` and hands the outcome to
/// `report`.
pub fn run_scenarios<F>(
    evaluator: &Evaluator,
    scenarios: &[Scenario],
    tally: &mut CheckTally,
    mut report: F,
) where
    F: FnMut(&CheckOutcome<'_>),
{
    for scenario in scenarios {
        let outcome = match scenario {
            Scenario::Score {
                hand,
                category,
                expected,
            } => {
                let actual = evaluator.evaluate(hand, *category);
                CheckOutcome {
                    scenario,
                    actual,
                    passed: actual.score == *expected,
                }
            }
            Scenario::Best { hand, expected } => {
                let actual = evaluator.best_category(hand);
                CheckOutcome {
                    scenario,
                    actual,
                    passed: actual.category == *expected,
                }
            }
        };
        tally.record(outcome.passed);
        report(&outcome);
    }
}

fn h(values: &[u32]) -> Hand {
    Hand::from_rolled(values.to_vec())
}

fn score(values: &[u32], category: Category, expected: u32) -> Scenario {
    Scenario::Score {
        hand: h(values),
        category,
        expected,
    }
}

fn best(values: &[u32], expected: Category) -> Scenario {
    Scenario::Best {
        hand: h(values),
        expected,
    }
}

/// Reference scenarios for the default five-die, eight-face rules.
pub fn builtin_scenarios() -> Vec<Scenario> {
    use Category::*;

    let run = [1, 2, 3, 4, 5];
    let mut v: Vec<Scenario> = CANONICAL_ORDER
        .iter()
        .filter_map(|&c| c.face().map(|face| (c, face)))
        .map(|(c, face)| {
            let expected = if run.contains(&face) { face } else { 0 };
            score(&run, c, expected)
        })
        .collect();

    v.extend([
        score(&[4, 4, 4, 4, 5], Fours, 16),
        score(&[1, 1, 1, 2, 3], ThreeOfAKind, 8),
        score(&[1, 1, 1, 2, 2], ThreeOfAKind, 0),
        score(&[1, 1, 1, 1, 2], FourOfAKind, 6),
        score(&[1, 1, 1, 1, 1], FourOfAKind, 0),
        score(&[1, 1, 1, 8, 8], FullHouse, 25),
        score(&[1, 1, 1, 8, 8], FourOfAKind, 0),
        score(&[1, 1, 1, 2, 3], FullHouse, 0),
        score(&[4, 2, 8, 3, 1], SmallStraight, 30),
        score(&[8, 2, 7, 1, 4], SmallStraight, 0),
        score(&[5, 2, 1, 3, 4], LargeStraight, 40),
        score(&[5, 1, 4, 8, 6], LargeStraight, 0),
        score(&[1, 2, 3, 4, 5], AllDifferent, 40),
        score(&[1, 2, 3, 4, 4], AllDifferent, 0),
        score(&[1, 3, 5, 7, 8], AllDifferent, 40),
        score(&[8, 8, 8, 8, 8], AllDifferent, 0),
        score(&[1, 1, 1, 1, 1], AllSame, 50),
        score(&[1, 1, 1, 1, 2], AllSame, 0),
        score(&[1, 2, 1, 8, 8], Chance, 20),
        best(&[1, 2, 1, 8, 8], Chance),
        best(&[1, 1, 1, 1, 1], AllSame),
        best(&[1, 2, 4, 5, 6], AllDifferent),
        best(&[4, 5, 6, 7, 8], LargeStraight),
        best(&[5, 2, 1, 3, 4], LargeStraight),
        best(&[7, 8, 8, 8, 8], FourOfAKind),
        best(&[1, 1, 2, 2, 2], FullHouse),
        best(&[1, 1, 1, 2, 3], ThreeOfAKind),
    ]);
    v
}
