use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::{Category, CANONICAL_ORDER};
use crate::dice::Hand;
use crate::errors::EngineError;
use crate::frequency::{build_frequency, FrequencyTable};
use crate::rules::GameRules;

/// Score achieved by a hand in one category.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Category the hand was scored against
    pub category: Category,
    /// Points, never negative
    pub score: u32,
}

/// Rule engine bound to one rule set.
///
/// Every call derives a fresh [`FrequencyTable`] from the hand, so an
/// evaluator holds no state besides its rules and can be shared freely.
///
/// # Examples
///
/// ```
/// use yacht_engine::category::Category;
/// use yacht_engine::dice::Hand;
/// use yacht_engine::scoring::Evaluator;
///
/// let eval = Evaluator::default();
/// let hand = Hand::new(vec![1, 1, 1, 8, 8]).unwrap();
/// assert_eq!(eval.score(&hand, Category::FullHouse), 25);
/// assert_eq!(eval.score(&hand, Category::FourOfAKind), 0);
///
/// let best = eval.best_category(&hand);
/// assert_eq!(best.category, Category::FullHouse);
/// assert_eq!(best.score, 25);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    rules: GameRules,
}

impl Evaluator {
    pub fn new(rules: GameRules) -> Self {
        Self { rules }
    }

    pub fn score(&self, hand: &Hand, category: Category) -> u32 {
        let table = build_frequency(hand);
        self.score_table(&table, category)
    }

    pub fn evaluate(&self, hand: &Hand, category: Category) -> ScoreResult {
        ScoreResult {
            category,
            score: self.score(hand, category),
        }
    }

    /// Highest scoring category for `hand`.
    ///
    /// Categories are tried in [`CANONICAL_ORDER`] and only a strictly higher
    /// score replaces the leader, so the earliest category wins a tie. When
    /// every category scores 0 the result is the first category with score 0.
    pub fn best_category(&self, hand: &Hand) -> ScoreResult {
        let table = build_frequency(hand);
        let mut best = ScoreResult {
            category: CANONICAL_ORDER[0],
            score: 0,
        };
        for category in CANONICAL_ORDER {
            let score = self.score_table(&table, category);
            if score > best.score {
                best = ScoreResult { category, score };
            }
        }
        debug!(hand = %hand, category = %best.category, score = best.score, "best category");
        best
    }

    /// Every category in canonical order.
    pub fn score_card(&self, hand: &Hand) -> Vec<ScoreResult> {
        let table = build_frequency(hand);
        CANONICAL_ORDER
            .iter()
            .map(|&category| ScoreResult {
                category,
                score: self.score_table(&table, category),
            })
            .collect()
    }

    fn score_table(&self, t: &FrequencyTable, category: Category) -> u32 {
        let points = &self.rules.points;
        match category {
            Category::Ones
            | Category::Twos
            | Category::Threes
            | Category::Fours
            | Category::Fives
            | Category::Sixes
            | Category::Sevens
            | Category::Eights => category.face().map_or(0, |face| face * t.count(face)),
            Category::ThreeOfAKind => {
                if t.distinct() == 3 && t.max_count() >= 3 {
                    t.sum()
                } else {
                    0
                }
            }
            Category::FourOfAKind => {
                if t.counts_match(&[1, 4]) {
                    t.sum()
                } else {
                    0
                }
            }
            Category::FullHouse => {
                if t.counts_match(&[2, 3]) {
                    points.full_house
                } else {
                    0
                }
            }
            // Loose on purpose: any four or more distinct faces with at most
            // one break count, which also accepts large straights.
            Category::SmallStraight => {
                if t.distinct() >= 4 && t.gaps() <= 1 {
                    points.small_straight
                } else {
                    0
                }
            }
            Category::LargeStraight => {
                if t.distinct() == self.rules.dice && t.gaps() == 0 {
                    points.large_straight
                } else {
                    0
                }
            }
            Category::AllDifferent => {
                if t.distinct() == self.rules.dice {
                    points.all_different
                } else {
                    0
                }
            }
            Category::AllSame => {
                if t.distinct() == 1 {
                    points.all_same
                } else {
                    0
                }
            }
            Category::Chance => t.sum(),
        }
    }
}

/// Scores `hand` in `category` under the default rules.
pub fn score(hand: &Hand, category: Category) -> u32 {
    Evaluator::default().score(hand, category)
}

/// Best category for `hand` under the default rules.
pub fn best_category(hand: &Hand) -> ScoreResult {
    Evaluator::default().best_category(hand)
}

/// Scores raw face values, failing when there is no hand to score.
///
/// ```
/// use yacht_engine::category::Category;
/// use yacht_engine::errors::EngineError;
/// use yacht_engine::scoring::score_values;
///
/// assert_eq!(score_values(&[4, 4, 4, 4, 5], Category::Fours), Ok(16));
/// assert_eq!(score_values(&[], Category::Chance), Err(EngineError::EmptyHand));
/// ```
pub fn score_values(values: &[u32], category: Category) -> Result<u32, EngineError> {
    let hand = Hand::try_from(values)?;
    Ok(score(&hand, category))
}
