//! # yacht-engine: Dice Scoring Core
//!
//! Scores a hand of dice against a fixed set of sixteen named categories and
//! picks the highest scoring one. Scoring is pure and deterministic; the only
//! stateful piece is the seeded [`roller`] that produces hands.
//!
//! ## Core Modules
//!
//! - [`dice`] - The [`dice::Hand`] type and its construction rules
//! - [`category`] - Scoring categories and their canonical order
//! - [`frequency`] - Face value → count tables derived from a hand
//! - [`scoring`] - The rule engine and best-category selection
//! - [`rules`] - Die count, faces per die and fixed point values
//! - [`roller`] - Seeded hand generation with ChaCha20 RNG
//! - [`check`] - Built-in self-check scenarios
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use yacht_engine::category::Category;
//! use yacht_engine::dice::Hand;
//! use yacht_engine::scoring::{best_category, score};
//!
//! let hand = Hand::new(vec![1, 1, 1, 2, 3]).unwrap();
//! assert_eq!(score(&hand, Category::Chance), 8);
//!
//! // THREE_OF_A_KIND ties with CHANCE and is listed first
//! let best = best_category(&hand);
//! assert_eq!(best.category, Category::ThreeOfAKind);
//! assert_eq!(best.score, 8);
//! ```
//!
//! ## Deterministic Rolls
//!
//! ```rust
//! use yacht_engine::roller::DiceRoller;
//! use yacht_engine::rules::GameRules;
//!
//! let mut roller = DiceRoller::new_with_seed(7, GameRules::default()).unwrap();
//! let hand = roller.roll();
//! assert_eq!(hand.len(), 5);
//! assert!(hand.values().iter().all(|&v| (1..=8).contains(&v)));
//! ```

pub mod category;
pub mod check;
pub mod dice;
pub mod errors;
pub mod frequency;
pub mod roller;
pub mod rules;
pub mod scoring;
