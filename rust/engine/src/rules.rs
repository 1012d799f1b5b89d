use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Fixed point values awarded by the pattern categories.
///
/// Specific-number categories, THREE_OF_A_KIND, FOUR_OF_A_KIND and CHANCE
/// score from the dice themselves and have no entry here.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedPoints {
    /// Every die shows the same face
    pub all_same: u32,
    /// Every die shows a different face
    pub all_different: u32,
    /// All dice form one unbroken run
    pub large_straight: u32,
    /// At least four distinct faces with at most one gap
    pub small_straight: u32,
    /// Three of one face and two of another
    pub full_house: u32,
}

impl Default for FixedPoints {
    fn default() -> Self {
        Self {
            all_same: 50,
            all_different: 40,
            large_straight: 40,
            small_straight: 30,
            full_house: 25,
        }
    }
}

/// Rule set the engine scores against.
///
/// The reference game uses five eight-sided dice. Rules that compare against
/// the die count (LARGE_STRAIGHT, ALL_DIFFERENT) read [`GameRules::dice`];
/// every other rule works on whatever hand it is given.
///
/// # Examples
///
/// ```
/// use yacht_engine::rules::GameRules;
///
/// let rules = GameRules::default();
/// assert_eq!(rules.dice, 5);
/// assert_eq!(rules.faces, 8);
/// assert_eq!(rules.points.full_house, 25);
/// assert!(rules.validate().is_ok());
/// ```
/// Upper bound on dice per hand.
pub const MAX_DICE: usize = 1_000;

/// Upper bound on any face value. With [`MAX_DICE`] it keeps every hand
/// total within `u32`.
pub const MAX_FACES: u32 = 1_000_000;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// Number of dice rolled per hand
    pub dice: usize,
    /// Faces per die; rolls fall in `1..=faces`
    pub faces: u32,
    /// Points for the fixed-value categories
    pub points: FixedPoints,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            dice: 5,
            faces: 8,
            points: FixedPoints::default(),
        }
    }
}

impl GameRules {
    /// Rejects rule sets no hand could satisfy.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRules`] when `dice` is outside
    /// `1..=MAX_DICE` or `faces` is outside `1..=MAX_FACES`.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(1..=MAX_DICE).contains(&self.dice) {
            return Err(EngineError::InvalidRules(format!(
                "dice must be between 1 and {}",
                MAX_DICE
            )));
        }
        if !(1..=MAX_FACES).contains(&self.faces) {
            return Err(EngineError::InvalidRules(format!(
                "faces must be between 1 and {}",
                MAX_FACES
            )));
        }
        Ok(())
    }
}
