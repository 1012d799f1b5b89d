use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::dice::Hand;
use crate::errors::EngineError;
use crate::rules::GameRules;

/// Seeded source of hands.
///
/// Each roll draws `rules.dice` faces uniformly from `1..=rules.faces`. Two
/// rollers built with the same seed and rules produce the same hands.
///
/// ```
/// use yacht_engine::roller::DiceRoller;
/// use yacht_engine::rules::GameRules;
///
/// let mut a = DiceRoller::new_with_seed(42, GameRules::default()).unwrap();
/// let mut b = DiceRoller::new_with_seed(42, GameRules::default()).unwrap();
/// assert_eq!(a.roll(), b.roll());
/// ```
#[derive(Debug)]
pub struct DiceRoller {
    rules: GameRules,
    rng: ChaCha20Rng,
}

impl DiceRoller {
    pub fn new_with_seed(seed: u64, rules: GameRules) -> Result<Self, EngineError> {
        rules.validate()?;
        debug!(seed, dice = rules.dice, faces = rules.faces, "dice roller created");
        Ok(Self {
            rules,
            rng: ChaCha20Rng::seed_from_u64(seed),
        })
    }

    pub fn roll(&mut self) -> Hand {
        let faces = self.rules.faces;
        let values = (0..self.rules.dice)
            .map(|_| self.rng.random_range(1..=faces))
            .collect();
        Hand::from_rolled(values)
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_rules() {
        let rules = GameRules {
            dice: 0,
            ..GameRules::default()
        };
        assert!(DiceRoller::new_with_seed(1, rules).is_err());
    }

    #[test]
    fn single_face_die_always_rolls_one() {
        let rules = GameRules {
            dice: 3,
            faces: 1,
            ..GameRules::default()
        };
        let mut r = DiceRoller::new_with_seed(9, rules).unwrap();
        assert_eq!(r.roll().values(), &[1, 1, 1]);
    }
}
