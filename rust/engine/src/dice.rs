use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::rules::{GameRules, MAX_DICE, MAX_FACES};

/// An ordered, immutable sequence of rolled face values.
/// A hand is what every scoring operation consumes; it is never empty.
///
/// # Examples
///
/// ```
/// use yacht_engine::dice::Hand;
///
/// let hand = Hand::new(vec![4, 4, 4, 4, 5]).unwrap();
/// assert_eq!(hand.len(), 5);
/// assert_eq!(hand.roll(4).unwrap(), 5);
/// assert_eq!(hand.to_string(), "[4, 4, 4, 4, 5]");
///
/// let parsed: Hand = "1,2,3,4,5".parse().unwrap();
/// assert_eq!(parsed.sum(), 15);
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Hand {
    values: Vec<u32>,
}

impl Hand {
    /// Builds a hand from raw face values.
    ///
    /// # Errors
    ///
    /// - [`EngineError::EmptyHand`] if `values` is empty
    /// - [`EngineError::TooManyDice`] if there are more than [`MAX_DICE`] values
    /// - [`EngineError::InvalidFace`] if any value is zero
    /// - [`EngineError::FaceOutOfRange`] if any value exceeds [`MAX_FACES`]
    pub fn new(values: Vec<u32>) -> Result<Self, EngineError> {
        if values.is_empty() {
            return Err(EngineError::EmptyHand);
        }
        if values.len() > MAX_DICE {
            return Err(EngineError::TooManyDice {
                actual: values.len(),
                max: MAX_DICE,
            });
        }
        if let Some(&face) = values.iter().find(|&&v| v == 0) {
            return Err(EngineError::InvalidFace { face });
        }
        if let Some(&face) = values.iter().find(|&&v| v > MAX_FACES) {
            return Err(EngineError::FaceOutOfRange {
                face,
                faces: MAX_FACES,
            });
        }
        Ok(Self { values })
    }

    // Callers guarantee a non-empty vector of faces in `1..=MAX_FACES`, at
    // most `MAX_DICE` long.
    pub(crate) fn from_rolled(values: Vec<u32>) -> Self {
        debug_assert!(!values.is_empty());
        Self { values }
    }

    /// Checks the hand against a rule set: exact die count and every face in
    /// `1..=rules.faces`.
    pub fn validate_for(&self, rules: &GameRules) -> Result<(), EngineError> {
        if self.values.len() != rules.dice {
            return Err(EngineError::WrongDieCount {
                expected: rules.dice,
                actual: self.values.len(),
            });
        }
        if let Some(&face) = self.values.iter().find(|&&v| v > rules.faces) {
            return Err(EngineError::FaceOutOfRange {
                face,
                faces: rules.faces,
            });
        }
        Ok(())
    }

    /// Value of a single roll, zero-based.
    pub fn roll(&self, index: usize) -> Result<u32, EngineError> {
        self.values
            .get(index)
            .copied()
            .ok_or(EngineError::RollIndexOutOfRange {
                index,
                len: self.values.len(),
            })
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn sum(&self) -> u32 {
        self.values.iter().sum()
    }
}

impl TryFrom<Vec<u32>> for Hand {
    type Error = EngineError;

    fn try_from(values: Vec<u32>) -> Result<Self, Self::Error> {
        Hand::new(values)
    }
}

impl TryFrom<&[u32]> for Hand {
    type Error = EngineError;

    fn try_from(values: &[u32]) -> Result<Self, Self::Error> {
        Hand::new(values.to_vec())
    }
}

impl From<Hand> for Vec<u32> {
    fn from(hand: Hand) -> Self {
        hand.values
    }
}

impl FromStr for Hand {
    type Err = EngineError;

    /// Parses comma- or whitespace-separated face values, e.g. `"1,2,3,4,5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::new();
        for token in s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let face = token
                .parse::<u32>()
                .map_err(|_| EngineError::UnparsableFace(token.to_string()))?;
            values.push(face);
        }
        Hand::new(values)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hand_rejected() {
        assert_eq!(Hand::new(vec![]), Err(EngineError::EmptyHand));
        assert_eq!("".parse::<Hand>(), Err(EngineError::EmptyHand));
        assert_eq!(" , ".parse::<Hand>(), Err(EngineError::EmptyHand));
    }

    #[test]
    fn zero_face_rejected() {
        assert_eq!(
            Hand::new(vec![1, 0, 3]),
            Err(EngineError::InvalidFace { face: 0 })
        );
    }

    #[test]
    fn oversized_hands_rejected() {
        assert_eq!(
            Hand::new(vec![u32::MAX, 2]),
            Err(EngineError::FaceOutOfRange {
                face: u32::MAX,
                faces: MAX_FACES
            })
        );
        assert!(Hand::new(vec![MAX_FACES; MAX_DICE]).is_ok());
        assert_eq!(
            Hand::new(vec![1; MAX_DICE + 1]),
            Err(EngineError::TooManyDice {
                actual: MAX_DICE + 1,
                max: MAX_DICE
            })
        );
    }

    #[test]
    fn largest_hand_sums_without_overflow() {
        let hand = Hand::new(vec![MAX_FACES; MAX_DICE]).unwrap();
        assert_eq!(hand.sum(), MAX_FACES * MAX_DICE as u32);
    }

    #[test]
    fn non_numeric_token_rejected() {
        assert_eq!(
            "1,2,x".parse::<Hand>(),
            Err(EngineError::UnparsableFace("x".into()))
        );
        assert_eq!(
            "1,-2,3".parse::<Hand>(),
            Err(EngineError::UnparsableFace("-2".into()))
        );
    }

    #[test]
    fn parses_commas_and_spaces() {
        let a: Hand = "1,2,3,4,5".parse().unwrap();
        let b: Hand = "1 2 3 4 5".parse().unwrap();
        let c: Hand = " 1, 2,3 ,4, 5 ".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.values(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn roll_index_bounds() {
        let hand = Hand::new(vec![6, 2, 8]).unwrap();
        assert_eq!(hand.roll(0), Ok(6));
        assert_eq!(hand.roll(2), Ok(8));
        assert_eq!(
            hand.roll(3),
            Err(EngineError::RollIndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn validate_against_rules() {
        let rules = GameRules::default();
        assert!(Hand::new(vec![1, 2, 3, 4, 8])
            .unwrap()
            .validate_for(&rules)
            .is_ok());
        assert_eq!(
            Hand::new(vec![1, 2, 3, 4]).unwrap().validate_for(&rules),
            Err(EngineError::WrongDieCount {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(
            Hand::new(vec![1, 2, 3, 4, 9]).unwrap().validate_for(&rules),
            Err(EngineError::FaceOutOfRange { face: 9, faces: 8 })
        );
    }

    #[test]
    fn display_and_serde_are_plain_lists() {
        let hand = Hand::new(vec![1, 2, 1, 8, 8]).unwrap();
        assert_eq!(hand.to_string(), "[1, 2, 1, 8, 8]");
        assert_eq!(serde_json::to_string(&hand).unwrap(), "[1,2,1,8,8]");
        let back: Hand = serde_json::from_str("[1,2,1,8,8]").unwrap();
        assert_eq!(back, hand);
        assert!(serde_json::from_str::<Hand>("[]").is_err());
    }
}
