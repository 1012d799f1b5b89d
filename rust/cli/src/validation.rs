//! Parsing and validation of hands given on the command line.
//!
//! A hand must parse and every face must fit the configured die. A hand with
//! the wrong number of dice is still scored, with a warning, because the rules
//! work on any non-empty hand.

use yacht_engine::dice::Hand;
use yacht_engine::errors::EngineError;
use yacht_engine::rules::GameRules;

use crate::error::CliError;

/// A hand accepted from user input, plus any warning to show the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedHand {
    pub hand: Hand,
    pub warning: Option<String>,
}

/// Parse `"1,2,3,4,5"` (or space separated) and check it against `rules`.
///
/// # Example
///
/// ```rust
/// # use yacht_cli::validation::parse_hand;
/// use yacht_engine::rules::GameRules;
///
/// let rules = GameRules::default();
/// let parsed = parse_hand("1,1,1,8,8", &rules).unwrap();
/// assert_eq!(parsed.hand.values(), &[1, 1, 1, 8, 8]);
/// assert!(parsed.warning.is_none());
///
/// let short = parse_hand("6 6", &rules).unwrap();
/// assert!(short.warning.unwrap().contains("expected 5"));
///
/// assert!(parse_hand("1,2,9,4,5", &rules).is_err());
/// assert!(parse_hand("", &rules).is_err());
/// ```
pub fn parse_hand(input: &str, rules: &GameRules) -> Result<ParsedHand, CliError> {
    let hand: Hand = input.parse()?;
    match hand.validate_for(rules) {
        Ok(()) => Ok(ParsedHand {
            hand,
            warning: None,
        }),
        Err(EngineError::WrongDieCount { expected, actual }) => {
            let as_given = GameRules {
                dice: actual,
                ..*rules
            };
            hand.validate_for(&as_given)?;
            Ok(ParsedHand {
                hand,
                warning: Some(format!(
                    "hand has {} dice, expected {}; scoring anyway",
                    actual, expected
                )),
            })
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_hand_has_no_warning() {
        let p = parse_hand("5 2 1 3 4", &GameRules::default()).unwrap();
        assert_eq!(p.hand.values(), &[5, 2, 1, 3, 4]);
        assert_eq!(p.warning, None);
    }

    #[test]
    fn wrong_length_warns() {
        let p = parse_hand("1,2,3,4,5,6", &GameRules::default()).unwrap();
        assert_eq!(
            p.warning.as_deref(),
            Some("hand has 6 dice, expected 5; scoring anyway")
        );
    }

    #[test]
    fn face_out_of_range_is_rejected_even_with_wrong_length() {
        let err = parse_hand("1,9", &GameRules::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Engine(EngineError::FaceOutOfRange { face: 9, faces: 8 })
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            parse_hand("1,two,3", &GameRules::default()),
            Err(CliError::Engine(EngineError::UnparsableFace(_)))
        ));
        assert!(matches!(
            parse_hand("0,1,2,3,4", &GameRules::default()),
            Err(CliError::Engine(EngineError::InvalidFace { face: 0 }))
        ));
        assert!(matches!(
            parse_hand("", &GameRules::default()),
            Err(CliError::Engine(EngineError::EmptyHand))
        ));
    }
}
