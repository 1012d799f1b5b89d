use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// A named scoring rule from the fixed set of sixteen.
///
/// The eight specific-number variants each score one face value, available
/// through [`Category::face`]. The declaration order here is not used for
/// tie-breaking; [`CANONICAL_ORDER`] is.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Sum of all 1s
    Ones,
    /// Sum of all 2s
    Twos,
    /// Sum of all 3s
    Threes,
    /// Sum of all 4s
    Fours,
    /// Sum of all 5s
    Fives,
    /// Sum of all 6s
    Sixes,
    /// Sum of all 7s
    Sevens,
    /// Sum of all 8s
    Eights,
    /// Sum of the hand when one face appears three times alongside two other faces
    ThreeOfAKind,
    /// Sum of the hand when one face appears four times alongside one other
    FourOfAKind,
    /// Fixed points for three of one face and two of another
    FullHouse,
    /// Fixed points for four or more distinct faces with at most one gap
    SmallStraight,
    /// Fixed points when every die belongs to one unbroken run
    LargeStraight,
    /// Fixed points when every die shows a different face
    AllDifferent,
    /// Fixed points when every die shows the same face
    AllSame,
    /// Sum of the hand
    Chance,
}

/// Evaluation order for best-category selection. On equal scores the
/// category listed first wins.
pub const CANONICAL_ORDER: [Category; 16] = [
    Category::Ones,
    Category::Twos,
    Category::Threes,
    Category::Fours,
    Category::Fives,
    Category::Sixes,
    Category::Sevens,
    Category::Eights,
    Category::ThreeOfAKind,
    Category::FourOfAKind,
    Category::FullHouse,
    Category::SmallStraight,
    Category::LargeStraight,
    Category::AllDifferent,
    Category::AllSame,
    Category::Chance,
];

impl Category {
    /// Face value summed by a specific-number category, `None` for the rest.
    ///
    /// ```
    /// use yacht_engine::category::Category;
    ///
    /// assert_eq!(Category::Fours.face(), Some(4));
    /// assert_eq!(Category::Chance.face(), None);
    /// ```
    pub fn face(self) -> Option<u32> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            Category::Sevens => Some(7),
            Category::Eights => Some(8),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Ones => "ONES",
            Category::Twos => "TWOS",
            Category::Threes => "THREES",
            Category::Fours => "FOURS",
            Category::Fives => "FIVES",
            Category::Sixes => "SIXES",
            Category::Sevens => "SEVENS",
            Category::Eights => "EIGHTS",
            Category::ThreeOfAKind => "THREE_OF_A_KIND",
            Category::FourOfAKind => "FOUR_OF_A_KIND",
            Category::FullHouse => "FULL_HOUSE",
            Category::SmallStraight => "SMALL_STRAIGHT",
            Category::LargeStraight => "LARGE_STRAIGHT",
            Category::AllDifferent => "ALL_DIFFERENT",
            Category::AllSame => "ALL_SAME",
            Category::Chance => "CHANCE",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_").to_ascii_uppercase();
        CANONICAL_ORDER
            .iter()
            .copied()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| EngineError::UnknownCategory(s.to_string()))
    }
}
