//! End-of-game scoring.
//!
//! Each suit scores independently from its play pile (see [`Pile::score`]);
//! a player's total is the sum over all suits.

use serde::{Deserialize, Serialize};

use crate::cards::{Pile, SuitMap};

/// Total score of one player's play piles.
#[must_use]
pub fn score_plays(plays: &SuitMap<Pile>) -> i32 {
    plays.values().map(Pile::score).sum()
}

/// Per-suit breakdown of a player's score.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    pub per_suit: SuitMap<i32>,
    pub total: i32,
}

impl ScoreSheet {
    #[must_use]
    pub fn from_plays(plays: &SuitMap<Pile>) -> Self {
        let per_suit = SuitMap::new(|suit| plays[suit].score());
        let total = per_suit.values().sum();
        Self { per_suit, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Suit};

    fn sample_plays() -> SuitMap<Pile> {
        let mut plays: SuitMap<Pile> = SuitMap::default();
        plays[Suit::Yellow] = Pile::from(vec![
            Card::wild(Suit::Yellow),
            Card::wild(Suit::Yellow),
            Card::number(Suit::Yellow, 7),
        ]);
        plays[Suit::Blue] = Pile::from(vec![Card::number(Suit::Blue, 3), Card::number(Suit::Blue, 4)]);
        plays[Suit::Red] = Pile::from(vec![
            Card::number(Suit::Red, 8),
            Card::number(Suit::Red, 9),
            Card::number(Suit::Red, 10),
        ]);
        plays
    }

    #[test]
    fn test_score_plays_empty() {
        assert_eq!(score_plays(&SuitMap::default()), 0);
    }

    #[test]
    fn test_score_plays_sums_suits() {
        // -39 + -13 + 7
        assert_eq!(score_plays(&sample_plays()), -45);
    }

    #[test]
    fn test_score_sheet() {
        let sheet = ScoreSheet::from_plays(&sample_plays());

        assert_eq!(sheet.per_suit[Suit::Yellow], -39);
        assert_eq!(sheet.per_suit[Suit::White], 0);
        assert_eq!(sheet.per_suit[Suit::Blue], -13);
        assert_eq!(sheet.per_suit[Suit::Green], 0);
        assert_eq!(sheet.per_suit[Suit::Red], 7);
        assert_eq!(sheet.total, score_plays(&sample_plays()));
    }
}
