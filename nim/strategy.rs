//! Optimal play in Nim.
//!
//! Position is lost for the player to move iff the Nim sum of all piles is zero. With nonzero sum
//! `x` the winning move is found by taking the most significant bit of `x`: at least one pile
//! has that bit set, and reducing that pile to `pile ^ x` (which is smaller, because the bit gets
//! cleared and only lower bits change) leaves the opponent with zero sum.

use crate::{
    numeric::{
        bits::{is_bit_set, most_significant_bit},
        nimber::Nimber,
    },
    position::Move,
};
use std::fmt::{self, Display};

/// Outcome class of a position under optimal play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Next player (the one to move) wins
    N,

    /// Previous player wins
    P,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::N => write!(f, "N"),
            Outcome::P => write!(f, "P"),
        }
    }
}

/// What the player to move should do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    /// No piles, or all of them are empty
    GameOver,

    /// Move that leaves the opponent with zero Nim sum
    Win(Move),

    /// Position is lost against optimal play, take a single stone from the first largest pile
    /// and hope for the opponent's mistake
    Lose(Move),
}

impl Decision {
    /// Move to make, if any
    pub const fn move_to_make(&self) -> Option<Move> {
        match self {
            Decision::GameOver => None,
            Decision::Win(m) | Decision::Lose(m) => Some(*m),
        }
    }

    /// Outcome class of the position the decision was made in
    pub const fn outcome(&self) -> Outcome {
        match self {
            Decision::Win(_) => Outcome::N,
            Decision::GameOver | Decision::Lose(_) => Outcome::P,
        }
    }
}

impl Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::GameOver => write!(f, "GAME OVER"),
            Decision::Win(m) => write!(f, "WIN: {}", m),
            Decision::Lose(m) => write!(f, "LOSE: {}", m),
        }
    }
}

/// Index of the first largest pile, `None` if there are no piles
pub fn largest_pile(piles: &[u32]) -> Option<usize> {
    let (first, rest) = piles.split_first()?;

    let mut index_max = 0;
    let mut max = *first;
    for (idx, &size) in rest.iter().enumerate() {
        if size > max {
            max = size;
            index_max = idx + 1;
        }
    }
    Some(index_max)
}

/// Move that leaves the opponent with zero Nim sum, `None` if the sum is already zero.
///
/// Takes from the first pile that has the most significant bit of the Nim sum set.
pub fn winning_move(piles: &[u32]) -> Option<Move> {
    let sum: Nimber = piles.iter().copied().map(Nimber::new).sum();
    if sum.is_zero() {
        log::trace!("Nim sum of {:?} is zero, no winning move", piles);
        return None;
    }

    let x = sum.value();
    let msb = most_significant_bit(x);

    // Always found: msb is set in x, so an odd number of piles have it set
    let pile = piles.iter().position(|&size| is_bit_set(size, msb))?;
    let target = piles[pile] ^ x;
    let m = Move {
        pile,
        count: piles[pile] - target,
    };

    log::trace!("Nim sum of {:?} is {}, found {:?}", piles, sum, m);
    Some(m)
}

/// Pick the move for the player to move in the given position
pub fn decide(piles: &[u32]) -> Decision {
    if piles.is_empty() {
        return Decision::GameOver;
    }

    if let Some(m) = winning_move(piles) {
        return Decision::Win(m);
    }

    let decision = match largest_pile(piles) {
        Some(pile) if piles[pile] > 0 => Decision::Lose(Move { pile, count: 1 }),
        _ => Decision::GameOver,
    };
    log::debug!("No winning move in {:?}, falling back to {:?}", piles, decision);
    decision
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Nim;
    use quickcheck::QuickCheck;

    fn sum_after(piles: &[u32], m: Move) -> u32 {
        Nim::new(piles.to_vec())
            .apply(m)
            .expect("move must be legal")
            .nim_sum()
            .value()
    }

    #[test]
    fn largest_pile_picks_first_maximum() {
        assert_eq!(largest_pile(&[3, 7, 7, 2]), Some(1));
        assert_eq!(largest_pile(&[5]), Some(0));
        assert_eq!(largest_pile(&[0, 0, 0]), Some(0));
        assert_eq!(largest_pile(&[1, 2, 3]), Some(2));
        assert_eq!(largest_pile(&[]), None);
    }

    #[test]
    fn winning_move_zeroes_nim_sum() {
        let piles = [3, 4, 5];
        let m = winning_move(&piles).unwrap();
        // msb of 3 ^ 4 ^ 5 = 2 is 2, first pile with it set is 3, which goes down to 1
        assert_eq!(m, Move { pile: 0, count: 2 });
        assert_eq!(sum_after(&piles, m), 0);
    }

    #[test]
    fn no_winning_move_in_zero_positions() {
        assert_eq!(winning_move(&[1, 1]), None);
        assert_eq!(winning_move(&[0, 0, 0]), None);
        assert_eq!(winning_move(&[1, 2, 3]), None);
        assert_eq!(winning_move(&[]), None);
    }

    #[test]
    fn winning_move_on_full_width_piles() {
        let piles = [u32::MAX, 1 << 31, 7];
        let m = winning_move(&piles).unwrap();
        assert_eq!(m.pile, 0);
        assert_eq!(sum_after(&piles, m), 0);
    }

    #[test]
    fn winning_move_is_legal_and_final() {
        let mut qc = QuickCheck::new();
        let test = |g: Nim| match g.winning_move() {
            None => assert_eq!(g.nim_sum(), Nimber::new(0)),
            Some(m) => {
                assert!(m.count >= 1);
                let after = g.apply(m).unwrap();
                assert_eq!(after.nim_sum(), Nimber::new(0));
                assert_eq!(after.winning_move(), None);
            }
        };
        qc.quickcheck(test as fn(Nim));
    }

    #[test]
    fn winning_move_exists_iff_some_move_reaches_zero() {
        let mut qc = QuickCheck::new();
        let test = |g: Nim| {
            let any_zeroing = g
                .moves()
                .any(|m| g.apply(m).unwrap().nim_sum() == Nimber::new(0));
            assert_eq!(g.winning_move().is_some(), any_zeroing);
        };
        qc.quickcheck(test as fn(Nim));
    }

    #[test]
    fn decide_works() {
        assert_eq!(decide(&[]), Decision::GameOver);
        assert_eq!(decide(&[0, 0, 0]), Decision::GameOver);
        assert_eq!(decide(&[1, 1]), Decision::Lose(Move { pile: 0, count: 1 }));
        assert_eq!(
            decide(&[1, 2, 3]),
            Decision::Lose(Move { pile: 2, count: 1 })
        );
        assert_eq!(decide(&[3, 4, 5]), Decision::Win(Move { pile: 0, count: 2 }));
    }

    #[test]
    fn decision_display() {
        assert_eq!(Decision::GameOver.to_string(), "GAME OVER");
        assert_eq!(
            Decision::Win(Move { pile: 0, count: 2 }).to_string(),
            "WIN: take 2 from pile 0"
        );
        assert_eq!(
            Decision::Lose(Move { pile: 3, count: 1 }).to_string(),
            "LOSE: take 1 from pile 3"
        );
    }

    #[test]
    fn decision_outcome() {
        assert_eq!(decide(&[3, 4, 5]).outcome(), Outcome::N);
        assert_eq!(decide(&[1, 1]).outcome(), Outcome::P);
        assert_eq!(decide(&[]).outcome(), Outcome::P);
        assert_eq!(decide(&[]).move_to_make(), None);
        assert_eq!(
            decide(&[2, 2]).move_to_make(),
            Some(Move { pile: 0, count: 1 })
        );
    }
}
