//! Nim position - a row of piles, players alternate removing any positive number of stones
//! from a single pile. The player who cannot move loses.

use crate::{
    display,
    numeric::nimber::Nimber,
    parsing::{Parser, impl_from_str_via_parser, lexeme, try_option},
    strategy::{self, Decision},
};
use std::fmt::{self, Display};

/// Removal of `count` stones from the pile at index `pile`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Index of the pile to take from
    pub pile: usize,

    /// Number of stones to take, at least one
    pub count: u32,
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "take {} from pile {}", self.count, self.pile)
    }
}

/// Reason why a [`Move`] cannot be applied to a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// Pile index out of bounds
    NoSuchPile {
        /// Requested pile
        pile: usize,
        /// Number of piles in the position
        piles: usize,
    },
    /// Zero stones, or more stones than the pile holds
    InvalidCount {
        /// Requested pile
        pile: usize,
        /// Requested number of stones
        count: u32,
        /// Stones available in the pile
        available: u32,
    },
}

impl Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::NoSuchPile { pile, piles } => {
                write!(f, "Pile {} does not exist, there are {} piles", pile, piles)
            }
            IllegalMove::InvalidCount {
                pile,
                count,
                available,
            } => write!(
                f,
                "Cannot take {} stones from pile {} holding {}",
                count, pile, available
            ),
        }
    }
}

impl std::error::Error for IllegalMove {}

/// Nim position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nim {
    piles: Vec<u32>,
}

impl Display for Nim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nim")?;
        display::brackets(f, |f| display::commas(f, self.piles()))
    }
}

impl Nim {
    /// Create new position from pile sizes
    #[inline]
    pub const fn new(piles: Vec<u32>) -> Self {
        Self { piles }
    }

    /// Get the pile sizes
    #[inline]
    pub fn piles(&self) -> &[u32] {
        &self.piles
    }

    /// Take back the pile sizes
    #[inline]
    pub fn into_piles(self) -> Vec<u32> {
        self.piles
    }

    /// Check if no move is possible, either because there are no piles or all piles are empty
    pub fn is_over(&self) -> bool {
        self.piles.iter().all(|&size| size == 0)
    }

    /// Value of the position: Nim sum of all the piles
    pub fn nim_sum(&self) -> Nimber {
        self.piles.iter().copied().map(Nimber::new).sum()
    }

    /// See [`strategy::winning_move`]
    pub fn winning_move(&self) -> Option<Move> {
        strategy::winning_move(&self.piles)
    }

    /// See [`strategy::largest_pile`]
    pub fn largest_pile(&self) -> Option<usize> {
        strategy::largest_pile(&self.piles)
    }

    /// See [`strategy::decide`]
    pub fn decide(&self) -> Decision {
        strategy::decide(&self.piles)
    }

    /// All legal moves, ordered by pile and then by number of stones taken
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.piles
            .iter()
            .enumerate()
            .flat_map(|(pile, &size)| (1..=size).map(move |count| Move { pile, count }))
    }

    /// Position after making the move `m`. Does not modify the current position.
    ///
    /// # Errors
    /// - [`IllegalMove`] when the pile does not exist or holds fewer than `m.count` stones,
    ///   or `m.count` is zero
    pub fn apply(&self, m: Move) -> Result<Nim, IllegalMove> {
        let available = *self.piles.get(m.pile).ok_or(IllegalMove::NoSuchPile {
            pile: m.pile,
            piles: self.piles.len(),
        })?;

        if m.count == 0 || m.count > available {
            return Err(IllegalMove::InvalidCount {
                pile: m.pile,
                count: m.count,
                available,
            });
        }

        let mut piles = self.piles.clone();
        piles[m.pile] = available - m.count;
        Ok(Nim::new(piles))
    }

    /// Parse position in the `Nim[a, b, c]` format
    pub fn parse(p: Parser<'_>) -> Option<(Parser<'_>, Self)> {
        let p = try_option!(p.trim_whitespace().parse_str("Nim"));
        let mut p = try_option!(p.trim_whitespace().parse_ascii_char('['));

        let mut piles = Vec::new();
        if let Some((rest, size)) = lexeme!(p, Parser::parse_u32) {
            piles.push(size);
            p = rest;
            // Every comma must be followed by another pile
            while let Some(rest) = p.parse_ascii_char(',') {
                let (rest, size) = try_option!(lexeme!(rest, Parser::parse_u32));
                piles.push(size);
                p = rest;
            }
        }

        let p = try_option!(p.trim_whitespace().parse_ascii_char(']'));
        Some((p.trim_whitespace(), Nim::new(piles)))
    }
}

impl_from_str_via_parser!(Nim);

impl From<Vec<u32>> for Nim {
    fn from(piles: Vec<u32>) -> Self {
        Self::new(piles)
    }
}

#[cfg(any(test, feature = "quickcheck"))]
impl quickcheck::Arbitrary for Nim {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        use quickcheck::Arbitrary;

        // Small piles keep move enumeration cheap
        let num_piles = usize::arbitrary(g) % (g.size() + 1);
        let piles = (0..num_piles).map(|_| u32::arbitrary(g) % 64).collect();
        Nim::new(piles)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        use quickcheck::Arbitrary;

        Box::new(self.piles.shrink().map(Nim::new))
    }
}
