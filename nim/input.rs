//! Reading game state from plain text.
//!
//! The format is the number of piles followed by that many pile sizes, all separated by
//! whitespace:
//!
//! ```text
//! 3
//! 3 4 5
//! ```
//!
//! Pile sizes are read until the first token that is not an unsigned 32-bit number. Everything
//! from that token on is ignored and the piles that were not read are empty.
//!
//! At most [`MAX_PILES`] piles are accepted. Larger counts are rejected up front instead of
//! zero-filling gigabytes of storage.

use crate::{
    parsing::{Parser, lexeme},
    position::Nim,
};
use std::{collections::TryReserveError, fmt::Display};

/// Largest accepted number of piles
pub const MAX_PILES: usize = 1 << 24;

/// Error while reading game state
#[derive(Debug)]
pub enum InputError {
    /// Input does not start with a valid number of piles
    InvalidPileCount,

    /// Pile count above [`MAX_PILES`]
    TooManyPiles(usize),

    /// Could not allocate storage for the piles
    Allocation(TryReserveError),
}

impl Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::InvalidPileCount => {
                write!(f, "Expected the number of piles at the beginning of the input")
            }
            InputError::TooManyPiles(requested) => write!(
                f,
                "Cannot read {} piles, at most {} are supported",
                requested, MAX_PILES
            ),
            InputError::Allocation(_) => write!(f, "Could not allocate storage for the piles"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::InvalidPileCount | InputError::TooManyPiles(_) => None,
            InputError::Allocation(e) => Some(e),
        }
    }
}

impl From<TryReserveError> for InputError {
    fn from(value: TryReserveError) -> Self {
        Self::Allocation(value)
    }
}

impl Nim {
    /// Read game state in the [input](self) format.
    ///
    /// # Errors
    /// - [`InputError::InvalidPileCount`] when the pile count is missing or not a number
    /// - [`InputError::TooManyPiles`] when the pile count exceeds [`MAX_PILES`]
    /// - [`InputError::Allocation`] when there is not enough memory for that many piles
    pub fn read_game(input: &str) -> Result<Nim, InputError> {
        let (mut p, num_piles) =
            lexeme!(Parser::new(input), Parser::parse_usize).ok_or(InputError::InvalidPileCount)?;

        if num_piles > MAX_PILES {
            return Err(InputError::TooManyPiles(num_piles));
        }

        let mut piles = Vec::new();
        piles.try_reserve_exact(num_piles)?;

        while piles.len() < num_piles {
            match lexeme!(p, Parser::parse_u32) {
                Some((rest, size)) => {
                    piles.push(size);
                    p = rest;
                }
                None => break,
            }
        }

        if piles.len() < num_piles {
            log::debug!(
                "Read {} out of {} piles, filling the rest with zeros",
                piles.len(),
                num_piles
            );
            piles.resize(num_piles, 0);
        }

        Ok(Nim::new(piles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_game() {
        assert_eq!(
            Nim::read_game("3\n3 4 5\n").unwrap(),
            Nim::new(vec![3, 4, 5])
        );
        assert_eq!(Nim::read_game("0\n").unwrap(), Nim::new(vec![]));
        assert_eq!(
            Nim::read_game("  2\t1\n\n 1").unwrap(),
            Nim::new(vec![1, 1])
        );
    }

    #[test]
    fn extra_values_are_ignored() {
        assert_eq!(
            Nim::read_game("2 1 2 3 4").unwrap(),
            Nim::new(vec![1, 2])
        );
    }

    #[test]
    fn missing_values_are_zero() {
        assert_eq!(Nim::read_game("3\n7").unwrap(), Nim::new(vec![7, 0, 0]));
        assert_eq!(Nim::read_game("2").unwrap(), Nim::new(vec![0, 0]));
    }

    #[test]
    fn reading_stops_at_malformed_value() {
        assert_eq!(
            Nim::read_game("4 1 x 3 4").unwrap(),
            Nim::new(vec![1, 0, 0, 0])
        );
        assert_eq!(
            Nim::read_game("3 1 -2 3").unwrap(),
            Nim::new(vec![1, 0, 0])
        );
        assert_eq!(
            Nim::read_game("2 4294967296 1").unwrap(),
            Nim::new(vec![0, 0])
        );
    }

    #[test]
    fn invalid_pile_count() {
        assert!(matches!(
            Nim::read_game(""),
            Err(InputError::InvalidPileCount)
        ));
        assert!(matches!(
            Nim::read_game("three 1 2 3"),
            Err(InputError::InvalidPileCount)
        ));
        assert!(matches!(
            Nim::read_game("-1"),
            Err(InputError::InvalidPileCount)
        ));
    }

    #[test]
    fn huge_pile_count_is_an_error() {
        assert!(matches!(
            Nim::read_game("1000000000 1 2"),
            Err(InputError::TooManyPiles(1_000_000_000))
        ));

        let input = usize::MAX.to_string();
        assert!(matches!(
            Nim::read_game(&input),
            Err(InputError::TooManyPiles(usize::MAX))
        ));
    }

    #[test]
    fn largest_pile_count_is_accepted() {
        let input = format!("{} 9", MAX_PILES);
        let position = Nim::read_game(&input).unwrap();
        assert_eq!(position.piles().len(), MAX_PILES);
        assert_eq!(position.piles()[0], 9);
        assert!(position.piles()[1..].iter().all(|&size| size == 0));
    }
}
