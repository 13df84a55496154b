//! Optimal play for the game of Nim.
//!
//! A [position](crate::position::Nim) is a row of piles. Its [Nim-sum](crate::numeric::nimber::Nimber)
//! decides the outcome: a nonzero sum means the player to move can
//! [win](crate::strategy::winning_move) by zeroing it, a zero sum means every move loses against
//! optimal play and the [decision procedure](crate::strategy::decide) falls back to a stalling move.

#![warn(missing_docs)]

pub mod input;
pub mod numeric;
pub mod parsing;
pub mod position;
pub mod strategy;

mod display;
