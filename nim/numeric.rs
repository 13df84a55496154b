//! Numeric building blocks of the solver

pub mod bits;
pub mod nimber;
