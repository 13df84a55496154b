pub mod evaluate;
pub mod losing_positions;
pub mod play;
