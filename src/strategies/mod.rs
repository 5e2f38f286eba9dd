//! Strategy implementations.

pub mod alphabeta;
pub mod cutoff;
pub mod minimax;
pub mod random;
mod util;
