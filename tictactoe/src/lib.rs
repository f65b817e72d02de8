pub use board::*;
pub use errors::*;
pub use moves::*;
pub use player::*;
pub use round::*;
pub use rules::*;
pub use series::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod moves;
mod player;
mod round;
mod rules;
mod series;
mod visualization;
