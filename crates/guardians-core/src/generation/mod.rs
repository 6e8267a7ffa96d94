//! Generation - procedural creation of mazes, characters and area rosters

mod characters;
mod maze;
mod names;
mod population;

pub use characters::*;
pub use maze::*;
pub use names::*;
pub use population::*;
