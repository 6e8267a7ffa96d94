//! Plain data types of the game core.
//!
//! Components carry data and the small derivations that belong to it;
//! generation and state transitions live in `generation` and `systems`.

mod alignment;
mod attributes;
mod common;
mod grid;
mod map;
mod people;

pub use alignment::*;
pub use attributes::*;
pub use common::*;
pub use grid::*;
pub use map::*;
pub use people::*;
