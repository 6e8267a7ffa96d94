//! Guardians Core - location and inhabitant generation
//!
//! The computational core of a political street-level strategy game: it
//! carves the maze-like locations the player explores, keeps their fog of
//! war, and fills every room with people whose statistics follow from their
//! profession, their politics and the mood of the country.
//!
//! # Architecture
//!
//! - **Components**: plain data (grids, flags, characters, areas)
//! - **Data**: the immutable reference tables, loaded once into a [`data::Registry`]
//! - **Generation**: maze carving, character rolling, area population
//! - **Systems**: rules that mutate live state (fog of war on movement)
//! - [`country::Country`] and [`location::Location`] tie the pieces together
//!
//! Everything random takes `&mut impl Rng`, so a seeded generator reproduces
//! a run exactly.
//!
//! # Example
//!
//! ```rust,no_run
//! use guardians_core::prelude::*;
//!
//! let registry = Registry::builtin()?;
//! let factory = CharacterFactory::new(&registry);
//! let mut rng = rand::thread_rng();
//!
//! let country = Country::new("United States", 0, &factory, &mut rng)?;
//! let mut location = Location::generate(
//!     &factory,
//!     &country,
//!     "police_station",
//!     &LocationConfig::default(),
//!     &mut rng,
//! )?;
//!
//! let step = location.attempt_move(Direction::East);
//! println!("{}", step.message(&registry)?);
//! # Ok::<(), guardians_core::error::CoreError>(())
//! ```

pub mod components;
pub mod country;
pub mod data;
pub mod error;
pub mod generation;
pub mod location;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::country::{Country, Speed};
    pub use crate::data::Registry;
    pub use crate::error::{CoreError, Result};
    pub use crate::generation::{CharacterFactory, CharacterOverrides};
    pub use crate::location::{Location, LocationConfig, MoveResult};
}
