//! # Langton's Ant
//!
//! A single ant walking a sparse grid of black and white tiles.
//!
//! Each step the ant moves forward, then turns clockwise on a white tile or
//! counter-clockwise on a black one and flips that tile's color. The map
//! rectangle only decides when the walk ends; the grid itself is unbounded.

pub mod ant;
pub mod cli;
pub mod command;
pub mod coordinate;
pub mod direction;
pub mod error;
pub mod simulation;
pub mod tile;
pub mod world;

pub use ant::Ant;
pub use cli::Args;
pub use command::{Command, CommandHandler};
pub use coordinate::Coordinate;
pub use direction::Direction;
pub use error::{CommandError, ParseError, Result};
pub use simulation::{MoveOutcome, SimulationEngine};
pub use tile::TileColor;
pub use world::World;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, Args, Command, CommandError, CommandHandler, Coordinate, Direction, MoveOutcome,
        ParseError, Result, SimulationEngine, TileColor, World,
    };
}
