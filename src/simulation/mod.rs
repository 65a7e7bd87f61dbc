pub mod engine;

pub use engine::{MoveOutcome, SimulationEngine};
