use crate::world::World;
use tracing::{debug, trace};

/// Result of a move sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Every requested step was taken and the ant is still inside the map
    Completed { steps: u32 },
    /// The ant left the map on step `steps`; the rest were skipped.
    /// `report` is the rendering of the cell it stepped off from.
    LeftBounds { steps: u32, report: char },
}

/// Owns the world and drives the ant through it
#[derive(Clone, Debug)]
pub struct SimulationEngine {
    world: World,
    total_steps: u64,
}

impl SimulationEngine {
    /// Create a new simulation engine
    pub fn new(world: World) -> Self {
        Self {
            world,
            total_steps: 0,
        }
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Steps performed over the engine's lifetime
    #[inline]
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Move the ant `moves` times, stopping at the first step that leaves
    /// the map. Zero moves is a no-op.
    pub fn run_moves(&mut self, moves: u32) -> MoveOutcome {
        debug!(moves, "running move sequence");

        for step in 1..=moves {
            let from = *self.world.ant().location();
            self.world.move_ant();
            self.total_steps += 1;
            trace!(step, from = %from, to = %self.world.ant().location(), "ant moved");

            if self.world.is_ant_out_of_bounds() {
                let report = self.world.as_character(from);
                debug!(
                    step,
                    at = %self.world.ant().location(),
                    "ant left the map"
                );
                return MoveOutcome::LeftBounds {
                    steps: step,
                    report,
                };
            }
        }

        MoveOutcome::Completed { steps: moves }
    }
}
