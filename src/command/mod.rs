//! Operator commands and the line-oriented loop that runs them.

pub mod handler;

pub use handler::CommandHandler;

use crate::coordinate::Coordinate;
use crate::error::CommandError;
use crate::simulation::{MoveOutcome, SimulationEngine};
use tracing::debug;

/// A parsed operator command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Step the ant up to this many times
    Move(u32),
    /// Render the full map
    Print,
    /// Show the ant's location
    Position,
    /// Show a single cell
    Field(Coordinate),
    Quit,
}

/// What the loop should do after a command ran
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    pub output: Option<String>,
    pub quit: bool,
}

impl Response {
    fn print(output: impl ToString) -> Self {
        Self {
            output: Some(output.to_string()),
            quit: false,
        }
    }
}

impl Command {
    /// Parse one input line.
    ///
    /// The name is checked first, then the argument count, then the
    /// arguments themselves.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        // tokens are separated by runs of spaces only
        let mut parts = line
            .trim_matches(|c: char| c <= ' ')
            .split(' ')
            .filter(|part| !part.is_empty());
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let expected = match name {
            "move" | "field" => 1,
            "print" | "position" | "quit" => 0,
            _ => return Err(CommandError::UnknownCommand(name.to_string())),
        };
        if args.len() != expected {
            return Err(CommandError::WrongArgumentCount {
                name: name.to_string(),
                expected,
                found: args.len(),
            });
        }

        match name {
            "move" => {
                let moves: i32 = args[0]
                    .parse()
                    .map_err(|_| CommandError::InvalidMoveCount)?;
                let moves = u32::try_from(moves).map_err(|_| CommandError::InvalidMoveCount)?;
                Ok(Command::Move(moves))
            }
            "field" => args[0]
                .parse::<Coordinate>()
                .map(Command::Field)
                .map_err(|e| {
                    debug!(error = %e, "rejected field argument");
                    CommandError::InvalidCoordinate(args[0].to_string())
                }),
            "print" => Ok(Command::Print),
            "position" => Ok(Command::Position),
            _ => Ok(Command::Quit),
        }
    }

    /// Run against the engine. Arguments were validated by [`Command::parse`],
    /// so this cannot fail.
    pub fn execute(self, engine: &mut SimulationEngine) -> Response {
        match self {
            Command::Move(moves) => match engine.run_moves(moves) {
                MoveOutcome::Completed { .. } => Response::default(),
                MoveOutcome::LeftBounds { report, .. } => Response {
                    output: Some(report.to_string()),
                    quit: true,
                },
            },
            Command::Print => Response::print(engine.world()),
            Command::Position => Response::print(engine.world().ant().location()),
            Command::Field(at) => Response::print(engine.world().as_character(at)),
            Command::Quit => Response {
                output: None,
                quit: true,
            },
        }
    }
}
