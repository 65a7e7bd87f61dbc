use crate::coordinate::Coordinate;
use thiserror::Error;

/// Errors raised while loading a map or parsing engine values
#[derive(Debug, Error)]
pub enum ParseError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The map has no lines, or its first line is empty
    #[error("map is empty")]
    EmptyMap,
    /// A map line differs in length from the first line
    #[error("line {line} has length {found}, expected {expected}")]
    RaggedLine {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// Character that is neither a tile nor a direction marker
    #[error("invalid tile '{ch}' at {at}")]
    InvalidTile { ch: char, at: Coordinate },
    #[error("map contains no ant")]
    MissingAnt,
    #[error("map contains more than one ant (at {first} and {second})")]
    MultipleAnts { first: Coordinate, second: Coordinate },
    /// Coordinate text not of the form `y,x`
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

/// Errors reported back to the operator by the command loop.
///
/// None of these mutate the simulation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Command '{0}' not found!")]
    UnknownCommand(String),
    #[error("Wrong number of arguments for command '{name}'! Expected {expected} but got {found}.")]
    WrongArgumentCount {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("the amount of moves must be a non-negative integer.")]
    InvalidMoveCount,
    #[error("the coordinate given was invalid, expected format is \"y,x\", but was \"{0}\"")]
    InvalidCoordinate(String),
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, ParseError>;
