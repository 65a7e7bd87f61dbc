use crate::ant::Ant;
use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::error::{ParseError, Result};
use crate::tile::TileColor;
use crate::world::tiles::TileMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Validated construction input for a [`World`](crate::World)
#[derive(Clone, Debug)]
pub struct Layout {
    pub tiles: TileMap,
    pub width: usize,
    pub height: usize,
    pub ant: Ant,
}

/// Read a map file into its lines
pub fn read_map(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
    Ok(lines)
}

/// Classify every character of the map, row-major.
///
/// Digits record a tile color. A direction marker places the ant; its own
/// cell is recorded white whichever marker was used. Anything else, a ragged
/// line, or anything but exactly one marker is rejected.
pub fn parse_layout<S: AsRef<str>>(lines: &[S]) -> Result<Layout> {
    let width = match lines.first() {
        Some(first) if !first.as_ref().is_empty() => first.as_ref().chars().count(),
        _ => return Err(ParseError::EmptyMap),
    };
    let height = lines.len();

    let mut tiles = TileMap::with_capacity(width * height);
    let mut ant: Option<Ant> = None;

    for (row, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let found = line.chars().count();
        if found != width {
            return Err(ParseError::RaggedLine {
                line: row + 1,
                expected: width,
                found,
            });
        }

        for (col, ch) in line.chars().enumerate() {
            let at = Coordinate::new(col as i32, row as i32);

            if let Some(direction) = Direction::from_char(ch) {
                if let Some(first) = &ant {
                    return Err(ParseError::MultipleAnts {
                        first: *first.location(),
                        second: at,
                    });
                }
                ant = Some(Ant::new(at, direction));
                tiles.set(at, TileColor::default());
            } else {
                let color = TileColor::from_char(ch).ok_or(ParseError::InvalidTile { ch, at })?;
                tiles.set(at, color);
            }
        }
    }

    let ant = ant.ok_or(ParseError::MissingAnt)?;
    Ok(Layout {
        tiles,
        width,
        height,
        ant,
    })
}
