use crate::ant::Ant;
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::tile::TileColor;
use crate::world::parser::{parse_layout, Layout};
use crate::world::tiles::TileMap;
use std::fmt;
use tracing::info;

/// Sparse tile grid with fixed bounds and its single ant.
///
/// `width` and `height` only drive the out-of-bounds test; cells outside
/// them can still be colored and read.
#[derive(Clone, Debug)]
pub struct World {
    tiles: TileMap,
    width: usize,
    height: usize,
    ant: Ant,
}

impl World {
    /// Build a world from the lines of a map
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let world = Self::from(parse_layout(lines)?);
        info!(
            width = world.width,
            height = world.height,
            ant = %world.ant.location(),
            "world loaded"
        );
        Ok(world)
    }

    /// Map width, fixed at load
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Map height, fixed at load
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The ant roaming this world
    #[inline]
    pub fn ant(&self) -> &Ant {
        &self.ant
    }

    /// Color at `at`, white if never set
    #[inline]
    pub fn get_color(&self, at: Coordinate) -> TileColor {
        self.tiles.get(at)
    }

    /// Record the color at `at`
    #[inline]
    pub fn set_color(&mut self, at: Coordinate, color: TileColor) {
        self.tiles.set(at, color);
    }

    /// Number of cells with a recorded color
    #[inline]
    pub fn tracked_cells(&self) -> usize {
        self.tiles.len()
    }

    /// Advance the ant one step. No bounds check.
    #[inline]
    pub fn move_ant(&mut self) {
        self.ant.step(&mut self.tiles);
    }

    /// Check if `at` lies outside the map rectangle
    pub fn is_out_of_bounds(&self, at: Coordinate) -> bool {
        let (x, y) = (i64::from(at.x()), i64::from(at.y()));
        x < 0 || x >= self.width as i64 || y < 0 || y >= self.height as i64
    }

    /// Check if the ant has left the map
    #[inline]
    pub fn is_ant_out_of_bounds(&self) -> bool {
        self.is_out_of_bounds(*self.ant.location())
    }

    /// Character for a single cell.
    ///
    /// The ant's cell shows its facing, uppercase on black and lowercase on
    /// white. Other cells show `0` or `1`.
    pub fn as_character(&self, at: Coordinate) -> char {
        let color = self.get_color(at);
        if *self.ant.location() == at {
            let marker = self.ant.direction().to_char();
            return match color {
                TileColor::Black => marker,
                TileColor::White => marker.to_ascii_lowercase(),
            };
        }
        color.as_char()
    }
}

impl From<Layout> for World {
    fn from(layout: Layout) -> Self {
        Self {
            tiles: layout.tiles,
            width: layout.width,
            height: layout.height,
            ant: layout.ant,
        }
    }
}

/// Full map: `height` rows of `width` characters, no trailing newline
impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = String::with_capacity(self.width);
        for y in 0..self.height {
            line.clear();
            line.extend(
                (0..self.width).map(|x| self.as_character(Coordinate::new(x as i32, y as i32))),
            );
            if y > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}
