use crate::coordinate::Coordinate;
use crate::tile::TileColor;
use std::collections::HashMap;

/// Sparse cell colors: only cells that were explicitly set are stored
#[derive(Clone, Debug, Default)]
pub struct TileMap {
    cells: HashMap<Coordinate, TileColor>,
}

impl TileMap {
    /// Create an empty map with room for `capacity` cells
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashMap::with_capacity(capacity),
        }
    }

    /// Color at `at`, or the default (white) if never set. Does not insert.
    #[inline]
    pub fn get(&self, at: Coordinate) -> TileColor {
        self.cells.get(&at).copied().unwrap_or_default()
    }

    /// Record the color at `at`, overwriting any previous value
    #[inline]
    pub fn set(&mut self, at: Coordinate, color: TileColor) {
        self.cells.insert(at, color);
    }

    /// Number of tracked cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
