use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::tile::TileColor;
use crate::world::TileMap;

/// The single walker of a world: a location and a facing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ant {
    location: Coordinate,
    direction: Direction,
}

impl Ant {
    /// Create a new ant at the given location
    pub fn new(location: Coordinate, direction: Direction) -> Self {
        Self {
            location,
            direction,
        }
    }

    /// Current cell, borrowed; copy it before moving again
    #[inline]
    pub fn location(&self) -> &Coordinate {
        &self.location
    }

    /// Current facing
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Step once in the facing direction, then turn and flip the new cell.
    ///
    /// On a white cell the ant turns clockwise and paints it black; on a
    /// black cell it turns counter-clockwise and paints it white. There is
    /// no bounds check here.
    pub fn step(&mut self, tiles: &mut TileMap) {
        self.location += self.direction.as_coordinate();

        let color = tiles.get(self.location);
        self.direction = match color {
            TileColor::White => self.direction.clockwise_next(),
            TileColor::Black => self.direction.counter_clockwise_next(),
        };
        tiles.set(self.location, color.flipped());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ant_creation() {
        let ant = Ant::new(Coordinate::new(2, 1), Direction::Left);

        assert_eq!(*ant.location(), Coordinate::new(2, 1));
        assert_eq!(ant.direction(), Direction::Left);
    }

    #[test]
    fn test_step_on_white_turns_clockwise() {
        let mut tiles = TileMap::default();
        let mut ant = Ant::new(Coordinate::new(0, 0), Direction::Up);

        ant.step(&mut tiles);

        assert_eq!(*ant.location(), Coordinate::new(0, -1));
        assert_eq!(ant.direction(), Direction::Right);
        assert_eq!(tiles.get(Coordinate::new(0, -1)), TileColor::Black);
        // the cell left behind is untouched
        assert_eq!(tiles.get(Coordinate::new(0, 0)), TileColor::White);
    }

    #[test]
    fn test_step_on_black_turns_counter_clockwise() {
        let mut tiles = TileMap::default();
        tiles.set(Coordinate::new(1, 0), TileColor::Black);
        let mut ant = Ant::new(Coordinate::new(0, 0), Direction::Right);

        ant.step(&mut tiles);

        assert_eq!(*ant.location(), Coordinate::new(1, 0));
        assert_eq!(ant.direction(), Direction::Up);
        assert_eq!(tiles.get(Coordinate::new(1, 0)), TileColor::White);
    }

    #[test]
    fn test_step_toggles_every_visited_cell() {
        let mut tiles = TileMap::default();
        let mut ant = Ant::new(Coordinate::new(0, 0), Direction::Down);

        for _ in 0..200 {
            let old_dir = ant.direction();
            let target = *ant.location() + old_dir.as_coordinate();
            let before = tiles.get(target);

            ant.step(&mut tiles);

            assert_eq!(tiles.get(target), before.flipped());
            let expected = match before {
                TileColor::White => old_dir.clockwise_next(),
                TileColor::Black => old_dir.counter_clockwise_next(),
            };
            assert_eq!(ant.direction(), expected);
        }
    }

    #[test]
    fn test_four_white_steps_return_home() {
        let mut tiles = TileMap::default();
        let mut ant = Ant::new(Coordinate::new(5, 5), Direction::Up);

        for _ in 0..4 {
            ant.step(&mut tiles);
        }

        // (5,4) -> (6,4) -> (6,5) -> (5,5), each white so always clockwise
        assert_eq!(*ant.location(), Coordinate::new(5, 5));
        assert_eq!(ant.direction(), Direction::Up);
        assert_eq!(tiles.len(), 4);
    }
}
