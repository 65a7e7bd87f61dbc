use crate::coordinate::Coordinate;

/// Facing of the ant. Markers are `N`, `S`, `E`, `W`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All possible directions, clockwise from `Up`
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit step for this direction
    #[inline]
    pub const fn as_coordinate(self) -> Coordinate {
        match self {
            Direction::Up => Coordinate::UP,
            Direction::Down => Coordinate::DOWN,
            Direction::Left => Coordinate::LEFT,
            Direction::Right => Coordinate::RIGHT,
        }
    }

    /// Parse an uppercase map marker
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Direction::Up),
            'S' => Some(Direction::Down),
            'E' => Some(Direction::Right),
            'W' => Some(Direction::Left),
            _ => None,
        }
    }

    /// Uppercase marker for this direction
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Direction::Up => 'N',
            Direction::Down => 'S',
            Direction::Right => 'E',
            Direction::Left => 'W',
        }
    }

    /// Direction after a 90° clockwise turn
    #[inline]
    pub const fn clockwise_next(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Direction after a 90° counter-clockwise turn
    #[inline]
    pub const fn counter_clockwise_next(self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }
}
