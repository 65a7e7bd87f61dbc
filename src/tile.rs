/// Color of a single cell. Untouched cells are `White`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileColor {
    #[default]
    White,
    Black,
}

impl TileColor {
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            TileColor::White => TileColor::Black,
            TileColor::Black => TileColor::White,
        }
    }

    /// Map digit for this color
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            TileColor::White => '0',
            TileColor::Black => '1',
        }
    }

    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(TileColor::White),
            '1' => Some(TileColor::Black),
            _ => None,
        }
    }
}
