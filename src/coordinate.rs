use crate::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

// ASCII digits only; `\d` would also admit other Unicode digits
static COORDINATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+),([0-9]+)$").expect("coordinate pattern is valid"));

/// Grid position. Displayed and parsed as `y,x`.
///
/// `+=` translates in place. `Coordinate` is `Copy`, so a value stored as
/// a map key is always an independent copy of the cursor it was taken from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coordinate {
    x: i32,
    y: i32,
}

impl Coordinate {
    /// Unit delta pointing one row up
    pub const UP: Coordinate = Coordinate::new(0, -1);
    /// Unit delta pointing one row down
    pub const DOWN: Coordinate = Coordinate::new(0, 1);
    /// Unit delta pointing one column left
    pub const LEFT: Coordinate = Coordinate::new(-1, 0);
    /// Unit delta pointing one column right
    pub const RIGHT: Coordinate = Coordinate::new(1, 0);

    /// Create a coordinate from column `x` and row `y`
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Column
    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Row
    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Translate in place by `(dx, dy)`
    #[inline]
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Parse `y,x` with non-negative decimal components.
    ///
    /// Returns `None` for anything else, including signs, whitespace and
    /// values that overflow an `i32`.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = COORDINATE_PATTERN.captures(text)?;
        let y = caps[1].parse().ok()?;
        let x = caps[2].parse().ok()?;
        Some(Self::new(x, y))
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for Coordinate {
    fn add_assign(&mut self, rhs: Self) {
        self.translate(rhs.x, rhs.y);
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.y, self.x)
    }
}

impl FromStr for Coordinate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError::InvalidCoordinate(s.to_string()))
    }
}
