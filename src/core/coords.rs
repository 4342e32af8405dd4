//! Board coordinates and push directions.
//!
//! Coordinates are `(row, col)` with row 0 at the top. Directions follow the
//! board's orientation:
//! - `Left`: column decreases
//! - `Right`: column increases
//! - `Forward`: row decreases (towards row 0)
//! - `Back`: row increases (towards row 6)

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::KubaError;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 7;

/// A cell on the board. Always in bounds once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    row: u8,
    col: u8,
}

impl Coordinates {
    /// Create coordinates, rejecting anything outside `0..7`.
    ///
    /// ```
    /// use kuba::core::Coordinates;
    ///
    /// assert!(Coordinates::new(0, 6).is_ok());
    /// assert!(Coordinates::new(-1, 0).is_err());
    /// assert!(Coordinates::new(3, 7).is_err());
    /// ```
    pub fn new(row: i32, col: i32) -> Result<Self, KubaError> {
        let in_range = |v: i32| (0..BOARD_SIZE as i32).contains(&v);
        if in_range(row) && in_range(col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(KubaError::OutOfBounds { row, col })
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Iterate over every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinates> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Coordinates { row, col }))
    }

    /// The neighbouring cell one step in `direction`, or `None` off the board.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Coordinates> {
        let (dr, dc) = direction.delta();
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        Coordinates::new(row, col).ok()
    }

    /// Cells strictly beyond `self` in `direction`, nearest first, up to the edge.
    pub fn ray(self, direction: Direction) -> impl Iterator<Item = Coordinates> {
        std::iter::successors(self.step(direction), move |c| c.step(direction))
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<Coordinates> for (i32, i32) {
    fn from(at: Coordinates) -> Self {
        (i32::from(at.row), i32::from(at.col))
    }
}

impl TryFrom<(i32, i32)> for Coordinates {
    type Error = KubaError;

    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        Coordinates::new(row, col)
    }
}

/// Direction of a push.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Forward,
    Back,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Back,
    ];

    /// Row and column offset of one step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Forward => (-1, 0),
            Direction::Back => (1, 0),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Forward => Direction::Back,
            Direction::Back => Direction::Forward,
        }
    }

    /// Single-letter token (`L`, `R`, `F`, `B`).
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Forward => 'F',
            Direction::Back => 'B',
        }
    }

    /// Parse exactly one of the single-letter tokens, case-sensitive.
    ///
    /// `FromStr` is the lenient form and also accepts full words.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "L" => Some(Direction::Left),
            "R" => Some(Direction::Right),
            "F" => Some(Direction::Forward),
            "B" => Some(Direction::Back),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Direction {
    type Err = KubaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(Direction::Left),
            "r" | "right" => Ok(Direction::Right),
            "f" | "forward" => Ok(Direction::Forward),
            "b" | "back" | "backward" => Ok(Direction::Back),
            _ => Err(KubaError::InvalidDirection(s.to_string())),
        }
    }
}
