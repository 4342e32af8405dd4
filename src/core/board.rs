//! The 7x7 Kuba board.
//!
//! ## Starting layout
//!
//! ```text
//! W W X X X B B
//! W W X R X B B
//! X X R R R X X
//! X R R R R R X
//! X X R R R X X
//! B B X R X W W
//! B B X X X W W
//! ```
//!
//! Boards can also be written in this text form and parsed with `str::parse`,
//! which is how tests set up arbitrary positions. Whitespace between tokens
//! is optional.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::coords::{Coordinates, BOARD_SIZE};
use super::error::KubaError;
use super::marble::Marble;

const STARTING_ROWS: [&str; BOARD_SIZE] = [
    "WWXXXBB", "WWXRXBB", "XXRRRXX", "XRRRRRX", "XXRRRXX", "BBXRXWW", "BBXXXWW",
];

/// Marble totals by color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarbleCounts {
    pub white: usize,
    pub black: usize,
    pub red: usize,
}

impl MarbleCounts {
    /// Total marbles on the board.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.white + self.black + self.red
    }

    /// As a `(white, black, red)` triple.
    #[must_use]
    pub const fn as_tuple(&self) -> (usize, usize, usize) {
        (self.white, self.black, self.red)
    }
}

/// Board cells in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Marble; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with no marbles.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[Marble::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The canonical starting position.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (row, line) in STARTING_ROWS.iter().enumerate() {
            for (col, token) in line.chars().enumerate() {
                // The layout table only contains valid tokens.
                board.cells[row][col] = Marble::from_token(token).unwrap_or(Marble::Empty);
            }
        }
        board
    }

    #[must_use]
    pub fn get(&self, at: Coordinates) -> Marble {
        self.cells[at.row()][at.col()]
    }

    pub fn set(&mut self, at: Coordinates, marble: Marble) {
        self.cells[at.row()][at.col()] = marble;
    }

    /// Remove and return the marble at `at`.
    pub fn take(&mut self, at: Coordinates) -> Marble {
        std::mem::replace(&mut self.cells[at.row()][at.col()], Marble::Empty)
    }

    #[must_use]
    pub fn is_empty(&self, at: Coordinates) -> bool {
        self.get(at).is_empty()
    }

    /// Rows of the board, top first.
    #[must_use]
    pub fn rows(&self) -> &[[Marble; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Count marbles of one kind.
    #[must_use]
    pub fn count(&self, marble: Marble) -> usize {
        self.cells.iter().flatten().filter(|&&m| m == marble).count()
    }

    /// Count marbles of every color in one pass.
    #[must_use]
    pub fn marble_counts(&self) -> MarbleCounts {
        let mut counts = MarbleCounts::default();
        for marble in self.cells.iter().flatten() {
            match marble {
                Marble::White => counts.white += 1,
                Marble::Black => counts.black += 1,
                Marble::Red => counts.red += 1,
                Marble::Empty => {}
            }
        }
        counts
    }

    /// Cells holding `marble`, in row-major order.
    pub fn cells_with(&self, marble: Marble) -> impl Iterator<Item = Coordinates> + '_ {
        Coordinates::all().filter(move |&at| self.get(at) == marble)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|m| m.token().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
            if i + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = KubaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if lines.len() != BOARD_SIZE {
            return Err(KubaError::InvalidBoard(format!(
                "expected {} rows, got {}",
                BOARD_SIZE,
                lines.len()
            )));
        }

        let mut board = Board::empty();
        for (row, line) in lines.iter().enumerate() {
            let tokens: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if tokens.len() != BOARD_SIZE {
                return Err(KubaError::InvalidBoard(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    tokens.len(),
                    BOARD_SIZE
                )));
            }
            for (col, &token) in tokens.iter().enumerate() {
                board.cells[row][col] = Marble::from_token(token).ok_or_else(|| {
                    KubaError::InvalidBoard(format!("bad token {token:?} at ({row}, {col})"))
                })?;
            }
        }
        Ok(board)
    }
}
