//! Moves and the repeated-push restriction.
//!
//! A `Move` is the marble to push plus the direction. After a push that does
//! not capture, the move that would slide the same line straight back is
//! recorded as forbidden for the next move only. A capture clears the record,
//! since the removed marble cannot come back.

use serde::{Deserialize, Serialize};

use crate::core::{Coordinates, Direction};

/// A push request: which marble, which way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub at: Coordinates,
    pub direction: Direction,
}

impl Move {
    #[must_use]
    pub const fn new(at: Coordinates, direction: Direction) -> Self {
        Self { at, direction }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.at, self.direction)
    }
}

/// The single move disallowed on the next turn, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KoGuard {
    forbidden: Option<Move>,
}

impl KoGuard {
    #[must_use]
    pub const fn forbidden(&self) -> Option<Move> {
        self.forbidden
    }

    /// Replace the record after a push.
    ///
    /// `reverse` is the undoing move for a non-capturing push, `None` after a
    /// capture.
    pub fn record(&mut self, reverse: Option<Move>) {
        self.forbidden = reverse;
    }

    pub fn clear(&mut self) {
        self.forbidden = None;
    }
}
