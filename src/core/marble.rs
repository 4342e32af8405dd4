//! Marble colors.
//!
//! A board cell holds one `Marble`: empty, one of the two player colors, or a
//! neutral red marble. Players are only ever assigned a `PlayerColor`, so a
//! player can never own the neutral color.
//!
//! Single-character tokens match the usual notation for the game:
//! `W` (white), `B` (black), `R` (red), `X` (empty).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::KubaError;

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marble {
    /// No marble.
    Empty,
    /// White player marble.
    White,
    /// Black player marble.
    Black,
    /// Neutral marble. Capturing one scores a point.
    Red,
}

impl Marble {
    /// Single-character token for this cell.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Marble::Empty => 'X',
            Marble::White => 'W',
            Marble::Black => 'B',
            Marble::Red => 'R',
        }
    }

    /// Parse a single-character token.
    #[must_use]
    pub const fn from_token(token: char) -> Option<Self> {
        match token {
            'X' | '.' => Some(Marble::Empty),
            'W' => Some(Marble::White),
            'B' => Some(Marble::Black),
            'R' => Some(Marble::Red),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Marble::Empty)
    }

    /// The player color this marble belongs to, if any.
    #[must_use]
    pub const fn player_color(self) -> Option<PlayerColor> {
        match self {
            Marble::White => Some(PlayerColor::White),
            Marble::Black => Some(PlayerColor::Black),
            Marble::Empty | Marble::Red => None,
        }
    }
}

impl std::fmt::Display for Marble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// A color that can be assigned to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    White,
    Black,
}

impl PlayerColor {
    /// The marble value this color places on the board.
    #[must_use]
    pub const fn marble(self) -> Marble {
        match self {
            PlayerColor::White => Marble::White,
            PlayerColor::Black => Marble::Black,
        }
    }

    /// The other player color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerColor::White => PlayerColor::Black,
            PlayerColor::Black => PlayerColor::White,
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.marble().token())
    }
}

impl FromStr for PlayerColor {
    type Err = KubaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(PlayerColor::White),
            "b" | "black" => Ok(PlayerColor::Black),
            _ => Err(KubaError::InvalidColor(s.to_string())),
        }
    }
}

impl From<PlayerColor> for Marble {
    fn from(color: PlayerColor) -> Self {
        color.marble()
    }
}
