//! Error types.
//!
//! `KubaError` covers malformed input: names, coordinates, tokens and
//! construction arguments. `MoveError` covers moves that are well formed but
//! break a rule. The boolean move API collapses both into `false`.

use super::coords::{Coordinates, Direction};
use super::marble::{Marble, PlayerColor};

/// Caller-contract violations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KubaError {
    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    #[error("coordinates ({row}, {col}) are off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("unrecognized direction: {0:?}")]
    InvalidDirection(String),

    #[error("unrecognized player color: {0:?}")]
    InvalidColor(String),

    #[error("players must have distinct names, both are {0:?}")]
    DuplicateName(String),

    #[error("players must have distinct colors, both are {0}")]
    DuplicateColor(PlayerColor),

    #[error("expected exactly 2 players, got {0}")]
    PlayerCount(usize),

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("invalid rules config: {0}")]
    InvalidConfig(String),
}

/// Reasons a move is rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Input(#[from] KubaError),

    #[error("the game is over")]
    GameOver,

    #[error("marble at {at} is {found}, not the mover's color {expected}")]
    NotOwnMarble {
        at: Coordinates,
        found: Marble,
        expected: PlayerColor,
    },

    #[error("no marble at {0}")]
    NoMarble(Coordinates),

    #[error("it is not {0}'s turn")]
    NotYourTurn(String),

    #[error("marble at {at} has a marble behind it and cannot start a push {direction}")]
    Backed { at: Coordinates, direction: Direction },

    #[error("pushing {at} {direction} would push the mover's own marble off the board")]
    SelfElimination { at: Coordinates, direction: Direction },

    #[error("pushing {at} {direction} would undo the previous push")]
    Forbidden { at: Coordinates, direction: Direction },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kuba_error_display() {
        let err = KubaError::OutOfBounds { row: 7, col: -1 };
        assert_eq!(err.to_string(), "coordinates (7, -1) are off the board");

        let err = KubaError::DuplicateColor(PlayerColor::White);
        assert_eq!(err.to_string(), "players must have distinct colors, both are W");
    }

    #[test]
    fn test_move_error_display() {
        let at = Coordinates::new(0, 2).unwrap();
        let err = MoveError::Forbidden {
            at,
            direction: Direction::Left,
        };
        assert_eq!(err.to_string(), "pushing (0, 2) L would undo the previous push");

        let err: MoveError = KubaError::UnknownPlayer("C".to_string()).into();
        assert_eq!(err.to_string(), "unknown player: C");
    }
}
