//! Core types: marbles, coordinates, the board, players, configuration, errors.

pub mod board;
pub mod config;
pub mod coords;
pub mod error;
pub mod marble;
pub mod player;

pub use board::{Board, MarbleCounts};
pub use config::{RulesConfig, NEUTRAL_MARBLES};
pub use coords::{Coordinates, Direction, BOARD_SIZE};
pub use error::{KubaError, MoveError};
pub use marble::{Marble, PlayerColor};
pub use player::{Player, PlayerId, PlayerMap, Players, PLAYER_COUNT};
