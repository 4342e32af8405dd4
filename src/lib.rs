//! # kuba
//!
//! Rules engine for Kuba, a two-player marble pushing game on a 7x7 board.
//!
//! Each player owns eight marbles of their color; thirteen neutral red
//! marbles sit in the middle. On their turn a player pushes one of their
//! marbles one cell left, right, forward or back, shoving the line in front
//! of it. A marble shoved off the edge is captured.
//!
//! A player wins by capturing seven red marbles, by pushing off every
//! opposing marble, or when the opponent is left with no legal push.
//!
//! ## Modules
//!
//! - `core`: marbles, coordinates, the board, players, configuration, errors
//! - `rules`: push legality and execution, the repeated-push restriction,
//!   win detection, and the `KubaGame` engine
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use kuba::{Direction, KubaGame, Marble, PlayerColor};
//!
//! let mut game = KubaGame::new(("A", PlayerColor::White), ("B", PlayerColor::Black)).unwrap();
//!
//! assert!(game.make_move("A", (6, 5), Direction::Forward));
//! assert!(!game.make_move("A", (6, 5), Direction::Left)); // B's turn now
//! assert_eq!(game.current_turn(), Some("B"));
//! assert_eq!(game.marble_at((5, 5)), Ok(Marble::White));
//! ```

pub mod core;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Coordinates, Direction, KubaError, Marble, MarbleCounts, MoveError, Player,
    PlayerColor, PlayerId, RulesConfig, BOARD_SIZE,
};

pub use crate::rules::{KubaGame, KubaGameBuilder, Move, MoveReport, Victory, WinReason};
