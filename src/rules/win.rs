//! Win detection.
//!
//! Checked after every move, in order, first match wins:
//! 1. A player has captured `capture_target` neutral marbles.
//! 2. A player color has no marbles left. The other player wins.
//! 3. The player due to move has no legal push. The other player wins.

use serde::{Deserialize, Serialize};

use super::ko::Move;
use super::push::has_legal_push;
use crate::core::{Board, PlayerColor, PlayerId, Players, RulesConfig};

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// Reached the capture target.
    Captures,
    /// The loser has no marbles on the board.
    Elimination,
    /// The loser was due to move and had no legal push.
    NoMoves,
}

/// A decided game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Victory {
    pub winner: PlayerId,
    pub reason: WinReason,
}

/// Evaluate the win conditions for a position.
///
/// `to_move` is `None` before the first move, in which case condition 3 is
/// not evaluated.
#[must_use]
pub fn detect_winner(
    board: &Board,
    players: &Players,
    to_move: Option<PlayerId>,
    forbidden: Option<Move>,
    config: &RulesConfig,
) -> Option<Victory> {
    if let Some((winner, _)) = players
        .iter()
        .find(|(_, p)| p.captured >= config.capture_target)
    {
        return Some(Victory {
            winner,
            reason: WinReason::Captures,
        });
    }

    let counts = board.marble_counts();
    for (color, remaining) in [
        (PlayerColor::White, counts.white),
        (PlayerColor::Black, counts.black),
    ] {
        if remaining == 0 {
            return Some(Victory {
                winner: players.id_of_color(color.opponent()),
                reason: WinReason::Elimination,
            });
        }
    }

    let mover = to_move?;
    if !has_legal_push(board, players[mover].color, forbidden) {
        return Some(Victory {
            winner: mover.other(),
            reason: WinReason::NoMoves,
        });
    }

    None
}
