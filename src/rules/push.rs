//! Push legality and execution.
//!
//! A push moves the marble at `at` one cell in `direction`, shoving every
//! marble directly in front of it along. The line stops at the first empty
//! cell. If the line reaches the edge with no gap, the marble on the edge
//! cell falls off.
//!
//! A push is legal when:
//! 1. There is a marble at `at`.
//! 2. The cell behind `at` (opposite to `direction`) is empty or off the board.
//!    Only the end of a line may be pushed.
//! 3. There is an empty cell ahead, or the marble that would fall off is not
//!    the pusher's own color.
//! 4. It is not the currently forbidden move.

use smallvec::SmallVec;
use tracing::trace;

use super::ko::Move;
use crate::core::{Board, Coordinates, Direction, Marble, MoveError, PlayerColor, BOARD_SIZE};

/// Cells of a pushed line, origin first.
pub type Line = SmallVec<[Coordinates; BOARD_SIZE]>;

/// What a push did to the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushOutcome {
    /// Marble pushed off the edge, if any.
    pub captured: Option<Marble>,
    /// Number of marbles that moved, including a captured one.
    pub moved: usize,
    /// The push that would slide the line straight back.
    /// `None` when a marble was captured.
    pub reverse: Option<Move>,
}

/// Check whether `mv` is a legal push on `board`.
///
/// The board's marble at `mv.at` is treated as the pusher's color; callers
/// check ownership separately.
pub fn check_push(board: &Board, mv: Move, forbidden: Option<Move>) -> Result<(), MoveError> {
    let Move { at, direction } = mv;
    let pusher = board.get(at);
    if pusher.is_empty() {
        return Err(MoveError::NoMarble(at));
    }

    if let Some(behind) = at.step(direction.opposite()) {
        if !board.is_empty(behind) {
            return Err(MoveError::Backed { at, direction });
        }
    }

    let has_gap = at.ray(direction).any(|cell| board.is_empty(cell));
    if !has_gap {
        let edge = at.ray(direction).last().unwrap_or(at);
        if board.get(edge) == pusher {
            return Err(MoveError::SelfElimination { at, direction });
        }
    }

    if forbidden == Some(mv) {
        return Err(MoveError::Forbidden { at, direction });
    }

    Ok(())
}

/// Convenience wrapper around `check_push`.
#[must_use]
pub fn can_push(board: &Board, mv: Move, forbidden: Option<Move>) -> bool {
    check_push(board, mv, forbidden).is_ok()
}

/// The occupied line starting at `mv.at`, and the empty cell it shifts into.
///
/// The gap is `None` when the line runs to the edge.
#[must_use]
pub fn pushed_line(board: &Board, mv: Move) -> (Line, Option<Coordinates>) {
    let mut line = Line::new();
    line.push(mv.at);
    for cell in mv.at.ray(mv.direction) {
        if board.is_empty(cell) {
            return (line, Some(cell));
        }
        line.push(cell);
    }
    (line, None)
}

/// Apply `mv` to `board`. The caller must have checked legality.
pub fn execute_push(board: &mut Board, mv: Move) -> PushOutcome {
    let (line, gap) = pushed_line(board, mv);

    let captured = match gap {
        Some(_) => None,
        None => line.last().map(|&edge| board.take(edge)),
    };

    // Far end first, so every destination is already vacated.
    for &cell in line.iter().rev() {
        if let Some(next) = cell.step(mv.direction) {
            let marble = board.take(cell);
            board.set(next, marble);
        }
    }

    let reverse = gap.map(|end| Move::new(end, mv.direction.opposite()));
    trace!(%mv, moved = line.len(), ?captured, "push executed");

    PushOutcome {
        captured,
        moved: line.len(),
        reverse,
    }
}

/// Every legal push for `color`, in row-major cell order then direction order.
pub fn legal_pushes(
    board: &Board,
    color: PlayerColor,
    forbidden: Option<Move>,
) -> impl Iterator<Item = Move> + '_ {
    board
        .cells_with(color.marble())
        .flat_map(|at| {
            Direction::ALL
                .into_iter()
                .map(move |direction| Move::new(at, direction))
        })
        .filter(move |&mv| can_push(board, mv, forbidden))
}

/// Whether `color` has at least one legal push.
#[must_use]
pub fn has_legal_push(board: &Board, color: PlayerColor, forbidden: Option<Move>) -> bool {
    legal_pushes(board, color, forbidden).next().is_some()
}
