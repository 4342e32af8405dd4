//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::{Direction, PlayerColor};
use crate::rules::KubaGame;

fn value_error(err: impl ToString) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// A `(row, col)` tuple of ints, or `None` for anything else.
fn coordinates_arg(coordinates: &Bound<'_, PyAny>) -> Option<(i32, i32)> {
    coordinates.extract::<(i32, i32)>().ok()
}

/// One of `"L"`, `"R"`, `"F"`, `"B"`, or `None` for anything else.
fn direction_arg(direction: &Bound<'_, PyAny>) -> Option<Direction> {
    direction
        .extract::<String>()
        .ok()
        .and_then(|token| Direction::from_token(&token))
}

/// Python wrapper for KubaGame.
///
/// Colors and directions are single-letter strings: colors `"W"` / `"B"`,
/// directions `"L"`, `"R"`, `"F"`, `"B"`.
#[pyclass(name = "KubaGame")]
#[derive(Clone)]
pub struct PyKubaGame {
    game: KubaGame,
}

impl PyKubaGame {
    fn decode(
        playername: &Bound<'_, PyAny>,
        coordinates: &Bound<'_, PyAny>,
        direction: &Bound<'_, PyAny>,
    ) -> Option<(String, (i32, i32), Direction)> {
        let name = playername.extract::<String>().ok()?;
        Some((name, coordinates_arg(coordinates)?, direction_arg(direction)?))
    }
}

#[pymethods]
impl PyKubaGame {
    /// Create a game from two `(name, color)` pairs.
    ///
    /// Raises `ValueError` for an unknown color or duplicate names/colors.
    #[new]
    fn new(player_one: (String, String), player_two: (String, String)) -> PyResult<Self> {
        let first: PlayerColor = player_one.1.parse().map_err(value_error)?;
        let second: PlayerColor = player_two.1.parse().map_err(value_error)?;
        let game = KubaGame::new((player_one.0.as_str(), first), (player_two.0.as_str(), second))
            .map_err(value_error)?;
        Ok(Self { game })
    }

    /// Name of the player due to move, or `None` before the first move.
    fn get_current_turn(&self) -> Option<String> {
        self.game.current_turn().map(str::to_string)
    }

    /// Attempt a move. Returns `False` for any invalid input or illegal move.
    fn make_move(
        &mut self,
        playername: &Bound<'_, PyAny>,
        coordinates: &Bound<'_, PyAny>,
        direction: &Bound<'_, PyAny>,
    ) -> bool {
        match Self::decode(playername, coordinates, direction) {
            Some((name, at, direction)) => self.game.make_move(&name, at, direction),
            None => false,
        }
    }

    /// Check a move without making it.
    fn is_valid_move(
        &self,
        playername: &Bound<'_, PyAny>,
        coordinates: &Bound<'_, PyAny>,
        direction: &Bound<'_, PyAny>,
    ) -> bool {
        Self::decode(playername, coordinates, direction)
            .is_some_and(|(name, at, direction)| self.game.is_valid_move(&name, at, direction))
    }

    fn get_winner(&self) -> Option<String> {
        self.game.winner().map(str::to_string)
    }

    fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    /// Neutral marbles captured by `playername`.
    fn get_captured(&self, playername: &str) -> PyResult<u8> {
        self.game.captured_count(playername).map_err(value_error)
    }

    /// Marble token (`"W"`, `"B"`, `"R"` or `"X"`) at `(row, col)`.
    ///
    /// Raises `ValueError` unless given an on-board `(row, col)` tuple.
    fn get_marble(&self, coordinates: &Bound<'_, PyAny>) -> PyResult<String> {
        let at = coordinates_arg(coordinates).ok_or_else(|| {
            value_error(format!(
                "coordinates must be a (row, col) tuple of ints, got {coordinates}"
            ))
        })?;
        self.game
            .marble_at(at)
            .map(|marble| marble.token().to_string())
            .map_err(value_error)
    }

    /// `(white, black, red)` marble counts.
    fn get_marble_count(&self) -> (usize, usize, usize) {
        self.game.marble_counts()
    }

    fn __repr__(&self) -> String {
        format!(
            "KubaGame(turn={:?}, winner={:?})",
            self.game.current_turn(),
            self.game.winner()
        )
    }

    fn __str__(&self) -> String {
        self.game.board().to_string()
    }
}
