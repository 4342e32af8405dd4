//! The Kuba game engine.
//!
//! `KubaGame` owns the board, both players, the turn pointer, the forbidden
//! move and the winner. Every state change goes through `try_move` (or its
//! boolean form `make_move`), which validates, pushes, hands the turn over
//! and checks for a winner as one step.
//!
//! ## Turn order
//!
//! Before the first move nobody holds the turn and either player may open.
//! After that the turn strictly alternates.
//!
//! ## Sharing
//!
//! The engine is plain owned data (`Send + Sync`). To share one game between
//! threads, wrap it in a `Mutex` and hold the lock for the whole `make_move`
//! call so no half-applied move is ever observed.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::ko::{KoGuard, Move};
use super::push::{check_push, execute_push, legal_pushes};
use super::win::{detect_winner, Victory};
use crate::core::{
    Board, Coordinates, Direction, KubaError, Marble, MoveError, Player, PlayerColor, PlayerId,
    Players, RulesConfig,
};

/// Result of an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Who moved.
    pub player: PlayerId,
    /// The push that was made.
    pub mv: Move,
    /// Marble pushed off the board, if any.
    pub captured: Option<Marble>,
    /// Set if this move ended the game.
    pub victory: Option<Victory>,
}

impl MoveReport {
    /// Whether the move captured a neutral marble.
    #[must_use]
    pub fn scored(&self) -> bool {
        self.captured == Some(Marble::Red)
    }
}

/// A single game of Kuba.
#[derive(Clone, Debug)]
pub struct KubaGame {
    board: Board,
    players: Players,
    config: RulesConfig,
    turn: Option<PlayerId>,
    ko: KoGuard,
    victory: Option<Victory>,
}

impl KubaGame {
    /// Start a standard game.
    ///
    /// ```
    /// use kuba::core::PlayerColor;
    /// use kuba::rules::KubaGame;
    ///
    /// let game = KubaGame::new(("A", PlayerColor::White), ("B", PlayerColor::Black)).unwrap();
    /// assert_eq!(game.marble_counts(), (8, 8, 13));
    /// assert_eq!(game.current_turn(), None);
    /// ```
    pub fn new(
        first: (&str, PlayerColor),
        second: (&str, PlayerColor),
    ) -> Result<Self, KubaError> {
        KubaGame::builder()
            .player(first.0, first.1)
            .player(second.0, second.1)
            .build()
    }

    /// Builder for non-standard setups: custom board, rules or opening turn.
    #[must_use]
    pub fn builder() -> KubaGameBuilder {
        KubaGameBuilder::new()
    }

    // === Read accessors ===

    /// Name of the player due to move, or `None` before the first move.
    #[must_use]
    pub fn current_turn(&self) -> Option<&str> {
        self.turn.map(|id| self.players[id].name.as_str())
    }

    /// Name of the winner, if the game is decided.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.victory.map(|v| self.players[v.winner].name.as_str())
    }

    /// Winner and reason, if the game is decided.
    #[must_use]
    pub fn victory(&self) -> Option<Victory> {
        self.victory
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.victory.is_some()
    }

    /// Neutral marbles captured by `player`.
    pub fn captured_count(&self, player: &str) -> Result<u8, KubaError> {
        let id = self.players.require(player)?;
        Ok(self.players[id].captured)
    }

    /// The marble at `(row, col)`.
    pub fn marble_at(&self, coordinates: (i32, i32)) -> Result<Marble, KubaError> {
        let at = Coordinates::try_from(coordinates)?;
        Ok(self.board.get(at))
    }

    /// `(white, black, red)` marbles on the board.
    #[must_use]
    pub fn marble_counts(&self) -> (usize, usize, usize) {
        self.board.marble_counts().as_tuple()
    }

    /// Player names in registration order.
    #[must_use]
    pub fn player_names(&self) -> [&str; 2] {
        [
            self.players[PlayerId::FIRST].name.as_str(),
            self.players[PlayerId::SECOND].name.as_str(),
        ]
    }

    pub fn player_color(&self, player: &str) -> Result<PlayerColor, KubaError> {
        let id = self.players.require(player)?;
        Ok(self.players[id].color)
    }

    /// The move disallowed on the next turn, if any.
    #[must_use]
    pub fn forbidden_move(&self) -> Option<Move> {
        self.ko.forbidden()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &Players {
        &self.players
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    // === Move validation ===

    /// Whether the marble at `at` could be pushed in `direction` right now.
    ///
    /// Ignores whose marble it is and whose turn it is.
    #[must_use]
    pub fn can_be_pushed(&self, at: Coordinates, direction: Direction) -> bool {
        check_push(&self.board, Move::new(at, direction), self.ko.forbidden()).is_ok()
    }

    /// Every push `player` could legally make on the current board,
    /// regardless of whose turn it is.
    pub fn legal_moves(&self, player: &str) -> Result<Vec<Move>, KubaError> {
        let id = self.players.require(player)?;
        Ok(legal_pushes(&self.board, self.players[id].color, self.ko.forbidden()).collect())
    }

    /// Check a move without making it, naming the first failed condition.
    ///
    /// Conditions are checked in order: known player, coordinates on the
    /// board, game not over, marble is the player's color, player's turn,
    /// push is legal.
    pub fn validate_move(
        &self,
        player: &str,
        coordinates: (i32, i32),
        direction: Direction,
    ) -> Result<(), MoveError> {
        self.resolve_move(player, coordinates, direction).map(|_| ())
    }

    /// Boolean form of `validate_move`.
    #[must_use]
    pub fn is_valid_move(&self, player: &str, coordinates: (i32, i32), direction: Direction) -> bool {
        self.validate_move(player, coordinates, direction).is_ok()
    }

    fn resolve_move(
        &self,
        player: &str,
        coordinates: (i32, i32),
        direction: Direction,
    ) -> Result<(PlayerId, Move), MoveError> {
        let id = self.players.require(player)?;
        let at = Coordinates::try_from(coordinates)?;

        if self.victory.is_some() {
            return Err(MoveError::GameOver);
        }

        let color = self.players[id].color;
        let found = self.board.get(at);
        if found.player_color() != Some(color) {
            return Err(MoveError::NotOwnMarble {
                at,
                found,
                expected: color,
            });
        }

        if self.turn.is_some_and(|turn| turn != id) {
            return Err(MoveError::NotYourTurn(player.to_string()));
        }

        let mv = Move::new(at, direction);
        check_push(&self.board, mv, self.ko.forbidden())?;
        Ok((id, mv))
    }

    // === Moves ===

    /// Make a move, or explain why it was rejected.
    ///
    /// On error nothing changes.
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn try_move(
        &mut self,
        player: &str,
        coordinates: (i32, i32),
        direction: Direction,
    ) -> Result<MoveReport, MoveError> {
        let (id, mv) = self
            .resolve_move(player, coordinates, direction)
            .inspect_err(|err| debug!(%err, "move rejected"))?;

        let outcome = execute_push(&mut self.board, mv);
        if outcome.captured == Some(Marble::Red) {
            self.players.record_capture(id);
            debug!(
                player,
                captured = self.players[id].captured,
                "neutral marble captured"
            );
        }

        if self.config.enforce_ko {
            self.ko.record(outcome.reverse);
        } else {
            self.ko.clear();
        }

        self.turn = Some(id.other());
        let victory = self.check_for_winner();

        Ok(MoveReport {
            player: id,
            mv,
            captured: outcome.captured,
            victory,
        })
    }

    /// Make a move. Returns `false`, changing nothing, if the move is invalid.
    pub fn make_move(&mut self, player: &str, coordinates: (i32, i32), direction: Direction) -> bool {
        self.try_move(player, coordinates, direction).is_ok()
    }

    /// Evaluate the win conditions and record a winner if one is found.
    ///
    /// Once a winner is recorded it never changes.
    pub fn check_for_winner(&mut self) -> Option<Victory> {
        if self.victory.is_none() {
            self.victory = detect_winner(
                &self.board,
                &self.players,
                self.turn,
                self.ko.forbidden(),
                &self.config,
            );
            if let Some(victory) = self.victory {
                info!(
                    winner = %self.players[victory.winner].name,
                    reason = ?victory.reason,
                    "game over"
                );
            }
        }
        self.victory
    }
}

/// Builder for creating a KubaGame.
#[derive(Clone, Debug, Default)]
pub struct KubaGameBuilder {
    players: Vec<Player>,
    config: RulesConfig,
    board: Option<Board>,
    turn: Option<String>,
}

impl KubaGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player. Call exactly twice.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>, color: PlayerColor) -> Self {
        self.players.push(Player::new(name, color));
        self
    }

    #[must_use]
    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from `board` instead of the standard layout.
    #[must_use]
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Give the opening turn to a named player instead of leaving it open.
    #[must_use]
    pub fn turn(mut self, player: impl Into<String>) -> Self {
        self.turn = Some(player.into());
        self
    }

    /// Build the game.
    pub fn build(self) -> Result<KubaGame, KubaError> {
        self.config.validate()?;

        let count = self.players.len();
        let [first, second]: [Player; 2] = self
            .players
            .try_into()
            .map_err(|_| KubaError::PlayerCount(count))?;
        let players = Players::new(first, second)?;

        let turn = self
            .turn
            .map(|name| players.require(&name))
            .transpose()?;

        let game = KubaGame {
            board: self.board.unwrap_or_else(Board::starting),
            players,
            config: self.config,
            turn,
            ko: KoGuard::default(),
            victory: None,
        };
        debug!(players = ?game.player_names(), "game created");
        Ok(game)
    }
}
