//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Kuba always has exactly two seats. `PlayerId(0)` is the first player passed
//! at construction, `PlayerId(1)` the second.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`.
//!
//! ## Players
//!
//! The registry of both players: names, colors, capture counters, and a
//! name lookup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::KubaError;
use super::marble::PlayerColor;

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// Seat identifier: 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const FIRST: PlayerId = PlayerId(0);
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// Both seats, first player first.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::FIRST, PlayerId::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use kuba::core::{PlayerId, PlayerMap};
///
/// let mut captures: PlayerMap<u8> = PlayerMap::new(|_| 0);
/// captures[PlayerId::SECOND] += 1;
///
/// assert_eq!(captures[PlayerId::FIRST], 0);
/// assert_eq!(captures[PlayerId::SECOND], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// One registered player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub color: PlayerColor,
    /// Neutral marbles this player has pushed off the board.
    pub captured: u8,
}

impl Player {
    pub fn new(name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            name: name.into(),
            color,
            captured: 0,
        }
    }
}

/// Both players plus a name index.
#[derive(Clone, Debug)]
pub struct Players {
    seats: PlayerMap<Player>,
    by_name: FxHashMap<String, PlayerId>,
}

impl Players {
    /// Register two players.
    ///
    /// Names and colors must both be distinct.
    pub fn new(first: Player, second: Player) -> Result<Self, KubaError> {
        if first.name == second.name {
            return Err(KubaError::DuplicateName(first.name));
        }
        if first.color == second.color {
            return Err(KubaError::DuplicateColor(first.color));
        }

        let mut by_name = FxHashMap::default();
        by_name.insert(first.name.clone(), PlayerId::FIRST);
        by_name.insert(second.name.clone(), PlayerId::SECOND);

        Ok(Self {
            seats: PlayerMap {
                data: [first, second],
            },
            by_name,
        })
    }

    /// Look up a seat by player name.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<PlayerId> {
        self.by_name.get(name).copied()
    }

    /// Like `id_of`, but an unknown name is an error.
    pub fn require(&self, name: &str) -> Result<PlayerId, KubaError> {
        self.id_of(name)
            .ok_or_else(|| KubaError::UnknownPlayer(name.to_string()))
    }

    /// The seat playing `color`.
    #[must_use]
    pub fn id_of_color(&self, color: PlayerColor) -> PlayerId {
        if self.seats[PlayerId::FIRST].color == color {
            PlayerId::FIRST
        } else {
            PlayerId::SECOND
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.seats.iter()
    }

    pub(crate) fn record_capture(&mut self, player: PlayerId) {
        self.seats[player].captured += 1;
    }
}

impl Index<PlayerId> for Players {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.seats[player]
    }
}
