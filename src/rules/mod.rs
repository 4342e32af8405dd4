//! Kuba rules.
//!
//! - `push`: push legality, execution and legal-move enumeration
//! - `ko`: moves and the repeated-push restriction
//! - `win`: win conditions
//! - `engine`: `KubaGame`, which owns a game and drives the pieces above

pub mod engine;
pub mod ko;
pub mod push;
pub mod win;

pub use engine::{KubaGame, KubaGameBuilder, MoveReport};
pub use ko::{KoGuard, Move};
pub use push::{can_push, check_push, execute_push, has_legal_push, legal_pushes, PushOutcome};
pub use win::{detect_winner, Victory, WinReason};
