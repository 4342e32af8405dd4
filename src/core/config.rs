//! Rules configuration.
//!
//! The defaults are the standard game. Drivers and tests can tune the capture
//! target or switch the repeated-push restriction off.

use serde::{Deserialize, Serialize};

use super::error::KubaError;

/// Neutral marbles on the starting board.
pub const NEUTRAL_MARBLES: u8 = 13;

/// Rules parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Neutral captures needed to win (default: 7, a majority of 13).
    pub capture_target: u8,

    /// Reject the move that exactly undoes the previous non-capturing push.
    pub enforce_ko: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            capture_target: 7,
            enforce_ko: true,
        }
    }
}

impl RulesConfig {
    /// Set the number of neutral captures needed to win.
    #[must_use]
    pub fn with_capture_target(mut self, target: u8) -> Self {
        self.capture_target = target;
        self
    }

    /// Enable or disable the repeated-push restriction.
    #[must_use]
    pub fn with_ko(mut self, enforce: bool) -> Self {
        self.enforce_ko = enforce;
        self
    }

    /// Check the parameters are playable.
    pub fn validate(&self) -> Result<(), KubaError> {
        if self.capture_target == 0 || self.capture_target > NEUTRAL_MARBLES {
            return Err(KubaError::InvalidConfig(format!(
                "capture_target must be in 1..={}, got {}",
                NEUTRAL_MARBLES, self.capture_target
            )));
        }
        Ok(())
    }
}
