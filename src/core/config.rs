//! Game configuration.
//!
//! A game is configured once at construction by providing:
//! - Player count (2-255)
//! - Die count (0-255; zero dice is legal but nobody can ever score)
//! - Maximum rolls per turn (0 means nobody may roll)
//! - Die sides (at least 6)
//!
//! `GameConfig::validate` is the single place these limits are checked.

use serde::{Deserialize, Serialize};

use super::die::DEFAULT_SIDES;
use super::error::ConfigError;

/// Default number of dice in play.
pub const DEFAULT_DICE: usize = 5;

/// Default roll limit per turn.
pub const DEFAULT_MAX_ROLLS: u32 = 3;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (2-255).
    pub player_count: usize,

    /// Number of dice (0-255).
    pub die_count: usize,

    /// Rolls allowed per player per turn.
    pub max_rolls: u32,

    /// Faces per die.
    pub sides: u8,
}

impl GameConfig {
    /// Create a configuration with default dice and roll limit.
    ///
    /// The player count is not checked until `validate`.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            die_count: DEFAULT_DICE,
            max_rolls: DEFAULT_MAX_ROLLS,
            sides: DEFAULT_SIDES,
        }
    }

    /// Set the number of dice.
    #[must_use]
    pub fn with_dice(mut self, die_count: usize) -> Self {
        self.die_count = die_count;
        self
    }

    /// Set the roll limit per turn.
    #[must_use]
    pub fn with_max_rolls(mut self, max_rolls: u32) -> Self {
        self.max_rolls = max_rolls;
        self
    }

    /// Set the number of faces per die.
    #[must_use]
    pub fn with_sides(mut self, sides: u8) -> Self {
        self.sides = sides;
        self
    }

    /// Check every limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count < 2 {
            return Err(ConfigError::TooFewPlayers {
                requested: self.player_count,
            });
        }
        if self.player_count > u8::MAX as usize {
            return Err(ConfigError::TooManyPlayers {
                requested: self.player_count,
            });
        }
        if self.die_count > u8::MAX as usize {
            return Err(ConfigError::TooManyDice {
                requested: self.die_count,
            });
        }
        if self.sides < DEFAULT_SIDES {
            return Err(ConfigError::TooFewSides {
                requested: self.sides,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(2)
    }
}
