//! Error types.
//!
//! `ConfigError` is fatal and only produced at construction. `GameError`
//! covers calls the engine refuses during play. `DriverError` wraps those
//! and console I/O for code that plays whole rounds. Ordinary outcomes such
//! as a turn without a qualifying combination are values, not errors.

use thiserror::Error;

use super::player::PlayerId;

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least 2 players are required, got {requested}")]
    TooFewPlayers { requested: usize },
    #[error("at most 255 players are supported, got {requested}")]
    TooManyPlayers { requested: usize },
    #[error("at most 255 dice are supported, got {requested}")]
    TooManyDice { requested: usize },
    #[error("dice need at least 6 sides to show a ship, captain and crew, got {requested}")]
    TooFewSides { requested: u8 },
}

/// A play operation the engine refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no round in progress; call start_new_game first")]
    RoundNotStarted,
    #[error("{player} cannot roll ({rolls_used} of {max_rolls} rolls used or all dice held)")]
    RollNotAllowed {
        player: PlayerId,
        rolls_used: u32,
        max_rolls: u32,
    },
}

/// Failure while driving a game through its turns.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
