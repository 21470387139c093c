//! Core types: dice, players, randomness, configuration, errors.
//!
//! These are the leaf entities the rules engine is built from. Nothing in
//! this module knows about turns or scoring.

pub mod die;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use die::{Die, DieLabel, DEFAULT_SIDES};
pub use player::{Player, PlayerId};
pub use rng::{FaceSource, GameRng, GameRngState, LoadedDice};
pub use config::{GameConfig, DEFAULT_DICE, DEFAULT_MAX_ROLLS};
pub use error::{ConfigError, DriverError, GameError};
