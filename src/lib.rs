//! # ship-captain-crew
//!
//! Rules engine for Ship, Captain and Crew, a dice game for two or more
//! players.
//!
//! ## Rules
//!
//! 1. Each player rolls every free die, up to a fixed number of rolls a turn.
//! 2. Dice can be held between rolls; held dice keep their face.
//! 3. A turn only scores with a 6 (ship), 5 (captain) and 4 (crew) held.
//!    The score is the sum of all dice minus those 15 points.
//! 4. After everyone has played, the top score wins the round and the
//!    winner goes first next round.
//!
//! ## Modules
//!
//! - `core`: Dice, players, randomness, configuration, errors
//! - `rules`: The `DiceGame` engine, scoring and round results
//! - `driver`: Hold policies and the session loop that plays rounds
//!
//! ## Example
//!
//! ```
//! use ship_captain_crew::{DiceGame, Session, ShipCaptainCrew};
//!
//! let game = DiceGame::with_seed(3, 5, 3, 42).unwrap();
//! let mut session = Session::new(game, ShipCaptainCrew::default());
//! let report = session.play_round().unwrap();
//!
//! assert_eq!(report.turns.len(), 3);
//! print!("{}", report.standings);
//! ```

pub mod core;
pub mod rules;
pub mod driver;

// Re-export commonly used types
pub use crate::core::{
    Die, DieLabel, Player, PlayerId,
    FaceSource, GameRng, GameRngState, LoadedDice,
    GameConfig, ConfigError, GameError, DriverError,
};

pub use crate::rules::{DiceGame, GameSnapshot, RoundResult, Standings, TurnScore};

pub use crate::driver::{Console, HoldPolicy, RoundReport, Session, ShipCaptainCrew, TurnDecision};
