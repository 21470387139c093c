//! Rules of Ship, Captain and Crew.
//!
//! - `engine`: the `DiceGame` turn/roll/hold/score state machine
//! - `scoring`: the qualifying combination and cargo
//! - `results`: end-of-round rankings

pub mod engine;
pub mod scoring;
pub mod results;

pub use engine::{DiceGame, DiceVec, GameSnapshot};
pub use scoring::{TurnScore, CAPTAIN, CREW, CREW_POINTS, SHIP};
pub use results::{RoundResult, Standings};
