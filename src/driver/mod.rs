//! Drivers: play a `DiceGame` turn by turn.
//!
//! The engine never decides what to hold. A `HoldPolicy` does:
//! - `ShipCaptainCrew` plays automatically
//! - `Console` asks a human over any `BufRead`/`Write` pair
//!
//! `Session` runs the turn and round loop around either one.

pub mod policy;
pub mod session;
pub mod console;

pub use policy::{hold_ship_captain_crew, HoldPolicy, ShipCaptainCrew, TurnDecision, DEFAULT_MIN_CARGO};
pub use session::{RoundReport, Session, TurnRecord};
pub use console::{parse_command, Command, Console};
