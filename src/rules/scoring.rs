//! Ship, captain and crew scoring.
//!
//! A turn scores only while a 6 (ship), a 5 (captain) and a 4 (crew) are all
//! held. The score ("cargo") is the sum of every die, held or not, minus the
//! 15 points the ship, captain and crew themselves show.

use crate::core::Die;

/// Face value of the ship.
pub const SHIP: u8 = 6;
/// Face value of the captain.
pub const CAPTAIN: u8 = 5;
/// Face value of the crew.
pub const CREW: u8 = 4;

/// Points contributed by the ship, captain and crew, excluded from cargo.
pub const CREW_POINTS: u32 = (SHIP + CAPTAIN + CREW) as u32;

/// Outcome of scoring a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnScore {
    /// Ship, captain and crew were held; `cargo` was added for a new `total`.
    Scored { cargo: u32, total: u32 },
    /// No ship, captain and crew held. Nothing was added.
    NoQualifyingCombination,
}

impl TurnScore {
    /// Points added by this turn.
    #[must_use]
    pub fn cargo(&self) -> u32 {
        match self {
            TurnScore::Scored { cargo, .. } => *cargo,
            TurnScore::NoQualifyingCombination => 0,
        }
    }

    #[must_use]
    pub fn is_scored(&self) -> bool {
        matches!(self, TurnScore::Scored { .. })
    }
}

/// Any held die shows `face`.
#[must_use]
pub fn is_holding(dice: &[Die], face: u8) -> bool {
    dice.iter().any(|die| die.is_held() && die.face_value() == face)
}

/// A ship, a captain and a crew are each held.
///
/// Three independent existence checks: the rest of the dice are not
/// constrained.
#[must_use]
pub fn has_ship_captain_and_crew(dice: &[Die]) -> bool {
    is_holding(dice, SHIP) && is_holding(dice, CAPTAIN) && is_holding(dice, CREW)
}

/// Cargo for the dice, or `None` if they do not qualify.
#[must_use]
pub fn cargo(dice: &[Die]) -> Option<u32> {
    if !has_ship_captain_and_crew(dice) {
        return None;
    }
    let total: u32 = dice.iter().map(|die| u32::from(die.face_value())).sum();
    Some(total.saturating_sub(CREW_POINTS))
}
