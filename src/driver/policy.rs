//! Hold policies: what to hold after each roll and when to stop.
//!
//! Policies are trait-based so the same session loop serves automatic play
//! and a human at the console:
//! - `ShipCaptainCrew`: holds 6, 5, 4 in order and banks a good cargo
//! - `Console` (in `driver::console`): asks the player

use crate::core::{DriverError, FaceSource, PlayerId};
use crate::rules::scoring::{self, CAPTAIN, CREW, SHIP};
use crate::rules::{DiceGame, TurnScore};

/// Whether the current player wants another roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnDecision {
    Roll,
    Stop,
}

// =============================================================================
// Hold Policy
// =============================================================================

/// Decides holds for the current player between rolls.
pub trait HoldPolicy {
    /// Called before the first roll of a player's turn.
    fn turn_started<R: FaceSource>(
        &mut self,
        _game: &DiceGame<R>,
        _player: PlayerId,
    ) -> Result<(), DriverError> {
        Ok(())
    }

    /// Called after every roll. Hold dice on `game`, then say whether to
    /// roll again. The session stops anyway once no roll is allowed.
    fn after_roll<R: FaceSource>(
        &mut self,
        game: &mut DiceGame<R>,
    ) -> Result<TurnDecision, DriverError>;

    /// Called once the turn has been scored.
    fn turn_finished<R: FaceSource>(
        &mut self,
        _game: &DiceGame<R>,
        _player: PlayerId,
        _score: TurnScore,
    ) -> Result<(), DriverError> {
        Ok(())
    }
}

/// Hold a ship, then a captain, then a crew.
///
/// A captain is only held once a ship is, and a crew once a captain is.
/// Returns true when all three are held.
pub fn hold_ship_captain_crew<R: FaceSource>(game: &mut DiceGame<R>) -> bool {
    game.auto_hold(SHIP) && game.auto_hold(CAPTAIN) && game.auto_hold(CREW)
}

/// Default cargo the automatic policy is happy to bank.
pub const DEFAULT_MIN_CARGO: u32 = 8;

/// Automatic play: hold ship, captain and crew as they appear, then keep
/// rolling the cargo dice until it reaches `min_cargo`.
#[derive(Clone, Debug)]
pub struct ShipCaptainCrew {
    pub min_cargo: u32,
}

impl ShipCaptainCrew {
    #[must_use]
    pub fn new(min_cargo: u32) -> Self {
        Self { min_cargo }
    }
}

impl Default for ShipCaptainCrew {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CARGO)
    }
}

impl HoldPolicy for ShipCaptainCrew {
    fn after_roll<R: FaceSource>(
        &mut self,
        game: &mut DiceGame<R>,
    ) -> Result<TurnDecision, DriverError> {
        if !hold_ship_captain_crew(game) {
            return Ok(TurnDecision::Roll);
        }
        match scoring::cargo(game.dice()) {
            Some(cargo) if cargo >= self.min_cargo => Ok(TurnDecision::Stop),
            _ => Ok(TurnDecision::Roll),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, LoadedDice};

    fn game(faces: &[u8]) -> DiceGame<LoadedDice> {
        let config = GameConfig::new(2).with_dice(faces.len());
        let mut game = DiceGame::new(&config, LoadedDice::new(faces.iter().copied())).unwrap();
        game.start_new_game();
        game
    }

    fn held(game: &DiceGame<LoadedDice>) -> Vec<bool> {
        game.dice().iter().map(|d| d.is_held()).collect()
    }

    #[test]
    fn test_captain_waits_for_ship() {
        let mut game = game(&[5, 4, 3, 2, 1]);
        assert!(!hold_ship_captain_crew(&mut game));
        assert_eq!(held(&game), vec![false; 5]);
    }

    #[test]
    fn test_crew_waits_for_captain() {
        let mut game = game(&[4, 6, 3, 2, 1]);
        assert!(!hold_ship_captain_crew(&mut game));
        assert_eq!(held(&game), vec![false, true, false, false, false]);
    }

    #[test]
    fn test_holds_all_three() {
        let mut game = game(&[4, 5, 6, 6, 1]);
        assert!(hold_ship_captain_crew(&mut game));
        assert_eq!(held(&game), vec![true, true, true, false, false]);
    }

    #[test]
    fn test_banks_good_cargo() {
        let mut game = game(&[6, 5, 4, 6, 5]);
        let mut policy = ShipCaptainCrew::default();
        assert_eq!(policy.after_roll(&mut game).unwrap(), TurnDecision::Stop);
    }

    #[test]
    fn test_rolls_for_better_cargo() {
        let mut game = game(&[6, 5, 4, 1, 1]);
        let mut policy = ShipCaptainCrew::default();
        assert_eq!(policy.after_roll(&mut game).unwrap(), TurnDecision::Roll);

        let mut modest = ShipCaptainCrew::new(2);
        assert_eq!(modest.after_roll(&mut game).unwrap(), TurnDecision::Stop);
    }

    #[test]
    fn test_rolls_without_ship() {
        let mut game = game(&[1, 2, 3, 4, 5]);
        let mut policy = ShipCaptainCrew::default();
        assert_eq!(policy.after_roll(&mut game).unwrap(), TurnDecision::Roll);
    }
}
