//! Drive a `DiceGame` through turns and rounds with a `HoldPolicy`.

use tracing::{debug, info};

use crate::core::{DriverError, FaceSource, GameError, PlayerId};
use crate::rules::{DiceGame, Standings, TurnScore};

use super::policy::{HoldPolicy, TurnDecision};

/// One scored turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnRecord {
    pub player: PlayerId,
    pub rolls: u32,
    pub score: TurnScore,
}

/// Everything that happened in one round.
#[derive(Clone, Debug)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: u32,
    pub turns: Vec<TurnRecord>,
    pub standings: Standings,
}

/// A game plus the policy deciding holds for it.
pub struct Session<R: FaceSource, P: HoldPolicy> {
    game: DiceGame<R>,
    policy: P,
    rounds_played: u32,
}

impl<R: FaceSource, P: HoldPolicy> Session<R, P> {
    pub fn new(game: DiceGame<R>, policy: P) -> Self {
        Self {
            game,
            policy,
            rounds_played: 0,
        }
    }

    #[must_use]
    pub fn game(&self) -> &DiceGame<R> {
        &self.game
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    #[must_use]
    pub fn into_game(self) -> DiceGame<R> {
        self.game
    }

    #[must_use]
    pub fn into_parts(self) -> (DiceGame<R>, P) {
        (self.game, self.policy)
    }

    /// Play the current player's turn: free the dice, roll while allowed
    /// and wanted, then score.
    pub fn play_turn(&mut self) -> Result<TurnRecord, DriverError> {
        let player = self.game.current_player_id().ok_or(GameError::RoundNotStarted)?;

        self.game.reset_dice();
        self.policy.turn_started(&self.game, player)?;

        while self.game.current_player_can_roll() {
            self.game.roll_dice()?;
            if self.policy.after_roll(&mut self.game)? == TurnDecision::Stop {
                break;
            }
        }

        let rolls = self
            .game
            .current_player()
            .map_or(0, |p| p.rolls_used());
        let score = self.game.score_current_player()?;
        debug!(%player, rolls, ?score, "turn over");

        self.policy.turn_finished(&self.game, player, score)?;
        Ok(TurnRecord {
            player,
            rolls,
            score,
        })
    }

    /// Play one full round and rank the players.
    pub fn play_round(&mut self) -> Result<RoundReport, DriverError> {
        self.game.start_new_game();

        let mut turns = Vec::with_capacity(self.game.players().len());
        loop {
            turns.push(self.play_turn()?);
            if !self.game.next_player() {
                break;
            }
        }

        let standings = self.game.get_game_results();
        self.rounds_played += 1;
        info!(round = self.rounds_played, result = ?standings.result(), "round complete");

        Ok(RoundReport {
            round: self.rounds_played,
            turns,
            standings,
        })
    }

    /// Play `rounds` rounds back to back.
    pub fn play(&mut self, rounds: u32) -> Result<Vec<RoundReport>, DriverError> {
        (0..rounds).map(|_| self.play_round()).collect()
    }
}
