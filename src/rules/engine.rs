//! The Ship-Captain-Crew game engine.
//!
//! `DiceGame` owns the players, the dice and the turn pointer. One round:
//!
//! ```text
//! start_new_game
//!   for each player in turn order:
//!     reset_dice
//!     (roll_dice | player_hold | auto_hold)* while current_player_can_roll
//!     score_current_player
//!     next_player            -> false after the last player
//! get_game_results           -> re-sorts turn order, winner starts next round
//! ```
//!
//! The engine is single-threaded and not internally synchronized. Wrap it in
//! a `Mutex` if more than one driver can reach the same instance.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::{
    ConfigError, Die, DieLabel, FaceSource, GameConfig, GameError, GameRng, Player, PlayerId,
};

use super::results::{RoundResult, Standings};
use super::scoring::{self, TurnScore};

/// Dice are stored inline up to this count.
pub type DiceVec = SmallVec<[Die; 8]>;

/// Serializable view of an engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: Vec<Player>,
    pub dice: Vec<Die>,
    pub max_rolls: u32,
    /// Index of the current player in `players`.
    pub current: Option<usize>,
}

/// Game engine for one table of players.
///
/// Players and dice are allocated at construction and never resized.
/// `current` indexes into `players` and is `None` until the first
/// `start_new_game`.
#[derive(Clone, Debug)]
pub struct DiceGame<R: FaceSource = GameRng> {
    players: Vec<Player>,
    dice: DiceVec,
    max_rolls: u32,
    current: Option<usize>,
    rng: R,
}

impl DiceGame<GameRng> {
    /// Create a game with six-sided dice and a seeded RNG.
    pub fn with_seed(
        player_count: usize,
        die_count: usize,
        max_rolls: u32,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let config = GameConfig::new(player_count)
            .with_dice(die_count)
            .with_max_rolls(max_rolls);
        Self::new(&config, GameRng::new(seed))
    }
}

impl<R: FaceSource> DiceGame<R> {
    /// Create a game from a configuration and a face source.
    ///
    /// Fails before allocating anything if the configuration is invalid.
    pub fn new(config: &GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let players = PlayerId::all(config.player_count).map(Player::new).collect();
        let dice = (1..=config.die_count as u8)
            .map(|label| Die::new(DieLabel::new(label), config.sides, &mut rng))
            .collect();

        debug!(
            players = config.player_count,
            dice = config.die_count,
            max_rolls = config.max_rolls,
            "created game"
        );

        Ok(Self {
            players,
            dice,
            max_rolls: config.max_rolls,
            current: None,
            rng,
        })
    }

    // === Accessors ===

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Dice in label order.
    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    #[must_use]
    pub fn max_rolls(&self) -> u32 {
        self.max_rolls
    }

    /// The face source, e.g. to checkpoint a `GameRng`.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// The player whose turn it is, if a round has started.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current.map(|i| &self.players[i])
    }

    #[must_use]
    pub fn current_player_id(&self) -> Option<PlayerId> {
        self.current_player().map(Player::id)
    }

    #[must_use]
    pub fn current_player_score(&self) -> Option<u32> {
        self.current_player().map(Player::score)
    }

    /// Rolls the current player has left this turn.
    #[must_use]
    pub fn current_player_rolls_left(&self) -> Option<u32> {
        self.current_player()
            .map(|p| self.max_rolls.saturating_sub(p.rolls_used()))
    }

    /// Every die's summary, concatenated in label order.
    #[must_use]
    pub fn get_dice_results(&self) -> String {
        self.dice.iter().map(Die::to_string).collect()
    }

    /// Capture players, dice and turn pointer.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self.players.clone(),
            dice: self.dice.to_vec(),
            max_rolls: self.max_rolls,
            current: self.current,
        }
    }

    // === Rolling and holding ===

    /// Every die is held. True when there are no dice.
    #[must_use]
    pub fn all_dice_held(&self) -> bool {
        self.dice.iter().all(Die::is_held)
    }

    /// Any held die shows `face`.
    #[must_use]
    pub fn is_holding_die(&self, face: u8) -> bool {
        scoring::is_holding(&self.dice, face)
    }

    /// The current player has rolls left and at least one die is free.
    ///
    /// False before the first round starts.
    #[must_use]
    pub fn current_player_can_roll(&self) -> bool {
        match self.current_player() {
            Some(player) => player.rolls_used() < self.max_rolls && !self.all_dice_held(),
            None => false,
        }
    }

    /// Record a roll for the current player and roll every unheld die.
    ///
    /// Refuses, without changing anything, when `current_player_can_roll`
    /// is false.
    pub fn roll_dice(&mut self) -> Result<(), GameError> {
        let index = self.current.ok_or(GameError::RoundNotStarted)?;
        if !self.current_player_can_roll() {
            let player = &self.players[index];
            return Err(GameError::RollNotAllowed {
                player: player.id(),
                rolls_used: player.rolls_used(),
                max_rolls: self.max_rolls,
            });
        }

        self.players[index].roll();
        for die in &mut self.dice {
            die.roll(&mut self.rng);
        }

        let player = &self.players[index];
        debug!(
            player = %player.id(),
            roll = player.rolls_used(),
            dice = %self.get_dice_results(),
            "rolled"
        );
        Ok(())
    }

    /// Hold the die with `label`. Unknown labels are ignored.
    pub fn player_hold(&mut self, label: DieLabel) {
        if let Some(die) = self.dice.iter_mut().find(|die| die.label() == label) {
            die.hold();
            debug!(die = %label, face = die.face_value(), "held");
        }
    }

    /// Make sure one die showing `face` is held.
    ///
    /// Returns true if a die with that face was already held or one was
    /// just held (the first unheld match), false if no die shows `face`.
    pub fn auto_hold(&mut self, face: u8) -> bool {
        if self.is_holding_die(face) {
            return true;
        }
        match self
            .dice
            .iter_mut()
            .find(|die| !die.is_held() && die.face_value() == face)
        {
            Some(die) => {
                die.hold();
                debug!(die = %die.label(), face, "auto-held");
                true
            }
            None => false,
        }
    }

    /// Release every die for the next turn.
    pub fn reset_dice(&mut self) {
        for die in &mut self.dice {
            die.reset();
        }
    }

    /// Clear every player's score and roll counter.
    pub fn reset_players(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
    }

    // === Turn advancement ===

    /// Move to the next player in turn order.
    ///
    /// Returns false, leaving the pointer alone, on the last player (the
    /// round is over) or before the first round.
    pub fn next_player(&mut self) -> bool {
        match self.current {
            Some(index) if index + 1 < self.players.len() => {
                self.current = Some(index + 1);
                true
            }
            _ => false,
        }
    }

    /// Start a round: the first player in turn order goes first and every
    /// player's score and rolls are cleared.
    ///
    /// Turn order is whatever the previous `get_game_results` left, so the
    /// last round's winner starts.
    pub fn start_new_game(&mut self) {
        self.current = Some(0);
        self.reset_players();
        info!(first = %self.players[0].id(), "new round");
    }

    // === Scoring ===

    /// Score the current player's dice.
    ///
    /// With a ship, captain and crew held, adds the cargo to the player's
    /// score. Otherwise nothing changes.
    pub fn score_current_player(&mut self) -> Result<TurnScore, GameError> {
        let index = self.current.ok_or(GameError::RoundNotStarted)?;
        let player = &mut self.players[index];

        match scoring::cargo(&self.dice) {
            Some(cargo) => {
                let total = player.score() + cargo;
                player.set_score(total);
                info!(player = %player.id(), cargo, total, "scored");
                Ok(TurnScore::Scored { cargo, total })
            }
            None => {
                info!(player = %player.id(), "no points assigned");
                Ok(TurnScore::NoQualifyingCombination)
            }
        }
    }

    // === Round resolution ===

    /// Rank players by score and award wins and losses.
    ///
    /// Players are stably sorted highest score first; this becomes the next
    /// round's turn order. If the top score is non-zero every player on it
    /// gets a win and everyone else a loss. If everyone is on zero nothing
    /// is awarded.
    pub fn get_game_results(&mut self) -> Standings {
        let current_id = self.current_player_id();

        self.players.sort_by(|a, b| b.score().cmp(&a.score()));
        self.current = current_id.and_then(|id| self.players.iter().position(|p| p.id() == id));

        let top = self.players.iter().map(Player::score).max().unwrap_or(0);
        let mut winners = Vec::new();
        if top != 0 {
            for player in &mut self.players {
                if player.score() == top {
                    player.add_win();
                    winners.push(player.id());
                } else {
                    player.add_loss();
                }
            }
        }

        let result = RoundResult::from_winners(winners);
        info!(?result, top, "round over");
        Standings::new(self.players.clone(), result)
    }

    /// The player with the highest score. Ties go to whoever comes first in
    /// the current player order.
    #[must_use]
    pub fn get_final_winner(&self) -> Option<&Player> {
        self.players.iter().fold(None, |best: Option<&Player>, player| match best {
            Some(best) if best.score() >= player.score() => Some(best),
            _ => Some(player),
        })
    }

    /// `Display` of the final winner, empty if there is none.
    #[must_use]
    pub fn final_winner_summary(&self) -> String {
        self.get_final_winner()
            .map(Player::to_string)
            .unwrap_or_default()
    }
}
