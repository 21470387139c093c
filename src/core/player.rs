//! Player identification and per-player tallies.
//!
//! ## PlayerId
//!
//! Type-safe player number supporting 1-255 players.
//!
//! ## Player
//!
//! Passive counters: score, rolls used this turn, wins and losses.
//! Roll limits are enforced by the engine, not here.

use serde::{Deserialize, Serialize};

/// Player number supporting 1-255 players.
///
/// Player numbers are 1-based: the first player created is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player number (1-based).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use ship_captain_crew::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(1));
    /// assert_eq!(players[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player's score and tallies.
///
/// `score` and `rolls_used` are cleared by `reset`; `wins` and `losses`
/// accumulate for the lifetime of the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    score: u32,
    rolls_used: u32,
    wins: u32,
    losses: u32,
}

impl Player {
    /// Create a new player with zeroed tallies.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            score: 0,
            rolls_used: 0,
            wins: 0,
            losses: 0,
        }
    }

    /// Record one roll.
    pub fn roll(&mut self) {
        self.rolls_used += 1;
    }

    pub fn add_win(&mut self) {
        self.wins += 1;
    }

    pub fn add_loss(&mut self) {
        self.losses += 1;
    }

    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    /// Clear score and roll counter. Wins and losses are kept.
    pub fn reset(&mut self) {
        self.score = 0;
        self.rolls_used = 0;
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn rolls_used(&self) -> u32 {
        self.rolls_used
    }

    #[must_use]
    pub fn wins(&self) -> u32 {
        self.wins
    }

    #[must_use]
    pub fn losses(&self) -> u32 {
        self.losses
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} points ({} wins, {} losses)",
            self.id, self.score, self.wins, self.losses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        let p2 = PlayerId::new(2);

        assert_eq!(p1.number(), 1);
        assert_eq!(p2.number(), 2);
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(players, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
    }

    #[test]
    fn test_new_player_is_zeroed() {
        let player = Player::new(PlayerId::new(1));

        assert_eq!(player.score(), 0);
        assert_eq!(player.rolls_used(), 0);
        assert_eq!(player.wins(), 0);
        assert_eq!(player.losses(), 0);
    }

    #[test]
    fn test_roll_has_no_limit() {
        let mut player = Player::new(PlayerId::new(1));
        for _ in 0..10 {
            player.roll();
        }
        assert_eq!(player.rolls_used(), 10);
    }

    #[test]
    fn test_reset_keeps_tallies() {
        let mut player = Player::new(PlayerId::new(1));
        player.set_score(12);
        player.roll();
        player.add_win();
        player.add_loss();
        player.add_loss();

        player.reset();

        assert_eq!(player.score(), 0);
        assert_eq!(player.rolls_used(), 0);
        assert_eq!(player.wins(), 1);
        assert_eq!(player.losses(), 2);
    }

    #[test]
    fn test_display() {
        let mut player = Player::new(PlayerId::new(2));
        player.set_score(7);
        player.add_win();

        assert_eq!(player.to_string(), "Player 2: 7 points (1 wins, 0 losses)");
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new(PlayerId::new(4));
        player.set_score(9);

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
