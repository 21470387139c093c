//! End-of-round results.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};

/// Result of a completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players tied for the top score.
    Winners(Vec<PlayerId>),
    /// Nobody scored; no wins or losses were awarded.
    Draw,
}

impl RoundResult {
    /// Build a result from the players sharing the top score.
    #[must_use]
    pub fn from_winners(mut winners: Vec<PlayerId>) -> Self {
        match winners.len() {
            0 => RoundResult::Draw,
            1 => RoundResult::Winner(winners.remove(0)),
            _ => RoundResult::Winners(winners),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            RoundResult::Winner(p) => *p == player,
            RoundResult::Winners(ps) => ps.contains(&player),
            RoundResult::Draw => false,
        }
    }
}

/// Players in ranked order after a round, with the round result.
///
/// `Display` prints one player summary per line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standings {
    players: Vec<Player>,
    result: RoundResult,
}

impl Standings {
    pub fn new(players: Vec<Player>, result: RoundResult) -> Self {
        Self { players, result }
    }

    /// Players sorted by score, highest first.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn result(&self) -> &RoundResult {
        &self.result
    }
}

impl std::fmt::Display for Standings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for player in &self.players {
            writeln!(f, "{}", player)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_result_is_winner() {
        let result = RoundResult::Winner(PlayerId::new(2));
        assert!(!result.is_winner(PlayerId::new(1)));
        assert!(result.is_winner(PlayerId::new(2)));

        let draw = RoundResult::Draw;
        assert!(!draw.is_winner(PlayerId::new(1)));

        let tie = RoundResult::Winners(vec![PlayerId::new(1), PlayerId::new(3)]);
        assert!(tie.is_winner(PlayerId::new(1)));
        assert!(!tie.is_winner(PlayerId::new(2)));
        assert!(tie.is_winner(PlayerId::new(3)));
    }

    #[test]
    fn test_from_winners() {
        assert_eq!(RoundResult::from_winners(vec![]), RoundResult::Draw);
        assert_eq!(
            RoundResult::from_winners(vec![PlayerId::new(3)]),
            RoundResult::Winner(PlayerId::new(3))
        );
        assert_eq!(
            RoundResult::from_winners(vec![PlayerId::new(1), PlayerId::new(2)]),
            RoundResult::Winners(vec![PlayerId::new(1), PlayerId::new(2)])
        );
    }

    #[test]
    fn test_standings_display() {
        let mut first = Player::new(PlayerId::new(2));
        first.set_score(8);
        let second = Player::new(PlayerId::new(1));

        let standings = Standings::new(vec![first, second], RoundResult::Winner(PlayerId::new(2)));

        assert_eq!(
            standings.to_string(),
            "Player 2: 8 points (0 wins, 0 losses)\nPlayer 1: 0 points (0 wins, 0 losses)\n"
        );
        assert_eq!(standings.players().len(), 2);
    }

    #[test]
    fn test_round_result_serde() {
        let result = RoundResult::Winners(vec![PlayerId::new(1), PlayerId::new(4)]);
        let json = serde_json::to_string(&result).unwrap();
        let restored: RoundResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, restored);
    }
}
