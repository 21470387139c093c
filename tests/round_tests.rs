//! Round-level integration tests.
//!
//! These drive `DiceGame` through its public API only: construction,
//! turn advancement, scoring and end-of-round ranking.

use ship_captain_crew::core::{DieLabel, GameConfig, LoadedDice, PlayerId};
use ship_captain_crew::rules::{DiceGame, RoundResult, TurnScore};
use ship_captain_crew::ConfigError;

/// A game whose dice show exactly `faces` and never roll.
fn fixed_game(players: usize, faces: &[u8]) -> DiceGame<LoadedDice> {
    let config = GameConfig::new(players)
        .with_dice(faces.len())
        .with_max_rolls(0);
    DiceGame::new(&config, LoadedDice::new(faces.iter().copied())).unwrap()
}

fn hold_ship_captain_crew(game: &mut DiceGame<LoadedDice>) {
    assert!(game.auto_hold(6));
    assert!(game.auto_hold(5));
    assert!(game.auto_hold(4));
}

fn ids(game: &DiceGame<LoadedDice>) -> Vec<u8> {
    game.players().iter().map(|p| p.id().number()).collect()
}

// =============================================================================
// Construction
// =============================================================================

/// Player and die counts match the configuration for several table sizes.
#[test]
fn test_construction_sizes() {
    for (players, dice) in [(2, 0), (3, 5), (6, 8), (10, 12)] {
        let game = DiceGame::with_seed(players, dice, 3, 42).unwrap();

        assert_eq!(game.players().len(), players);
        assert_eq!(game.dice().len(), dice);
        let expected: Vec<_> = PlayerId::all(players).collect();
        let actual: Vec<_> = game.players().iter().map(|p| p.id()).collect();
        assert_eq!(actual, expected);
    }
}

/// Fewer than two players is a configuration error.
#[test]
fn test_construction_needs_two_players() {
    for players in [0, 1] {
        assert_eq!(
            DiceGame::with_seed(players, 5, 3, 42).unwrap_err(),
            ConfigError::TooFewPlayers { requested: players }
        );
    }
}

/// Zero dice is legal but can never score.
#[test]
fn test_zero_dice_never_scores() {
    let mut game = fixed_game(2, &[]);
    game.start_new_game();

    assert!(game.all_dice_held());
    assert!(!game.current_player_can_roll());
    assert!(!game.auto_hold(6));
    assert_eq!(
        game.score_current_player().unwrap(),
        TurnScore::NoQualifyingCombination
    );
    assert_eq!(game.get_dice_results(), "");
}

// =============================================================================
// Scoring
// =============================================================================

/// 6, 5, 4, 3, 2 scores 20 - 15 = 5.
#[test]
fn test_cargo_example() {
    let mut game = fixed_game(2, &[6, 5, 4, 3, 2]);
    game.start_new_game();
    hold_ship_captain_crew(&mut game);

    assert_eq!(
        game.score_current_player().unwrap(),
        TurnScore::Scored { cargo: 5, total: 5 }
    );
}

/// The combination must be held, not just showing.
#[test]
fn test_showing_is_not_holding() {
    let mut game = fixed_game(2, &[6, 5, 4, 3, 2]);
    game.start_new_game();
    game.player_hold(DieLabel::new(1));
    game.player_hold(DieLabel::new(2));

    assert_eq!(
        game.score_current_player().unwrap(),
        TurnScore::NoQualifyingCombination
    );
    assert_eq!(game.current_player_score(), Some(0));
}

/// Manual holds by label count the same as automatic holds.
#[test]
fn test_manual_holds_qualify() {
    let mut game = fixed_game(2, &[2, 4, 5, 6, 6]);
    game.start_new_game();
    for label in [2, 3, 4] {
        game.player_hold(DieLabel::new(label));
    }

    assert!(game.is_holding_die(6));
    assert_eq!(game.score_current_player().unwrap().cargo(), 8);
}

// =============================================================================
// Round resolution
// =============================================================================

/// Scores [10, 30, 30, 5]: both players on 30 win, the others lose.
#[test]
fn test_tied_winners() {
    // Cargo 5 per scoring call
    let mut game = fixed_game(4, &[6, 5, 4, 3, 2]);
    game.start_new_game();
    hold_ship_captain_crew(&mut game);

    for calls in [2, 6, 6, 1] {
        for _ in 0..calls {
            game.score_current_player().unwrap();
        }
        game.next_player();
    }

    let standings = game.get_game_results();

    assert_eq!(
        standings.result(),
        &RoundResult::Winners(vec![PlayerId::new(2), PlayerId::new(3)])
    );
    let scores: Vec<_> = game.players().iter().map(|p| p.score()).collect();
    assert_eq!(scores, vec![30, 30, 10, 5]);
    assert_eq!(ids(&game), vec![2, 3, 1, 4]);

    let tallies: Vec<_> = game.players().iter().map(|p| (p.wins(), p.losses())).collect();
    assert_eq!(tallies, vec![(1, 0), (1, 0), (0, 1), (0, 1)]);

    assert_eq!(
        standings.to_string(),
        "Player 2: 30 points (1 wins, 0 losses)\n\
         Player 3: 30 points (1 wins, 0 losses)\n\
         Player 1: 10 points (0 wins, 1 losses)\n\
         Player 4: 5 points (0 wins, 1 losses)\n"
    );
}

/// A player tied on zero with others still takes a loss when someone scored.
#[test]
fn test_zero_scores_lose_when_someone_scores() {
    let mut game = fixed_game(3, &[6, 5, 4, 3, 2]);
    game.start_new_game();
    game.next_player();
    hold_ship_captain_crew(&mut game);
    game.score_current_player().unwrap();

    game.get_game_results();

    let tallies: Vec<_> = game.players().iter().map(|p| (p.id().number(), p.wins(), p.losses())).collect();
    assert_eq!(tallies, vec![(2, 1, 0), (1, 0, 1), (3, 0, 1)]);
}

/// Starting a round and resolving it straight away awards nothing and keeps
/// construction order.
#[test]
fn test_empty_round_roundtrip() {
    let mut game = fixed_game(4, &[1, 2, 3]);
    game.start_new_game();

    let standings = game.get_game_results();

    assert_eq!(standings.result(), &RoundResult::Draw);
    assert_eq!(ids(&game), vec![1, 2, 3, 4]);
    assert!(game.players().iter().all(|p| p.wins() == 0 && p.losses() == 0));
}

/// The winner of a round plays first in the next one.
#[test]
fn test_winner_goes_first() {
    let mut game = fixed_game(3, &[6, 5, 4, 3, 2]);
    game.start_new_game();
    game.next_player();
    game.next_player();
    hold_ship_captain_crew(&mut game);
    game.score_current_player().unwrap();
    game.get_game_results();

    game.start_new_game();

    assert_eq!(game.current_player_id(), Some(PlayerId::new(3)));
    assert_eq!(ids(&game), vec![3, 1, 2]);
    assert!(game.players().iter().all(|p| p.score() == 0));
    assert_eq!(game.players()[0].wins(), 1);
}

/// `next_player` reports the end of the round exactly once per pass.
#[test]
fn test_next_player_end_of_round() {
    let mut game = fixed_game(5, &[1]);
    game.start_new_game();

    let advanced = (0..10).filter(|_| game.next_player()).count();

    assert_eq!(advanced, 4);
    assert_eq!(game.current_player_id(), Some(PlayerId::new(5)));
}

/// Final winner is the first player holding the top score.
#[test]
fn test_final_winner() {
    let mut game = fixed_game(3, &[6, 5, 4, 3, 2]);
    game.start_new_game();
    hold_ship_captain_crew(&mut game);
    game.next_player();
    game.score_current_player().unwrap();
    game.next_player();
    game.score_current_player().unwrap();

    // Players 2 and 3 tie on 5; player 2 comes first
    assert_eq!(game.get_final_winner().unwrap().id(), PlayerId::new(2));
    assert_eq!(
        game.final_winner_summary(),
        "Player 2: 5 points (0 wins, 0 losses)"
    );
}
