//! Interactive play over a line-based console.
//!
//! After each roll the ship, captain and crew are held automatically (in
//! that order), then the player may hold more dice by number, roll again or
//! stop. End of input stops the turn.

use std::io::{BufRead, Write};

use crate::core::{DieLabel, DriverError, FaceSource, PlayerId};
use crate::rules::{DiceGame, TurnScore};

use super::policy::{hold_ship_captain_crew, HoldPolicy, TurnDecision};

/// A line of player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Roll,
    Stop,
    Hold(Vec<DieLabel>),
}

/// Parse one line of input.
///
/// - empty, `r` or `roll`: roll again
/// - `s` or `stop`: stop rolling
/// - die numbers separated by spaces or commas: hold those dice
///
/// Returns `None` for anything else.
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" | "r" | "roll" => return Some(Command::Roll),
        "s" | "stop" => return Some(Command::Stop),
        _ => {}
    }

    let labels = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<u8>().ok().map(DieLabel::new))
        .collect::<Option<Vec<_>>>()?;

    if labels.is_empty() {
        None
    } else {
        Some(Command::Hold(labels))
    }
}

/// Hold policy that asks a human.
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> O {
        self.output
    }

    fn read_command(&mut self) -> Result<Option<Command>, DriverError> {
        write!(self.output, "Hold dice by number, [r]oll again or [s]top: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(Some(Command::Stop));
        }
        Ok(parse_command(&line))
    }
}

impl<I: BufRead, O: Write> HoldPolicy for Console<I, O> {
    fn turn_started<R: FaceSource>(
        &mut self,
        _game: &DiceGame<R>,
        player: PlayerId,
    ) -> Result<(), DriverError> {
        writeln!(self.output, "\n{}'s turn", player)?;
        Ok(())
    }

    fn after_roll<R: FaceSource>(
        &mut self,
        game: &mut DiceGame<R>,
    ) -> Result<TurnDecision, DriverError> {
        hold_ship_captain_crew(game);

        loop {
            writeln!(
                self.output,
                "{} ({} rolls left)",
                game.get_dice_results(),
                game.current_player_rolls_left().unwrap_or(0)
            )?;
            if !game.current_player_can_roll() {
                return Ok(TurnDecision::Stop);
            }

            match self.read_command()? {
                Some(Command::Roll) => return Ok(TurnDecision::Roll),
                Some(Command::Stop) => return Ok(TurnDecision::Stop),
                Some(Command::Hold(labels)) => {
                    for label in labels {
                        game.player_hold(label);
                    }
                }
                None => writeln!(self.output, "Unrecognized input")?,
            }
        }
    }

    fn turn_finished<R: FaceSource>(
        &mut self,
        _game: &DiceGame<R>,
        player: PlayerId,
        score: TurnScore,
    ) -> Result<(), DriverError> {
        match score {
            TurnScore::Scored { cargo, total } => {
                writeln!(self.output, "{} scores {} (total {})", player, cargo, total)?
            }
            TurnScore::NoQualifyingCombination => {
                writeln!(self.output, "No ship, captain and crew: no points assigned")?
            }
        }
        Ok(())
    }
}
