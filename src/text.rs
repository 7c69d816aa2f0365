//! Line-oriented front end.
//!
//! Reads one command per line and drives any [`RoundEngine`]. Commands:
//!
//! - `p 0 1 2 3 4` play five cards (a bare list of indices also plays)
//! - `d 0 2` discard
//! - `h` suggest the best play
//! - `n` start a new round
//! - `q` quit
//!
//! The session also ends on end of input and when the round is exhausted.

use crate::engine::RoundEngine;
use crate::evaluator::best_play;
use crate::round::RoundState;
use clap::Parser;
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub enum Command {
    #[command(about = "Score exactly five cards", alias = "p")]
    Play {
        #[arg(required = true)]
        indices: Vec<usize>,
    },
    #[command(about = "Swap cards for fresh ones from the deck", alias = "d")]
    Discard {
        #[arg(required = true)]
        indices: Vec<usize>,
    },
    #[command(about = "Show the best five-card play in hand", alias = "h")]
    Hint,
    #[command(about = "Start a new round", alias = "n")]
    New,
    #[command(about = "Leave the game", aliases = ["q", "exit"])]
    Quit,
}

/// Parse one input line. A line that starts with an index is a play.
pub fn parse_command(line: &str) -> Result<Command, clap::Error> {
    let mut tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.first().is_some_and(|t| t.chars().all(|c| c.is_ascii_digit())) {
        tokens.insert(0, "play");
    }
    Command::try_parse_from(tokens)
}

const BANNER: &str = "\
Simplified Balatro: pick 5 of your cards to score a poker hand.
  p 0 1 2 3 4   play      d 0 1 2   discard
  h             hint      n         new round      q   quit";

/// Run a session until `q`, end of input or an exhausted round.
pub fn run<E, R, W>(engine: &mut E, input: R, out: &mut W) -> io::Result<()>
where
    E: RoundEngine,
    R: BufRead,
    W: Write,
{
    if engine.status() == RoundState::NotStarted {
        engine.start();
    }
    writeln!(out, "{BANNER}")?;

    let mut lines = input.lines();
    loop {
        write_state(engine, out)?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(c) => c,
            Err(e) => {
                write_clap_error(&e, out)?;
                continue;
            }
        };
        log::debug!("text command: {command:?}");

        match command {
            Command::Play { indices } => match engine.play(&indices) {
                Ok(result) => writeln!(out, "{result}")?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::Discard { indices } => match engine.discard(&indices) {
                Ok(cards) => {
                    let shown: Vec<String> = cards.iter().map(ToString::to_string).collect();
                    writeln!(out, "discarded {}", shown.join(" "))?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::Hint => match best_play(engine.hand().as_slice()) {
                Some(s) => {
                    let idx: Vec<String> = s.indices.iter().map(ToString::to_string).collect();
                    writeln!(out, "hint: p {} -> {}", idx.join(" "), s.result)?;
                }
                None => writeln!(out, "hint: fewer than five cards in hand")?,
            },
            Command::New => {
                engine.start();
                writeln!(out, "new round")?;
            }
            Command::Quit => break,
        }

        if engine.status() == RoundState::Exhausted {
            writeln!(out, "deck exhausted, round over. final score {}", engine.total_score())?;
            break;
        }
    }
    Ok(())
}

fn write_state<E: RoundEngine, W: Write>(engine: &E, out: &mut W) -> io::Result<()> {
    let cards: Vec<String> = engine.hand().iter().map(|(i, c)| format!("[{i}] {c}")).collect();
    writeln!(out, "hand: {}", cards.join("  "))?;
    let cfg = engine.config();
    writeln!(
        out,
        "plays {}/{}  discards {}/{}  deck {}  score {}",
        engine.plays_remaining(),
        cfg.max_plays,
        engine.discards_remaining(),
        cfg.max_discards,
        engine.deck_remaining(),
        engine.total_score()
    )?;
    if engine.plays_remaining() == 0 {
        writeln!(out, "no plays left: n for a new round, q to quit")?;
    }
    Ok(())
}

fn write_clap_error<W: Write>(e: &clap::Error, out: &mut W) -> io::Result<()> {
    use clap::error::ErrorKind;
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            write!(out, "{e}")
        }
        _ => {
            let text = e.to_string();
            let first = text.lines().next().unwrap_or("invalid command");
            writeln!(out, "{first}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_and_aliases() {
        let expected = Command::Play { indices: vec![0, 1, 2, 3, 4] };
        assert_eq!(parse_command("p 0 1 2 3 4").unwrap(), expected);
        assert_eq!(parse_command("play 0 1 2 3 4").unwrap(), expected);
        assert_eq!(parse_command("  0 1 2 3 4 ").unwrap(), expected);
    }

    #[test]
    fn discard_hint_new_quit() {
        assert_eq!(parse_command("d 7 2").unwrap(), Command::Discard { indices: vec![7, 2] });
        assert_eq!(parse_command("h").unwrap(), Command::Hint);
        assert_eq!(parse_command("n").unwrap(), Command::New);
        assert_eq!(parse_command("q").unwrap(), Command::Quit);
        assert_eq!(parse_command("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn bad_input_is_an_error() {
        assert!(parse_command("p").is_err());
        assert!(parse_command("d x").is_err());
        assert!(parse_command("jump").is_err());
        assert!(parse_command("0 1 two").is_err());
    }

    #[test]
    fn discard_requires_indices() {
        let err = parse_command("d").unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
