use anyhow::Context;
use clap::Parser;
use minefield_core::*;
use std::io::{self, BufRead, Write};

mod command;

use command::Command;

#[derive(Parser, Debug)]
#[command(version, about = "Play Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed for the first game instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = GameConfig::DEFAULT.rows())]
    rows: Coord,

    #[arg(long, default_value_t = GameConfig::DEFAULT.cols())]
    cols: Coord,

    #[arg(long, default_value_t = GameConfig::DEFAULT.mines)]
    mines: CellCount,
}

/// Prints flag changes and the end-of-game message as they happen.
struct TerminalSink<'a, W: Write> {
    out: &'a mut W,
    result: io::Result<()>,
}

impl<'a, W: Write> TerminalSink<'a, W> {
    fn new(out: &'a mut W) -> Self {
        Self { out, result: Ok(()) }
    }

    fn finish(self) -> io::Result<()> {
        self.result
    }
}

impl<W: Write> RenderSink for TerminalSink<'_, W> {
    fn apply(&mut self, delta: RenderDelta) {
        if self.result.is_err() {
            return;
        }
        self.result = match delta {
            RenderDelta::FlagChanged {
                coords: (row, col),
                flagged,
            } => {
                let action = if flagged { "placed" } else { "removed" };
                writeln!(self.out, "Flag {} at ({}, {}).", action, row, col)
            }
            RenderDelta::StatusChanged(status) => match status.message() {
                Some(message) => writeln!(self.out, "{}", message),
                None => Ok(()),
            },
            RenderDelta::Revealed { .. } | RenderDelta::MineDisclosed { .. } => Ok(()),
        };
    }
}

/// Seed for a new layout, drawn from the thread-local OS-seeded generator
fn random_seed() -> u64 {
    rand::random()
}

/// Runs the prompt loop until the input ends or the player quits.
fn play(
    session: &mut GameSession,
    input: impl BufRead,
    out: &mut impl Write,
    mut next_seed: impl FnMut() -> u64,
) -> anyhow::Result<()> {
    writeln!(out, "Welcome to Minesweeper!")?;
    write!(out, "\n{}", session.board().text(false))?;
    prompt(out)?;

    for line in input.lines() {
        let line = line.context("reading input")?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{}. Try again.", err)?;
                prompt(out)?;
                continue;
            }
        };
        log::debug!("command: {:?}", command);

        let mut sink = TerminalSink::new(out);
        let outcome = match command {
            Command::Quit => return Ok(()),
            Command::NewGame => {
                session.reset(next_seed())?;
                Ok(None)
            }
            Command::Reveal(coords) => session.reveal(coords, &mut sink).map(|_| None),
            Command::Flag(coords) => session.toggle_flag(coords, &mut sink),
        };
        sink.finish()?;

        match outcome {
            Ok(Some(FlagResult::Unchanged)) => {
                writeln!(out, "Cannot place a flag on a revealed cell.")?
            }
            Ok(_) => {}
            Err(GameError::OutOfRange) => writeln!(out, "Invalid coordinates. Try again.")?,
            Err(err) => return Err(err.into()),
        }

        let finished = session.board().is_finished();
        write!(out, "\n{}", session.board().text(finished))?;
        if finished {
            writeln!(out, "Enter `n` for a new game or `q` to quit.")?;
        }
        prompt(out)?;
    }

    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nOptions:")?;
    writeln!(out, "1. Reveal a cell (r row col)")?;
    writeln!(out, "2. Place a flag (f row col)")?;
    write!(out, "Enter your choice: ")?;
    out.flush()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = GameConfig::new(args.rows, args.cols, args.mines)
        .context("invalid board configuration")?;
    let seed = args.seed.unwrap_or_else(random_seed);
    log::debug!("config: {:?}, seed: {}", config, seed);

    let mut session = GameSession::new(config, seed)?;
    play(
        &mut session,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        random_seed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mines: &[Coord2], size: Coord2, input: &str) -> (GameSession, String) {
        let mut session =
            GameSession::from_layout(MineLayout::from_mine_coords(size, mines).unwrap());
        let mut out = Vec::new();
        play(&mut session, input.as_bytes(), &mut out, || 5).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_game_prints_congratulations() {
        let (session, out) = run(&[(0, 0)], (2, 1), "r 1 0\n");

        assert_eq!(session.status(), GameStatus::Won);
        assert!(out.contains("Congratulations! You've cleared the minefield!"));
        assert!(out.contains("  0  *\n  1  1\n"));
    }

    #[test]
    fn mine_hit_prints_game_over_and_full_board() {
        let (session, out) = run(&[(0, 0)], (2, 2), "f 1 1\nr 0 0\nr 1 0\n");

        assert_eq!(session.status(), GameStatus::Lost);
        assert!(out.contains("Flag placed at (1, 1)."));
        assert!(out.contains("Game Over! You hit a mine."));
        assert!(out.contains("  0  *  1\n  1  1  1\n"));
        assert!(!session.board().cell_at((1, 0)).unwrap().is_revealed);
    }

    #[test]
    fn bad_input_reprompts() {
        let (session, out) = run(&[(0, 0)], (2, 2), "z\nr 7 7\nq\nr 1 1\n");

        assert!(out.contains("Unknown command `z`. Try again."));
        assert!(out.contains("Invalid coordinates. Try again."));
        assert_eq!(session.board().revealed_count(), 0);
    }

    #[test]
    fn new_game_replaces_board() {
        let (session, _) = run(&[(0, 0)], (2, 2), "r 0 0\nn\n");

        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.board().revealed_count(), 0);
        assert_eq!(session.board().total_mines(), 1);
    }

    #[test]
    fn flagging_revealed_cell_is_refused() {
        let (session, out) = run(&[(0, 0)], (2, 2), "r 1 1
f 1 1
");

        assert!(out.contains("Cannot place a flag on a revealed cell."));
        assert!(!out.contains("Flag placed"));
        assert!(!session.board().cell_at((1, 1)).unwrap().is_flagged);
        assert_eq!(session.board().mines_left(), 1);
    }

    #[test]
    fn fresh_seeds_differ() {
        let seeds: std::collections::BTreeSet<u64> = (0..4).map(|_| random_seed()).collect();
        assert!(seeds.len() > 1);
    }
}
