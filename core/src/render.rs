use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Coarse game status as seen by a front end.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Lost,
    Won,
}

impl GameStatus {
    /// Terminal message, `None` while the game is still running.
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Playing => None,
            Self::Lost => Some("Game Over! You hit a mine."),
            Self::Won => Some("Congratulations! You've cleared the minefield!"),
        }
    }
}

impl From<EngineState> for GameStatus {
    fn from(state: EngineState) -> Self {
        match state {
            EngineState::Playing => Self::Playing,
            EngineState::Lost => Self::Lost,
            EngineState::Won => Self::Won,
        }
    }
}

/// A single display change for the presentation layer to apply.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderDelta {
    Revealed { coords: Coord2, content: CellContent },
    FlagChanged { coords: Coord2, flagged: bool },
    /// Mine shown on loss, does not count as revealed.
    MineDisclosed { coords: Coord2 },
    StatusChanged(GameStatus),
}

/// Receiver of render deltas, implemented by each front end.
pub trait RenderSink {
    fn apply(&mut self, delta: RenderDelta);
}

impl RenderSink for Vec<RenderDelta> {
    fn apply(&mut self, delta: RenderDelta) {
        self.push(delta);
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn apply(&mut self, delta: RenderDelta) {
        (**self).apply(delta);
    }
}

/// Plain-text rendering of a board: `*` mine, digit count, `F` flag, `.` hidden.
#[derive(Debug)]
pub struct BoardText<'a> {
    board: &'a Board,
    reveal_all: bool,
}

impl Board {
    /// Text view of the board, with `reveal_all` every cell is shown opened.
    pub fn text(&self, reveal_all: bool) -> BoardText<'_> {
        BoardText {
            board: self,
            reveal_all,
        }
    }
}

impl fmt::Display for BoardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.board.size();

        write!(f, "   ")?;
        for col in 0..cols {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;

        for row in 0..rows {
            write!(f, "{:>3}", row)?;
            for col in 0..cols {
                let cell = self.board.cell_at((row, col)).map_err(|_| fmt::Error)?;
                let glyph = if self.reveal_all || cell.is_revealed {
                    match cell.content() {
                        CellContent::Mine => '*',
                        CellContent::Count(count) => char::from(b'0' + count),
                    }
                } else if cell.is_flagged {
                    'F'
                } else {
                    '.'
                };
                write!(f, "{:>3}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn text_shows_hidden_flags_and_counts() {
        let layout = MineLayout::from_mine_coords((2, 3), &[(0, 0)]).unwrap();
        let mut board = Board::new(layout);
        board.reveal_cell((1, 1)).unwrap();
        board.toggle_flag((0, 2)).unwrap();

        let text = board.text(false).to_string();

        assert_eq!(text, "     0  1  2\n  0  .  .  F\n  1  .  1  .\n");
    }

    #[test]
    fn text_reveal_all_discloses_mines() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(1, 0)]).unwrap();
        let board = Board::new(layout);

        let text = board.text(true).to_string();

        assert_eq!(text, "     0  1\n  0  1  1\n  1  *  1\n");
    }

    #[test]
    fn status_messages_only_for_finished_games() {
        assert_eq!(GameStatus::Playing.message(), None);
        assert!(GameStatus::Lost.message().unwrap().starts_with("Game Over"));
        assert!(GameStatus::Won.message().unwrap().starts_with("Congratulations"));
        assert_eq!(GameStatus::from(EngineState::Won), GameStatus::Won);
    }
}
