use serde::{Deserialize, Serialize};

use crate::*;

/// Owns the board of the game currently being played and turns engine results into render deltas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
}

impl GameSession {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let board = Board::initialize(config, seed)?;
        Ok(Self { board })
    }

    pub fn from_layout(mine_layout: MineLayout) -> Self {
        Self {
            board: Board::new(mine_layout),
        }
    }

    /// Replaces the board wholesale, the front end is expected to redraw from scratch.
    pub fn reset(&mut self, seed: u64) -> Result<()> {
        self.board = Board::initialize(self.board.config(), seed)?;
        log::debug!("game reset");
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    pub fn status(&self) -> GameStatus {
        self.board.state().into()
    }

    /// Reveals a cell and forwards every display change to `sink`.
    ///
    /// Returns `None` when the input was ignored because the game already ended.
    pub fn reveal(
        &mut self,
        coords: Coord2,
        mut sink: impl RenderSink,
    ) -> Result<Option<RevealStatus>> {
        let result = match self.board.reveal_cell(coords) {
            Ok(result) => result,
            Err(GameError::AlreadyEnded) => return Ok(None),
            Err(err) => return Err(err),
        };
        log::trace!(
            "reveal {:?}: {} cells, {:?}",
            coords,
            result.revealed.len(),
            result.status
        );

        for RevealedCell { coords, content } in &result.revealed {
            sink.apply(RenderDelta::Revealed {
                coords: *coords,
                content: *content,
            });
        }

        match result.status {
            RevealStatus::Continue => {}
            RevealStatus::MineHit => {
                for coords in self.board.reveal_all_mines() {
                    sink.apply(RenderDelta::MineDisclosed { coords });
                }
                sink.apply(RenderDelta::StatusChanged(GameStatus::Lost));
            }
            RevealStatus::Win => sink.apply(RenderDelta::StatusChanged(GameStatus::Won)),
        }

        Ok(Some(result.status))
    }

    /// Toggles a flag, returns `None` when the input was ignored because the game already ended.
    pub fn toggle_flag(
        &mut self,
        coords: Coord2,
        mut sink: impl RenderSink,
    ) -> Result<Option<FlagResult>> {
        let result = match self.board.toggle_flag(coords) {
            Ok(result) => result,
            Err(GameError::AlreadyEnded) => return Ok(None),
            Err(err) => return Err(err),
        };

        match result {
            FlagResult::Unchanged => {}
            FlagResult::Flagged | FlagResult::Unflagged => sink.apply(RenderDelta::FlagChanged {
                coords,
                flagged: result == FlagResult::Flagged,
            }),
        }

        Ok(Some(result))
    }
}
