use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// The minefield state machine for a single game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    config: GameConfig,
    cells: Array2<Cell>,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    state: EngineState,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Builds a fresh board with randomly placed mines.
    pub fn initialize(config: GameConfig, seed: u64) -> Result<Self> {
        RandomLayoutGenerator::new(seed)
            .generate(config)
            .map(Self::new)
    }

    pub fn new(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            let is_mine = mine_layout.contains_mine(coords);
            Cell {
                is_mine,
                adjacent_mine_count: if is_mine {
                    0
                } else {
                    mine_layout.adjacent_mine_count(coords)
                },
                ..Default::default()
            }
        });
        // counted from the cells themselves so the win check always matches the grid
        let mines = cells.iter().filter(|cell| cell.is_mine).count() as CellCount;
        let config = GameConfig::new_unchecked(size, mines);
        log::debug!(
            "new board {}x{} with {} mines",
            config.rows(),
            config.cols(),
            config.mines
        );

        Self {
            config,
            cells,
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn mines_left(&self) -> isize {
        (self.config.mines as isize) - (self.flagged_count.0 as isize)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        coords.0 < self.config.rows() && coords.1 < self.config.cols()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    /// Opens a cell, cascading through zero-count regions.
    pub fn reveal_cell(&mut self, coords: Coord2) -> Result<RevealResult> {
        let coords = self.validate_coords(coords)?;
        self.check_playing()?;

        let cell = self.cells[coords.to_nd_index()];
        if cell.is_revealed || cell.is_flagged {
            log::trace!("reveal {:?} ignored", coords);
            return Ok(RevealResult::unchanged());
        }

        let mut revealed = Vec::new();
        self.open(coords, &mut revealed);

        if cell.is_mine {
            log::debug!("mine hit at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.state = EngineState::Lost;
            return Ok(RevealResult {
                revealed,
                status: RevealStatus::MineHit,
            });
        }

        if cell.adjacent_mine_count == 0 {
            self.cascade_from(coords, &mut revealed);
        }

        let status = if self.revealed_count.0 + self.config.mines == self.config.total_cells() {
            log::debug!("board cleared after {} reveals", self.revealed_count);
            self.state = EngineState::Won;
            RevealStatus::Win
        } else {
            RevealStatus::Continue
        };

        Ok(RevealResult { revealed, status })
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagResult> {
        let coords = self.validate_coords(coords)?;
        self.check_playing()?;

        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_revealed {
            return Ok(FlagResult::Unchanged);
        }

        cell.is_flagged = !cell.is_flagged;
        Ok(if cell.is_flagged {
            self.flagged_count += 1;
            FlagResult::Flagged
        } else {
            self.flagged_count -= 1;
            FlagResult::Unflagged
        })
    }

    /// Every mine position in row-major order, for disclosure after a loss.
    pub fn reveal_all_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        iter_coords(self.size()).filter(move |&coords| self.cells[coords.to_nd_index()].is_mine)
    }

    /// Flood fill over the zero-count region using a work-list, each cell is opened at most once.
    fn cascade_from(&mut self, origin: Coord2, revealed: &mut Vec<RevealedCell>) {
        let mut to_visit: VecDeque<_> = self.hidden_neighbors(origin).collect();

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = self.cells[visit_coords.to_nd_index()];
            // may have been queued twice before it was opened
            if cell.is_revealed || cell.is_flagged {
                continue;
            }

            self.open(visit_coords, revealed);

            if !cell.is_mine && cell.adjacent_mine_count == 0 {
                to_visit.extend(self.hidden_neighbors(visit_coords));
            }
        }
    }

    fn open(&mut self, coords: Coord2, revealed: &mut Vec<RevealedCell>) {
        let cell = &mut self.cells[coords.to_nd_index()];
        cell.is_revealed = true;
        self.revealed_count += 1;
        revealed.push(RevealedCell {
            coords,
            content: cell.content(),
        });
    }

    fn hidden_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        neighbors(coords, self.size())
            .filter(move |&pos| self.cells[pos.to_nd_index()].is_hidden())
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

/// Serialized form of [`Board`], checked for consistency before it becomes one.
#[derive(Deserialize)]
struct BoardRepr {
    config: GameConfig,
    cells: Array2<Cell>,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    state: EngineState,
    triggered_mine: Option<Coord2>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    fn try_from(repr: BoardRepr) -> Result<Self> {
        let config = repr.config.validate()?;
        let (rows, cols) = repr.cells.dim();
        if (rows, cols) != (usize::from(config.rows()), usize::from(config.cols())) {
            return Err(GameError::InvalidBoardShape);
        }

        let count = |pred: fn(&Cell) -> bool| repr.cells.iter().filter(|cell| pred(cell)).count();
        if count(|cell| cell.is_mine) != usize::from(config.mines)
            || count(|cell| cell.is_revealed) != usize::from(repr.revealed_count.0)
            || count(|cell| cell.is_flagged) != usize::from(repr.flagged_count.0)
        {
            return Err(GameError::InvalidBoardShape);
        }
        if let Some((row, col)) = repr.triggered_mine
            && (row >= config.rows() || col >= config.cols())
        {
            return Err(GameError::InvalidBoardShape);
        }

        Ok(Self {
            config,
            cells: repr.cells,
            revealed_count: repr.revealed_count,
            flagged_count: repr.flagged_count,
            state: repr.state,
            triggered_mine: repr.triggered_mine,
        })
    }
}
