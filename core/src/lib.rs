#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use render::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod render;
mod session;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    /// The classic 10×10 board with 15 mines.
    pub const DEFAULT: Self = Self::new_unchecked((10, 10), 15);

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        Self::new_unchecked((rows, cols), mines).validate()
    }

    pub fn validate(self) -> Result<Self> {
        let (rows, cols) = self.size;
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidSize);
        }
        if self.mines >= self.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(self)
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        (self.size.0 as CellCount) * (self.size.1 as CellCount)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Where the mines are, fixed for the lifetime of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Wraps a mask whose dimensions already fit in [`Coord`].
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a layout from explicit positions, duplicates count once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let config = GameConfig::new_unchecked(size, 0).validate()?;
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfRange);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        let layout = Self::from_mine_mask(mine_mask);
        if layout.mine_count >= config.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(layout)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn mine_coords(&self) -> Vec<Coord2> {
        iter_coords(self.size())
            .filter(|&coords| self[coords])
            .collect()
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        neighbors(coords, self.size())
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// Status tag handed back to the presentation after a reveal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealStatus {
    Continue,
    MineHit,
    Win,
}

/// A cell whose display changed because of a reveal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedCell {
    pub coords: Coord2,
    pub content: CellContent,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealResult {
    /// Newly revealed cells in the order they were opened.
    pub revealed: Vec<RevealedCell>,
    pub status: RevealStatus,
}

impl RevealResult {
    pub(crate) const fn unchanged() -> Self {
        Self {
            revealed: Vec::new(),
            status: RevealStatus::Continue,
        }
    }

    /// Whether this outcome could have caused an update to the game
    pub fn has_update(&self) -> bool {
        !self.revealed.is_empty()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagResult {
    Unchanged,
    Flagged,
    Unflagged,
}

impl FlagResult {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        match self {
            Self::Unchanged => false,
            Self::Flagged | Self::Unflagged => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_ten_by_ten_with_fifteen_mines() {
        let config = GameConfig::default();
        assert_eq!((config.rows(), config.cols(), config.mines), (10, 10, 15));
        assert_eq!(config.safe_cells(), 85);
        assert_eq!(config.validate(), Ok(config));
    }

    #[test]
    fn config_rejects_empty_or_full_boards() {
        assert_eq!(GameConfig::new(0, 5, 1), Err(GameError::InvalidSize));
        assert_eq!(GameConfig::new(5, 0, 1), Err(GameError::InvalidSize));
        assert_eq!(GameConfig::new(2, 2, 4), Err(GameError::TooManyMines));
        assert!(GameConfig::new(2, 2, 3).is_ok());
        assert!(GameConfig::new(1, 1, 0).is_ok());
    }

    #[test]
    fn layout_from_coords_counts_distinct_mines() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (2, 2), (0, 0)]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.safe_cell_count(), 7);
        assert_eq!(layout.mine_coords(), [(0, 0), (2, 2)]);
        assert_eq!(layout.adjacent_mine_count((1, 1)), 2);
        assert_eq!(layout.adjacent_mine_count((0, 2)), 0);
    }

    #[test]
    fn layout_from_coords_rejects_bad_input() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::OutOfRange)
        );
        assert_eq!(
            MineLayout::from_mine_coords((1, 2), &[(0, 0), (0, 1)]),
            Err(GameError::TooManyMines)
        );
    }

    #[test]
    fn flag_result_reports_updates() {
        assert!(!FlagResult::Unchanged.has_update());
        assert!(FlagResult::Flagged.has_update());
        assert!(FlagResult::Unflagged.has_update());
    }
}
