use serde::{Deserialize, Serialize};

/// One grid position as tracked by the engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    /// Mines among the Moore neighbors, always 0 for mine cells.
    pub adjacent_mine_count: u8,
}

impl Cell {
    /// What the cell shows once opened.
    pub const fn content(self) -> CellContent {
        if self.is_mine {
            CellContent::Mine
        } else {
            CellContent::Count(self.adjacent_mine_count)
        }
    }

    pub const fn is_hidden(self) -> bool {
        !self.is_revealed && !self.is_flagged
    }
}

/// Player-visible content of an opened cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Mine,
    Count(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_prefers_mine_over_count() {
        let cell = Cell {
            is_mine: true,
            ..Default::default()
        };
        assert_eq!(cell.content(), CellContent::Mine);

        let cell = Cell {
            adjacent_mine_count: 3,
            ..Default::default()
        };
        assert_eq!(cell.content(), CellContent::Count(3));
    }

    #[test]
    fn flagged_cell_is_not_hidden() {
        let cell = Cell {
            is_flagged: true,
            ..Default::default()
        };
        assert!(!cell.is_hidden());
        assert!(Cell::default().is_hidden());
    }
}
