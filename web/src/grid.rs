use minefield_core as game;
use game::ToNdIndex;
use ndarray::Array2;

/// What a single grid element currently shows.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) enum ViewCell {
    #[default]
    Hidden,
    Revealed(u8),
    Flagged,
    Mine,
    TriggeredMine,
}

impl ViewCell {
    pub(crate) fn label(self) -> String {
        use ViewCell::*;
        match self {
            Hidden | Revealed(0) => String::new(),
            Revealed(count) => count.to_string(),
            Flagged => "🚩".to_string(),
            Mine | TriggeredMine => "💣".to_string(),
        }
    }
}

/// Display state of the whole grid, kept in sync by applying render deltas.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ViewGrid {
    cells: Array2<ViewCell>,
    status: game::GameStatus,
}

impl ViewGrid {
    pub(crate) fn new(size: game::Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
            status: game::GameStatus::Playing,
        }
    }

    pub(crate) fn cell(&self, coords: game::Coord2) -> ViewCell {
        self.cells[coords.to_nd_index()]
    }

    pub(crate) fn status(&self) -> game::GameStatus {
        self.status
    }
}

impl game::RenderSink for ViewGrid {
    fn apply(&mut self, delta: game::RenderDelta) {
        use game::RenderDelta::*;

        log::trace!("render delta: {:?}", delta);
        match delta {
            Revealed { coords, content } => {
                self.cells[coords.to_nd_index()] = match content {
                    game::CellContent::Mine => ViewCell::TriggeredMine,
                    game::CellContent::Count(count) => ViewCell::Revealed(count),
                };
            }
            FlagChanged { coords, flagged } => {
                self.cells[coords.to_nd_index()] = if flagged {
                    ViewCell::Flagged
                } else {
                    ViewCell::Hidden
                };
            }
            MineDisclosed { coords } => {
                let cell = &mut self.cells[coords.to_nd_index()];
                if *cell != ViewCell::TriggeredMine {
                    *cell = ViewCell::Mine;
                }
            }
            StatusChanged(status) => self.status = status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(size: game::Coord2, mines: &[game::Coord2]) -> game::GameSession {
        game::GameSession::from_layout(game::MineLayout::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn loss_marks_triggered_and_disclosed_mines() {
        let mut game = session((2, 2), &[(0, 0), (1, 1)]);
        let mut grid = ViewGrid::new((2, 2));

        game.toggle_flag((0, 0), &mut grid).unwrap();
        assert_eq!(grid.cell((0, 0)), ViewCell::Flagged);
        game.reveal((1, 1), &mut grid).unwrap();

        assert_eq!(grid.cell((1, 1)), ViewCell::TriggeredMine);
        assert_eq!(grid.cell((0, 0)), ViewCell::Mine);
        assert_eq!(grid.cell((0, 1)), ViewCell::Hidden);
        assert_eq!(grid.status(), game::GameStatus::Lost);
    }

    #[test]
    fn cascade_fills_numbers_and_blanks() {
        let mut game = session((3, 3), &[(2, 2)]);
        let mut grid = ViewGrid::new((3, 3));

        game.reveal((0, 0), &mut grid).unwrap();

        assert_eq!(grid.cell((0, 0)), ViewCell::Revealed(0));
        assert_eq!(grid.cell((1, 1)), ViewCell::Revealed(1));
        assert_eq!(grid.cell((2, 2)), ViewCell::Hidden);
        assert_eq!(grid.status(), game::GameStatus::Won);
    }

    #[test]
    fn labels_match_glyphs() {
        assert_eq!(ViewCell::Hidden.label(), "");
        assert_eq!(ViewCell::Revealed(0).label(), "");
        assert_eq!(ViewCell::Revealed(3).label(), "3");
        assert_eq!(ViewCell::Flagged.label(), "🚩");
        assert_eq!(ViewCell::TriggeredMine.label(), "💣");
    }
}
