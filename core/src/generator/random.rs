use super::*;

/// Purely random placement: draw a uniform `(row, col)` pair and retry while it already holds a mine.
///
/// Every set of distinct positions is equally likely. The retry count stays small as long as the
/// board is not close to full, which holds for the fixed configurations this game uses.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        use rand::prelude::*;

        let config = config.validate()?;
        let (rows, cols) = config.size;
        let mut mines: Array2<bool> = Array2::default(config.size.to_nd_index());

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_placed: CellCount = 0;
        let mut draws: u32 = 0;
        while mines_placed < config.mines {
            let coords: Coord2 = (rng.random_range(0..rows), rng.random_range(0..cols));
            draws += 1;
            let tile = &mut mines[coords.to_nd_index()];
            if !*tile {
                *tile = true;
                mines_placed += 1;
            }
        }
        log::debug!(
            "placed {} mines on {}x{} in {} draws (seed {})",
            mines_placed,
            rows,
            cols,
            draws,
            self.seed
        );

        let layout = MineLayout::from_mine_mask(mines);
        // double check mine count
        if layout.mine_count() != config.mines {
            log::warn!(
                "Generated layout count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines
            );
        }
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exact_mine_count() {
        for seed in 0..32 {
            let layout = RandomLayoutGenerator::new(seed)
                .generate(GameConfig::DEFAULT)
                .unwrap();
            assert_eq!(layout.size(), (10, 10));
            assert_eq!(layout.mine_count(), 15);
            assert_eq!(layout.mine_coords().len(), 15);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = RandomLayoutGenerator::new(7).generate(GameConfig::DEFAULT);
        let b = RandomLayoutGenerator::new(7).generate(GameConfig::DEFAULT);
        assert_eq!(a, b);
    }

    #[test]
    fn nearly_full_board_still_terminates() {
        let config = GameConfig::new(3, 3, 8).unwrap();
        let layout = RandomLayoutGenerator::new(1).generate(config).unwrap();
        assert_eq!(layout.mine_count(), 8);
        assert_eq!(layout.safe_cell_count(), 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig::new_unchecked((2, 2), 4);
        assert_eq!(
            RandomLayoutGenerator::new(0).generate(config),
            Err(GameError::TooManyMines)
        );
    }
}
