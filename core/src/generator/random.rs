use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Uniform random placement that keeps the first-clicked cell and its whole
/// 3x3 neighborhood mine-free by rejecting draws inside the zone.
#[derive(Clone, Debug)]
pub struct RandomMineFieldGenerator {
    rng: SmallRng,
}

impl RandomMineFieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

fn in_exclusion_zone(coords: Coord2, exclude: Coord2) -> bool {
    coords.0.abs_diff(exclude.0) <= 1 && coords.1.abs_diff(exclude.1) <= 1
}

impl MineFieldGenerator for RandomMineFieldGenerator {
    fn generate(&mut self, config: BoardConfig, exclude: Coord2) -> Result<MineField> {
        config.validate()?;

        // Checked up front: with the zone reserved the draw loop below could
        // otherwise spin forever looking for a free cell.
        if config.mines >= config.placeable_cells() {
            return Err(GameError::InsufficientCapacity);
        }

        let (rows, columns) = config.size;
        let mut mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut placed: CellCount = 0;

        while placed < config.mines {
            let coords = (
                self.rng.random_range(0..rows),
                self.rng.random_range(0..columns),
            );

            if mask[coords.to_nd_index()] || in_exclusion_zone(coords, exclude) {
                continue;
            }

            mask[coords.to_nd_index()] = true;
            placed += 1;
        }

        log::debug!("placed {} mines avoiding zone around {:?}", placed, exclude);
        Ok(MineField::from_mask(mask))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exact_mine_count() {
        let mut generator = RandomMineFieldGenerator::new(7);
        let field = generator
            .generate(BoardConfig::new((10, 15), 27), (5, 5))
            .unwrap();

        assert_eq!(field.mine_count(), 27);
        assert_eq!(field.mine_coords().count(), 27);
    }

    #[test]
    fn exclusion_zone_stays_clear() {
        for seed in 0..20 {
            let mut generator = RandomMineFieldGenerator::new(seed);
            let field = generator
                .generate(BoardConfig::new((10, 15), 27), (5, 5))
                .unwrap();

            for row in 4..=6 {
                for col in 4..=6 {
                    assert!(!field.contains_mine((row, col)), "seed {} hit zone", seed);
                }
            }
            assert!(!field.contains_mine((5, 5)));
        }
    }

    #[test]
    fn exclusion_zone_clips_at_the_corner() {
        let mut generator = RandomMineFieldGenerator::new(3);
        let field = generator
            .generate(BoardConfig::new((4, 4), 5), (0, 0))
            .unwrap();

        for row in 0..=1 {
            for col in 0..=1 {
                assert!(!field.contains_mine((row, col)));
            }
        }
        assert_eq!(field.mine_count(), 5);
    }

    #[test]
    fn single_cell_board_cannot_fit_a_mine() {
        let mut generator = RandomMineFieldGenerator::new(1);
        let result = generator.generate(BoardConfig::new((1, 1), 1), (0, 0));
        assert_eq!(result, Err(GameError::InsufficientCapacity));
    }

    #[test]
    fn capacity_check_rejects_boundary_count() {
        // 4x4 board: 16 cells, 7 placeable once the zone is reserved.
        let mut generator = RandomMineFieldGenerator::new(1);
        assert_eq!(
            generator.generate(BoardConfig::new((4, 4), 7), (1, 1)),
            Err(GameError::InsufficientCapacity)
        );
        assert!(generator.generate(BoardConfig::new((4, 4), 6), (1, 1)).is_ok());
    }

    #[test]
    fn zero_dimension_is_rejected_before_placement() {
        let mut generator = RandomMineFieldGenerator::new(1);
        assert_eq!(
            generator.generate(BoardConfig::new((0, 8), 1), (0, 0)),
            Err(GameError::InvalidDimension)
        );
    }

    #[test]
    fn same_seed_same_layout() {
        let config = BoardConfig::new((8, 8), 10);
        let a = RandomMineFieldGenerator::new(42).generate(config, (3, 3)).unwrap();
        let b = RandomMineFieldGenerator::new(42).generate(config, (3, 3)).unwrap();
        assert_eq!(a, b);
    }
}
