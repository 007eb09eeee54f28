//! Tests for terrain layout generation

#[cfg(test)]
mod tests {
    use crate::{classic_config, unit_config};
    use gridhunt::GameError;
    use gridhunt::game::{LayoutGenerator, LayoutStrategy, TerrainKind};
    use gridhunt::geo::GridCell;

    // Tests the classic layout places seven traps and the flag at (4,3)
    // Verified by swapping row and column of the classic cells
    #[test]
    fn test_classic_layout_cells() {
        let mut generator = LayoutGenerator::new(LayoutStrategy::Classic, &classic_config()).unwrap();
        let terrain = generator.generate();

        assert_eq!(terrain.count(TerrainKind::Trap), 7);
        assert_eq!(terrain.cells_of(TerrainKind::Flag), vec![GridCell::new(4, 3)]);
        for cell in [(1, 3), (2, 3), (3, 3), (3, 2), (1, 1), (3, 0), (4, 0)] {
            assert_eq!(
                terrain.get(GridCell::new(cell.0, cell.1)),
                Some(TerrainKind::Trap),
                "expected trap at {cell:?}"
            );
        }
        assert_eq!(terrain.get(GridCell::new(2, 2)), Some(TerrainKind::Empty));
    }

    // Tests the classic layout refuses grids other than 5×5
    // Verified by removing the size check
    #[test]
    fn test_classic_layout_requires_five_by_five() {
        let result = LayoutGenerator::new(LayoutStrategy::Classic, &unit_config(6));
        assert!(matches!(result, Err(GameError::InvalidParameter { parameter: "layout", .. })));
    }

    // Tests random layouts hold the requested traps, one flag and a clear start cell
    // Verified by letting the sampler include the start cell
    #[test]
    fn test_random_layout_counts() {
        let config = unit_config(7);
        let strategy = LayoutStrategy::Random { traps: 20, seed: 3 };
        let mut generator = LayoutGenerator::new(strategy, &config).unwrap();

        for _ in 0..50 {
            let terrain = generator.generate();
            assert_eq!(terrain.count(TerrainKind::Trap), 20);
            assert_eq!(terrain.count(TerrainKind::Flag), 1);
            assert_eq!(terrain.get(config.start_cell()), Some(TerrainKind::Empty));
        }
    }

    // Tests a full board leaves only the start cell empty
    // Verified by shifting picks without skipping the start index
    #[test]
    fn test_random_layout_full_board() {
        let config = unit_config(3);
        let strategy = LayoutStrategy::Random { traps: 7, seed: 1 };
        let terrain = LayoutGenerator::new(strategy, &config).unwrap().generate();

        assert_eq!(terrain.cells_of(TerrainKind::Empty), vec![GridCell::new(1, 1)]);
        assert_eq!(terrain.count(TerrainKind::Flag), 1);
    }

    // Tests the same seed reproduces layouts and resets draw new ones
    // Verified by reseeding the generator on every call
    #[test]
    fn test_random_layout_is_seeded() {
        let config = unit_config(5);
        let strategy = LayoutStrategy::Random { traps: 7, seed: 99 };

        let mut first = LayoutGenerator::new(strategy, &config).unwrap();
        let mut second = LayoutGenerator::new(strategy, &config).unwrap();

        let a1 = first.generate();
        let a2 = first.generate();
        assert_eq!(a1, second.generate());
        assert_eq!(a2, second.generate());
        assert_ne!(a1, a2);
        assert_eq!(first.strategy(), strategy);
    }

    // Tests boards too small for the requested traps are rejected
    // Verified by not reserving the start and flag cells
    #[test]
    fn test_random_layout_capacity() {
        let too_many = LayoutStrategy::Random { traps: 8, seed: 0 };
        assert!(LayoutGenerator::new(too_many, &unit_config(3)).is_err());

        let single_cell = LayoutStrategy::Random { traps: 0, seed: 0 };
        assert!(LayoutGenerator::new(single_cell, &unit_config(1)).is_err());
    }
}
