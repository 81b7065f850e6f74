//! Property tests for the grid engine and the simulation controller.

use life_engine::{validate_dimensions, CellState, Grid, SimulationConfig, SimulationController};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded(height: usize, width: usize, ratio: f64, seed: u64) -> Grid {
    let dims = validate_dimensions(height as i64, width as i64).unwrap();
    Grid::seed(dims, ratio, &mut StdRng::seed_from_u64(seed))
}

/// Reference transition: counts neighbors by brute force over every other cell.
fn brute_force_next(grid: &Grid, row: usize, col: usize) -> CellState {
    let (height, width) = grid.dimensions();
    let mut neighbors = 0;
    for r in 0..height {
        for c in 0..width {
            let near = r.abs_diff(row) <= 1 && c.abs_diff(col) <= 1;
            if near && (r, c) != (row, col) && grid.get(r, c) == Some(CellState::Alive) {
                neighbors += 1;
            }
        }
    }
    let alive = grid.get(row, col) == Some(CellState::Alive);
    CellState::from(matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3)))
}

proptest! {
    #[test]
    fn seed_produces_requested_shape(height in 3usize..=40, width in 3usize..=40, seed in any::<u64>()) {
        let grid = seeded(height, width, 0.05, seed);
        prop_assert_eq!(grid.dimensions(), (height, width));
        prop_assert!(grid.rows().all(|row| row.len() == width));
    }

    #[test]
    fn out_of_range_dimensions_are_rejected(height in -100i64..3, width in 41i64..200) {
        prop_assert!(validate_dimensions(height, 20).is_err());
        prop_assert!(validate_dimensions(20, width).is_err());
    }

    #[test]
    fn step_matches_brute_force_rules(
        height in 3usize..=12,
        width in 3usize..=12,
        ratio in 0.0f64..=1.0,
        seed in any::<u64>()
    ) {
        let grid = seeded(height, width, ratio, seed);
        let next = grid.step();
        let mut expected_living = 0;
        for row in 0..height {
            for col in 0..width {
                let expected = brute_force_next(&grid, row, col);
                prop_assert_eq!(next.get(row, col), Some(expected));
                if expected.is_alive() {
                    expected_living += 1;
                }
            }
        }
        prop_assert_eq!(next.count_living(), expected_living);
    }

    #[test]
    fn toggle_is_an_involution(seed in any::<u64>(), row in 0usize..15, col in 0usize..15) {
        let grid = seeded(15, 15, 0.4, seed);
        let mut toggled = grid.clone();
        toggled.toggle(row, col).unwrap();
        toggled.toggle(row, col).unwrap();
        prop_assert_eq!(toggled, grid);
    }

    #[test]
    fn living_count_never_drifts(seed in any::<u64>(), clicks in prop::collection::vec((0usize..20, 0usize..20), 0..30), steps in 0usize..5) {
        let config = SimulationConfig { alive_ratio: 0.3, ..SimulationConfig::default() };
        let mut sim = SimulationController::with_rng(config, StdRng::seed_from_u64(seed));
        sim.activate().unwrap();
        for (row, col) in clicks {
            sim.on_cell_clicked(row, col).unwrap();
            prop_assert_eq!(sim.living_cells(), sim.grid().count_living());
        }
        for _ in 0..steps {
            sim.on_step_requested();
            prop_assert_eq!(sim.living_cells(), sim.grid().count_living());
        }
    }

    #[test]
    fn reset_always_returns_to_default_size(height in 3usize..=40, width in 3usize..=40, seed in any::<u64>()) {
        let mut sim = SimulationController::with_rng(SimulationConfig::default(), StdRng::seed_from_u64(seed));
        sim.activate().unwrap();
        sim.on_height_input_changed(&height.to_string());
        sim.on_width_input_changed(&width.to_string());
        prop_assert!(sim.on_submit());
        prop_assert_eq!(sim.grid().dimensions(), (height, width));
        sim.on_reset_requested().unwrap();
        prop_assert_eq!(sim.grid().dimensions(), (20, 20));
    }

    #[test]
    fn arbitrary_text_never_panics_or_resizes(raw in ".*") {
        let mut sim = SimulationController::with_rng(SimulationConfig::default(), StdRng::seed_from_u64(1));
        sim.activate().unwrap();
        sim.on_height_input_changed(&raw);
        prop_assert_eq!(sim.grid().dimensions(), (20, 20));
    }
}
