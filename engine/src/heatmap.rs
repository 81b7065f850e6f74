use crate::grid::Grid;

/// How many observed generations each cell has spent alive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeatMap {
    tallies: Vec<Vec<u32>>,
    max: u32,
}

impl HeatMap {
    pub fn from_grid(grid: &Grid) -> Self {
        let tallies: Vec<Vec<u32>> = grid
            .rows()
            .map(|row| row.iter().map(|cell| u32::from(cell.is_alive())).collect())
            .collect();
        let max = tallies.iter().flatten().copied().max().unwrap_or(0);
        HeatMap { tallies, max }
    }

    /// Count one more generation. A grid of another shape starts the map over.
    pub fn record(&mut self, grid: &Grid) {
        if self.dimensions() != grid.dimensions() {
            *self = HeatMap::from_grid(grid);
            return;
        }
        for (tallies, cells) in self.tallies.iter_mut().zip(grid.rows()) {
            for (tally, cell) in tallies.iter_mut().zip(cells) {
                if cell.is_alive() {
                    *tally = tally.saturating_add(1);
                    self.max = self.max.max(*tally);
                }
            }
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.tallies.len(), self.tallies.first().map_or(0, Vec::len))
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.tallies.get(row).and_then(|row| row.get(col)).copied()
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Tally scaled into `[0, 1]` against the hottest cell.
    pub fn intensity(&self, row: usize, col: usize) -> f32 {
        match (self.get(row, col), self.max) {
            (Some(tally), max) if max > 0 => tally as f32 / max as f32,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_seeded_cells() {
        let grid: Grid = "#..\n...\n..#".parse().unwrap();
        let heat = HeatMap::from_grid(&grid);
        assert_eq!(heat.dimensions(), (3, 3));
        assert_eq!(heat.get(0, 0), Some(1));
        assert_eq!(heat.get(1, 1), Some(0));
        assert_eq!(heat.max(), 1);
        assert_eq!(heat.get(3, 0), None);
    }

    #[test]
    fn accumulates_across_generations() {
        let mut blinker: Grid = ".....\n.....\n.###.\n.....\n.....".parse().unwrap();
        let mut heat = HeatMap::from_grid(&blinker);
        for _ in 0..4 {
            blinker = blinker.step();
            heat.record(&blinker);
        }
        // the pivot is alive in every phase
        assert_eq!(heat.get(2, 2), Some(5));
        assert_eq!(heat.get(2, 1), Some(3));
        assert_eq!(heat.get(1, 2), Some(2));
        assert_eq!(heat.max(), 5);
        assert_eq!(heat.intensity(2, 2), 1.0);
        assert_eq!(heat.intensity(0, 0), 0.0);
    }

    #[test]
    fn empty_map_has_zero_intensity() {
        let grid: Grid = "...\n...\n...".parse().unwrap();
        let heat = HeatMap::from_grid(&grid);
        assert_eq!(heat.intensity(1, 1), 0.0);
        assert_eq!(HeatMap::default().intensity(0, 0), 0.0);
    }

    #[test]
    fn reshaped_grid_restarts_map() {
        let small: Grid = "###\n###\n###".parse().unwrap();
        let mut heat = HeatMap::from_grid(&small);
        heat.record(&small);
        assert_eq!(heat.max(), 2);

        let larger: Grid = "....\n....\n....\n...#".parse().unwrap();
        heat.record(&larger);
        assert_eq!(heat.dimensions(), (4, 4));
        assert_eq!(heat.max(), 1);
        assert_eq!(heat.get(3, 3), Some(1));
    }
}
