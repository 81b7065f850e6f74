use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::dimensions::{Bounds, Dimensions};
use crate::error::GridError;
use crate::grid::CellState::{Alive, Dead};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            Alive => Dead,
            Dead => Alive,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Alive
        } else {
            Dead
        }
    }
}

/// A bounded, non-wrapping grid of cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: Vec<Vec<CellState>>,
}

impl Grid {
    /// An all-dead grid.
    pub fn new(dimensions: Dimensions) -> Self {
        Grid {
            cells: vec![vec![Dead; dimensions.width()]; dimensions.height()],
        }
    }

    /// Each cell is independently alive with probability `alive_ratio`.
    pub fn seed<R: Rng + ?Sized>(dimensions: Dimensions, alive_ratio: f64, rng: &mut R) -> Self {
        let cells = (0..dimensions.height())
            .map(|_| {
                (0..dimensions.width())
                    .map(|_| CellState::from(rng.random::<f64>() < alive_ratio))
                    .collect()
            })
            .collect();
        Grid { cells }
    }

    /// Validate `height` x `width` against the default bounds and seed with the thread rng.
    pub fn random(height: i64, width: i64, alive_ratio: f64) -> Result<Self, GridError> {
        let dimensions = Bounds::default().validate(height, width)?;
        Ok(Grid::seed(dimensions, alive_ratio, &mut rand::rng()))
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        self.cells.get(row).and_then(|cells| cells.get(col)).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn count_living(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_alive())
            .count()
    }

    /// Flip a single cell and return its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<CellState, GridError> {
        let (height, width) = self.dimensions();
        match self.cells.get_mut(row).and_then(|cells| cells.get_mut(col)) {
            Some(cell) => {
                *cell = cell.toggled();
                Ok(*cell)
            }
            None => Err(GridError::OutOfBounds {
                row,
                col,
                height,
                width,
            }),
        }
    }

    /// Compute the next generation without touching `self`.
    pub fn step(&self) -> Grid {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| {
                        match (cell, self.alive_neighbors(row, col)) {
                            (Alive, 2..=3) => Alive, // Survives
                            (Dead, 3) => Alive,      // Becomes alive
                            _ => Dead,               // Dies or remains dead
                        }
                    })
                    .collect()
            })
            .collect();
        Grid { cells }
    }

    /// Advance the grid by one step in place. Returns `false` if nothing changed.
    pub fn advance(&mut self) -> bool {
        let next = self.step();
        if *self == next {
            return false;
        }
        *self = next;
        true
    }

    /// Count the alive cells among the up to eight neighbors inside the grid.
    pub fn alive_neighbors(&self, row: usize, col: usize) -> usize {
        let mut count = 0;

        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let (Some(neighbor_row), Some(neighbor_col)) =
                    (row.checked_add_signed(dr), col.checked_add_signed(dc))
                else {
                    continue;
                };

                if self.get(neighbor_row, neighbor_col) == Some(Alive) {
                    count += 1;
                }
            }
        }

        count
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// Parses `.` as dead and `#` or `O` as alive, one line per row.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        let mut cells: Vec<Vec<CellState>> = Vec::new();

        for (index, line) in pattern.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .map(|ch| match ch {
                    '.' => Ok(Dead),
                    '#' | 'O' => Ok(Alive),
                    other => Err(GridError::MalformedPattern {
                        line: index + 1,
                        reason: format!("unexpected character `{other}`"),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;

            if let Some(first) = cells.first() {
                if first.len() != row.len() {
                    return Err(GridError::MalformedPattern {
                        line: index + 1,
                        reason: format!("expected {} cells, found {}", first.len(), row.len()),
                    });
                }
            }
            cells.push(row);
        }

        if cells.is_empty() {
            return Err(GridError::MalformedPattern {
                line: 0,
                reason: "pattern has no rows".to_owned(),
            });
        }
        Ok(Grid { cells })
    }
}
