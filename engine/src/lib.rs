/*!
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* The grid is bounded: cells past the edge count as dead, nothing wraps around.
*/

pub mod config;
pub mod dimensions;
pub mod error;
pub mod grid;
pub mod heatmap;
pub mod simulation;

pub use config::SimulationConfig;
pub use dimensions::{validate_dimensions, Bounds, Dimensions};
pub use error::{Axis, ConfigError, DimensionError, GridError};
pub use grid::{CellState, Grid};
pub use heatmap::HeatMap;
pub use simulation::{DimensionField, DisplayMode, FieldState, SimulationController};
