use rand::rngs::ThreadRng;
use rand::Rng;

use crate::config::SimulationConfig;
use crate::dimensions::{Bounds, Dimensions};
use crate::error::{Axis, DimensionError, GridError};
use crate::grid::{CellState, Grid};
use crate::heatmap::HeatMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Regular,
    Heatmap,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Regular => DisplayMode::Heatmap,
            DisplayMode::Heatmap => DisplayMode::Regular,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Unvalidated,
    Valid,
    Invalid,
}

/// One dimension text box: what the user typed and whether it was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionField {
    raw: String,
    state: FieldState,
    candidate: usize,
    error: Option<DimensionError>,
}

impl DimensionField {
    fn new(candidate: usize) -> Self {
        DimensionField {
            raw: String::new(),
            state: FieldState::Unvalidated,
            candidate,
            error: None,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    /// Last value that passed validation, or the default before any edit.
    pub fn candidate(&self) -> usize {
        self.candidate
    }

    pub fn error(&self) -> Option<&DimensionError> {
        self.error.as_ref()
    }
}

/// Session state behind the simulation view.
///
/// Every handler runs to completion and leaves the derived state (living cell
/// count, heat map, validation error) consistent with the grid it owns.
pub struct SimulationController<R = ThreadRng> {
    config: SimulationConfig,
    rng: R,
    active: bool,
    grid: Grid,
    living_cells: usize,
    generation: u64,
    heat_map: HeatMap,
    display_mode: DisplayMode,
    height: DimensionField,
    width: DimensionField,
}

impl SimulationController<ThreadRng> {
    pub fn new(config: SimulationConfig) -> Self {
        Self::with_rng(config, rand::rng())
    }
}

impl Default for SimulationController<ThreadRng> {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl<R: Rng> SimulationController<R> {
    pub fn with_rng(config: SimulationConfig, rng: R) -> Self {
        let height = DimensionField::new(config.default_height);
        let width = DimensionField::new(config.default_width);
        Self {
            config,
            rng,
            active: false,
            grid: Grid::default(),
            living_cells: 0,
            generation: 0,
            heat_map: HeatMap::default(),
            display_mode: DisplayMode::default(),
            height,
            width,
        }
    }

    /// Seed the default grid once per session. Returns `false` if already active.
    pub fn activate(&mut self) -> Result<bool, GridError> {
        if self.active {
            return Ok(false);
        }
        let dimensions = self.config.default_dimensions()?;
        self.reseed(dimensions);
        self.active = true;
        Ok(true)
    }

    pub fn on_cell_clicked(&mut self, row: usize, col: usize) -> Result<CellState, GridError> {
        let state = self.grid.toggle(row, col).inspect_err(|err| {
            log::warn!("ignoring click: {err}");
        })?;
        self.living_cells = self.grid.count_living();
        Ok(state)
    }

    pub fn on_step_requested(&mut self) {
        if !self.grid.advance() {
            log::debug!("generation {} is a still life", self.generation);
        }
        self.generation += 1;
        self.heat_map.record(&self.grid);
        self.living_cells = self.grid.count_living();
    }

    pub fn on_reset_requested(&mut self) -> Result<(), GridError> {
        let dimensions = self.config.default_dimensions()?;
        self.height = DimensionField::new(dimensions.height());
        self.width = DimensionField::new(dimensions.width());
        self.reseed(dimensions);
        self.active = true;
        Ok(())
    }

    pub fn on_height_input_changed(&mut self, raw: &str) {
        self.on_input_changed(Axis::Height, raw);
    }

    pub fn on_width_input_changed(&mut self, raw: &str) {
        self.on_input_changed(Axis::Width, raw);
    }

    fn on_input_changed(&mut self, axis: Axis, raw: &str) {
        let bounds = self.bounds();
        let (field, counterpart) = match axis {
            Axis::Height => (&mut self.height, self.width.candidate),
            Axis::Width => (&mut self.width, self.height.candidate),
        };
        field.raw = raw.to_owned();

        let proposed = bounds.parse(axis, raw).and_then(|value| match axis {
            Axis::Height => bounds.validate(value as i64, counterpart as i64),
            Axis::Width => bounds.validate(counterpart as i64, value as i64),
        });
        match proposed {
            Ok(dimensions) => {
                field.candidate = match axis {
                    Axis::Height => dimensions.height(),
                    Axis::Width => dimensions.width(),
                };
                field.state = FieldState::Valid;
                field.error = None;
            }
            Err(err) => {
                log::debug!("rejected {axis} input {raw:?}: {err}");
                field.state = FieldState::Invalid;
                field.error = Some(err);
            }
        }
    }

    /// Reseed at the pending dimensions. Returns `false` while either field is invalid.
    pub fn on_submit(&mut self) -> bool {
        match self.pending_dimensions() {
            Some(dimensions) => {
                self.reseed(dimensions);
                self.active = true;
                true
            }
            None => false,
        }
    }

    pub fn on_display_mode_toggled(&mut self) -> DisplayMode {
        self.display_mode = self.display_mode.toggled();
        log::info!("display mode: {:?}", self.display_mode);
        self.display_mode
    }

    fn reseed(&mut self, dimensions: Dimensions) {
        self.grid = Grid::seed(dimensions, self.config.alive_ratio, &mut self.rng);
        self.living_cells = self.grid.count_living();
        self.generation = 0;
        self.heat_map = HeatMap::from_grid(&self.grid);
        log::info!(
            "seeded {}x{} grid with {} living cells",
            dimensions.height(),
            dimensions.width(),
            self.living_cells
        );
    }

    pub fn can_submit(&self) -> bool {
        self.height.state != FieldState::Invalid && self.width.state != FieldState::Invalid
    }

    /// The size a submit would produce, if both fields are acceptable.
    pub fn pending_dimensions(&self) -> Option<Dimensions> {
        if !self.can_submit() {
            return None;
        }
        self.bounds()
            .validate(self.height.candidate as i64, self.width.candidate as i64)
            .ok()
    }

    pub fn bounds(&self) -> Bounds {
        self.config.bounds()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn living_cells(&self) -> usize {
        self.living_cells
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn heat_map(&self) -> &HeatMap {
        &self.heat_map
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn height_field(&self) -> &DimensionField {
        &self.height
    }

    pub fn width_field(&self) -> &DimensionField {
        &self.width
    }

    pub fn validation_error(&self) -> Option<&DimensionError> {
        self.height.error().or(self.width.error())
    }
}
