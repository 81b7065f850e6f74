use eframe::egui;
use eframe::egui::{Color32, Pos2, Ui};
use life_engine::{CellState, DisplayMode, SimulationConfig, SimulationController};

const MAX_CELL_SIZE: f32 = 30.0;
const MIN_CELL_SIZE: f32 = 8.0;
const ALIVE: Color32 = Color32::WHITE;
const DEAD: Color32 = Color32::BLACK;
const HEAT_COLD: [u8; 3] = [20, 20, 60];
const HEAT_HOT: [u8; 3] = [255, 190, 40];

/// The simulation page: a controller plus the text the user is typing.
pub struct SimulationView {
    controller: SimulationController,
    height_text: String,
    width_text: String,
}

impl SimulationView {
    pub fn new(config: SimulationConfig) -> Self {
        let mut controller = SimulationController::new(config);
        if let Err(err) = controller.activate() {
            log::error!("failed to start simulation: {err}");
        }
        Self {
            controller,
            height_text: String::new(),
            width_text: String::new(),
        }
    }

    fn reset(&mut self) {
        if let Err(err) = self.controller.on_reset_requested() {
            log::error!("failed to reset grid: {err}");
        }
        self.height_text.clear();
        self.width_text.clear();
    }

    pub fn show(&mut self, ui: &mut Ui) {
        self.handle_keys(ui.ctx());

        ui.horizontal(|ui| {
            let height = ui.add(
                egui::TextEdit::singleline(&mut self.height_text)
                    .hint_text("Enter Height")
                    .desired_width(90.0),
            );
            if height.changed() {
                self.controller.on_height_input_changed(&self.height_text);
            }
            let width = ui.add(
                egui::TextEdit::singleline(&mut self.width_text)
                    .hint_text("Enter Width")
                    .desired_width(90.0),
            );
            if width.changed() {
                self.controller.on_width_input_changed(&self.width_text);
            }
            if ui
                .add_enabled(self.controller.can_submit(), egui::Button::new("Submit"))
                .clicked()
            {
                self.controller.on_submit();
            }
        });

        if let Some(err) = self.controller.validation_error() {
            ui.colored_label(Color32::LIGHT_RED, err.to_string());
        }
        ui.horizontal(|ui| {
            ui.label(format!("Living Cells: {}", self.controller.living_cells()));
            ui.separator();
            ui.label(format!("Generation: {}", self.controller.generation()));
        });

        ui.horizontal(|ui| {
            if ui.button("Reset Grid").clicked() {
                self.reset();
            }
            if ui.button("Next Frame").clicked() {
                self.controller.on_step_requested();
            }
            let toggle_label = match self.controller.display_mode() {
                DisplayMode::Regular => "Show Heatmap",
                DisplayMode::Heatmap => "Show Regular Colors",
            };
            if ui.button(toggle_label).clicked() {
                self.controller.on_display_mode_toggled();
            }
        });

        ui.add_space(8.0);
        self.draw_grid(ui);
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (step, reset, heatmap) = ctx.input(|input| {
            (
                input.key_pressed(egui::Key::N) || input.key_pressed(egui::Key::Space),
                input.key_pressed(egui::Key::R),
                input.key_pressed(egui::Key::H),
            )
        });
        if step {
            self.controller.on_step_requested();
        }
        if reset {
            self.reset();
        }
        if heatmap {
            self.controller.on_display_mode_toggled();
        }
    }

    fn draw_grid(&mut self, ui: &mut Ui) {
        let (height, width) = self.controller.grid().dimensions();
        if height == 0 || width == 0 {
            return;
        }

        let available = ui.available_size();
        let cell_size = cell_size(available.x, width);
        let (response, painter) = ui.allocate_painter(
            egui::vec2(cell_size * width as f32, cell_size * height as f32),
            egui::Sense::click(),
        );
        let origin = response.rect.min;

        let grid = self.controller.grid();
        let heat = self.controller.heat_map();
        let mode = self.controller.display_mode();
        for (row_index, row) in grid.rows().enumerate() {
            for (col_index, cell) in row.iter().enumerate() {
                let pos = origin + egui::vec2(col_index as f32 * cell_size, row_index as f32 * cell_size);
                let rect = egui::Rect::from_min_size(pos, egui::vec2(cell_size, cell_size));
                let color = match mode {
                    DisplayMode::Regular => regular_color(*cell),
                    DisplayMode::Heatmap => heat_color(heat.intensity(row_index, col_index)),
                };
                painter.rect_filled(rect, 0.0, color);
                painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, Color32::GRAY));
            }
        }

        if response.clicked() {
            let clicked = response
                .interact_pointer_pos()
                .and_then(|pos| cell_at(origin, pos, cell_size, (height, width)));
            if let Some((row, col)) = clicked {
                let _ = self.controller.on_cell_clicked(row, col);
            }
        }
    }
}

fn cell_size(available_width: f32, columns: usize) -> f32 {
    (available_width / columns as f32).clamp(MIN_CELL_SIZE, MAX_CELL_SIZE)
}

/// Map a pointer position to the `(row, col)` under it.
fn cell_at(origin: Pos2, pos: Pos2, cell_size: f32, (height, width): (usize, usize)) -> Option<(usize, usize)> {
    let offset = pos - origin;
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let row = (offset.y / cell_size) as usize;
    let col = (offset.x / cell_size) as usize;
    (row < height && col < width).then_some((row, col))
}

fn regular_color(cell: CellState) -> Color32 {
    match cell {
        CellState::Alive => ALIVE,
        CellState::Dead => DEAD,
    }
}

fn heat_color(intensity: f32) -> Color32 {
    let t = intensity.clamp(0.0, 1.0);
    let channel = |cold: u8, hot: u8| (cold as f32 + (hot as f32 - cold as f32) * t).round() as u8;
    Color32::from_rgb(
        channel(HEAT_COLD[0], HEAT_HOT[0]),
        channel(HEAT_COLD[1], HEAT_HOT[1]),
        channel(HEAT_COLD[2], HEAT_HOT[2]),
    )
}
