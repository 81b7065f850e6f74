use eframe::egui::Ui;

const RULES: [&str; 4] = [
    "A living cell with less than two living neighbours dies.",
    "A living cell with two or three live neighbours lives.",
    "A living cell with more than three live neighbours dies.",
    "A dead cell with exactly three live neighbours becomes a live cell, as if by reproduction.",
];

pub fn home(ui: &mut Ui) {
    ui.heading("Conway's Game of Life");
    ui.add_space(8.0);
    ui.strong("Introduction");
    ui.label(
        "Conway's Game of Life is played on a grid. Every location on the grid is a cell. \
         The simulation runs in generations: after each generation a cell may switch between \
         living and dead depending on how many living neighbours it had in the previous one. \
         A neighbour is any immediately adjacent spot on the grid, horizontally, vertically \
         or diagonally.",
    );
    ui.add_space(8.0);
    ui.strong("Fundamental Rules");
    for rule in RULES {
        ui.label(format!("• {rule}"));
    }
}

pub fn credits(ui: &mut Ui) {
    ui.heading("Credits");
    ui.add_space(8.0);
    ui.label("The Game of Life was devised by the mathematician John Horton Conway in 1970.");
    ui.label("Built with egui and eframe.");
}
