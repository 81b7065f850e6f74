use std::path::{Path, PathBuf};

use anyhow::Context;
use eframe::egui;
use eframe::egui::ScrollArea;
use eframe::run_native;
use life_engine::SimulationConfig;

mod board;
mod pages;

use board::SimulationView;

const CONFIG_ENV: &str = "LIFE_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "life.toml";

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = load_config()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 900.0]),
        ..Default::default()
    };

    run_native(
        "Game of Life",
        options,
        Box::new(|_cc| Ok(Box::new(GuiOfLife::new(config)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the Game of Life window: {err}"))
}

/// `$LIFE_CONFIG`, else `./life.toml` if present, else defaults.
fn load_config() -> anyhow::Result<SimulationConfig> {
    let path = match std::env::var_os(CONFIG_ENV) {
        Some(path) => PathBuf::from(path),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => PathBuf::from(DEFAULT_CONFIG_FILE),
        None => {
            log::debug!("no config file, using defaults");
            return Ok(SimulationConfig::default());
        }
    };

    let source = std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let config =
        SimulationConfig::from_toml_str(&source).with_context(|| format!("load config from {}", path.display()))?;
    log::info!("loaded config from {}", path.display());
    Ok(config)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Simulation,
    Credits,
}

struct GuiOfLife {
    config: SimulationConfig,
    page: Page,
    // Only exists while the simulation page is open.
    simulation: Option<SimulationView>,
}

impl GuiOfLife {
    fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            page: Page::Home,
            simulation: None,
        }
    }

    fn navigation(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.page, Page::Home, "Home");
            ui.selectable_value(&mut self.page, Page::Simulation, "Simulation");
            ui.selectable_value(&mut self.page, Page::Credits, "Credits");
        });
    }
}

impl eframe::App for GuiOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("navigation").show(ctx, |ui| self.navigation(ui));

        if self.page != Page::Simulation && self.simulation.take().is_some() {
            log::debug!("left the simulation page, dropping session");
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::both().show(ui, |ui| match self.page {
                Page::Home => pages::home(ui),
                Page::Credits => pages::credits(ui),
                Page::Simulation => {
                    let config = &self.config;
                    self.simulation
                        .get_or_insert_with(|| SimulationView::new(config.clone()))
                        .show(ui);
                }
            });
        });
    }
}
