//! Goiânia Marker Map.
//!
//! Interaktive Stadtkarte: Marker mit Glyphe und Verkehrsart setzen,
//! lokal speichern und beim nächsten Start wiederherstellen.

use eframe::egui;
use goiania_marker_map::{ui, AppController, AppIntent, AppState, FileKeyValueStore, MapOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren (Info, per RUST_LOG überschreibbar)
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!("Goiânia Marker Map v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Goiânia Marker Map"),
            ..Default::default()
        };

        eframe::run_native(
            "Goiânia Marker Map",
            options,
            Box::new(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(MarkerMapApp::new()))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct MarkerMapApp {
    state: AppState,
    controller: AppController,
}

impl MarkerMapApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let map_options = MapOptions::load_from_file(&MapOptions::config_path());
        let storage = FileKeyValueStore::open(map_options.storage_path());
        log::info!("Marker-Speicher: {}", storage.path().display());

        let mut app = Self {
            state: AppState::with_storage(map_options, Box::new(storage)),
            controller: AppController::new(),
        };
        app.process_events(vec![AppIntent::StartupRequested]);
        app
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Fehler bei der Verarbeitung eines Events: {:#}", e);
            }
        }
    }
}

impl eframe::App for MarkerMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let scene = self.controller.build_render_scene(&self.state);

        let mut events = Vec::new();
        events.extend(ui::render_control_panel(ctx, &self.state));
        events.extend(ui::render_map_view(ctx, &scene));

        self.process_events(events);
    }
}
