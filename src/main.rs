//! GTT Map Editor.
//!
//! Desktop-Karteneditor für Geo-Tasks: Punkte, Linien und Flächen zeichnen,
//! GeoJSON importieren und das Ergebnis als Formularwert übergeben.
//!
//! Aufruf: `gtt-map-editor [host.json]`. Beim Beenden (Strg+Q oder Fenster schließen) wird der
//! Formularwert auf stdout ausgegeben.

use eframe::egui;
use gtt_map_editor::{ui, AppController, AppIntent, AppState, EditorOptions, HostConfig};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("GTT Map Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let host = Self::load_host_config();

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("GTT Map Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "GTT Map Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new(host)))),
        )
    }

    /// Liest die Host-Konfiguration aus dem ersten Argument (falls angegeben).
    fn load_host_config() -> HostConfig {
        let Some(path) = std::env::args_os().nth(1) else {
            log::info!("Keine Host-Konfiguration angegeben, verwende Standardwerte");
            return HostConfig::default();
        };

        match HostConfig::load_from_file(std::path::Path::new(&path)) {
            Ok(host) => host,
            Err(e) => {
                log::error!("Host-Konfiguration nicht lesbar: {:#}", e);
                HostConfig::default()
            }
        }
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    inputs: Vec<ui::InputState>,
    form_emitted: bool,
}

impl EditorApp {
    fn new(host: HostConfig) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut app = Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            inputs: Vec::new(),
            form_emitted: false,
        };
        app.process_events(vec![AppIntent::HostPageLoaded {
            host: Box::new(host),
        }]);
        app.inputs = (0..app.state.view.maps.len())
            .map(|_| ui::InputState::new())
            .collect();
        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            self.emit_form_value();
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }
        if ctx.input(|i| i.viewport().close_requested()) {
            self.emit_form_value();
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_feature_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_import_dialog(ctx, &self.state));

        let state = &self.state;
        let inputs = &mut self.inputs;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let count = inputs.len().max(1) as f32;
                let width = ui.available_width() / count;
                ui.horizontal(|ui| {
                    for (map, input) in inputs.iter_mut().enumerate() {
                        let size = egui::vec2(width, ui.available_height());
                        ui.allocate_ui(size, |ui| {
                            events.extend(ui::render_map(ui, state, map, input));
                        });
                    }
                });
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Gibt den Formularwert einmalig an den Host (stdout) weiter.
    fn emit_form_value(&mut self) {
        if self.form_emitted {
            return;
        }
        self.form_emitted = true;
        println!("{}", self.state.form.value);
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.ui.import.visible
            || self.state.should_exit
        {
            ctx.request_repaint();
        }
    }
}
