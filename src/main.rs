//! Row Canvas.
//!
//! Editor zum Einteilen von Bordstein-Blockseiten in typisierte Segmente.
//! Karte, Segment-Streifen und Tabelle mit egui + glow.

use eframe::egui;
use row_canvas::{ui, AppController, AppIntent, AppState, EditorOptions};

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

        log::info!("Row Canvas v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Row Canvas"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Row Canvas",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.poll_dataset();
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    /// Übernimmt das Ergebnis eines abgeschlossenen Hintergrund-Abrufs.
    fn poll_dataset(&mut self) -> Vec<AppIntent> {
        match self.state.dataset_loader.poll() {
            Some(Ok(loaded)) => vec![AppIntent::DatasetLoaded {
                source: loaded.source,
                blockfaces: std::sync::Arc::new(loaded.blockfaces),
            }],
            Some(Err(e)) => vec![AppIntent::DatasetLoadFailed {
                message: format!("{:#}", e),
            }],
            None => Vec::new(),
        }
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_editor_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state));
        events.extend(ui::show_number_pad(ctx, &mut self.state));
        events.extend(ui::show_options_dialog(ctx, &mut self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                events.extend(ui::collect_keyboard_intents(
                    ui,
                    self.state.editor.gesture.is_active(),
                    self.state.ui.number_pad.is_some(),
                    self.state.editor.open_label.is_some(),
                    self.state.selected.is_some(),
                ));
                events.extend(ui::render_map_view(ui, &self.state));
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("{:#}", e));
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if self.state.dataset_loader.is_loading() {
            // Kein Eingabe-Event zeigt das Ende des Abrufs an
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.editor.gesture.is_active()
            || self.state.ui.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
