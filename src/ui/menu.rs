//! Top-Menü (File, Edit, View).

use crate::app::{AppIntent, AppState, EditorMode};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let loading = state.dataset_loader.is_loading();

                if ui
                    .add_enabled(!loading, egui::Button::new("Datensatz abrufen"))
                    .clicked()
                {
                    events.push(AppIntent::FetchDatasetRequested);
                    ui.close();
                }

                if ui.button("GeoJSON öffnen... (Ctrl+O)").clicked() {
                    events.push(AppIntent::OpenDatasetFileRequested);
                    ui.close();
                }

                ui.separator();

                if ui
                    .add_enabled(
                        state.curb.is_active(),
                        egui::Button::new("Segmente exportieren... (Ctrl+E)"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::ExportRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            // Edit menu: Undo / Redo / Optionen
            ui.menu_button("Edit", |ui| {
                if ui
                    .add_enabled(state.can_undo(), egui::Button::new("Undo (Ctrl+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(
                        state.can_redo(),
                        egui::Button::new("Redo (Ctrl+Y / Shift+Cmd+Z)"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset Camera").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }

                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(
                        state.blockfaces.is_some(),
                        egui::Button::new("Auf Datensatz zoomen"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::FitToDatasetRequested);
                    ui.close();
                }

                ui.separator();

                let mut mode = state.editor.mode;
                let strip = ui.radio_value(&mut mode, EditorMode::Strip, "Streifen-Editor");
                let table = ui.radio_value(&mut mode, EditorMode::Table, "Tabellen-Editor");
                if (strip.clicked() || table.clicked()) && mode != state.editor.mode {
                    events.push(AppIntent::EditorModeChanged { mode });
                    ui.close();
                }
            });
        });
    });

    events
}
