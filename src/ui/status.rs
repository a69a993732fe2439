//! Status-Bar am unteren Bildschirmrand.

use crate::app::{format_length, AppState, EditorMode};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if state.dataset_loader.is_loading() {
                ui.spinner();
                ui.label("Lade Blockseiten...");
            } else if state.blockfaces.is_some() {
                ui.label(format!("Blockseiten: {}", state.blockface_count()));
            } else {
                ui.label("Kein Datensatz geladen");
            }

            ui.separator();

            if let Some(blockface) = &state.selected {
                ui.label(format!(
                    "Blockseite: {} | {} ft | Segmente: {} | Unbekannt: {} ft",
                    blockface.id,
                    format_length(blockface.length),
                    state.segment_count(),
                    format_length(state.curb.unknown_length())
                ));
            } else {
                ui.label("Keine Auswahl");
            }

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.0}, {:.0})",
                state.view.camera.zoom, state.view.camera.position.x, state.view.camera.position.y
            ));

            ui.separator();

            let mode_name = match state.editor.mode {
                EditorMode::Strip => "Streifen",
                EditorMode::Table => "Tabelle",
            };
            ui.label(format!("Editor: {}", mode_name));

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });
}
