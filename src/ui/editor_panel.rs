//! Seitenpanel des Segment-Editors.
//!
//! Zeigt Kopfdaten der ausgewählten Blockseite, den Umschalter zwischen
//! Streifen und Tabelle und darunter die aktive Darstellung.

use crate::app::{format_length, AppIntent, AppState, EditorMode};

/// Rendert das Editor-Panel am rechten Rand und gibt erzeugte Events zurück.
pub fn render_editor_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("curb_editor_panel")
        .resizable(true)
        .default_width(380.0)
        .min_width(260.0)
        .show(ctx, |ui| {
            let Some(blockface) = &state.selected else {
                ui.heading("Segment-Editor");
                ui.add_space(8.0);
                ui.label("Blockseite auf der Karte anklicken, um sie zu bearbeiten.");
                return;
            };

            ui.heading("Segment-Editor");
            ui.label(format!("Blockseite: {}", blockface.id));
            ui.label(format!(
                "Länge: {} ft | Unbekannt: {} ft",
                format_length(blockface.length),
                format_length(state.curb.unknown_length())
            ));

            ui.horizontal(|ui| {
                let mut mode = state.editor.mode;
                ui.selectable_value(&mut mode, EditorMode::Strip, "Streifen");
                ui.selectable_value(&mut mode, EditorMode::Table, "Tabelle");
                if mode != state.editor.mode {
                    events.push(AppIntent::EditorModeChanged { mode });
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Exportieren...").clicked() {
                        events.push(AppIntent::ExportRequested);
                    }
                    if ui.small_button("✕").on_hover_text("Auswahl aufheben").clicked() {
                        events.push(AppIntent::ClearSelectionRequested);
                    }
                });
            });

            ui.separator();

            match state.editor.mode {
                EditorMode::Strip => events.extend(super::render_segmented_editor(ui, state)),
                EditorMode::Table => {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        events.extend(super::render_curb_table(ui, state));
                    });
                }
            }
        });

    events
}
