//! Optionen-Dialog für Datensatz, Segmente, Karte und Editor.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(380.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Datensatz ───────────────────────────────────
                    ui.collapsing("Datensatz", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("URL:");
                            changed |= ui
                                .add(
                                    egui::TextEdit::singleline(&mut opts.dataset_url)
                                        .desired_width(260.0),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("ID-Property:");
                            changed |= ui
                                .text_edit_singleline(&mut opts.id_property)
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Timeout (s):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.fetch_timeout_secs)
                                        .range(5..=600),
                                )
                                .changed();
                        });
                    });

                    // ── Segmente ────────────────────────────────────
                    ui.collapsing("Segmente", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Neue Segmentlänge (ft):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.default_add_length)
                                        .range(1.0..=500.0)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Snap-Schwelle (ft):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.snap_threshold)
                                        .range(0.0..=20.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Präzision (ft):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.length_precision)
                                        .range(0.01..=1.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        changed |= ui
                            .checkbox(&mut opts.seed_example, "Beispiel-Segmente bei Auswahl")
                            .changed();
                    });

                    // ── Karte ───────────────────────────────────────
                    ui.collapsing("Karte", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Linienbreite:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.blockface_line_width)
                                        .range(0.5..=10.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Breite Auswahl:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.selected_line_width)
                                        .range(1.0..=20.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Breite Segmente:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.highlight_line_width)
                                        .range(1.0..=20.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Pick-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.selection_pick_radius_px)
                                        .range(2.0..=50.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Blockseiten:", &mut opts.blockface_color);
                        changed |= color_edit(ui, "Auswahl:", &mut opts.selected_color);
                    });

                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Kamera", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Menü):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_zoom_step)
                                        .range(1.01..=3.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Scroll):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_scroll_zoom_step)
                                        .range(1.01..=2.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                    });

                    // ── Editor ──────────────────────────────────────
                    ui.collapsing("Editor", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Streifenbreite:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.strip_width)
                                        .range(40.0..=300.0)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Label-Abstand:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.label_gap)
                                        .range(0.0..=20.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = super::option_color(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            let [r, g, b, a] = c.to_srgba_unmultiplied();
            *color = [
                f32::from(r) / 255.0,
                f32::from(g) / 255.0,
                f32::from(b) / 255.0,
                f32::from(a) / 255.0,
            ];
            changed = true;
        }
    });
    changed
}
