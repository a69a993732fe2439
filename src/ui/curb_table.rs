//! Tabellen-Ansicht der Segmentliste.
//!
//! Typ per farbcodierter Auswahl, Länge und Start über das Zahlenfeld.

use crate::app::{format_length, AppIntent, AppState, NumberPadField};
use crate::core::SegmentType;
use egui_extras::{Column, TableBuilder};

use super::palette_color;

const ROW_HEIGHT: f32 = 28.0;

/// Rendert die Segment-Tabelle der ausgewählten Blockseite.
pub fn render_curb_table(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.curb.is_active() {
        ui.label("Keine Blockseite ausgewählt");
        return events;
    }

    let segments = &state.curb.segments;
    let starts = state.curb.starts();
    let editing = state.ui.number_pad.as_ref().map(|pad| (pad.index, pad.field));

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(24.0))
        .column(Column::auto().at_least(130.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder())
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.strong("Typ");
            });
            header.col(|ui| {
                ui.strong("Länge (ft)");
            });
            header.col(|ui| {
                ui.strong("Start (ft)");
            });
            header.col(|_ui| {});
        })
        .body(|mut body| {
            for (index, segment) in segments.iter().enumerate() {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(format!("{}", index + 1));
                    });

                    row.col(|ui| {
                        let (swatch, _) =
                            ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                        ui.painter()
                            .rect_filled(swatch, 2.0, palette_color(segment.kind.color()));

                        if segment.kind.is_unknown() {
                            // Rest-Puffer: Typ nicht wählbar
                            ui.label(segment.kind.label());
                            return;
                        }
                        egui::ComboBox::from_id_salt(("segment_type", index))
                            .selected_text(segment.kind.label())
                            .show_ui(ui, |ui| {
                                for kind in SegmentType::ALL.into_iter().filter(|k| !k.is_unknown())
                                {
                                    let text = egui::RichText::new(kind.label())
                                        .color(palette_color(kind.color()));
                                    if ui.selectable_label(kind == segment.kind, text).clicked()
                                        && kind != segment.kind
                                    {
                                        events.push(AppIntent::SegmentTypeChanged { index, kind });
                                    }
                                }
                            });
                    });

                    row.col(|ui| {
                        if segment.kind.is_unknown() {
                            ui.label(format_length(segment.length));
                            return;
                        }
                        let active = editing == Some((index, NumberPadField::Length));
                        if ui
                            .add(
                                egui::Button::new(format_length(segment.length))
                                    .selected(active)
                                    .min_size(egui::vec2(60.0, 0.0)),
                            )
                            .clicked()
                        {
                            events.push(AppIntent::NumberPadOpened {
                                index,
                                field: NumberPadField::Length,
                            });
                        }
                    });

                    row.col(|ui| {
                        let start = format_length(starts[index]);
                        if index == 0 {
                            ui.label(start);
                            return;
                        }
                        let active = editing == Some((index, NumberPadField::Start));
                        if ui
                            .add(
                                egui::Button::new(start)
                                    .selected(active)
                                    .min_size(egui::vec2(60.0, 0.0)),
                            )
                            .clicked()
                        {
                            events.push(AppIntent::NumberPadOpened {
                                index,
                                field: NumberPadField::Start,
                            });
                        }
                    });

                    row.col(|ui| {
                        if ui
                            .add_enabled(
                                state.curb.unknown_length() > 0.0,
                                egui::Button::new("+"),
                            )
                            .on_hover_text("Neues Parking-Segment dahinter einfügen")
                            .clicked()
                        {
                            events.push(AppIntent::AddSegmentRequested { index });
                        }
                    });
                });
            }
        });

    ui.add_space(8.0);
    ui.label(format!(
        "Summe: {} von {} ft",
        format_length(segments.iter().map(|s| s.length).sum()),
        format_length(state.curb.blockface_length)
    ));

    events
}
