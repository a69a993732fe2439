//! Bildschirm-Zahlenfeld für Länge und Start der Tabelle.
//!
//! Tasten verändern direkt den Eingabepuffer in `UiState`; Bestätigen und
//! Abbrechen laufen als Intents über den Controller.

use crate::app::{format_length, AppIntent, AppState, NumberPadField, NumberPadKey, NumberPadState};

const KEY_SIZE: egui::Vec2 = egui::vec2(52.0, 40.0);

/// Zeigt das Zahlenfeld, falls geöffnet, und gibt erzeugte Events zurück.
pub fn show_number_pad(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(pad) = state.ui.number_pad.as_mut() else {
        return events;
    };

    apply_typed_keys(ctx, pad, &mut events);

    let title = match pad.field {
        NumberPadField::Length => format!("Länge Segment {}", pad.index + 1),
        NumberPadField::Start => format!("Start Segment {}", pad.index + 1),
    };

    egui::Window::new(title)
        .id(egui::Id::new("number_pad"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -40.0])
        .show(ctx, |ui| {
            let shown = if pad.buffer.is_empty() { "–" } else { pad.buffer.as_str() };
            ui.label(egui::RichText::new(format!("{} ft", shown)).monospace().size(24.0));
            ui.label(format!(
                "Erlaubt: {} – {} ft",
                format_length(pad.min),
                format_length(pad.max)
            ));

            if let Some(error) = &pad.error {
                ui.colored_label(egui::Color32::from_rgb(230, 80, 80), error);
            }

            ui.add_space(6.0);

            egui::Grid::new("number_pad_keys")
                .spacing([4.0, 4.0])
                .show(ui, |ui| {
                    for row in [[7, 8, 9], [4, 5, 6], [1, 2, 3]] {
                        for digit in row {
                            if key_button(ui, &digit.to_string()) {
                                pad.press(NumberPadKey::Digit(digit));
                            }
                        }
                        ui.end_row();
                    }

                    if key_button(ui, ".") {
                        pad.press(NumberPadKey::Decimal);
                    }
                    if key_button(ui, "0") {
                        pad.press(NumberPadKey::Digit(0));
                    }
                    if key_button(ui, "⌫") {
                        pad.press(NumberPadKey::Backspace);
                    }
                    ui.end_row();
                });

            ui.add_space(6.0);

            ui.horizontal(|ui| {
                if ui.button("C").clicked() {
                    pad.press(NumberPadKey::Clear);
                }
                if ui.button("Abbrechen").clicked() {
                    events.push(AppIntent::NumberPadCancelled);
                }
                if ui.button("OK").clicked() {
                    events.push(AppIntent::NumberPadConfirmed);
                }
            });
        });

    events
}

fn key_button(ui: &mut egui::Ui, text: &str) -> bool {
    ui.add(egui::Button::new(egui::RichText::new(text).size(18.0)).min_size(KEY_SIZE))
        .clicked()
}

/// Übernimmt Tastatureingaben (Ziffern, Punkt, Backspace, Enter).
fn apply_typed_keys(ctx: &egui::Context, pad: &mut NumberPadState, events: &mut Vec<AppIntent>) {
    let input_events = ctx.input(|i| i.events.clone());
    for event in input_events {
        match event {
            egui::Event::Text(text) => {
                for ch in text.chars() {
                    if let Some(digit) = ch.to_digit(10) {
                        pad.press(NumberPadKey::Digit(digit as u8));
                    } else if ch == '.' || ch == ',' {
                        pad.press(NumberPadKey::Decimal);
                    }
                }
            }
            egui::Event::Key {
                key: egui::Key::Backspace,
                pressed: true,
                ..
            } => pad.press(NumberPadKey::Backspace),
            egui::Event::Key {
                key: egui::Key::Delete,
                pressed: true,
                ..
            } => pad.press(NumberPadKey::Clear),
            egui::Event::Key {
                key: egui::Key::Enter,
                pressed: true,
                ..
            } => events.push(AppIntent::NumberPadConfirmed),
            _ => {}
        }
    }
}
