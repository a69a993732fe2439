//! Keyboard-Shortcuts.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, PointerEvent};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Escape wirkt auf die innerste offene Ebene: laufende Geste, Zahlenfeld,
/// Label-Menü und zuletzt die Auswahl.
pub fn collect_keyboard_intents(
    ui: &egui::Ui,
    gesture_active: bool,
    number_pad_open: bool,
    label_menu_open: bool,
    has_selection: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    let (key_o_pressed, key_e_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::E),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if modifiers.command && key_o_pressed {
        events.push(AppIntent::OpenDatasetFileRequested);
    }

    if modifiers.command && key_e_pressed && has_selection {
        events.push(AppIntent::ExportRequested);
    }

    if key_escape_pressed {
        if gesture_active {
            // Cancel wertet die Streifengeometrie nicht aus
            events.push(AppIntent::StripPointer {
                event: PointerEvent::Cancel,
                strip_height: 0.0,
            });
        } else if number_pad_open {
            events.push(AppIntent::NumberPadCancelled);
        } else if label_menu_open {
            events.push(AppIntent::LabelMenuClosed);
        } else if has_selection {
            events.push(AppIntent::ClearSelectionRequested);
        }
    }

    events
}
