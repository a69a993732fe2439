//! Use-Cases des Segment-Editors: Gesten, Label-Menü, Zahlenfeld.

use crate::app::gesture::{GestureOutcome, PointerEvent};
use crate::app::state::{EditorMode, NumberPadField, NumberPadState};
use crate::app::AppState;

/// Setzt die Editor-Darstellung.
pub fn set_mode(state: &mut AppState, mode: EditorMode) {
    state.editor.mode = mode;
}

/// Gibt ein Zeiger-Ereignis an den Gesten-Automaten und übernimmt das Ergebnis.
pub fn handle_strip_pointer(state: &mut AppState, event: PointerEvent, strip_height: f32) {
    let mut gesture = std::mem::take(&mut state.editor.gesture);
    let outcome = gesture.handle(event, &state.gesture_context(strip_height));
    state.editor.gesture = gesture;

    if let GestureOutcome::Commit(action) = outcome {
        // Fehler sind bereits geloggt und in der Statuszeile sichtbar
        let _ = super::curb::dispatch(state, action);
    }
}

/// Öffnet oder schließt das Typ-Menü eines Labels.
pub fn toggle_label_menu(state: &mut AppState, index: usize) {
    state.editor.open_label = if state.editor.open_label == Some(index) {
        None
    } else {
        Some(index)
    };
}

/// Schließt das Typ-Menü.
pub fn close_label_menu(state: &mut AppState) {
    state.editor.open_label = None;
}

/// Öffnet das Zahlenfeld für eine Tabellenzelle.
pub fn open_number_pad(state: &mut AppState, index: usize, field: NumberPadField) {
    state.ui.number_pad = NumberPadState::open(&state.curb, index, field);
    if state.ui.number_pad.is_none() {
        log::debug!("Zelle {:?} in Zeile {} nicht editierbar", field, index);
    }
}

/// Bestätigt das Zahlenfeld; bei ungültiger Eingabe bleibt es mit Fehler offen.
pub fn confirm_number_pad(state: &mut AppState) {
    let Some(pad) = state.ui.number_pad.as_mut() else {
        return;
    };
    let Some(value) = pad.validate() else {
        return;
    };
    let action = pad.to_action(value);

    match super::curb::dispatch(state, action) {
        Ok(()) => state.ui.number_pad = None,
        Err(e) => {
            if let Some(pad) = state.ui.number_pad.as_mut() {
                pad.error = Some(e.to_string());
            }
        }
    }
}

/// Schließt das Zahlenfeld ohne Übernahme.
pub fn close_number_pad(state: &mut AppState) {
    state.ui.number_pad = None;
}
