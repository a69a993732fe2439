//! Handler für den Segment-Editor (Streifen, Labels, Tabelle).

use crate::app::curb_store::CurbAction;
use crate::app::gesture::PointerEvent;
use crate::app::state::{EditorMode, NumberPadField};
use crate::app::use_cases;
use crate::app::AppState;

/// Führt eine Store-Aktion aus. Abgelehnte Aktionen landen in der Statuszeile.
pub fn dispatch(state: &mut AppState, action: CurbAction) {
    let _ = use_cases::curb::dispatch(state, action);
}

/// Setzt die Editor-Darstellung.
pub fn set_mode(state: &mut AppState, mode: EditorMode) {
    use_cases::editor::set_mode(state, mode);
}

/// Schaltet das Typ-Menü eines Labels um.
pub fn toggle_label_menu(state: &mut AppState, index: usize) {
    use_cases::editor::toggle_label_menu(state, index);
}

/// Schließt das Typ-Menü.
pub fn close_label_menu(state: &mut AppState) {
    use_cases::editor::close_label_menu(state);
}

/// Verarbeitet ein Zeiger-Ereignis des Streifens.
pub fn strip_pointer(state: &mut AppState, event: PointerEvent, strip_height: f32) {
    use_cases::editor::handle_strip_pointer(state, event, strip_height);
}

/// Öffnet das Zahlenfeld.
pub fn open_number_pad(state: &mut AppState, index: usize, field: NumberPadField) {
    use_cases::editor::open_number_pad(state, index, field);
}

/// Bestätigt das Zahlenfeld.
pub fn confirm_number_pad(state: &mut AppState) {
    use_cases::editor::confirm_number_pad(state);
}

/// Schließt das Zahlenfeld.
pub fn close_number_pad(state: &mut AppState) {
    use_cases::editor::close_number_pad(state);
}
