//! Use-Cases für den Bordstein-Store: Aktionen ausführen, Fehler melden.

use crate::app::curb_store::{reduce, CurbAction};
use crate::app::AppState;
use crate::core::SegmentError;

/// Führt eine Store-Aktion aus und legt vorher einen Undo-Snapshot an.
///
/// Bei Ablehnung bleibt der Zustand unverändert; der Fehler wird geloggt
/// und in der Statuszeile angezeigt.
pub fn dispatch(state: &mut AppState, action: CurbAction) -> Result<(), SegmentError> {
    if !state.curb.is_active() {
        log::debug!("{} ignoriert: keine Blockseite ausgewählt", action.name());
        return Ok(());
    }

    let name = action.name();
    match reduce(&state.curb, action, state.options.length_precision) {
        Ok(next) => {
            if next != state.curb {
                state.record_undo_snapshot();
                state.curb = next;
            }
            state.ui.status_message = None;
            Ok(())
        }
        Err(e) => {
            log::warn!("{} abgelehnt: {}", name, e);
            state.ui.status_message = Some(e.to_string());
            Err(e)
        }
    }
}

/// Initialisiert den Store für eine neu ausgewählte Blockseite.
///
/// Setzt die History zurück; Initialisierung selbst ist nicht rückgängig zu machen.
pub fn initialize(state: &mut AppState, blockface_id: String, length: f64) {
    let action = CurbAction::InitializeSegments {
        blockface_id,
        length,
        seed: state.options.seed_example,
    };
    match reduce(&state.curb, action, state.options.length_precision) {
        Ok(next) => state.curb = next,
        Err(e) => {
            log::error!("Initialisierung der Segmente fehlgeschlagen: {}", e);
            state.ui.status_message = Some(e.to_string());
        }
    }
    state.history.clear();
    state.editor.reset_transient();
    state.ui.number_pad = None;
}
