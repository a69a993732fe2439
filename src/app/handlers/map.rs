//! Handler für die Blockseiten-Auswahl.

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Wählt die nächste Blockseite am Klickpunkt aus.
pub fn select_at(state: &mut AppState, world_pos: DVec2, max_distance: f64) {
    use_cases::selection::select_blockface_at(state, world_pos, max_distance);
}

/// Hebt die Auswahl auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
