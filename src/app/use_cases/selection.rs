//! Use-Cases für die Auswahl einer Blockseite auf der Karte.

use crate::app::AppState;
use glam::DVec2;

/// Wählt die nächste Blockseite innerhalb `max_distance` aus.
///
/// Ohne Treffer bleibt die bisherige Auswahl bestehen.
pub fn select_blockface_at(state: &mut AppState, world_pos: DVec2, max_distance: f64) {
    let Some(blockfaces) = state.blockfaces.clone() else {
        log::debug!("Klick ohne geladenen Datensatz ignoriert");
        return;
    };
    let Some(feature) = blockfaces.pick(world_pos, max_distance) else {
        log::debug!(
            "Keine Blockseite innerhalb {:.1} m bei ({:.1}, {:.1})",
            max_distance,
            world_pos.x,
            world_pos.y
        );
        return;
    };
    select_blockface(state, &feature.id);
}

/// Wählt eine Blockseite per ID aus und initialisiert ihre Segmente.
///
/// Gibt `false` zurück, wenn die ID unbekannt ist.
pub fn select_blockface(state: &mut AppState, id: &str) -> bool {
    let Some(blockface) = state
        .blockfaces
        .as_ref()
        .and_then(|set| set.get(id))
        .map(|feature| feature.to_blockface())
    else {
        log::warn!("Unbekannte Blockseite: {}", id);
        return false;
    };

    log::info!(
        "Blockseite {} ausgewählt ({:.1} ft)",
        blockface.id,
        blockface.length
    );
    let (id, length) = (blockface.id.clone(), blockface.length);
    state.selected = Some(blockface);
    super::curb::initialize(state, id, length);
    true
}

/// Hebt die Auswahl auf und leert den Store.
pub fn clear_selection(state: &mut AppState) {
    state.selected = None;
    state.curb = Default::default();
    state.history.clear();
    state.editor.reset_transient();
    state.ui.number_pad = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{geo, BlockfaceSet, Feature, FeatureCollection};
    use std::sync::Arc;

    fn state_with_dataset() -> AppState {
        let collection = FeatureCollection {
            features: vec![
                Feature::line_string("north", &[[-122.4194, 37.7760], [-122.4183, 37.7760]]),
                Feature::line_string("south", &[[-122.4194, 37.7749], [-122.4183, 37.7749]]),
            ],
        };
        let mut state = AppState::new();
        state.blockfaces = Some(Arc::new(BlockfaceSet::from_collection(
            collection, "globalid",
        )));
        state
    }

    #[test]
    fn click_near_line_selects_and_initializes() {
        let mut state = state_with_dataset();
        let click = geo::project([-122.4190, 37.77491]);

        select_blockface_at(&mut state, click, 10.0);

        let selected = state.selected.as_ref().expect("Blockseite ausgewählt");
        assert_eq!(selected.id, "south");
        assert_eq!(state.curb.blockface_id.as_deref(), Some("south"));
        assert_eq!(state.curb.segments.len(), 1);
        assert!(state.curb.segments[0].kind.is_unknown());
    }

    #[test]
    fn click_far_from_lines_keeps_selection() {
        let mut state = state_with_dataset();
        assert!(select_blockface(&mut state, "north"));

        select_blockface_at(&mut state, geo::project([-122.0, 37.0]), 10.0);

        assert_eq!(state.selected.as_ref().map(|b| b.id.as_str()), Some("north"));
    }

    #[test]
    fn clear_selection_resets_store() {
        let mut state = state_with_dataset();
        select_blockface(&mut state, "north");

        clear_selection(&mut state);

        assert!(state.selected.is_none());
        assert!(!state.curb.is_active());
    }

    #[test]
    fn unknown_id_is_rejected() {
        let mut state = state_with_dataset();
        assert!(!select_blockface(&mut state, "missing"));
        assert!(state.selected.is_none());
    }
}
