//! Use-Cases für das Laden des Blockseiten-Datensatzes.

use crate::app::dataset_loader;
use crate::app::AppState;
use crate::core::BlockfaceSet;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Startet den Hintergrund-Abruf von der konfigurierten URL.
pub fn start_fetch(state: &mut AppState) {
    if state.dataset_loader.is_loading() {
        log::debug!("Abruf läuft bereits, neuer Abruf ersetzt ihn");
    }
    state.dataset_loader.start_fetch(
        state.options.dataset_url.clone(),
        state.options.id_property.clone(),
        Duration::from_secs(state.options.fetch_timeout_secs),
    );
    state.ui.status_message = Some("Lade Blockseiten…".to_string());
}

/// Öffnet den GeoJSON-Öffnen-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_open_dialog = true;
}

/// Lädt eine lokale GeoJSON-Datei und übernimmt sie.
pub fn load_file(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let loaded = dataset_loader::load_file(Path::new(path), &state.options.id_property)?;
    apply_dataset(state, loaded.source, Arc::new(loaded.blockfaces));
    Ok(())
}

/// Übernimmt einen geladenen Datensatz; die bisherige Auswahl wird verworfen.
pub fn apply_dataset(state: &mut AppState, source: String, blockfaces: Arc<BlockfaceSet>) {
    let msg = format!("{} Blockseiten geladen aus {}", blockfaces.len(), source);
    log::info!("{}", msg);

    super::selection::clear_selection(state);
    state.blockfaces = Some(blockfaces);
    state.dataset_source = Some(source);
    state.ui.status_message = Some(msg);
}

/// Zeigt einen Ladefehler in der Statuszeile an.
pub fn report_error(state: &mut AppState, message: String) {
    log::error!("Datensatz konnte nicht geladen werden: {}", message);
    state.ui.status_message = Some(format!("Laden fehlgeschlagen: {}", message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_dataset_replaces_selection() {
        let mut state = AppState::new();
        state.curb.blockface_id = Some("old".into());

        apply_dataset(&mut state, "test".into(), Arc::new(BlockfaceSet::default()));

        assert!(state.blockfaces.is_some());
        assert!(!state.curb.is_active());
        assert_eq!(state.dataset_source.as_deref(), Some("test"));
        assert_eq!(
            state.ui.status_message.as_deref(),
            Some("0 Blockseiten geladen aus test")
        );
    }

    #[test]
    fn load_missing_file_propagates_error() {
        let mut state = AppState::new();
        assert!(load_file(&mut state, "/nonexistent/file.geojson").is_err());
        assert!(state.blockfaces.is_none());
    }

    #[test]
    fn report_error_sets_status() {
        let mut state = AppState::new();
        report_error(&mut state, "timeout".into());
        assert_eq!(
            state.ui.status_message.as_deref(),
            Some("Laden fehlgeschlagen: timeout")
        );
    }
}
