//! Handler für Datensatz laden und Segment-Export.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::BlockfaceSet;
use std::sync::Arc;

/// Startet den Abruf des Datensatzes von der konfigurierten URL.
pub fn fetch_dataset(state: &mut AppState) {
    use_cases::dataset::start_fetch(state);
}

/// Öffnet den GeoJSON-Öffnen-Dialog.
pub fn request_open(state: &mut AppState) {
    use_cases::dataset::request_open_file(state);
}

/// Lädt eine lokale GeoJSON-Datei.
pub fn load_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::dataset::load_file(state, &path)
}

/// Übernimmt einen im Hintergrund geladenen Datensatz.
pub fn apply_dataset(state: &mut AppState, source: String, blockfaces: Arc<BlockfaceSet>) {
    use_cases::dataset::apply_dataset(state, source, blockfaces);
}

/// Meldet einen Ladefehler.
pub fn report_error(state: &mut AppState, message: String) {
    use_cases::dataset::report_error(state, message);
}

/// Öffnet den Export-Dialog.
pub fn request_export(state: &mut AppState) {
    use_cases::export::request_export(state);
}

/// Schreibt die Segmente als JSON.
pub fn export(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::export::export_segments(state, &path)
}
