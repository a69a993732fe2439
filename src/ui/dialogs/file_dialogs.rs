use crate::app::{AppIntent, AppState};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Vorgeschlagener Dateiname für den Export.
fn export_file_name(blockface_id: Option<&str>) -> String {
    match blockface_id {
        Some(id) if !id.is_empty() => format!("{id}.json"),
        _ => "segments.json".to_string(),
    }
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // GeoJSON-Öffnen-Dialog
    if state.ui.show_open_dialog {
        state.ui.show_open_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("GeoJSON", &["geojson", "json"])
            .pick_file()
        {
            events.push(AppIntent::DatasetFileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Export-Dialog
    if state.ui.show_export_dialog {
        state.ui.show_export_dialog = false;

        let default_name = export_file_name(state.curb.blockface_id.as_deref());

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(default_name)
            .save_file()
        {
            events.push(AppIntent::ExportPathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
