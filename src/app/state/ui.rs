use super::NumberPadState;

/// UI-bezogener Anwendungszustand (Dialoge, Statuszeile)
#[derive(Default)]
pub struct UiState {
    /// Ob der GeoJSON-Öffnen-Dialog geöffnet werden soll
    pub show_open_dialog: bool,
    /// Ob der Export-Dialog geöffnet werden soll
    pub show_export_dialog: bool,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Temporäre Statusnachricht (Ladeergebnis, abgelehnte Aktion)
    pub status_message: Option<String>,
    /// Geöffnetes Zahlenfeld der Tabelle
    pub number_pad: Option<NumberPadState>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}
