use crate::app::gesture::GestureState;

/// Darstellung des Segment-Editors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Proportionaler Streifen mit Drag-Gesten
    #[default]
    Strip,
    /// Tabelle mit Zahlenfeld
    Table,
}

/// Zustand des Segment-Editors
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Aktive Darstellung
    pub mode: EditorMode,
    /// Zeiger-Gesten des Streifens
    pub gesture: GestureState,
    /// Index des Labels, dessen Typ-Menü geöffnet ist
    pub open_label: Option<usize>,
}

impl EditorState {
    /// Erstellt den Standard-Editorzustand (Streifen, keine Geste).
    pub fn new() -> Self {
        Self::default()
    }

    /// Schließt Menüs und bricht laufende Gesten ab.
    pub fn reset_transient(&mut self) {
        self.gesture = GestureState::new();
        self.open_label = None;
    }
}
