use crate::app::curb_store::CurbState;
use crate::app::dataset_loader::DatasetLoader;
use crate::app::gesture::GestureContext;
use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::{build_segmented_highlight, Blockface, BlockfaceSet, HighlightSlice};
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{EditorState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Geladener Blockseiten-Datensatz (None = noch nichts geladen)
    pub blockfaces: Option<Arc<BlockfaceSet>>,
    /// Herkunft des Datensatzes (URL oder Pfad)
    pub dataset_source: Option<String>,
    /// Ausgewählte Blockseite
    pub selected: Option<Blockface>,
    /// Segment-Store der ausgewählten Blockseite
    pub curb: CurbState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Editor-State (Darstellung, Gesten, Menüs)
    pub editor: EditorState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Hintergrund-Abruf des Datensatzes
    pub dataset_loader: DatasetLoader,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            blockfaces: None,
            dataset_source: None,
            selected: None,
            curb: CurbState::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            editor: EditorState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(200),
            options: EditorOptions::default(),
            dataset_loader: DatasetLoader::new(),
            should_exit: false,
        }
    }

    /// Anzahl geladener Blockseiten (für UI-Anzeige)
    pub fn blockface_count(&self) -> usize {
        self.blockfaces.as_ref().map_or(0, |set| set.len())
    }

    /// Anzahl Segmente der aktuellen Blockseite
    pub fn segment_count(&self) -> usize {
        self.curb.segments.len()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Farbige Teilstücke der ausgewählten Blockseite.
    pub fn highlight(&self) -> Vec<HighlightSlice> {
        match &self.selected {
            Some(blockface) if self.curb.is_active() => build_segmented_highlight(
                &blockface.coords(),
                &self.curb.segments,
                self.curb.blockface_length,
            ),
            _ => Vec::new(),
        }
    }

    /// Gesten-Kontext für einen Streifen der Höhe `strip_height`.
    pub fn gesture_context(&self, strip_height: f32) -> GestureContext<'_> {
        GestureContext {
            segments: &self.curb.segments,
            blockface_length: self.curb.blockface_length,
            strip_height,
            snap_threshold: self.options.snap_threshold,
            precision: self.options.length_precision,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
