use crate::app::curb_store::CurbAction;
use crate::app::gesture::PointerEvent;
use crate::app::state::{EditorMode, NumberPadField};
use crate::core::BlockfaceSet;
use crate::shared::EditorOptions;
use glam::DVec2;
use std::sync::Arc;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Datensatz & Dateien ─────────────────────────────────────
    /// Hintergrund-Abruf des Datensatzes starten
    FetchDataset,
    /// GeoJSON-Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// GeoJSON-Datei synchron laden
    LoadDatasetFile { path: String },
    /// Geladenen Datensatz übernehmen
    ApplyDataset {
        source: String,
        blockfaces: Arc<BlockfaceSet>,
    },
    /// Ladefehler anzeigen
    ReportDatasetError { message: String },
    /// Export-Dialog anfordern
    RequestExportDialog,
    /// Segmente als JSON schreiben
    ExportSegments { path: String },
    /// Anwendung beenden
    RequestExit,

    // ── Kamera & Viewport ───────────────────────────────────────
    /// Kamera zurücksetzen
    ResetCamera,
    /// Hineinzoomen
    ZoomIn,
    /// Herauszoomen
    ZoomOut,
    /// Kamera auf den Datensatz einpassen
    FitToDataset,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera verschieben
    PanCamera { delta: DVec2 },
    /// Kamera zoomen
    ZoomCamera {
        factor: f64,
        focus_world: Option<DVec2>,
    },

    // ── Auswahl ─────────────────────────────────────────────────
    /// Nächste Blockseite innerhalb `max_distance` auswählen
    SelectBlockfaceAt { world_pos: DVec2, max_distance: f64 },
    /// Auswahl aufheben
    ClearSelection,

    // ── Segment-Editor ──────────────────────────────────────────
    /// Editor-Darstellung setzen
    SetEditorMode { mode: EditorMode },
    /// Store-Aktion ausführen (mit Undo-Snapshot)
    DispatchCurbAction { action: CurbAction },
    /// Typ-Menü eines Labels umschalten
    ToggleLabelMenu { index: usize },
    /// Typ-Menü schließen
    CloseLabelMenu,
    /// Zeiger-Ereignis an den Gesten-Automaten geben
    HandleStripPointer {
        event: PointerEvent,
        strip_height: f32,
    },
    /// Zahlenfeld öffnen
    OpenNumberPad { index: usize, field: NumberPadField },
    /// Zahlenfeld bestätigen
    ConfirmNumberPad,
    /// Zahlenfeld schließen
    CloseNumberPad,

    // ── History ─────────────────────────────────────────────────
    /// Undo
    Undo,
    /// Redo
    Redo,

    // ── Optionen ────────────────────────────────────────────────
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen zurücksetzen und speichern
    ResetOptions,
}
