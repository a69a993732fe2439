use crate::app::gesture::PointerEvent;
use crate::app::state::{EditorMode, NumberPadField};
use crate::core::{BlockfaceSet, SegmentType};
use crate::shared::EditorOptions;
use glam::DVec2;
use std::sync::Arc;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Datensatz & Dateien ─────────────────────────────────────
    /// Datensatz von der konfigurierten URL abrufen
    FetchDatasetRequested,
    /// Lokale GeoJSON-Datei öffnen (zeigt Dateidialog)
    OpenDatasetFileRequested,
    /// GeoJSON-Datei wurde im Dialog ausgewählt
    DatasetFileSelected { path: String },
    /// Hintergrund-Abruf erfolgreich abgeschlossen
    DatasetLoaded {
        source: String,
        blockfaces: Arc<BlockfaceSet>,
    },
    /// Hintergrund-Abruf fehlgeschlagen
    DatasetLoadFailed { message: String },
    /// Segmente exportieren (zeigt Dateidialog)
    ExportRequested,
    /// Exportpfad wurde im Dialog ausgewählt
    ExportPathSelected { path: String },
    /// Anwendung beenden
    ExitRequested,

    // ── Kamera ──────────────────────────────────────────────────
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Kamera auf den gesamten Datensatz einpassen
    FitToDatasetRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: DVec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f64,
        focus_world: Option<DVec2>,
    },

    // ── Karte ───────────────────────────────────────────────────
    /// Klick auf die Karte (Blockseite auswählen)
    BlockfaceClicked { world_pos: DVec2 },
    /// Auswahl aufheben
    ClearSelectionRequested,

    // ── Segment-Editor ──────────────────────────────────────────
    /// Editor-Darstellung wechseln
    EditorModeChanged { mode: EditorMode },
    /// Typ eines Segments ändern
    SegmentTypeChanged { index: usize, kind: SegmentType },
    /// Neues Segment hinter `index` (Tabellen-Button)
    AddSegmentRequested { index: usize },
    /// Neues Segment links von `index` (Label-Menü)
    InsertLeftRequested { index: usize },
    /// Typ-Menü eines Labels öffnen/schließen
    LabelMenuToggled { index: usize },
    /// Typ-Menü schließen
    LabelMenuClosed,
    /// Zeiger-Ereignis auf dem Segment-Streifen
    StripPointer {
        event: PointerEvent,
        strip_height: f32,
    },
    /// Zahlenfeld für eine Tabellenzelle öffnen
    NumberPadOpened { index: usize, field: NumberPadField },
    /// Eingabe im Zahlenfeld bestätigen
    NumberPadConfirmed,
    /// Zahlenfeld ohne Übernahme schließen
    NumberPadCancelled,

    // ── History ─────────────────────────────────────────────────
    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,

    // ── Optionen ────────────────────────────────────────────────
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofort anwenden)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
