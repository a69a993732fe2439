//! Zentrale Konfiguration für Row Canvas.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Datensatz ───────────────────────────────────────────────────────

/// Öffentlicher Socrata-Endpunkt der Blockseiten von San Francisco.
pub const DATASET_URL: &str = "https://data.sfgov.org/resource/pep9-66vw.geojson?$limit=50000";
/// Property mit der Blockseiten-ID, falls das Feature keine Top-Level-ID hat.
pub const ID_PROPERTY: &str = "globalid";
/// Timeout für den Datensatz-Abruf in Sekunden.
pub const FETCH_TIMEOUT_SECS: u64 = 60;

// ── Segmente ────────────────────────────────────────────────────────

/// Rundungs-Präzision für Segmentlängen (Fuß).
pub const LENGTH_PRECISION: f64 = 0.1;
/// Länge eines per "Hinzufügen" abgespaltenen Segments (Fuß).
pub const DEFAULT_ADD_LENGTH: f64 = 20.0;
/// Restlänge, ab der ein Divider-Drag den Unknown-Rest vollständig übernimmt.
pub const SNAP_THRESHOLD: f64 = 1.0;

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f64 = 0.01;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f64 = 200.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f64 = 1.5;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 1.1;

// ── Karte ───────────────────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln.
pub const SELECTION_PICK_RADIUS_PX: f32 = 8.0;
/// Linienstärke normaler Blockseiten in Pixeln.
pub const BLOCKFACE_LINE_WIDTH: f32 = 2.0;
/// Linienstärke der ausgewählten Blockseite.
pub const SELECTED_LINE_WIDTH: f32 = 8.0;
/// Linienstärke der Segment-Hervorhebung.
pub const HIGHLIGHT_LINE_WIDTH: f32 = 5.0;
/// Farbe normaler Blockseiten (RGBA: Grau).
pub const BLOCKFACE_COLOR: [f32; 4] = [0.55, 0.55, 0.6, 1.0];
/// Farbe der ausgewählten Blockseite (RGBA: Gelb).
pub const SELECTED_COLOR: [f32; 4] = [1.0, 0.85, 0.0, 1.0];

// ── Editor ──────────────────────────────────────────────────────────

/// Abstand zwischen gestaffelten Labels in Pixeln.
pub const LABEL_GAP: f32 = 4.0;
/// Breite des Segment-Streifens in Pixeln.
pub const STRIP_WIDTH: f32 = 90.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `row_canvas.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Datensatz ───────────────────────────────────────────────
    /// URL des GeoJSON-Datensatzes
    pub dataset_url: String,
    /// Property mit der Blockseiten-ID
    pub id_property: String,
    /// Timeout für den Abruf in Sekunden
    pub fetch_timeout_secs: u64,

    // ── Segmente ────────────────────────────────────────────────
    /// Rundungs-Präzision für Längen (Fuß)
    pub length_precision: f64,
    /// Standardlänge neuer Segmente (Fuß)
    pub default_add_length: f64,
    /// Snap-Schwelle beim Divider-Drag (Fuß)
    pub snap_threshold: f64,
    /// Neue Blockseiten mit der Beispiel-Aufteilung statt nur `Unknown` starten
    pub seed_example: bool,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f64,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f64,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f64,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f64,

    // ── Karte ───────────────────────────────────────────────────
    /// Pick-Radius für Klick-Selektion in Screen-Pixeln
    pub selection_pick_radius_px: f32,
    /// Linienstärke normaler Blockseiten
    pub blockface_line_width: f32,
    /// Linienstärke der ausgewählten Blockseite
    pub selected_line_width: f32,
    /// Linienstärke der Segment-Hervorhebung
    pub highlight_line_width: f32,
    /// Farbe normaler Blockseiten
    pub blockface_color: [f32; 4],
    /// Farbe der ausgewählten Blockseite
    pub selected_color: [f32; 4],

    // ── Editor ──────────────────────────────────────────────────
    /// Abstand zwischen gestaffelten Labels
    pub label_gap: f32,
    /// Breite des Segment-Streifens
    pub strip_width: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            dataset_url: DATASET_URL.to_string(),
            id_property: ID_PROPERTY.to_string(),
            fetch_timeout_secs: FETCH_TIMEOUT_SECS,

            length_precision: LENGTH_PRECISION,
            default_add_length: DEFAULT_ADD_LENGTH,
            snap_threshold: SNAP_THRESHOLD,
            seed_example: false,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,

            selection_pick_radius_px: SELECTION_PICK_RADIUS_PX,
            blockface_line_width: BLOCKFACE_LINE_WIDTH,
            selected_line_width: SELECTED_LINE_WIDTH,
            highlight_line_width: HIGHLIGHT_LINE_WIDTH,
            blockface_color: BLOCKFACE_COLOR,
            selected_color: SELECTED_COLOR,

            label_gap: LABEL_GAP,
            strip_width: STRIP_WIDTH,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("row_canvas"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("row_canvas.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip_keeps_values() {
        let mut options = EditorOptions::default();
        options.default_add_length = 25.0;
        options.seed_example = true;

        let content = toml::to_string_pretty(&options).expect("serialisierbar");
        let parsed: EditorOptions = toml::from_str(&content).expect("parsebar");
        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: EditorOptions = toml::from_str("length_precision = 1.0").expect("parsebar");
        assert_eq!(parsed.length_precision, 1.0);
        assert_eq!(parsed.default_add_length, DEFAULT_ADD_LENGTH);
        assert_eq!(parsed.dataset_url, DATASET_URL);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let options = EditorOptions::load_from_file(std::path::Path::new(
            "/nonexistent/row_canvas.toml",
        ));
        assert_eq!(options, EditorOptions::default());
    }
}
