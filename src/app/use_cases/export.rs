//! Export der Segmentliste als JSON.

use crate::app::AppState;
use serde::{Deserialize, Serialize};

/// Ein exportiertes Segment inkl. berechneter Startposition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedSegment {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: crate::core::SegmentType,
    pub length: f64,
    pub start: f64,
}

/// Exportformat einer Blockseite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentExport {
    pub blockface_id: String,
    pub blockface_length: f64,
    pub segments: Vec<ExportedSegment>,
}

/// Baut das Exportformat aus dem aktuellen Store.
pub fn build_export(state: &AppState) -> anyhow::Result<SegmentExport> {
    let Some(blockface_id) = state.curb.blockface_id.clone() else {
        anyhow::bail!("Keine Blockseite ausgewählt");
    };

    let segments = state
        .curb
        .segments
        .iter()
        .zip(state.curb.starts())
        .map(|(segment, start)| ExportedSegment {
            id: segment.id.clone(),
            kind: segment.kind,
            length: segment.length,
            start,
        })
        .collect();

    Ok(SegmentExport {
        blockface_id,
        blockface_length: state.curb.blockface_length,
        segments,
    })
}

/// Öffnet den Export-Dialog, sofern etwas zu exportieren ist.
pub fn request_export(state: &mut AppState) {
    if state.curb.is_active() {
        state.ui.show_export_dialog = true;
    } else {
        state.ui.status_message = Some("Keine Blockseite ausgewählt".to_string());
    }
}

/// Schreibt den Export als formatiertes JSON nach `path`.
pub fn export_segments(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let export = build_export(state)?;
    let content = serde_json::to_string_pretty(&export)?;
    std::fs::write(path, content)?;

    let msg = format!("{} Segmente exportiert nach {}", export.segments.len(), path);
    log::info!("{}", msg);
    state.ui.status_message = Some(msg);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::curb_store::CurbState;
    use crate::core::{Segment, SegmentType};

    #[test]
    fn export_contains_starts_and_type_labels() {
        let mut state = AppState::new();
        state.curb = CurbState {
            segments: vec![
                Segment::new(SegmentType::CurbCut, 12.0, 0.1),
                Segment::new(SegmentType::Unknown, 88.0, 0.1),
            ],
            blockface_length: 100.0,
            blockface_id: Some("bf-7".into()),
        };

        let export = build_export(&state).unwrap();
        assert_eq!(export.segments[1].start, 12.0);

        let json = serde_json::to_value(&export).unwrap();
        assert_eq!(json["blockface_id"], "bf-7");
        assert_eq!(json["segments"][0]["type"], "Curb Cut");
        assert_eq!(json["segments"][1]["start"], 12.0);
    }

    #[test]
    fn export_without_selection_fails() {
        let state = AppState::new();
        assert!(build_export(&state).is_err());
    }
}
