//! Bordstein-Store: Zustand der Segmentliste und ihr Reducer.
//!
//! Jede längenverändernde Aktion delegiert an die reinen Funktionen aus
//! `core::segment_list`. Nach jedem Übergang wird die Listen-Invariante
//! geprüft; ein abgelehnter Übergang lässt den alten Zustand unangetastet.

use crate::core::{
    adjust_segment_start_position, find_unknown, insert_segment, insert_segment_left,
    round_length, segment_starts, update_segment_lengths, validate_segments, Segment,
    SegmentError, SegmentType,
};
use std::fmt;
use std::sync::Arc;

/// Beispiel-Aufteilung als Anteile der Blockseitenlänge; der Rest wird `Unknown`.
const SEED_EXAMPLE: [(SegmentType, f64); 4] = [
    (SegmentType::Parking, 0.30),
    (SegmentType::CurbCut, 0.10),
    (SegmentType::Loading, 0.15),
    (SegmentType::Parking, 0.25),
];

/// Zustand der aktuell bearbeiteten Bordsteinkante
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurbState {
    /// Geordnete Segmentliste entlang der Blockseite
    pub segments: Vec<Segment>,
    /// Gesamtlänge der Blockseite in Fuß
    pub blockface_length: f64,
    /// ID der Blockseite (None = nichts ausgewählt)
    pub blockface_id: Option<String>,
}

impl CurbState {
    /// Erstellt einen leeren Store-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index des `Unknown`-Segments.
    pub fn unknown_index(&self) -> Option<usize> {
        find_unknown(&self.segments)
    }

    /// Restlänge im `Unknown`-Segment (0 ohne `Unknown`).
    pub fn unknown_length(&self) -> f64 {
        self.unknown_index()
            .map_or(0.0, |index| self.segments[index].length)
    }

    /// Startpositionen aller Segmente in Fuß.
    pub fn starts(&self) -> Vec<f64> {
        segment_starts(&self.segments)
    }

    /// Gibt `true` zurück, wenn eine Blockseite initialisiert wurde.
    pub fn is_active(&self) -> bool {
        self.blockface_id.is_some()
    }
}

/// Funktion, die aus der aktuellen Liste eine neue berechnet
pub type SegmentUpdater = Arc<dyn Fn(&[Segment]) -> Vec<Segment> + Send + Sync>;

/// Ersatz für die komplette Segmentliste
#[derive(Clone)]
pub enum SegmentReplacement {
    /// Feste neue Liste
    Literal(Vec<Segment>),
    /// Berechnung aus der aktuellen Liste
    Updater(SegmentUpdater),
}

impl SegmentReplacement {
    /// Wendet den Ersatz auf die aktuelle Liste an.
    pub fn resolve(&self, current: &[Segment]) -> Vec<Segment> {
        match self {
            SegmentReplacement::Literal(segments) => segments.clone(),
            SegmentReplacement::Updater(update) => update(current),
        }
    }
}

impl fmt::Debug for SegmentReplacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentReplacement::Literal(segments) => {
                f.debug_tuple("Literal").field(segments).finish()
            }
            SegmentReplacement::Updater(_) => f.write_str("Updater(..)"),
        }
    }
}

/// Aktionen auf dem Bordstein-Store
#[derive(Debug, Clone)]
pub enum CurbAction {
    /// Neue Blockseite: Liste auf ein einzelnes `Unknown` (oder das Beispiel) setzen
    InitializeSegments {
        blockface_id: String,
        length: f64,
        seed: bool,
    },
    /// Typ eines Segments ändern
    UpdateSegmentType { index: usize, kind: SegmentType },
    /// Länge eines Segments ändern (Ausgleich über `Unknown`)
    UpdateSegmentLength { index: usize, length: f64 },
    /// Neues Segment hinter `index` einfügen
    AddSegment {
        index: usize,
        kind: SegmentType,
        length: f64,
    },
    /// Neues Segment links von `index` einfügen
    InsertSegmentLeft {
        index: usize,
        kind: SegmentType,
        length: f64,
    },
    /// Komplette Liste ersetzen
    ReplaceSegments(SegmentReplacement),
    /// Startposition eines Segments verschieben
    UpdateStartPosition { index: usize, start: f64 },
}

impl CurbAction {
    /// Kurzname für Logs.
    pub fn name(&self) -> &'static str {
        match self {
            CurbAction::InitializeSegments { .. } => "InitializeSegments",
            CurbAction::UpdateSegmentType { .. } => "UpdateSegmentType",
            CurbAction::UpdateSegmentLength { .. } => "UpdateSegmentLength",
            CurbAction::AddSegment { .. } => "AddSegment",
            CurbAction::InsertSegmentLeft { .. } => "InsertSegmentLeft",
            CurbAction::ReplaceSegments(_) => "ReplaceSegments",
            CurbAction::UpdateStartPosition { .. } => "UpdateStartPosition",
        }
    }
}

/// Berechnet den Folgezustand für `action`.
///
/// Fehler lassen `state` unverändert; der Aufrufer entscheidet über die
/// Anzeige.
pub fn reduce(
    state: &CurbState,
    action: CurbAction,
    precision: f64,
) -> Result<CurbState, SegmentError> {
    let length = state.blockface_length;

    let segments = match action {
        CurbAction::InitializeSegments {
            blockface_id,
            length,
            seed,
        } => {
            let segments = if seed {
                seed_segments(length, precision)
            } else {
                vec![Segment::new(
                    SegmentType::Unknown,
                    floor_length(length, precision),
                    precision,
                )]
            };
            validate_segments(&segments, length)?;
            return Ok(CurbState {
                segments,
                blockface_length: length,
                blockface_id: Some(blockface_id),
            });
        }
        CurbAction::UpdateSegmentType { index, kind } => {
            if index >= state.segments.len() {
                return Err(SegmentError::IndexOutOfBounds);
            }
            let mut segments = state.segments.clone();
            segments[index].kind = kind;
            segments
        }
        CurbAction::UpdateSegmentLength { index, length: new_length } => {
            update_segment_lengths(&state.segments, index, new_length, length, precision)?
        }
        CurbAction::AddSegment {
            index,
            kind,
            length: new_length,
        } => insert_segment(&state.segments, index, kind, new_length, length, precision)?,
        CurbAction::InsertSegmentLeft {
            index,
            kind,
            length: new_length,
        } => insert_segment_left(&state.segments, index, kind, new_length, length, precision)?,
        CurbAction::ReplaceSegments(replacement) => replacement.resolve(&state.segments),
        CurbAction::UpdateStartPosition { index, start } => {
            adjust_segment_start_position(&state.segments, index, start, length, precision)?
        }
    };

    validate_segments(&segments, length)?;

    Ok(CurbState {
        segments,
        blockface_length: length,
        blockface_id: state.blockface_id.clone(),
    })
}

/// Beispiel-Aufteilung, skaliert auf `length`; der Rest liegt in `Unknown`.
pub fn seed_segments(length: f64, precision: f64) -> Vec<Segment> {
    let mut segments: Vec<Segment> = SEED_EXAMPLE
        .iter()
        .map(|&(kind, share)| Segment::new(kind, floor_length(length * share, precision), precision))
        .collect();

    let used: f64 = segments.iter().map(|s| s.length).sum();
    segments.push(Segment::new(
        SegmentType::Unknown,
        floor_length(length - used, precision).max(0.0),
        precision,
    ));
    segments
}

/// Rundet auf die Präzision ab, damit die Summe die Blockseite nie übersteigt.
fn floor_length(value: f64, precision: f64) -> f64 {
    if precision <= 0.0 || !precision.is_finite() {
        return value;
    }
    let floored = (value / precision + 1e-9).floor() * precision;
    round_length(floored, precision).min(value).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{swap_segments, total_length};
    use approx::assert_relative_eq;

    const PRECISION: f64 = 0.1;

    fn initialized(length: f64) -> CurbState {
        reduce(
            &CurbState::new(),
            CurbAction::InitializeSegments {
                blockface_id: "bf-1".into(),
                length,
                seed: false,
            },
            PRECISION,
        )
        .expect("Initialisierung gültig")
    }

    #[test]
    fn initialize_creates_single_unknown_spanning_length() {
        let state = initialized(150.0);
        assert_eq!(state.segments.len(), 1);
        assert_eq!(state.segments[0].kind, SegmentType::Unknown);
        assert_relative_eq!(state.segments[0].length, 150.0);
        assert_eq!(state.blockface_id.as_deref(), Some("bf-1"));
    }

    #[test]
    fn initialize_never_exceeds_blockface_length() {
        let state = initialized(123.456);
        assert_relative_eq!(state.segments[0].length, 123.4);
        assert!(total_length(&state.segments) <= state.blockface_length);
    }

    #[test]
    fn seeded_initialization_keeps_sum_and_single_unknown() {
        let state = reduce(
            &CurbState::new(),
            CurbAction::InitializeSegments {
                blockface_id: "bf-2".into(),
                length: 317.3,
                seed: true,
            },
            PRECISION,
        )
        .unwrap();

        assert_eq!(state.segments.len(), SEED_EXAMPLE.len() + 1);
        assert_eq!(
            state.segments.iter().filter(|s| s.kind.is_unknown()).count(),
            1
        );
        assert!(total_length(&state.segments) <= 317.3 + 1e-6);
        assert_relative_eq!(total_length(&state.segments), 317.3, epsilon = 0.5);
    }

    #[test]
    fn add_segment_splits_from_unknown() {
        let state = initialized(100.0);
        let next = reduce(
            &state,
            CurbAction::AddSegment {
                index: 0,
                kind: SegmentType::Parking,
                length: 20.0,
            },
            PRECISION,
        )
        .unwrap();

        assert_eq!(next.segments[0].kind, SegmentType::Parking);
        assert_relative_eq!(next.segments[0].length, 20.0);
        assert_relative_eq!(next.segments[1].length, 80.0);
        assert_eq!(next.blockface_id, state.blockface_id);
    }

    #[test]
    fn failed_action_leaves_previous_state_untouched() {
        let state = initialized(100.0);
        let result = reduce(
            &state,
            CurbAction::UpdateSegmentLength {
                index: 5,
                length: 10.0,
            },
            PRECISION,
        );
        assert_eq!(result, Err(SegmentError::IndexOutOfBounds));
        assert_relative_eq!(state.segments[0].length, 100.0);
    }

    #[test]
    fn type_change_to_second_unknown_is_rejected() {
        let state = reduce(
            &initialized(100.0),
            CurbAction::AddSegment {
                index: 0,
                kind: SegmentType::Loading,
                length: 30.0,
            },
            PRECISION,
        )
        .unwrap();

        let loading = state
            .segments
            .iter()
            .position(|s| s.kind == SegmentType::Loading)
            .unwrap();
        let result = reduce(
            &state,
            CurbAction::UpdateSegmentType {
                index: loading,
                kind: SegmentType::Unknown,
            },
            PRECISION,
        );
        assert_eq!(result, Err(SegmentError::MultipleUnknownSegments));
    }

    #[test]
    fn type_change_checks_bounds() {
        let result = reduce(
            &initialized(10.0),
            CurbAction::UpdateSegmentType {
                index: 3,
                kind: SegmentType::Parking,
            },
            PRECISION,
        );
        assert_eq!(result, Err(SegmentError::IndexOutOfBounds));
    }

    #[test]
    fn replace_with_updater_swaps_and_keeps_total() {
        let state = reduce(
            &initialized(100.0),
            CurbAction::AddSegment {
                index: 0,
                kind: SegmentType::BusStop,
                length: 40.0,
            },
            PRECISION,
        )
        .unwrap();

        let updater: SegmentUpdater =
            Arc::new(|segments| swap_segments(segments, 0, 1).unwrap_or_else(|_| segments.to_vec()));
        let next = reduce(
            &state,
            CurbAction::ReplaceSegments(SegmentReplacement::Updater(updater)),
            PRECISION,
        )
        .unwrap();

        assert_eq!(next.segments[0].id, state.segments[1].id);
        assert_eq!(next.segments[1].id, state.segments[0].id);
        assert_relative_eq!(
            total_length(&next.segments),
            total_length(&state.segments)
        );
    }

    #[test]
    fn replace_with_oversized_literal_is_rejected() {
        let state = initialized(50.0);
        let literal = vec![
            Segment::new(SegmentType::Parking, 40.0, PRECISION),
            Segment::new(SegmentType::Unknown, 20.0, PRECISION),
        ];
        let result = reduce(
            &state,
            CurbAction::ReplaceSegments(SegmentReplacement::Literal(literal)),
            PRECISION,
        );
        assert_eq!(result, Err(SegmentError::ExceedsBlockfaceLength));
    }

    #[test]
    fn replace_with_nan_length_is_rejected() {
        let state = initialized(50.0);
        let literal = vec![
            Segment::new(SegmentType::Parking, f64::NAN, PRECISION),
            Segment::new(SegmentType::Unknown, 20.0, PRECISION),
        ];
        let result = reduce(
            &state,
            CurbAction::ReplaceSegments(SegmentReplacement::Literal(literal)),
            PRECISION,
        );
        assert_eq!(result, Err(SegmentError::NonFiniteLength));
    }

    #[test]
    fn start_position_update_moves_boundary() {
        let state = reduce(
            &initialized(100.0),
            CurbAction::InsertSegmentLeft {
                index: 0,
                kind: SegmentType::Parking,
                length: 30.0,
            },
            PRECISION,
        )
        .unwrap();
        let state = reduce(
            &state,
            CurbAction::AddSegment {
                index: 0,
                kind: SegmentType::Loading,
                length: 20.0,
            },
            PRECISION,
        )
        .unwrap();
        // [Parking:30, Loading:20, Unknown:50]
        let next = reduce(
            &state,
            CurbAction::UpdateStartPosition {
                index: 1,
                start: 35.0,
            },
            PRECISION,
        )
        .unwrap();

        assert_relative_eq!(next.segments[0].length, 35.0);
        assert_relative_eq!(next.segments[2].length, 45.0);
        assert_relative_eq!(next.starts()[1], 35.0);
    }

    #[test]
    fn replacement_debug_hides_closure() {
        let updater: SegmentUpdater = Arc::new(|segments| segments.to_vec());
        let text = format!("{:?}", SegmentReplacement::Updater(updater));
        assert_eq!(text, "Updater(..)");
    }
}
