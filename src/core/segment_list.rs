//! Invarianten-erhaltende Operationen auf einer Segmentliste.
//!
//! Alle Funktionen sind rein: Sie verändern die Eingabe nicht, sondern geben
//! eine neue Liste oder einen [`SegmentError`] zurück. Invariante: höchstens
//! ein `Unknown`-Segment, Summe aller Längen <= Blockseitenlänge, der Rest
//! liegt im `Unknown`-Segment.

use super::segment::{round_length, Segment, SegmentType};
use thiserror::Error;

/// Toleranz für Längenvergleiche (Float-Rundung).
pub const LENGTH_EPSILON: f64 = 1e-6;

/// Fehler einer Segment-Operation. Die Texte werden 1:1 in der UI angezeigt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SegmentError {
    #[error("Segment index out of bounds")]
    IndexOutOfBounds,
    #[error("No Unknown segment found")]
    NoUnknownSegment,
    #[error("Insufficient space in Unknown segment")]
    InsufficientSpace,
    #[error("Total segment length exceeds blockface length")]
    ExceedsBlockfaceLength,
    #[error("Cannot adjust start position of first segment")]
    FirstSegmentStart,
    #[error("Invalid start position adjustment")]
    InvalidStartAdjustment,
    #[error("Multiple Unknown segments found")]
    MultipleUnknownSegments,
    #[error("Segment length must not be negative")]
    NegativeLength,
    #[error("Segment length must be a finite number")]
    NonFiniteLength,
}

/// Ergebnis einer Segment-Operation
pub type SegmentResult = Result<Vec<Segment>, SegmentError>;

/// Index des (ersten) `Unknown`-Segments.
pub fn find_unknown(segments: &[Segment]) -> Option<usize> {
    segments.iter().position(|s| s.kind.is_unknown())
}

/// Summe aller Segmentlängen.
pub fn total_length(segments: &[Segment]) -> f64 {
    segments.iter().map(|s| s.length).sum()
}

/// Kumulierte Startpositionen aller Segmente.
pub fn segment_starts(segments: &[Segment]) -> Vec<f64> {
    let mut start = 0.0;
    segments
        .iter()
        .map(|s| {
            let current = start;
            start += s.length;
            current
        })
        .collect()
}

/// Prüft die Listen-Invariante gegen die Blockseitenlänge.
pub fn validate_segments(segments: &[Segment], blockface_length: f64) -> Result<(), SegmentError> {
    if segments.iter().any(|s| !s.length.is_finite()) {
        return Err(SegmentError::NonFiniteLength);
    }
    if segments.iter().any(|s| s.length < -LENGTH_EPSILON) {
        return Err(SegmentError::NegativeLength);
    }
    if segments.iter().filter(|s| s.kind.is_unknown()).count() > 1 {
        return Err(SegmentError::MultipleUnknownSegments);
    }
    check_total(segments, blockface_length)
}

fn check_total(segments: &[Segment], blockface_length: f64) -> Result<(), SegmentError> {
    if total_length(segments) > blockface_length + LENGTH_EPSILON {
        return Err(SegmentError::ExceedsBlockfaceLength);
    }
    Ok(())
}

fn require_unknown(segments: &[Segment]) -> Result<usize, SegmentError> {
    find_unknown(segments).ok_or(SegmentError::NoUnknownSegment)
}

/// NaN und Unendlich fallen durch jeden Größenvergleich und werden vorher abgewiesen.
fn require_finite(value: f64) -> Result<f64, SegmentError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SegmentError::NonFiniteLength)
    }
}

/// Setzt die Länge von `segments[index]` und gleicht die Differenz über das
/// `Unknown`-Segment aus.
pub fn update_segment_lengths(
    segments: &[Segment],
    index: usize,
    new_length: f64,
    blockface_length: f64,
    precision: f64,
) -> SegmentResult {
    if index >= segments.len() {
        return Err(SegmentError::IndexOutOfBounds);
    }
    let unknown_index = require_unknown(segments)?;

    let new_length = round_length(require_finite(new_length)?, precision);
    if new_length < 0.0 {
        return Err(SegmentError::NegativeLength);
    }

    let mut updated = segments.to_vec();
    if index == unknown_index {
        // Ziel und Ausgleich sind dasselbe Segment: Delta hebt sich auf
        return Ok(updated);
    }

    let delta = new_length - segments[index].length;
    let unknown_length = round_length(segments[unknown_index].length - delta, precision);
    if unknown_length < -LENGTH_EPSILON {
        return Err(SegmentError::InsufficientSpace);
    }

    updated[index].length = new_length;
    updated[unknown_index].length = unknown_length.max(0.0);

    check_total(&updated, blockface_length)?;
    Ok(updated)
}

/// Spaltet ein neues Segment vom `Unknown`-Segment ab und fügt es direkt
/// hinter `target_index` ein.
///
/// Ist das Ziel selbst das `Unknown`-Segment, übernimmt das neue Segment
/// dessen Index und `Unknown` rutscht eine Position nach rechts. Eine zu
/// große Länge wird stillschweigend auf den verfügbaren Rest gekappt.
pub fn insert_segment(
    segments: &[Segment],
    target_index: usize,
    kind: SegmentType,
    length: f64,
    blockface_length: f64,
    precision: f64,
) -> SegmentResult {
    split_from_unknown(
        segments,
        target_index,
        kind,
        length,
        blockface_length,
        precision,
        |target, unknown| if target == unknown { target } else { target + 1 },
    )
}

/// Wie [`insert_segment`], platziert das neue Segment aber links vom Ziel.
pub fn insert_segment_left(
    segments: &[Segment],
    target_index: usize,
    kind: SegmentType,
    length: f64,
    blockface_length: f64,
    precision: f64,
) -> SegmentResult {
    split_from_unknown(
        segments,
        target_index,
        kind,
        length,
        blockface_length,
        precision,
        |target, _| target,
    )
}

fn split_from_unknown(
    segments: &[Segment],
    target_index: usize,
    kind: SegmentType,
    length: f64,
    blockface_length: f64,
    precision: f64,
    insert_position: impl Fn(usize, usize) -> usize,
) -> SegmentResult {
    if target_index >= segments.len() {
        return Err(SegmentError::IndexOutOfBounds);
    }
    let unknown_index = require_unknown(segments)?;

    let available = require_finite(segments[unknown_index].length)?;
    let amount = round_length(require_finite(length)?.min(available), precision);
    if amount <= 0.0 {
        return Err(SegmentError::InsufficientSpace);
    }

    let mut updated = segments.to_vec();
    updated[unknown_index].length = round_length(available - amount, precision).max(0.0);

    let position = insert_position(target_index, unknown_index);
    updated.insert(position, Segment::new(kind, amount, precision));

    check_total(&updated, blockface_length)?;
    Ok(updated)
}

/// Verschiebt den Start von `segments[index]` auf `new_start`.
///
/// Die Differenz wird zwischen dem Vorgänger und dem `Unknown`-Segment
/// verschoben. Ist der Vorgänger selbst `Unknown`, ändert sich nur dessen
/// Länge.
pub fn adjust_segment_start_position(
    segments: &[Segment],
    index: usize,
    new_start: f64,
    blockface_length: f64,
    precision: f64,
) -> SegmentResult {
    if index == 0 {
        return Err(SegmentError::FirstSegmentStart);
    }
    if index >= segments.len() {
        return Err(SegmentError::IndexOutOfBounds);
    }
    let unknown_index = require_unknown(segments)?;
    let new_start = require_finite(new_start)?;

    let current_start: f64 = segments[..index].iter().map(|s| s.length).sum();
    let delta = round_length(round_length(new_start, precision) - current_start, precision);

    let previous = index - 1;
    let mut updated = segments.to_vec();

    if previous == unknown_index {
        let previous_length = round_length(segments[previous].length + delta, precision);
        if previous_length < -LENGTH_EPSILON {
            return Err(SegmentError::InvalidStartAdjustment);
        }
        updated[previous].length = previous_length.max(0.0);
    } else {
        let previous_length = round_length(segments[previous].length + delta, precision);
        let unknown_length = round_length(segments[unknown_index].length - delta, precision);
        if previous_length < -LENGTH_EPSILON || unknown_length < -LENGTH_EPSILON {
            return Err(SegmentError::InvalidStartAdjustment);
        }
        updated[previous].length = previous_length.max(0.0);
        updated[unknown_index].length = unknown_length.max(0.0);
    }

    check_total(&updated, blockface_length)?;
    Ok(updated)
}

/// Vertauscht zwei Segmente (Drag-and-Drop-Tausch).
pub fn swap_segments(segments: &[Segment], a: usize, b: usize) -> SegmentResult {
    if a >= segments.len() || b >= segments.len() {
        return Err(SegmentError::IndexOutOfBounds);
    }
    let mut updated = segments.to_vec();
    updated.swap(a, b);
    Ok(updated)
}

/// Verschiebt ein Segment von `from` nach `to` (restliche Reihenfolge bleibt).
pub fn move_segment(segments: &[Segment], from: usize, to: usize) -> SegmentResult {
    if from >= segments.len() || to >= segments.len() {
        return Err(SegmentError::IndexOutOfBounds);
    }
    let mut updated = segments.to_vec();
    let segment = updated.remove(from);
    updated.insert(to, segment);
    Ok(updated)
}
