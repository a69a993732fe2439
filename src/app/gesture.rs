//! Zeiger-Gesten des Segment-Streifens als ein Zustandsautomat.
//!
//! Maus und Touch werden von der UI auf [`PointerEvent`] abgebildet.
//! Positionen sind Pixel entlang der Streifenachse (0 = Oberkante).
//! Während einer Geste wird nur eine Vorschau berechnet; übernommen wird
//! erst beim Loslassen. `Cancel` verwirft die Geste.

use super::curb_store::{CurbAction, SegmentReplacement, SegmentUpdater};
use crate::core::{
    find_unknown, round_length, segment_starts, swap_segments, update_segment_lengths, Segment,
};
use std::sync::Arc;

/// Mindestweg in Pixeln, ab dem ein Drücken als Drag zählt.
pub const DRAG_THRESHOLD_PX: f32 = 4.0;

/// Was unter dem Zeiger lag, als die Geste begann
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Segment-Box mit Index
    Segment(usize),
    /// Divider zwischen Segment `i` und `i + 1`
    Divider(usize),
}

/// Vereinheitlichtes Zeiger-Ereignis (Maus oder Touch)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Zeiger gedrückt
    Down { pos: f32, target: PointerTarget },
    /// Zeiger bewegt
    Move { pos: f32 },
    /// Zeiger losgelassen
    Up { pos: f32 },
    /// Geste abbrechen (Fokusverlust, Escape)
    Cancel,
}

/// Aktive Geste
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Gesture {
    /// Keine Geste aktiv
    #[default]
    Idle,
    /// Segment wird per Drag-and-Drop verschoben
    Reordering {
        from: usize,
        origin: f32,
        current: f32,
    },
    /// Divider wird gezogen
    Resizing {
        divider: usize,
        origin: f32,
        current: f32,
    },
}

/// Geometrie und Parameter für die Auswertung einer Geste
#[derive(Debug, Clone, Copy)]
pub struct GestureContext<'a> {
    /// Aktuelle Segmentliste
    pub segments: &'a [Segment],
    /// Blockseitenlänge in Fuß
    pub blockface_length: f64,
    /// Höhe des Streifens in Pixeln
    pub strip_height: f32,
    /// Snap-Schwelle in Fuß
    pub snap_threshold: f64,
    /// Rundungs-Präzision
    pub precision: f64,
}

impl GestureContext<'_> {
    /// Pixel pro Fuß entlang des Streifens.
    pub fn pixels_per_foot(&self) -> f64 {
        if self.blockface_length <= 0.0 {
            return 0.0;
        }
        f64::from(self.strip_height) / self.blockface_length
    }

    /// Wandelt ein Pixel-Delta in Fuß um.
    pub fn pixels_to_feet(&self, pixels: f32) -> f64 {
        let ppf = self.pixels_per_foot();
        if ppf <= 0.0 {
            return 0.0;
        }
        f64::from(pixels) / ppf
    }

    /// Index des Segments an einer Pixelposition (geklemmt auf die Liste).
    pub fn segment_at(&self, pos: f32) -> Option<usize> {
        if self.segments.is_empty() {
            return None;
        }
        let feet = self.pixels_to_feet(pos.max(0.0));
        let starts = segment_starts(self.segments);
        let index = starts
            .iter()
            .zip(self.segments)
            .position(|(start, segment)| feet < start + segment.length)
            .unwrap_or(self.segments.len() - 1);
        Some(index)
    }
}

/// Ergebnis eines Ereignisses
#[derive(Debug, Clone)]
pub enum GestureOutcome {
    /// Nichts zu übernehmen
    None,
    /// Store-Aktion ausführen
    Commit(CurbAction),
    /// Geste wurde verworfen
    Cancelled,
}

/// Zustand des Gesten-Automaten
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    /// Aktuelle Geste
    pub gesture: Gesture,
}

impl GestureState {
    /// Erstellt einen Automaten im Ruhezustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, solange eine Geste läuft.
    pub fn is_active(&self) -> bool {
        self.gesture != Gesture::Idle
    }

    /// Verarbeitet ein Zeiger-Ereignis.
    pub fn handle(&mut self, event: PointerEvent, ctx: &GestureContext<'_>) -> GestureOutcome {
        match (std::mem::take(&mut self.gesture), event) {
            (Gesture::Idle, PointerEvent::Down { pos, target }) => {
                self.gesture = match target {
                    PointerTarget::Segment(from) if from < ctx.segments.len() => {
                        Gesture::Reordering {
                            from,
                            origin: pos,
                            current: pos,
                        }
                    }
                    PointerTarget::Divider(divider) if divider + 1 < ctx.segments.len() => {
                        Gesture::Resizing {
                            divider,
                            origin: pos,
                            current: pos,
                        }
                    }
                    _ => Gesture::Idle,
                };
                GestureOutcome::None
            }
            (Gesture::Reordering { from, origin, .. }, PointerEvent::Move { pos }) => {
                self.gesture = Gesture::Reordering {
                    from,
                    origin,
                    current: pos,
                };
                GestureOutcome::None
            }
            (Gesture::Resizing { divider, origin, .. }, PointerEvent::Move { pos }) => {
                self.gesture = Gesture::Resizing {
                    divider,
                    origin,
                    current: pos,
                };
                GestureOutcome::None
            }
            (Gesture::Reordering { from, origin, .. }, PointerEvent::Up { pos }) => {
                if (pos - origin).abs() < DRAG_THRESHOLD_PX {
                    return GestureOutcome::None;
                }
                match ctx.segment_at(pos) {
                    Some(to) if to != from => {
                        log::debug!("Segment {} mit {} getauscht", from, to);
                        GestureOutcome::Commit(CurbAction::ReplaceSegments(
                            SegmentReplacement::Updater(swap_updater(from, to)),
                        ))
                    }
                    _ => GestureOutcome::None,
                }
            }
            (Gesture::Resizing { divider, origin, .. }, PointerEvent::Up { pos }) => {
                if (pos - origin).abs() < f32::EPSILON {
                    return GestureOutcome::None;
                }
                let delta_ft = ctx.pixels_to_feet(pos - origin);
                match resize_target(ctx, divider, delta_ft) {
                    Some((index, length)) => {
                        GestureOutcome::Commit(CurbAction::UpdateSegmentLength { index, length })
                    }
                    None => GestureOutcome::None,
                }
            }
            (Gesture::Idle, PointerEvent::Cancel) => GestureOutcome::None,
            (_, PointerEvent::Cancel) => {
                log::debug!("Geste abgebrochen");
                GestureOutcome::Cancelled
            }
            (gesture, _) => {
                self.gesture = gesture;
                GestureOutcome::None
            }
        }
    }

    /// Vorschau der Segmentliste während eines Divider-Drags.
    pub fn resize_preview(&self, ctx: &GestureContext<'_>) -> Option<Vec<Segment>> {
        let Gesture::Resizing {
            divider,
            origin,
            current,
        } = self.gesture
        else {
            return None;
        };
        let (index, length) = resize_target(ctx, divider, ctx.pixels_to_feet(current - origin))?;
        update_segment_lengths(
            ctx.segments,
            index,
            length,
            ctx.blockface_length,
            ctx.precision,
        )
        .ok()
    }

    /// Gezogenes Segment und Pixel-Versatz seit Drag-Beginn.
    pub fn reorder_preview(&self) -> Option<(usize, f32)> {
        match self.gesture {
            Gesture::Reordering {
                from,
                origin,
                current,
            } if (current - origin).abs() >= DRAG_THRESHOLD_PX => Some((from, current - origin)),
            _ => None,
        }
    }
}

/// Updater, der zwei Segmente vertauscht; ungültige Indizes lassen die Liste stehen.
pub fn swap_updater(a: usize, b: usize) -> SegmentUpdater {
    Arc::new(move |segments: &[Segment]| {
        swap_segments(segments, a, b).unwrap_or_else(|_| segments.to_vec())
    })
}

/// Ermittelt Ziel-Segment und neue Länge für einen Divider-Drag um `delta_ft`.
///
/// Der Divider zwischen `i` und `i + 1` ändert Segment `i`; ist `i` das
/// `Unknown`-Segment, wird stattdessen `i + 1` mit umgekehrtem Vorzeichen
/// geändert. Die Länge wird auf `[0, alt + Unknown]` begrenzt und rastet
/// auf den vollen `Unknown`-Rest ein, wenn weniger als die Snap-Schwelle
/// übrig bliebe.
pub fn resize_target(
    ctx: &GestureContext<'_>,
    divider: usize,
    delta_ft: f64,
) -> Option<(usize, f64)> {
    let segments = ctx.segments;
    if divider + 1 >= segments.len() {
        return None;
    }
    let unknown_index = find_unknown(segments)?;

    let (index, delta) = if divider == unknown_index {
        (divider + 1, -delta_ft)
    } else {
        (divider, delta_ft)
    };
    if index == unknown_index {
        return None;
    }

    let old_length = segments[index].length;
    let unknown_length = segments[unknown_index].length;
    let max_length = old_length + unknown_length;

    let mut new_length = (old_length + delta).clamp(0.0, max_length);
    if max_length - new_length < ctx.snap_threshold {
        new_length = max_length;
    }

    Some((index, round_length(new_length, ctx.precision)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::curb_store::{reduce, CurbState};
    use crate::core::SegmentType;
    use approx::assert_relative_eq;

    /// `[Parking:30, Unknown:50, Loading:20]` auf 100 px → 1 px = 1 ft
    fn segments() -> Vec<Segment> {
        vec![
            Segment::new(SegmentType::Parking, 30.0, 0.1),
            Segment::new(SegmentType::Unknown, 50.0, 0.1),
            Segment::new(SegmentType::Loading, 20.0, 0.1),
        ]
    }

    fn ctx(segments: &[Segment]) -> GestureContext<'_> {
        GestureContext {
            segments,
            blockface_length: 100.0,
            strip_height: 100.0,
            snap_threshold: 1.0,
            precision: 0.1,
        }
    }

    fn apply(segments: &[Segment], action: CurbAction) -> Vec<Segment> {
        let state = CurbState {
            segments: segments.to_vec(),
            blockface_length: 100.0,
            blockface_id: Some("bf".into()),
        };
        reduce(&state, action, 0.1).expect("gültige Aktion").segments
    }

    #[test]
    fn divider_drag_resizes_left_segment() {
        let segments = segments();
        let ctx = ctx(&segments);
        let mut gesture = GestureState::new();

        gesture.handle(
            PointerEvent::Down {
                pos: 30.0,
                target: PointerTarget::Divider(0),
            },
            &ctx,
        );
        gesture.handle(PointerEvent::Move { pos: 40.0 }, &ctx);

        let preview = gesture.resize_preview(&ctx).expect("Vorschau");
        assert_relative_eq!(preview[0].length, 40.0);
        assert_relative_eq!(preview[1].length, 40.0);

        let outcome = gesture.handle(PointerEvent::Up { pos: 40.0 }, &ctx);
        match outcome {
            GestureOutcome::Commit(CurbAction::UpdateSegmentLength { index, length }) => {
                assert_eq!(index, 0);
                assert_relative_eq!(length, 40.0);
            }
            other => panic!("unerwartet: {:?}", other),
        }
        assert!(!gesture.is_active());
    }

    #[test]
    fn divider_after_unknown_resizes_right_segment_inverted() {
        let segments = segments();
        let ctx = ctx(&segments);
        // Divider 1 liegt zwischen Unknown und Loading; Drag nach oben vergrößert Loading
        let (index, length) = resize_target(&ctx, 1, -10.0).unwrap();
        assert_eq!(index, 2);
        assert_relative_eq!(length, 30.0);
    }

    #[test]
    fn snap_to_zero_takes_whole_unknown() {
        let segments = segments();
        let ctx = ctx(&segments);
        let (index, length) = resize_target(&ctx, 0, 49.5).unwrap();
        assert_eq!(index, 0);
        assert_relative_eq!(length, 80.0);

        let result = apply(&segments, CurbAction::UpdateSegmentLength { index, length });
        assert_relative_eq!(result[1].length, 0.0);
    }

    #[test]
    fn drag_beyond_available_space_is_capped() {
        let segments = segments();
        let ctx = ctx(&segments);
        let (_, length) = resize_target(&ctx, 0, 500.0).unwrap();
        assert_relative_eq!(length, 80.0);
        let (_, length) = resize_target(&ctx, 0, -500.0).unwrap();
        assert_relative_eq!(length, 0.0);
    }

    #[test]
    fn reorder_drop_on_other_segment_swaps() {
        let segments = segments();
        let ctx = ctx(&segments);
        let mut gesture = GestureState::new();

        gesture.handle(
            PointerEvent::Down {
                pos: 10.0,
                target: PointerTarget::Segment(0),
            },
            &ctx,
        );
        gesture.handle(PointerEvent::Move { pos: 90.0 }, &ctx);
        assert_eq!(gesture.reorder_preview(), Some((0, 80.0)));

        let outcome = gesture.handle(PointerEvent::Up { pos: 90.0 }, &ctx);
        let GestureOutcome::Commit(action) = outcome else {
            panic!("Tausch erwartet");
        };
        let result = apply(&segments, action);
        assert_eq!(result[0].id, segments[2].id);
        assert_eq!(result[2].id, segments[0].id);
    }

    #[test]
    fn short_press_does_not_reorder() {
        let segments = segments();
        let ctx = ctx(&segments);
        let mut gesture = GestureState::new();
        gesture.handle(
            PointerEvent::Down {
                pos: 10.0,
                target: PointerTarget::Segment(0),
            },
            &ctx,
        );
        let outcome = gesture.handle(PointerEvent::Up { pos: 12.0 }, &ctx);
        assert!(matches!(outcome, GestureOutcome::None));
    }

    #[test]
    fn cancel_aborts_without_commit() {
        let segments = segments();
        let ctx = ctx(&segments);
        let mut gesture = GestureState::new();
        gesture.handle(
            PointerEvent::Down {
                pos: 30.0,
                target: PointerTarget::Divider(0),
            },
            &ctx,
        );
        gesture.handle(PointerEvent::Move { pos: 60.0 }, &ctx);

        let outcome = gesture.handle(PointerEvent::Cancel, &ctx);
        assert!(matches!(outcome, GestureOutcome::Cancelled));
        assert!(!gesture.is_active());
        assert!(matches!(
            gesture.handle(PointerEvent::Up { pos: 60.0 }, &ctx),
            GestureOutcome::None
        ));
    }

    #[test]
    fn segment_at_maps_pixels_to_index() {
        let segments = segments();
        let ctx = ctx(&segments);
        assert_eq!(ctx.segment_at(0.0), Some(0));
        assert_eq!(ctx.segment_at(29.9), Some(0));
        assert_eq!(ctx.segment_at(30.0), Some(1));
        assert_eq!(ctx.segment_at(99.0), Some(2));
        assert_eq!(ctx.segment_at(500.0), Some(2));
    }
}
