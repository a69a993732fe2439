//! Segmentierte Hervorhebung: teilt die Blockseiten-Linie proportional zu
//! den Segmentlängen und färbt jedes Stück nach Segment-Typ.

use super::geo::{line_length_m, slice_line_m, LonLat};
use super::segment::{Segment, SegmentType};
use super::segment_list::segment_starts;

/// Ein eingefärbtes Teilstück der Blockseite
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightSlice {
    /// ID des zugehörigen Segments
    pub segment_id: String,
    /// Segment-Typ (bestimmt die Farbe)
    pub kind: SegmentType,
    /// Linienstück `[lon, lat]`; leer, wenn die Berechnung fehlschlug
    pub coords: Vec<LonLat>,
}

impl HighlightSlice {
    /// Palettenfarbe des Stücks.
    pub fn color(&self) -> [u8; 3] {
        self.kind.color()
    }
}

/// Schneidet die Linie `coords` entsprechend der Segmentliste in Stücke.
///
/// Die Segmentpositionen werden relativ zur Blockseitenlänge (Fuß) auf die
/// geodätische Linienlänge (Meter) abgebildet. Ein Stück, das nicht
/// berechnet werden kann, wird geloggt und bleibt ohne Koordinaten.
pub fn build_segmented_highlight(
    coords: &[LonLat],
    segments: &[Segment],
    blockface_length: f64,
) -> Vec<HighlightSlice> {
    let line_length = line_length_m(coords);
    let starts = segment_starts(segments);

    segments
        .iter()
        .zip(starts)
        .map(|(segment, start)| {
            let coords = if blockface_length > 0.0 {
                let start_m = start / blockface_length * line_length;
                let end_m = (start + segment.length) / blockface_length * line_length;
                match slice_line_m(coords, start_m, end_m) {
                    Ok(slice) => slice,
                    Err(e) => {
                        log::error!("Highlight für Segment {} fehlgeschlagen: {}", segment.id, e);
                        Vec::new()
                    }
                }
            } else {
                Vec::new()
            };

            HighlightSlice {
                segment_id: segment.id.clone(),
                kind: segment.kind,
                coords,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const LINE: [LonLat; 3] = [
        [-122.4194, 37.7749],
        [-122.4183, 37.7749],
        [-122.4183, 37.7758],
    ];

    fn seg(kind: SegmentType, length: f64) -> Segment {
        Segment::new(kind, length, 0.1)
    }

    #[test]
    fn slices_are_proportional_to_segment_lengths() {
        let segments = vec![
            seg(SegmentType::Parking, 25.0),
            seg(SegmentType::Unknown, 50.0),
            seg(SegmentType::Loading, 25.0),
        ];
        let slices = build_segmented_highlight(&LINE, &segments, 100.0);
        let total = line_length_m(&LINE);

        assert_eq!(slices.len(), 3);
        assert_relative_eq!(line_length_m(&slices[0].coords), total * 0.25, epsilon = 1e-3);
        assert_relative_eq!(line_length_m(&slices[1].coords), total * 0.5, epsilon = 1e-3);
        assert_relative_eq!(line_length_m(&slices[2].coords), total * 0.25, epsilon = 1e-3);
        assert_eq!(slices[2].color(), SegmentType::Loading.color());
    }

    #[test]
    fn slices_connect_end_to_start() {
        let segments = vec![
            seg(SegmentType::Parking, 40.0),
            seg(SegmentType::Unknown, 60.0),
        ];
        let slices = build_segmented_highlight(&LINE, &segments, 100.0);
        let end_first = *slices[0].coords.last().unwrap();
        let start_second = slices[1].coords[0];
        assert_relative_eq!(end_first[0], start_second[0], epsilon = 1e-9);
        assert_relative_eq!(end_first[1], start_second[1], epsilon = 1e-9);
    }

    #[test]
    fn failed_slice_yields_empty_coordinates() {
        // Segmente länger als die Blockseite → letztes Stück liegt außerhalb
        let segments = vec![
            seg(SegmentType::Parking, 80.0),
            seg(SegmentType::Unknown, 80.0),
        ];
        let slices = build_segmented_highlight(&LINE, &segments, 100.0);
        assert!(!slices[0].coords.is_empty());
        assert!(slices[1].coords.is_empty());
    }

    #[test]
    fn degenerate_line_yields_empty_slices() {
        let segments = vec![seg(SegmentType::Unknown, 10.0)];
        let slices = build_segmented_highlight(&LINE[..1], &segments, 10.0);
        assert!(slices[0].coords.is_empty());
    }
}
