//! Spatial-Index (KD-Tree) für schnelles Picken von Blockseiten.
//!
//! Die Linien werden in gleichmäßigen Abständen abgetastet; der KD-Tree
//! liefert Kandidaten, die exakte Distanz wird gegen die Polylinie geprüft.

use glam::DVec2;
use kiddo::{KdTree, SquaredEuclidean};

use super::geo::distance_to_segment;

/// Abtastabstand entlang der Linien in Welteinheiten (Mercator-Meter).
pub const SAMPLE_SPACING: f64 = 5.0;

/// Ergebnis einer Pick-Abfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// Index der gefundenen Linie in der Eingabe-Reihenfolge
    pub line_index: usize,
    /// Euklidischer Abstand zur Polylinie
    pub distance: f64,
}

/// Read-only Spatial-Index über allen projizierten Blockseiten-Linien.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    sample_owner: Vec<usize>,
    lines: Vec<Vec<DVec2>>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            sample_owner: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus projizierten Polylinien.
    pub fn from_lines(lines: Vec<Vec<DVec2>>) -> Self {
        let mut samples: Vec<[f64; 2]> = Vec::new();
        let mut sample_owner = Vec::new();

        for (line_index, line) in lines.iter().enumerate() {
            for edge in line.windows(2) {
                let (a, b) = (edge[0], edge[1]);
                let steps = (a.distance(b) / SAMPLE_SPACING).ceil().max(1.0) as usize;
                for step in 0..steps {
                    let p = a.lerp(b, step as f64 / steps as f64);
                    samples.push([p.x, p.y]);
                    sample_owner.push(line_index);
                }
            }
            if let Some(last) = line.last() {
                samples.push([last.x, last.y]);
                sample_owner.push(line_index);
            }
        }

        let tree: KdTree<f64, 2> = (&samples).into();

        Self {
            tree,
            sample_owner,
            lines,
        }
    }

    /// Gibt die Anzahl indexierter Linien zurück.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Gibt `true` zurück, wenn keine Linien im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.sample_owner.is_empty()
    }

    /// Findet die nächstgelegene Linie innerhalb von `max_distance`.
    pub fn pick(&self, query: DVec2, max_distance: f64) -> Option<SpatialMatch> {
        if self.is_empty() || max_distance.is_sign_negative() {
            return None;
        }

        // Kandidaten-Radius deckt den Abstand zwischen zwei Abtastpunkten ab
        let search_radius = max_distance + SAMPLE_SPACING;
        let mut candidates: Vec<usize> = self
            .tree
            .within::<SquaredEuclidean>(&[query.x, query.y], search_radius * search_radius)
            .into_iter()
            .filter_map(|entry| self.sample_owner.get(entry.item as usize).copied())
            .collect();
        candidates.sort_unstable();
        candidates.dedup();

        candidates
            .into_iter()
            .filter_map(|line_index| {
                let distance = self.distance_to_line(line_index, query)?;
                (distance <= max_distance).then_some(SpatialMatch {
                    line_index,
                    distance,
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    fn distance_to_line(&self, line_index: usize, query: DVec2) -> Option<f64> {
        self.lines
            .get(line_index)?
            .windows(2)
            .map(|edge| distance_to_segment(query, edge[0], edge[1]))
            .min_by(f64::total_cmp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lines() -> Vec<Vec<DVec2>> {
        vec![
            vec![DVec2::new(0.0, 0.0), DVec2::new(100.0, 0.0)],
            vec![DVec2::new(0.0, 20.0), DVec2::new(100.0, 20.0)],
        ]
    }

    #[test]
    fn pick_returns_nearest_line() {
        let index = SpatialIndex::from_lines(sample_lines());
        let hit = index.pick(DVec2::new(52.5, 17.0), 5.0).expect("Treffer erwartet");
        assert_eq!(hit.line_index, 1);
        assert!((hit.distance - 3.0).abs() < 1e-9);
    }

    #[test]
    fn pick_between_samples_uses_exact_distance() {
        let index = SpatialIndex::from_lines(sample_lines());
        // Genau zwischen zwei Abtastpunkten, 1 Einheit neben der Linie
        let hit = index.pick(DVec2::new(52.5, 1.0), 1.5).expect("Treffer erwartet");
        assert_eq!(hit.line_index, 0);
    }

    #[test]
    fn pick_prefers_closer_line_over_closer_sample() {
        let index = SpatialIndex::from_lines(vec![
            // Kurze Linie: ihr Endpunkt ist der nächste Abtastpunkt
            vec![DVec2::new(2.5, 7.2), DVec2::new(2.5, 0.0)],
            // Lange Linie: Abtastpunkte bei x = 0, 5, ..., Linie selbst näher
            vec![DVec2::new(0.0, 10.0), DVec2::new(100.0, 10.0)],
        ]);
        let hit = index.pick(DVec2::new(2.5, 9.0), 3.0).expect("Treffer erwartet");
        assert_eq!(hit.line_index, 1);
        assert!((hit.distance - 1.0).abs() < 1e-9);
    }

    #[test]
    fn pick_outside_radius_misses() {
        let index = SpatialIndex::from_lines(sample_lines());
        assert!(index.pick(DVec2::new(50.0, 10.0), 4.0).is_none());
        assert!(index.pick(DVec2::new(500.0, 0.0), 4.0).is_none());
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = SpatialIndex::empty();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.pick(DVec2::ZERO, 10.0).is_none());
    }
}
