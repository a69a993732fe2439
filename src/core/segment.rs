//! Bordstein-Segment: typisierter Teilabschnitt einer Blockseite.

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Länge der zufälligen Segment-IDs.
const SEGMENT_ID_LEN: usize = 8;

/// Art eines Bordstein-Segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SegmentType {
    /// Parkfläche
    Parking,
    /// Grundstückseinfahrt / abgesenkter Bordstein
    #[serde(rename = "Curb Cut")]
    CurbCut,
    /// Ladezone
    Loading,
    /// Halteverbot
    #[serde(rename = "No Parking")]
    NoParking,
    /// Bushaltestelle
    #[serde(rename = "Bus Stop")]
    BusStop,
    /// Noch nicht klassifizierter Rest (Schlupf-Segment)
    #[default]
    Unknown,
}

impl SegmentType {
    /// Alle Typen in Palettenreihenfolge (für Dropdowns).
    pub const ALL: [SegmentType; 6] = [
        SegmentType::Parking,
        SegmentType::CurbCut,
        SegmentType::Loading,
        SegmentType::NoParking,
        SegmentType::BusStop,
        SegmentType::Unknown,
    ];

    /// Anzeigename (identisch mit dem serialisierten Wert).
    pub fn label(self) -> &'static str {
        match self {
            SegmentType::Parking => "Parking",
            SegmentType::CurbCut => "Curb Cut",
            SegmentType::Loading => "Loading",
            SegmentType::NoParking => "No Parking",
            SegmentType::BusStop => "Bus Stop",
            SegmentType::Unknown => "Unknown",
        }
    }

    /// Palettenfarbe als RGB.
    pub fn color(self) -> [u8; 3] {
        match self {
            SegmentType::Parking => [59, 130, 246],
            SegmentType::CurbCut => [168, 85, 247],
            SegmentType::Loading => [245, 158, 11],
            SegmentType::NoParking => [239, 68, 68],
            SegmentType::BusStop => [16, 185, 129],
            SegmentType::Unknown => [209, 213, 219],
        }
    }

    /// Gibt `true` für das Schlupf-Segment zurück.
    pub fn is_unknown(self) -> bool {
        self == SegmentType::Unknown
    }
}

impl std::fmt::Display for SegmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Ein Segment der Bordsteinkante
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Zufällige Kurz-ID, eindeutig innerhalb einer Segmentliste
    pub id: String,
    /// Segment-Typ
    #[serde(rename = "type")]
    pub kind: SegmentType,
    /// Länge in Fuß (>= 0, auf Präzision gerundet)
    pub length: f64,
}

impl Segment {
    /// Erstellt ein Segment mit frischer ID und gerundeter Länge.
    pub fn new(kind: SegmentType, length: f64, precision: f64) -> Self {
        Self {
            id: generate_segment_id(),
            kind,
            length: round_length(length, precision),
        }
    }
}

/// Erstellt ein neues Segment (frische ID, Länge auf `precision` gerundet).
pub fn create_segment(kind: SegmentType, length: f64, precision: f64) -> Segment {
    Segment::new(kind, length, precision)
}

/// Rundet eine Länge auf das nächste Vielfache von `precision`.
///
/// `precision <= 0` lässt den Wert unverändert.
pub fn round_length(value: f64, precision: f64) -> f64 {
    if precision <= 0.0 || !precision.is_finite() {
        return value;
    }
    let rounded = (value / precision).round() * precision;
    // Darstellungsrauschen (z.B. 40.000000000000004) entfernen
    let decimals = (-precision.log10()).ceil().max(0.0) as i32;
    let factor = 10f64.powi(decimals);
    (rounded * factor).round() / factor
}

/// Erzeugt eine zufällige alphanumerische Segment-ID.
pub fn generate_segment_id() -> String {
    let mut rng = rand::thread_rng();
    (0..SEGMENT_ID_LEN)
        .map(|_| rng.sample(Alphanumeric) as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn create_segment_rounds_length_to_precision() {
        let seg = create_segment(SegmentType::Parking, 12.345, 0.1);
        assert_relative_eq!(seg.length, 12.3);
        assert_eq!(seg.kind, SegmentType::Parking);
        assert_eq!(seg.id.len(), SEGMENT_ID_LEN);
    }

    #[test]
    fn round_length_removes_float_noise() {
        assert_eq!(round_length(0.1 + 0.2, 0.1), 0.3);
        assert_eq!(round_length(39.99999, 0.1), 40.0);
        assert_eq!(round_length(17.5, 1.0), 18.0);
    }

    #[test]
    fn round_length_without_precision_is_identity() {
        assert_eq!(round_length(1.23456, 0.0), 1.23456);
    }

    #[test]
    fn generated_ids_differ() {
        let ids: std::collections::HashSet<String> =
            (0..100).map(|_| generate_segment_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn segment_serializes_type_with_display_label() {
        let seg = Segment {
            id: "abc".into(),
            kind: SegmentType::CurbCut,
            length: 20.0,
        };
        let json = serde_json::to_string(&seg).expect("serialisierbar");
        assert!(json.contains("\"type\":\"Curb Cut\""), "{json}");
    }
}
