//! Minimale GeoJSON-Typen für Blockseiten-Datensätze (serde).

use super::geo::{haversine_m, LonLat};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Maximaler Abstand (Meter), ab dem zwei Teil-Linien als verbunden gelten.
const PART_JOIN_TOLERANCE_M: f64 = 1.0;

/// GeoJSON-FeatureCollection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// Alle Features der Collection
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// Einzelnes GeoJSON-Feature
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Optionale Feature-ID (String oder Zahl)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Freie Eigenschaften
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    /// Geometrie (kann in Rohdaten fehlen)
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// Unterstützte Geometrien; alles andere landet in `Unsupported`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Einfache Linie
    LineString {
        /// Positionen (`[lon, lat, (alt)]`)
        coordinates: Vec<Vec<f64>>,
    },
    /// Mehrteilige Linie
    MultiLineString {
        /// Teil-Linien
        coordinates: Vec<Vec<Vec<f64>>>,
    },
    /// Punkt, Polygon, ...
    #[serde(other)]
    Unsupported,
}

impl FeatureCollection {
    /// Parst eine FeatureCollection aus JSON-Text.
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

impl Feature {
    /// Erstellt ein LineString-Feature (Tests, Export).
    pub fn line_string(id: impl Into<String>, coords: &[LonLat]) -> Self {
        Self {
            id: Some(Value::String(id.into())),
            properties: Some(Map::new()),
            geometry: Some(Geometry::LineString {
                coordinates: coords.iter().map(|c| c.to_vec()).collect(),
            }),
        }
    }

    /// Ermittelt die Feature-ID: Top-Level-`id`, sonst `properties[id_property]`.
    pub fn resolve_id(&self, id_property: &str) -> Option<String> {
        self.id
            .as_ref()
            .and_then(value_to_id)
            .or_else(|| {
                self.properties
                    .as_ref()
                    .and_then(|props| props.get(id_property))
                    .and_then(value_to_id)
            })
    }

    /// Liest eine Eigenschaft als Text.
    pub fn property_str(&self, key: &str) -> Option<String> {
        self.properties
            .as_ref()
            .and_then(|props| props.get(key))
            .and_then(value_to_id)
    }

    /// Liefert die Linien-Koordinaten als eine zusammenhängende Punktfolge.
    ///
    /// Bei `MultiLineString` werden die Teile in Reihenfolge verkettet,
    /// doppelte Stoßpunkte entfallen. `None` für nicht unterstützte Geometrien
    /// oder Linien mit weniger als zwei Punkten.
    pub fn line_coords(&self) -> Option<Vec<LonLat>> {
        let coords = match self.geometry.as_ref()? {
            Geometry::LineString { coordinates } => to_lon_lat(coordinates),
            Geometry::MultiLineString { coordinates } => {
                let mut merged: Vec<LonLat> = Vec::new();
                for part in coordinates {
                    let part = to_lon_lat(part);
                    let Some(first) = part.first().copied() else {
                        continue;
                    };
                    let touches = merged
                        .last()
                        .is_some_and(|last| haversine_m(*last, first) <= PART_JOIN_TOLERANCE_M);
                    if touches {
                        merged.extend_from_slice(&part[1..]);
                    } else {
                        if !merged.is_empty() {
                            log::debug!("MultiLineString mit Lücke zwischen Teil-Linien");
                        }
                        merged.extend(part);
                    }
                }
                merged
            }
            Geometry::Unsupported => return None,
        };

        (coords.len() >= 2).then_some(coords)
    }
}

/// Übernimmt nur gültige WGS84-Positionen; Höhenwerte werden verworfen.
fn to_lon_lat(positions: &[Vec<f64>]) -> Vec<LonLat> {
    positions
        .iter()
        .filter_map(|p| match p.as_slice() {
            [lon, lat, ..] if (-180.0..=180.0).contains(lon) && (-90.0..=90.0).contains(lat) => {
                Some([*lon, *lat])
            }
            _ => None,
        })
        .collect()
}

fn value_to_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
