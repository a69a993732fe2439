//! Blockseiten: ausgewählte Bordsteinkanten und der geladene Datensatz.

use glam::DVec2;
use indexmap::IndexMap;

use super::geo::{line_length_ft, project, LonLat};
use super::geojson::{Feature, FeatureCollection};
use super::spatial::SpatialIndex;

/// Die aktuell bearbeitete Blockseite
#[derive(Debug, Clone, PartialEq)]
pub struct Blockface {
    /// Feature-ID aus dem Datensatz
    pub id: String,
    /// Ursprüngliches GeoJSON-Feature (Linie)
    pub feature: Feature,
    /// Geodätische Länge in Fuß
    pub length: f64,
}

impl Blockface {
    /// Erstellt eine Blockseite aus einem Linien-Feature; `None` ohne gültige Linie.
    pub fn from_feature(id: impl Into<String>, feature: Feature) -> Option<Self> {
        let coords = feature.line_coords()?;
        Some(Self {
            id: id.into(),
            length: line_length_ft(&coords),
            feature,
        })
    }

    /// Linien-Koordinaten `[lon, lat]`.
    pub fn coords(&self) -> Vec<LonLat> {
        self.feature.line_coords().unwrap_or_default()
    }
}

/// Eine Blockseite im Datensatz inkl. vorberechneter Projektion
#[derive(Debug, Clone)]
pub struct BlockfaceFeature {
    /// Feature-ID
    pub id: String,
    /// Ursprüngliches Feature
    pub feature: Feature,
    /// Linien-Koordinaten `[lon, lat]`
    pub coords: Vec<LonLat>,
    /// Projizierte Linie in Web-Mercator-Metern
    pub projected: Vec<DVec2>,
    /// Länge in Fuß
    pub length: f64,
}

impl BlockfaceFeature {
    /// Baut die Auswahl-Sicht (`{id, feature, length}`).
    pub fn to_blockface(&self) -> Blockface {
        Blockface {
            id: self.id.clone(),
            feature: self.feature.clone(),
            length: self.length,
        }
    }
}

/// Geladener Blockseiten-Datensatz
#[derive(Debug, Clone)]
pub struct BlockfaceSet {
    features: IndexMap<String, BlockfaceFeature>,
    spatial: SpatialIndex,
}

impl Default for BlockfaceSet {
    fn default() -> Self {
        Self {
            features: IndexMap::new(),
            spatial: SpatialIndex::empty(),
        }
    }
}

impl BlockfaceSet {
    /// Baut den Datensatz aus einer FeatureCollection.
    ///
    /// Features ohne Liniengeometrie werden übersprungen. Fehlt eine ID,
    /// wird `feature-<index>` vergeben; doppelte IDs erhalten den Index als Suffix.
    pub fn from_collection(collection: FeatureCollection, id_property: &str) -> Self {
        let mut features = IndexMap::new();
        let mut skipped = 0usize;

        for (index, feature) in collection.features.into_iter().enumerate() {
            let Some(coords) = feature.line_coords() else {
                skipped += 1;
                continue;
            };

            let mut id = feature
                .resolve_id(id_property)
                .unwrap_or_else(|| format!("feature-{index}"));
            if features.contains_key(&id) {
                log::debug!("Doppelte Blockseiten-ID {id}, vergebe Suffix");
                id = format!("{id}-{index}");
            }

            let projected = coords.iter().copied().map(project).collect();
            let length = line_length_ft(&coords);
            features.insert(
                id.clone(),
                BlockfaceFeature {
                    id,
                    feature,
                    coords,
                    projected,
                    length,
                },
            );
        }

        if skipped > 0 {
            log::debug!("{skipped} Features ohne Liniengeometrie übersprungen");
        }

        let spatial = SpatialIndex::from_lines(
            features.values().map(|f| f.projected.clone()).collect(),
        );

        Self { features, spatial }
    }

    /// Parst GeoJSON-Text und baut den Datensatz.
    pub fn from_geojson_str(content: &str, id_property: &str) -> anyhow::Result<Self> {
        let collection = FeatureCollection::from_json(content)?;
        Ok(Self::from_collection(collection, id_property))
    }

    /// Anzahl Blockseiten.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Gibt `true` zurück, wenn keine Blockseiten geladen sind.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Sucht eine Blockseite per ID.
    pub fn get(&self, id: &str) -> Option<&BlockfaceFeature> {
        self.features.get(id)
    }

    /// Iteriert in Datensatz-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &BlockfaceFeature> {
        self.features.values()
    }

    /// Findet die Blockseite nächst `world_pos` innerhalb `max_distance` (Welteinheiten).
    pub fn pick(&self, world_pos: DVec2, max_distance: f64) -> Option<&BlockfaceFeature> {
        let hit = self.spatial.pick(world_pos, max_distance)?;
        self.features.get_index(hit.line_index).map(|(_, f)| f)
    }

    /// Umschließendes Rechteck aller Linien in Welt-Koordinaten.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let mut points = self.features.values().flat_map(|f| f.projected.iter());
        let first = *points.next()?;
        Some(points.fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn collection() -> FeatureCollection {
        FeatureCollection {
            features: vec![
                Feature::line_string("a", &[[-122.4194, 37.7749], [-122.4183, 37.7749]]),
                Feature::line_string("b", &[[-122.4194, 37.7760], [-122.4183, 37.7760]]),
                Feature::line_string("a", &[[-122.4194, 37.7770], [-122.4183, 37.7770]]),
                Feature::default(),
            ],
        }
    }

    #[test]
    fn builds_set_and_skips_features_without_line() {
        let set = BlockfaceSet::from_collection(collection(), "globalid");
        assert_eq!(set.len(), 3);
        assert!(set.get("a").is_some());
        assert!(set.get("a-2").is_some(), "doppelte ID erhält Suffix");
    }

    #[test]
    fn blockface_length_is_in_feet() {
        let set = BlockfaceSet::from_collection(collection(), "globalid");
        let blockface = set.get("a").unwrap().to_blockface();
        // ~96.7 m ≈ 317 ft
        assert_relative_eq!(blockface.length, 317.3, epsilon = 1.0);
    }

    #[test]
    fn pick_finds_clicked_line() {
        let set = BlockfaceSet::from_collection(collection(), "globalid");
        let world = project([-122.4188, 37.77601]);
        let hit = set.pick(world, 10.0).expect("Treffer erwartet");
        assert_eq!(hit.id, "b");
    }

    #[test]
    fn bounds_cover_all_lines() {
        let set = BlockfaceSet::from_collection(collection(), "globalid");
        let (min, max) = set.bounds().expect("nicht leer");
        let p = project([-122.4190, 37.7765]);
        assert!(p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y);
        assert!(BlockfaceSet::default().bounds().is_none());
    }

    #[test]
    fn from_feature_requires_line() {
        assert!(Blockface::from_feature("x", Feature::default()).is_none());
    }
}
