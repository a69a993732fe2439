//! Core-Domänentypen: Segmente, Blockseiten, Geometrie, Kamera, Spatial-Index.

pub mod blockface;
pub mod camera;
pub mod geo;
/// GeoJSON-Eingabeformat des Blockseiten-Datensatzes
pub mod geojson;
pub mod highlight;
pub mod label_layout;
/// Segment-Datenmodell
///
/// - Segment: typisierter Teilabschnitt mit Länge in Fuß
/// - SegmentType: feste Palette inkl. `Unknown`-Schlupf
pub mod segment;
pub mod segment_list;
pub mod spatial;

pub use blockface::{Blockface, BlockfaceFeature, BlockfaceSet};
pub use camera::Camera2D;
pub use geojson::{Feature, FeatureCollection, Geometry};
pub use highlight::{build_segmented_highlight, HighlightSlice};
pub use label_layout::{layout_labels, LabelBox, LabelPlacement};
pub use segment::{create_segment, round_length, Segment, SegmentType};
pub use segment_list::{
    adjust_segment_start_position, find_unknown, insert_segment, insert_segment_left,
    move_segment, segment_starts, swap_segments, total_length, update_segment_lengths,
    validate_segments, SegmentError, SegmentResult,
};
pub use spatial::{SpatialIndex, SpatialMatch};
