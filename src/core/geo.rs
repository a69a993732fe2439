//! Geodätische Hilfsfunktionen: Haversine-Länge, Großkreis-Interpolation,
//! Linien-Ausschnitte und Web-Mercator-Projektion.
//!
//! Koordinaten sind `[lon, lat]` in Grad (GeoJSON-Reihenfolge).

use glam::DVec2;
use thiserror::Error;

/// Mittlerer Erdradius in Metern.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;
/// Äquator-Radius für Web-Mercator.
pub const MERCATOR_RADIUS_M: f64 = 6_378_137.0;
/// Meter → Fuß.
pub const FEET_PER_METER: f64 = 3.280_839_895;
/// Maximale Breite, die Web-Mercator darstellt.
const MERCATOR_MAX_LAT: f64 = 85.051_128_78;

/// Eine geographische Position `[lon, lat]`.
pub type LonLat = [f64; 2];

/// Fehler beim Ausschneiden eines Linienstücks
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SliceError {
    #[error("Linie hat weniger als zwei Punkte")]
    TooFewPoints,
    #[error("Ungültiger Bereich {start:.3}..{end:.3} m (Linienlänge {length:.3} m)")]
    InvalidRange { start: f64, end: f64, length: f64 },
}

/// Großkreis-Distanz zwischen zwei Positionen in Metern.
pub fn haversine_m(a: LonLat, b: LonLat) -> f64 {
    let (lat1, lat2) = (a[1].to_radians(), b[1].to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (b[0] - a[0]).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

/// Länge einer Punktfolge in Metern.
pub fn line_length_m(coords: &[LonLat]) -> f64 {
    coords.windows(2).map(|w| haversine_m(w[0], w[1])).sum()
}

/// Länge einer Punktfolge in Fuß.
pub fn line_length_ft(coords: &[LonLat]) -> f64 {
    line_length_m(coords) * FEET_PER_METER
}

/// Punkt auf dem Großkreis zwischen `a` und `b` beim Bruchteil `fraction`.
pub fn interpolate_great_circle(a: LonLat, b: LonLat, fraction: f64) -> LonLat {
    let (lon1, lat1) = (a[0].to_radians(), a[1].to_radians());
    let (lon2, lat2) = (b[0].to_radians(), b[1].to_radians());

    let delta = haversine_m(a, b) / EARTH_RADIUS_M;
    if delta.abs() < 1e-12 {
        return a;
    }

    let sin_delta = delta.sin();
    let fa = ((1.0 - fraction) * delta).sin() / sin_delta;
    let fb = (fraction * delta).sin() / sin_delta;

    let x = fa * lat1.cos() * lon1.cos() + fb * lat2.cos() * lon2.cos();
    let y = fa * lat1.cos() * lon1.sin() + fb * lat2.cos() * lon2.sin();
    let z = fa * lat1.sin() + fb * lat2.sin();

    let lat = z.atan2((x * x + y * y).sqrt());
    let lon = y.atan2(x);
    [lon.to_degrees(), lat.to_degrees()]
}

/// Schneidet das Stück zwischen `start_m` und `end_m` (Meter ab Linienanfang)
/// aus einer Linie aus. Zwischenpunkte werden per Großkreis interpoliert.
pub fn slice_line_m(coords: &[LonLat], start_m: f64, end_m: f64) -> Result<Vec<LonLat>, SliceError> {
    if coords.len() < 2 {
        return Err(SliceError::TooFewPoints);
    }
    let length = line_length_m(coords);
    // Toleranz für Rundung der Segmentlängen (1 cm)
    let tolerance = 0.01;
    if start_m < -tolerance || end_m < start_m || end_m > length + tolerance {
        return Err(SliceError::InvalidRange {
            start: start_m,
            end: end_m,
            length,
        });
    }
    let start_m = start_m.clamp(0.0, length);
    let end_m = end_m.clamp(0.0, length);

    let mut result = Vec::new();
    let mut travelled = 0.0;

    for edge in coords.windows(2) {
        let edge_len = haversine_m(edge[0], edge[1]);
        let edge_start = travelled;
        let edge_end = travelled + edge_len;
        travelled = edge_end;

        if edge_end < start_m || edge_start > end_m {
            continue;
        }

        let point_at = |distance: f64| {
            if edge_len <= 0.0 {
                edge[0]
            } else {
                interpolate_great_circle(edge[0], edge[1], (distance - edge_start) / edge_len)
            }
        };

        if result.is_empty() {
            result.push(point_at(start_m.max(edge_start)));
        }
        if end_m <= edge_end {
            result.push(point_at(end_m));
            break;
        }
        result.push(edge[1]);
    }

    if result.len() == 1 {
        // Null-Länge: Start- und Endpunkt fallen zusammen
        result.push(result[0]);
    }
    Ok(result)
}

/// Projiziert `[lon, lat]` in Web-Mercator-Meter (y zeigt nach Süden,
/// passend zur Bildschirm-Orientierung).
pub fn project(coord: LonLat) -> DVec2 {
    let lat = coord[1].clamp(-MERCATOR_MAX_LAT, MERCATOR_MAX_LAT).to_radians();
    let x = MERCATOR_RADIUS_M * coord[0].to_radians();
    let y = MERCATOR_RADIUS_M * (std::f64::consts::FRAC_PI_4 + lat / 2.0).tan().ln();
    DVec2::new(x, -y)
}

/// Umkehrung von [`project`].
pub fn unproject(world: DVec2) -> LonLat {
    let lon = (world.x / MERCATOR_RADIUS_M).to_degrees();
    let lat = (2.0 * (-world.y / MERCATOR_RADIUS_M).exp().atan() - std::f64::consts::FRAC_PI_2)
        .to_degrees();
    [lon, lat]
}

/// Kürzester Abstand eines Punkts zu einer Strecke (euklidisch).
pub fn distance_to_segment(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f64::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
