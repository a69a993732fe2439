//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use glam::DVec2;

/// Viewport-Größe, falls noch kein Frame gezeichnet wurde.
const FALLBACK_VIEWPORT: DVec2 = DVec2::new(1280.0, 720.0);

/// Setzt die Kamera auf Default zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Default::default();
}

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        1.0 / state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Verschiebt die Kamera basierend auf einem Delta.
pub fn pan(state: &mut AppState, delta: DVec2) {
    state.view.camera.pan(delta);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_world` angegeben ist, bleibt der Welt-Punkt unter
/// der Maus nach dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus_world: Option<DVec2>) {
    let old_zoom = state.view.camera.zoom;
    state.view.camera.zoom_by_clamped(
        factor,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );

    if let Some(focus) = focus_world {
        let scale = old_zoom / state.view.camera.zoom;
        state.view.camera.position = focus + (state.view.camera.position - focus) * scale;
    }
}

/// Passt die Kamera auf die Ausdehnung des geladenen Datensatzes ein.
///
/// Keine Operation ohne Datensatz oder bei leerem Datensatz.
pub fn fit_to_dataset(state: &mut AppState) {
    let Some((min, max)) = state.blockfaces.as_ref().and_then(|set| set.bounds()) else {
        return;
    };

    let [width, height] = state.view.viewport_size;
    let screen_size = if width > 0.0 && height > 0.0 {
        DVec2::new(f64::from(width), f64::from(height))
    } else {
        FALLBACK_VIEWPORT
    };

    let camera = &mut state.view.camera;
    camera.fit_bounds(min, max, screen_size);
    camera.zoom = camera
        .zoom
        .clamp(state.options.camera_zoom_min, state.options.camera_zoom_max);

    log::info!(
        "Datensatz-Ausdehnung: ({:.1}, {:.1}) bis ({:.1}, {:.1}), Zoom: {:.2}",
        min.x,
        min.y,
        max.x,
        max.y,
        camera.zoom
    );
}
