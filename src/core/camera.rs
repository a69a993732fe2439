//! 2D-Kamera für Pan und Zoom über Web-Mercator-Metern.

use glam::DVec2;

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten (Mercator-Meter, y nach Süden)
    pub position: DVec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f64,
}

impl Camera2D {
    /// Sichtbare Welt-Halbhöhe bei Zoom 1.0 (Meter).
    pub const BASE_WORLD_EXTENT: f64 = 2000.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.01;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 200.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: DVec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: DVec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: DVec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom_by_clamped(factor, Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Ändert den Zoom-Level innerhalb konfigurierter Grenzen
    pub fn zoom_by_clamped(&mut self, factor: f64, min: f64, max: f64) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Konvertiert Screen-Koordinaten (relativ zum Viewport) zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: DVec2, screen_size: DVec2) -> DVec2 {
        // Screen-Koordinaten zentrieren (-1 bis 1)
        let ndc = (screen_pos / screen_size) * 2.0 - DVec2::ONE;
        let aspect = screen_size.x / screen_size.y;
        DVec2::new(
            ndc.x * Self::BASE_WORLD_EXTENT * aspect / self.zoom,
            ndc.y * Self::BASE_WORLD_EXTENT / self.zoom,
        ) + self.position
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten (relativ zum Viewport).
    pub fn world_to_screen(&self, world_pos: DVec2, screen_size: DVec2) -> DVec2 {
        let aspect = screen_size.x / screen_size.y;
        let rel = world_pos - self.position;
        let ndc = DVec2::new(
            rel.x * self.zoom / (Self::BASE_WORLD_EXTENT * aspect),
            rel.y * self.zoom / Self::BASE_WORLD_EXTENT,
        );
        (ndc + DVec2::ONE) * 0.5 * screen_size
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self, viewport_height: f64) -> f64 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * viewport_height.max(1.0))
    }

    /// Pick-Radius in Welteinheiten für einen Pixel-Radius.
    pub fn pick_radius_world(&self, viewport_height: f64, pick_radius_px: f64) -> f64 {
        pick_radius_px * self.world_per_pixel(viewport_height)
    }

    /// Zentriert auf ein Welt-Rechteck und wählt den Zoom so, dass es
    /// vollständig sichtbar ist.
    pub fn fit_bounds(&mut self, min: DVec2, max: DVec2, screen_size: DVec2) {
        self.position = (min + max) * 0.5;

        let aspect = (screen_size.x / screen_size.y.max(1.0)).max(f64::EPSILON);
        let half = (max - min) * 0.5;
        let needed = (half.y).max(half.x / aspect).max(1.0);
        // 10 % Rand
        self.zoom = (Self::BASE_WORLD_EXTENT / (needed * 1.1)).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_pan() {
        let mut camera = Camera2D::new();
        camera.pan(DVec2::new(10.0, 5.0));
        assert_relative_eq!(camera.position.x, 10.0);
        assert_relative_eq!(camera.position.y, 5.0);
    }

    #[test]
    fn test_camera_zoom() {
        let mut camera = Camera2D::new();
        camera.zoom_by(2.0);
        assert_relative_eq!(camera.zoom, 2.0);

        camera.zoom_by(0.5);
        assert_relative_eq!(camera.zoom, 1.0);

        camera.zoom_by(1e6);
        assert_relative_eq!(camera.zoom, Camera2D::ZOOM_MAX);
    }

    #[test]
    fn test_screen_to_world_center() {
        let camera = Camera2D::new();
        let screen_size = DVec2::new(800.0, 600.0);
        // Bildschirm-Mitte → Welt-Ursprung
        let world = camera.screen_to_world(DVec2::new(400.0, 300.0), screen_size);
        assert_relative_eq!(world.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(world.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_world_to_screen_inverts_screen_to_world() {
        let mut camera = Camera2D::new();
        camera.position = DVec2::new(-13_627_000.0, -4_546_000.0);
        camera.zoom = 37.5;
        let screen_size = DVec2::new(1280.0, 720.0);
        let screen = DVec2::new(123.0, 456.0);

        let back = camera.world_to_screen(camera.screen_to_world(screen, screen_size), screen_size);
        assert_relative_eq!(back.x, screen.x, epsilon = 1e-6);
        assert_relative_eq!(back.y, screen.y, epsilon = 1e-6);
    }

    #[test]
    fn test_world_per_pixel() {
        let mut camera = Camera2D::new();
        let wpp1 = camera.world_per_pixel(600.0);
        camera.zoom = 2.0;
        let wpp2 = camera.world_per_pixel(600.0);
        // Doppelter Zoom → halb so viele Welt-Einheiten pro Pixel
        assert_relative_eq!(wpp2, wpp1 / 2.0);
    }

    #[test]
    fn test_fit_bounds_makes_rect_visible() {
        let mut camera = Camera2D::new();
        let screen_size = DVec2::new(800.0, 600.0);
        let min = DVec2::new(1000.0, 2000.0);
        let max = DVec2::new(5000.0, 3000.0);
        camera.fit_bounds(min, max, screen_size);

        let top_left = camera.world_to_screen(min, screen_size);
        let bottom_right = camera.world_to_screen(max, screen_size);
        assert!(top_left.x >= 0.0 && top_left.y >= 0.0);
        assert!(bottom_right.x <= 800.0 && bottom_right.y <= 600.0);
    }
}
