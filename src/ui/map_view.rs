//! Kartenansicht: Blockseiten-Linien, Auswahl und segmentierte Hervorhebung.
//!
//! Eingaben (Pan, Scroll-Zoom, Klick) werden als `AppIntent`s gemeldet;
//! gezeichnet wird direkt mit dem egui-Painter in Web-Mercator-Metern.

use crate::app::{AppIntent, AppState};
use crate::core::{geo, Camera2D};
use glam::DVec2;

use super::{option_color, palette_color};

/// Hintergrundfarbe der Karte
const BACKGROUND_COLOR: egui::Color32 = egui::Color32::from_rgb(24, 26, 30);

/// Rendert die Kartenansicht in den verfügbaren Bereich.
pub fn render_map_view(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
    let viewport_size = [rect.width(), rect.height()];
    if viewport_size != state.view.viewport_size {
        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });
    }

    collect_map_input(ui, &response, rect, state, &mut events);

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, BACKGROUND_COLOR);

    let Some(blockfaces) = &state.blockfaces else {
        let text = if state.dataset_loader.is_loading() {
            "Lade Blockseiten..."
        } else {
            "Kein Datensatz geladen (File → Datensatz abrufen)"
        };
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(16.0),
            egui::Color32::GRAY,
        );
        return events;
    };

    let camera = &state.view.camera;
    let visible = visible_world_bounds(camera, rect);
    let options = &state.options;

    let stroke = egui::Stroke::new(options.blockface_line_width, option_color(options.blockface_color));
    for feature in blockfaces.iter() {
        if !intersects(&feature.projected, visible) {
            continue;
        }
        let points: Vec<egui::Pos2> = feature
            .projected
            .iter()
            .map(|&world| to_screen(world, rect, camera))
            .collect();
        painter.add(egui::Shape::line(points, stroke));
    }

    if let Some(selected) = &state.selected {
        if let Some(feature) = blockfaces.get(&selected.id) {
            let points: Vec<egui::Pos2> = feature
                .projected
                .iter()
                .map(|&world| to_screen(world, rect, camera))
                .collect();
            painter.add(egui::Shape::line(
                points,
                egui::Stroke::new(options.selected_line_width, option_color(options.selected_color)),
            ));
        }

        for slice in state.highlight() {
            if slice.coords.len() < 2 {
                continue;
            }
            let points: Vec<egui::Pos2> = slice
                .coords
                .iter()
                .map(|&coord| to_screen(geo::project(coord), rect, camera))
                .collect();
            painter.add(egui::Shape::line(
                points,
                egui::Stroke::new(options.highlight_line_width, palette_color(slice.color())),
            ));
        }
    }

    events
}

/// Pan (Drag), Scroll-Zoom auf die Mausposition und Auswahl per Klick.
fn collect_map_input(
    ui: &egui::Ui,
    response: &egui::Response,
    rect: egui::Rect,
    state: &AppState,
    events: &mut Vec<AppIntent>,
) {
    let camera = &state.view.camera;

    if response.dragged() {
        let pointer_delta = response.drag_delta();
        if pointer_delta != egui::Vec2::ZERO {
            let wpp = camera.world_per_pixel(f64::from(rect.height()));
            events.push(AppIntent::CameraPan {
                delta: DVec2::new(
                    -f64::from(pointer_delta.x) * wpp,
                    -f64::from(pointer_delta.y) * wpp,
                ),
            });
        }
    }

    if response.hovered() {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 {
            let step = state.options.camera_scroll_zoom_step;
            let factor = if scroll > 0.0 { step } else { 1.0 / step };
            let focus_world = response
                .hover_pos()
                .map(|pos| screen_pos_to_world(pos, rect, camera));
            events.push(AppIntent::CameraZoom {
                factor,
                focus_world,
            });
        }
    }

    if response.clicked_by(egui::PointerButton::Primary) {
        if let Some(pointer_pos) = response.interact_pointer_pos() {
            events.push(AppIntent::BlockfaceClicked {
                world_pos: screen_pos_to_world(pointer_pos, rect, camera),
            });
        }
    }
}

/// Bildschirmposition (absolut) → Weltkoordinate.
fn screen_pos_to_world(pos: egui::Pos2, rect: egui::Rect, camera: &Camera2D) -> DVec2 {
    let local = pos - rect.min;
    camera.screen_to_world(
        DVec2::new(f64::from(local.x), f64::from(local.y)),
        viewport_dvec(rect),
    )
}

/// Weltkoordinate → Bildschirmposition (absolut).
fn to_screen(world: DVec2, rect: egui::Rect, camera: &Camera2D) -> egui::Pos2 {
    let screen = camera.world_to_screen(world, viewport_dvec(rect));
    rect.min + egui::vec2(screen.x as f32, screen.y as f32)
}

fn viewport_dvec(rect: egui::Rect) -> DVec2 {
    DVec2::new(
        f64::from(rect.width()).max(1.0),
        f64::from(rect.height()).max(1.0),
    )
}

/// Sichtbares Welt-Rechteck `(min, max)`.
fn visible_world_bounds(camera: &Camera2D, rect: egui::Rect) -> (DVec2, DVec2) {
    let size = viewport_dvec(rect);
    let a = camera.screen_to_world(DVec2::ZERO, size);
    let b = camera.screen_to_world(size, size);
    (a.min(b), a.max(b))
}

/// Prüft, ob die Bounding-Box einer Linie das Rechteck schneidet.
fn intersects(line: &[DVec2], (min, max): (DVec2, DVec2)) -> bool {
    let Some(first) = line.first() else {
        return false;
    };
    let (line_min, line_max) = line
        .iter()
        .fold((*first, *first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
    line_min.x <= max.x && line_max.x >= min.x && line_min.y <= max.y && line_max.y >= min.y
}
