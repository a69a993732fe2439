//! Segment-Streifen: proportionale Boxen, ziehbare Divider, schwebende Labels.
//!
//! Zeiger-Eingaben werden auf [`PointerEvent`]s entlang der Streifenachse
//! abgebildet; der Gesten-Automat im App-Layer entscheidet, ob daraus ein
//! Umsortieren oder ein Größenändern wird. Während eines Drags zeigt der
//! Streifen nur die Vorschau.

use crate::app::{format_length, AppIntent, AppState, PointerEvent, PointerTarget};
use crate::core::{layout_labels, segment_starts, LabelBox, LabelPlacement, Segment, SegmentType};

use super::palette_color;

/// Trefferzone eines Dividers in Pixeln (je Richtung)
const DIVIDER_HIT_PX: f32 = 6.0;
/// Mindesthöhe des Streifens
const MIN_STRIP_HEIGHT: f32 = 200.0;
/// Abstand zwischen Streifen und erster Label-Spalte
const LABEL_MARGIN: f32 = 16.0;
/// Innenabstand der Label-Boxen
const LABEL_PADDING: f32 = 4.0;
/// Mindesthöhe einer Box, ab der die Länge in der Box steht
const MIN_BOX_TEXT_HEIGHT: f32 = 14.0;

const LABEL_FONT_SIZE: f32 = 13.0;
const LABEL_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(40, 42, 48);

/// Rendert den Segment-Streifen der ausgewählten Blockseite.
pub fn render_segmented_editor(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.curb.is_active() {
        ui.label("Keine Blockseite ausgewählt");
        return events;
    }

    let strip_height = (ui.available_height() - 8.0).max(MIN_STRIP_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), strip_height),
        egui::Sense::click_and_drag(),
    );
    let strip_rect =
        egui::Rect::from_min_size(rect.min, egui::vec2(state.options.strip_width, strip_height));

    let ctx = state.gesture_context(strip_height);
    let ppf = ctx.pixels_per_foot() as f32;

    collect_strip_pointer(ui, &response, strip_rect, state, strip_height, &mut events);

    // Vorschau während eines Divider-Drags, sonst der Store-Zustand
    let segments = state
        .editor
        .gesture
        .resize_preview(&ctx)
        .unwrap_or_else(|| state.curb.segments.clone());
    let starts = segment_starts(&segments);
    let reorder = state.editor.gesture.reorder_preview();

    let painter = ui.painter_at(rect);
    for (index, segment) in segments.iter().enumerate() {
        let box_rect = segment_rect(strip_rect, starts[index], segment.length, ppf);
        let dragged = matches!(reorder, Some((from, _)) if from == index);
        let fill = palette_color(segment.kind.color());
        painter.rect_filled(
            box_rect,
            0.0,
            if dragged { fill.gamma_multiply(0.35) } else { fill },
        );
        painter.rect_stroke(
            box_rect,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::from_black_alpha(120)),
            egui::StrokeKind::Inside,
        );
        if box_rect.height() >= MIN_BOX_TEXT_HEIGHT {
            painter.text(
                box_rect.center(),
                egui::Align2::CENTER_CENTER,
                format_length(segment.length),
                egui::FontId::proportional(12.0),
                egui::Color32::BLACK,
            );
        }
    }

    paint_dividers(&painter, &response, strip_rect, &segments, &starts, ppf);

    if let Some((from, offset)) = reorder {
        if let Some(segment) = segments.get(from) {
            let floating = segment_rect(strip_rect, starts[from], segment.length, ppf)
                .translate(egui::vec2(0.0, offset));
            painter.rect_filled(floating, 2.0, palette_color(segment.kind.color()));
            painter.rect_stroke(
                floating,
                2.0,
                egui::Stroke::new(2.0, egui::Color32::WHITE),
                egui::StrokeKind::Outside,
            );
        }
    }

    render_labels(ui, &painter, strip_rect, &segments, &starts, ppf, state, &mut events);

    events
}

/// Übersetzt Drag-Eingaben des Streifens in Gesten-Ereignisse.
fn collect_strip_pointer(
    ui: &egui::Ui,
    response: &egui::Response,
    strip_rect: egui::Rect,
    state: &AppState,
    strip_height: f32,
    events: &mut Vec<AppIntent>,
) {
    let gesture_active = state.editor.gesture.is_active();
    let to_axis = |pos: egui::Pos2| pos.y - strip_rect.top();

    if response.drag_started_by(egui::PointerButton::Primary) {
        // press_origin() liefert die Position vor Überschreiten der Drag-Schwelle
        let origin = ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        let Some(origin) = origin else {
            return;
        };
        if !strip_rect.expand2(egui::vec2(0.0, DIVIDER_HIT_PX)).contains(origin) {
            return;
        }

        let ctx = state.gesture_context(strip_height);
        let pos = to_axis(origin);
        let target = divider_at(&state.curb.segments, ctx.pixels_per_foot() as f32, pos)
            .map(PointerTarget::Divider)
            .or_else(|| ctx.segment_at(pos).map(PointerTarget::Segment));
        let Some(target) = target else {
            return;
        };

        events.push(AppIntent::StripPointer {
            event: PointerEvent::Down { pos, target },
            strip_height,
        });
        if let Some(current) = response.interact_pointer_pos() {
            events.push(AppIntent::StripPointer {
                event: PointerEvent::Move {
                    pos: to_axis(current),
                },
                strip_height,
            });
        }
        return;
    }

    if !gesture_active {
        return;
    }

    if !ui.input(|i| i.focused) {
        events.push(AppIntent::StripPointer {
            event: PointerEvent::Cancel,
            strip_height,
        });
        return;
    }

    let latest = response
        .interact_pointer_pos()
        .or_else(|| ui.input(|i| i.pointer.latest_pos()));

    if response.drag_stopped() {
        let event = match latest {
            Some(pos) => PointerEvent::Up { pos: to_axis(pos) },
            None => PointerEvent::Cancel,
        };
        events.push(AppIntent::StripPointer {
            event,
            strip_height,
        });
    } else if response.dragged() {
        if let Some(pos) = latest {
            events.push(AppIntent::StripPointer {
                event: PointerEvent::Move { pos: to_axis(pos) },
                strip_height,
            });
        }
    } else if !ui.input(|i| i.pointer.any_down()) {
        // Drag endete außerhalb des Widgets
        events.push(AppIntent::StripPointer {
            event: PointerEvent::Cancel,
            strip_height,
        });
    }
}

/// Nächster Divider innerhalb der Trefferzone.
fn divider_at(segments: &[Segment], ppf: f32, pos: f32) -> Option<usize> {
    if segments.len() < 2 {
        return None;
    }
    let starts = segment_starts(segments);
    (0..segments.len() - 1)
        .map(|i| {
            let y = (starts[i] + segments[i].length) as f32 * ppf;
            (i, (y - pos).abs())
        })
        .filter(|&(_, distance)| distance <= DIVIDER_HIT_PX)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

fn segment_rect(strip_rect: egui::Rect, start: f64, length: f64, ppf: f32) -> egui::Rect {
    let top = strip_rect.top() + start as f32 * ppf;
    egui::Rect::from_min_size(
        egui::pos2(strip_rect.left(), top),
        egui::vec2(strip_rect.width(), length as f32 * ppf),
    )
}

fn paint_dividers(
    painter: &egui::Painter,
    response: &egui::Response,
    strip_rect: egui::Rect,
    segments: &[Segment],
    starts: &[f64],
    ppf: f32,
) {
    let hover_y = response.hover_pos().map(|p| p.y);

    for i in 0..segments.len().saturating_sub(1) {
        let y = strip_rect.top() + (starts[i] + segments[i].length) as f32 * ppf;
        let hovered = hover_y.is_some_and(|hy| (hy - y).abs() <= DIVIDER_HIT_PX);
        let stroke = if hovered {
            egui::Stroke::new(3.0, egui::Color32::WHITE)
        } else {
            egui::Stroke::new(1.5, egui::Color32::from_gray(220))
        };
        painter.line_segment(
            [
                egui::pos2(strip_rect.left(), y),
                egui::pos2(strip_rect.right(), y),
            ],
            stroke,
        );
        // Griff in der Mitte
        let grip = egui::Rect::from_center_size(
            egui::pos2(strip_rect.center().x, y),
            egui::vec2(18.0, 4.0),
        );
        painter.rect_filled(grip, 2.0, stroke.color);
    }
}

/// Schwebende Labels mit Kollisions-Layout und Typ-Menü.
#[allow(clippy::too_many_arguments)]
fn render_labels(
    ui: &mut egui::Ui,
    painter: &egui::Painter,
    strip_rect: egui::Rect,
    segments: &[Segment],
    starts: &[f64],
    ppf: f32,
    state: &AppState,
    events: &mut Vec<AppIntent>,
) {
    let font = egui::FontId::proportional(LABEL_FONT_SIZE);
    let galleys: Vec<_> = segments
        .iter()
        .map(|segment| {
            painter.layout_no_wrap(
                format!("{} · {} ft", segment.kind.label(), format_length(segment.length)),
                font.clone(),
                egui::Color32::WHITE,
            )
        })
        .collect();

    let boxes: Vec<LabelBox> = segments
        .iter()
        .zip(&galleys)
        .enumerate()
        .map(|(i, (segment, galley))| LabelBox {
            anchor_y: (starts[i] + segment.length / 2.0) as f32 * ppf,
            width: galley.size().x + 2.0 * LABEL_PADDING,
            height: galley.size().y + 2.0 * LABEL_PADDING,
        })
        .collect();
    let placements = layout_labels(&boxes, state.options.label_gap);

    let mut open_menu_anchor = None;
    for (i, ((galley, label), placement)) in galleys.into_iter().zip(&boxes).zip(&placements).enumerate() {
        let label_rect = label_rect(strip_rect, label, placement);

        let anchor = egui::pos2(strip_rect.right(), strip_rect.top() + label.anchor_y);
        painter.line_segment(
            [anchor, label_rect.left_center()],
            egui::Stroke::new(1.0, egui::Color32::from_gray(140)),
        );

        let response = ui.interact(
            label_rect,
            ui.id().with(("segment_label", i)),
            egui::Sense::click(),
        );
        let open = state.editor.open_label == Some(i);
        let fill = if response.hovered() || open {
            LABEL_BACKGROUND.gamma_multiply(1.6)
        } else {
            LABEL_BACKGROUND
        };
        painter.rect_filled(label_rect, 3.0, fill);
        painter.rect_filled(
            egui::Rect::from_min_size(label_rect.min, egui::vec2(3.0, label_rect.height())),
            0.0,
            palette_color(segments[i].kind.color()),
        );
        painter.galley(
            label_rect.min + egui::vec2(LABEL_PADDING, LABEL_PADDING),
            galley,
            egui::Color32::WHITE,
        );

        if response.clicked() {
            events.push(AppIntent::LabelMenuToggled { index: i });
        }
        if open {
            open_menu_anchor = Some(label_rect.right_top());
        }
    }

    if let (Some(index), Some(anchor)) = (state.editor.open_label, open_menu_anchor) {
        show_label_menu(ui.ctx(), anchor, index, segments[index].kind, events);
    }
}

fn label_rect(strip_rect: egui::Rect, label: &LabelBox, placement: &LabelPlacement) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            strip_rect.right() + LABEL_MARGIN + placement.x_offset,
            strip_rect.top() + placement.top,
        ),
        egui::vec2(label.width, label.height),
    )
}

/// Typ-Menü eines Labels: Typ wechseln, Segment links/rechts einfügen.
fn show_label_menu(
    ctx: &egui::Context,
    anchor: egui::Pos2,
    index: usize,
    current: SegmentType,
    events: &mut Vec<AppIntent>,
) {
    egui::Area::new(egui::Id::new("segment_label_menu"))
        .order(egui::Order::Foreground)
        .fixed_pos(anchor + egui::vec2(4.0, 0.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new("Typ").strong());
                // Unknown ist der Rest-Puffer und wird nicht manuell vergeben
                for kind in SegmentType::ALL.into_iter().filter(|k| !k.is_unknown()) {
                    ui.horizontal(|ui| {
                        let (swatch, _) =
                            ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                        ui.painter()
                            .rect_filled(swatch, 2.0, palette_color(kind.color()));
                        let selectable = ui.add_enabled(
                            !current.is_unknown(),
                            egui::Button::selectable(kind == current, kind.label()),
                        );
                        if selectable.clicked() && kind != current {
                            events.push(AppIntent::SegmentTypeChanged { index, kind });
                        }
                    });
                }

                ui.separator();

                if ui.button("Links einfügen").clicked() {
                    events.push(AppIntent::InsertLeftRequested { index });
                }
                if ui.button("Rechts einfügen").clicked() {
                    events.push(AppIntent::AddSegmentRequested { index });
                    events.push(AppIntent::LabelMenuClosed);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::LabelMenuClosed);
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments() -> Vec<Segment> {
        vec![
            Segment::new(SegmentType::Parking, 30.0, 0.1),
            Segment::new(SegmentType::Unknown, 100.0, 0.1),
            Segment::new(SegmentType::CurbCut, 20.0, 0.1),
        ]
    }

    #[test]
    fn divider_hit_picks_nearest_boundary() {
        // 2 px pro Fuß: Grenzen bei 60 und 260
        assert_eq!(divider_at(&segments(), 2.0, 58.0), Some(0));
        assert_eq!(divider_at(&segments(), 2.0, 265.0), Some(1));
        assert_eq!(divider_at(&segments(), 2.0, 150.0), None);
    }

    #[test]
    fn single_segment_has_no_divider() {
        let single = vec![Segment::new(SegmentType::Unknown, 100.0, 0.1)];
        assert_eq!(divider_at(&single, 2.0, 200.0), None);
    }

    #[test]
    fn segment_rect_is_proportional() {
        let strip = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(90.0, 300.0));
        let rect = segment_rect(strip, 30.0, 100.0, 2.0);
        assert_eq!(rect.top(), 80.0);
        assert_eq!(rect.height(), 200.0);
        assert_eq!(rect.width(), 90.0);
    }
}
