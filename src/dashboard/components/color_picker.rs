//! HSV color picker
//!
//! A saturation/value square next to a vertical hue bar. The widget only
//! reports what the user picked; the caller writes it into the state.

use egui::{Color32, Mesh, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};

use crate::color::{Hsv, Rgb};
use crate::dashboard::theme::ThemeColors;

const SQUARE_SIZE: f32 = 160.0;
const HUE_BAR_WIDTH: f32 = 20.0;
const GRID: usize = 16;

/// A pick made in the widget this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerEdit {
    SaturationValue { saturation: f64, value: f64 },
    Hue(f64),
}

pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Saturation and value under a point in the square.
/// Saturation grows to the right, value grows upwards.
pub fn sat_val_at(offset: Vec2, size: Vec2) -> (f64, f64) {
    let x = (offset.x / size.x).clamp(0.0, 1.0);
    let y = (offset.y / size.y).clamp(0.0, 1.0);
    (f64::from(x), f64::from(1.0 - y))
}

/// Hue under a point in the bar, 0 at the top and 360 at the bottom
pub fn hue_at(offset_y: f32, height: f32) -> f64 {
    f64::from((offset_y / height).clamp(0.0, 1.0)) * 360.0
}

fn sat_val_marker(rect: Rect, hsv: Hsv) -> Pos2 {
    Pos2::new(
        rect.left() + rect.width() * hsv.s as f32,
        rect.top() + rect.height() * (1.0 - hsv.v as f32),
    )
}

fn hue_marker_y(rect: Rect, hue: f64) -> f32 {
    rect.top() + rect.height() * (hue / 360.0) as f32
}

/// Show the picker for `hsv` and return the user's pick, if any
pub fn color_picker(ui: &mut Ui, hsv: Hsv) -> Option<PickerEdit> {
    ui.horizontal(|ui| {
        let (square, square_response) =
            ui.allocate_exact_size(Vec2::splat(SQUARE_SIZE), Sense::click_and_drag());
        ui.add_space(8.0);
        let (bar, bar_response) =
            ui.allocate_exact_size(Vec2::new(HUE_BAR_WIDTH, SQUARE_SIZE), Sense::click_and_drag());

        if ui.is_rect_visible(square) {
            paint_sat_val_square(ui, square, hsv.h);
            let marker = sat_val_marker(square, hsv);
            ui.painter().circle_stroke(marker, 5.0, Stroke::new(2.0, Color32::WHITE));
            ui.painter().circle_stroke(marker, 6.5, Stroke::new(1.0, Color32::BLACK));
        }
        if ui.is_rect_visible(bar) {
            paint_hue_bar(ui, bar);
            let y = hue_marker_y(bar, hsv.h);
            ui.painter().rect_stroke(
                Rect::from_min_max(Pos2::new(bar.left() - 2.0, y - 2.0), Pos2::new(bar.right() + 2.0, y + 2.0)),
                1.0,
                Stroke::new(2.0, Color32::WHITE),
            );
        }

        let mut edit = None;
        if square_response.dragged() || square_response.clicked() {
            if let Some(pos) = square_response.interact_pointer_pos() {
                let (saturation, value) = sat_val_at(pos - square.min, square.size());
                edit = Some(PickerEdit::SaturationValue { saturation, value });
            }
        }
        if bar_response.dragged() || bar_response.clicked() {
            if let Some(pos) = bar_response.interact_pointer_pos() {
                edit = Some(PickerEdit::Hue(hue_at(pos.y - bar.top(), bar.height())));
            }
        }
        edit
    })
    .inner
}

fn paint_sat_val_square(ui: &Ui, rect: Rect, hue: f64) {
    let mut mesh = Mesh::default();
    let step = 1.0 / GRID as f32;

    for row in 0..=GRID {
        for col in 0..=GRID {
            let (s, v) = (col as f32 * step, 1.0 - row as f32 * step);
            let pos = rect.min + Vec2::new(rect.width() * col as f32 * step, rect.height() * row as f32 * step);
            let color = Hsv::new(hue, f64::from(s), f64::from(v)).to_rgb();
            mesh.colored_vertex(pos, to_color32(color));
        }
    }

    let stride = (GRID + 1) as u32;
    for row in 0..GRID as u32 {
        for col in 0..GRID as u32 {
            let top_left = row * stride + col;
            let bottom_left = top_left + stride;
            mesh.add_triangle(top_left, top_left + 1, bottom_left);
            mesh.add_triangle(top_left + 1, bottom_left + 1, bottom_left);
        }
    }

    ui.painter().add(Shape::mesh(mesh));
    ui.painter().rect_stroke(rect, 0.0, Stroke::new(1.0, ThemeColors::OUTLINE));
}

fn paint_hue_bar(ui: &Ui, rect: Rect) {
    let mut mesh = Mesh::default();
    const STOPS: u32 = 6;

    for i in 0..=STOPS {
        let t = i as f32 / STOPS as f32;
        let color = to_color32(Hsv::new(f64::from(t) * 360.0, 1.0, 1.0).to_rgb());
        let y = rect.top() + rect.height() * t;
        mesh.colored_vertex(Pos2::new(rect.left(), y), color);
        mesh.colored_vertex(Pos2::new(rect.right(), y), color);
    }
    for i in 0..STOPS {
        let base = i * 2;
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base + 1, base + 3, base + 2);
    }

    ui.painter().add(Shape::mesh(mesh));
    ui.painter().rect_stroke(rect, 0.0, Stroke::new(1.0, ThemeColors::OUTLINE));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sat_val_corners() {
        let size = Vec2::splat(160.0);
        assert_eq!(sat_val_at(Vec2::new(0.0, 0.0), size), (0.0, 1.0));
        assert_eq!(sat_val_at(Vec2::new(160.0, 160.0), size), (1.0, 0.0));
        assert_eq!(sat_val_at(Vec2::new(80.0, 40.0), size), (0.5, 0.75));
    }

    #[test]
    fn test_sat_val_outside_is_clamped() {
        let size = Vec2::splat(100.0);
        assert_eq!(sat_val_at(Vec2::new(-20.0, 250.0), size), (0.0, 0.0));
    }

    #[test]
    fn test_hue_at() {
        assert_eq!(hue_at(0.0, 160.0), 0.0);
        assert_eq!(hue_at(80.0, 160.0), 180.0);
        assert_eq!(hue_at(400.0, 160.0), 360.0);
        assert_eq!(hue_at(-5.0, 160.0), 0.0);
    }

    #[test]
    fn test_markers_invert_picks() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::splat(160.0));
        let hsv = Hsv::new(90.0, 0.25, 0.5);

        let marker = sat_val_marker(rect, hsv);
        assert_eq!(sat_val_at(marker - rect.min, rect.size()), (0.25, 0.5));

        let y = hue_marker_y(rect, 90.0);
        assert_eq!(hue_at(y - rect.top(), rect.height()), 90.0);
    }
}
