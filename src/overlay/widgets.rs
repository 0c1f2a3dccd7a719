//! Crosshair shapes for the overlay

use egui::{Color32, Pos2, Shape, Stroke};

use crate::state::{AppearanceState, CrosshairGeometry};

/// Everything needed to paint one crosshair frame
#[derive(Debug, Clone, PartialEq)]
pub struct CrosshairScene {
    pub geometry: CrosshairGeometry,
    pub color: Color32,
    pub thickness: f32,
    pub enabled: bool,
    pub show_dot: bool,
    pub show_circle: bool,
    pub show_horizontal_lines: bool,
    pub show_vertical_lines: bool,
}

impl CrosshairScene {
    pub fn from_state(state: &AppearanceState) -> Self {
        let brush = state.brush();
        let alpha = (state.opacity() * 255.0).round().clamp(0.0, 255.0) as u8;
        Self {
            geometry: state.geometry(),
            color: Color32::from_rgba_unmultiplied(brush.r, brush.g, brush.b, alpha),
            thickness: state.thickness() as f32,
            enabled: state.crosshair_enabled(),
            show_dot: state.show_dot(),
            show_circle: state.show_circle(),
            show_horizontal_lines: state.show_horizontal_lines(),
            show_vertical_lines: state.show_vertical_lines(),
        }
    }

    /// Shapes for a canvas whose top-left corner is at `origin`
    pub fn shapes(&self, origin: Pos2) -> Vec<Shape> {
        if !self.enabled {
            return Vec::new();
        }

        let g = &self.geometry;
        let at = |x: f64, y: f64| origin + egui::vec2(x as f32, y as f32);
        let center = crate::state::geometry::CANVAS_CENTER;
        let stroke = Stroke::new(self.thickness, self.color);
        let mut shapes = Vec::with_capacity(6);

        if g.show_top_line {
            shapes.push(Shape::line_segment([at(center, g.top.near), at(center, g.top.far)], stroke));
        }
        if self.show_vertical_lines {
            shapes.push(Shape::line_segment(
                [at(center, g.bottom.near), at(center, g.bottom.far)],
                stroke,
            ));
        }
        if self.show_horizontal_lines {
            shapes.push(Shape::line_segment([at(g.left.near, center), at(g.left.far, center)], stroke));
            shapes.push(Shape::line_segment(
                [at(g.right.near, center), at(g.right.far, center)],
                stroke,
            ));
        }
        if self.show_dot {
            let radius = g.dot.size / 2.0;
            shapes.push(Shape::circle_filled(
                at(g.dot.left + radius, g.dot.top + radius),
                radius as f32,
                self.color,
            ));
        }
        if self.show_circle {
            let radius = g.circle.diameter / 2.0;
            shapes.push(Shape::circle_stroke(
                at(g.circle.left + radius, g.circle.top + radius),
                radius as f32,
                stroke,
            ));
        }

        shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_lines(shapes: &[Shape]) -> usize {
        shapes.iter().filter(|s| matches!(s, Shape::LineSegment { .. })).count()
    }

    #[test]
    fn test_default_crosshair() {
        let scene = CrosshairScene::from_state(&AppearanceState::default());
        let shapes = scene.shapes(Pos2::ZERO);

        assert_eq!(count_lines(&shapes), 4);
        assert_eq!(shapes.len(), 5);
        assert_eq!(scene.color, Color32::from_rgba_unmultiplied(0, 255, 0, 255));
    }

    #[test]
    fn test_top_line_endpoints() {
        let scene = CrosshairScene::from_state(&AppearanceState::default());
        let shapes = scene.shapes(Pos2::new(10.0, 20.0));

        match &shapes[0] {
            Shape::LineSegment { points, .. } => {
                assert_eq!(points[0], Pos2::new(110.0, 116.0));
                assert_eq!(points[1], Pos2::new(110.0, 96.0));
            }
            other => panic!("expected line, got {other:?}"),
        }
    }

    #[test]
    fn test_t_shape_drops_top_line() {
        let mut state = AppearanceState::default();
        state.set_show_t_shape(true);
        let shapes = CrosshairScene::from_state(&state).shapes(Pos2::ZERO);
        assert_eq!(count_lines(&shapes), 3);
    }

    #[test]
    fn test_no_vertical_lines() {
        let mut state = AppearanceState::default();
        state.set_show_vertical_lines(false);
        state.set_show_dot(false);
        let shapes = CrosshairScene::from_state(&state).shapes(Pos2::ZERO);
        assert_eq!(count_lines(&shapes), 2);
        assert_eq!(shapes.len(), 2);
    }

    #[test]
    fn test_circle_is_added() {
        let mut state = AppearanceState::default();
        state.set_show_circle(true);
        let shapes = CrosshairScene::from_state(&state).shapes(Pos2::ZERO);
        assert_eq!(shapes.len(), 6);
    }

    #[test]
    fn test_disabled_draws_nothing() {
        let mut state = AppearanceState::default();
        state.set_crosshair_enabled(false);
        assert!(CrosshairScene::from_state(&state).shapes(Pos2::ZERO).is_empty());
    }

    #[test]
    fn test_opacity_and_invalid_hex() {
        let mut state = AppearanceState::default();
        state.set_opacity(0.5);
        state.set_color_hex("#FF0000");
        state.set_color_hex("oops");

        let scene = CrosshairScene::from_state(&state);
        assert_eq!(scene.color, Color32::from_rgba_unmultiplied(0, 255, 0, 128));
    }
}
