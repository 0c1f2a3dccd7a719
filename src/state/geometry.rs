//! Crosshair geometry derived from the appearance settings
//!
//! All coordinates are in the overlay canvas, a 200x200 square whose center
//! (100, 100) is placed on the center of the screen.

use crate::settings::AppearanceSettings;

/// Width and height of the overlay canvas
pub const CANVAS_SIZE: f64 = 200.0;

/// Center of the overlay canvas on both axes
pub const CANVAS_CENTER: f64 = CANVAS_SIZE / 2.0;

/// One crosshair arm along a single axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Coordinate closest to the center
    pub near: f64,
    /// Coordinate of the outer end
    pub far: f64,
}

/// Top-left corner of the center dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotBounds {
    pub left: f64,
    pub top: f64,
    pub size: f64,
}

/// Bounding box of the circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleBounds {
    pub left: f64,
    pub top: f64,
    pub diameter: f64,
}

/// Everything the overlay needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrosshairGeometry {
    /// Y coordinates, going up from the center
    pub top: LineSegment,
    /// Y coordinates, going down from the center
    pub bottom: LineSegment,
    /// X coordinates, going left from the center
    pub left: LineSegment,
    /// X coordinates, going right from the center
    pub right: LineSegment,
    pub dot: DotBounds,
    pub circle: CircleBounds,
    pub show_top_line: bool,
}

impl CrosshairGeometry {
    pub fn from_settings(settings: &AppearanceSettings) -> Self {
        let (before, after) = arms(settings.gap, settings.size);
        Self {
            top: before,
            bottom: after,
            left: before,
            right: after,
            dot: dot_bounds(settings.dot_size),
            circle: circle_bounds(settings.circle_radius),
            show_top_line: show_top_line(settings.show_t_shape, settings.show_vertical_lines),
        }
    }
}

/// Arms before and after the center along one axis
pub fn arms(gap: f64, size: f64) -> (LineSegment, LineSegment) {
    (
        LineSegment {
            near: CANVAS_CENTER - gap,
            far: CANVAS_CENTER - gap - size,
        },
        LineSegment {
            near: CANVAS_CENTER + gap,
            far: CANVAS_CENTER + gap + size,
        },
    )
}

pub fn dot_bounds(dot_size: f64) -> DotBounds {
    DotBounds {
        left: CANVAS_CENTER - dot_size / 2.0,
        top: CANVAS_CENTER - dot_size / 2.0,
        size: dot_size,
    }
}

pub fn circle_bounds(radius: f64) -> CircleBounds {
    CircleBounds {
        left: CANVAS_CENTER - radius,
        top: CANVAS_CENTER - radius,
        diameter: radius * 2.0,
    }
}

/// The top line is hidden in T-shape mode and when vertical lines are off
pub fn show_top_line(show_t_shape: bool, show_vertical_lines: bool) -> bool {
    !show_t_shape && show_vertical_lines
}
