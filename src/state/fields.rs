//! Logical fields of the appearance state
//!
//! One table maps every field to its clamp range and to the derived fields
//! that must be re-announced when it changes.

use std::ops::RangeInclusive;

/// Identity of a logical field, stored or derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    // Color views
    Color,
    ColorHex,
    Brush,
    ColorRed,
    ColorGreen,
    ColorBlue,
    Hue,
    Saturation,
    Value,

    // Shape
    Size,
    Thickness,
    Gap,
    Opacity,
    OpacityPercent,
    ShowDot,
    ShowCircle,
    CircleRadius,
    DotSize,
    ShowTShape,
    ShowHorizontalLines,
    ShowVerticalLines,

    // Derived geometry
    TopLine,
    BottomLine,
    LeftLine,
    RightLine,
    DotBounds,
    CircleBounds,
    ShowTopLine,

    // Session
    CrosshairEnabled,
    Presets,
    SelectedPreset,
}

/// Clamp range and dependents of one field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    pub range: Option<(f64, f64)>,
    pub dependents: &'static [Field],
}

const LINES: &[Field] = &[Field::TopLine, Field::BottomLine, Field::LeftLine, Field::RightLine];

pub const SIZE_RANGE: RangeInclusive<f64> = 1.0..=100.0;
pub const THICKNESS_RANGE: RangeInclusive<f64> = 1.0..=20.0;
pub const GAP_RANGE: RangeInclusive<f64> = 0.0..=50.0;
pub const OPACITY_RANGE: RangeInclusive<f64> = 0.1..=1.0;
pub const OPACITY_PERCENT_RANGE: RangeInclusive<f64> = 10.0..=100.0;
pub const CIRCLE_RADIUS_RANGE: RangeInclusive<f64> = 5.0..=100.0;
pub const DOT_SIZE_RANGE: RangeInclusive<f64> = 1.0..=20.0;
pub const CHANNEL_RANGE: RangeInclusive<f64> = 0.0..=255.0;
pub const HUE_RANGE: RangeInclusive<f64> = 0.0..=360.0;
pub const UNIT_RANGE: RangeInclusive<f64> = 0.0..=1.0;

const fn bounds(range: &RangeInclusive<f64>) -> Option<(f64, f64)> {
    Some((*range.start(), *range.end()))
}

/// Every field with a clamp range or dependents
pub const FIELD_TABLE: &[FieldSpec] = &[
    FieldSpec { field: Field::Color, range: None, dependents: &[Field::ColorHex, Field::Brush] },
    FieldSpec { field: Field::ColorRed, range: bounds(&CHANNEL_RANGE), dependents: &[] },
    FieldSpec { field: Field::ColorGreen, range: bounds(&CHANNEL_RANGE), dependents: &[] },
    FieldSpec { field: Field::ColorBlue, range: bounds(&CHANNEL_RANGE), dependents: &[] },
    FieldSpec { field: Field::Hue, range: bounds(&HUE_RANGE), dependents: &[] },
    FieldSpec { field: Field::Saturation, range: bounds(&UNIT_RANGE), dependents: &[] },
    FieldSpec { field: Field::Value, range: bounds(&UNIT_RANGE), dependents: &[] },
    FieldSpec { field: Field::Size, range: bounds(&SIZE_RANGE), dependents: LINES },
    FieldSpec { field: Field::Thickness, range: bounds(&THICKNESS_RANGE), dependents: &[] },
    FieldSpec { field: Field::Gap, range: bounds(&GAP_RANGE), dependents: LINES },
    FieldSpec { field: Field::Opacity, range: bounds(&OPACITY_RANGE), dependents: &[Field::OpacityPercent] },
    FieldSpec { field: Field::OpacityPercent, range: bounds(&OPACITY_PERCENT_RANGE), dependents: &[Field::Opacity] },
    FieldSpec { field: Field::CircleRadius, range: bounds(&CIRCLE_RADIUS_RANGE), dependents: &[Field::CircleBounds] },
    FieldSpec { field: Field::DotSize, range: bounds(&DOT_SIZE_RANGE), dependents: &[Field::DotBounds] },
    FieldSpec { field: Field::ShowTShape, range: None, dependents: &[Field::ShowTopLine] },
    FieldSpec { field: Field::ShowVerticalLines, range: None, dependents: &[Field::ShowTopLine] },
];

impl Field {
    /// Table entry for this field, if it has one
    pub fn spec(self) -> Option<&'static FieldSpec> {
        FIELD_TABLE.iter().find(|spec| spec.field == self)
    }

    /// Derived fields that change whenever this one does
    pub fn dependents(self) -> &'static [Field] {
        self.spec().map(|spec| spec.dependents).unwrap_or(&[])
    }

    /// Clamp `value` into this field's range.
    ///
    /// NaN maps to the range minimum. Fields without a range pass through.
    pub fn clamp(self, value: f64) -> f64 {
        match self.spec().and_then(|spec| spec.range) {
            Some((min, _)) if value.is_nan() => min,
            Some((min, max)) => value.clamp(min, max),
            None => value,
        }
    }

    /// Whether a change to this field alters what the overlay draws
    pub fn is_visual(self) -> bool {
        !matches!(
            self,
            Field::ColorHex
                | Field::ColorRed
                | Field::ColorGreen
                | Field::ColorBlue
                | Field::Hue
                | Field::Saturation
                | Field::Value
                | Field::OpacityPercent
                | Field::Presets
                | Field::SelectedPreset
        )
    }
}
