//! Crosshair appearance settings and named presets
//!
//! This is the persisted shape of the crosshair. Field names are stable across
//! versions: unknown fields are ignored on read and missing fields take their
//! defaults, so older and newer files keep loading.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::state::fields::Field;

/// Default crosshair color (pure green)
pub const DEFAULT_COLOR: Rgb = Rgb::FALLBACK;
pub const DEFAULT_SIZE: f64 = 20.0;
pub const DEFAULT_THICKNESS: f64 = 2.0;
pub const DEFAULT_GAP: f64 = 4.0;
pub const DEFAULT_OPACITY: f64 = 1.0;
pub const DEFAULT_CIRCLE_RADIUS: f64 = 15.0;
pub const DEFAULT_DOT_SIZE: f64 = 4.0;

/// Complete appearance of the crosshair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppearanceSettings {
    /// Line, dot and circle color
    #[serde(alias = "Color", with = "hex_color")]
    pub color: Rgb,
    /// Length of each line in pixels
    #[serde(alias = "Size")]
    pub size: f64,
    /// Stroke width of lines and circle in pixels
    #[serde(alias = "Thickness")]
    pub thickness: f64,
    /// Distance from the center to the start of each line
    #[serde(alias = "Gap")]
    pub gap: f64,
    /// Overall opacity (0.1 - 1.0)
    #[serde(alias = "Opacity")]
    pub opacity: f64,
    #[serde(alias = "ShowDot")]
    pub show_dot: bool,
    #[serde(alias = "ShowCircle")]
    pub show_circle: bool,
    #[serde(alias = "CircleRadius")]
    pub circle_radius: f64,
    #[serde(alias = "DotSize")]
    pub dot_size: f64,
    /// T-shape hides the top line
    #[serde(alias = "ShowTShape")]
    pub show_t_shape: bool,
    #[serde(alias = "ShowHorizontalLines")]
    pub show_horizontal_lines: bool,
    #[serde(alias = "ShowVerticalLines")]
    pub show_vertical_lines: bool,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            size: DEFAULT_SIZE,
            thickness: DEFAULT_THICKNESS,
            gap: DEFAULT_GAP,
            opacity: DEFAULT_OPACITY,
            show_dot: true,
            show_circle: false,
            circle_radius: DEFAULT_CIRCLE_RADIUS,
            dot_size: DEFAULT_DOT_SIZE,
            show_t_shape: false,
            show_horizontal_lines: true,
            show_vertical_lines: true,
        }
    }
}

impl AppearanceSettings {
    /// Return a copy with every numeric field clamped to its range
    pub fn clamped(&self) -> Self {
        Self {
            size: Field::Size.clamp(self.size),
            thickness: Field::Thickness.clamp(self.thickness),
            gap: Field::Gap.clamp(self.gap),
            opacity: Field::Opacity.clamp(self.opacity),
            circle_radius: Field::CircleRadius.clamp(self.circle_radius),
            dot_size: Field::DotSize.clamp(self.dot_size),
            ..self.clone()
        }
    }
}

/// A named, independent copy of appearance settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Settings")]
    pub settings: AppearanceSettings,
}

impl Preset {
    pub fn new(name: impl Into<String>, settings: &AppearanceSettings) -> Self {
        Self {
            name: name.into(),
            settings: settings.clone(),
        }
    }
}

/// Serialize colors as `#RRGGBB`; unreadable strings fall back to the default
mod hex_color {
    use serde::{Deserialize, Deserializer, Serializer};
    use tracing::warn;

    use super::DEFAULT_COLOR;
    use crate::color::Rgb;

    pub fn serialize<S>(color: &Rgb, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&color.to_hex())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Rgb, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Rgb::from_hex(&raw).unwrap_or_else(|e| {
            warn!(color = %raw, error = %e, "Unreadable color in settings, using default");
            DEFAULT_COLOR
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppearanceSettings::default();
        assert_eq!(settings.color, Rgb::new(0, 255, 0));
        assert_eq!(settings.size, 20.0);
        assert_eq!(settings.thickness, 2.0);
        assert_eq!(settings.gap, 4.0);
        assert_eq!(settings.opacity, 1.0);
        assert!(settings.show_dot);
        assert!(!settings.show_circle);
        assert_eq!(settings.circle_radius, 15.0);
        assert_eq!(settings.dot_size, 4.0);
        assert!(!settings.show_t_shape);
        assert!(settings.show_horizontal_lines);
        assert!(settings.show_vertical_lines);
    }

    #[test]
    fn test_clamped() {
        let settings = AppearanceSettings {
            size: 150.0,
            thickness: 0.0,
            gap: -5.0,
            opacity: 0.0,
            circle_radius: 1000.0,
            dot_size: f64::NAN,
            ..Default::default()
        }
        .clamped();

        assert_eq!(settings.size, 100.0);
        assert_eq!(settings.thickness, 1.0);
        assert_eq!(settings.gap, 0.0);
        assert_eq!(settings.opacity, 0.1);
        assert_eq!(settings.circle_radius, 100.0);
        assert_eq!(settings.dot_size, 1.0);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(AppearanceSettings::default()).unwrap();
        assert_eq!(json["color"], "#00FF00");
        assert_eq!(json["showDot"], true);
        assert_eq!(json["circleRadius"], 15.0);
        assert_eq!(json["showTShape"], false);
        assert_eq!(json["showHorizontalLines"], true);
    }

    #[test]
    fn test_missing_and_unknown_fields() {
        let settings: AppearanceSettings =
            serde_json::from_str(r##"{"color": "#FF0000", "size": 42, "glow": true}"##).unwrap();
        assert_eq!(settings.color, Rgb::new(255, 0, 0));
        assert_eq!(settings.size, 42.0);
        assert_eq!(settings.thickness, DEFAULT_THICKNESS);
        assert!(settings.show_dot);
    }

    #[test]
    fn test_pascal_case_aliases() {
        let settings: AppearanceSettings = serde_json::from_str(
            r##"{"Color": "#0000FF", "Size": 30, "ShowCircle": true, "CircleRadius": 40}"##,
        )
        .unwrap();
        assert_eq!(settings.color, Rgb::new(0, 0, 255));
        assert_eq!(settings.size, 30.0);
        assert!(settings.show_circle);
        assert_eq!(settings.circle_radius, 40.0);
    }

    #[test]
    fn test_bad_color_falls_back() {
        let settings: AppearanceSettings =
            serde_json::from_str(r#"{"color": "banana", "gap": 9}"#).unwrap();
        assert_eq!(settings.color, DEFAULT_COLOR);
        assert_eq!(settings.gap, 9.0);
    }

    #[test]
    fn test_preset_is_independent_copy() {
        let mut settings = AppearanceSettings::default();
        let preset = Preset::new("Sniper", &settings);
        settings.size = 80.0;
        assert_eq!(preset.settings.size, DEFAULT_SIZE);
    }
}
