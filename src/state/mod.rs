//! Reactive appearance state
//!
//! The single live copy of the crosshair appearance, shared by the overlay
//! and the control panel. Every write goes through a setter that clamps the
//! value, re-derives dependent fields and then tells every listener which
//! logical fields changed.
//!
//! A setter builds a [`Mutation`] and passes it down the update chain. The
//! mutation remembers which color view started the edit, so the other views
//! can be re-derived without the originating view being reset underneath the
//! user (for example the picker keeps its hue while the value is at zero).

pub mod fields;
pub mod geometry;
pub mod observer;
mod presets;

use tracing::{debug, trace};

use crate::color::{Hsv, Rgb};
use crate::settings::{AppearanceSettings, Preset};

pub use fields::Field;
pub use geometry::{CircleBounds, CrosshairGeometry, DotBounds, LineSegment};
pub use observer::{ChangeSet, SubscriptionId};
pub use presets::{normalize_presets, PresetStore};

use observer::Observers;

/// Which color view started a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorOrigin {
    /// Hex text entry; the typed text is kept as-is
    Hex,
    /// One of the RGB channel sliders
    Channels,
    /// HSV picker; hue, saturation and value are authoritative
    Picker,
    /// Whole settings record (startup, preset load, reset)
    Settings,
}

/// An update in progress
#[derive(Debug)]
struct Mutation {
    origin: Option<ColorOrigin>,
    changes: ChangeSet,
}

impl Mutation {
    fn new(origin: Option<ColorOrigin>) -> Self {
        Self {
            origin,
            changes: ChangeSet::new(),
        }
    }

    fn started_by(&self, origin: ColorOrigin) -> bool {
        self.origin == Some(origin)
    }
}

/// Hex text and picker views of the crosshair color
#[derive(Debug, Clone, PartialEq)]
struct ColorState {
    /// Text last entered or derived; may be unparsable
    hex: String,
    /// Picker view
    hsv: Hsv,
}

impl ColorState {
    fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            hsv: rgb.to_hsv(),
        }
    }
}

/// Live crosshair appearance plus presets
#[derive(Debug)]
pub struct AppearanceState {
    settings: AppearanceSettings,
    color: ColorState,
    crosshair_enabled: bool,
    presets: Vec<Preset>,
    selected_preset: Option<String>,
    revision: u64,
    observers: Observers,
}

impl Default for AppearanceState {
    fn default() -> Self {
        Self::new(AppearanceSettings::default(), Vec::new())
    }
}

impl AppearanceState {
    /// Create the state from loaded settings and presets
    pub fn new(settings: AppearanceSettings, presets: Vec<Preset>) -> Self {
        let settings = settings.clamped();
        Self {
            color: ColorState::from_rgb(settings.color),
            settings,
            crosshair_enabled: true,
            presets: normalize_presets(presets),
            selected_preset: None,
            revision: 0,
            observers: Observers::default(),
        }
    }

    // ------------------------------------------------------------------
    // Subscription
    // ------------------------------------------------------------------

    /// Register a listener called after every committed change
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&ChangeSet, &AppearanceState) + 'static,
    ) -> SubscriptionId {
        self.observers.add(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    /// Incremented once per committed change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn mutate(&mut self, origin: Option<ColorOrigin>, apply: impl FnOnce(&mut Self, &mut Mutation)) -> bool {
        let mut mutation = Mutation::new(origin);
        apply(self, &mut mutation);
        self.commit(mutation)
    }

    fn commit(&mut self, mutation: Mutation) -> bool {
        if mutation.changes.is_empty() {
            return false;
        }

        self.revision += 1;
        trace!(revision = self.revision, changes = ?mutation.changes, "appearance changed");

        let mut listeners = self.observers.take();
        for (_, listener) in listeners.iter_mut() {
            listener(&mutation.changes, self);
        }
        self.observers.restore(listeners);
        true
    }

    // ------------------------------------------------------------------
    // Whole-record access
    // ------------------------------------------------------------------

    pub fn settings(&self) -> &AppearanceSettings {
        &self.settings
    }

    /// Owned copy of the current settings, e.g. for saving
    pub fn current_settings(&self) -> AppearanceSettings {
        self.settings.clone()
    }

    /// Copy `settings` into the live state with a single notification
    pub fn apply_settings(&mut self, settings: &AppearanceSettings) -> bool {
        let settings = settings.clamped();
        self.mutate(Some(ColorOrigin::Settings), |state, m| {
            state.write_color(m, settings.color);
            state.write_number(m, Field::Size, settings.size);
            state.write_number(m, Field::Thickness, settings.thickness);
            state.write_number(m, Field::Gap, settings.gap);
            state.write_number(m, Field::Opacity, settings.opacity);
            state.write_flag(m, Field::ShowDot, settings.show_dot);
            state.write_flag(m, Field::ShowCircle, settings.show_circle);
            state.write_number(m, Field::CircleRadius, settings.circle_radius);
            state.write_number(m, Field::DotSize, settings.dot_size);
            state.write_flag(m, Field::ShowTShape, settings.show_t_shape);
            state.write_flag(m, Field::ShowHorizontalLines, settings.show_horizontal_lines);
            state.write_flag(m, Field::ShowVerticalLines, settings.show_vertical_lines);
        })
    }

    pub fn reset_to_defaults(&mut self) -> bool {
        debug!("Resetting appearance to defaults");
        self.apply_settings(&AppearanceSettings::default())
    }

    // ------------------------------------------------------------------
    // Color
    // ------------------------------------------------------------------

    pub fn color(&self) -> Rgb {
        self.settings.color
    }

    pub fn color_hex(&self) -> &str {
        &self.color.hex
    }

    /// Color used to draw, resolved from the hex text
    pub fn brush(&self) -> Rgb {
        Rgb::from_hex(&self.color.hex).unwrap_or(Rgb::FALLBACK)
    }

    pub fn hsv(&self) -> Hsv {
        self.color.hsv
    }

    pub fn red(&self) -> u8 {
        self.settings.color.r
    }

    pub fn green(&self) -> u8 {
        self.settings.color.g
    }

    pub fn blue(&self) -> u8 {
        self.settings.color.b
    }

    /// Set the color from hex text.
    ///
    /// Unparsable text is kept for display but leaves the color unchanged;
    /// the brush then resolves to the fallback color.
    pub fn set_color_hex(&mut self, hex: &str) -> bool {
        if self.color.hex == hex {
            return false;
        }

        self.mutate(Some(ColorOrigin::Hex), |state, m| {
            state.color.hex = hex.to_string();
            m.changes.insert_only(Field::ColorHex);
            m.changes.insert_only(Field::Brush);

            match Rgb::from_hex(hex) {
                Ok(rgb) => state.write_color(m, rgb),
                Err(e) => debug!(hex, error = %e, "Ignoring unparsable color"),
            }
        })
    }

    /// Set the color directly, e.g. from a swatch
    pub fn set_color(&mut self, rgb: Rgb) -> bool {
        self.mutate(Some(ColorOrigin::Settings), |state, m| state.write_color(m, rgb))
    }

    pub fn set_red(&mut self, value: f64) -> bool {
        self.set_channel(Field::ColorRed, value)
    }

    pub fn set_green(&mut self, value: f64) -> bool {
        self.set_channel(Field::ColorGreen, value)
    }

    pub fn set_blue(&mut self, value: f64) -> bool {
        self.set_channel(Field::ColorBlue, value)
    }

    fn set_channel(&mut self, field: Field, value: f64) -> bool {
        let byte = field.clamp(value).round() as u8;
        let mut rgb = self.settings.color;
        let slot = match field {
            Field::ColorRed => &mut rgb.r,
            Field::ColorGreen => &mut rgb.g,
            Field::ColorBlue => &mut rgb.b,
            _ => return false,
        };
        if *slot == byte {
            return false;
        }
        *slot = byte;

        self.mutate(Some(ColorOrigin::Channels), |state, m| {
            m.changes.insert_only(field);
            state.write_color(m, rgb);
        })
    }

    pub fn set_hue(&mut self, hue: f64) -> bool {
        let hsv = Hsv { h: Field::Hue.clamp(hue), ..self.color.hsv };
        self.set_hsv(hsv)
    }

    pub fn set_saturation(&mut self, saturation: f64) -> bool {
        let hsv = Hsv { s: Field::Saturation.clamp(saturation), ..self.color.hsv };
        self.set_hsv(hsv)
    }

    pub fn set_value(&mut self, value: f64) -> bool {
        let hsv = Hsv { v: Field::Value.clamp(value), ..self.color.hsv };
        self.set_hsv(hsv)
    }

    /// Set saturation and value together, as the picker square does
    pub fn set_saturation_value(&mut self, saturation: f64, value: f64) -> bool {
        let hsv = Hsv {
            s: Field::Saturation.clamp(saturation),
            v: Field::Value.clamp(value),
            ..self.color.hsv
        };
        self.set_hsv(hsv)
    }

    fn set_hsv(&mut self, hsv: Hsv) -> bool {
        let previous = self.color.hsv;
        if previous == hsv {
            return false;
        }

        self.mutate(Some(ColorOrigin::Picker), |state, m| {
            state.color.hsv = hsv;
            if previous.h != hsv.h {
                m.changes.insert_only(Field::Hue);
            }
            if previous.s != hsv.s {
                m.changes.insert_only(Field::Saturation);
            }
            if previous.v != hsv.v {
                m.changes.insert_only(Field::Value);
            }
            state.write_color(m, hsv.to_rgb());
        })
    }

    /// Store `rgb` and re-derive the color views that did not start the edit
    fn write_color(&mut self, m: &mut Mutation, rgb: Rgb) {
        if !m.started_by(ColorOrigin::Hex) {
            let hex = rgb.to_hex();
            if self.color.hex != hex {
                self.color.hex = hex;
                m.changes.insert_only(Field::ColorHex);
                m.changes.insert_only(Field::Brush);
            }
        }

        let previous = self.settings.color;
        if previous == rgb {
            return;
        }
        self.settings.color = rgb;
        m.changes.insert(Field::Color);

        if !m.started_by(ColorOrigin::Channels) {
            for (field, before, after) in [
                (Field::ColorRed, previous.r, rgb.r),
                (Field::ColorGreen, previous.g, rgb.g),
                (Field::ColorBlue, previous.b, rgb.b),
            ] {
                if before != after {
                    m.changes.insert_only(field);
                }
            }
        }

        if !m.started_by(ColorOrigin::Picker) {
            let hsv = rgb.to_hsv();
            let before = self.color.hsv;
            self.color.hsv = hsv;
            for (field, changed) in [
                (Field::Hue, before.h != hsv.h),
                (Field::Saturation, before.s != hsv.s),
                (Field::Value, before.v != hsv.v),
            ] {
                if changed {
                    m.changes.insert_only(field);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Shape
    // ------------------------------------------------------------------

    pub fn size(&self) -> f64 {
        self.settings.size
    }

    pub fn thickness(&self) -> f64 {
        self.settings.thickness
    }

    pub fn gap(&self) -> f64 {
        self.settings.gap
    }

    pub fn opacity(&self) -> f64 {
        self.settings.opacity
    }

    /// Opacity as 10 - 100 for display
    pub fn opacity_percent(&self) -> f64 {
        self.settings.opacity * 100.0
    }

    pub fn circle_radius(&self) -> f64 {
        self.settings.circle_radius
    }

    pub fn dot_size(&self) -> f64 {
        self.settings.dot_size
    }

    pub fn show_dot(&self) -> bool {
        self.settings.show_dot
    }

    pub fn show_circle(&self) -> bool {
        self.settings.show_circle
    }

    pub fn show_t_shape(&self) -> bool {
        self.settings.show_t_shape
    }

    pub fn show_horizontal_lines(&self) -> bool {
        self.settings.show_horizontal_lines
    }

    pub fn show_vertical_lines(&self) -> bool {
        self.settings.show_vertical_lines
    }

    pub fn crosshair_enabled(&self) -> bool {
        self.crosshair_enabled
    }

    pub fn set_size(&mut self, value: f64) -> bool {
        self.mutate(None, |state, m| state.write_number(m, Field::Size, value))
    }

    pub fn set_thickness(&mut self, value: f64) -> bool {
        self.mutate(None, |state, m| state.write_number(m, Field::Thickness, value))
    }

    pub fn set_gap(&mut self, value: f64) -> bool {
        self.mutate(None, |state, m| state.write_number(m, Field::Gap, value))
    }

    pub fn set_opacity(&mut self, value: f64) -> bool {
        self.mutate(None, |state, m| state.write_number(m, Field::Opacity, value))
    }

    pub fn set_opacity_percent(&mut self, percent: f64) -> bool {
        self.set_opacity(percent / 100.0)
    }

    pub fn set_circle_radius(&mut self, value: f64) -> bool {
        self.mutate(None, |state, m| state.write_number(m, Field::CircleRadius, value))
    }

    pub fn set_dot_size(&mut self, value: f64) -> bool {
        self.mutate(None, |state, m| state.write_number(m, Field::DotSize, value))
    }

    pub fn set_show_dot(&mut self, show: bool) -> bool {
        self.mutate(None, |state, m| state.write_flag(m, Field::ShowDot, show))
    }

    pub fn set_show_circle(&mut self, show: bool) -> bool {
        self.mutate(None, |state, m| state.write_flag(m, Field::ShowCircle, show))
    }

    pub fn set_show_t_shape(&mut self, show: bool) -> bool {
        self.mutate(None, |state, m| state.write_flag(m, Field::ShowTShape, show))
    }

    pub fn set_show_horizontal_lines(&mut self, show: bool) -> bool {
        self.mutate(None, |state, m| state.write_flag(m, Field::ShowHorizontalLines, show))
    }

    pub fn set_show_vertical_lines(&mut self, show: bool) -> bool {
        self.mutate(None, |state, m| state.write_flag(m, Field::ShowVerticalLines, show))
    }

    pub fn set_crosshair_enabled(&mut self, enabled: bool) -> bool {
        self.mutate(None, |state, m| state.write_flag(m, Field::CrosshairEnabled, enabled))
    }

    pub fn toggle_crosshair_enabled(&mut self) -> bool {
        self.set_crosshair_enabled(!self.crosshair_enabled)
    }

    fn write_number(&mut self, m: &mut Mutation, field: Field, value: f64) {
        let clamped = field.clamp(value);
        let slot = match field {
            Field::Size => &mut self.settings.size,
            Field::Thickness => &mut self.settings.thickness,
            Field::Gap => &mut self.settings.gap,
            Field::Opacity => &mut self.settings.opacity,
            Field::CircleRadius => &mut self.settings.circle_radius,
            Field::DotSize => &mut self.settings.dot_size,
            _ => {
                debug_assert!(false, "{field:?} is not a numeric field");
                return;
            }
        };
        if *slot != clamped {
            *slot = clamped;
            m.changes.insert(field);
        }
    }

    fn write_flag(&mut self, m: &mut Mutation, field: Field, value: bool) {
        let slot = match field {
            Field::ShowDot => &mut self.settings.show_dot,
            Field::ShowCircle => &mut self.settings.show_circle,
            Field::ShowTShape => &mut self.settings.show_t_shape,
            Field::ShowHorizontalLines => &mut self.settings.show_horizontal_lines,
            Field::ShowVerticalLines => &mut self.settings.show_vertical_lines,
            Field::CrosshairEnabled => &mut self.crosshair_enabled,
            _ => {
                debug_assert!(false, "{field:?} is not a flag");
                return;
            }
        };
        if *slot != value {
            *slot = value;
            m.changes.insert(field);
        }
    }

    // ------------------------------------------------------------------
    // Derived geometry
    // ------------------------------------------------------------------

    pub fn geometry(&self) -> CrosshairGeometry {
        CrosshairGeometry::from_settings(&self.settings)
    }

    pub fn top_line(&self) -> LineSegment {
        geometry::arms(self.settings.gap, self.settings.size).0
    }

    pub fn bottom_line(&self) -> LineSegment {
        geometry::arms(self.settings.gap, self.settings.size).1
    }

    pub fn left_line(&self) -> LineSegment {
        geometry::arms(self.settings.gap, self.settings.size).0
    }

    pub fn right_line(&self) -> LineSegment {
        geometry::arms(self.settings.gap, self.settings.size).1
    }

    pub fn dot_bounds(&self) -> DotBounds {
        geometry::dot_bounds(self.settings.dot_size)
    }

    pub fn circle_bounds(&self) -> CircleBounds {
        geometry::circle_bounds(self.settings.circle_radius)
    }

    pub fn show_top_line(&self) -> bool {
        geometry::show_top_line(self.settings.show_t_shape, self.settings.show_vertical_lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn record(state: &mut AppearanceState) -> Rc<RefCell<Vec<ChangeSet>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        state.subscribe(move |changes, _| sink.borrow_mut().push(changes.clone()));
        log
    }

    #[test]
    fn test_size_clamps_and_notifies_lines() {
        let mut state = AppearanceState::default();
        let log = record(&mut state);

        assert!(state.set_size(150.0));
        assert_eq!(state.size(), 100.0);

        let log = log.borrow();
        assert_eq!(log.len(), 1);
        let changes = &log[0];
        for field in [Field::Size, Field::TopLine, Field::BottomLine, Field::LeftLine, Field::RightLine] {
            assert!(changes.contains(field), "missing {field:?}");
        }
        assert!(!changes.contains(Field::Gap));
    }

    #[test]
    fn test_gap_clamps_to_zero() {
        let mut state = AppearanceState::default();
        state.set_gap(-5.0);
        assert_eq!(state.gap(), 0.0);
        assert_eq!(state.top_line(), LineSegment { near: 100.0, far: 80.0 });
    }

    #[test]
    fn test_line_endpoints_follow_gap_and_size() {
        let mut state = AppearanceState::default();
        state.set_gap(4.0);
        state.set_size(20.0);

        assert_eq!(state.top_line(), LineSegment { near: 96.0, far: 76.0 });
        assert_eq!(state.bottom_line(), LineSegment { near: 104.0, far: 124.0 });
        assert_eq!(state.left_line(), LineSegment { near: 96.0, far: 76.0 });
        assert_eq!(state.right_line(), LineSegment { near: 104.0, far: 124.0 });
    }

    #[test]
    fn test_unchanged_value_is_silent() {
        let mut state = AppearanceState::default();
        state.set_size(100.0);
        let log = record(&mut state);
        let revision = state.revision();

        assert!(!state.set_size(100.0));
        assert!(!state.set_size(250.0));
        assert!(!state.set_show_dot(true));
        assert!(!state.set_color_hex("#00FF00"));
        assert!(!state.set_red(0.2));

        assert!(log.borrow().is_empty());
        assert_eq!(state.revision(), revision);
    }

    #[test]
    fn test_opacity_floor_and_percent_view() {
        let mut state = AppearanceState::default();
        let log = record(&mut state);

        state.set_opacity(0.0);
        assert_eq!(state.opacity(), 0.1);
        assert!((state.opacity_percent() - 10.0).abs() < 1e-9);

        state.set_opacity_percent(55.0);
        assert!((state.opacity() - 0.55).abs() < 1e-9);

        let log = log.borrow();
        assert!(log.iter().all(|c| c.contains(Field::Opacity) && c.contains(Field::OpacityPercent)));
    }

    #[test]
    fn test_radius_and_dot_bounds() {
        let mut state = AppearanceState::default();
        let log = record(&mut state);

        state.set_circle_radius(30.0);
        state.set_dot_size(10.0);

        assert_eq!(state.circle_bounds(), CircleBounds { left: 70.0, top: 70.0, diameter: 60.0 });
        assert_eq!(state.dot_bounds(), DotBounds { left: 95.0, top: 95.0, size: 10.0 });

        let log = log.borrow();
        assert!(log[0].contains(Field::CircleBounds));
        assert!(!log[0].contains(Field::DotBounds));
        assert!(log[1].contains(Field::DotBounds));
    }

    #[test]
    fn test_show_top_line_dependency() {
        let mut state = AppearanceState::default();
        let log = record(&mut state);
        assert!(state.show_top_line());

        state.set_show_t_shape(true);
        assert!(!state.show_top_line());
        state.set_show_t_shape(false);
        state.set_show_vertical_lines(false);
        assert!(!state.show_top_line());

        state.set_show_horizontal_lines(false);

        let log = log.borrow();
        assert!(log[0].contains(Field::ShowTopLine));
        assert!(log[1].contains(Field::ShowTopLine));
        assert!(log[2].contains(Field::ShowTopLine));
        assert!(!log[3].contains(Field::ShowTopLine));
    }

    #[test]
    fn test_invalid_hex_keeps_color_and_falls_back() {
        let mut state = AppearanceState::default();
        state.set_color_hex("#FF0000");
        assert_eq!(state.color(), Rgb::new(255, 0, 0));

        let log = record(&mut state);
        assert!(state.set_color_hex("notacolor"));

        assert_eq!(state.color(), Rgb::new(255, 0, 0));
        assert_eq!(state.color_hex(), "notacolor");
        assert_eq!(state.brush(), Rgb::FALLBACK);
        assert_eq!(state.current_settings().color, Rgb::new(255, 0, 0));

        let log = log.borrow();
        assert!(log[0].contains(Field::ColorHex));
        assert!(log[0].contains(Field::Brush));
        assert!(!log[0].contains(Field::Color));
        assert!(!log[0].contains(Field::ColorRed));
    }

    #[test]
    fn test_hex_edit_keeps_typed_text() {
        let mut state = AppearanceState::default();
        state.set_color_hex("#f80");
        assert_eq!(state.color_hex(), "#f80");
        assert_eq!(state.color(), Rgb::new(255, 136, 0));
        assert_eq!(state.brush(), Rgb::new(255, 136, 0));
    }

    #[test]
    fn test_hex_edit_broadcasts_channels_and_hsv() {
        let mut state = AppearanceState::default();
        let log = record(&mut state);

        state.set_color_hex("#FF0000");

        let changes = &log.borrow()[0];
        for field in [
            Field::Color,
            Field::ColorHex,
            Field::Brush,
            Field::ColorRed,
            Field::ColorGreen,
            Field::Hue,
        ] {
            assert!(changes.contains(field), "missing {field:?}");
        }
        // blue stayed at zero
        assert!(!changes.contains(Field::ColorBlue));
        assert_eq!(state.hsv().h, 0.0);
    }

    #[test]
    fn test_channel_edit_updates_hex_without_echoing_channels() {
        let mut state = AppearanceState::default();
        let log = record(&mut state);

        assert!(state.set_red(255.0));
        assert_eq!(state.color_hex(), "#FFFF00");
        assert_eq!(state.brush(), Rgb::new(255, 255, 0));

        let changes = &log.borrow()[0];
        assert!(changes.contains(Field::ColorRed));
        assert!(changes.contains(Field::ColorHex));
        assert!(changes.contains(Field::Hue));
        assert!(!changes.contains(Field::ColorGreen));
        assert!(!changes.contains(Field::ColorBlue));
    }

    #[test]
    fn test_channel_clamps_and_rounds() {
        let mut state = AppearanceState::default();
        state.set_blue(300.0);
        assert_eq!(state.blue(), 255);
        state.set_blue(-3.0);
        assert_eq!(state.blue(), 0);
        state.set_blue(12.6);
        assert_eq!(state.blue(), 13);
    }

    #[test]
    fn test_picker_keeps_hue_at_zero_value() {
        let mut state = AppearanceState::default();
        state.set_hue(200.0);
        assert!(state.set_value(0.0));

        assert_eq!(state.color(), Rgb::new(0, 0, 0));
        assert_eq!(state.hsv().h, 200.0);

        state.set_value(1.0);
        let hsv = state.hsv();
        assert_eq!(hsv.h, 200.0);
        assert_eq!(state.color(), Hsv::new(200.0, hsv.s, 1.0).to_rgb());
    }

    #[test]
    fn test_picker_edit_does_not_echo_hsv() {
        let mut state = AppearanceState::default();
        let log = record(&mut state);

        state.set_saturation_value(0.5, 0.5);

        let changes = &log.borrow()[0];
        assert!(changes.contains(Field::Saturation));
        assert!(changes.contains(Field::Value));
        assert!(!changes.contains(Field::Hue));
        assert!(changes.contains(Field::Color));
        assert!(changes.contains(Field::ColorHex));
        assert_eq!(state.color_hex(), state.color().to_hex());
    }

    #[test]
    fn test_hue_360_is_kept_and_draws_as_zero() {
        let mut state = AppearanceState::default();
        state.set_hue(0.0);
        let at_zero = state.color();

        state.set_hue(400.0);
        assert_eq!(state.hsv().h, 360.0);
        assert_eq!(state.color(), at_zero);
        assert_eq!(state.color(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_color_from_rgb_resets_hsv() {
        let mut state = AppearanceState::default();
        state.set_hue(200.0);
        state.set_color(Rgb::new(128, 128, 128));
        assert_eq!(state.hsv().h, 0.0);
        assert_eq!(state.hsv().s, 0.0);
    }

    #[test]
    fn test_apply_settings_single_notification() {
        let mut state = AppearanceState::default();
        let log = record(&mut state);

        let target = AppearanceSettings {
            color: Rgb::new(10, 20, 30),
            size: 50.0,
            gap: 10.0,
            show_circle: true,
            circle_radius: 500.0,
            ..Default::default()
        };
        assert!(state.apply_settings(&target));

        assert_eq!(log.borrow().len(), 1);
        let changes = &log.borrow()[0];
        for field in [
            Field::Color,
            Field::ColorRed,
            Field::ColorGreen,
            Field::ColorBlue,
            Field::Hue,
            Field::Size,
            Field::Gap,
            Field::TopLine,
            Field::ShowCircle,
            Field::CircleRadius,
            Field::CircleBounds,
        ] {
            assert!(changes.contains(field), "missing {field:?}");
        }
        assert!(!changes.contains(Field::Thickness));
        assert_eq!(state.circle_radius(), 100.0);
        assert_eq!(state.color_hex(), "#0A141E");
    }

    #[test]
    fn test_apply_settings_repairs_invalid_hex() {
        let mut state = AppearanceState::default();
        state.set_color_hex("garbage");
        assert_eq!(state.brush(), Rgb::FALLBACK);

        state.set_color_hex("#123456");
        state.set_color_hex("zzz");
        state.apply_settings(&AppearanceSettings {
            color: Rgb::new(0x12, 0x34, 0x56),
            ..Default::default()
        });
        assert_eq!(state.color_hex(), "#123456");
        assert_eq!(state.brush(), Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut state = AppearanceState::default();
        state.set_size(70.0);
        state.set_color_hex("#FFFFFF");
        assert!(state.reset_to_defaults());
        assert_eq!(state.current_settings(), AppearanceSettings::default());
        assert!(!state.reset_to_defaults());
    }

    #[test]
    fn test_listener_sees_committed_state() {
        let mut state = AppearanceState::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        state.subscribe(move |_, state| sink.borrow_mut().push((state.size(), state.top_line())));

        state.set_size(30.0);

        assert_eq!(
            seen.borrow().as_slice(),
            &[(30.0, LineSegment { near: 96.0, far: 66.0 })]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let mut state = AppearanceState::default();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let id = state.subscribe(move |_, _| *counter.borrow_mut() += 1);

        state.set_thickness(5.0);
        assert!(state.unsubscribe(id));
        state.set_thickness(6.0);

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_toggle_crosshair_enabled() {
        let mut state = AppearanceState::default();
        let log = record(&mut state);
        assert!(state.crosshair_enabled());
        state.toggle_crosshair_enabled();
        assert!(!state.crosshair_enabled());
        assert!(log.borrow()[0].contains(Field::CrosshairEnabled));
    }

    #[test]
    fn test_new_clamps_loaded_settings() {
        let state = AppearanceState::new(
            AppearanceSettings {
                size: 1000.0,
                opacity: 0.0,
                ..Default::default()
            },
            Vec::new(),
        );
        assert_eq!(state.size(), 100.0);
        assert_eq!(state.opacity(), 0.1);
        assert_eq!(state.revision(), 0);
    }
}
