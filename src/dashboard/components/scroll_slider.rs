//! Scroll-enabled slider component
//!
//! A slider that can also be adjusted with the mouse wheel when hovered.

use egui::{Slider, Ui};
use std::ops::RangeInclusive;

/// Value after one wheel notch in `direction` (+1 up, -1 down)
pub fn scroll_value(current: f64, direction: f64, step: f64, range: &RangeInclusive<f64>) -> f64 {
    (current + direction.signum() * step).clamp(*range.start(), *range.end())
}

/// Add a scroll-enabled slider. Returns true if the value changed.
///
/// The wheel step is `step` when given, otherwise 1/20th of the range.
pub fn scroll_slider(
    ui: &mut Ui,
    value: &mut f64,
    range: RangeInclusive<f64>,
    step: Option<f64>,
    suffix: Option<&str>,
    fixed_decimals: Option<usize>,
) -> bool {
    let scroll_step = step.unwrap_or((range.end() - range.start()) / 20.0);

    let mut slider = Slider::new(value, range.clone());
    if let Some(s) = step {
        slider = slider.step_by(s);
    }
    if let Some(s) = suffix {
        slider = slider.suffix(s);
    }
    if let Some(d) = fixed_decimals {
        slider = slider.fixed_decimals(d);
    }

    let response = ui.add(slider);
    let mut changed = response.changed();

    if response.hovered() {
        let delta = ui.input(|i| i.raw_scroll_delta.y);
        if delta != 0.0 {
            let next = scroll_value(*value, f64::from(delta), scroll_step, &range);
            if next != *value {
                *value = next;
                changed = true;
            }
        }
    }

    changed
}

/// Label plus scroll slider for one numeric setting.
/// Returns the new value when the user moved the slider.
pub fn labeled_slider(
    ui: &mut Ui,
    label: &str,
    current: f64,
    range: RangeInclusive<f64>,
    step: f64,
    suffix: &str,
) -> Option<f64> {
    let mut value = current;
    let changed = ui
        .horizontal(|ui| {
            ui.add_sized([90.0, 20.0], egui::Label::new(label));
            let decimals = if step < 1.0 { 2 } else { 0 };
            scroll_slider(ui, &mut value, range, Some(step), Some(suffix), Some(decimals))
        })
        .inner;
    changed.then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_up_and_down() {
        let range = 1.0..=100.0;
        assert_eq!(scroll_value(20.0, 1.0, 1.0, &range), 21.0);
        assert_eq!(scroll_value(20.0, -3.5, 1.0, &range), 19.0);
    }

    #[test]
    fn test_scroll_clamps_to_range() {
        let range = 0.1..=1.0;
        assert_eq!(scroll_value(0.98, 1.0, 0.05, &range), 1.0);
        assert_eq!(scroll_value(0.12, -1.0, 0.05, &range), 0.1);
    }
}
