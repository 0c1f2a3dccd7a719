//! Shape view - line, dot and circle settings

use egui::RichText;

use crate::dashboard::components::labeled_slider;
use crate::dashboard::state::PanelViewState;
use crate::dashboard::theme::{section_frame, section_heading, ThemeColors};
use crate::state::fields::{
    CIRCLE_RADIUS_RANGE, DOT_SIZE_RANGE, GAP_RANGE, OPACITY_PERCENT_RANGE, SIZE_RANGE,
    THICKNESS_RANGE,
};
use crate::state::AppearanceState;

/// Render the shape view
pub fn render_shape_view(ui: &mut egui::Ui, state: &mut AppearanceState, view_state: &PanelViewState) {
    ui.heading(RichText::new("Shape").strong());
    ui.label(
        RichText::new("Lines, center dot and circle")
            .size(13.0)
            .color(ThemeColors::TEXT_DIM),
    );
    ui.add_space(12.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        section_frame().show(ui, |ui| {
            section_heading(ui, "Lines");

            if let Some(v) = labeled_slider(ui, "Length", state.size(), SIZE_RANGE, 1.0, " px") {
                state.set_size(v);
            }
            if let Some(v) = labeled_slider(ui, "Thickness", state.thickness(), THICKNESS_RANGE, 1.0, " px") {
                state.set_thickness(v);
            }
            if let Some(v) = labeled_slider(ui, "Gap", state.gap(), GAP_RANGE, 1.0, " px") {
                state.set_gap(v);
            }
            if let Some(v) = labeled_slider(ui, "Opacity", state.opacity_percent(), OPACITY_PERCENT_RANGE, 1.0, " %") {
                state.set_opacity_percent(v);
            }

            ui.add_space(8.0);
            let mut horizontal = state.show_horizontal_lines();
            if ui.checkbox(&mut horizontal, "Horizontal lines").changed() {
                state.set_show_horizontal_lines(horizontal);
            }
            let mut vertical = state.show_vertical_lines();
            if ui.checkbox(&mut vertical, "Vertical lines").changed() {
                state.set_show_vertical_lines(vertical);
            }
            let mut t_shape = state.show_t_shape();
            if ui.checkbox(&mut t_shape, "T-shape (no top line)").changed() {
                state.set_show_t_shape(t_shape);
            }
        });

        ui.add_space(12.0);

        section_frame().show(ui, |ui| {
            section_heading(ui, "Dot & Circle");

            let mut show_dot = state.show_dot();
            if ui.checkbox(&mut show_dot, "Center dot").changed() {
                state.set_show_dot(show_dot);
            }
            ui.add_enabled_ui(show_dot, |ui| {
                if let Some(v) = labeled_slider(ui, "Dot size", state.dot_size(), DOT_SIZE_RANGE, 1.0, " px") {
                    state.set_dot_size(v);
                }
            });

            ui.add_space(4.0);
            let mut show_circle = state.show_circle();
            if ui.checkbox(&mut show_circle, "Circle").changed() {
                state.set_show_circle(show_circle);
            }
            ui.add_enabled_ui(show_circle, |ui| {
                if let Some(v) = labeled_slider(ui, "Radius", state.circle_radius(), CIRCLE_RADIUS_RANGE, 1.0, " px") {
                    state.set_circle_radius(v);
                }
            });
        });

        ui.add_space(12.0);

        section_frame().show(ui, |ui| {
            section_heading(ui, "Overlay");

            let mut enabled = state.crosshair_enabled();
            if ui.checkbox(&mut enabled, "Show crosshair").changed() {
                state.set_crosshair_enabled(enabled);
            }

            ui.horizontal(|ui| {
                ui.label("Toggle hotkey:");
                let hotkey = view_state.toggle_hotkey.as_deref().unwrap_or("Not set");
                ui.label(RichText::new(hotkey).strong().monospace());
            });

            ui.add_space(8.0);
            if ui.button("Reset to defaults").clicked() {
                state.reset_to_defaults();
            }
        });
    });
}
