//! Color view - HSV picker, RGB channels, hex entry and preview

use egui::{Color32, RichText, Sense, Stroke, TextEdit, Vec2};

use crate::color::Rgb;
use crate::dashboard::components::{color_picker, labeled_slider, to_color32, PickerEdit};
use crate::dashboard::theme::{section_frame, section_heading, ThemeColors};
use crate::overlay::widgets::CrosshairScene;
use crate::state::fields::{CHANNEL_RANGE, HUE_RANGE, UNIT_RANGE};
use crate::state::geometry::CANVAS_SIZE;
use crate::state::AppearanceState;

/// One-click colors
pub const QUICK_COLORS: [(&str, Rgb); 8] = [
    ("Green", Rgb::new(0, 255, 0)),
    ("Red", Rgb::new(255, 0, 0)),
    ("Cyan", Rgb::new(0, 255, 255)),
    ("Yellow", Rgb::new(255, 255, 0)),
    ("Magenta", Rgb::new(255, 0, 255)),
    ("White", Rgb::new(255, 255, 255)),
    ("Orange", Rgb::new(255, 128, 0)),
    ("Black", Rgb::new(0, 0, 0)),
];

/// Render the color view
pub fn render_color_view(ui: &mut egui::Ui, state: &mut AppearanceState) {
    ui.heading(RichText::new("Color").strong());
    ui.add_space(12.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        section_frame().show(ui, |ui| {
            section_heading(ui, "Picker");

            match color_picker(ui, state.hsv()) {
                Some(PickerEdit::SaturationValue { saturation, value }) => {
                    state.set_saturation_value(saturation, value);
                }
                Some(PickerEdit::Hue(hue)) => {
                    state.set_hue(hue);
                }
                None => {}
            }

            ui.add_space(8.0);
            let hsv = state.hsv();
            if let Some(v) = labeled_slider(ui, "Hue", hsv.h, HUE_RANGE, 1.0, "°") {
                state.set_hue(v);
            }
            if let Some(v) = labeled_slider(ui, "Saturation", hsv.s, UNIT_RANGE, 0.01, "") {
                state.set_saturation(v);
            }
            if let Some(v) = labeled_slider(ui, "Value", hsv.v, UNIT_RANGE, 0.01, "") {
                state.set_value(v);
            }
        });

        ui.add_space(12.0);

        section_frame().show(ui, |ui| {
            section_heading(ui, "RGB");

            if let Some(v) = labeled_slider(ui, "Red", f64::from(state.red()), CHANNEL_RANGE, 1.0, "") {
                state.set_red(v);
            }
            if let Some(v) = labeled_slider(ui, "Green", f64::from(state.green()), CHANNEL_RANGE, 1.0, "") {
                state.set_green(v);
            }
            if let Some(v) = labeled_slider(ui, "Blue", f64::from(state.blue()), CHANNEL_RANGE, 1.0, "") {
                state.set_blue(v);
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.add_sized([90.0, 20.0], egui::Label::new("Hex"));
                let mut hex = state.color_hex().to_string();
                let response = ui.add(
                    TextEdit::singleline(&mut hex)
                        .desired_width(110.0)
                        .font(egui::TextStyle::Monospace),
                );
                if response.changed() {
                    state.set_color_hex(&hex);
                }
                if Rgb::from_hex(state.color_hex()).is_err() {
                    ui.label(RichText::new("invalid").size(12.0).color(ThemeColors::DANGER));
                }
            });
        });

        ui.add_space(12.0);

        section_frame().show(ui, |ui| {
            section_heading(ui, "Quick colors");
            ui.horizontal_wrapped(|ui| {
                for (name, rgb) in QUICK_COLORS {
                    if swatch(ui, rgb, state.color() == rgb).on_hover_text(name).clicked() {
                        state.set_color(rgb);
                    }
                }
            });
        });

        ui.add_space(12.0);

        section_frame().show(ui, |ui| {
            section_heading(ui, "Preview");
            render_preview(ui, state);
        });
    });
}

fn swatch(ui: &mut egui::Ui, rgb: Rgb, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(28.0), Sense::click());
    if ui.is_rect_visible(rect) {
        let stroke = if selected {
            Stroke::new(2.0, ThemeColors::ACCENT)
        } else if response.hovered() {
            Stroke::new(1.0, ThemeColors::TEXT)
        } else {
            Stroke::new(1.0, ThemeColors::OUTLINE)
        };
        ui.painter().rect_filled(rect, 4.0, to_color32(rgb));
        ui.painter().rect_stroke(rect, 4.0, stroke);
    }
    response
}

/// The crosshair at real size on a dark background
fn render_preview(ui: &mut egui::Ui, state: &AppearanceState) {
    let side = CANVAS_SIZE as f32;
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 6.0, Color32::from_rgb(60, 70, 80));

    let mut scene = CrosshairScene::from_state(state);
    scene.enabled = true;
    painter.extend(scene.shapes(rect.min));
}
