//! Control panel look
//!
//! A dark, low-contrast palette with a green accent matching the default
//! crosshair color.

use egui::{Color32, FontFamily, FontId, Margin, Rounding, Stroke, TextStyle, Visuals};

/// Control panel palette
pub struct ThemeColors;

impl ThemeColors {
    pub const PANEL: Color32 = Color32::from_rgb(16, 19, 22);
    pub const CARD: Color32 = Color32::from_rgb(25, 29, 34);
    pub const WIDGET: Color32 = Color32::from_rgb(36, 41, 48);
    pub const WIDGET_HOVER: Color32 = Color32::from_rgb(47, 54, 62);
    pub const OUTLINE: Color32 = Color32::from_rgb(55, 62, 70);

    pub const ACCENT: Color32 = Color32::from_rgb(64, 214, 128);
    pub const ON: Color32 = Self::ACCENT;
    pub const OFF: Color32 = Color32::from_rgb(240, 176, 64);
    pub const DANGER: Color32 = Color32::from_rgb(236, 88, 80);

    pub const TEXT: Color32 = Color32::from_rgb(232, 236, 240);
    pub const TEXT_DIM: Color32 = Color32::from_rgb(150, 158, 168);
    pub const TEXT_FAINT: Color32 = Color32::from_rgb(96, 104, 114);
}

const WIDGET_ROUNDING: f32 = 5.0;
const CARD_ROUNDING: f32 = 8.0;

/// `color` with its alpha replaced
pub fn color_with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn panel_visuals() -> Visuals {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = ThemeColors::PANEL;
    visuals.window_fill = ThemeColors::CARD;
    visuals.extreme_bg_color = ThemeColors::PANEL;
    visuals.faint_bg_color = ThemeColors::WIDGET;
    visuals.window_stroke = Stroke::new(1.0, ThemeColors::OUTLINE);
    visuals.window_rounding = Rounding::same(CARD_ROUNDING);
    visuals.menu_rounding = Rounding::same(WIDGET_ROUNDING);

    let states = [
        (&mut visuals.widgets.noninteractive, ThemeColors::CARD, ThemeColors::TEXT_DIM),
        (&mut visuals.widgets.inactive, ThemeColors::WIDGET, ThemeColors::TEXT),
        (&mut visuals.widgets.hovered, ThemeColors::WIDGET_HOVER, ThemeColors::TEXT),
        (&mut visuals.widgets.active, ThemeColors::ACCENT, ThemeColors::PANEL),
        (&mut visuals.widgets.open, ThemeColors::WIDGET_HOVER, ThemeColors::TEXT),
    ];
    for (widget, fill, text) in states {
        widget.bg_fill = fill;
        widget.weak_bg_fill = fill;
        widget.fg_stroke = Stroke::new(1.0, text);
        widget.rounding = Rounding::same(WIDGET_ROUNDING);
    }

    visuals.selection.bg_fill = color_with_alpha(ThemeColors::ACCENT, 70);
    visuals.selection.stroke = Stroke::new(1.0, ThemeColors::ACCENT);
    visuals.hyperlink_color = ThemeColors::ACCENT;
    visuals
}

/// Install the control panel style on `ctx`
pub fn apply_theme(ctx: &egui::Context) {
    ctx.style_mut(|style| {
        style.visuals = panel_visuals();
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 4.0);
        style.spacing.slider_width = 170.0;

        let proportional = |size| FontId::new(size, FontFamily::Proportional);
        style.text_styles = [
            (TextStyle::Small, proportional(11.0)),
            (TextStyle::Body, proportional(14.0)),
            (TextStyle::Button, proportional(14.0)),
            (TextStyle::Heading, proportional(19.0)),
            (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
        ]
        .into();
    });
}

/// Card that groups related settings
pub fn section_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(ThemeColors::CARD)
        .stroke(Stroke::new(1.0, ThemeColors::OUTLINE))
        .rounding(Rounding::same(CARD_ROUNDING))
        .inner_margin(Margin::same(14.0))
}

/// Heading at the top of a card
pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(15.0).strong().color(ThemeColors::TEXT));
    ui.add_space(6.0);
}
