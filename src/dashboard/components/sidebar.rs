//! Tab list on the left of the control panel

use egui::{Align2, FontId, Rect, RichText, Rounding, Sense, Vec2};

use crate::dashboard::state::PanelTab;
use crate::dashboard::theme::{color_with_alpha, ThemeColors};

const TAB_HEIGHT: f32 = 30.0;
const INSET: f32 = 6.0;

/// Tabs at the top, crosshair visibility at the bottom
pub fn render_sidebar(ui: &mut egui::Ui, current_tab: &mut PanelTab, crosshair_enabled: bool) {
    ui.add_space(14.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("+").size(30.0).color(ThemeColors::ACCENT));
        ui.label(RichText::new("CROSSHAIR").size(10.0).color(ThemeColors::TEXT_FAINT));
    });
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(8.0);

    for tab in PanelTab::ALL {
        if tab_button(ui, tab, *current_tab == tab).clicked() {
            *current_tab = tab;
        }
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
        ui.add_space(10.0);
        let (dot, text) = if crosshair_enabled {
            (ThemeColors::ON, "Visible")
        } else {
            (ThemeColors::OFF, "Hidden")
        };
        ui.label(RichText::new(format!("• {text}")).size(11.0).color(dot));
    });
}

fn tab_button(ui: &mut egui::Ui, tab: PanelTab, selected: bool) -> egui::Response {
    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, TAB_HEIGHT), Sense::click());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let hovered = response.hovered();
    let body = rect.shrink2(Vec2::new(INSET, 1.0));
    let painter = ui.painter();

    if selected {
        painter.rect_filled(body, Rounding::same(5.0), color_with_alpha(ThemeColors::ACCENT, 40));
        let bar = Rect::from_min_size(body.left_top(), Vec2::new(3.0, body.height()));
        painter.rect_filled(bar, Rounding::same(1.5), ThemeColors::ACCENT);
    } else if hovered {
        painter.rect_filled(body, Rounding::same(5.0), ThemeColors::WIDGET_HOVER);
    }

    let color = match (selected, hovered) {
        (true, _) => ThemeColors::ACCENT,
        (false, true) => ThemeColors::TEXT,
        (false, false) => ThemeColors::TEXT_DIM,
    };
    let font = FontId::proportional(14.0);
    painter.text(
        body.left_center() + Vec2::new(12.0, 0.0),
        Align2::LEFT_CENTER,
        tab.icon(),
        font.clone(),
        color,
    );
    painter.text(
        body.left_center() + Vec2::new(30.0, 0.0),
        Align2::LEFT_CENTER,
        tab.name(),
        font,
        color,
    );

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}
