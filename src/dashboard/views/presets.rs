//! Presets view - save, load and delete named presets

use egui::RichText;

use crate::dashboard::state::PanelViewState;
use crate::dashboard::theme::{section_frame, section_heading, ThemeColors};
use crate::state::{AppearanceState, PresetStore};

/// Render the presets view
pub fn render_presets_view(
    ui: &mut egui::Ui,
    state: &mut AppearanceState,
    view_state: &mut PanelViewState,
    store: &dyn PresetStore,
) {
    ui.heading(RichText::new("Presets").strong());
    ui.label(
        RichText::new("Saving under an existing name replaces it")
            .size(13.0)
            .color(ThemeColors::TEXT_DIM),
    );
    ui.add_space(12.0);

    section_frame().show(ui, |ui| {
        section_heading(ui, "Save current");
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut view_state.new_preset_name)
                    .hint_text("Preset name")
                    .desired_width(180.0),
            );
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let can_save = !view_state.new_preset_name.trim().is_empty();

            if (ui.add_enabled(can_save, egui::Button::new("Save")).clicked() || submitted)
                && state.save_preset(&view_state.new_preset_name, store)
            {
                view_state.new_preset_name.clear();
            }
        });
    });

    ui.add_space(12.0);

    section_frame().show(ui, |ui| {
        section_heading(ui, "Saved");

        if state.presets().is_empty() {
            ui.label(RichText::new("No presets yet").color(ThemeColors::TEXT_FAINT));
            return;
        }

        let selected = state.selected_preset().map(|p| p.name.clone());
        let mut clicked = None;
        egui::ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
            for name in state.preset_names() {
                let is_selected = selected.as_deref() == Some(name);
                if ui.selectable_label(is_selected, name).clicked() {
                    clicked = Some(name.to_string());
                }
            }
        });
        if let Some(name) = clicked {
            state.select_preset(Some(&name));
        }

        ui.add_space(8.0);
        let has_selection = state.selected_preset().is_some();
        ui.horizontal(|ui| {
            if ui.add_enabled(has_selection, egui::Button::new("Load")).clicked() {
                state.load_selected_preset();
            }
            let delete = egui::Button::new(RichText::new("Delete").color(ThemeColors::DANGER));
            if ui.add_enabled(has_selection, delete).clicked() {
                state.delete_selected_preset(store);
            }
        });
    });
}
