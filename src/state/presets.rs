//! Named presets
//!
//! Presets are independent copies of the appearance settings. Names are
//! unique; saving under an existing name replaces that entry and moves it to
//! the end of the list.

use tracing::{debug, info};

use super::{AppearanceState, Field, Mutation};
use crate::settings::Preset;

/// Where the preset list is written after every change
pub trait PresetStore {
    fn save_presets(&self, presets: &[Preset]);
}

/// Trim names, drop blank ones and keep the last entry for duplicate names
pub fn normalize_presets(presets: Vec<Preset>) -> Vec<Preset> {
    let mut normalized: Vec<Preset> = Vec::with_capacity(presets.len());
    for preset in presets {
        let name = preset.name.trim();
        if name.is_empty() {
            debug!("Dropping preset without a name");
            continue;
        }
        let name = name.to_string();
        normalized.retain(|existing| existing.name != name);
        normalized.push(Preset {
            name,
            settings: preset.settings.clamped(),
        });
    }
    normalized
}

impl AppearanceState {
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.name.as_str())
    }

    /// Currently selected preset, if it still exists
    pub fn selected_preset(&self) -> Option<&Preset> {
        let name = self.selected_preset.as_deref()?;
        self.presets.iter().find(|p| p.name == name)
    }

    /// Select a preset by name; `None` clears the selection
    pub fn select_preset(&mut self, name: Option<&str>) -> bool {
        let name = match name {
            Some(name) if self.presets.iter().any(|p| p.name == name) => Some(name.to_string()),
            Some(name) => {
                debug!(preset = name, "Cannot select unknown preset");
                return false;
            }
            None => None,
        };
        self.mutate(None, |state, m| state.write_selection(m, name))
    }

    /// Store the current settings under `name` and select it.
    ///
    /// Blank names are ignored. Returns whether a preset was saved.
    pub fn save_preset(&mut self, name: &str, store: &dyn PresetStore) -> bool {
        let name = name.trim();
        if name.is_empty() {
            debug!("Ignoring preset save without a name");
            return false;
        }

        let preset = Preset::new(name, &self.settings);
        self.mutate(None, |state, m| {
            state.presets.retain(|p| p.name != name);
            state.presets.push(preset);
            m.changes.insert_only(Field::Presets);
            store.save_presets(&state.presets);
            state.write_selection(m, Some(name.to_string()));
        });
        info!(preset = name, "Saved preset");
        true
    }

    /// Apply the selected preset to the live settings
    pub fn load_selected_preset(&mut self) -> bool {
        let Some(preset) = self.selected_preset().cloned() else {
            return false;
        };
        info!(preset = %preset.name, "Loading preset");
        self.apply_settings(&preset.settings);
        true
    }

    /// Remove the selected preset and clear the selection
    pub fn delete_selected_preset(&mut self, store: &dyn PresetStore) -> bool {
        let Some(name) = self.selected_preset().map(|p| p.name.clone()) else {
            return false;
        };

        self.mutate(None, |state, m| {
            state.presets.retain(|p| p.name != name);
            m.changes.insert_only(Field::Presets);
            store.save_presets(&state.presets);
            state.write_selection(m, None);
        });
        info!(preset = %name, "Deleted preset");
        true
    }

    fn write_selection(&mut self, m: &mut Mutation, name: Option<String>) {
        if self.selected_preset != name {
            self.selected_preset = name;
            m.changes.insert_only(Field::SelectedPreset);
        }
    }
}
