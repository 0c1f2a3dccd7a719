//! Control panel view state

/// Tab shown in the control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelTab {
    #[default]
    Shape,
    Color,
    Presets,
}

impl PanelTab {
    pub const ALL: [PanelTab; 3] = [PanelTab::Shape, PanelTab::Color, PanelTab::Presets];

    /// Get the display name for this tab
    pub fn name(&self) -> &'static str {
        match self {
            PanelTab::Shape => "Shape",
            PanelTab::Color => "Color",
            PanelTab::Presets => "Presets",
        }
    }

    /// Get the icon character for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            PanelTab::Shape => "S",
            PanelTab::Color => "C",
            PanelTab::Presets => "P",
        }
    }
}

/// UI-only state that is not part of the crosshair appearance
#[derive(Debug, Default)]
pub struct PanelViewState {
    pub current_tab: PanelTab,
    /// Name typed into the "save preset" box
    pub new_preset_name: String,
    /// Hotkey shown on the Shape tab, if one is registered
    pub toggle_hotkey: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_have_distinct_names() {
        let names: Vec<_> = PanelTab::ALL.iter().map(PanelTab::name).collect();
        assert_eq!(names, ["Shape", "Color", "Presets"]);
        assert_eq!(PanelTab::default(), PanelTab::Shape);
    }
}
