//! Control panel application entry point
//!
//! One eframe event loop drives both windows: the control panel is the root
//! viewport and the crosshair overlay is an immediate child viewport. All
//! state lives on this thread.

use eframe::egui;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::dashboard::components::render_sidebar;
use crate::dashboard::state::{PanelTab, PanelViewState};
use crate::dashboard::theme;
use crate::dashboard::views::{render_color_view, render_presets_view, render_shape_view};
use crate::hotkey::HotkeyManager;
use crate::overlay::CrosshairOverlay;
use crate::platform::native_styler;
use crate::state::AppearanceState;
use crate::storage::SettingsStore;

const PANEL_TITLE: &str = "Crosshair Settings";

/// How often to wake up and check the global hotkey when idle
const HOTKEY_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The control panel application
pub struct ControlPanelApp {
    state: AppearanceState,
    store: SettingsStore,
    overlay: CrosshairOverlay,
    hotkeys: Option<HotkeyManager>,
    view_state: PanelViewState,
    theme_applied: bool,
}

impl ControlPanelApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        mut state: AppearanceState,
        store: SettingsStore,
        config: &AppConfig,
    ) -> Self {
        let overlay = CrosshairOverlay::new(&cc.egui_ctx, &mut state, native_styler());
        let hotkey = config.overlay.toggle_hotkey();
        if hotkey.is_none() {
            info!("Toggle hotkey disabled in configuration");
        }
        let hotkeys = hotkey.and_then(register_hotkey);

        let view_state = PanelViewState {
            toggle_hotkey: hotkeys.as_ref().and(hotkey.map(str::to_string)),
            ..Default::default()
        };

        Self {
            state,
            store,
            overlay,
            hotkeys,
            view_state,
            theme_applied: false,
        }
    }

    /// Create eframe options for the control panel window
    pub fn options(config: &AppConfig) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([config.panel.width, config.panel.height])
                .with_min_inner_size([420.0, 400.0])
                .with_title(PANEL_TITLE),
            ..Default::default()
        }
    }

    fn poll_hotkey(&mut self, ctx: &egui::Context) {
        let Some(hotkeys) = &self.hotkeys else {
            return;
        };
        if hotkeys.poll_toggle() {
            self.state.toggle_crosshair_enabled();
            info!(
                "Hotkey pressed: crosshair {}",
                if self.state.crosshair_enabled() { "shown" } else { "hidden" }
            );
        }
        ctx.request_repaint_after(HOTKEY_POLL_INTERVAL);
    }
}

fn register_hotkey(hotkey: &str) -> Option<HotkeyManager> {
    let mut manager = match HotkeyManager::new() {
        Ok(manager) => manager,
        Err(e) => {
            warn!("Global hotkeys unavailable: {}", e);
            return None;
        }
    };
    match manager.register_toggle_hotkey(hotkey) {
        Ok(()) => Some(manager),
        Err(e) => {
            warn!("Failed to register hotkey '{}': {}", hotkey, e);
            None
        }
    }
}

impl eframe::App for ControlPanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        self.poll_hotkey(ctx);
        self.overlay.show(ctx, &self.state);

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(120.0)
            .show(ctx, |ui| {
                render_sidebar(ui, &mut self.view_state.current_tab, self.state.crosshair_enabled());
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::none().inner_margin(12.0).show(ui, |ui| {
                match self.view_state.current_tab {
                    PanelTab::Shape => render_shape_view(ui, &mut self.state, &self.view_state),
                    PanelTab::Color => render_color_view(ui, &mut self.state),
                    PanelTab::Presets => render_presets_view(
                        ui,
                        &mut self.state,
                        &mut self.view_state,
                        &self.store,
                    ),
                }
            });
        });
    }

    /// Shared by the overlay viewport, which must stay see-through
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Saving settings on exit");
        self.store.save_settings(self.state.settings());
    }
}

/// Run the control panel and overlay until the panel is closed
pub fn run_control_panel(
    state: AppearanceState,
    store: SettingsStore,
    config: AppConfig,
) -> Result<(), eframe::Error> {
    eframe::run_native(
        PANEL_TITLE,
        ControlPanelApp::options(&config),
        Box::new(move |cc| Ok(Box::new(ControlPanelApp::new(cc, state, store, &config)))),
    )
}
