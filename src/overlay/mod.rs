//! Overlay Presentation Layer
//!
//! Draws the crosshair in a small transparent, borderless, always-on-top
//! viewport centered on the monitor. The viewport ignores the mouse so the
//! game underneath keeps receiving every click.

pub mod widgets;

use crossbeam_channel::{unbounded, Receiver};
use egui::{Pos2, Vec2, ViewportBuilder, ViewportId};
use tracing::{debug, info};

use crate::overlay::widgets::CrosshairScene;
use crate::platform::{OverlayStyleGuard, OverlayStyler};
use crate::state::geometry::CANVAS_SIZE;
use crate::state::{AppearanceState, ChangeSet};

/// Native title of the overlay window, used to find it for styling
pub const OVERLAY_TITLE: &str = "Crosshair Overlay";

pub fn overlay_viewport_id() -> ViewportId {
    ViewportId::from_hash_of("crosshair_overlay")
}

/// Top-left corner that centers a square canvas of `size` on a monitor
pub fn centered_position(monitor_size: Vec2, size: f32) -> Pos2 {
    Pos2::new(
        ((monitor_size.x - size) / 2.0).round(),
        ((monitor_size.y - size) / 2.0).round(),
    )
}

/// Viewport for the overlay window
pub fn viewport_builder(position: Option<Pos2>) -> ViewportBuilder {
    let side = CANVAS_SIZE as f32;
    let builder = ViewportBuilder::default()
        .with_title(OVERLAY_TITLE)
        .with_inner_size([side, side])
        .with_resizable(false)
        .with_decorations(false)
        .with_transparent(true)
        .with_always_on_top()
        .with_mouse_passthrough(true)
        .with_taskbar(false)
        .with_active(false);

    match position {
        Some(pos) => builder.with_position(pos),
        None => builder,
    }
}

/// The crosshair window
pub struct CrosshairOverlay {
    changes: Receiver<ChangeSet>,
    style: OverlayStyleGuard,
    scene: CrosshairScene,
    position: Option<Pos2>,
}

impl CrosshairOverlay {
    /// Subscribe to `state` and prepare the first frame
    pub fn new(ctx: &egui::Context, state: &mut AppearanceState, styler: Box<dyn OverlayStyler>) -> Self {
        let (tx, rx) = unbounded();
        let repaint_ctx = ctx.clone();

        state.subscribe(move |changes, _| {
            if !changes.touches_visuals() {
                return;
            }
            if tx.send(changes.clone()).is_ok() {
                repaint_ctx.request_repaint_of(overlay_viewport_id());
            }
        });

        Self {
            changes: rx,
            style: OverlayStyleGuard::new(styler, OVERLAY_TITLE),
            scene: CrosshairScene::from_state(state),
            position: None,
        }
    }

    /// Show the overlay viewport for this frame
    pub fn show(&mut self, ctx: &egui::Context, state: &AppearanceState) {
        let pending = self.changes.try_iter().fold(ChangeSet::new(), |mut merged, changes| {
            merged.merge(&changes);
            merged
        });
        if !pending.is_empty() {
            debug!(fields = pending.len(), "Redrawing crosshair");
            self.scene = CrosshairScene::from_state(state);
        }

        if self.position.is_none() {
            if let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) {
                let pos = centered_position(monitor, CANVAS_SIZE as f32);
                info!("Centering overlay at ({}, {})", pos.x, pos.y);
                self.position = Some(pos);
            }
        }

        let builder = viewport_builder(self.position);
        ctx.show_viewport_immediate(overlay_viewport_id(), builder, |ctx, _class| {
            egui::CentralPanel::default()
                .frame(egui::Frame::none())
                .show(ctx, |ui| {
                    let origin = ui.max_rect().min;
                    ui.painter().extend(self.scene.shapes(origin));
                });
            self.style.ensure_applied();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_position() {
        let pos = centered_position(Vec2::new(1920.0, 1080.0), 200.0);
        assert_eq!(pos, Pos2::new(860.0, 440.0));
    }

    #[test]
    fn test_centered_position_odd_monitor() {
        let pos = centered_position(Vec2::new(1365.0, 767.0), 200.0);
        assert_eq!(pos, Pos2::new(583.0, 284.0));
    }

    #[test]
    fn test_viewport_builder_flags() {
        let builder = viewport_builder(Some(Pos2::new(1.0, 2.0)));
        assert_eq!(builder.title.as_deref(), Some(OVERLAY_TITLE));
        assert_eq!(builder.transparent, Some(true));
        assert_eq!(builder.decorations, Some(false));
        assert_eq!(builder.mouse_passthrough, Some(true));
        assert_eq!(builder.taskbar, Some(false));
        assert_eq!(builder.position, Some(Pos2::new(1.0, 2.0)));
    }

    struct Discard;

    impl crate::state::PresetStore for Discard {
        fn save_presets(&self, _presets: &[crate::settings::Preset]) {}
    }

    #[test]
    fn test_overlay_redraws_only_on_visual_change() {
        let ctx = egui::Context::default();
        let mut state = AppearanceState::default();
        let overlay = CrosshairOverlay::new(&ctx, &mut state, Box::new(crate::platform::NoopStyler));

        state.save_preset("Quiet", &Discard);
        assert!(overlay.changes.try_recv().is_err());

        state.set_size(40.0);
        let changes = overlay.changes.try_recv().unwrap();
        assert!(changes.contains(crate::state::Field::TopLine));
    }
}
