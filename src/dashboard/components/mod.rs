//! Reusable UI components for the control panel

pub mod color_picker;
pub mod scroll_slider;
pub mod sidebar;

pub use color_picker::{color_picker, to_color32, PickerEdit};
pub use scroll_slider::{labeled_slider, scroll_slider};
pub use sidebar::render_sidebar;
