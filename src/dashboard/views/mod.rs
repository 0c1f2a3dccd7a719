//! Control panel views

pub mod color;
pub mod presets;
pub mod shape;

pub use color::render_color_view;
pub use presets::render_presets_view;
pub use shape::render_shape_view;
