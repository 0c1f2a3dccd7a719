//! Control Panel UI Module
//!
//! The settings window: shape, color and preset tabs that edit the live
//! appearance state the overlay draws from.

pub mod app;
pub mod components;
pub mod state;
pub mod theme;
pub mod views;

pub use app::run_control_panel;
