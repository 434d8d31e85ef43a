// RoboPanel - lib.rs
//
// Library entry point, exposing all non-GUI-shell modules for integration
// testing and for hosts that embed the panel with their own backend.
//
// The eframe::App implementation (`gui`) lives in `main.rs` and is not part
// of the library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
