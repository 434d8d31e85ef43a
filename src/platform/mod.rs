// RoboPanel - platform/mod.rs
//
// Platform abstraction layer: directories and config.toml.
// Dependencies: standard library, directories crate, core model enums.
// Must NOT depend on: app, ui.

pub mod config;
