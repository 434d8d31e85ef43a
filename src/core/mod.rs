// RoboPanel - core/mod.rs
//
// Core layer: data model, backend contract, input join, pump state machine.
// Pure logic with no I/O and no UI.
// Must NOT depend on: app, ui, platform.

pub mod backend;
pub mod join;
pub mod model;
pub mod pump;
