// RoboPanel - app/mod.rs
//
// Application layer: panel state and actions, pump driving, session
// persistence, and the in-process backend.
// Dependencies: core, util.
// Must NOT depend on: ui, platform specifics.

pub mod local_backend;
pub mod panel;
pub mod pump_driver;
pub mod session;
pub mod ticker;
