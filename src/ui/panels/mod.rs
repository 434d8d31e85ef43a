// RoboPanel - ui/panels/mod.rs

pub mod about;
pub mod actions;
pub mod activity;
pub mod backend_status;
pub mod description;
pub mod pump;
pub mod state_source;
