// RoboPanel - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::{ActivityLevel, PumpState};
use egui::Color32;

/// Text colour for an activity log line.
pub fn activity_colour(level: ActivityLevel) -> Color32 {
    match level {
        ActivityLevel::Info => Color32::from_rgb(209, 213, 219), // Gray 300
        ActivityLevel::Warning => Color32::from_rgb(217, 119, 6), // Amber 600
    }
}

/// Badge colour for the pump state.
pub fn pump_colour(state: PumpState) -> Color32 {
    match state {
        PumpState::Running => Color32::from_rgb(34, 197, 94), // Green 500
        PumpState::Stopped => Color32::from_rgb(107, 114, 128), // Gray 500
    }
}

/// Colour for backend-reported errors in the status view.
pub const ERROR_TEXT: Color32 = Color32::from_rgb(220, 38, 38); // Red 600

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 300.0;
pub const ACTIVITY_PANE_HEIGHT: f32 = 160.0;
pub const GROUP_SPACING: f32 = 8.0;
