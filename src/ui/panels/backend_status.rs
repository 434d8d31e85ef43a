// RoboPanel - ui/panels/backend_status.rs
//
// Central view of what the in-process backend has been told.
// Shows a placeholder when the panel runs without a local backend.

use crate::core::model::{BackendSnapshot, StateSource};
use crate::ui::theme;

/// Render the backend status view.
pub fn render(ui: &mut egui::Ui, snapshot: Option<&BackendSnapshot>) {
    ui.heading("Backend");
    ui.separator();

    let Some(snapshot) = snapshot else {
        ui.centered_and_justified(|ui| {
            ui.label("No backend attached. Panel actions are skipped.");
        });
        return;
    };

    egui::Grid::new("backend_status_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label("State source:");
            let state = match (snapshot.state_source, &snapshot.state_topic) {
                (None, _) => "not set".to_string(),
                (Some(StateSource::TransformTree), _) => "transform tree".to_string(),
                (Some(StateSource::Topic), Some(topic)) => format!("topic {topic}"),
                (Some(StateSource::Topic), None) => "topic".to_string(),
            };
            ui.label(state);
            ui.end_row();

            ui.label("Model:");
            match &snapshot.model {
                Some(model) => ui.label(model.to_string()),
                None => ui.label("none loaded"),
            };
            ui.end_row();

            ui.label("Collision detection mode:");
            ui.label(collision_summary(snapshot));
            ui.end_row();

            ui.label("Broadcasts:");
            ui.label(snapshot.broadcasts.to_string());
            ui.end_row();

            ui.label("Steps:");
            ui.label(snapshot.steps.to_string());
            ui.end_row();

            ui.label("Scene clears:");
            ui.label(snapshot.scene_clears.to_string());
            ui.end_row();
        });

    if let Some(ref error) = snapshot.last_error {
        ui.add_space(8.0);
        ui.label(egui::RichText::new(format!("Last error: {error}")).color(theme::ERROR_TEXT));
    }
}

/// The backend latches collision detection mode; the panel checkbox only
/// records the last click. Show the latched mode and how often it was asked
/// for so the two are not read as the same switch.
fn collision_summary(snapshot: &BackendSnapshot) -> String {
    match (snapshot.collision_detection, snapshot.collision_requests) {
        (false, _) => "not requested".to_string(),
        (true, 1) => "latched (requested once)".to_string(),
        (true, n) => format!("latched (requested {n} times)"),
    }
}
