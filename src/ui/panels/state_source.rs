// RoboPanel - ui/panels/state_source.rs
//
// State source group: selector combo plus the topic line edit sub-panel.
// The topic is only submitted on Enter (or the Apply button), never while
// typing.

use crate::app::panel::ControlPanel;
use crate::core::model::StateSource;

/// Render the state source group.
pub fn render(ui: &mut egui::Ui, panel: &mut ControlPanel) {
    ui.strong("Robot state");

    let current = panel.state_source();
    let mut selected = current;
    ui.horizontal(|ui| {
        ui.label("Source:");
        egui::ComboBox::from_id_salt("state_source_combo")
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for source in StateSource::all() {
                    ui.selectable_value(&mut selected, *source, source.label());
                }
            });
    });
    if selected != current {
        panel.select_state_source(selected);
    }

    if !panel.visibility().topic_input {
        return;
    }

    let title = panel.state_group_title().unwrap_or_default();
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(egui::RichText::new(title).small().weak());
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut panel.topic_input)
                    .hint_text("/joint_states")
                    .desired_width(180.0),
            );
            let entered =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if entered || ui.small_button("Apply").clicked() {
                panel.submit_pending_topic();
            }
        });
    });
}
