// RoboPanel - ui/panels/activity.rs
//
// Timestamped activity log (bottom pane). Newest entries at the bottom;
// the view sticks to the bottom while new entries arrive.

use crate::app::panel::ControlPanel;
use crate::ui::theme;

/// Render the activity log.
pub fn render(ui: &mut egui::Ui, panel: &mut ControlPanel) {
    ui.horizontal(|ui| {
        ui.strong("Activity");
        if ui.small_button("Clear").clicked() {
            panel.clear_activity();
        }
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("activity_log")
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for entry in panel.activity() {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(entry.at.format("%H:%M:%S%.3f").to_string())
                            .monospace()
                            .weak(),
                    );
                    ui.label(
                        egui::RichText::new(&entry.message)
                            .color(theme::activity_colour(entry.level)),
                    );
                });
            }
        });
}
