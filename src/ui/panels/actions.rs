// RoboPanel - ui/panels/actions.rs
//
// One-shot backend instructions: collision detection mode, transform
// broadcast, and scene clear.

use crate::app::panel::ControlPanel;

/// Render the actions group.
pub fn render(ui: &mut egui::Ui, panel: &mut ControlPanel) {
    ui.strong("Actions");

    // The checkbox only mirrors the panel's state; the click is forwarded
    // and the panel flips its flag once the backend accepted it.
    let mut checked = panel.collision_checked();
    if ui
        .checkbox(&mut checked, "Collision detection")
        .on_hover_text(
            "Each click asks the backend for collision-detection mode. \
             The backend keeps the mode once set.",
        )
        .clicked()
    {
        panel.toggle_collision_detection();
    }

    ui.horizontal(|ui| {
        if ui.button("Broadcast transform").clicked() {
            panel.broadcast_transform();
        }
        if ui.button("Clear scene").clicked() {
            panel.clear_scene();
        }
    });
}
