// RoboPanel - ui/panels/pump.rs
//
// Pump status and controls.

use crate::app::panel::ControlPanel;
use crate::ui::theme;

/// Render the pump group.
pub fn render(ui: &mut egui::Ui, panel: &mut ControlPanel) {
    ui.strong("Pump");

    let state = panel.pump().state();
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!(" \u{25cf} {} ", state.label()))
                .strong()
                .color(theme::pump_colour(state)),
        );
        ui.label(
            egui::RichText::new(format!(
                "every {} ms",
                panel.pump().interval().as_millis()
            ))
            .weak(),
        );
    });

    ui.horizontal(|ui| {
        let running = panel.pump().is_running();
        if ui.add_enabled(!running, egui::Button::new("Start")).clicked() {
            panel.start_pump();
        }
        if ui.add_enabled(running, egui::Button::new("Stop")).clicked() {
            panel.stop_pump();
        }
    });

    ui.label(format!(
        "Steps: {}   Skipped: {}",
        panel.pump().steps(),
        panel.pump().skipped_ticks()
    ));
}
