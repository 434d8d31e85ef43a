// RoboPanel - ui/panels/about.rs
//
// About dialog: shown from Help > About in the menu bar.
// Rendered as a centred, non-resizable, non-collapsible window.

use crate::util::constants::{APP_NAME, APP_VERSION};
use std::time::Duration;

/// Render the About dialog (if `*open` is true).
pub fn render(ctx: &egui::Context, open: &mut bool, pump_interval: Duration) {
    if !*open {
        return;
    }

    egui::Window::new(format!("About {APP_NAME}"))
        .open(open)
        .collapsible(false)
        .resizable(false)
        .min_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(APP_NAME).size(26.0).strong());
                ui.add_space(4.0);
                ui.label(egui::RichText::new(format!("v{APP_VERSION}")).weak());
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(6.0);

            ui.vertical_centered(|ui| {
                ui.label("Control panel for a robot visualisation backend.");
                ui.label(format!(
                    "Pump rate: {} ms ({:.0} Hz)",
                    pump_interval.as_millis(),
                    1.0 / pump_interval.as_secs_f64().max(f64::EPSILON)
                ));
            });

            ui.add_space(8.0);
            ui.separator();
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("MIT License \u{00b7} Built with Rust & egui").small().weak());
            });
            ui.add_space(6.0);
        });
}
