// RoboPanel - ui/panels/description.rs
//
// Robot description group. Exactly one of two sub-panels is shown:
//   - file:      "Select model file" + "Load model" buttons
//   - parameter: node and parameter line edits (Enter in either submits both)
//
// The file chooser only records the choice; "Load model" forwards it.

use crate::app::panel::ControlPanel;
use crate::core::model::DescriptionSource;

/// Render the robot description group.
pub fn render(ui: &mut egui::Ui, panel: &mut ControlPanel) {
    ui.strong("Robot description");

    let current = panel.description_source();
    let mut selected = current;
    ui.horizontal(|ui| {
        ui.label("Source:");
        egui::ComboBox::from_id_salt("description_source_combo")
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for source in DescriptionSource::all() {
                    ui.selectable_value(&mut selected, *source, source.label());
                }
            });
    });
    if selected != current {
        panel.select_description_source(selected);
    }

    let visibility = panel.visibility();
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(
            egui::RichText::new(panel.description_source().group_title())
                .small()
                .weak(),
        );
        if visibility.file_controls {
            render_file_controls(ui, panel);
        }
        if visibility.parameter_controls {
            render_parameter_controls(ui, panel);
        }
    });
}

fn render_file_controls(ui: &mut egui::Ui, panel: &mut ControlPanel) {
    ui.horizontal(|ui| {
        if ui.button("Select model file").clicked() {
            panel.request_file_selection(|extensions| {
                rfd::FileDialog::new()
                    .add_filter("Robot description", extensions)
                    .add_filter("All files", &["*"])
                    .pick_file()
            });
        }
        if ui.button("Load model").clicked() {
            panel.confirm_load_model();
        }
    });

    match panel.selected_file() {
        Some(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            ui.label(egui::RichText::new(name).monospace())
                .on_hover_text(path.display().to_string());
        }
        None => {
            ui.label(egui::RichText::new("No file selected").small().weak());
        }
    }
}

fn render_parameter_controls(ui: &mut egui::Ui, panel: &mut ControlPanel) {
    let mut entered = false;

    egui::Grid::new("node_parameter_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Node:");
            let node = ui.add(
                egui::TextEdit::singleline(&mut panel.node_parameter.node)
                    .hint_text("robot_state_publisher"),
            );
            entered |= node.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.end_row();

            ui.label("Parameter:");
            let parameter = ui.add(
                egui::TextEdit::singleline(&mut panel.node_parameter.parameter)
                    .hint_text("robot_description"),
            );
            entered |= parameter.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.end_row();
        });

    if entered {
        panel.submit_pending_node_and_parameter();
    }
    if panel.node_parameter.is_waiting() {
        ui.label(
            egui::RichText::new("Enter both a node and a parameter, then press Enter.")
                .small()
                .weak(),
        );
    }
}
