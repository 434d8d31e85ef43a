// RoboPanel - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels, services the pump on every frame the ticker
// wakes, and delivers the application-closing notification.

use crate::app::local_backend::LocalBackend;
use crate::app::panel::ControlPanel;
use crate::app::session;
use crate::ui;
use crate::util::error;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// The RoboPanel application.
pub struct RoboPanelApp {
    pub panel: ControlPanel,
    /// Owning handle of the in-process backend. `None` when started with
    /// `--no-backend`; the panel then only holds a detached reference.
    local_backend: Option<Rc<RefCell<LocalBackend>>>,
    /// Where to save the session on exit. `None` disables persistence.
    session_path: Option<PathBuf>,
    show_about: bool,
    closing_handled: bool,
}

impl RoboPanelApp {
    pub fn new(
        panel: ControlPanel,
        local_backend: Option<Rc<RefCell<LocalBackend>>>,
        session_path: Option<PathBuf>,
    ) -> Self {
        Self {
            panel,
            local_backend,
            session_path,
            show_about: false,
            closing_handled: false,
        }
    }

    /// Stop the pump and save the session, once.
    fn handle_closing(&mut self) {
        if self.closing_handled {
            return;
        }
        self.closing_handled = true;
        self.panel.on_application_closing();

        if let Err(e) = self.persist_session() {
            tracing::warn!(error = %e, "Failed to save session");
        }
    }

    fn persist_session(&self) -> error::Result<()> {
        if let Some(ref path) = self.session_path {
            session::save(&self.panel.session_snapshot(), path)?;
        }
        Ok(())
    }
}

impl eframe::App for RoboPanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.handle_closing();
        }

        // One backend step per interval elapsed since the previous frame.
        // The pump's ticker requests the next frame itself.
        self.panel.service_pump();

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        ui.close_menu();
                    }
                });
                ui.menu_button("Pump", |ui| {
                    let running = self.panel.pump().is_running();
                    if ui.add_enabled(!running, egui::Button::new("Start")).clicked() {
                        self.panel.start_pump();
                        ui.close_menu();
                    }
                    if ui.add_enabled(running, egui::Button::new("Stop")).clicked() {
                        self.panel.stop_pump();
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let state = self.panel.pump().state();
                ui.label(
                    egui::RichText::new(format!(" \u{25cf} {} ", state.label()))
                        .strong()
                        .color(ui::theme::pump_colour(state)),
                );
                ui.separator();
                ui.label(&self.panel.status_message);
            });
        });

        // Activity log (bottom)
        egui::TopBottomPanel::bottom("activity_pane")
            .resizable(true)
            .default_height(ui::theme::ACTIVITY_PANE_HEIGHT)
            .show(ctx, |ui| {
                ui::panels::activity::render(ui, &mut self.panel);
            });

        // Left sidebar: one group per control cluster.
        egui::SidePanel::left("controls")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("controls_scroll")
                    .show(ui, |ui| {
                        ui::panels::state_source::render(ui, &mut self.panel);
                        ui.add_space(ui::theme::GROUP_SPACING);
                        ui.separator();
                        ui::panels::description::render(ui, &mut self.panel);
                        ui.add_space(ui::theme::GROUP_SPACING);
                        ui.separator();
                        ui::panels::actions::render(ui, &mut self.panel);
                        ui.add_space(ui::theme::GROUP_SPACING);
                        ui.separator();
                        ui::panels::pump::render(ui, &mut self.panel);
                    });
            });

        // Central panel (backend status)
        let snapshot = self
            .local_backend
            .as_ref()
            .and_then(|b| b.try_borrow().ok().map(|b| b.snapshot().clone()));
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::backend_status::render(ui, snapshot.as_ref());
        });

        ui::panels::about::render(ctx, &mut self.show_about, self.panel.pump().interval());
    }

    /// Called by eframe when the application window is about to close.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.handle_closing();
    }
}
