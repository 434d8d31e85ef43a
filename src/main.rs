// RoboPanel - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Backend creation and panel setup (pump starts here)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use robopanel::app;
pub use robopanel::core;
pub use robopanel::platform;
pub use robopanel::ui;
pub use robopanel::util;

use crate::app::local_backend::LocalBackend;
use crate::app::panel::{ControlPanel, PanelSettings};
use crate::app::pump_driver::PumpDriver;
use crate::core::backend::{BackendRef, SharedBackend};
use clap::Parser;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

/// RoboPanel - control panel for a robot visualisation backend.
///
/// Selects where robot state and the robot description come from, forwards
/// one-shot instructions, and pumps the backend at a fixed rate.
#[derive(Parser, Debug)]
#[command(name = "RoboPanel", version, about)]
struct Cli {
    /// Directory holding config.toml and session.json (overrides the
    /// platform default).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Pump interval in milliseconds (overrides [pump] interval_ms).
    #[arg(short = 'i', long = "interval-ms")]
    interval_ms: Option<u64>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Start without an in-process backend. Every action is skipped with a
    /// warning; useful for checking the panel's soft-fail behaviour.
    #[arg(long = "no-backend")]
    no_backend: bool,

    /// Do not restore or save panel inputs between runs.
    #[arg(long = "no-session")]
    no_session: bool,
}

fn main() {
    let cli = Cli::parse();

    let paths = match cli.config_dir {
        Some(ref dir) => platform::config::PlatformPaths::single(dir),
        None => platform::config::PlatformPaths::resolve(),
    };

    // Config is read before logging so [logging] level can take effect.
    // Its warnings are replayed once the subscriber is installed.
    let (mut config, mut config_warnings) = platform::config::load_config(&paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %paths.config_dir.display(),
        "RoboPanel starting"
    );

    if let Some(ms) = cli.interval_ms {
        match platform::config::validate_pump_interval("--interval-ms", ms) {
            Ok(ms) => config.pump_interval_ms = ms,
            Err(err) => config_warnings.push(format!(
                "{err}. Using {} ms.",
                config.pump_interval_ms
            )),
        }
    }
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    // Backend: the app owns it, the panel only holds a weak reference.
    let local_backend = if cli.no_backend {
        tracing::warn!("Starting without a backend; panel actions will be skipped");
        None
    } else {
        Some(Rc::new(RefCell::new(LocalBackend::new())))
    };
    let backend_ref = match local_backend {
        Some(ref local) => {
            let shared: SharedBackend = local.clone();
            BackendRef::attach(&shared)
        }
        None => BackendRef::detached(),
    };

    let mut pump = PumpDriver::new(config.pump_interval());
    if !config.pump_autostart {
        pump.stop();
    }

    let settings = PanelSettings {
        state_source: config.state_source,
        description_source: config.description_source,
        model_file_extensions: config.model_file_extensions.clone(),
    };
    let mut panel = ControlPanel::new(backend_ref, pump, settings);

    let session_path = if cli.no_session {
        None
    } else {
        Some(app::session::session_path(&paths.data_dir))
    };
    if let Some(session) = session_path.as_deref().and_then(app::session::load) {
        panel.restore_session(session);
    }

    for warning in config_warnings
        .into_iter()
        .take(util::constants::MAX_STARTUP_WARNINGS)
    {
        panel.record_warning(warning);
    }

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            let mut panel = panel;
            let ctx = cc.egui_ctx.clone();
            panel.set_pump_waker(Arc::new(move || ctx.request_repaint()));

            if dark_mode {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
            } else {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
            }
            cc.egui_ctx.style_mut(|style| {
                for font_id in style.text_styles.values_mut() {
                    font_id.size *= font_size / util::constants::DEFAULT_FONT_SIZE;
                }
            });
            Ok(Box::new(gui::RoboPanelApp::new(
                panel,
                local_backend,
                session_path,
            )))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch RoboPanel GUI: {e}");
        std::process::exit(1);
    }
}
