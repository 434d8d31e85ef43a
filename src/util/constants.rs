// RoboPanel - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.
// Every configurable value has a default and a hard range here; config.toml
// and CLI overrides are validated against these bounds.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "RoboPanel";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "RoboPanel";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Pump loop
// =============================================================================

/// Default interval between pump ticks (ms). 10 ms gives a 100 Hz step rate.
pub const DEFAULT_PUMP_INTERVAL_MS: u64 = 10;

/// Minimum user-configurable pump interval (ms).
pub const MIN_PUMP_INTERVAL_MS: u64 = 1;

/// Maximum user-configurable pump interval (ms).
pub const MAX_PUMP_INTERVAL_MS: u64 = 1_000;

/// Upper bound on how long the ticker thread sleeps before re-checking its
/// cancel flag (ms). Long pump intervals are sliced so `stop` takes effect
/// within this many milliseconds.
pub const TICKER_CANCEL_CHECK_INTERVAL_MS: u64 = 50;

/// Most pump steps run for one service of the pump driver.
///
/// Normally one or two intervals elapse between frames and each gets its own
/// step. Intervals beyond this cap mean the UI thread was blocked; they are
/// dropped instead of replayed as a burst.
pub const MAX_CATCH_UP_STEPS: usize = 8;

/// Capacity of the tick channel between the ticker thread and the UI thread.
/// Ticks fired while the channel is full are dropped.
pub const TICK_QUEUE_DEPTH: usize = MAX_CATCH_UP_STEPS;

// =============================================================================
// Panel
// =============================================================================

/// Combo-box label for the transform-tree state source.
pub const STATE_SOURCE_TF_LABEL: &str = "tf2";

/// Combo-box label for the topic state source.
pub const STATE_SOURCE_TOPIC_LABEL: &str = "topic";

/// Combo-box label for the file description source.
pub const DESCRIPTION_SOURCE_FILE_LABEL: &str = "file";

/// Combo-box label for the parameter description source.
pub const DESCRIPTION_SOURCE_PARAMETER_LABEL: &str = "parameter";

/// Default file extensions offered by the model-file chooser.
pub const DEFAULT_MODEL_FILE_EXTENSIONS: &[&str] = &["urdf", "xacro"];

/// Maximum number of activity log lines retained by the panel. Oldest
/// entries are discarded first.
pub const MAX_ACTIVITY_ENTRIES: usize = 200;

/// Maximum number of config warnings surfaced in the activity log at startup.
pub const MAX_STARTUP_WARNINGS: usize = 20;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted by `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Session persistence file name (stored in the platform data directory).
pub const SESSION_FILE_NAME: &str = "session.json";
