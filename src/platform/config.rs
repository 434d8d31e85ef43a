// RoboPanel - platform/config.rs
//
// Platform-specific data directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::{DescriptionSource, StateSource};
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolved platform paths for RoboPanel data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/robopanel/).
    pub config_dir: PathBuf,

    /// Data directory for the session file.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }

    /// Use one directory for both config and data (CLI `--config-dir`).
    pub fn single(dir: &Path) -> Self {
        Self {
            config_dir: dir.to_path_buf(),
            data_dir: dir.to_path_buf(),
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[pump]` section.
    pub pump: PumpSection,
    /// `[panel]` section.
    pub panel: PanelSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[pump]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PumpSection {
    /// Tick interval in milliseconds.
    pub interval_ms: Option<u64>,
    /// Whether the pump runs from startup.
    pub autostart: Option<bool>,
}

/// `[panel]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PanelSection {
    /// Initial state source: "tf2" or "topic".
    pub state_source: Option<String>,
    /// Initial description source: "file" or "parameter".
    pub description_source: Option<String>,
    /// Extensions offered by the model file chooser.
    pub model_file_extensions: Option<Vec<String>>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- Pump --
    pub pump_interval_ms: u64,
    pub pump_autostart: bool,

    // -- Panel --
    pub state_source: StateSource,
    pub description_source: DescriptionSource,
    pub model_file_extensions: Vec<String>,

    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    pub font_size: f32,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pump_interval_ms: constants::DEFAULT_PUMP_INTERVAL_MS,
            pump_autostart: true,
            state_source: StateSource::default(),
            description_source: DescriptionSource::default(),
            model_file_extensions: constants::DEFAULT_MODEL_FILE_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
        }
    }
}

impl AppConfig {
    pub fn pump_interval(&self) -> Duration {
        Duration::from_millis(self.pump_interval_ms)
    }
}

/// Check a pump interval against its allowed range.
///
/// `field` names where the value came from (config key or CLI flag) and is
/// carried into the error.
pub fn validate_pump_interval(field: &str, ms: u64) -> Result<u64, ConfigError> {
    if (constants::MIN_PUMP_INTERVAL_MS..=constants::MAX_PUMP_INTERVAL_MS).contains(&ms) {
        Ok(ms)
    } else {
        Err(ConfigError::ValueOutOfRange {
            field: field.to_string(),
            value: ms.to_string(),
            expected: format!(
                "{}-{} ms",
                constants::MIN_PUMP_INTERVAL_MS,
                constants::MAX_PUMP_INTERVAL_MS
            ),
        })
    }
}

/// Path of config.toml inside `config_dir`.
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(constants::CONFIG_FILE_NAME)
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unparseable, returns defaults with a warning; the panel
/// still starts.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_path(config_dir);
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(source) => {
            let err = ConfigError::Io {
                path: config_path.clone(),
                source,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let (config, parse_warnings) = parse_config(&content);
    if parse_warnings.is_empty() {
        tracing::info!(path = %config_path.display(), "Loaded config.toml");
    }
    warnings.extend(
        parse_warnings
            .into_iter()
            .map(|w| format!("{}: {w}", config_path.display())),
    );
    (config, warnings)
}

/// Validate config.toml contents, accumulating every problem found.
pub fn parse_config(content: &str) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    let raw: RawConfig = match toml::from_str(content) {
        Ok(r) => r,
        Err(source) => {
            warnings.push(format!("{}. Using defaults.", ConfigError::TomlParse { source }));
            return (AppConfig::default(), warnings);
        }
    };

    let mut config = AppConfig::default();

    // -- Pump: interval_ms --
    if let Some(ms) = raw.pump.interval_ms {
        match validate_pump_interval("[pump] interval_ms", ms) {
            Ok(ms) => config.pump_interval_ms = ms,
            Err(err) => warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_PUMP_INTERVAL_MS
            )),
        }
    }

    // -- Pump: autostart --
    if let Some(autostart) = raw.pump.autostart {
        config.pump_autostart = autostart;
    }

    // -- Panel: state_source --
    if let Some(ref label) = raw.panel.state_source {
        match StateSource::from_label(label) {
            Some(source) => config.state_source = source,
            None => warnings.push(format!(
                "[panel] state_source = \"{label}\" is not recognised. Expected \"{}\" or \"{}\". Using default ({}).",
                constants::STATE_SOURCE_TF_LABEL,
                constants::STATE_SOURCE_TOPIC_LABEL,
                StateSource::default(),
            )),
        }
    }

    // -- Panel: description_source --
    if let Some(ref label) = raw.panel.description_source {
        match DescriptionSource::from_label(label) {
            Some(source) => config.description_source = source,
            None => warnings.push(format!(
                "[panel] description_source = \"{label}\" is not recognised. Expected \"{}\" or \"{}\". Using default ({}).",
                constants::DESCRIPTION_SOURCE_FILE_LABEL,
                constants::DESCRIPTION_SOURCE_PARAMETER_LABEL,
                DescriptionSource::default(),
            )),
        }
    }

    // -- Panel: model_file_extensions --
    if let Some(exts) = raw.panel.model_file_extensions {
        let cleaned: Vec<String> = exts
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect();
        if cleaned.is_empty() {
            warnings.push(
                "[panel] model_file_extensions is empty. Using default (urdf, xacro).".to_string(),
            );
        } else {
            config.model_file_extensions = cleaned;
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => warnings.push(format!(
                "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
            )),
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            let err = ConfigError::ValueOutOfRange {
                field: "[ui] font_size".to_string(),
                value: size.to_string(),
                expected: format!("{}-{}", constants::MIN_FONT_SIZE, constants::MAX_FONT_SIZE),
            };
            warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_FONT_SIZE
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_defaults() {
        let (config, warnings) = parse_config("");
        assert!(warnings.is_empty());
        assert_eq!(config.pump_interval_ms, 10);
        assert!(config.pump_autostart);
        assert_eq!(config.state_source, StateSource::TransformTree);
        assert_eq!(config.description_source, DescriptionSource::Parameter);
    }

    #[test]
    fn test_valid_values_are_applied() {
        let (config, warnings) = parse_config(
            r#"
            [pump]
            interval_ms = 20
            autostart = false

            [panel]
            state_source = "topic"
            description_source = "file"
            model_file_extensions = [".urdf", "sdf"]

            [ui]
            theme = "light"
            font_size = 16.0

            [logging]
            level = "DEBUG"
            "#,
        );
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.pump_interval(), Duration::from_millis(20));
        assert!(!config.pump_autostart);
        assert_eq!(config.state_source, StateSource::Topic);
        assert_eq!(config.description_source, DescriptionSource::File);
        assert_eq!(config.model_file_extensions, vec!["urdf", "sdf"]);
        assert!(!config.dark_mode);
        assert_eq!(config.font_size, 16.0);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_warn_and_default() {
        let (config, warnings) = parse_config(
            r#"
            [pump]
            interval_ms = 0

            [panel]
            state_source = "serial"

            [ui]
            font_size = 99.0
            "#,
        );
        assert_eq!(warnings.len(), 3, "{warnings:?}");
        assert_eq!(config.pump_interval_ms, constants::DEFAULT_PUMP_INTERVAL_MS);
        assert_eq!(config.state_source, StateSource::TransformTree);
        assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let (_, warnings) = parse_config("[future]\nfeature = true\n");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_malformed_toml_warns() {
        let (config, warnings) = parse_config("[pump\ninterval_ms = ");
        assert_eq!(warnings.len(), 1);
        assert_eq!(config.pump_interval_ms, constants::DEFAULT_PUMP_INTERVAL_MS);
    }

    #[test]
    fn test_validate_pump_interval_bounds() {
        let field = "[pump] interval_ms";
        assert!(validate_pump_interval(field, constants::MIN_PUMP_INTERVAL_MS).is_ok());
        assert!(validate_pump_interval(field, constants::MAX_PUMP_INTERVAL_MS).is_ok());
        assert!(validate_pump_interval(field, constants::MAX_PUMP_INTERVAL_MS + 1).is_err());
    }

    #[test]
    fn test_out_of_range_interval_is_typed_error() {
        match validate_pump_interval("--interval-ms", 0) {
            Err(ConfigError::ValueOutOfRange { field, value, .. }) => {
                assert_eq!(field, "--interval-ms");
                assert_eq!(value, "0");
            }
            other => panic!("expected ValueOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_interval_warning_names_key_and_range() {
        let (_, warnings) = parse_config("[pump]\ninterval_ms = 5000\n");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("[pump] interval_ms"), "{}", warnings[0]);
        assert!(warnings[0].contains("1-1000 ms"), "{}", warnings[0]);
    }
}
