// RoboPanel - app/session.rs
//
// Session persistence: save and restore the panel's mode selectors and
// pending inputs between application restarts.
//
// Design principles:
// - Session is saved atomically (write→temp, rename→final) so a crash
//   during save never corrupts the previous good session.
// - Load errors are silently discarded (corrupt or incompatible sessions
//   just start the panel fresh rather than surfacing errors to the user).
// - Restored values only pre-fill the panel. Nothing is sent to the backend
//   until the user submits it again.

use crate::core::join::NodeParameterJoin;
use crate::core::model::{DescriptionSource, StateSource};
use crate::util::constants::SESSION_FILE_NAME;
use crate::util::error::SessionError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version stamp for forward-compatibility checks.
///
/// Increment whenever `SessionData` changes in a breaking way. Version
/// mismatches silently discard the session.
pub const SESSION_VERSION: u32 = 1;

/// Persistent panel snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// Schema version. Must equal `SESSION_VERSION` to be accepted.
    pub version: u32,

    #[serde(default)]
    pub state_source: StateSource,

    #[serde(default)]
    pub description_source: DescriptionSource,

    /// Topic line edit contents.
    #[serde(default)]
    pub topic: String,

    /// Node line edit contents.
    #[serde(default)]
    pub node: String,

    /// Parameter line edit contents.
    #[serde(default)]
    pub parameter: String,

    /// Model file chosen but not necessarily loaded.
    #[serde(default)]
    pub model_file: Option<PathBuf>,
}

impl SessionData {
    pub fn new(
        state_source: StateSource,
        description_source: DescriptionSource,
        topic: String,
        node_parameter: NodeParameterJoin,
        model_file: Option<PathBuf>,
    ) -> Self {
        Self {
            version: SESSION_VERSION,
            state_source,
            description_source,
            topic,
            node: node_parameter.node,
            parameter: node_parameter.parameter,
            model_file,
        }
    }
}

// =============================================================================
// I/O helpers
// =============================================================================

/// Resolve the session file path from the platform data directory.
pub fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE_NAME)
}

/// Save `data` to `path` atomically (write temp → rename).
///
/// Creates all parent directories as needed. The caller typically logs the
/// error and carries on.
pub fn save(data: &SessionData, path: &Path) -> Result<(), SessionError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| SessionError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json =
        serde_json::to_string_pretty(data).map_err(|source| SessionError::Serialise { source })?;

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes()).map_err(|source| SessionError::Write {
        path: tmp.clone(),
        source,
    })?;

    std::fs::rename(&tmp, path).map_err(|source| {
        // Clean up the temp file on failure; ignore any secondary error.
        let _ = std::fs::remove_file(&tmp);
        SessionError::Finalise {
            path: path.to_path_buf(),
            source,
        }
    })?;

    tracing::debug!(path = %path.display(), "Session saved");
    Ok(())
}

/// Load and validate a `SessionData` from `path`.
///
/// Returns `None` on any error (file not found, JSON parse failure,
/// version mismatch). The caller should treat `None` as "start fresh".
pub fn load(path: &Path) -> Option<SessionData> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            // "Not found" is the normal first run.
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read session file");
            }
        })
        .ok()?;

    let data: SessionData = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Session file is malformed; starting fresh"
            );
        })
        .ok()?;

    if data.version != SESSION_VERSION {
        tracing::warn!(
            found = data.version,
            expected = SESSION_VERSION,
            "Session file version mismatch; starting fresh"
        );
        return None;
    }

    tracing::info!(path = %path.display(), "Session file loaded");
    Some(data)
}
