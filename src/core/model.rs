// RoboPanel - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants::{
    DESCRIPTION_SOURCE_FILE_LABEL, DESCRIPTION_SOURCE_PARAMETER_LABEL, STATE_SOURCE_TF_LABEL,
    STATE_SOURCE_TOPIC_LABEL,
};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// =============================================================================
// Mode selectors
// =============================================================================

/// Where the backend takes the robot's joint state from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StateSource {
    /// State is read from the transform tree.
    #[default]
    TransformTree,
    /// State is read from a named topic entered by the user.
    Topic,
}

impl StateSource {
    /// Returns all variants in combo-box order.
    pub fn all() -> &'static [StateSource] {
        &[StateSource::TransformTree, StateSource::Topic]
    }

    /// Label shown in the selector combo box.
    pub fn label(&self) -> &'static str {
        match self {
            StateSource::TransformTree => STATE_SOURCE_TF_LABEL,
            StateSource::Topic => STATE_SOURCE_TOPIC_LABEL,
        }
    }

    /// Parse a selector label. Case-insensitive; unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::all()
            .iter()
            .copied()
            .find(|s| s.label().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for StateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the backend takes the robot's model description from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DescriptionSource {
    /// Model is loaded from a file chosen by the user.
    File,
    /// Model is read from a parameter on a named node.
    #[default]
    Parameter,
}

impl DescriptionSource {
    /// Returns all variants in combo-box order.
    pub fn all() -> &'static [DescriptionSource] {
        &[DescriptionSource::File, DescriptionSource::Parameter]
    }

    /// Label shown in the selector combo box.
    pub fn label(&self) -> &'static str {
        match self {
            DescriptionSource::File => DESCRIPTION_SOURCE_FILE_LABEL,
            DescriptionSource::Parameter => DESCRIPTION_SOURCE_PARAMETER_LABEL,
        }
    }

    /// Parse a selector label. Case-insensitive; unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::all()
            .iter()
            .copied()
            .find(|s| s.label().eq_ignore_ascii_case(label))
    }

    /// Title of the description group box while this source is active.
    pub fn group_title(&self) -> &'static str {
        match self {
            DescriptionSource::File => "File selected",
            DescriptionSource::Parameter => "Param selected",
        }
    }
}

impl std::fmt::Display for DescriptionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Sub-panel visibility
// =============================================================================

/// Which input sub-panels are visible.
///
/// Always derived from the two mode selectors, never stored, so the two
/// description sub-panels can never be visible at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelVisibility {
    /// Topic-name line edit (state group).
    pub topic_input: bool,
    /// "Select model file" and "Load model" buttons (description group).
    pub file_controls: bool,
    /// Node and parameter line edits (description group).
    pub parameter_controls: bool,
}

impl PanelVisibility {
    /// Derive visibility from the active modes.
    pub fn for_modes(state: StateSource, description: DescriptionSource) -> Self {
        Self {
            topic_input: state == StateSource::Topic,
            file_controls: description == DescriptionSource::File,
            parameter_controls: description == DescriptionSource::Parameter,
        }
    }
}

// =============================================================================
// Dispatch outcomes
// =============================================================================

/// Why a panel action or pump tick did not reach the backend.
///
/// Every variant is recoverable: the next user action or tick simply tries
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No backend is attached, or it has been dropped.
    BackendUnavailable,
    /// The backend is attached but reports that it failed to initialise.
    BackendNotReady,
    /// The backend is already in use further up the call stack.
    BackendBusy,
    /// A required text field was empty.
    EmptyInput,
    /// "Load model" was pressed before a file was chosen.
    NoFileSelected,
}

impl SkipReason {
    /// True for reasons caused by the backend reference rather than user input.
    pub fn is_backend_fault(&self) -> bool {
        matches!(
            self,
            SkipReason::BackendUnavailable | SkipReason::BackendNotReady | SkipReason::BackendBusy
        )
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SkipReason::BackendUnavailable => "backend unavailable",
            SkipReason::BackendNotReady => "backend not initialised",
            SkipReason::BackendBusy => "backend busy",
            SkipReason::EmptyInput => "input is empty",
            SkipReason::NoFileSelected => "no file selected",
        };
        f.write_str(text)
    }
}

/// Result of a single panel action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Exactly one backend call was made.
    Forwarded,
    /// UI state changed (or input was recorded) but nothing was forwarded yet.
    Pending,
    /// Nothing happened; see the reason.
    Skipped(SkipReason),
}

impl Dispatch {
    /// True when the action reached the backend.
    pub fn forwarded(&self) -> bool {
        matches!(self, Dispatch::Forwarded)
    }
}

// =============================================================================
// Pump
// =============================================================================

/// Run state of the pump loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpState {
    Running,
    Stopped,
}

impl PumpState {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            PumpState::Running => "Running",
            PumpState::Stopped => "Stopped",
        }
    }
}

/// What a single pump tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The backend step was invoked once.
    Stepped,
    /// The pump is stopped; the tick was ignored.
    Idle,
    /// The backend could not be used this tick.
    Skipped(SkipReason),
}

/// Message sent from the ticker thread to the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerMessage {
    /// One interval has elapsed. `seq` counts ticks fired by this ticker,
    /// including ticks dropped because the previous one was still pending.
    Tick { seq: u64 },
}

// =============================================================================
// Backend snapshot
// =============================================================================

/// Where the backend's current model came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    File(PathBuf),
    NodeParameter { node: String, parameter: String },
}

impl std::fmt::Display for ModelSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelSource::File(path) => write!(f, "file {}", path.display()),
            ModelSource::NodeParameter { node, parameter } => {
                write!(f, "parameter {parameter} on node {node}")
            }
        }
    }
}

/// Read-only view of what the in-process backend has been told so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendSnapshot {
    /// Active state source, `None` until one has been forwarded.
    pub state_source: Option<StateSource>,
    /// Topic name when `state_source` is `Topic`.
    pub state_topic: Option<String>,
    /// Current model source.
    pub model: Option<ModelSource>,
    /// Whether collision detection mode has been requested. The mode
    /// latches: the instruction carries no on/off value.
    pub collision_detection: bool,
    /// Number of collision detection mode requests received.
    pub collision_requests: u64,
    /// Number of transform broadcasts requested.
    pub broadcasts: u64,
    /// Number of pump steps processed.
    pub steps: u64,
    /// Number of scene clears requested.
    pub scene_clears: u64,
    /// Most recent backend-internal failure, if any.
    pub last_error: Option<String>,
}

// =============================================================================
// Activity log
// =============================================================================

/// Severity of an activity log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Info,
    Warning,
}

/// One line in the panel's activity log.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    /// Local wall-clock time the entry was recorded.
    pub at: DateTime<Local>,
    pub level: ActivityLevel,
    pub message: String,
}
