// RoboPanel - app/panel.rs
//
// Control panel state and actions. Owned by the eframe::App implementation.
//
// Each public action corresponds to one user gesture (combo change, Enter in
// a line edit, button click) and makes at most one backend call. Every
// action re-validates the backend reference before touching panel state:
// when the backend cannot be used the action logs a warning, records it in
// the activity log, and leaves modes and inputs exactly as they were.
//
// Text inputs are PendingInputs. They are plain fields the UI edits freely
// and are only forwarded on an explicit submit.

use crate::app::pump_driver::PumpDriver;
use crate::app::session::SessionData;
use crate::app::ticker::Waker;
use crate::core::backend::{BackendFacade, BackendRef};
use crate::core::join::NodeParameterJoin;
use crate::core::model::{
    ActivityEntry, ActivityLevel, DescriptionSource, Dispatch, PanelVisibility, SkipReason,
    StateSource, TickOutcome,
};
use crate::util::constants::{DEFAULT_MODEL_FILE_EXTENSIONS, MAX_ACTIVITY_ENTRIES};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Initial panel settings, normally taken from config.toml.
#[derive(Debug, Clone)]
pub struct PanelSettings {
    pub state_source: StateSource,
    pub description_source: DescriptionSource,
    /// Extensions offered by the model file chooser.
    pub model_file_extensions: Vec<String>,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            state_source: StateSource::default(),
            description_source: DescriptionSource::default(),
            model_file_extensions: DEFAULT_MODEL_FILE_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// The control panel.
pub struct ControlPanel {
    /// Non-owning reference to the backend, re-validated on every use.
    backend: BackendRef,

    /// Pump loop driving `BackendFacade::step`.
    pump: PumpDriver,

    /// Active state source selector value.
    state_source: StateSource,

    /// Active description source selector value.
    description_source: DescriptionSource,

    /// Topic line edit contents.
    pub topic_input: String,

    /// Node and parameter line edit contents.
    pub node_parameter: NodeParameterJoin,

    /// File chosen with "Select model file", not yet loaded.
    selected_file: Option<PathBuf>,

    /// Collision detection checkbox state.
    collision_checked: bool,

    /// Extensions offered by the model file chooser.
    model_file_extensions: Vec<String>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Timestamped activity log, newest last.
    activity: VecDeque<ActivityEntry>,
}

impl ControlPanel {
    /// Set up the panel. The pump is created by the caller and is normally
    /// already running.
    pub fn new(backend: BackendRef, pump: PumpDriver, settings: PanelSettings) -> Self {
        tracing::info!(
            backend = ?backend,
            state_source = %settings.state_source,
            description_source = %settings.description_source,
            pump = pump.state().label(),
            "Control panel set up"
        );
        Self {
            backend,
            pump,
            state_source: settings.state_source,
            description_source: settings.description_source,
            topic_input: String::new(),
            node_parameter: NodeParameterJoin::default(),
            selected_file: None,
            collision_checked: false,
            model_file_extensions: settings.model_file_extensions,
            status_message: "Ready.".to_string(),
            activity: VecDeque::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Read-only accessors
    // -------------------------------------------------------------------------

    pub fn state_source(&self) -> StateSource {
        self.state_source
    }

    pub fn description_source(&self) -> DescriptionSource {
        self.description_source
    }

    /// Which input sub-panels are currently shown.
    pub fn visibility(&self) -> PanelVisibility {
        PanelVisibility::for_modes(self.state_source, self.description_source)
    }

    /// Title of the state group box, shown only in topic mode.
    pub fn state_group_title(&self) -> Option<&'static str> {
        match self.state_source {
            StateSource::Topic => Some("Using topic"),
            StateSource::TransformTree => None,
        }
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    pub fn collision_checked(&self) -> bool {
        self.collision_checked
    }

    pub fn model_file_extensions(&self) -> &[String] {
        &self.model_file_extensions
    }

    pub fn pump(&self) -> &PumpDriver {
        &self.pump
    }

    /// Activity log, oldest first.
    pub fn activity(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.activity.iter()
    }

    pub fn clear_activity(&mut self) {
        self.activity.clear();
    }

    // -------------------------------------------------------------------------
    // State source group
    // -------------------------------------------------------------------------

    /// Switch the state source selector.
    ///
    /// TransformTree hides the topic input and tells the backend to use the
    /// transform tree. Topic only shows the topic input; nothing is forwarded
    /// until a topic name is submitted.
    pub fn select_state_source(&mut self, mode: StateSource) -> Dispatch {
        if let Err(reason) = self.ensure_backend("select_state_source") {
            return Dispatch::Skipped(reason);
        }
        self.state_source = mode;
        match mode {
            StateSource::TransformTree => {
                let dispatch = self.forward("use_transform_tree_state", |b| {
                    b.use_transform_tree_state()
                });
                if dispatch.forwarded() {
                    self.note(ActivityLevel::Info, "Robot state from transform tree".to_string());
                }
                dispatch
            }
            StateSource::Topic => {
                tracing::debug!("Topic input shown; waiting for a topic name");
                Dispatch::Pending
            }
        }
    }

    /// Forward `text` as the state topic. Empty text is a no-op.
    pub fn submit_topic_name(&mut self, text: &str) -> Dispatch {
        if let Err(reason) = self.ensure_backend("submit_topic_name") {
            return Dispatch::Skipped(reason);
        }
        let topic = text.trim().to_string();
        if topic.is_empty() {
            tracing::debug!("Empty topic name ignored");
            return Dispatch::Skipped(SkipReason::EmptyInput);
        }
        let dispatch = self.forward("set_state_topic", |b| b.set_state_topic(&topic));
        if dispatch.forwarded() {
            self.note(ActivityLevel::Info, format!("Robot state from topic {topic}"));
        }
        dispatch
    }

    /// Submit whatever is currently in the topic line edit.
    pub fn submit_pending_topic(&mut self) -> Dispatch {
        let text = self.topic_input.clone();
        self.submit_topic_name(&text)
    }

    // -------------------------------------------------------------------------
    // Description source group
    // -------------------------------------------------------------------------

    /// Switch the description source selector. File shows the file controls
    /// and hides node/parameter; Parameter does the inverse.
    pub fn select_description_source(&mut self, mode: DescriptionSource) -> Dispatch {
        if let Err(reason) = self.ensure_backend("select_description_source") {
            return Dispatch::Skipped(reason);
        }
        self.description_source = mode;
        tracing::debug!(mode = %mode, "Description source selected");
        Dispatch::Pending
    }

    /// Run a file-choice interaction and remember the chosen path.
    ///
    /// `pick` receives the accepted extensions and returns the chosen file, or
    /// `None` if the user cancelled (the previous choice is kept). The path is
    /// not forwarded; that happens in `confirm_load_model`.
    pub fn request_file_selection<F>(&mut self, pick: F) -> Dispatch
    where
        F: FnOnce(&[String]) -> Option<PathBuf>,
    {
        if let Err(reason) = self.ensure_backend("request_file_selection") {
            return Dispatch::Skipped(reason);
        }
        match pick(&self.model_file_extensions) {
            Some(path) => {
                tracing::info!(path = %path.display(), "Model file selected");
                self.status_message = format!("Selected {}", path.display());
                self.selected_file = Some(path);
            }
            None => tracing::debug!("File selection cancelled"),
        }
        Dispatch::Pending
    }

    /// Forward the previously chosen file as the model source.
    pub fn confirm_load_model(&mut self) -> Dispatch {
        if let Err(reason) = self.ensure_backend("confirm_load_model") {
            return Dispatch::Skipped(reason);
        }
        let Some(path) = self.selected_file.clone() else {
            return self.skip("confirm_load_model", SkipReason::NoFileSelected);
        };
        let dispatch = self.forward("set_model_file", |b| b.set_model_file(&path));
        if dispatch.forwarded() {
            self.note(ActivityLevel::Info, format!("Load model {}", path.display()));
        }
        dispatch
    }

    /// Set both node/parameter slots and submit them.
    pub fn submit_node_and_parameter(&mut self, node: &str, parameter: &str) -> Dispatch {
        if let Err(reason) = self.ensure_backend("submit_node_and_parameter") {
            return Dispatch::Skipped(reason);
        }
        self.node_parameter.set_node(node);
        self.node_parameter.set_parameter(parameter);
        self.submit_pending_node_and_parameter()
    }

    /// Forward the node/parameter pair if both slots are filled; otherwise
    /// keep waiting.
    pub fn submit_pending_node_and_parameter(&mut self) -> Dispatch {
        if let Err(reason) = self.ensure_backend("submit_node_and_parameter") {
            return Dispatch::Skipped(reason);
        }
        let Some((node, parameter)) = self
            .node_parameter
            .ready()
            .map(|(n, p)| (n.to_string(), p.to_string()))
        else {
            tracing::debug!("Node/parameter join waiting for both fields");
            return Dispatch::Pending;
        };
        let dispatch = self.forward("set_model_from_node_and_parameter", |b| {
            b.set_model_from_node_and_parameter(&node, &parameter)
        });
        if dispatch.forwarded() {
            self.note(
                ActivityLevel::Info,
                format!("Load model from {parameter} on {node}"),
            );
        }
        dispatch
    }

    // -------------------------------------------------------------------------
    // Stateless actions
    // -------------------------------------------------------------------------

    /// Collision detection checkbox clicked.
    ///
    /// The instruction is forwarded on every click; the backend owns any
    /// collision topic wiring.
    pub fn toggle_collision_detection(&mut self) -> Dispatch {
        let dispatch = self.forward("set_collision_detection_mode", |b| {
            b.set_collision_detection_mode()
        });
        if dispatch.forwarded() {
            self.collision_checked = !self.collision_checked;
            self.note(ActivityLevel::Info, "Collision detection mode set".to_string());
        }
        dispatch
    }

    pub fn broadcast_transform(&mut self) -> Dispatch {
        let dispatch = self.forward("broadcast_transform", |b| b.broadcast_transform());
        if dispatch.forwarded() {
            self.status_message = "Transform broadcast.".to_string();
        }
        dispatch
    }

    pub fn clear_scene(&mut self) -> Dispatch {
        let dispatch = self.forward("clear_scene", |b| b.clear_scene());
        if dispatch.forwarded() {
            self.note(ActivityLevel::Info, "Scene cleared".to_string());
        }
        dispatch
    }

    // -------------------------------------------------------------------------
    // Pump lifecycle
    // -------------------------------------------------------------------------

    /// Install the callback the pump's ticker uses to wake the UI thread.
    pub fn set_pump_waker(&mut self, waker: Waker) {
        self.pump.set_waker(waker);
    }

    /// Service the pump from the UI update loop.
    pub fn service_pump(&mut self) -> Option<TickOutcome> {
        self.pump.service(&self.backend)
    }

    /// Deliver one tick directly (hosts without a ticker thread).
    pub fn tick_pump(&mut self) -> TickOutcome {
        self.pump.tick(&self.backend)
    }

    pub fn start_pump(&mut self) -> bool {
        let started = self.pump.start();
        if started {
            self.note(ActivityLevel::Info, "Pump started".to_string());
        }
        started
    }

    pub fn stop_pump(&mut self) -> bool {
        let stopped = self.pump.stop();
        if stopped {
            self.note(ActivityLevel::Info, "Pump stopped".to_string());
        }
        stopped
    }

    /// Application-wide closing notification.
    pub fn on_application_closing(&mut self) {
        self.pump.on_application_closing();
    }

    // -------------------------------------------------------------------------
    // Session
    // -------------------------------------------------------------------------

    /// Capture modes and pending inputs for persistence.
    pub fn session_snapshot(&self) -> SessionData {
        SessionData::new(
            self.state_source,
            self.description_source,
            self.topic_input.clone(),
            self.node_parameter.clone(),
            self.selected_file.clone(),
        )
    }

    /// Pre-fill modes and pending inputs from a saved session.
    ///
    /// Nothing is forwarded to the backend; every commit stays an explicit
    /// user action.
    pub fn restore_session(&mut self, session: SessionData) {
        self.state_source = session.state_source;
        self.description_source = session.description_source;
        self.topic_input = session.topic;
        self.node_parameter = NodeParameterJoin::new(session.node, session.parameter);
        self.selected_file = session.model_file;
        tracing::info!("Panel inputs restored from previous session");
    }

    // -------------------------------------------------------------------------
    // Activity log
    // -------------------------------------------------------------------------

    /// Append a warning to the activity log (e.g. config warnings at startup).
    pub fn record_warning(&mut self, message: impl Into<String>) {
        self.note(ActivityLevel::Warning, message.into());
    }

    fn note(&mut self, level: ActivityLevel, message: String) {
        if self.activity.len() >= MAX_ACTIVITY_ENTRIES {
            self.activity.pop_front();
        }
        self.status_message = message.clone();
        self.activity.push_back(ActivityEntry {
            at: chrono::Local::now(),
            level,
            message,
        });
    }

    // -------------------------------------------------------------------------
    // Backend access
    // -------------------------------------------------------------------------

    /// Re-validate the backend before an action touches panel state.
    fn ensure_backend(&mut self, operation: &'static str) -> Result<(), SkipReason> {
        match self.backend.resolve() {
            Ok(_) => Ok(()),
            Err(reason) => {
                self.skip(operation, reason);
                Err(reason)
            }
        }
    }

    /// Make exactly one backend call, or report why it could not be made.
    fn forward<F>(&mut self, operation: &'static str, f: F) -> Dispatch
    where
        F: FnOnce(&mut dyn BackendFacade),
    {
        match self.backend.call(f) {
            Ok(()) => {
                tracing::debug!(operation, "Forwarded to backend");
                Dispatch::Forwarded
            }
            Err(reason) => self.skip(operation, reason),
        }
    }

    fn skip(&mut self, operation: &'static str, reason: SkipReason) -> Dispatch {
        if reason.is_backend_fault() {
            tracing::warn!(operation, reason = %reason, "Action skipped");
            self.note(ActivityLevel::Warning, format!("{operation} skipped: {reason}"));
        } else {
            tracing::info!(operation, reason = %reason, "Action skipped");
            self.note(ActivityLevel::Info, format!("{operation}: {reason}"));
        }
        Dispatch::Skipped(reason)
    }
}

impl Drop for ControlPanel {
    fn drop(&mut self) {
        // The pump must be stopped before the rest of the panel goes away.
        self.pump.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::backend::testing::{Call, RecordingBackend};
    use crate::core::backend::SharedBackend;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    struct Fixture {
        recorder: Rc<RefCell<RecordingBackend>>,
        // Keeps the backend alive for the panel's weak reference.
        _shared: SharedBackend,
        panel: ControlPanel,
    }

    impl Fixture {
        fn calls(&self) -> Vec<Call> {
            self.recorder.borrow().calls.clone()
        }
    }

    fn fixture() -> Fixture {
        let (recorder, shared) = RecordingBackend::shared();
        let panel = ControlPanel::new(
            BackendRef::attach(&shared),
            PumpDriver::manual(Duration::from_millis(10)),
            PanelSettings::default(),
        );
        Fixture {
            recorder,
            _shared: shared,
            panel,
        }
    }

    fn detached_panel() -> ControlPanel {
        ControlPanel::new(
            BackendRef::detached(),
            PumpDriver::manual(Duration::from_millis(10)),
            PanelSettings::default(),
        )
    }

    #[test]
    fn test_defaults_match_startup_layout() {
        let f = fixture();
        assert_eq!(f.panel.state_source(), StateSource::TransformTree);
        assert_eq!(f.panel.description_source(), DescriptionSource::Parameter);
        let v = f.panel.visibility();
        assert!(!v.topic_input);
        assert!(!v.file_controls);
        assert!(v.parameter_controls);
        assert!(f.calls().is_empty(), "setup makes no backend calls");
    }

    #[test]
    fn test_select_topic_shows_input_without_backend_call() {
        let mut f = fixture();
        assert_eq!(f.panel.select_state_source(StateSource::Topic), Dispatch::Pending);
        assert!(f.panel.visibility().topic_input);
        assert_eq!(f.panel.state_group_title(), Some("Using topic"));
        assert!(f.calls().is_empty());
    }

    #[test]
    fn test_topic_then_transform_tree_hides_topic_input() {
        let mut f = fixture();
        f.panel.select_state_source(StateSource::Topic);
        let d = f.panel.select_state_source(StateSource::TransformTree);
        assert_eq!(d, Dispatch::Forwarded);
        assert!(!f.panel.visibility().topic_input);
        assert_eq!(f.calls(), vec![Call::UseTransformTree]);
    }

    #[test]
    fn test_submit_topic_forwards_trimmed_name() {
        let mut f = fixture();
        f.panel.select_state_source(StateSource::Topic);
        f.panel.topic_input = " /joint_states ".to_string();
        assert_eq!(f.panel.submit_pending_topic(), Dispatch::Forwarded);
        assert_eq!(f.calls(), vec![Call::StateTopic("/joint_states".to_string())]);
    }

    #[test]
    fn test_empty_topic_is_noop() {
        let mut f = fixture();
        assert_eq!(
            f.panel.submit_topic_name(""),
            Dispatch::Skipped(SkipReason::EmptyInput)
        );
        assert_eq!(
            f.panel.submit_topic_name("   "),
            Dispatch::Skipped(SkipReason::EmptyInput)
        );
        assert!(f.calls().is_empty());
    }

    #[test]
    fn test_description_source_groups_are_exclusive() {
        let mut f = fixture();
        let sequence = [
            DescriptionSource::File,
            DescriptionSource::File,
            DescriptionSource::Parameter,
            DescriptionSource::File,
            DescriptionSource::Parameter,
            DescriptionSource::Parameter,
        ];
        for mode in sequence {
            f.panel.select_description_source(mode);
            let v = f.panel.visibility();
            assert_ne!(v.file_controls, v.parameter_controls);
            assert_eq!(v.file_controls, mode == DescriptionSource::File);
        }
        assert!(f.calls().is_empty());
    }

    #[test]
    fn test_file_selection_is_deferred_until_load() {
        let mut f = fixture();
        f.panel.select_description_source(DescriptionSource::File);
        let d = f
            .panel
            .request_file_selection(|_| Some(PathBuf::from("/robots/arm.urdf")));
        assert_eq!(d, Dispatch::Pending);
        assert_eq!(f.panel.selected_file(), Some(Path::new("/robots/arm.urdf")));
        assert!(f.calls().is_empty(), "selection alone forwards nothing");

        assert_eq!(f.panel.confirm_load_model(), Dispatch::Forwarded);
        assert_eq!(
            f.calls(),
            vec![Call::ModelFile(PathBuf::from("/robots/arm.urdf"))]
        );
    }

    #[test]
    fn test_file_chooser_receives_extensions() {
        let mut f = fixture();
        let mut seen = Vec::new();
        f.panel.request_file_selection(|exts| {
            seen = exts.to_vec();
            None
        });
        assert_eq!(seen, vec!["urdf".to_string(), "xacro".to_string()]);
    }

    #[test]
    fn test_cancelled_selection_keeps_previous_choice() {
        let mut f = fixture();
        f.panel
            .request_file_selection(|_| Some(PathBuf::from("/robots/arm.urdf")));
        f.panel.request_file_selection(|_| None);
        assert_eq!(f.panel.selected_file(), Some(Path::new("/robots/arm.urdf")));
    }

    #[test]
    fn test_load_without_selection_is_soft_failure() {
        let mut f = fixture();
        assert_eq!(
            f.panel.confirm_load_model(),
            Dispatch::Skipped(SkipReason::NoFileSelected)
        );
        assert!(f.calls().is_empty());
        let last = f.panel.activity().last().expect("message logged");
        assert_eq!(last.level, ActivityLevel::Info);
        assert!(last.message.contains("no file selected"));
    }

    #[test]
    fn test_node_parameter_requires_both_fields() {
        let mut f = fixture();
        assert_eq!(
            f.panel.submit_node_and_parameter("arm", ""),
            Dispatch::Pending
        );
        assert!(f.calls().is_empty());

        assert_eq!(
            f.panel.submit_node_and_parameter("arm", "joint_states"),
            Dispatch::Forwarded
        );
        assert_eq!(
            f.calls(),
            vec![Call::NodeParameter(
                "arm".to_string(),
                "joint_states".to_string()
            )]
        );
    }

    #[test]
    fn test_node_parameter_join_from_line_edits() {
        let mut f = fixture();
        f.panel.node_parameter.set_parameter("robot_description");
        assert_eq!(f.panel.submit_pending_node_and_parameter(), Dispatch::Pending);
        f.panel.node_parameter.set_node("arm");
        assert_eq!(
            f.panel.submit_pending_node_and_parameter(),
            Dispatch::Forwarded
        );
        assert_eq!(f.calls().len(), 1);
    }

    #[test]
    fn test_stateless_actions_forward_once_each() {
        let mut f = fixture();
        assert!(f.panel.toggle_collision_detection().forwarded());
        assert!(f.panel.collision_checked());
        assert!(f.panel.toggle_collision_detection().forwarded());
        assert!(!f.panel.collision_checked());
        assert!(f.panel.broadcast_transform().forwarded());
        assert!(f.panel.clear_scene().forwarded());
        assert_eq!(
            f.calls(),
            vec![
                Call::CollisionDetection,
                Call::CollisionDetection,
                Call::Broadcast,
                Call::ClearScene
            ]
        );
    }

    #[test]
    fn test_invalid_backend_leaves_ui_state_unchanged() {
        let mut panel = detached_panel();
        let before_visibility = panel.visibility();

        let unavailable = Dispatch::Skipped(SkipReason::BackendUnavailable);
        assert_eq!(panel.select_state_source(StateSource::Topic), unavailable);
        assert_eq!(
            panel.select_description_source(DescriptionSource::File),
            unavailable
        );
        assert_eq!(
            panel.request_file_selection(|_| Some(PathBuf::from("/robots/arm.urdf"))),
            unavailable
        );
        assert_eq!(panel.submit_node_and_parameter("arm", "joint_states"), unavailable);
        assert_eq!(panel.submit_topic_name("/joint_states"), unavailable);
        assert_eq!(panel.confirm_load_model(), unavailable);
        assert_eq!(panel.toggle_collision_detection(), unavailable);
        assert_eq!(panel.broadcast_transform(), unavailable);
        assert_eq!(panel.clear_scene(), unavailable);

        assert_eq!(panel.visibility(), before_visibility);
        assert_eq!(panel.state_source(), StateSource::TransformTree);
        assert_eq!(panel.description_source(), DescriptionSource::Parameter);
        assert_eq!(panel.selected_file(), None);
        assert_eq!(panel.node_parameter, NodeParameterJoin::default());
        assert!(!panel.collision_checked());
        assert!(panel
            .activity()
            .all(|entry| entry.level == ActivityLevel::Warning));
    }

    #[test]
    fn test_not_ready_backend_is_skipped() {
        let mut f = fixture();
        f.recorder.borrow_mut().ready = false;
        assert_eq!(
            f.panel.broadcast_transform(),
            Dispatch::Skipped(SkipReason::BackendNotReady)
        );
        assert!(f.calls().is_empty());
    }

    #[test]
    fn test_pump_ticks_through_panel() {
        let mut f = fixture();
        assert_eq!(f.panel.tick_pump(), TickOutcome::Stepped);
        f.panel.on_application_closing();
        assert_eq!(f.panel.tick_pump(), TickOutcome::Idle);
        assert!(!f.panel.stop_pump(), "already stopped by closing");
        assert!(f.panel.start_pump());
        assert_eq!(f.panel.tick_pump(), TickOutcome::Stepped);
        assert_eq!(f.calls(), vec![Call::Step, Call::Step]);
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut f = fixture();
        for _ in 0..(MAX_ACTIVITY_ENTRIES + 10) {
            f.panel.clear_scene();
        }
        assert_eq!(f.panel.activity().count(), MAX_ACTIVITY_ENTRIES);
    }

    #[test]
    fn test_session_restore_makes_no_backend_calls() {
        let mut f = fixture();
        f.panel.select_state_source(StateSource::Topic);
        f.panel.select_description_source(DescriptionSource::File);
        f.panel.topic_input = "/joint_states".to_string();
        f.panel
            .request_file_selection(|_| Some(PathBuf::from("/robots/arm.urdf")));
        let snapshot = f.panel.session_snapshot();

        let mut g = fixture();
        g.panel.restore_session(snapshot);
        assert_eq!(g.panel.state_source(), StateSource::Topic);
        assert_eq!(g.panel.description_source(), DescriptionSource::File);
        assert_eq!(g.panel.topic_input, "/joint_states");
        assert_eq!(g.panel.selected_file(), Some(Path::new("/robots/arm.urdf")));
        assert!(g.calls().is_empty());
    }
}
