// RoboPanel - app/local_backend.rs
//
// In-process backend used when no robot middleware is linked.
//
// It performs no kinematics and parses no robot descriptions. It records the
// most recent instruction of each kind so the UI can show what a real
// backend would have been asked to do, and counts pump steps.

use crate::core::backend::BackendFacade;
use crate::core::model::{BackendSnapshot, ModelSource, StateSource};
use std::path::Path;

/// Backend that records instructions into a `BackendSnapshot`.
#[derive(Debug, Default)]
pub struct LocalBackend {
    snapshot: BackendSnapshot,
}

impl LocalBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view of everything forwarded so far.
    pub fn snapshot(&self) -> &BackendSnapshot {
        &self.snapshot
    }
}

impl BackendFacade for LocalBackend {
    fn use_transform_tree_state(&mut self) {
        self.snapshot.state_source = Some(StateSource::TransformTree);
        self.snapshot.state_topic = None;
        tracing::info!("Backend: robot state from transform tree");
    }

    fn set_state_topic(&mut self, name: &str) {
        self.snapshot.state_source = Some(StateSource::Topic);
        self.snapshot.state_topic = Some(name.to_string());
        tracing::info!(topic = name, "Backend: robot state from topic");
    }

    fn set_model_file(&mut self, path: &Path) {
        // Fire-and-forget: a bad path is this backend's own failure to report.
        if !path.is_file() {
            let msg = format!("model file '{}' does not exist", path.display());
            tracing::warn!(path = %path.display(), "Backend: model file not found");
            self.snapshot.last_error = Some(msg);
            return;
        }
        self.snapshot.model = Some(ModelSource::File(path.to_path_buf()));
        self.snapshot.last_error = None;
        tracing::info!(path = %path.display(), "Backend: model from file");
    }

    fn set_model_from_node_and_parameter(&mut self, node: &str, parameter: &str) {
        self.snapshot.model = Some(ModelSource::NodeParameter {
            node: node.to_string(),
            parameter: parameter.to_string(),
        });
        self.snapshot.last_error = None;
        tracing::info!(node, parameter, "Backend: model from node parameter");
    }

    fn set_collision_detection_mode(&mut self) {
        self.snapshot.collision_detection = true;
        self.snapshot.collision_requests += 1;
        tracing::info!(
            requests = self.snapshot.collision_requests,
            "Backend: collision detection mode"
        );
    }

    fn broadcast_transform(&mut self) {
        self.snapshot.broadcasts += 1;
        tracing::debug!(count = self.snapshot.broadcasts, "Backend: broadcast transform");
    }

    fn step(&mut self) {
        self.snapshot.steps += 1;
    }

    fn clear_scene(&mut self) {
        self.snapshot.model = None;
        self.snapshot.scene_clears += 1;
        tracing::info!("Backend: scene cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_topic_then_transform_tree_clears_topic() {
        let mut backend = LocalBackend::new();
        backend.set_state_topic("/joint_states");
        assert_eq!(
            backend.snapshot().state_topic.as_deref(),
            Some("/joint_states")
        );

        backend.use_transform_tree_state();
        assert_eq!(
            backend.snapshot().state_source,
            Some(StateSource::TransformTree)
        );
        assert_eq!(backend.snapshot().state_topic, None);
    }

    #[test]
    fn test_missing_model_file_is_recorded_not_applied() {
        let mut backend = LocalBackend::new();
        backend.set_model_file(Path::new("/definitely/not/here/robot.urdf"));
        assert_eq!(backend.snapshot().model, None);
        assert!(backend.snapshot().last_error.is_some());
    }

    #[test]
    fn test_existing_model_file_is_applied() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "<robot name=\"arm\"/>").unwrap();

        let mut backend = LocalBackend::new();
        backend.set_model_file(file.path());
        assert_eq!(
            backend.snapshot().model,
            Some(ModelSource::File(file.path().to_path_buf()))
        );
        assert_eq!(backend.snapshot().last_error, None);
    }

    #[test]
    fn test_clear_scene_drops_model_and_counts() {
        let mut backend = LocalBackend::new();
        backend.set_model_from_node_and_parameter("arm", "robot_description");
        backend.clear_scene();
        assert_eq!(backend.snapshot().model, None);
        assert_eq!(backend.snapshot().scene_clears, 1);
    }

    #[test]
    fn test_counters() {
        let mut backend = LocalBackend::new();
        backend.step();
        backend.step();
        backend.broadcast_transform();
        backend.set_collision_detection_mode();
        let snap = backend.snapshot();
        assert_eq!(snap.steps, 2);
        assert_eq!(snap.broadcasts, 1);
        assert!(snap.collision_detection);
    }

    #[test]
    fn test_collision_mode_latches_across_requests() {
        let mut backend = LocalBackend::new();
        backend.set_collision_detection_mode();
        backend.set_collision_detection_mode();
        let snap = backend.snapshot();
        assert!(snap.collision_detection);
        assert_eq!(snap.collision_requests, 2);
    }
}
