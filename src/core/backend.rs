// RoboPanel - core/backend.rs
//
// The backend facade contract and the non-owning reference the panel and
// pump use to reach it.
//
// The panel never caches a usable backend. `BackendRef::resolve` upgrades a
// weak handle and checks readiness on every call, so a backend that was never
// attached, has been dropped by its owner, failed to initialise, or is
// already borrowed further up the stack yields a `SkipReason` instead of a
// panic.

use crate::core::model::SkipReason;
use std::cell::RefCell;
use std::path::Path;
use std::rc::{Rc, Weak};

/// Operations the panel and pump forward to the robot backend.
///
/// All calls are fire-and-forget: the backend handles its own failures.
pub trait BackendFacade {
    /// Take robot state from the transform tree.
    fn use_transform_tree_state(&mut self);

    /// Take robot state from the named topic.
    fn set_state_topic(&mut self, name: &str);

    /// Load the robot model from a description file.
    fn set_model_file(&mut self, path: &Path);

    /// Load the robot model from `parameter` on `node`.
    fn set_model_from_node_and_parameter(&mut self, node: &str, parameter: &str);

    /// Switch the backend into collision-detection mode. The backend owns
    /// any topic wiring this requires.
    fn set_collision_detection_mode(&mut self);

    /// Broadcast the current transform once.
    fn broadcast_transform(&mut self);

    /// Advance backend processing by one increment. Called once per pump tick
    /// and expected to return quickly.
    fn step(&mut self);

    /// Remove everything the backend has added to the scene.
    fn clear_scene(&mut self);

    /// Whether the backend finished initialising. A backend that reports
    /// `false` is treated as absent.
    fn is_ready(&self) -> bool {
        true
    }
}

/// Owning handle to a backend, held by whoever created it.
pub type SharedBackend = Rc<RefCell<dyn BackendFacade>>;

/// Non-owning, lazily validated reference to a backend.
#[derive(Clone, Default)]
pub struct BackendRef {
    inner: Option<Weak<RefCell<dyn BackendFacade>>>,
}

impl BackendRef {
    /// A reference that never resolves. Every operation through it is skipped.
    pub fn detached() -> Self {
        Self { inner: None }
    }

    /// Reference the given backend without extending its lifetime.
    pub fn attach(backend: &SharedBackend) -> Self {
        Self {
            inner: Some(Rc::downgrade(backend)),
        }
    }

    /// True if a backend was attached at some point, even if it is gone now.
    pub fn is_attached(&self) -> bool {
        self.inner.is_some()
    }

    /// Look up the backend and confirm it can accept a call right now.
    pub fn resolve(&self) -> Result<SharedBackend, SkipReason> {
        let shared = self
            .inner
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or(SkipReason::BackendUnavailable)?;

        let ready = match shared.try_borrow() {
            Ok(backend) => backend.is_ready(),
            Err(_) => return Err(SkipReason::BackendBusy),
        };
        if !ready {
            return Err(SkipReason::BackendNotReady);
        }
        Ok(shared)
    }

    /// Resolve the backend and run `f` against it exactly once.
    pub fn call<F>(&self, f: F) -> Result<(), SkipReason>
    where
        F: FnOnce(&mut dyn BackendFacade),
    {
        let shared = self.resolve()?;
        let mut backend = shared
            .try_borrow_mut()
            .map_err(|_| SkipReason::BackendBusy)?;
        f(&mut *backend);
        Ok(())
    }
}

impl std::fmt::Debug for BackendRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match &self.inner {
            None => "detached",
            Some(weak) if weak.strong_count() == 0 => "dropped",
            Some(_) => "attached",
        };
        f.debug_struct("BackendRef").field("status", &status).finish()
    }
}

// =============================================================================
// Test double
// =============================================================================
