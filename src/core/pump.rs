// RoboPanel - core/pump.rs
//
// Pump loop state machine.
//
//   Stopped --start--> Running --tick--> Running (one backend step)
//   Running --stop---> Stopped
//
// This type only decides what a tick does. Timing lives in `app::ticker`,
// which signals ticks from a background thread; the UI thread feeds those
// ticks in here so every backend step runs on the UI thread and two steps
// can never overlap.

use crate::core::backend::BackendRef;
use crate::core::model::{PumpState, TickOutcome};
use std::time::Duration;

/// Fixed-interval driver for the backend's `step`.
#[derive(Debug, Clone)]
pub struct PumpLoop {
    state: PumpState,
    interval: Duration,
    /// Ticks that reached the backend.
    steps: u64,
    /// Ticks delivered while running that could not reach the backend.
    skipped: u64,
    /// Set while the backend is unreachable so the outage is logged once.
    backend_lost: bool,
}

impl PumpLoop {
    /// Create a pump in the `Running` state.
    pub fn new(interval: Duration) -> Self {
        Self {
            state: PumpState::Running,
            interval,
            steps: 0,
            skipped: 0,
            backend_lost: false,
        }
    }

    pub fn state(&self) -> PumpState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PumpState::Running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn skipped_ticks(&self) -> u64 {
        self.skipped
    }

    /// Arm the pump. Returns `true` if it was stopped; starting a running
    /// pump changes nothing.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = PumpState::Running;
        tracing::info!(interval_ms = self.interval.as_millis() as u64, "Pump started");
        true
    }

    /// Disarm the pump. Returns `true` if it was running; stopping a stopped
    /// pump changes nothing.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = PumpState::Stopped;
        tracing::info!(steps = self.steps, skipped = self.skipped, "Pump stopped");
        true
    }

    /// Handle one elapsed interval.
    ///
    /// While running, re-validates the backend and calls `step` exactly once.
    /// A failed lookup is counted and skipped; the warning is logged when the
    /// outage begins, not on every tick.
    pub fn on_tick(&mut self, backend: &BackendRef) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }

        match backend.call(|b| b.step()) {
            Ok(()) => {
                if self.backend_lost {
                    self.backend_lost = false;
                    tracing::info!("Pump: backend reachable again");
                }
                self.steps += 1;
                tracing::trace!(steps = self.steps, "Pump: step");
                TickOutcome::Stepped
            }
            Err(reason) => {
                self.skipped += 1;
                if !self.backend_lost {
                    self.backend_lost = true;
                    tracing::warn!(reason = %reason, "Pump: tick skipped");
                } else {
                    tracing::trace!(reason = %reason, skipped = self.skipped, "Pump: tick skipped");
                }
                TickOutcome::Skipped(reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::backend::testing::{Call, RecordingBackend};
    use crate::core::model::SkipReason;

    fn pump() -> PumpLoop {
        PumpLoop::new(Duration::from_millis(10))
    }

    #[test]
    fn test_new_pump_is_running() {
        let p = pump();
        assert_eq!(p.state(), PumpState::Running);
        assert_eq!(p.interval(), Duration::from_millis(10));
    }

    #[test]
    fn test_one_step_per_tick_while_running() {
        let (concrete, shared) = RecordingBackend::shared();
        let backend = BackendRef::attach(&shared);
        let mut p = pump();

        for _ in 0..5 {
            assert_eq!(p.on_tick(&backend), TickOutcome::Stepped);
        }
        assert_eq!(p.steps(), 5);
        assert_eq!(concrete.borrow().calls, vec![Call::Step; 5]);
    }

    #[test]
    fn test_no_steps_while_stopped() {
        let (concrete, shared) = RecordingBackend::shared();
        let backend = BackendRef::attach(&shared);
        let mut p = pump();

        assert!(p.stop());
        for _ in 0..3 {
            assert_eq!(p.on_tick(&backend), TickOutcome::Idle);
        }
        assert!(concrete.borrow().calls.is_empty());
        assert_eq!(p.skipped_ticks(), 0);
    }

    #[test]
    fn test_start_and_stop_are_idempotent() {
        let mut p = pump();
        assert!(!p.start(), "already running");
        assert!(p.stop());
        assert!(!p.stop(), "second stop is a no-op");
        assert_eq!(p.state(), PumpState::Stopped);
        assert!(p.start(), "re-armable");
        assert!(!p.start());
        assert_eq!(p.state(), PumpState::Running);
    }

    #[test]
    fn test_missing_backend_skips_tick() {
        let mut p = pump();
        let outcome = p.on_tick(&BackendRef::detached());
        assert_eq!(outcome, TickOutcome::Skipped(SkipReason::BackendUnavailable));
        assert_eq!(p.steps(), 0);
        assert_eq!(p.skipped_ticks(), 1);
        assert!(p.is_running(), "a lost backend does not stop the pump");
    }

    #[test]
    fn test_pump_recovers_when_backend_returns() {
        let (concrete, shared) = RecordingBackend::shared();
        let backend = BackendRef::attach(&shared);
        let mut p = pump();

        concrete.borrow_mut().ready = false;
        assert!(matches!(p.on_tick(&backend), TickOutcome::Skipped(_)));
        assert!(matches!(p.on_tick(&backend), TickOutcome::Skipped(_)));

        concrete.borrow_mut().ready = true;
        assert_eq!(p.on_tick(&backend), TickOutcome::Stepped);
        assert_eq!(p.steps(), 1);
        assert_eq!(p.skipped_ticks(), 2);
    }
}
