// RoboPanel - app/pump_driver.rs
//
// Couples the pump state machine to a tick source.
//
// The driver is serviced from the UI update loop, which the ticker wakes on
// every interval. Each service drains the ticker and runs one pump tick per
// elapsed interval, so the step rate follows the interval rather than the
// frame rate. Steps run one after another on the UI thread and never
// overlap. If the UI thread was blocked for longer than
// `MAX_CATCH_UP_STEPS` intervals, the excess intervals are dropped instead
// of replayed.
//
// A driver built with `manual` has no ticker thread; the host delivers ticks
// itself through `tick`. Integration hosts with their own timer and the
// tests use this.

use crate::app::ticker::{Ticker, Waker};
use crate::core::backend::BackendRef;
use crate::core::model::{PumpState, TickOutcome};
use crate::core::pump::PumpLoop;
use crate::util::constants::MAX_CATCH_UP_STEPS;
use std::time::Duration;

/// Pump loop plus the timer that drives it.
pub struct PumpDriver {
    pump: PumpLoop,
    ticker: Ticker,
    /// Whether the driver owns a ticker thread.
    clocked: bool,
    /// Set once the application-closing notification has been handled.
    closing: bool,
}

impl PumpDriver {
    /// Create a running pump with its own ticker thread.
    pub fn new(interval: Duration) -> Self {
        let mut driver = Self {
            pump: PumpLoop::new(interval),
            ticker: Ticker::new(),
            clocked: true,
            closing: false,
        };
        driver.ticker.start(interval);
        driver
    }

    /// Create a running pump whose ticks are delivered by the host.
    pub fn manual(interval: Duration) -> Self {
        Self {
            pump: PumpLoop::new(interval),
            ticker: Ticker::new(),
            clocked: false,
            closing: false,
        }
    }

    /// Wake the UI thread through `waker` whenever a tick is due.
    pub fn set_waker(&mut self, waker: Waker) {
        self.ticker.set_waker(waker);
    }

    pub fn state(&self) -> PumpState {
        self.pump.state()
    }

    pub fn is_running(&self) -> bool {
        self.pump.is_running()
    }

    pub fn interval(&self) -> Duration {
        self.pump.interval()
    }

    /// Steps that reached the backend since the driver was created.
    pub fn steps(&self) -> u64 {
        self.pump.steps()
    }

    /// Ticks skipped because the backend could not be used.
    pub fn skipped_ticks(&self) -> u64 {
        self.pump.skipped_ticks()
    }

    /// Arm the pump (and its ticker). Idempotent.
    pub fn start(&mut self) -> bool {
        if self.clocked {
            self.ticker.start(self.pump.interval());
        }
        self.pump.start()
    }

    /// Disarm the pump and stop its ticker. Idempotent.
    pub fn stop(&mut self) -> bool {
        self.ticker.stop();
        self.pump.stop()
    }

    /// Handle the application-closing notification.
    ///
    /// Stops the pump; later notifications are ignored.
    pub fn on_application_closing(&mut self) {
        if self.closing {
            return;
        }
        self.closing = true;
        tracing::info!("Application closing; stopping pump");
        self.stop();
    }

    /// Drain the ticker and run one pump tick per elapsed interval, up to
    /// `MAX_CATCH_UP_STEPS`.
    ///
    /// Returns the outcome of the last tick, or `None` when no interval has
    /// elapsed since the last service.
    pub fn service(&mut self, backend: &BackendRef) -> Option<TickOutcome> {
        let ticks = self.ticker.poll_ticks();
        if ticks > MAX_CATCH_UP_STEPS {
            tracing::debug!(
                ticks,
                dropped = ticks - MAX_CATCH_UP_STEPS,
                "Pump: UI thread fell behind; dropping excess ticks"
            );
        }
        let mut last = None;
        for _ in 0..ticks.min(MAX_CATCH_UP_STEPS) {
            last = Some(self.tick(backend));
        }
        last
    }

    /// Deliver one elapsed interval to the pump.
    pub fn tick(&mut self, backend: &BackendRef) -> TickOutcome {
        self.pump.on_tick(backend)
    }
}

impl Drop for PumpDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
