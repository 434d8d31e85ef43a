// RoboPanel - app/ticker.rs
//
// Fixed-rate tick source for the pump loop.
//
// Architecture:
//   - `Ticker` lives on the UI thread; `run_ticker` runs on a background
//     thread that sleeps for one interval and then signals a tick.
//   - An `Arc<AtomicBool>` cancel flag is the explicit stop handle.
//   - Ticks travel over a bounded channel of depth `TICK_QUEUE_DEPTH`. When
//     the UI thread has fallen that far behind, `try_send` fails and the new
//     tick is dropped, so a blocked UI never builds an unbounded backlog.
//   - After each tick the thread calls the installed waker (the GUI passes
//     one that requests an egui repaint), so the UI thread wakes up and
//     services the pump even when nothing else is happening.
//   - The UI thread drains the channel each frame and runs one backend step
//     per drained tick (see `app::pump_driver`).
//
// The background thread never touches the backend. Stopping is safe from
// any UI handler whether or not a tick is pending: the receiver is dropped
// immediately, and the thread exits on its next cancel check or failed send.

use crate::core::model::TickerMessage;
use crate::util::constants::{TICKER_CANCEL_CHECK_INTERVAL_MS, TICK_QUEUE_DEPTH};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, TrySendError};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Callback run on the ticker thread after every delivered tick.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Shared with the ticker thread so a waker can be installed after the
/// thread is already running.
type WakerSlot = Arc<Mutex<Option<Waker>>>;

/// Background interval timer with an explicit stop handle.
pub struct Ticker {
    /// Channel receiver the UI thread drains each frame.
    tick_rx: Option<mpsc::Receiver<TickerMessage>>,
    /// Cancel flag shared with the background thread.
    cancel_flag: Option<Arc<AtomicBool>>,
    /// Wakes the UI thread on each tick.
    waker: WakerSlot,
}

impl Ticker {
    pub fn new() -> Self {
        Self {
            tick_rx: None,
            cancel_flag: None,
            waker: Arc::new(Mutex::new(None)),
        }
    }

    /// Run `waker` after every tick from now on, including ticks of a
    /// ticker that is already running.
    pub fn set_waker(&mut self, waker: Waker) {
        match self.waker.lock() {
            Ok(mut slot) => *slot = Some(waker),
            Err(poisoned) => *poisoned.into_inner() = Some(waker),
        }
    }

    /// Start ticking every `interval`.
    ///
    /// Returns `false` and does nothing if the ticker is already active, so
    /// starting twice never spawns a second thread.
    pub fn start(&mut self, interval: Duration) -> bool {
        if self.is_active() {
            return false;
        }

        let (tx, rx) = mpsc::sync_channel(TICK_QUEUE_DEPTH);
        let cancel = Arc::new(AtomicBool::new(false));
        let waker = Arc::clone(&self.waker);

        self.tick_rx = Some(rx);
        self.cancel_flag = Some(Arc::clone(&cancel));

        let spawned = std::thread::Builder::new()
            .name("pump-ticker".to_string())
            .spawn(move || run_ticker(interval, tx, cancel, waker));

        match spawned {
            Ok(_) => {
                tracing::debug!(interval_ms = interval.as_millis() as u64, "Ticker started");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ticker: failed to spawn thread");
                self.tick_rx = None;
                self.cancel_flag = None;
                false
            }
        }
    }

    /// Request the background thread to stop.
    ///
    /// Returns `true` if the ticker was active. Calling it again is a no-op.
    pub fn stop(&mut self) -> bool {
        let was_active = self.is_active();
        if let Some(flag) = &self.cancel_flag {
            flag.store(true, Ordering::SeqCst);
        }
        self.cancel_flag = None;
        self.tick_rx = None;
        if was_active {
            tracing::debug!("Ticker stopped");
        }
        was_active
    }

    /// Returns `true` if a ticker thread is currently active.
    pub fn is_active(&self) -> bool {
        self.cancel_flag.is_some()
    }

    /// Drain pending ticks without blocking and return how many were queued.
    pub fn poll_ticks(&self) -> usize {
        let mut count = 0;
        if let Some(ref rx) = self.tick_rx {
            while let Ok(TickerMessage::Tick { seq }) = rx.try_recv() {
                tracing::trace!(seq, "Ticker: tick received");
                count += 1;
            }
        }
        count
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Background loop. Sleeps one interval (in cancel-check slices), offers a
/// tick to the UI thread, then wakes the UI.
fn run_ticker(
    interval: Duration,
    tx: mpsc::SyncSender<TickerMessage>,
    cancel: Arc<AtomicBool>,
    waker: WakerSlot,
) {
    let slice = interval.min(Duration::from_millis(TICKER_CANCEL_CHECK_INTERVAL_MS));
    let mut seq: u64 = 0;
    let mut dropped: u64 = 0;

    loop {
        // Interruptible sleep: check the cancel flag between slices.
        let mut slept = Duration::ZERO;
        while slept < interval {
            let nap = slice.min(interval - slept);
            std::thread::sleep(nap);
            slept += nap;
            if cancel.load(Ordering::SeqCst) {
                tracing::debug!(ticks = seq, dropped, "Ticker thread exiting");
                return;
            }
        }

        seq += 1;
        match tx.try_send(TickerMessage::Tick { seq }) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                // The UI thread is blocked; it already has a full backlog.
                dropped += 1;
                tracing::trace!(seq, dropped, "Ticker: tick dropped, queue full");
            }
            Err(TrySendError::Disconnected(_)) => {
                // UI side dropped the receiver; exit silently.
                return;
            }
        }

        let wake = waker.lock().ok().and_then(|slot| slot.clone());
        if let Some(wake) = wake {
            wake();
        }
    }
}
