//! Scheduled screen transitions.
//!
//! A `Timer` is stamped with the app generation it was scheduled in. The
//! app bumps its generation whenever the player navigates, so a timer that
//! fires after the screen it belonged to is gone is recognized as stale and
//! dropped. `TimerQueue` also aborts pending tasks outright on cancel; the
//! generation check covers the window where a timer already fired but its
//! message is still queued.

use log::debug;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// What a timer completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// Minimum time the loading cover stays up.
    LoadingGate,
    /// Flying-card transition after picking a deck.
    Transition,
    /// Shuffle animation before an exhausted deck is refilled.
    Reshuffle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    pub kind: TimerKind,
    pub generation: u64,
}

/// Pending timers backed by tokio tasks.
///
/// Expired timers are delivered on the channel given to `new`.
pub struct TimerQueue {
    tx: UnboundedSender<Timer>,
    handles: Vec<JoinHandle<()>>,
}

impl TimerQueue {
    #[must_use]
    pub fn new(tx: UnboundedSender<Timer>) -> Self {
        Self {
            tx,
            handles: Vec::new(),
        }
    }

    /// Deliver `timer` after `after` has elapsed.
    pub fn schedule(&mut self, timer: Timer, after: Duration) {
        self.handles.retain(|handle| !handle.is_finished());
        let tx = self.tx.clone();
        debug!("scheduling {:?} in {:?}", timer, after);
        self.handles.push(tokio::spawn(async move {
            tokio::time::sleep(after).await;
            // Receiver gone means the shell is shutting down.
            let _ = tx.send(timer);
        }));
    }

    /// Abort every timer that has not fired yet.
    pub fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    /// Number of timers scheduled and not yet finished or cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }
}

impl Drop for TimerQueue {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
