//! # Debounce Timers
//!
//! The only scheduling primitive on these pages: a per-field timer slot
//! that collapses a burst of events into one trailing-edge delivery.
//!
//! ## Behavior
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Trailing-Edge Debounce (wait = 100ms)                                  │
//! │                                                                         │
//! │  events     e1      e2   e3                                             │
//! │  time    ───┬───────┬────┬──────────────────────────────────────►       │
//! │             │       │    │                                              │
//! │             ▼       ▼    ▼                                              │
//! │          timer   reset  reset ──── 100ms quiet ────► deliver e3         │
//! │                                                                         │
//! │  Each call replaces the pending timer. Only the LAST event within a     │
//! │  burst is delivered, one quiet period after the burst ends.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Delivery
//! The debouncer delivers into an mpsc channel rather than invoking a
//! callback: every page runs as one actor, and the fired event re-enters
//! the same queue as everything else, so a fire never interleaves with
//! another mutation.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// One debounce slot delivering events of type `T` into a channel.
///
/// Dropping the debouncer detaches (does not cancel) a pending timer;
/// a late fire into a closed channel is silently discarded.
pub struct Debouncer<T> {
    wait: Duration,
    tx: mpsc::Sender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Creates a debouncer that waits `wait` after the last call before
    /// sending into `tx`.
    pub fn new(wait: Duration, tx: mpsc::Sender<T>) -> Self {
        Debouncer {
            wait,
            tx,
            pending: None,
        }
    }

    /// Schedules `event` for delivery after the quiet period, replacing
    /// any pending delivery.
    pub fn call(&mut self, event: T) {
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }

        let wait = self.wait;
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            let _ = tx.send(event).await;
        }));
    }

    /// Cancels the pending delivery, if any.
    pub fn cancel(&mut self) {
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }
    }

    /// Whether a delivery is currently scheduled.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// The configured quiet period.
    pub fn wait(&self) -> Duration {
        self.wait
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    fn debouncer(wait_ms: u64) -> (Debouncer<u32>, mpsc::Receiver<u32>) {
        let (tx, rx) = mpsc::channel(8);
        (Debouncer::new(Duration::from_millis(wait_ms), tx), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_quiet_period() {
        let (mut debouncer, mut rx) = debouncer(100);
        debouncer.call(1);

        advance(Duration::from_millis(99)).await;
        assert!(rx.try_recv().is_err());

        advance(Duration::from_millis(1)).await;
        assert_eq!(rx.recv().await, Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_event() {
        let (mut debouncer, mut rx) = debouncer(100);

        debouncer.call(1);
        advance(Duration::from_millis(50)).await;
        debouncer.call(2);
        advance(Duration::from_millis(50)).await;
        debouncer.call(3);

        // 50ms after the last call nothing has fired yet
        advance(Duration::from_millis(50)).await;
        assert!(rx.try_recv().is_err());

        advance(Duration::from_millis(50)).await;
        assert_eq!(rx.recv().await, Some(3));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_call_resets_the_timer() {
        let (mut debouncer, mut rx) = debouncer(100);

        // Keep poking just under the wait; the timer must never fire
        for i in 0..5 {
            debouncer.call(i);
            advance(Duration::from_millis(99)).await;
            assert!(rx.try_recv().is_err());
        }

        advance(Duration::from_millis(1)).await;
        assert_eq!(rx.recv().await, Some(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_pending_event() {
        let (mut debouncer, mut rx) = debouncer(100);

        debouncer.call(1);
        debouncer.cancel();

        advance(Duration::from_millis(200)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_fields_have_separate_slots() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut discount = Debouncer::new(Duration::from_millis(80), tx.clone());
        let mut quantity = Debouncer::new(Duration::from_millis(100), tx);

        discount.call(80);
        quantity.call(100);

        advance(Duration::from_millis(80)).await;
        assert_eq!(rx.recv().await, Some(80));

        advance(Duration::from_millis(20)).await;
        assert_eq!(rx.recv().await, Some(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_is_pending() {
        let (mut debouncer, mut rx) = debouncer(100);
        assert!(!debouncer.is_pending());

        debouncer.call(1);
        assert!(debouncer.is_pending());

        advance(Duration::from_millis(100)).await;
        assert_eq!(rx.recv().await, Some(1));
        assert!(!debouncer.is_pending());
    }
}
