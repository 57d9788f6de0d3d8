//! Feedback timer — the arming mechanism for a show date produced by
//! `feedback::schedule`.
//!
//! The decision of *when* stays pure; this owns the single spawned task and
//! guarantees at most one pending fire. Re-arming with a changed instant
//! cancels the previous task first, so a double fire is impossible; re-arming
//! with the unchanged instant is a no-op, so callers may re-invoke on every
//! re-render. Dropping the timer cancels it outright (view teardown).

use std::time::Duration as StdDuration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;

#[derive(Default)]
pub struct FeedbackTimer {
    handle: Option<JoinHandle<()>>,
    armed_for: Option<DateTime<Utc>>,
}

impl FeedbackTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The instant the timer is currently armed for, if any.
    pub fn armed_for(&self) -> Option<DateTime<Utc>> {
        self.armed_for
    }

    /// Arms `on_fire` to run at `fire_at`. An instant already in the past
    /// fires immediately (the decision layer hands back absolute instants,
    /// and "now or earlier" means "prompt now").
    ///
    /// Re-arming with the same instant while still pending keeps the
    /// original task and drops `on_fire`. Re-arming with a different instant
    /// cancels the pending task before spawning the new one.
    pub fn arm<F>(&mut self, fire_at: DateTime<Utc>, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let still_pending = self
            .handle
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false);
        if still_pending && self.armed_for == Some(fire_at) {
            return;
        }

        self.cancel();

        let delay = (fire_at - Utc::now()).to_std().unwrap_or(StdDuration::ZERO);
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire();
        }));
        self.armed_for = Some(fire_at);
    }

    /// Cancels any pending fire. Safe to call when nothing is armed.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        self.armed_for = None;
    }
}

impl Drop for FeedbackTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
