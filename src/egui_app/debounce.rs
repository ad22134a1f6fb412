//! # Debouncer
//!
//! A cancellable deferred task. Every `schedule` clears the previously armed
//! timer before arming a new one, so only the last call inside a quiescence
//! window ever fires.
//!
//! Cancelling only stops a timer that has not fired yet. Whatever the fired
//! timer kicked off is not affected.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Timer handle that is explicitly cleared and reset
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    handle: Handle,
    timer: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(window: Duration, handle: Handle) -> Self {
        Self {
            window,
            handle,
            timer: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Run `fire` after the window, unless rescheduled or cancelled first
    pub fn schedule<F>(&mut self, fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let window = self.window;
        self.timer = Some(self.handle.spawn(async move {
            tokio::time::sleep(window).await;
            fire();
        }));
    }

    /// Clear the armed timer without firing it
    pub fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
