use std::{
    sync::{Condvar, Mutex, PoisonError},
    time::Duration,
};

/// Tells helper threads to stop, and wakes them up if they are sleeping.
#[derive(Debug, Default)]
pub(crate) struct CancellationToken {
    cancelled: Mutex<bool>,
    cvar: Condvar,
}

impl CancellationToken {
    /// Marks the token as cancelled and wakes up every sleeper. Cancelling
    /// twice does nothing.
    pub(crate) fn cancel(&self) {
        let mut cancelled = self
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if !*cancelled {
            *cancelled = true;
            self.cvar.notify_all();
        }
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        *self
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Sleeps for up to `duration`, returning early if cancelled. Returns
    /// whether the token is cancelled.
    pub(crate) fn sleep_with_cancellation(&self, duration: Duration) -> bool {
        let cancelled = self
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let (cancelled, _) = self
            .cvar
            .wait_timeout_while(cancelled, duration, |cancelled| !*cancelled)
            .unwrap_or_else(PoisonError::into_inner);

        *cancelled
    }
}
