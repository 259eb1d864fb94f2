use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex};
use std::time::Duration;

/// A shutdown signal that pending blind alerts wait on.
///
/// Alert threads sleep through `wait()` so they can be released the moment
/// the round ends or Ctrl+C is pressed, instead of holding the process open
/// for the remainder of the blind schedule.
pub struct ShutdownSignal {
    shutdown: AtomicBool,
    condvar: Condvar,
    mutex: Mutex<()>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self {
            shutdown: AtomicBool::new(false),
            condvar: Condvar::new(),
            mutex: Mutex::new(()),
        }
    }

    /// Trigger the shutdown signal, waking all waiting threads.
    pub fn trigger(&self) {
        // Hold the mutex so a waiter cannot miss the notification between
        // checking the flag and parking.
        let _guard = self.mutex.lock();
        self.shutdown.store(true, Ordering::SeqCst);
        self.condvar.notify_all();
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Wait for the specified duration or until shutdown is triggered.
    ///
    /// Returns `true` if shutdown was triggered, `false` if the wait completed normally.
    pub fn wait(&self, duration: Duration) -> bool {
        if self.is_shutdown() {
            return true;
        }

        let Ok(guard) = self.mutex.lock() else {
            // Mutex poisoned, treat as shutdown
            return true;
        };

        match self
            .condvar
            .wait_timeout_while(guard, duration, |_| !self.is_shutdown())
        {
            Ok((_, timeout_result)) => !timeout_result.timed_out(),
            Err(_) => true,
        }
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
