//! Wall-clock blind alerts for the terminal.

use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta};
use league_core::BlindAlerter;
use owo_colors::OwoColorize;
use tracing::{debug, warn};

use crate::shutdown::ShutdownSignal;

/// Receives the blind amount and the wall-clock time it was due
type Announce = Arc<dyn Fn(u32, DateTime<Local>) + Send + Sync>;

/// Fires each blind alert on its own thread once its delay has elapsed.
///
/// Pending alerts are dropped when the shared [`ShutdownSignal`] triggers.
pub struct TimerAlerter {
    shutdown: Arc<ShutdownSignal>,
    announce: Announce,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl TimerAlerter {
    /// Alerter that prints each blind to stdout.
    pub fn stdout(shutdown: Arc<ShutdownSignal>) -> Self {
        Self::with_announcer(shutdown, print_blind)
    }

    pub fn with_announcer<F>(shutdown: Arc<ShutdownSignal>, announce: F) -> Self
    where
        F: Fn(u32, DateTime<Local>) + Send + Sync + 'static,
    {
        Self {
            shutdown,
            announce: Arc::new(announce),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Wait for every alert thread to finish (fired or cancelled).
    pub fn join(self) {
        let handles = self
            .pending
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        for handle in handles {
            if handle.join().is_err() {
                warn!("Blind alert thread panicked");
            }
        }
    }
}

impl BlindAlerter for TimerAlerter {
    fn schedule_alert_at(&self, delay: Duration, amount: u32) {
        let shutdown = Arc::clone(&self.shutdown);
        let announce = Arc::clone(&self.announce);
        let now = Local::now();
        let due = TimeDelta::from_std(delay)
            .ok()
            .and_then(|delta| now.checked_add_signed(delta))
            .unwrap_or(now);

        let handle = thread::spawn(move || {
            if shutdown.wait(delay) {
                debug!("Blind {} cancelled", amount);
                return;
            }
            announce(amount, due);
        });

        match self.pending.lock() {
            Ok(mut pending) => pending.push(handle),
            Err(poisoned) => poisoned.into_inner().push(handle),
        }
    }
}

fn print_blind(amount: u32, due: DateTime<Local>) {
    println!("{}", format_blind(amount, due));
}

pub(crate) fn format_blind(amount: u32, due: DateTime<Local>) -> String {
    format!(
        "[{}] Blind is now {}",
        due.format("%H:%M:%S"),
        amount.bold().yellow()
    )
}
