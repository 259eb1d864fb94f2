//! Blind level schedule and alert dispatch.

use std::time::Duration;

use tracing::debug;

/// Time between blind increases
pub const BLIND_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// A blind amount and when it takes effect, relative to the start of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlindLevel {
    pub delay: Duration,
    pub amount: u32,
}

const fn level(step: u64, amount: u32) -> BlindLevel {
    BlindLevel {
        delay: Duration::from_secs(step * BLIND_INTERVAL.as_secs()),
        amount,
    }
}

/// Blind levels for a single game, in firing order
pub const BLIND_SCHEDULE: [BlindLevel; 11] = [
    level(0, 100),
    level(1, 200),
    level(2, 300),
    level(3, 400),
    level(4, 500),
    level(5, 600),
    level(6, 800),
    level(7, 1000),
    level(8, 2000),
    level(9, 4000),
    level(10, 8000),
];

/// Timer abstraction used to announce blind levels.
///
/// Implementations must return immediately; delivery after `delay` is
/// entirely their responsibility.
pub trait BlindAlerter {
    fn schedule_alert_at(&self, delay: Duration, amount: u32);
}

impl<F> BlindAlerter for F
where
    F: Fn(Duration, u32),
{
    fn schedule_alert_at(&self, delay: Duration, amount: u32) {
        self(delay, amount)
    }
}

/// Dispatch every level of [`BLIND_SCHEDULE`] to `alerter`, in order.
pub fn schedule_blind_alerts(alerter: &dyn BlindAlerter) {
    for level in &BLIND_SCHEDULE {
        debug!(
            "Scheduling blind {} at +{}s",
            level.amount,
            level.delay.as_secs()
        );
        alerter.schedule_alert_at(level.delay, level.amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct SpyAlerter {
        alerts: RefCell<Vec<(Duration, u32)>>,
    }

    impl BlindAlerter for SpyAlerter {
        fn schedule_alert_at(&self, delay: Duration, amount: u32) {
            self.alerts.borrow_mut().push((delay, amount));
        }
    }

    #[test]
    fn test_schedules_all_levels() {
        let spy = SpyAlerter::default();
        schedule_blind_alerts(&spy);

        let alerts = spy.alerts.into_inner();
        assert_eq!(alerts.len(), 11);
        assert_eq!(alerts[0], (Duration::ZERO, 100));
        assert_eq!(alerts[10], (Duration::from_secs(100 * 60), 8000));
    }

    #[test]
    fn test_delays_step_by_ten_minutes() {
        let spy = SpyAlerter::default();
        schedule_blind_alerts(&spy);

        let alerts = spy.alerts.into_inner();
        for pair in alerts.windows(2) {
            assert!(pair[1].0 > pair[0].0);
            assert_eq!(pair[1].0 - pair[0].0, Duration::from_secs(600));
        }
    }

    #[test]
    fn test_amounts_follow_table() {
        let spy = SpyAlerter::default();
        schedule_blind_alerts(&spy);

        let amounts: Vec<u32> = spy.alerts.into_inner().iter().map(|a| a.1).collect();
        assert_eq!(
            amounts,
            vec![100, 200, 300, 400, 500, 600, 800, 1000, 2000, 4000, 8000]
        );
    }

    #[test]
    fn test_closure_alerter() {
        let calls = RefCell::new(0);
        schedule_blind_alerts(&|_delay: Duration, _amount: u32| *calls.borrow_mut() += 1);
        assert_eq!(calls.into_inner(), 11);
    }
}
