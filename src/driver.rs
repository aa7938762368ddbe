//! Animation driver: the repeating timer behind the dance.
//!
//! The driver only decides *when* a tick happens. The event loop awaits
//! [`AnimationDriver::next_tick`] next to its other event sources and calls
//! [`crate::AnimationState::tick`] itself, so ticks and user input are
//! handled one at a time on the same task.

use std::time::Duration;

use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::debug;

/// A live timer with its period.
#[derive(Debug)]
struct Schedule {
    interval: Interval,
    period: Duration,
}

impl Schedule {
    fn new(period: Duration) -> Self {
        // First tick one full period from now, not immediately.
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval, period }
    }
}

/// Schedules ticks while running. Dropping it cancels any pending tick.
#[derive(Debug, Default)]
pub struct AnimationDriver {
    schedule: Option<Schedule>,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.schedule.is_some()
    }

    /// Period of the running timer.
    pub fn period(&self) -> Option<Duration> {
        self.schedule.as_ref().map(|s| s.period)
    }

    /// Start ticking every `period`. Restarts the timer if already running.
    pub fn start(&mut self, period: Duration) {
        debug!("Driver started with period {}ms", period.as_millis());
        self.schedule = Some(Schedule::new(period));
    }

    /// Cancel the timer. No tick is delivered after this returns.
    pub fn stop(&mut self) {
        if self.schedule.take().is_some() {
            debug!("Driver stopped");
        }
    }

    /// Change the period. A running timer is replaced, a stopped one stays
    /// stopped.
    pub fn set_period(&mut self, period: Duration) {
        match &self.schedule {
            Some(schedule) if schedule.period == period => {}
            Some(_) => {
                debug!("Driver rescheduled to {}ms", period.as_millis());
                self.schedule = Some(Schedule::new(period));
            }
            None => {}
        }
    }

    /// Wait for the next tick. Never resolves while stopped.
    ///
    /// Cancel-safe: dropping the future before it resolves loses no tick.
    pub async fn next_tick(&mut self) {
        match &mut self.schedule {
            Some(schedule) => {
                schedule.interval.tick().await;
            }
            None => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, task};

    const PERIOD: Duration = Duration::from_millis(700);

    #[test]
    fn test_stopped_driver_never_ticks() {
        let mut driver = AnimationDriver::new();
        assert!(!driver.is_running());
        let mut tick = task::spawn(driver.next_tick());
        assert_pending!(tick.poll());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_every_period() {
        let mut driver = AnimationDriver::new();
        let started = Instant::now();
        driver.start(PERIOD);

        for n in 1..=3u32 {
            driver.next_tick().await;
            assert_eq!(Instant::now() - started, PERIOD * n);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_pending_tick() {
        let mut driver = AnimationDriver::new();
        driver.start(PERIOD);
        driver.next_tick().await;
        driver.stop();

        let waited = time::timeout(PERIOD * 10, driver.next_tick()).await;
        assert!(waited.is_err());
        assert_eq!(driver.period(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_uses_new_period() {
        let mut driver = AnimationDriver::new();
        driver.start(PERIOD);
        time::advance(Duration::from_millis(300)).await;

        let fast = Duration::from_millis(100);
        driver.set_period(fast);
        assert_eq!(driver.period(), Some(fast));

        let rescheduled = Instant::now();
        driver.next_tick().await;
        assert_eq!(Instant::now() - rescheduled, fast);
        driver.next_tick().await;
        assert_eq!(Instant::now() - rescheduled, fast * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_period_while_stopped_stays_stopped() {
        let mut driver = AnimationDriver::new();
        driver.set_period(PERIOD);
        assert!(!driver.is_running());

        driver.start(PERIOD);
        driver.set_period(PERIOD);
        assert_eq!(driver.period(), Some(PERIOD));
    }
}
