//! Fixed-interval refresh for polling host loops.

use std::time::{Duration, Instant};

use crate::config::IndicatorConfig;

#[derive(Debug, Clone, Copy)]
pub struct RefreshTimer {
    interval: Duration,
    last_fired: Option<Instant>,
}

impl RefreshTimer {
    /// Intervals below one second are raised to one second.
    pub fn new(interval: Duration) -> Self {
        Self { interval: interval.max(Duration::from_secs(1)), last_fired: None }
    }

    pub fn from_config(config: &IndicatorConfig) -> Self {
        Self::new(config.update_interval())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start counting from `now` without firing.
    pub fn start(&mut self, now: Instant) {
        self.last_fired = Some(now);
    }

    /// True once per elapsed interval. An unstarted timer fires immediately.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = match self.last_fired {
            Some(last) => now.saturating_duration_since(last) >= self.interval,
            None => true,
        };
        if due {
            self.last_fired = Some(now);
        }
        due
    }

    /// Time left until the next tick, for use as an input poll timeout.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last_fired {
            Some(last) => self.interval.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_second_interval_is_clamped() {
        let timer = RefreshTimer::new(Duration::from_millis(200));
        assert_eq!(timer.interval(), Duration::from_secs(1));
    }

    #[test]
    fn fires_once_per_interval() {
        let t0 = Instant::now();
        let mut timer = RefreshTimer::new(Duration::from_secs(2));
        timer.start(t0);

        assert!(!timer.poll(t0 + Duration::from_millis(1_999)));
        assert!(timer.poll(t0 + Duration::from_secs(2)));
        assert!(!timer.poll(t0 + Duration::from_secs(3)));
        assert!(timer.poll(t0 + Duration::from_secs(4)));
    }

    #[test]
    fn unstarted_timer_fires_immediately() {
        let mut timer = RefreshTimer::new(Duration::from_secs(5));
        assert!(timer.poll(Instant::now()));
    }

    #[test]
    fn remaining_counts_down() {
        let t0 = Instant::now();
        let mut timer = RefreshTimer::from_config(&IndicatorConfig::default());
        timer.start(t0);
        assert_eq!(timer.remaining(t0 + Duration::from_millis(400)), Duration::from_millis(600));
        assert_eq!(timer.remaining(t0 + Duration::from_secs(3)), Duration::ZERO);
    }
}
