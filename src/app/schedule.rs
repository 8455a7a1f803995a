use std::time::Duration;

use web_time::Instant;

#[cfg(debug_assertions)]
use crate::config::DF;

/// Fixed-cadence timer driven from the frame loop. Cancelled at teardown.
#[derive(Debug, Clone)]
pub struct PollSchedule {
    interval: Duration,
    next_due: Instant,
    cancelled: bool,
    ticks: u64,
}

impl PollSchedule {
    /// First tick is one `interval` after `start`.
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            next_due: start + interval,
            cancelled: false,
            ticks: 0,
        }
    }

    /// True at most once per interval. Missed ticks are not replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.cancelled || now < self.next_due {
            return false;
        }

        self.next_due += self.interval;
        if self.next_due <= now {
            // Frame loop stalled for more than a full interval.
            self.next_due = now + self.interval;
        }
        self.ticks += 1;

        #[cfg(debug_assertions)]
        if DF.log_schedule {
            log::info!("Poll tick #{}", self.ticks);
        }
        true
    }

    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if self.cancelled {
            return None;
        }
        Some(self.next_due.saturating_duration_since(now))
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
