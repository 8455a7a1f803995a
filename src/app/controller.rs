use std::time::Duration;

use web_time::Instant;

use crate::app::{Commit, DashboardState, PollSchedule};
use crate::config::POLLING;
use crate::data::{FetchKind, Fetcher};
use crate::models::DashboardView;

/// Binds the state container, the poll timer and the fetcher together.
///
/// Everything here runs on the UI thread; fetch results only reach the state
/// through `tick` (or `wait_for_outcome`).
pub struct Dashboard {
    state: DashboardState,
    schedule: PollSchedule,
    fetcher: Fetcher,
}

impl Dashboard {
    pub fn new(fetcher: Fetcher, now: Instant) -> Self {
        Self::with_interval(fetcher, POLLING.interval, now)
    }

    pub fn with_interval(fetcher: Fetcher, interval: Duration, now: Instant) -> Self {
        let mut dashboard = Self {
            state: DashboardState::new(),
            schedule: PollSchedule::new(interval, now),
            fetcher,
        };
        if POLLING.fetch_on_start {
            dashboard.start_fetch(FetchKind::Foreground);
        }
        dashboard
    }

    /// Commit finished fetches, then fire the timer if it is due.
    pub fn tick(&mut self, now: Instant) {
        for outcome in self.fetcher.drain() {
            self.state.apply(outcome);
        }
        if self.schedule.poll(now) {
            self.start_fetch(FetchKind::Background);
        }
    }

    /// User-triggered refresh. False if dropped by the single-flight guard.
    pub fn refresh(&mut self) -> bool {
        self.start_fetch(FetchKind::Foreground)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.on_search_change(query);
    }

    fn start_fetch(&mut self, kind: FetchKind) -> bool {
        match self.state.begin_fetch(kind) {
            Some(ticket) => {
                self.fetcher.dispatch(ticket);
                true
            }
            None => false,
        }
    }

    /// Block for the next fetch result and commit it.
    pub fn wait_for_outcome(&mut self, timeout: Duration) -> Option<Commit> {
        let outcome = self.fetcher.recv_timeout(timeout)?;
        Some(self.state.apply(outcome))
    }

    /// Cancel the timer and stop accepting results. A request already in
    /// flight still runs to completion; its result is discarded.
    pub fn teardown(&mut self) {
        if self.state.is_alive() {
            log::info!("Dashboard teardown");
        }
        self.schedule.cancel();
        self.state.teardown();
    }

    pub fn view(&self) -> DashboardView<'_> {
        self.state.view()
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn next_poll_in(&self, now: Instant) -> Option<Duration> {
        self.schedule.time_until_next(now)
    }

    pub fn schedule(&self) -> &PollSchedule {
        &self.schedule
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        self.teardown();
    }
}
