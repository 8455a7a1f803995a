// src/app/state.rs

use chrono::{DateTime, Local};

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::data::{FetchError, FetchKind, FetchOutcome, FetchTicket, RequestToken};
use crate::domain::AssetSnapshot;
use crate::models::{DashboardView, filter_assets};

/// One full replacement of the asset list.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub assets: Vec<AssetSnapshot>,
    pub received_at: DateTime<Local>,
}

/// What happened to a fetch result handed back to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Applied,
    /// Token does not match the request in flight.
    Stale,
    /// Dashboard already torn down.
    Dead,
}

/// All mutable dashboard state. Only the transition methods below touch it.
#[derive(Debug)]
pub struct DashboardState {
    snapshot: Option<Snapshot>,
    query: String,
    in_flight: Option<FetchTicket>,
    next_token: u64,
    alive: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            snapshot: None,
            query: String::new(),
            in_flight: None,
            next_token: 1,
            alive: true,
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the single in-flight slot. `None` if a request is already
    /// outstanding or the dashboard is gone; the trigger is then dropped.
    pub fn begin_fetch(&mut self, kind: FetchKind) -> Option<FetchTicket> {
        if !self.alive {
            return None;
        }
        if let Some(_current) = self.in_flight {
            #[cfg(debug_assertions)]
            if DF.log_single_flight {
                log::info!(
                    "Ignoring {} fetch: #{} ({}) still in flight",
                    kind,
                    _current.token.0,
                    _current.kind
                );
            }
            return None;
        }

        let ticket = FetchTicket {
            token: RequestToken(self.next_token),
            kind,
        };
        self.next_token += 1;
        self.in_flight = Some(ticket);
        Some(ticket)
    }

    pub fn on_fetch_success(&mut self, token: RequestToken, assets: Vec<AssetSnapshot>) -> Commit {
        let commit = self.settle(token);
        if commit == Commit::Applied {
            #[cfg(debug_assertions)]
            if DF.log_fetch_lifecycle {
                log::info!("Fetch #{} landed with {} assets", token.0, assets.len());
            }
            self.snapshot = Some(Snapshot {
                assets,
                received_at: Local::now(),
            });
        }
        commit
    }

    /// The previous snapshot, if any, stays on screen.
    pub fn on_fetch_error(&mut self, token: RequestToken, error: &FetchError) -> Commit {
        let commit = self.settle(token);
        match commit {
            Commit::Applied => log::error!("Error fetching market data: {}", error),
            Commit::Stale | Commit::Dead => {
                log::warn!("Discarding failed fetch #{} ({:?}): {}", token.0, commit, error)
            }
        }
        commit
    }

    pub fn apply(&mut self, outcome: FetchOutcome) -> Commit {
        let token = outcome.ticket.token;
        match outcome.result {
            Ok(assets) => self.on_fetch_success(token, assets),
            Err(e) => self.on_fetch_error(token, &e),
        }
    }

    pub fn on_search_change(&mut self, query: impl Into<String>) {
        self.query = query.into();
        #[cfg(debug_assertions)]
        if DF.log_search {
            log::info!("Search '{}' -> {} rows", self.query, self.view().rows.len());
        }
    }

    /// After this nothing commits and no fetch may start.
    pub fn teardown(&mut self) {
        self.alive = false;
    }

    fn settle(&mut self, token: RequestToken) -> Commit {
        if !self.alive {
            return Commit::Dead;
        }
        match self.in_flight {
            Some(ticket) if ticket.token == token => {
                self.in_flight = None;
                Commit::Applied
            }
            _ => Commit::Stale,
        }
    }

    pub fn view(&self) -> DashboardView<'_> {
        let assets = self
            .snapshot
            .as_ref()
            .map(|s| s.assets.as_slice())
            .unwrap_or_default();
        DashboardView {
            rows: filter_assets(assets, &self.query),
            query: &self.query,
            show_loading_placeholder: self.snapshot.is_none() || self.is_loading(),
            loading: self.is_loading(),
            refreshing: self.is_refreshing(),
            last_updated: self.snapshot.as_ref().map(|s| s.received_at),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn in_flight(&self) -> Option<FetchTicket> {
        self.in_flight
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Startup or user-triggered fetch outstanding. The table body is
    /// replaced by the placeholder even if a snapshot exists.
    pub fn is_loading(&self) -> bool {
        self.in_flight_kind() == Some(FetchKind::Foreground)
    }

    /// Timer-driven fetch outstanding. Old rows stay visible.
    pub fn is_refreshing(&self) -> bool {
        self.in_flight_kind() == Some(FetchKind::Background)
    }

    fn in_flight_kind(&self) -> Option<FetchKind> {
        self.in_flight.map(|t| t.kind)
    }
}
