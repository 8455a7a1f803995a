use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use anyhow::{Context, Result};
use strum_macros::Display;
use tokio::runtime::{Builder, Runtime};

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::data::{FetchError, MarketSource};
use crate::domain::AssetSnapshot;

/// Why a fetch was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FetchKind {
    /// Startup or user click.
    #[strum(to_string = "foreground")]
    Foreground,
    /// Poll timer.
    #[strum(to_string = "background")]
    Background,
}

/// Monotonic id for one dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: RequestToken,
    pub kind: FetchKind,
}

#[derive(Debug)]
pub struct FetchOutcome {
    pub ticket: FetchTicket,
    pub result: Result<Vec<AssetSnapshot>, FetchError>,
}

type Waker = Arc<dyn Fn() + Send + Sync>;

/// Runs market requests off the UI thread.
///
/// Each dispatched ticket produces exactly one `FetchOutcome` on the channel.
/// The fetcher itself does not guard against overlap; callers hand it tickets
/// from `DashboardState::begin_fetch`, which does.
pub struct Fetcher {
    runtime: Runtime,
    source: Arc<dyn MarketSource>,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
    waker: Option<Waker>,
}

impl Fetcher {
    pub fn new(source: Arc<dyn MarketSource>) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("market-fetch")
            .enable_all()
            .build()
            .context("failed to create fetch runtime")?;
        let (tx, rx) = mpsc::channel();

        log::info!("Market source: {}", source.describe());

        Ok(Self {
            runtime,
            source,
            tx,
            rx,
            waker: None,
        })
    }

    /// Called after every outcome is queued, e.g. to request a repaint.
    pub fn with_waker(mut self, waker: impl Fn() + Send + Sync + 'static) -> Self {
        self.waker = Some(Arc::new(waker));
        self
    }

    pub fn dispatch(&self, ticket: FetchTicket) {
        #[cfg(debug_assertions)]
        if DF.log_fetch_lifecycle {
            log::info!("Dispatching {} fetch #{}", ticket.kind, ticket.token.0);
        }

        let source = self.source.clone();
        let tx = self.tx.clone();
        let waker = self.waker.clone();

        self.runtime.spawn(async move {
            let result = source.fetch_markets().await;
            // Receiver gone means the dashboard was dropped; nothing to report to.
            if tx.send(FetchOutcome { ticket, result }).is_ok() {
                if let Some(wake) = waker {
                    wake();
                }
            }
        });
    }

    /// Everything that has completed since the last call, in completion order.
    pub fn drain(&self) -> Vec<FetchOutcome> {
        self.rx.try_iter().collect()
    }

    /// Block until the next outcome arrives or `timeout` passes.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<FetchOutcome> {
        self.rx.recv_timeout(timeout).ok()
    }
}
