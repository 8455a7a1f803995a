use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use web_time::Instant;

use coin_pulse::app::Commit;
use coin_pulse::domain::Sparkline;
use coin_pulse::{AssetSnapshot, Dashboard, FetchError, Fetcher, MarketSource};

const POLL: Duration = Duration::from_secs(45);
const WAIT: Duration = Duration::from_secs(5);

/// Hands out queued results in order; 503 once the script runs dry.
struct ScriptedSource {
    script: Mutex<VecDeque<Result<Vec<AssetSnapshot>, FetchError>>>,
}

impl ScriptedSource {
    fn new(script: Vec<Result<Vec<AssetSnapshot>, FetchError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
        })
    }
}

#[async_trait]
impl MarketSource for ScriptedSource {
    async fn fetch_markets(&self) -> Result<Vec<AssetSnapshot>, FetchError> {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(FetchError::Status(503)))
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}

fn asset(id: &str, name: &str, symbol: &str, price: f64, change: f64) -> AssetSnapshot {
    AssetSnapshot {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        image: format!("https://example.invalid/{id}.png"),
        current_price: price,
        price_change_percentage_24h: change,
        market_cap: price * 1_000_000.0,
        sparkline_in_7d: Sparkline {
            price: vec![price * 0.9, price * 1.1, price],
        },
    }
}

fn market(btc_price: f64) -> Vec<AssetSnapshot> {
    vec![
        asset("bitcoin", "Bitcoin", "btc", btc_price, 2.1),
        asset("ethereum", "Ethereum", "eth", 3200.0, -0.4),
        asset("tether", "Tether", "usdt", 1.0, 0.0),
        asset("binancecoin", "BNB", "bnb", 590.0, 1.3),
        asset("solana", "Solana", "sol", 145.0, -3.8),
    ]
}

fn dashboard(script: Vec<Result<Vec<AssetSnapshot>, FetchError>>, t0: Instant) -> Dashboard {
    let fetcher = Fetcher::new(ScriptedSource::new(script)).unwrap();
    Dashboard::with_interval(fetcher, POLL, t0)
}

fn simulated_network_error() -> FetchError {
    FetchError::Io(io::Error::new(io::ErrorKind::ConnectionReset, "simulated"))
}

#[test]
fn mount_load_then_background_refresh() {
    let t0 = Instant::now();
    let mut dash = dashboard(vec![Ok(market(64000.0)), Ok(market(65500.0))], t0);

    let view = dash.view();
    assert!(view.show_loading_placeholder);
    assert!(view.loading);
    assert!(view.table_rows().is_empty());

    assert_eq!(dash.wait_for_outcome(WAIT), Some(Commit::Applied));
    let view = dash.view();
    assert!(!view.show_loading_placeholder);
    assert_eq!(view.table_rows().len(), 5);
    let cards: Vec<_> = view.cards().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(cards, ["bitcoin", "ethereum", "tether"]);

    dash.tick(t0 + Duration::from_secs(44));
    assert!(dash.state().in_flight().is_none());

    dash.tick(t0 + POLL);
    let view = dash.view();
    assert!(view.refreshing, "timer should start a background refresh");
    assert!(!view.show_loading_placeholder);
    assert_eq!(view.table_rows()[0].current_price, 64000.0);

    assert_eq!(dash.wait_for_outcome(WAIT), Some(Commit::Applied));
    let view = dash.view();
    assert!(!view.refreshing);
    assert!(!view.show_loading_placeholder);
    assert_eq!(view.table_rows().len(), 5);
    assert_eq!(view.table_rows()[0].current_price, 65500.0);
    assert_eq!(view.table_rows()[1].current_price, 3200.0);
}

#[test]
fn manual_refresh_shows_placeholder_until_new_list_lands() {
    let t0 = Instant::now();
    let mut dash = dashboard(vec![Ok(market(64000.0)), Ok(market(63000.0))], t0);
    assert_eq!(dash.wait_for_outcome(WAIT), Some(Commit::Applied));

    assert!(dash.refresh());
    let view = dash.view();
    assert!(view.show_loading_placeholder);
    assert!(view.loading);
    assert!(!view.refreshing, "status stays live during a manual reload");
    assert!(view.table_rows().is_empty());

    assert_eq!(dash.wait_for_outcome(WAIT), Some(Commit::Applied));
    let view = dash.view();
    assert!(!view.show_loading_placeholder);
    assert_eq!(view.table_rows().len(), 5);
    assert_eq!(view.table_rows()[0].current_price, 63000.0);
}

#[test]
fn failed_refresh_keeps_previous_list() {
    let t0 = Instant::now();
    let mut dash = dashboard(vec![Ok(market(64000.0)), Err(simulated_network_error())], t0);
    assert_eq!(dash.wait_for_outcome(WAIT), Some(Commit::Applied));

    dash.tick(t0 + POLL);
    assert!(dash.view().refreshing);
    assert_eq!(dash.wait_for_outcome(WAIT), Some(Commit::Applied));

    let view = dash.view();
    assert!(!view.refreshing);
    assert!(view.can_refresh());
    assert_eq!(view.table_rows().len(), 5);
    assert_eq!(view.table_rows()[0].current_price, 64000.0);
}

#[test]
fn failed_first_fetch_leaves_placeholder_and_next_tick_recovers() {
    let t0 = Instant::now();
    let mut dash = dashboard(vec![Err(FetchError::Status(429)), Ok(market(1.0))], t0);
    assert_eq!(dash.wait_for_outcome(WAIT), Some(Commit::Applied));

    let view = dash.view();
    assert!(view.show_loading_placeholder);
    assert!(!view.loading && !view.refreshing);

    dash.tick(t0 + POLL);
    assert_eq!(dash.wait_for_outcome(WAIT), Some(Commit::Applied));
    assert_eq!(dash.view().table_rows().len(), 5);
}

#[test]
fn search_filters_rows_and_cards() {
    let t0 = Instant::now();
    let mut dash = dashboard(vec![Ok(market(64000.0))], t0);
    dash.wait_for_outcome(WAIT);

    dash.set_query("bit");
    let view = dash.view();
    let names: Vec<_> = view.table_rows().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Bitcoin"]);
    assert_eq!(view.cards().len(), 1);

    dash.set_query("SOL");
    assert_eq!(dash.view().table_rows()[0].id, "solana");

    dash.set_query("");
    assert_eq!(dash.view().table_rows().len(), 5);
}

#[test]
fn refresh_during_in_flight_request_is_ignored() {
    let t0 = Instant::now();
    let mut dash = dashboard(vec![Ok(market(1.0)), Ok(market(2.0))], t0);

    // Initial foreground fetch still holds the slot until committed.
    assert!(!dash.refresh());
    dash.wait_for_outcome(WAIT);

    dash.tick(t0 + POLL);
    assert!(!dash.refresh());
    assert!(!dash.view().can_refresh());
    assert_eq!(dash.wait_for_outcome(WAIT), Some(Commit::Applied));

    // Exactly two requests went out; nothing else is queued.
    assert_eq!(dash.wait_for_outcome(Duration::from_millis(200)), None);
    assert_eq!(dash.view().table_rows()[0].current_price, 2.0);
    assert!(dash.refresh());
}

#[test]
fn teardown_discards_in_flight_result_and_stops_timer() {
    let t0 = Instant::now();
    let mut dash = dashboard(vec![Ok(market(1.0)), Ok(market(2.0)), Ok(market(3.0))], t0);
    dash.wait_for_outcome(WAIT);

    dash.tick(t0 + POLL);
    dash.teardown();

    assert_eq!(dash.wait_for_outcome(WAIT), Some(Commit::Dead));
    assert_eq!(dash.view().table_rows()[0].current_price, 1.0);

    dash.tick(t0 + POLL * 10);
    assert!(dash.schedule().is_cancelled());
    assert_eq!(dash.next_poll_in(t0), None);
    assert!(!dash.refresh());
    assert_eq!(dash.wait_for_outcome(Duration::from_millis(200)), None);
}
