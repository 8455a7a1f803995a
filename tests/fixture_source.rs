use std::path::PathBuf;
use std::time::Duration;

use web_time::Instant;

use coin_pulse::app::Commit;
use coin_pulse::{Dashboard, Fetcher, FixtureSource, MarketSource};

const MARKETS: &str = r#"[
  {
    "id": "bitcoin", "symbol": "btc", "name": "Bitcoin",
    "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
    "current_price": 67012.5, "market_cap": 1320000000000,
    "price_change_percentage_24h": 1.75,
    "sparkline_in_7d": { "price": [65000.0, 66000.0, 67012.5] }
  },
  {
    "id": "ethereum", "symbol": "eth", "name": "Ethereum",
    "image": "https://assets.coingecko.com/coins/images/279/large/ethereum.png",
    "current_price": 3201.4, "market_cap": 385000000000,
    "price_change_percentage_24h": 0,
    "sparkline_in_7d": { "price": [3300.0, 3250.0, 3201.4] }
  }
]"#;

fn write_fixture(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("coin_pulse_{}_{}.json", name, std::process::id()));
    std::fs::write(&path, body).unwrap();
    path
}

#[tokio::test]
async fn reads_markets_from_disk() {
    let path = write_fixture("ok", MARKETS);
    let assets = FixtureSource::new(&path).fetch_markets().await.unwrap();

    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].display_symbol(), "BTC");
    assert_eq!(assets[1].price_change_percentage_24h, 0.0);
    assert_eq!(assets[1].trend().to_string(), "down");
    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn truncated_body_is_malformed() {
    let path = write_fixture("truncated", &MARKETS[..MARKETS.len() / 2]);
    let err = FixtureSource::new(&path).fetch_markets().await.unwrap_err();

    assert!(err.is_malformed(), "{err}");
    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn missing_file_is_io_error() {
    let err = FixtureSource::new("/definitely/not/here.json")
        .fetch_markets()
        .await
        .unwrap_err();
    assert!(matches!(err, coin_pulse::FetchError::Io(_)));
}

#[test]
fn dashboard_boots_from_fixture() {
    let path = write_fixture("dashboard", MARKETS);
    let fetcher = Fetcher::new(std::sync::Arc::new(FixtureSource::new(&path))).unwrap();
    let mut dash = Dashboard::with_interval(fetcher, Duration::from_secs(45), Instant::now());

    assert_eq!(dash.wait_for_outcome(Duration::from_secs(5)), Some(Commit::Applied));
    let view = dash.view();
    assert_eq!(view.table_rows().len(), 2);
    assert_eq!(view.cards().len(), 2);
    std::fs::remove_file(path).ok();
}
