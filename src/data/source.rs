use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::COINGECKO;
use crate::data::{FetchError, decode_markets};
use crate::domain::AssetSnapshot;

/// Abstract interface for fetching one markets snapshot.
#[async_trait]
pub trait MarketSource: Send + Sync {
    async fn fetch_markets(&self) -> Result<Vec<AssetSnapshot>, FetchError>;

    /// Short label for logs.
    fn describe(&self) -> String;
}

pub struct CoinGeckoSource {
    client: Client,
}

impl CoinGeckoSource {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(COINGECKO.client.timeout)
            .connect_timeout(COINGECKO.client.connect_timeout)
            .user_agent(COINGECKO.client.user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl MarketSource for CoinGeckoSource {
    async fn fetch_markets(&self) -> Result<Vec<AssetSnapshot>, FetchError> {
        let response = COINGECKO.markets_request(&self.client).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        decode_markets(&body)
    }

    fn describe(&self) -> String {
        COINGECKO.markets_endpoint.to_string()
    }
}

/// Reads a markets body from disk. Re-read on every fetch so edits show up on the next tick.
pub struct FixtureSource {
    path: PathBuf,
}

impl FixtureSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MarketSource for FixtureSource {
    async fn fetch_markets(&self) -> Result<Vec<AssetSnapshot>, FetchError> {
        let body = tokio::fs::read(&self.path).await?;
        decode_markets(&body)
    }

    fn describe(&self) -> String {
        format!("fixture {}", self.path.display())
    }
}
