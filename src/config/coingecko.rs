use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::Serialize;

/// Query parameters for the `/coins/markets` endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MarketsQuery {
    pub vs_currency: &'static str,
    pub order: &'static str,
    pub per_page: u32,
    pub page: u32,
    pub sparkline: bool,
}

pub struct ClientDefaults {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: &'static str,
}

pub struct CoinGeckoConfig {
    pub markets_endpoint: &'static str,
    pub query: MarketsQuery,
    pub client: ClientDefaults,
}

pub const COINGECKO: CoinGeckoConfig = CoinGeckoConfig {
    markets_endpoint: "https://api.coingecko.com/api/v3/coins/markets",
    query: MarketsQuery {
        vs_currency: "usd",
        order: "market_cap_desc",
        per_page: 50,
        page: 1,
        sparkline: true,
    },
    client: ClientDefaults {
        // Keeps a hung request from holding the single in-flight slot forever.
        timeout: Duration::from_secs(30),
        connect_timeout: Duration::from_secs(10),
        user_agent: concat!("coin-pulse/", env!("CARGO_PKG_VERSION")),
    },
};

impl CoinGeckoConfig {
    /// Markets GET with the fixed query string attached.
    pub fn markets_request(&self, client: &Client) -> RequestBuilder {
        client.get(self.markets_endpoint).query(&self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markets_url_carries_fixed_query() {
        let request = COINGECKO
            .markets_request(&Client::new())
            .build()
            .unwrap();
        let url = request.url();
        assert_eq!(url.host_str(), Some("api.coingecko.com"));
        assert_eq!(url.path(), "/api/v3/coins/markets");
        assert_eq!(
            url.query(),
            Some("vs_currency=usd&order=market_cap_desc&per_page=50&page=1&sparkline=true")
        );
    }
}
