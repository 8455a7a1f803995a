mod decode;
mod error;
mod fetcher;
mod source;

pub use {
    decode::decode_markets,
    error::FetchError,
    fetcher::{FetchKind, FetchOutcome, FetchTicket, Fetcher, RequestToken},
    source::{CoinGeckoSource, FixtureSource, MarketSource},
};
