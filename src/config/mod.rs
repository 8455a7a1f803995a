//! Configuration module for the dashboard.

// Can all be private now because we have a public re-export.
mod coingecko;
mod dashboard;
mod debug;
mod polling;

// Re-export commonly used items
pub use coingecko::{COINGECKO, CoinGeckoConfig, MarketsQuery};
pub use dashboard::{DASHBOARD, DashboardConfig};
pub use debug::DF;
pub use polling::POLLING;
