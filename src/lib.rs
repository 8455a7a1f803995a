#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::{App, Dashboard};
pub use data::{CoinGeckoSource, FetchError, Fetcher, FixtureSource, MarketSource};
pub use domain::AssetSnapshot;

use std::path::PathBuf;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read market data from a local JSON file (same shape as the CoinGecko markets response)
    #[arg(long, value_name = "FILE")]
    pub fixture: Option<PathBuf>,
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<App> {
    App::new(cc, args)
}
