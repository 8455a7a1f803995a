use serde::Deserialize;
use strum_macros::Display;

/// Direction of the 24h move. Zero counts as down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Trend {
    #[strum(to_string = "up")]
    Up,
    #[strum(to_string = "down")]
    Down,
}

impl Trend {
    pub fn from_change_pct(change_pct: f64) -> Self {
        if change_pct > 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

/// 7-day price samples, oldest first.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Sparkline {
    pub price: Vec<f64>,
}

/// One row of the markets response. Every field is required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssetSnapshot {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub current_price: f64,
    pub price_change_percentage_24h: f64,
    pub market_cap: f64,
    pub sparkline_in_7d: Sparkline,
}

impl AssetSnapshot {
    pub fn trend(&self) -> Trend {
        Trend::from_change_pct(self.price_change_percentage_24h)
    }

    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }

    pub fn sparkline(&self) -> &[f64] {
        &self.sparkline_in_7d.price
    }

    /// Case-insensitive substring match on name or symbol.
    /// `needle_lower` must already be lowercase.
    pub fn matches(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self.name.to_lowercase().contains(needle_lower)
            || self.symbol.to_lowercase().contains(needle_lower)
    }
}
