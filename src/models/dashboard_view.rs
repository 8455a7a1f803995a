use chrono::{DateTime, Local};

use crate::config::DASHBOARD;
use crate::domain::AssetSnapshot;

/// Assets whose name or symbol contains `query`, ignoring case. Server order is kept.
pub fn filter_assets<'a>(assets: &'a [AssetSnapshot], query: &str) -> Vec<&'a AssetSnapshot> {
    let needle = query.to_lowercase();
    assets.iter().filter(|a| a.matches(&needle)).collect()
}

/// Leading `n` entries of an already-filtered list. Never re-ranks.
pub fn top_cards<'a, 'b>(rows: &'b [&'a AssetSnapshot], n: usize) -> &'b [&'a AssetSnapshot] {
    &rows[..rows.len().min(n)]
}

/// Everything one frame needs to draw the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardView<'a> {
    pub rows: Vec<&'a AssetSnapshot>,
    pub query: &'a str,
    /// No snapshot yet, or a foreground fetch is outstanding.
    pub show_loading_placeholder: bool,
    /// Foreground fetch outstanding.
    pub loading: bool,
    /// Background fetch outstanding. Never shows the placeholder.
    pub refreshing: bool,
    pub last_updated: Option<DateTime<Local>>,
}

impl<'a> DashboardView<'a> {
    pub fn cards(&self) -> &[&'a AssetSnapshot] {
        top_cards(&self.rows, DASHBOARD.top_cards)
    }

    /// Refresh is offered only while nothing is in flight.
    pub fn can_refresh(&self) -> bool {
        !self.loading && !self.refreshing
    }

    /// Rows for the table body. Empty while the placeholder is up.
    pub fn table_rows(&self) -> &[&'a AssetSnapshot] {
        if self.show_loading_placeholder {
            &[]
        } else {
            &self.rows
        }
    }
}
