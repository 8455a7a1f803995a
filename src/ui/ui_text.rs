use std::sync::LazyLock;

pub const ICON_SEARCH: &str = "🔍";
pub const ICON_REFRESH: &str = "🔄";
pub const ICON_TREND: &str = "📈";
pub const ICON_UP: &str = "▲";
pub const ICON_DOWN: &str = "▼";
pub const ICON_PULSE: &str = "⏳";

pub struct UiText {
    pub app_title: String,
    pub status_live: String,
    pub status_updating: String,
    pub search_hint: String,
    pub button_refresh: String,
    pub hover_refresh_busy: String,
    pub label_updated: String,
    pub label_next_refresh: String,
    pub card_trend_suffix: String,

    // --- Table ---
    pub table_loading: String,

    // --- Footer ---
    pub footer_attribution: String,
    pub footer_tagline: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Coin Pulse".to_string(),
    status_live: "LIVE MARKET".to_string(),
    status_updating: "UPDATING CHARTS...".to_string(),
    search_hint: format!("{} Search assets...", ICON_SEARCH),
    button_refresh: format!("{} Refresh", ICON_REFRESH),
    hover_refresh_busy: "A refresh is already in progress".to_string(),
    label_updated: "Updated".to_string(),
    label_next_refresh: "next refresh in".to_string(),
    card_trend_suffix: "TREND".to_string(),

    table_loading: format!("{} LOADING MARKET CHARTS...", ICON_PULSE),

    footer_attribution: "Market data provided by CoinGecko".to_string(),
    footer_tagline: "LIVE ANALYTICAL DASHBOARD • POWERED BY COINGECKO".to_string(),
});
