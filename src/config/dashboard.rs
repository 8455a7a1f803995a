//! Layout and colour settings for the dashboard view.

use eframe::egui::Color32;

pub struct SparklineConfig {
    pub card_height: f32,
    pub row_width: f32,
    pub row_height: f32,
    pub stroke_width: f32,
    /// Centred moving-average window for table rows (odd).
    pub row_smoothing_window: usize,
    /// Vertical padding as a fraction of the sample range.
    pub y_padding_pct: f64,
}

pub struct DashboardColors {
    pub background: Color32,
    pub panel: Color32,
    pub card: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_subdued: Color32,
    pub accent: Color32,
    pub trend_up: Color32,
    pub trend_down: Color32,
    pub status_live: Color32,
    pub status_updating: Color32,
}

pub struct DashboardConfig {
    pub top_cards: usize,
    /// Below this width the cards stack vertically.
    pub cards_breakpoint: f32,
    /// Below this width the market-cap column is hidden.
    pub market_cap_breakpoint: f32,
    pub search_width: f32,
    pub row_height: f32,
    pub icon_size: f32,
    pub sparkline: SparklineConfig,
    pub colors: DashboardColors,
}

pub const DASHBOARD: DashboardConfig = DashboardConfig {
    top_cards: 3,
    cards_breakpoint: 768.0,
    market_cap_breakpoint: 1024.0,
    search_width: 320.0,
    row_height: 56.0,
    icon_size: 28.0,
    sparkline: SparklineConfig {
        card_height: 64.0,
        row_width: 160.0,
        row_height: 40.0,
        stroke_width: 2.0,
        row_smoothing_window: 5,
        y_padding_pct: 0.05,
    },
    colors: DashboardColors {
        background: Color32::from_rgb(2, 6, 23),
        panel: Color32::from_rgb(15, 23, 42),
        card: Color32::from_rgb(17, 24, 39),
        border: Color32::from_rgb(30, 41, 59),
        text_primary: Color32::WHITE,
        text_subdued: Color32::from_rgb(100, 116, 139),
        accent: Color32::from_rgb(37, 99, 235),
        trend_up: Color32::from_rgb(16, 185, 129),
        trend_down: Color32::from_rgb(239, 68, 68),
        status_live: Color32::from_rgb(34, 197, 94),
        status_updating: Color32::from_rgb(250, 204, 21),
    },
};
