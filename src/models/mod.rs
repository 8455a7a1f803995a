mod dashboard_view;

pub use dashboard_view::{DashboardView, filter_assets, top_cards};
