mod cards;
mod sparkline;
mod styles;
mod table;
mod ui_config;
mod ui_render;
mod ui_text;
mod utils;

pub(crate) use styles::{DirectionColor, UiStyleExt};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use utils::setup_custom_visuals;

pub use sparkline::sparkline_points;
pub use utils::{format_pct, format_usd};
