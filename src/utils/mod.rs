mod maths_utils;
mod time_utils;

pub use maths_utils::{remap, smooth_data, value_range};
pub use time_utils::{format_clock, format_duration};
