// Domain types and value objects
mod asset;

pub use asset::{AssetSnapshot, Sparkline, Trend};
