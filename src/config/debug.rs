//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every fetch dispatch and the outcome token it resolves with.
    pub log_fetch_lifecycle: bool,

    /// Log triggers dropped by the single-flight guard.
    pub log_single_flight: bool,

    /// Log each poll schedule tick.
    pub log_schedule: bool,

    /// Log search box changes and the resulting row count.
    pub log_search: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetch_lifecycle: true,
    log_single_flight: true,
    log_schedule: false,
    log_search: false,
};
