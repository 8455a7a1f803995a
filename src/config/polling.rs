use std::time::Duration;

pub struct PollingConfig {
    /// Gap between background refreshes.
    pub interval: Duration,
    /// Fetch immediately when the dashboard opens.
    pub fetch_on_start: bool,
}

pub const POLLING: PollingConfig = PollingConfig {
    interval: Duration::from_secs(45),
    fetch_on_start: true,
};
