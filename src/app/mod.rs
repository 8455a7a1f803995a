mod controller;
mod root;
mod schedule;
mod state;

pub use controller::Dashboard;
pub use schedule::PollSchedule;
pub use state::{Commit, DashboardState, Snapshot};

pub use root::App;
