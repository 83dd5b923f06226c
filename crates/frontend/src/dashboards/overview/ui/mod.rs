mod dashboard;
mod stat_card;

pub use dashboard::OverviewDashboard;
