pub mod chart;
pub mod chart_geometry;
pub mod dashboard;
pub mod year_selector;

pub use dashboard::SalesOverviewDashboard;
