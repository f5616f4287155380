pub mod chart_mode;

pub use chart_mode::ChartMode;
