//! Fetch scoping: query parameters and the dashboard filter reducer

mod params;
mod state;

pub use params::StatsQuery;
pub use state::{DashboardFilters, FilterAction};
