//! Core module - the calculation engine and project storage

pub mod costing;
pub mod fleet;
pub mod pricing;
pub mod project;

pub use costing::{calculate_cost_breakdown, CostingError, ESTIMATED_ANNUAL_KM};
pub use fleet::{average_cost_per_km, monthly_fixed_costs};
pub use pricing::{calculate_quote, DEFAULT_MARGIN_RATE};
pub use project::{Project, ProjectConfig, ProjectError};
