//! Fleet-level aggregates
//!
//! Trip-independent summaries of a truck's cost profile, used by the
//! dashboard (`tqt fleet summary`).

use crate::core::costing::{CostingError, ESTIMATED_ANNUAL_KM};
use crate::entities::truck::TruckParameters;

/// Monthly fixed costs: annual amortization plus the other annual fixed
/// charges, spread over twelve months.
pub fn monthly_fixed_costs(truck: &TruckParameters) -> Result<f64, CostingError> {
    if truck.amortization_years <= 0.0 {
        return Err(CostingError::NonPositiveAmortization(
            truck.amortization_years,
        ));
    }
    Ok(truck.annual_fixed_costs() / 12.0)
}

/// Average cost per km under the standard-mileage assumption.
///
/// Fixed costs are annualized and divided by the standard mileage; the
/// distance-based variable rates are added directly. Food/lodging and
/// load/unload are time-based and have no per-km rate, so they are excluded.
pub fn average_cost_per_km(truck: &TruckParameters) -> Result<f64, CostingError> {
    if truck.amortization_years <= 0.0 {
        return Err(CostingError::NonPositiveAmortization(
            truck.amortization_years,
        ));
    }

    let fixed_per_km = truck.annual_fixed_costs() / ESTIMATED_ANNUAL_KM;
    let variable_per_km =
        truck.fuel_cost + truck.tires_cost + truck.toll_cost + truck.maintenance_cost;

    Ok(fixed_per_km + variable_per_km)
}
