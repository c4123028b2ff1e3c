//! Per-trip costing engine
//!
//! Converts a truck's annual and per-unit cost bases into the itemized cost
//! of a single trip. Annual fixed costs are allocated to trips by distance
//! under a standard-mileage assumption; variable costs scale directly with
//! distance, duration, or load/unload time.

use miette::Diagnostic;
use thiserror::Error;

use crate::entities::quote::{CostBreakdownItem, CostCategory};
use crate::entities::trip::{RoadType, Trip};
use crate::entities::truck::TruckParameters;

/// Standard annual mileage assumed for a commercial truck. Amortization base
/// for all annual fixed costs.
pub const ESTIMATED_ANNUAL_KM: f64 = 100_000.0;

/// Working hours counted as one day of food and lodging
pub const WORKING_HOURS_PER_DAY: f64 = 8.0;

/// Breakdown labels, in display order. Quote tables and CSV exports rely on
/// these staying stable.
pub const LABEL_AMORTIZATION: &str = "Ammortamento camion";
pub const LABEL_INSURANCE: &str = "Assicurazione";
pub const LABEL_ROAD_TAX: &str = "Bollo";
pub const LABEL_INSPECTION: &str = "Revisione";
pub const LABEL_TACHOGRAPH: &str = "Cronotachigrafo";
pub const LABEL_FUEL: &str = "Gasolio";
pub const LABEL_TIRES: &str = "Pneumatici";
pub const LABEL_TOLLS: &str = "Pedaggi";
pub const LABEL_FOOD_LODGING: &str = "Vitto e alloggio";
pub const LABEL_LOAD_UNLOAD: &str = "Carico/scarico";
pub const LABEL_MAINTENANCE: &str = "Manutenzioni";

/// Errors from the costing and pricing engine.
///
/// The engine fails fast on divisors that would otherwise propagate
/// non-finite values into persisted quotes.
#[derive(Debug, Error, Diagnostic)]
pub enum CostingError {
    #[error("amortization period must be positive, got {0} years")]
    #[diagnostic(
        code(tqt::costing::amortization_years),
        help("set a positive amortization period with `tqt truck set --amortization-years <YEARS>`")
    )]
    NonPositiveAmortization(f64),

    #[error("trip distance must be positive, got {0} km")]
    #[diagnostic(
        code(tqt::costing::distance),
        help("distance is user-supplied; pass a positive --distance")
    )]
    NonPositiveDistance(f64),
}

/// Share of an annual cost attributable to `distance` km of driving
fn annual_share(annual: f64, distance: f64) -> f64 {
    annual / ESTIMATED_ANNUAL_KM * distance
}

/// Amortization cost for a trip of the given distance
pub fn amortization_cost(truck: &TruckParameters, distance: f64) -> f64 {
    annual_share(truck.annual_amortization(), distance)
}

/// Insurance cost allocated to a trip
pub fn insurance_cost(truck: &TruckParameters, distance: f64) -> f64 {
    annual_share(truck.insurance, distance)
}

/// Road tax allocated to a trip
pub fn road_tax_cost(truck: &TruckParameters, distance: f64) -> f64 {
    annual_share(truck.road_tax, distance)
}

/// Inspection fee allocated to a trip
pub fn inspection_cost(truck: &TruckParameters, distance: f64) -> f64 {
    annual_share(truck.inspection, distance)
}

/// Tachograph fee allocated to a trip
pub fn tachograph_cost(truck: &TruckParameters, distance: f64) -> f64 {
    annual_share(truck.tachograph, distance)
}

/// Fuel cost over a trip
pub fn fuel_cost(truck: &TruckParameters, distance: f64) -> f64 {
    truck.fuel_cost * distance
}

/// Tire wear cost over a trip
pub fn tires_cost(truck: &TruckParameters, distance: f64) -> f64 {
    truck.tires_cost * distance
}

/// Maintenance cost over a trip
pub fn maintenance_cost(truck: &TruckParameters, distance: f64) -> f64 {
    truck.maintenance_cost * distance
}

/// Toll cost over a trip, scaled by the road type's toll multiplier
pub fn toll_cost(truck: &TruckParameters, distance: f64, road_type: RoadType) -> f64 {
    truck.toll_cost * distance * road_type.toll_multiplier()
}

/// Food and lodging cost for a trip of the given duration.
///
/// Day-granular: any duration up to 8 h counts as one day, 8–16 h as two,
/// and so on. No partial-day proration.
pub fn food_lodging_cost(truck: &TruckParameters, hours: f64) -> f64 {
    let days = (hours / WORKING_HOURS_PER_DAY).ceil();
    truck.food_lodging_cost * days
}

/// Loading/unloading cost, linear in hours
pub fn load_unload_cost(truck: &TruckParameters, load_unload_hours: f64) -> f64 {
    truck.load_unload_cost * load_unload_hours
}

/// Compute the full itemized cost breakdown for one trip.
///
/// Returns exactly 11 items in a fixed, stable order: five fixed-category
/// items (amortization, insurance, road tax, inspection, tachograph) followed
/// by six variable-category items (fuel, tires, tolls, food/lodging,
/// load/unload, maintenance). Items with a zero amount are never omitted.
pub fn calculate_cost_breakdown(
    truck: &TruckParameters,
    trip: &Trip,
) -> Result<Vec<CostBreakdownItem>, CostingError> {
    if truck.amortization_years <= 0.0 {
        return Err(CostingError::NonPositiveAmortization(
            truck.amortization_years,
        ));
    }

    let distance = trip.distance;

    Ok(vec![
        CostBreakdownItem::new(
            LABEL_AMORTIZATION,
            amortization_cost(truck, distance),
            CostCategory::Fixed,
        ),
        CostBreakdownItem::new(
            LABEL_INSURANCE,
            insurance_cost(truck, distance),
            CostCategory::Fixed,
        ),
        CostBreakdownItem::new(
            LABEL_ROAD_TAX,
            road_tax_cost(truck, distance),
            CostCategory::Fixed,
        ),
        CostBreakdownItem::new(
            LABEL_INSPECTION,
            inspection_cost(truck, distance),
            CostCategory::Fixed,
        ),
        CostBreakdownItem::new(
            LABEL_TACHOGRAPH,
            tachograph_cost(truck, distance),
            CostCategory::Fixed,
        ),
        CostBreakdownItem::new(LABEL_FUEL, fuel_cost(truck, distance), CostCategory::Variable),
        CostBreakdownItem::new(
            LABEL_TIRES,
            tires_cost(truck, distance),
            CostCategory::Variable,
        ),
        CostBreakdownItem::new(
            LABEL_TOLLS,
            toll_cost(truck, distance, trip.road_type),
            CostCategory::Variable,
        ),
        CostBreakdownItem::new(
            LABEL_FOOD_LODGING,
            food_lodging_cost(truck, trip.hours),
            CostCategory::Variable,
        ),
        CostBreakdownItem::new(
            LABEL_LOAD_UNLOAD,
            load_unload_cost(truck, trip.load_unload_hours),
            CostCategory::Variable,
        ),
        CostBreakdownItem::new(
            LABEL_MAINTENANCE,
            maintenance_cost(truck, distance),
            CostCategory::Variable,
        ),
    ])
}
