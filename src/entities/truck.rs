//! Truck parameters - the cost basis for every calculation

use serde::{Deserialize, Serialize};

/// Operating parameters for a single truck.
///
/// Identity fields (brand, model, year, plate, capacity) are informational
/// only; the calculation engine reads the fixed- and variable-cost bases.
/// All annual amounts are in euros, per-km rates in euros per kilometre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruckParameters {
    /// Manufacturer (e.g. "Volvo")
    pub brand: String,

    /// Model name (e.g. "FH16")
    pub model: String,

    /// Registration year
    pub year: u32,

    /// License plate
    pub license_plate: String,

    /// Load capacity in tonnes (informational)
    pub capacity: f64,

    /// Purchase value of the truck
    pub value: f64,

    /// Amortization period in years. Must be positive; the engine rejects
    /// non-positive values rather than dividing by zero.
    pub amortization_years: f64,

    /// Annual insurance premium
    pub insurance: f64,

    /// Annual road tax ("bollo")
    pub road_tax: f64,

    /// Annual inspection fee ("revisione")
    pub inspection: f64,

    /// Annual tachograph calibration fee
    pub tachograph: f64,

    /// Fuel cost per km
    pub fuel_cost: f64,

    /// Tire wear cost per km
    pub tires_cost: f64,

    /// Toll cost per km on full-toll roads
    pub toll_cost: f64,

    /// Food and lodging cost per working day (8 h)
    pub food_lodging_cost: f64,

    /// Loading/unloading cost per hour
    pub load_unload_cost: f64,

    /// Maintenance cost per km
    pub maintenance_cost: f64,
}

impl Default for TruckParameters {
    /// Seed values for a fresh, unconfigured operator.
    fn default() -> Self {
        Self {
            brand: "Volvo".to_string(),
            model: "FH16".to_string(),
            year: 2020,
            license_plate: "AB123CD".to_string(),
            capacity: 25.0,
            value: 120_000.0,
            amortization_years: 5.0,
            insurance: 4_800.0,
            road_tax: 1_200.0,
            inspection: 500.0,
            tachograph: 350.0,
            fuel_cost: 0.48,
            tires_cost: 0.12,
            toll_cost: 0.15,
            food_lodging_cost: 80.0,
            load_unload_cost: 35.0,
            maintenance_cost: 0.15,
        }
    }
}

impl TruckParameters {
    /// Annual amortization charge (value spread over the amortization period)
    pub fn annual_amortization(&self) -> f64 {
        self.value / self.amortization_years
    }

    /// Sum of all annual fixed costs, amortization included
    pub fn annual_fixed_costs(&self) -> f64 {
        self.annual_amortization()
            + self.insurance
            + self.road_tax
            + self.inspection
            + self.tachograph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_values() {
        let truck = TruckParameters::default();
        assert_eq!(truck.brand, "Volvo");
        assert_eq!(truck.value, 120_000.0);
        assert_eq!(truck.amortization_years, 5.0);
        assert_eq!(truck.fuel_cost, 0.48);
        assert_eq!(truck.food_lodging_cost, 80.0);
    }

    #[test]
    fn test_annual_fixed_costs() {
        let truck = TruckParameters::default();
        // 120000/5 + 4800 + 1200 + 500 + 350
        assert_eq!(truck.annual_amortization(), 24_000.0);
        assert_eq!(truck.annual_fixed_costs(), 30_850.0);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let truck = TruckParameters::default();
        let yaml = serde_yml::to_string(&truck).unwrap();
        let parsed: TruckParameters = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(truck, parsed);
    }
}
