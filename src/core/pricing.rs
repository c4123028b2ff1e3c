//! Quote calculator
//!
//! Turns a cost breakdown plus commercial terms (margin rate, VAT settings)
//! into a final customer-facing price.

use crate::core::costing::{calculate_cost_breakdown, CostingError};
use crate::entities::quote::QuoteDetails;
use crate::entities::tax::TaxSettings;
use crate::entities::trip::Trip;
use crate::entities::truck::TruckParameters;

/// Margin rate applied when the caller does not supply one (percent)
pub const DEFAULT_MARGIN_RATE: f64 = 25.0;

/// Compute a fully priced quote for one trip.
///
/// `margin_rate` is a percentage markup on total cost; `None` applies
/// [`DEFAULT_MARGIN_RATE`]. VAT is added iff the trip is VAT-liable, at the
/// rate in `tax`. Rejects non-positive distance so the per-km metrics are
/// always finite; identity, timestamp, and status are assigned later by the
/// store.
pub fn calculate_quote(
    truck: &TruckParameters,
    tax: &TaxSettings,
    trip: &Trip,
    margin_rate: Option<f64>,
) -> Result<QuoteDetails, CostingError> {
    if trip.distance <= 0.0 {
        return Err(CostingError::NonPositiveDistance(trip.distance));
    }

    let margin_rate = margin_rate.unwrap_or(DEFAULT_MARGIN_RATE);
    let costs = calculate_cost_breakdown(truck, trip)?;

    let total_cost: f64 = costs.iter().map(|item| item.amount).sum();
    let margin = total_cost * (margin_rate / 100.0);
    let subtotal = total_cost + margin;

    let vat_amount = trip.has_vat.then(|| subtotal * (tax.vat / 100.0));
    let final_price = subtotal + vat_amount.unwrap_or(0.0);

    Ok(QuoteDetails {
        origin: trip.origin.clone(),
        destination: trip.destination.clone(),
        distance: trip.distance,
        hours: trip.hours,
        road_type: trip.road_type,
        load_unload_hours: trip.load_unload_hours,
        has_vat: trip.has_vat,
        costs,
        total_cost,
        margin,
        margin_rate,
        subtotal,
        vat_amount,
        final_price,
        cost_per_km: total_cost / trip.distance,
        price_per_km: final_price / trip.distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::trip::RoadType;

    const TOL: f64 = 1e-9;

    fn default_trip() -> Trip {
        Trip {
            origin: "Milano".to_string(),
            destination: "Torino".to_string(),
            distance: 100.0,
            hours: 2.0,
            road_type: RoadType::Autostrada,
            load_unload_hours: 1.0,
            has_vat: false,
        }
    }

    #[test]
    fn test_default_parameters_closed_form() {
        let truck = TruckParameters::default();
        let tax = TaxSettings::default();
        let quote = calculate_quote(&truck, &tax, &default_trip(), Some(25.0)).unwrap();

        // Closed-form total for the seed parameters over 100 km / 2 h / 1 h
        // load-unload on the highway.
        let expected_total = 0.48 * 100.0                      // fuel
            + 0.12 * 100.0                                     // tires
            + 0.15 * 100.0 * 1.0                               // tolls
            + 80.0 * (2.0_f64 / 8.0).ceil()                    // food/lodging
            + 35.0 * 1.0                                       // load/unload
            + 0.15 * 100.0                                     // maintenance
            + (120_000.0 / 5.0 / 100_000.0) * 100.0            // amortization
            + (4_800.0 / 100_000.0) * 100.0                    // insurance
            + (1_200.0 / 100_000.0) * 100.0                    // road tax
            + (500.0 / 100_000.0) * 100.0                      // inspection
            + (350.0 / 100_000.0) * 100.0; // tachograph

        assert!((quote.total_cost - expected_total).abs() < TOL);
        assert!((quote.margin - expected_total * 0.25).abs() < TOL);
        assert!((quote.subtotal - expected_total * 1.25).abs() < TOL);
        assert_eq!(quote.vat_amount, None);
        assert!((quote.final_price - quote.subtotal).abs() < TOL);
        assert!((quote.cost_per_km - expected_total / 100.0).abs() < TOL);
        assert!((quote.price_per_km - quote.final_price / 100.0).abs() < TOL);
    }

    #[test]
    fn test_algebraic_identities() {
        let truck = TruckParameters::default();
        let tax = TaxSettings::default();
        let trip = Trip {
            has_vat: true,
            distance: 437.0,
            hours: 9.5,
            load_unload_hours: 3.0,
            road_type: RoadType::Misto,
            ..default_trip()
        };
        let quote = calculate_quote(&truck, &tax, &trip, Some(18.0)).unwrap();

        assert!((quote.subtotal - (quote.total_cost + quote.margin)).abs() < TOL);
        let vat = quote.vat_amount.unwrap();
        assert!((vat - quote.subtotal * 0.22).abs() < TOL);
        assert!((quote.final_price - (quote.subtotal + vat)).abs() < TOL);
    }

    #[test]
    fn test_no_vat_means_none_and_final_equals_subtotal() {
        let truck = TruckParameters::default();
        let tax = TaxSettings::default();
        let quote = calculate_quote(&truck, &tax, &default_trip(), None).unwrap();

        assert!(!quote.has_vat);
        assert_eq!(quote.vat_amount, None);
        assert_eq!(quote.final_price, quote.subtotal);
    }

    #[test]
    fn test_default_margin_rate_is_25() {
        let truck = TruckParameters::default();
        let tax = TaxSettings::default();
        let quote = calculate_quote(&truck, &tax, &default_trip(), None).unwrap();
        assert_eq!(quote.margin_rate, DEFAULT_MARGIN_RATE);
        assert!((quote.margin - quote.total_cost * 0.25).abs() < TOL);
    }

    #[test]
    fn test_rejects_non_positive_distance() {
        let truck = TruckParameters::default();
        let tax = TaxSettings::default();
        let trip = Trip {
            distance: 0.0,
            ..default_trip()
        };
        let err = calculate_quote(&truck, &tax, &trip, None).unwrap_err();
        assert!(matches!(err, CostingError::NonPositiveDistance(_)));
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let truck = TruckParameters::default();
        let tax = TaxSettings::default();
        let trip = default_trip();
        let before = (truck.clone(), tax.clone(), trip.clone());

        let _ = calculate_quote(&truck, &tax, &trip, None).unwrap();

        assert_eq!(truck, before.0);
        assert_eq!(tax, before.1);
        assert_eq!(trip, before.2);
    }

    #[test]
    fn test_quote_echoes_trip_fields() {
        let truck = TruckParameters::default();
        let tax = TaxSettings::default();
        let trip = default_trip();
        let quote = calculate_quote(&truck, &tax, &trip, None).unwrap();

        assert_eq!(quote.origin, trip.origin);
        assert_eq!(quote.destination, trip.destination);
        assert_eq!(quote.distance, trip.distance);
        assert_eq!(quote.hours, trip.hours);
        assert_eq!(quote.road_type, trip.road_type);
        assert_eq!(quote.load_unload_hours, trip.load_unload_hours);
    }
}
