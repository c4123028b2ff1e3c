//! Entity type definitions

pub mod quote;
pub mod tax;
pub mod trip;
pub mod truck;

pub use quote::{CostBreakdownItem, CostCategory, QuoteDetails, QuoteRecord, QuoteStatus};
pub use tax::{Regime, TaxSettings};
pub use trip::{RoadType, Trip};
pub use truck::TruckParameters;
