//! Quote entity types - itemized cost breakdowns and priced quotes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::trip::RoadType;

/// Cost category for breakdown items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostCategory {
    /// Ownership/compliance cost allocated to the trip by distance
    Fixed,
    /// Cost that scales with distance, duration, or load/unload time
    Variable,
}

impl std::fmt::Display for CostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostCategory::Fixed => write!(f, "fixed"),
            CostCategory::Variable => write!(f, "variable"),
        }
    }
}

/// One labeled line of a trip's cost breakdown.
///
/// The label and the position within the breakdown are stable; quote tables
/// and exports rely on the order being reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdownItem {
    /// Display label (e.g. "Gasolio")
    pub name: String,

    /// Cost amount in euros
    pub amount: f64,

    /// Fixed or variable
    pub category: CostCategory,
}

impl CostBreakdownItem {
    pub fn new(name: impl Into<String>, amount: f64, category: CostCategory) -> Self {
        Self {
            name: name.into(),
            amount,
            category,
        }
    }
}

/// Lifecycle status of a persisted quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    /// Quote issued, awaiting the client's answer
    #[default]
    Pending,
    /// Client accepted the quote
    Confirmed,
    /// Client declined the quote
    Rejected,
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteStatus::Pending => write!(f, "pending"),
            QuoteStatus::Confirmed => write!(f, "confirmed"),
            QuoteStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for QuoteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(QuoteStatus::Pending),
            "confirmed" => Ok(QuoteStatus::Confirmed),
            "rejected" => Ok(QuoteStatus::Rejected),
            _ => Err(format!(
                "Invalid quote status: {}. Use pending, confirmed, or rejected",
                s
            )),
        }
    }
}

/// A fully priced quote as produced by the calculation engine.
///
/// Echoes the trip inputs, carries the ordered cost breakdown, and adds the
/// derived commercial figures. Consumers treat the derived fields as the
/// source of truth and never recompute them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteDetails {
    /// Departure location
    pub origin: String,

    /// Arrival location
    pub destination: String,

    /// Trip distance in km
    pub distance: f64,

    /// Travel duration in hours
    pub hours: f64,

    /// Road type used for toll estimation
    pub road_type: RoadType,

    /// Hours spent loading and unloading
    pub load_unload_hours: f64,

    /// Whether VAT was applied
    pub has_vat: bool,

    /// Itemized cost breakdown, in display order
    pub costs: Vec<CostBreakdownItem>,

    /// Sum of all breakdown amounts
    pub total_cost: f64,

    /// Profit margin amount
    pub margin: f64,

    /// Margin rate applied (percent)
    pub margin_rate: f64,

    /// total_cost + margin
    pub subtotal: f64,

    /// VAT amount; None when the trip is not VAT-liable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_amount: Option<f64>,

    /// subtotal plus VAT when applicable
    pub final_price: f64,

    /// total_cost / distance
    pub cost_per_km: f64,

    /// final_price / distance
    pub price_per_km: f64,
}

impl QuoteDetails {
    /// Sum of the breakdown amounts in the given category
    pub fn category_total(&self, category: CostCategory) -> f64 {
        self.costs
            .iter()
            .filter(|item| item.category == category)
            .map(|item| item.amount)
            .sum()
    }
}

/// A quote as persisted by the storage layer.
///
/// The store assigns the identity, creation timestamp, and initial status;
/// the engine only ever produces the inner [`QuoteDetails`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Sequential identity, assigned on save
    pub id: u32,

    /// Lifecycle status
    #[serde(default)]
    pub status: QuoteStatus,

    /// Creation timestamp
    pub created: DateTime<Utc>,

    /// The priced quote itself
    #[serde(flatten)]
    pub details: QuoteDetails,
}
