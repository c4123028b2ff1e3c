//! Tax settings - VAT regime configuration for one operator

use serde::{Deserialize, Serialize};

/// Italian fiscal regime selection.
///
/// Informational for the quote engine; consumed by the (separate)
/// tax-liability computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// Flat-rate simplified regime
    #[default]
    Forfettario,
    /// Ordinary regime
    Ordinario,
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Regime::Forfettario => write!(f, "forfettario"),
            Regime::Ordinario => write!(f, "ordinario"),
        }
    }
}

impl std::str::FromStr for Regime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forfettario" => Ok(Regime::Forfettario),
            "ordinario" => Ok(Regime::Ordinario),
            _ => Err(format!(
                "Invalid regime: {}. Use forfettario or ordinario",
                s
            )),
        }
    }
}

/// Per-operator tax configuration.
///
/// Only `vat` and `apply_vat_by_default` feed the quote engine. The income
/// tax fields (IRPEF, surtaxes, INPS) are kept for the operator's records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSettings {
    /// Fiscal regime
    #[serde(default)]
    pub regime: Regime,

    /// IRPEF rate (percent)
    pub irpef: f64,

    /// Regional surtax rate (percent)
    pub regional_tax: f64,

    /// Municipal surtax rate (percent)
    pub municipal_tax: f64,

    /// INPS contribution rate (percent)
    pub inps: f64,

    /// VAT rate applied to quotes (percent)
    pub vat: f64,

    /// Whether new quotes default to VAT-liable
    pub apply_vat_by_default: bool,

    /// Disclosure note printed on VAT-liable quotes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_note: Option<String>,
}

impl Default for TaxSettings {
    /// Seed values for a fresh, unconfigured operator.
    fn default() -> Self {
        Self {
            regime: Regime::Forfettario,
            irpef: 23.0,
            regional_tax: 1.23,
            municipal_tax: 0.8,
            inps: 24.0,
            vat: 22.0,
            apply_vat_by_default: true,
            vat_note: Some("IVA 22% inclusa nel prezzo.".to_string()),
        }
    }
}
