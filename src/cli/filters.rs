//! Filter enums for list commands

use clap::ValueEnum;

use crate::entities::quote::QuoteStatus;

/// Status filter for `tqt quote list`
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Pending quotes only
    Pending,
    /// Confirmed quotes only
    Confirmed,
    /// Rejected quotes only
    Rejected,
    /// All quotes - default
    #[default]
    All,
}

impl StatusFilter {
    /// Check if a QuoteStatus matches this filter
    pub fn matches(&self, status: &QuoteStatus) -> bool {
        match self {
            StatusFilter::Pending => *status == QuoteStatus::Pending,
            StatusFilter::Confirmed => *status == QuoteStatus::Confirmed,
            StatusFilter::Rejected => *status == QuoteStatus::Rejected,
            StatusFilter::All => true,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::Pending => write!(f, "pending"),
            StatusFilter::Confirmed => write!(f, "confirmed"),
            StatusFilter::Rejected => write!(f, "rejected"),
            StatusFilter::All => write!(f, "all"),
        }
    }
}
