//! Overview models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline totals shown in the investment-overview cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_invested: Decimal,
    pub total_return: Decimal,
    /// Total return as a percentage of principal; 0 when nothing is
    /// invested.
    pub return_percent: Decimal,
    /// Tons of CO2 offset across all positions
    pub carbon_credits: i64,
}

impl PortfolioSummary {
    pub fn is_positive_return(&self) -> bool {
        self.total_return >= Decimal::ZERO
    }
}

/// Timeframe tabs on the performance chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PerformancePeriod {
    Week,
    #[default]
    Month,
    Year,
    All,
}
