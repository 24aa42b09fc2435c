//! Environmental impact domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly sample of the cumulative CO2 reduction curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactHistoryPoint {
    /// First day of the sampled month
    pub date: NaiveDate,
    /// Cumulative tons of CO2 reduced up to this month
    pub co2_reduction: Decimal,
}

/// Aggregate environmental impact of the investor's positions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalImpact {
    /// Tons of CO2 reduced
    pub co2_reduction: Decimal,
    pub families_benefited: u32,
    /// Cubic meters of water conserved
    pub water_conservation: Decimal,
    pub hectares_preserved: Decimal,
    /// Cumulative CO2 series feeding the impact chart
    pub historical_data: Vec<ImpactHistoryPoint>,
}
