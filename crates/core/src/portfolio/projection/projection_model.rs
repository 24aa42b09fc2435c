//! Projection models.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GROWTH_RATE_PERCENT, DEFAULT_PROJECTION_YEARS};

/// Growth scenarios offered by the future-earnings card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GrowthScenario {
    Conservative,
    Moderate,
    #[default]
    Optimistic,
}

impl GrowthScenario {
    /// All scenarios in presentation order.
    pub const ALL: [GrowthScenario; 3] = [
        GrowthScenario::Conservative,
        GrowthScenario::Moderate,
        GrowthScenario::Optimistic,
    ];

    /// Factor applied to the user-selected base growth rate.
    ///
    /// The 0.5x / 1.0x / 1.5x spread is contractual: the scenario labels
    /// lose their meaning under any other coefficients.
    pub fn rate_factor(self) -> Decimal {
        match self {
            GrowthScenario::Conservative => dec!(0.5),
            GrowthScenario::Moderate => Decimal::ONE,
            GrowthScenario::Optimistic => dec!(1.5),
        }
    }

    /// Effective annual rate for this scenario.
    pub fn effective_rate(self, base_rate_percent: Decimal) -> Decimal {
        base_rate_percent * self.rate_factor()
    }
}

/// A single year on a projection curve.
///
/// Recomputed from scratch on every slider change; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year: u32,
    pub value: Decimal,
}

/// One projected scenario with its derived summary numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioProjection {
    pub scenario: GrowthScenario,
    pub annual_rate_percent: Decimal,
    pub points: Vec<ProjectionPoint>,
    pub final_value: Decimal,
    pub total_return: Decimal,
    pub roi_percent: Decimal,
}

/// Projection inputs driven by the two sliders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSettings {
    /// Projection horizon in years (slider range 1-10)
    pub years: u32,
    /// Base annual growth rate in percent (slider range 1-15, step 0.5)
    pub growth_rate_percent: Decimal,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            years: DEFAULT_PROJECTION_YEARS,
            growth_rate_percent: DEFAULT_GROWTH_RATE_PERCENT,
        }
    }
}

/// The three scenario projections produced by one recomputation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EarningsProjection {
    /// Total principal across all positions at computation time
    pub principal: Decimal,
    pub conservative: ScenarioProjection,
    pub moderate: ScenarioProjection,
    pub optimistic: ScenarioProjection,
}

impl EarningsProjection {
    /// The projection behind the given scenario tab.
    pub fn scenario(&self, scenario: GrowthScenario) -> &ScenarioProjection {
        match scenario {
            GrowthScenario::Conservative => &self.conservative,
            GrowthScenario::Moderate => &self.moderate,
            GrowthScenario::Optimistic => &self.optimistic,
        }
    }
}
