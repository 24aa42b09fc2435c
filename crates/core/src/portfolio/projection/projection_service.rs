//! Scenario derivation over the projection calculator.

use log::debug;
use rust_decimal::Decimal;

use crate::investments::Investment;

use super::projection_calculator::{project_growth, roi_percent};
use super::projection_model::{
    EarningsProjection, GrowthScenario, ProjectionSettings, ScenarioProjection,
};

/// Trait for projection service operations
pub trait ProjectionServiceTrait: Send + Sync {
    /// Computes the three scenario projections for the current portfolio.
    fn project_earnings(
        &self,
        investments: &[Investment],
        settings: &ProjectionSettings,
    ) -> EarningsProjection;

    /// Computes a single scenario from an explicit principal.
    fn project_scenario(
        &self,
        principal: Decimal,
        scenario: GrowthScenario,
        settings: &ProjectionSettings,
    ) -> ScenarioProjection;
}

pub struct ProjectionService;

impl ProjectionService {
    pub fn new() -> Self {
        ProjectionService
    }
}

impl Default for ProjectionService {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectionServiceTrait for ProjectionService {
    fn project_earnings(
        &self,
        investments: &[Investment],
        settings: &ProjectionSettings,
    ) -> EarningsProjection {
        let principal: Decimal = investments.iter().map(|inv| inv.amount).sum();

        debug!(
            "Projecting {} over {} years at base rate {}%",
            principal, settings.years, settings.growth_rate_percent
        );

        EarningsProjection {
            principal,
            conservative: self.project_scenario(principal, GrowthScenario::Conservative, settings),
            moderate: self.project_scenario(principal, GrowthScenario::Moderate, settings),
            optimistic: self.project_scenario(principal, GrowthScenario::Optimistic, settings),
        }
    }

    fn project_scenario(
        &self,
        principal: Decimal,
        scenario: GrowthScenario,
        settings: &ProjectionSettings,
    ) -> ScenarioProjection {
        let annual_rate_percent = scenario.effective_rate(settings.growth_rate_percent);
        let points = project_growth(principal, annual_rate_percent, settings.years);

        // points is never empty: project_growth always emits year 0
        let final_value = points.last().map_or(principal, |point| point.value);
        let total_return = final_value - principal;

        ScenarioProjection {
            scenario,
            annual_rate_percent,
            points,
            final_value,
            total_return,
            roi_percent: roi_percent(total_return, principal),
        }
    }
}
