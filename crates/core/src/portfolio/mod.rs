//! Portfolio module - overview totals and future-earnings projections.

pub mod overview;
pub mod projection;

pub use overview::{OverviewService, OverviewServiceTrait, PerformancePeriod, PortfolioSummary};
pub use projection::{
    project_growth, roi_percent, EarningsProjection, GrowthScenario, ProjectionPoint,
    ProjectionService, ProjectionServiceTrait, ProjectionSettings, ScenarioProjection,
};
