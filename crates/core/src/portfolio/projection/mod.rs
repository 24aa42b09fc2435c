//! Future-earnings projection - scenario-based compound growth.

mod projection_calculator;
mod projection_model;
mod projection_service;

#[cfg(test)]
mod projection_tests;

pub use projection_calculator::{project_growth, roi_percent};
pub use projection_model::{
    EarningsProjection, GrowthScenario, ProjectionPoint, ProjectionSettings, ScenarioProjection,
};
pub use projection_service::{ProjectionService, ProjectionServiceTrait};
