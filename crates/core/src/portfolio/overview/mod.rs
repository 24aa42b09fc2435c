//! Portfolio overview - headline totals for the dashboard cards.

mod overview_model;
mod overview_service;

pub use overview_model::{PerformancePeriod, PortfolioSummary};
pub use overview_service::{OverviewService, OverviewServiceTrait};
