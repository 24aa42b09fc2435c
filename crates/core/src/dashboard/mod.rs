//! Dashboard module - session state and view composition.

mod dashboard_model;
mod dashboard_service;


pub use dashboard_model::{DashboardData, DashboardState, SimulationDialog, Theme};
pub use dashboard_service::{DashboardService, DashboardServiceTrait};
