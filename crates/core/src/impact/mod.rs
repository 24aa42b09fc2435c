//! Environmental impact module - models, service, and provider trait.

mod impact_model;
mod impact_service;
mod impact_traits;

pub use impact_model::{EnvironmentalImpact, ImpactHistoryPoint};
pub use impact_service::ImpactService;
pub use impact_traits::{ImpactProviderTrait, ImpactServiceTrait};
