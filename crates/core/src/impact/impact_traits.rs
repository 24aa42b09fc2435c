use crate::errors::Result;
use crate::impact::impact_model::EnvironmentalImpact;
use async_trait::async_trait;

/// Trait for environmental-impact data providers.
#[async_trait]
pub trait ImpactProviderTrait: Send + Sync {
    async fn fetch_environmental_impact(&self) -> Result<EnvironmentalImpact>;
}

/// Trait for impact service operations
#[async_trait]
pub trait ImpactServiceTrait: Send + Sync {
    async fn load_impact(&self) -> Result<EnvironmentalImpact>;
}
