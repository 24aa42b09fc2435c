//! Service exposing the environmental-impact card data.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;
use crate::impact::impact_model::EnvironmentalImpact;
use crate::impact::impact_traits::{ImpactProviderTrait, ImpactServiceTrait};

pub struct ImpactService {
    provider: Arc<dyn ImpactProviderTrait>,
}

impl ImpactService {
    pub fn new(provider: Arc<dyn ImpactProviderTrait>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ImpactServiceTrait for ImpactService {
    async fn load_impact(&self) -> Result<EnvironmentalImpact> {
        let impact = self.provider.fetch_environmental_impact().await?;
        debug!(
            "Loaded environmental impact with {} history points",
            impact.historical_data.len()
        );
        Ok(impact)
    }
}
