//! Foresti Mock Data - fixture implementation of the core provider traits.
//!
//! Stands in for the platform backend during development and demos. Each
//! fetch resolves after a fixed artificial delay so loading states stay
//! visible, then returns a fresh copy of the fixture dataset. Use
//! [`MockDataProvider::instant`] in tests to skip the delays.

mod fixtures;

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use foresti_core::errors::Result;
use foresti_core::impact::{EnvironmentalImpact, ImpactProviderTrait};
use foresti_core::investments::{Investment, InvestmentProviderTrait};
use foresti_core::market::{TokenListing, TokenProviderTrait};

/// Artificial latency of the investments fetch
const INVESTMENTS_DELAY: Duration = Duration::from_millis(800);

/// Artificial latency of the environmental-impact fetch
const IMPACT_DELAY: Duration = Duration::from_millis(600);

/// Fixture-backed provider for every dashboard dataset.
pub struct MockDataProvider {
    investments_delay: Duration,
    impact_delay: Duration,
}

impl MockDataProvider {
    pub fn new() -> Self {
        Self {
            investments_delay: INVESTMENTS_DELAY,
            impact_delay: IMPACT_DELAY,
        }
    }

    /// A provider without artificial latency, for tests.
    pub fn instant() -> Self {
        Self {
            investments_delay: Duration::ZERO,
            impact_delay: Duration::ZERO,
        }
    }

    async fn simulate_latency(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for MockDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InvestmentProviderTrait for MockDataProvider {
    async fn fetch_investments(&self) -> Result<Vec<Investment>> {
        self.simulate_latency(self.investments_delay).await;
        let investments = fixtures::investments();
        debug!("Serving {} fixture investments", investments.len());
        Ok(investments)
    }
}

#[async_trait]
impl ImpactProviderTrait for MockDataProvider {
    async fn fetch_environmental_impact(&self) -> Result<EnvironmentalImpact> {
        self.simulate_latency(self.impact_delay).await;
        Ok(fixtures::environmental_impact())
    }
}

#[async_trait]
impl TokenProviderTrait for MockDataProvider {
    async fn fetch_token_listings(&self) -> Result<Vec<TokenListing>> {
        // Marketplace listings ship with the client; no simulated delay
        Ok(fixtures::token_listings())
    }
}
