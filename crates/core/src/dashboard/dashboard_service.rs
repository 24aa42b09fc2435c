//! Startup data load and view composition for the dashboard.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};

use crate::errors::Result;
use crate::impact::ImpactServiceTrait;
use crate::investments::{InvestmentServiceTrait, Investment, Transaction};
use crate::market::{MarketServiceTrait, TokenListing};
use crate::portfolio::overview::{OverviewServiceTrait, PortfolioSummary};
use crate::portfolio::projection::{EarningsProjection, ProjectionServiceTrait};

use super::dashboard_model::{DashboardData, DashboardState};

/// Trait for the dashboard facade.
///
/// `load` is the single async entry point, awaited once at startup.
/// Everything else is synchronous view computation over the loaded
/// snapshot and the current [`DashboardState`].
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    async fn load(&self) -> Result<DashboardData>;
    fn summarize(&self, data: &DashboardData) -> PortfolioSummary;
    fn project_earnings(&self, data: &DashboardData, state: &DashboardState)
        -> EarningsProjection;
    fn sorted_investments(&self, data: &DashboardData, state: &DashboardState)
        -> Vec<Investment>;
    fn recent_transactions(&self, data: &DashboardData) -> Vec<Transaction>;
    fn visible_tokens(&self, data: &DashboardData, state: &DashboardState) -> Vec<TokenListing>;
}

pub struct DashboardService {
    investment_service: Arc<dyn InvestmentServiceTrait>,
    impact_service: Arc<dyn ImpactServiceTrait>,
    market_service: Arc<dyn MarketServiceTrait>,
    overview_service: Arc<dyn OverviewServiceTrait>,
    projection_service: Arc<dyn ProjectionServiceTrait>,
}

impl DashboardService {
    pub fn new(
        investment_service: Arc<dyn InvestmentServiceTrait>,
        impact_service: Arc<dyn ImpactServiceTrait>,
        market_service: Arc<dyn MarketServiceTrait>,
        overview_service: Arc<dyn OverviewServiceTrait>,
        projection_service: Arc<dyn ProjectionServiceTrait>,
    ) -> Self {
        Self {
            investment_service,
            impact_service,
            market_service,
            overview_service,
            projection_service,
        }
    }

    async fn load_data(&self) -> Result<DashboardData> {
        let investments = self.investment_service.load_investments().await?;
        let impact = self.impact_service.load_impact().await?;
        let tokens = self.market_service.load_token_listings().await?;

        Ok(DashboardData {
            investments,
            impact,
            tokens,
        })
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn load(&self) -> Result<DashboardData> {
        debug!("Loading dashboard data");
        match self.load_data().await {
            Ok(data) => Ok(data),
            Err(e) => {
                error!("Failed to load dashboard data: {}", e);
                Err(e)
            }
        }
    }

    fn summarize(&self, data: &DashboardData) -> PortfolioSummary {
        self.overview_service.summarize(&data.investments)
    }

    fn project_earnings(
        &self,
        data: &DashboardData,
        state: &DashboardState,
    ) -> EarningsProjection {
        self.projection_service
            .project_earnings(&data.investments, &state.projection)
    }

    fn sorted_investments(
        &self,
        data: &DashboardData,
        state: &DashboardState,
    ) -> Vec<Investment> {
        self.investment_service
            .sort_investments(&data.investments, state.portfolio_sort)
    }

    fn recent_transactions(&self, data: &DashboardData) -> Vec<Transaction> {
        self.investment_service
            .recent_transactions(&data.investments)
    }

    fn visible_tokens(&self, data: &DashboardData, state: &DashboardState) -> Vec<TokenListing> {
        self.market_service
            .filter_listings(&data.tokens, &state.token_filter)
    }
}
