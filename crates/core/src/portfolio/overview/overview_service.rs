//! Service computing the portfolio-overview totals.

use rust_decimal::Decimal;

use crate::investments::Investment;
use crate::portfolio::projection::roi_percent;

use super::PortfolioSummary;

/// Trait for overview service operations
pub trait OverviewServiceTrait: Send + Sync {
    fn summarize(&self, investments: &[Investment]) -> PortfolioSummary;
}

pub struct OverviewService;

impl OverviewService {
    pub fn new() -> Self {
        OverviewService
    }
}

impl Default for OverviewService {
    fn default() -> Self {
        Self::new()
    }
}

impl OverviewServiceTrait for OverviewService {
    fn summarize(&self, investments: &[Investment]) -> PortfolioSummary {
        let total_invested: Decimal = investments.iter().map(|inv| inv.amount).sum();
        let total_return: Decimal = investments.iter().map(|inv| inv.gain()).sum();
        let carbon_credits: i64 = investments.iter().map(|inv| inv.carbon_credits).sum();

        PortfolioSummary {
            total_invested,
            total_return,
            return_percent: roi_percent(total_return, total_invested),
            carbon_credits,
        }
    }
}
