use crate::errors::Result;
use crate::investments::investments_model::{Investment, InvestmentSort, Transaction};
use async_trait::async_trait;

/// Trait for investment data providers.
///
/// A provider supplies the investor's positions once, at dashboard load.
/// The mock implementation resolves after a fixed artificial delay.
#[async_trait]
pub trait InvestmentProviderTrait: Send + Sync {
    async fn fetch_investments(&self) -> Result<Vec<Investment>>;
}

/// Trait for investment service operations
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    async fn load_investments(&self) -> Result<Vec<Investment>>;
    fn sort_investments(&self, investments: &[Investment], sort: InvestmentSort)
        -> Vec<Investment>;
    fn recent_transactions(&self, investments: &[Investment]) -> Vec<Transaction>;
}
