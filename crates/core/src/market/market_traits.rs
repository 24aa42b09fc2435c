use crate::errors::Result;
use crate::market::market_model::{PurchaseSimulation, TokenFilter, TokenListing};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for marketplace data providers.
#[async_trait]
pub trait TokenProviderTrait: Send + Sync {
    async fn fetch_token_listings(&self) -> Result<Vec<TokenListing>>;
}

/// Trait for marketplace service operations
#[async_trait]
pub trait MarketServiceTrait: Send + Sync {
    async fn load_token_listings(&self) -> Result<Vec<TokenListing>>;
    fn filter_listings(&self, listings: &[TokenListing], filter: &TokenFilter)
        -> Vec<TokenListing>;
    fn simulate_purchase(&self, listing: &TokenListing, amount: Decimal) -> PurchaseSimulation;
}
