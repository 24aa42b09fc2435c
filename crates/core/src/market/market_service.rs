//! Service behind the available-tokens marketplace card.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::Result;
use crate::market::market_model::{PurchaseSimulation, TokenFilter, TokenListing};
use crate::market::market_traits::{MarketServiceTrait, TokenProviderTrait};

pub struct MarketService {
    provider: Arc<dyn TokenProviderTrait>,
}

impl MarketService {
    pub fn new(provider: Arc<dyn TokenProviderTrait>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl MarketServiceTrait for MarketService {
    async fn load_token_listings(&self) -> Result<Vec<TokenListing>> {
        let listings = self.provider.fetch_token_listings().await?;
        debug!("Loaded {} token listings", listings.len());
        Ok(listings)
    }

    /// Applies the marketplace filter: an empty selection shows every
    /// listing, otherwise only selected ids pass; the free-text query
    /// narrows by name.
    fn filter_listings(
        &self,
        listings: &[TokenListing],
        filter: &TokenFilter,
    ) -> Vec<TokenListing> {
        listings
            .iter()
            .filter(|listing| filter.selected.is_empty() || filter.is_selected(&listing.id))
            .filter(|listing| filter.matches_query(&listing.name))
            .cloned()
            .collect()
    }

    /// Projects the outcome of investing `amount` into an offering at its
    /// advertised yield: `amount * (1 + fee / 100)` back, `amount * fee /
    /// 100` of it gain.
    fn simulate_purchase(&self, listing: &TokenListing, amount: Decimal) -> PurchaseSimulation {
        let gain = amount * listing.fee_percent / dec!(100);
        PurchaseSimulation {
            token_id: listing.id.clone(),
            amount,
            projected_return: amount + gain,
            projected_gain: gain,
        }
    }
}
