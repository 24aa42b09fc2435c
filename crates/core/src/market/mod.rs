//! Token marketplace module - listings, filtering, and purchase simulation.

mod market_model;
mod market_service;
mod market_traits;

pub use market_model::{PurchaseSimulation, TokenFilter, TokenListing, TokenTrend};
pub use market_service::MarketService;
pub use market_traits::{MarketServiceTrait, TokenProviderTrait};
