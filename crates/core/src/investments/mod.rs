//! Investments module - domain models, services, and traits.

mod investments_model;
mod investments_service;
mod investments_traits;


#[cfg(test)]
mod investments_service_tests;

pub use investments_model::{
    AssetClass, Investment, InvestmentSort, SortColumn, SortDirection, Transaction,
    TransactionType,
};
pub use investments_service::InvestmentService;
pub use investments_traits::{InvestmentProviderTrait, InvestmentServiceTrait};
