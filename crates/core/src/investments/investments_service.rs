//! Service for loading and arranging investment positions.

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::constants::RECENT_TRANSACTIONS_LIMIT;
use crate::errors::Result;
use crate::investments::investments_model::{
    Investment, InvestmentSort, SortColumn, SortDirection, Transaction,
};
use crate::investments::investments_traits::{InvestmentProviderTrait, InvestmentServiceTrait};

pub struct InvestmentService {
    provider: Arc<dyn InvestmentProviderTrait>,
}

impl InvestmentService {
    pub fn new(provider: Arc<dyn InvestmentProviderTrait>) -> Self {
        Self { provider }
    }

    fn compare(a: &Investment, b: &Investment, column: SortColumn) -> Ordering {
        match column {
            SortColumn::Name => a.name.cmp(&b.name),
            SortColumn::Type => a.asset_class.as_str().cmp(b.asset_class.as_str()),
            SortColumn::Amount => a.amount.cmp(&b.amount),
            SortColumn::CurrentValue => a.current_value.cmp(&b.current_value),
            SortColumn::Return => a.return_percent().cmp(&b.return_percent()),
            SortColumn::Date => a.purchase_date.cmp(&b.purchase_date),
        }
    }
}

#[async_trait]
impl InvestmentServiceTrait for InvestmentService {
    async fn load_investments(&self) -> Result<Vec<Investment>> {
        let investments = self.provider.fetch_investments().await?;
        debug!("Loaded {} investment positions", investments.len());
        Ok(investments)
    }

    /// Returns the positions ordered for the portfolio table. The input
    /// slice is left untouched; the table re-sorts on every header click.
    fn sort_investments(
        &self,
        investments: &[Investment],
        sort: InvestmentSort,
    ) -> Vec<Investment> {
        let mut sorted = investments.to_vec();
        sorted.sort_by(|a, b| {
            let ordering = Self::compare(a, b, sort.column);
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        sorted
    }

    /// Flattens the ledgers of all positions and keeps the most recent
    /// entries, newest first.
    fn recent_transactions(&self, investments: &[Investment]) -> Vec<Transaction> {
        let mut transactions: Vec<Transaction> = investments
            .iter()
            .flat_map(|inv| inv.transactions.iter().cloned())
            .collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        transactions.truncate(RECENT_TRANSACTIONS_LIMIT);
        transactions
    }
}
