//! Token marketplace domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price direction badge on a marketplace card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenTrend {
    Up,
    Down,
    Stable,
}

/// An open token offering on the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenListing {
    pub id: String,
    pub name: String,
    /// Share of the offering already sold (0-100)
    pub percentage_sold: Decimal,
    /// Total amount captured so far
    pub captured: Decimal,
    /// Unit price of one token
    pub value: Decimal,
    /// Annual yield of the offering, in percent
    #[serde(rename = "fees")]
    pub fee_percent: Decimal,
    pub buyers: u32,
    pub tokens_sold: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<TokenTrend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_value: Option<Decimal>,
}

/// Projected outcome of a simulated token purchase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseSimulation {
    pub token_id: String,
    /// Amount the investor entered in the dialog
    pub amount: Decimal,
    /// Amount plus the offering's yield
    pub projected_return: Decimal,
    /// Yield portion alone
    pub projected_gain: Decimal,
}

/// Multi-select token filter with free-text search.
///
/// An empty selection means "show everything"; re-selecting a token
/// removes it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TokenFilter {
    pub selected: Vec<String>,
    pub query: String,
}

impl TokenFilter {
    pub fn is_selected(&self, token_id: &str) -> bool {
        self.selected.iter().any(|id| id == token_id)
    }

    /// Toggles a token in the selection.
    pub fn toggled(&self, token_id: &str) -> Self {
        let mut selected = self.selected.clone();
        match selected.iter().position(|id| id == token_id) {
            Some(index) => {
                selected.remove(index);
            }
            None => selected.push(token_id.to_string()),
        }
        Self {
            selected,
            query: self.query.clone(),
        }
    }

    pub fn with_query(&self, query: &str) -> Self {
        Self {
            selected: self.selected.clone(),
            query: query.to_string(),
        }
    }

    pub fn cleared(&self) -> Self {
        Self {
            selected: Vec::new(),
            query: self.query.clone(),
        }
    }

    /// Case-insensitive substring match against a display label.
    pub fn matches_query(&self, label: &str) -> bool {
        label.to_lowercase().contains(&self.query.to_lowercase())
    }
}
