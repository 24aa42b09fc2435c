//! Investment domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Natural-asset category backing a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetClass {
    Forest,
    Water,
    Biodiversity,
}

impl AssetClass {
    /// Display label, also used for alphabetical sorting of the Type column.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetClass::Forest => "Forest",
            AssetClass::Water => "Water",
            AssetClass::Biodiversity => "Biodiversity",
        }
    }
}

/// Kind of ledger entry attached to an investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Buy,
    Dividend,
    Sell,
}

/// A single ledger entry for an investment position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// Domain model representing a tokenized natural-asset position.
///
/// Created by the data provider at load time and immutable for the rest
/// of the session. `amount` is the principal invested and is strictly
/// positive for any record a provider hands out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub name: String,
    /// Token ticker (GUA, PIR, CAC, ...)
    pub symbol: String,
    pub asset_class: AssetClass,
    pub issuer: String,
    /// Principal invested
    pub amount: Decimal,
    pub current_value: Decimal,
    pub purchase_date: NaiveDate,
    pub location: String,
    pub carbon_credits: i64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Investment {
    /// Unrealized gain (or loss) on the position.
    pub fn gain(&self) -> Decimal {
        self.current_value - self.amount
    }

    /// Return on the position as a percentage of principal.
    ///
    /// A zero principal has no defined return; it reports 0 so the
    /// presentation layer never sees a division artifact.
    pub fn return_percent(&self) -> Decimal {
        if self.amount.is_zero() {
            Decimal::ZERO
        } else {
            self.gain() / self.amount * dec!(100)
        }
    }
}

/// Sortable columns of the portfolio table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    #[default]
    Name,
    Type,
    Amount,
    CurrentValue,
    Return,
    Date,
}

/// Sort direction of the portfolio table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active sort of the portfolio table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentSort {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl InvestmentSort {
    /// Header-click semantics: re-selecting the active column flips the
    /// direction, selecting a new column starts ascending.
    pub fn toggled(self, column: SortColumn) -> Self {
        if self.column == column {
            Self {
                column,
                direction: self.direction.reversed(),
            }
        } else {
            Self {
                column,
                direction: SortDirection::Asc,
            }
        }
    }
}
