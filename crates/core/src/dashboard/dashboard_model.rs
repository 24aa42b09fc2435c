//! Dashboard session state.
//!
//! Every toggle the dashboard exposes (sliders, tabs, sort headers, the
//! simulation dialog) lives in one immutable value. Interactions produce
//! a new state via the `with_*` methods; nothing here is shared or
//! mutated in place.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use foresti_translation::Locale;

use crate::constants::{
    GROWTH_RATE_STEP_PERCENT, MAX_GROWTH_RATE_PERCENT, MAX_PROJECTION_YEARS,
    MIN_GROWTH_RATE_PERCENT, MIN_PROJECTION_YEARS,
};
use crate::impact::EnvironmentalImpact;
use crate::investments::{Investment, InvestmentSort, SortColumn};
use crate::market::{TokenFilter, TokenListing};
use crate::portfolio::overview::PerformancePeriod;
use crate::portfolio::projection::{GrowthScenario, ProjectionSettings};

/// Color scheme selected in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// The open purchase-simulation dialog, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationDialog {
    pub token_id: String,
    /// Amount entered by the investor; starts at one token's price
    pub investment_amount: Decimal,
}

/// Immutable snapshot of every UI control on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub theme: Theme,
    pub locale: Locale,
    pub performance_period: PerformancePeriod,
    pub projection: ProjectionSettings,
    pub scenario_tab: GrowthScenario,
    pub portfolio_sort: InvestmentSort,
    pub token_filter: TokenFilter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulation: Option<SimulationDialog>,
}

impl DashboardState {
    pub fn with_theme_toggled(self) -> Self {
        Self {
            theme: self.theme.toggled(),
            ..self
        }
    }

    pub fn with_locale_toggled(self) -> Self {
        Self {
            locale: self.locale.toggled(),
            ..self
        }
    }

    pub fn with_performance_period(self, period: PerformancePeriod) -> Self {
        Self {
            performance_period: period,
            ..self
        }
    }

    pub fn with_scenario_tab(self, scenario: GrowthScenario) -> Self {
        Self {
            scenario_tab: scenario,
            ..self
        }
    }

    /// Moves the projection-horizon slider, clamped to its 1-10 range.
    pub fn with_projection_years(self, years: u32) -> Self {
        Self {
            projection: ProjectionSettings {
                years: years.clamp(MIN_PROJECTION_YEARS, MAX_PROJECTION_YEARS),
                ..self.projection
            },
            ..self
        }
    }

    /// Moves the growth-rate slider: snapped to the 0.5 step, clamped to
    /// the 1-15 range.
    pub fn with_growth_rate(self, rate_percent: Decimal) -> Self {
        let snapped = (rate_percent / GROWTH_RATE_STEP_PERCENT).round() * GROWTH_RATE_STEP_PERCENT;
        Self {
            projection: ProjectionSettings {
                growth_rate_percent: snapped
                    .clamp(MIN_GROWTH_RATE_PERCENT, MAX_GROWTH_RATE_PERCENT),
                ..self.projection
            },
            ..self
        }
    }

    /// Applies a header click on the portfolio table.
    pub fn with_sorted_by(self, column: SortColumn) -> Self {
        Self {
            portfolio_sort: self.portfolio_sort.toggled(column),
            ..self
        }
    }

    pub fn with_token_toggled(self, token_id: &str) -> Self {
        Self {
            token_filter: self.token_filter.toggled(token_id),
            ..self
        }
    }

    pub fn with_filter_query(self, query: &str) -> Self {
        Self {
            token_filter: self.token_filter.with_query(query),
            ..self
        }
    }

    pub fn with_filter_cleared(self) -> Self {
        Self {
            token_filter: self.token_filter.cleared(),
            ..self
        }
    }

    /// Opens the purchase-simulation dialog for an offering, seeding the
    /// amount with one token's price.
    pub fn with_simulation_open(self, listing: &TokenListing) -> Self {
        Self {
            simulation: Some(SimulationDialog {
                token_id: listing.id.clone(),
                investment_amount: listing.value,
            }),
            ..self
        }
    }

    /// Updates the amount typed into the open dialog; a no-op when the
    /// dialog is closed.
    pub fn with_simulation_amount(self, amount: Decimal) -> Self {
        Self {
            simulation: self.simulation.map(|dialog| SimulationDialog {
                investment_amount: amount,
                ..dialog
            }),
            ..self
        }
    }

    pub fn with_simulation_closed(self) -> Self {
        Self {
            simulation: None,
            ..self
        }
    }
}

/// Everything the dashboard loads at startup, in one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub investments: Vec<Investment>,
    pub impact: EnvironmentalImpact,
    pub tokens: Vec<TokenListing>,
}
