//! The closed set of translatable dashboard labels.

use serde::{Deserialize, Serialize};

/// Every label the dashboard can ask for.
///
/// Serialized names match the key strings the web client uses, so state
/// snapshots stay interchangeable with the original JSON shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TranslationKey {
    // Shell and navigation
    Loading,
    ForestiFi,
    SearchPlaceholder,
    ToggleLanguage,
    ToggleTheme,
    Notifications,
    Dashboard,
    Investments,
    EnvironmentalImpact,
    Transactions,
    Settings,
    Help,
    Logout,

    // Investment overview
    InvestmentOverview,
    TrackYourInvestments,
    TotalInvested,
    TotalReturn,
    CarbonCredits,
    #[serde(rename = "tonsCO2Offset")]
    TonsCo2Offset,
    InvestmentPerformance,
    Week,
    Month,
    Year,
    All,
    PortfolioValue,

    // Environmental impact
    YourPositiveImpact,
    Co2Reduction,
    FamiliesBenefited,
    WaterConservation,
    HectaresPreserved,
    Tons,

    // Portfolio table
    InvestmentPortfolio,
    YourNaturalAssets,
    AssetName,
    Type,
    Invested,
    CurrentValue,
    Return,
    PurchaseDate,

    // Recent transactions
    RecentTransactions,
    LatestActivity,
    NoRecentTransactions,

    // Future earnings
    FutureEarnings,
    FutureEarningsDesc,
    ProjectionYears,
    Years,
    AnnualGrowthRate,
    Conservative,
    Moderate,
    Optimistic,
    ConservativeScenario,
    ConservativeScenarioDesc,
    ModerateScenario,
    ModerateScenarioDesc,
    OptimisticScenario,
    OptimisticScenarioDesc,
    ProjectedValue,
    ProjectedReturn,

    // Token marketplace
    AvailableTokens,
    AvailableTokensDesc,
    TokenValue,
    TokensSelected,
    FilterByToken,
    SearchTokens,
}

impl TranslationKey {
    /// All keys, for exhaustiveness checks in tests.
    pub const ALL: &'static [TranslationKey] = &[
        TranslationKey::Loading,
        TranslationKey::ForestiFi,
        TranslationKey::SearchPlaceholder,
        TranslationKey::ToggleLanguage,
        TranslationKey::ToggleTheme,
        TranslationKey::Notifications,
        TranslationKey::Dashboard,
        TranslationKey::Investments,
        TranslationKey::EnvironmentalImpact,
        TranslationKey::Transactions,
        TranslationKey::Settings,
        TranslationKey::Help,
        TranslationKey::Logout,
        TranslationKey::InvestmentOverview,
        TranslationKey::TrackYourInvestments,
        TranslationKey::TotalInvested,
        TranslationKey::TotalReturn,
        TranslationKey::CarbonCredits,
        TranslationKey::TonsCo2Offset,
        TranslationKey::InvestmentPerformance,
        TranslationKey::Week,
        TranslationKey::Month,
        TranslationKey::Year,
        TranslationKey::All,
        TranslationKey::PortfolioValue,
        TranslationKey::YourPositiveImpact,
        TranslationKey::Co2Reduction,
        TranslationKey::FamiliesBenefited,
        TranslationKey::WaterConservation,
        TranslationKey::HectaresPreserved,
        TranslationKey::Tons,
        TranslationKey::InvestmentPortfolio,
        TranslationKey::YourNaturalAssets,
        TranslationKey::AssetName,
        TranslationKey::Type,
        TranslationKey::Invested,
        TranslationKey::CurrentValue,
        TranslationKey::Return,
        TranslationKey::PurchaseDate,
        TranslationKey::RecentTransactions,
        TranslationKey::LatestActivity,
        TranslationKey::NoRecentTransactions,
        TranslationKey::FutureEarnings,
        TranslationKey::FutureEarningsDesc,
        TranslationKey::ProjectionYears,
        TranslationKey::Years,
        TranslationKey::AnnualGrowthRate,
        TranslationKey::Conservative,
        TranslationKey::Moderate,
        TranslationKey::Optimistic,
        TranslationKey::ConservativeScenario,
        TranslationKey::ConservativeScenarioDesc,
        TranslationKey::ModerateScenario,
        TranslationKey::ModerateScenarioDesc,
        TranslationKey::OptimisticScenario,
        TranslationKey::OptimisticScenarioDesc,
        TranslationKey::ProjectedValue,
        TranslationKey::ProjectedReturn,
        TranslationKey::AvailableTokens,
        TranslationKey::AvailableTokensDesc,
        TranslationKey::TokenValue,
        TranslationKey::TokensSelected,
        TranslationKey::FilterByToken,
        TranslationKey::SearchTokens,
    ];
}
