//! English strings.

use crate::keys::TranslationKey;

pub(crate) fn text(key: TranslationKey) -> &'static str {
    match key {
        TranslationKey::Loading => "Loading...",
        TranslationKey::ForestiFi => "ForestiFi",
        TranslationKey::SearchPlaceholder => "Search investments, assets or transactions...",
        TranslationKey::ToggleLanguage => "Toggle language",
        TranslationKey::ToggleTheme => "Toggle theme",
        TranslationKey::Notifications => "Notifications",
        TranslationKey::Dashboard => "Dashboard",
        TranslationKey::Investments => "Investments",
        TranslationKey::EnvironmentalImpact => "Environmental Impact of Investments",
        TranslationKey::Transactions => "Transactions",
        TranslationKey::Settings => "Settings",
        TranslationKey::Help => "Help",
        TranslationKey::Logout => "Logout",
        TranslationKey::InvestmentOverview => "Investment Overview",
        TranslationKey::TrackYourInvestments => "Track your sustainable investments",
        TranslationKey::TotalInvested => "Total Invested",
        TranslationKey::TotalReturn => "Total Return",
        TranslationKey::CarbonCredits => "Carbon Credits",
        TranslationKey::TonsCo2Offset => "Tons of CO2 offset",
        TranslationKey::InvestmentPerformance => "Investment Performance",
        TranslationKey::Week => "Week",
        TranslationKey::Month => "Month",
        TranslationKey::Year => "Year",
        TranslationKey::All => "All",
        TranslationKey::PortfolioValue => "Portfolio Value",
        TranslationKey::YourPositiveImpact => "Your positive impact on the environment",
        TranslationKey::Co2Reduction => "CO2 Reduction",
        TranslationKey::FamiliesBenefited => "Families benefited",
        TranslationKey::WaterConservation => "Water Conservation",
        TranslationKey::HectaresPreserved => "Hectares preserved",
        TranslationKey::Tons => "tons",
        TranslationKey::InvestmentPortfolio => "Investment Portfolio",
        TranslationKey::YourNaturalAssets => "Your natural assets in the Amazon",
        TranslationKey::AssetName => "Asset Name",
        TranslationKey::Type => "Type",
        TranslationKey::Invested => "Invested",
        TranslationKey::CurrentValue => "Current Value",
        TranslationKey::Return => "Return",
        TranslationKey::PurchaseDate => "Purchase Date",
        TranslationKey::RecentTransactions => "Recent Transactions",
        TranslationKey::LatestActivity => "Latest activity in your portfolio",
        TranslationKey::NoRecentTransactions => "No recent transactions",
        TranslationKey::FutureEarnings => "Future Earnings",
        TranslationKey::FutureEarningsDesc => "Projected value of your investments over time",
        TranslationKey::ProjectionYears => "Projection Years",
        TranslationKey::Years => "years",
        TranslationKey::AnnualGrowthRate => "Annual Growth Rate",
        TranslationKey::Conservative => "Conservative",
        TranslationKey::Moderate => "Moderate",
        TranslationKey::Optimistic => "Optimistic",
        TranslationKey::ConservativeScenario => "Conservative Scenario",
        TranslationKey::ConservativeScenarioDesc => {
            "Projection at half the selected growth rate"
        }
        TranslationKey::ModerateScenario => "Moderate Scenario",
        TranslationKey::ModerateScenarioDesc => "Projection at the selected growth rate",
        TranslationKey::OptimisticScenario => "Optimistic Scenario",
        TranslationKey::OptimisticScenarioDesc => {
            "Projection at 1.5x the selected growth rate"
        }
        TranslationKey::ProjectedValue => "Projected Value",
        TranslationKey::ProjectedReturn => "Projected Return",
        TranslationKey::AvailableTokens => "Available Tokens",
        TranslationKey::AvailableTokensDesc => "Open token offerings you can invest in",
        TranslationKey::TokenValue => "Token value",
        TranslationKey::TokensSelected => "tokens selected",
        TranslationKey::FilterByToken => "Filter by token",
        TranslationKey::SearchTokens => "Search tokens...",
    }
}
