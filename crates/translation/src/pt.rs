//! Portuguese strings.

use crate::keys::TranslationKey;

pub(crate) fn text(key: TranslationKey) -> &'static str {
    match key {
        TranslationKey::Loading => "Carregando...",
        TranslationKey::ForestiFi => "ForestiFi",
        TranslationKey::SearchPlaceholder => "Buscar investimentos, ativos ou transações...",
        TranslationKey::ToggleLanguage => "Alternar idioma",
        TranslationKey::ToggleTheme => "Alternar tema",
        TranslationKey::Notifications => "Notificações",
        TranslationKey::Dashboard => "Painel",
        TranslationKey::Investments => "Investimentos",
        TranslationKey::EnvironmentalImpact => "Impacto Ambiental dos Investimentos",
        TranslationKey::Transactions => "Transações",
        TranslationKey::Settings => "Configurações",
        TranslationKey::Help => "Ajuda",
        TranslationKey::Logout => "Sair",
        TranslationKey::InvestmentOverview => "Visão Geral de Investimentos",
        TranslationKey::TrackYourInvestments => "Acompanhe seus investimentos sustentáveis",
        TranslationKey::TotalInvested => "Total Investido",
        TranslationKey::TotalReturn => "Retorno Total",
        TranslationKey::CarbonCredits => "Créditos de Carbono",
        TranslationKey::TonsCo2Offset => "Toneladas de CO2 compensadas",
        TranslationKey::InvestmentPerformance => "Desempenho do Investimento",
        TranslationKey::Week => "Semana",
        TranslationKey::Month => "Mês",
        TranslationKey::Year => "Ano",
        TranslationKey::All => "Todos",
        TranslationKey::PortfolioValue => "Valor da Carteira",
        TranslationKey::YourPositiveImpact => "Seu impacto positivo no meio ambiente",
        TranslationKey::Co2Reduction => "Redução de CO2",
        TranslationKey::FamiliesBenefited => "Famílias beneficiadas",
        TranslationKey::WaterConservation => "Conservação de Água",
        TranslationKey::HectaresPreserved => "Hectares preservados",
        TranslationKey::Tons => "toneladas",
        TranslationKey::InvestmentPortfolio => "Carteira de Investimentos",
        TranslationKey::YourNaturalAssets => "Seus ativos naturais na Amazônia",
        TranslationKey::AssetName => "Nome do Ativo",
        TranslationKey::Type => "Tipo",
        TranslationKey::Invested => "Investido",
        TranslationKey::CurrentValue => "Valor Atual",
        TranslationKey::Return => "Retorno",
        TranslationKey::PurchaseDate => "Data de Compra",
        TranslationKey::RecentTransactions => "Transações Recentes",
        TranslationKey::LatestActivity => "Atividade recente em sua carteira",
        TranslationKey::NoRecentTransactions => "Sem transações recentes",
        TranslationKey::FutureEarnings => "Ganhos Futuros",
        TranslationKey::FutureEarningsDesc => {
            "Valor projetado dos seus investimentos ao longo do tempo"
        }
        TranslationKey::ProjectionYears => "Anos de Projeção",
        TranslationKey::Years => "anos",
        TranslationKey::AnnualGrowthRate => "Taxa de Crescimento Anual",
        TranslationKey::Conservative => "Conservador",
        TranslationKey::Moderate => "Moderado",
        TranslationKey::Optimistic => "Otimista",
        TranslationKey::ConservativeScenario => "Cenário Conservador",
        TranslationKey::ConservativeScenarioDesc => {
            "Projeção com metade da taxa de crescimento selecionada"
        }
        TranslationKey::ModerateScenario => "Cenário Moderado",
        TranslationKey::ModerateScenarioDesc => {
            "Projeção com a taxa de crescimento selecionada"
        }
        TranslationKey::OptimisticScenario => "Cenário Otimista",
        TranslationKey::OptimisticScenarioDesc => {
            "Projeção com 1,5x a taxa de crescimento selecionada"
        }
        TranslationKey::ProjectedValue => "Valor Projetado",
        TranslationKey::ProjectedReturn => "Retorno Projetado",
        TranslationKey::AvailableTokens => "Tokens Disponíveis",
        TranslationKey::AvailableTokensDesc => "Ofertas abertas de tokens para investir",
        TranslationKey::TokenValue => "Valor do token",
        TranslationKey::TokensSelected => "tokens selecionados",
        TranslationKey::FilterByToken => "Filtrar por token",
        TranslationKey::SearchTokens => "Buscar tokens...",
    }
}
