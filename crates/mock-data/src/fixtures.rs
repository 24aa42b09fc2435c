//! The fixture dataset: four positions across three Amazon asset tokens,
//! the investor's environmental impact, and two open marketplace
//! offerings.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use foresti_core::impact::{EnvironmentalImpact, ImpactHistoryPoint};
use foresti_core::investments::{AssetClass, Investment, Transaction, TransactionType};
use foresti_core::market::{TokenListing, TokenTrend};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub(crate) fn investments() -> Vec<Investment> {
    vec![
        Investment {
            id: "inv-001".to_string(),
            name: "Guaraná Urupadí".to_string(),
            symbol: "GUA".to_string(),
            asset_class: AssetClass::Forest,
            issuer: "AAFAU".to_string(),
            amount: dec!(25000),
            current_value: dec!(28750),
            purchase_date: date(2023, 1, 15),
            location: "Amazonas, Brazil".to_string(),
            carbon_credits: 125,
            transactions: vec![
                Transaction {
                    id: "tx-001".to_string(),
                    description: "GUA1 Guarana Selvagem Amazonas".to_string(),
                    amount: dec!(25000),
                    date: date(2023, 1, 1),
                    transaction_type: TransactionType::Buy,
                },
                Transaction {
                    id: "tx-002".to_string(),
                    description: "GUA2 Guarana Selvagem Amazonas".to_string(),
                    amount: dec!(750),
                    date: date(2024, 4, 1),
                    transaction_type: TransactionType::Dividend,
                },
            ],
        },
        Investment {
            id: "inv-002".to_string(),
            name: "Pirarucu de Manejo".to_string(),
            symbol: "PIR".to_string(),
            asset_class: AssetClass::Water,
            issuer: "Apoena".to_string(),
            amount: dec!(15000),
            current_value: dec!(16200),
            purchase_date: date(2025, 2, 1),
            location: "Manaus, Brazil".to_string(),
            carbon_credits: 75,
            transactions: vec![Transaction {
                id: "tx-003".to_string(),
                description: "Pirarucu de Manejo Amazonas".to_string(),
                amount: dec!(15000),
                date: date(2023, 3, 1),
                transaction_type: TransactionType::Buy,
            }],
        },
        Investment {
            id: "inv-003".to_string(),
            name: "Cacau-selvagem".to_string(),
            symbol: "CAC".to_string(),
            asset_class: AssetClass::Biodiversity,
            issuer: "Na'kau".to_string(),
            amount: dec!(18500),
            current_value: dec!(19800),
            purchase_date: date(2023, 5, 1),
            location: "Pará, Brazil".to_string(),
            carbon_credits: 92,
            transactions: vec![
                Transaction {
                    id: "tx-004".to_string(),
                    description: "Cacau-selvagem Pará".to_string(),
                    amount: dec!(18500),
                    date: date(2023, 5, 1),
                    transaction_type: TransactionType::Buy,
                },
                Transaction {
                    id: "tx-005".to_string(),
                    description: "Cacau-selvagem Pará".to_string(),
                    amount: dec!(550),
                    date: date(2024, 8, 1),
                    transaction_type: TransactionType::Dividend,
                },
            ],
        },
        Investment {
            id: "inv-004".to_string(),
            name: "Guaraná Urupadí".to_string(),
            symbol: "GUA".to_string(),
            asset_class: AssetClass::Forest,
            issuer: "AAFAU".to_string(),
            amount: dec!(12000),
            current_value: dec!(13800),
            purchase_date: date(2023, 7, 1),
            location: "Amazonas, Brazil".to_string(),
            carbon_credits: 60,
            transactions: vec![Transaction {
                id: "tx-006".to_string(),
                description: "GUA2 Guarana Selvagem Amazonas".to_string(),
                amount: dec!(12000),
                date: date(2023, 7, 1),
                transaction_type: TransactionType::Buy,
            }],
        },
    ]
}

pub(crate) fn environmental_impact() -> EnvironmentalImpact {
    let monthly = [
        (1, dec!(25)),
        (2, dec!(48)),
        (3, dec!(75)),
        (4, dec!(110)),
        (5, dec!(145)),
        (6, dec!(185)),
        (7, dec!(230)),
        (8, dec!(275)),
        (9, dec!(310)),
        (10, dec!(352)),
    ];

    EnvironmentalImpact {
        co2_reduction: dec!(352),
        families_benefited: 28,
        water_conservation: dec!(12500),
        hectares_preserved: dec!(50),
        historical_data: monthly
            .into_iter()
            .map(|(month, co2_reduction)| ImpactHistoryPoint {
                date: date(2023, month, 1),
                co2_reduction,
            })
            .collect(),
    }
}

pub(crate) fn token_listings() -> Vec<TokenListing> {
    vec![
        TokenListing {
            id: "gua2".to_string(),
            name: "GUA 2".to_string(),
            percentage_sold: dec!(75),
            captured: dec!(105000),
            value: dec!(25.0),
            fee_percent: dec!(9.6),
            buyers: 46,
            tokens_sold: 4200,
            trend: Some(TokenTrend::Up),
            trend_value: Some(dec!(2.5)),
        },
        TokenListing {
            id: "pir2".to_string(),
            name: "PIR 2".to_string(),
            percentage_sold: dec!(5),
            captured: dec!(37800),
            value: dec!(25.0),
            fee_percent: dec!(8.26),
            buyers: 57,
            tokens_sold: 1512,
            trend: Some(TokenTrend::Stable),
            trend_value: Some(dec!(0)),
        },
    ]
}
