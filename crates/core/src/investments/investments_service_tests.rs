//! Tests for the investment service.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::errors::Result;
    use crate::investments::investments_model::*;
    use crate::investments::investments_service::InvestmentService;
    use crate::investments::investments_traits::{
        InvestmentProviderTrait, InvestmentServiceTrait,
    };

    struct StubProvider(Vec<Investment>);

    #[async_trait]
    impl InvestmentProviderTrait for StubProvider {
        async fn fetch_investments(&self) -> Result<Vec<Investment>> {
            Ok(self.0.clone())
        }
    }

    fn investment(
        id: &str,
        name: &str,
        asset_class: AssetClass,
        amount: Decimal,
        current_value: Decimal,
        purchase_date: (i32, u32, u32),
    ) -> Investment {
        Investment {
            id: id.to_string(),
            name: name.to_string(),
            symbol: "GUA".to_string(),
            asset_class,
            issuer: "AAFAU".to_string(),
            amount,
            current_value,
            purchase_date: NaiveDate::from_ymd_opt(
                purchase_date.0,
                purchase_date.1,
                purchase_date.2,
            )
            .unwrap(),
            location: "Amazonas, Brazil".to_string(),
            carbon_credits: 10,
            transactions: Vec::new(),
        }
    }

    fn transaction(id: &str, date: (i32, u32, u32)) -> Transaction {
        Transaction {
            id: id.to_string(),
            description: format!("transaction {}", id),
            amount: dec!(100),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            transaction_type: TransactionType::Buy,
        }
    }

    fn sample_portfolio() -> Vec<Investment> {
        vec![
            investment(
                "inv-1",
                "Cacau-selvagem",
                AssetClass::Biodiversity,
                dec!(18500),
                dec!(19800),
                (2023, 5, 1),
            ),
            investment(
                "inv-2",
                "Guaraná Urupadí",
                AssetClass::Forest,
                dec!(25000),
                dec!(28750),
                (2023, 1, 15),
            ),
            investment(
                "inv-3",
                "Pirarucu de Manejo",
                AssetClass::Water,
                dec!(15000),
                dec!(16200),
                (2025, 2, 1),
            ),
        ]
    }

    fn service() -> InvestmentService {
        InvestmentService::new(Arc::new(StubProvider(sample_portfolio())))
    }

    #[tokio::test]
    async fn test_load_investments_passes_provider_data_through() {
        let loaded = service().load_investments().await.unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].id, "inv-1");
    }

    #[test]
    fn test_sort_by_name_ascending() {
        let portfolio = sample_portfolio();
        let sorted = service().sort_investments(&portfolio, InvestmentSort::default());
        let names: Vec<&str> = sorted.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Cacau-selvagem", "Guaraná Urupadí", "Pirarucu de Manejo"]
        );
    }

    #[test]
    fn test_sort_by_amount_descending() {
        let portfolio = sample_portfolio();
        let sort = InvestmentSort {
            column: SortColumn::Amount,
            direction: SortDirection::Desc,
        };
        let sorted = service().sort_investments(&portfolio, sort);
        let amounts: Vec<Decimal> = sorted.iter().map(|i| i.amount).collect();
        assert_eq!(amounts, vec![dec!(25000), dec!(18500), dec!(15000)]);
    }

    #[test]
    fn test_sort_by_type_uses_class_labels() {
        let portfolio = sample_portfolio();
        let sort = InvestmentSort {
            column: SortColumn::Type,
            direction: SortDirection::Asc,
        };
        let sorted = service().sort_investments(&portfolio, sort);
        let classes: Vec<AssetClass> = sorted.iter().map(|i| i.asset_class).collect();
        // Alphabetical by label: Biodiversity, Forest, Water
        assert_eq!(
            classes,
            vec![AssetClass::Biodiversity, AssetClass::Forest, AssetClass::Water]
        );
    }

    #[test]
    fn test_sort_by_return_percent() {
        let portfolio = sample_portfolio();
        // Returns: inv-1 ~7.03%, inv-2 15%, inv-3 8%
        let sort = InvestmentSort {
            column: SortColumn::Return,
            direction: SortDirection::Asc,
        };
        let sorted = service().sort_investments(&portfolio, sort);
        let ids: Vec<&str> = sorted.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["inv-1", "inv-3", "inv-2"]);
    }

    #[test]
    fn test_sort_leaves_input_untouched() {
        let portfolio = sample_portfolio();
        let sort = InvestmentSort {
            column: SortColumn::Date,
            direction: SortDirection::Desc,
        };
        let _ = service().sort_investments(&portfolio, sort);
        assert_eq!(portfolio[0].id, "inv-1");
    }

    #[test]
    fn test_recent_transactions_newest_first_capped_at_five() {
        let mut portfolio = sample_portfolio();
        portfolio[0].transactions = vec![
            transaction("tx-1", (2023, 1, 1)),
            transaction("tx-2", (2024, 4, 1)),
            transaction("tx-3", (2024, 8, 1)),
        ];
        portfolio[1].transactions = vec![
            transaction("tx-4", (2023, 3, 1)),
            transaction("tx-5", (2023, 7, 1)),
            transaction("tx-6", (2025, 2, 1)),
        ];
        portfolio[2].transactions = vec![transaction("tx-7", (2023, 5, 1))];

        let recents = service().recent_transactions(&portfolio);
        assert_eq!(recents.len(), 5);
        let ids: Vec<&str> = recents.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["tx-6", "tx-3", "tx-2", "tx-5", "tx-7"]);
        // Dates never increase down the list
        for window in recents.windows(2) {
            assert!(window[0].date >= window[1].date);
        }
    }

    #[test]
    fn test_recent_transactions_empty_portfolio() {
        let recents = service().recent_transactions(&[]);
        assert!(recents.is_empty());
    }
}
