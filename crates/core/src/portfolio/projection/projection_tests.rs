//! Tests for the projection calculator and scenario derivation.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::investments::{AssetClass, Investment};
    use crate::portfolio::projection::*;

    fn investment(amount: Decimal) -> Investment {
        Investment {
            id: "inv".to_string(),
            name: "Guaraná Urupadí".to_string(),
            symbol: "GUA".to_string(),
            asset_class: AssetClass::Forest,
            issuer: "AAFAU".to_string(),
            amount,
            current_value: amount,
            purchase_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            location: "Amazonas, Brazil".to_string(),
            carbon_credits: 0,
            transactions: Vec::new(),
        }
    }

    fn settings(years: u32, rate: Decimal) -> ProjectionSettings {
        ProjectionSettings {
            years,
            growth_rate_percent: rate,
        }
    }

    // ========================================================================
    // project_growth
    // ========================================================================

    #[test]
    fn test_series_starts_at_principal() {
        let series = project_growth(dec!(70500), dec!(8), 5);
        assert_eq!(series.len(), 6);
        assert_eq!(series[0].year, 0);
        assert_eq!(series[0].value, dec!(70500));
    }

    #[test]
    fn test_each_point_compounds_its_predecessor() {
        let series = project_growth(dec!(1000), dec!(10), 3);
        assert_eq!(series[1].value, dec!(1100));
        assert_eq!(series[2].value, dec!(1210));
        assert_eq!(series[3].value, dec!(1331));
    }

    #[test]
    fn test_zero_rate_holds_value_constant() {
        let series = project_growth(dec!(12345.67), Decimal::ZERO, 10);
        assert!(series.iter().all(|p| p.value == dec!(12345.67)));
    }

    #[test]
    fn test_negative_rate_decreases_value() {
        let series = project_growth(dec!(1000), dec!(-10), 3);
        assert_eq!(series[1].value, dec!(900));
        assert_eq!(series[2].value, dec!(810));
        assert_eq!(series[3].value, dec!(729));
    }

    #[test]
    fn test_boundary_horizons() {
        assert_eq!(project_growth(dec!(100), dec!(8), 1).len(), 2);
        assert_eq!(project_growth(dec!(100), dec!(8), 10).len(), 11);
    }

    #[test]
    fn test_years_are_consecutive_from_zero() {
        let series = project_growth(dec!(100), dec!(3), 7);
        for (index, point) in series.iter().enumerate() {
            assert_eq!(point.year as usize, index);
        }
    }

    // ========================================================================
    // roi_percent
    // ========================================================================

    #[test]
    fn test_roi_percent() {
        assert_eq!(roi_percent(dec!(50), dec!(200)), dec!(25));
        assert_eq!(roi_percent(dec!(-20), dec!(200)), dec!(-10));
    }

    #[test]
    fn test_roi_percent_zero_principal_reports_zero() {
        assert_eq!(roi_percent(dec!(123), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(roi_percent(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
    }

    // ========================================================================
    // Scenario derivation
    // ========================================================================

    #[test]
    fn test_scenario_rate_factors_are_contractual() {
        assert_eq!(GrowthScenario::Conservative.rate_factor(), dec!(0.5));
        assert_eq!(GrowthScenario::Moderate.rate_factor(), Decimal::ONE);
        assert_eq!(GrowthScenario::Optimistic.rate_factor(), dec!(1.5));
    }

    #[test]
    fn test_effective_rates_for_eight_percent_base() {
        assert_eq!(GrowthScenario::Conservative.effective_rate(dec!(8)), dec!(4));
        assert_eq!(GrowthScenario::Moderate.effective_rate(dec!(8)), dec!(8));
        assert_eq!(GrowthScenario::Optimistic.effective_rate(dec!(8)), dec!(12));
    }

    #[test]
    fn test_project_earnings_concrete_portfolio() {
        // 25000 + 15000 + 18500 + 12000 = 70500 principal, 8% base, 5 years
        let investments = vec![
            investment(dec!(25000)),
            investment(dec!(15000)),
            investment(dec!(18500)),
            investment(dec!(12000)),
        ];
        let projection =
            ProjectionService::new().project_earnings(&investments, &settings(5, dec!(8)));

        assert_eq!(projection.principal, dec!(70500));

        // 70500 * 1.04^5, 70500 * 1.08^5, 70500 * 1.12^5
        assert_eq!(
            projection.conservative.final_value.round_dp(2),
            dec!(85774.03)
        );
        assert_eq!(projection.moderate.final_value.round_dp(2), dec!(103587.63));
        assert_eq!(
            projection.optimistic.final_value.round_dp(2),
            dec!(124245.09)
        );

        // ROI mirrors pure compounding: 1.08^5 - 1 = 46.9328...%
        assert_eq!(projection.moderate.roi_percent.round_dp(2), dec!(46.93));
        assert_eq!(
            projection.moderate.total_return.round_dp(2),
            dec!(33087.63)
        );
    }

    #[test]
    fn test_scenario_final_values_are_ordered() {
        let investments = vec![investment(dec!(70500))];
        let projection =
            ProjectionService::new().project_earnings(&investments, &settings(5, dec!(8)));
        assert!(projection.conservative.final_value <= projection.moderate.final_value);
        assert!(projection.moderate.final_value <= projection.optimistic.final_value);
    }

    #[test]
    fn test_zero_principal_reports_zero_roi_for_all_scenarios() {
        let projection = ProjectionService::new().project_earnings(&[], &settings(5, dec!(8)));
        assert_eq!(projection.principal, Decimal::ZERO);
        for scenario in GrowthScenario::ALL {
            let projected = projection.scenario(scenario);
            assert_eq!(projected.final_value, Decimal::ZERO);
            assert_eq!(projected.total_return, Decimal::ZERO);
            assert_eq!(projected.roi_percent, Decimal::ZERO);
        }
    }

    #[test]
    fn test_recomputation_is_deterministic() {
        let investments = vec![investment(dec!(70500))];
        let service = ProjectionService::new();
        let first = service.project_earnings(&investments, &settings(10, dec!(7.5)));
        let second = service.project_earnings(&investments, &settings(10, dec!(7.5)));
        assert_eq!(first, second);
    }

    #[test]
    fn test_scenario_accessor_matches_fields() {
        let projection =
            ProjectionService::new().project_earnings(&[investment(dec!(100))], &settings(3, dec!(6)));
        assert_eq!(
            projection.scenario(GrowthScenario::Conservative),
            &projection.conservative
        );
        assert_eq!(
            projection.scenario(GrowthScenario::Optimistic),
            &projection.optimistic
        );
    }

    // ========================================================================
    // Properties
    // ========================================================================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn decimal(units: i64, scale: u32) -> Decimal {
            Decimal::new(units, scale)
        }

        proptest! {
            #[test]
            fn series_has_years_plus_one_points(
                principal_cents in 0i64..1_000_000_000,
                rate_tenths in -500i64..=500,
                years in 1u32..=30,
            ) {
                let series = project_growth(
                    decimal(principal_cents, 2),
                    decimal(rate_tenths, 1),
                    years,
                );
                prop_assert_eq!(series.len(), years as usize + 1);
                prop_assert_eq!(series[0].value, decimal(principal_cents, 2));
            }

            #[test]
            fn positive_rate_grows_strictly(
                principal_cents in 1i64..1_000_000_000,
                rate_tenths in 1i64..=500,
                years in 1u32..=10,
            ) {
                let series = project_growth(
                    decimal(principal_cents, 2),
                    decimal(rate_tenths, 1),
                    years,
                );
                for window in series.windows(2) {
                    prop_assert!(window[1].value > window[0].value);
                }
            }

            #[test]
            fn zero_rate_is_constant(
                principal_cents in 0i64..1_000_000_000,
                years in 1u32..=10,
            ) {
                let principal = decimal(principal_cents, 2);
                let series = project_growth(principal, Decimal::ZERO, years);
                for point in &series {
                    prop_assert_eq!(point.value, principal);
                }
            }

            // Rates below -100% flip the sign every year and are outside
            // anything the product can express; the decreasing property
            // holds on (-100, 0).
            #[test]
            fn negative_rate_shrinks_strictly(
                principal_cents in 1i64..1_000_000_000,
                rate_tenths in -999i64..=-1,
                years in 1u32..=10,
            ) {
                let series = project_growth(
                    decimal(principal_cents, 2),
                    decimal(rate_tenths, 1),
                    years,
                );
                for window in series.windows(2) {
                    prop_assert!(window[1].value < window[0].value);
                }
            }

            #[test]
            fn scenario_finals_stay_ordered(
                principal_cents in 0i64..1_000_000_000,
                base_rate_tenths in 1i64..=150,
                years in 1u32..=10,
            ) {
                let investments = vec![investment(decimal(principal_cents, 2))];
                let projection = ProjectionService::new().project_earnings(
                    &investments,
                    &settings(years, decimal(base_rate_tenths, 1)),
                );
                prop_assert!(
                    projection.conservative.final_value <= projection.moderate.final_value
                );
                prop_assert!(
                    projection.moderate.final_value <= projection.optimistic.final_value
                );
            }

            #[test]
            fn projection_is_pure(
                principal_cents in 0i64..1_000_000_000,
                rate_tenths in -500i64..=500,
                years in 1u32..=10,
            ) {
                let principal = decimal(principal_cents, 2);
                let rate = decimal(rate_tenths, 1);
                prop_assert_eq!(
                    project_growth(principal, rate, years),
                    project_growth(principal, rate, years)
                );
            }
        }
    }
}
