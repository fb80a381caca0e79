#[cfg(test)]
mod tests {
    use crate::errors::CalculatorError;
    use crate::projection::{project, ProjectionInput};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    // ==================== Reference scenarios ====================

    #[test]
    fn test_commercial_scenario_with_appreciation() {
        let result = project(dec!(500000), 5, 1000, dec!(850000), dec!(8.5)).unwrap();

        assert_eq!(result.ownership_percentage, dec!(0.5));
        assert_eq!(result.monthly_rental, dec!(4250));
        assert_eq!(result.annual_rental, dec!(51000));

        let one_year = result.horizon(1).unwrap();
        assert_eq!(one_year.projected_value, dec!(542500));
        assert_eq!(one_year.total_return, dec!(93500));
        assert_eq!(one_year.roi, dec!(18.7));
    }

    #[test]
    fn test_commercial_scenario_later_horizons() {
        let result = project(dec!(500000), 5, 1000, dec!(850000), dec!(8.5)).unwrap();

        // 1.085^3 = 1.277289125
        let three_years = result.horizon(3).unwrap();
        assert_eq!(three_years.projected_value, dec!(638644.5625));
        assert_eq!(three_years.total_return, dec!(291644.5625));

        // 1.085^5 = 1.503656620...
        let five_years = result.horizon(5).unwrap();
        assert_eq!(
            five_years.projected_value,
            dec!(500000) * dec!(1.085) * dec!(1.085) * dec!(1.085) * dec!(1.085) * dec!(1.085)
        );
    }

    #[test]
    fn test_zero_appreciation_scenario() {
        let result = project(dec!(100000), 1, 100, dec!(10000), Decimal::ZERO).unwrap();

        assert_eq!(result.ownership_percentage, dec!(1.0));
        assert_eq!(result.monthly_rental, dec!(100));
        assert_eq!(result.annual_rental, dec!(1200));

        let five_years = result.horizon(5).unwrap();
        assert_eq!(five_years.projected_value, dec!(100000));
        assert_eq!(five_years.total_return, dec!(6000));
        assert_eq!(five_years.roi, dec!(6.0));
    }

    // ==================== Structural properties ====================

    #[test]
    fn test_horizons_are_one_three_five() {
        let result = project(dec!(1000), 1, 10, dec!(50), dec!(5)).unwrap();
        let years: Vec<u32> = result.horizons.iter().map(|h| h.years).collect();
        assert_eq!(years, vec![1, 3, 5]);
    }

    #[test]
    fn test_zero_appreciation_total_return_is_rental_only() {
        let result = project(dec!(25000), 3, 40, dec!(1200), Decimal::ZERO).unwrap();
        for h in &result.horizons {
            assert_eq!(h.projected_value, dec!(25000));
            assert_eq!(h.total_return, result.annual_rental * Decimal::from(h.years));
        }
    }

    #[test]
    fn test_annual_rental_is_twelve_months() {
        let result = project(dec!(7000), 7, 333, dec!(12345.67), dec!(3)).unwrap();
        assert_eq!(result.annual_rental, result.monthly_rental * dec!(12));
    }

    #[test]
    fn test_doubling_shares_doubles_ownership() {
        let single = project(dec!(1000), 4, 250, dec!(900), dec!(6)).unwrap();
        let double = project(dec!(1000), 8, 250, dec!(900), dec!(6)).unwrap();
        assert_eq!(double.ownership_percentage, single.ownership_percentage * dec!(2));
    }

    #[test]
    fn test_negative_appreciation_projects_depreciation() {
        let result = project(dec!(10000), 1, 10, Decimal::ZERO, dec!(-10)).unwrap();
        assert_eq!(result.horizon(1).unwrap().projected_value, dec!(9000));
        assert_eq!(result.horizon(1).unwrap().roi, dec!(-10));
        assert!(result.horizon(5).unwrap().projected_value < dec!(9000));
    }

    #[test]
    fn test_zero_shares_has_no_rental_but_still_appreciates() {
        let result = project(dec!(5000), 0, 100, dec!(1000), dec!(10)).unwrap();
        assert_eq!(result.ownership_percentage, Decimal::ZERO);
        assert_eq!(result.annual_rental, Decimal::ZERO);
        assert_eq!(result.horizon(1).unwrap().projected_value, dec!(5500));
    }

    // ==================== Preconditions ====================

    #[test]
    fn test_zero_total_shares_is_rejected() {
        let err = project(dec!(1000), 1, 0, dec!(100), dec!(5)).unwrap_err();
        assert!(matches!(err, CalculatorError::InvalidInput(_)));
    }

    #[test]
    fn test_non_positive_investment_is_rejected() {
        assert!(matches!(
            project(Decimal::ZERO, 1, 10, dec!(100), dec!(5)),
            Err(CalculatorError::InvalidInput(_))
        ));
        assert!(matches!(
            project(dec!(-1), 1, 10, dec!(100), dec!(5)),
            Err(CalculatorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_overflow_is_reported() {
        let err = project(Decimal::MAX, 1, 1, Decimal::ZERO, dec!(100)).unwrap_err();
        assert!(matches!(err, CalculatorError::Overflow(_)));
    }

    // ==================== Input struct & display rounding ====================

    #[test]
    fn test_projection_input_delegates_to_project() {
        let input = ProjectionInput {
            investment: dec!(500000),
            shares: 5,
            total_shares: 1000,
            monthly_rental_total: dec!(850000),
            appreciation_rate_percent: dec!(8.5),
        };
        assert_eq!(
            input.project().unwrap(),
            project(dec!(500000), 5, 1000, dec!(850000), dec!(8.5)).unwrap()
        );
    }

    #[test]
    fn test_rounded_limits_decimal_places() {
        let result = project(dec!(1000), 1, 3, dec!(100), dec!(7)).unwrap();
        let rounded = result.rounded(2);
        assert_eq!(rounded.ownership_percentage, dec!(33.33));
        assert_eq!(rounded.monthly_rental, dec!(33.33));
        assert_eq!(rounded.horizon(1).unwrap().projected_value, dec!(1070.00));
        assert!(rounded.horizons.iter().all(|h| h.roi.scale() <= 2));
    }
}
