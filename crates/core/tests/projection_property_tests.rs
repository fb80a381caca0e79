//! Property-based tests for the return projector.
//!
//! These tests check the algebraic properties the projection must keep for
//! every well-formed input, using `proptest` for case generation.

use proptest::prelude::*;
use propvest_core::projection::project;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Investment between 1.00 and 10,000,000.00.
fn arb_investment() -> impl Strategy<Value = Decimal> {
    (100i64..=1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Monthly rental for the whole property, 0.00 to 10,000,000.00.
fn arb_monthly_rental() -> impl Strategy<Value = Decimal> {
    (0i64..=1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strictly positive appreciation between 0.01% and 20.00%.
fn arb_positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..=2000).prop_map(|bp| Decimal::new(bp, 2))
}

/// Total shares and a share count that leaves room to double it.
fn arb_share_position() -> impl Strategy<Value = (u64, u64)> {
    (2u64..=100_000).prop_flat_map(|total| (0..=total / 2, Just(total)))
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Doubling the shares doubles the ownership percentage for a fixed
    /// share total, up to decimal precision.
    #[test]
    fn prop_ownership_is_linear_in_shares(
        investment in arb_investment(),
        (shares, total) in arb_share_position(),
        rental in arb_monthly_rental(),
        rate in arb_positive_rate(),
    ) {
        let single = project(investment, shares, total, rental, rate).unwrap();
        let double = project(investment, shares * 2, total, rental, rate).unwrap();
        let drift = (double.ownership_percentage - single.ownership_percentage * Decimal::TWO).abs();
        prop_assert!(drift <= Decimal::new(1, 20), "drift {} too large", drift);
    }

    /// With no appreciation the value never moves and the return is rental only.
    #[test]
    fn prop_zero_appreciation_returns_rental_only(
        investment in arb_investment(),
        (shares, total) in arb_share_position(),
        rental in arb_monthly_rental(),
    ) {
        let result = project(investment, shares, total, rental, Decimal::ZERO).unwrap();
        for h in &result.horizons {
            prop_assert_eq!(h.projected_value, investment);
            prop_assert_eq!(h.total_return, result.annual_rental * Decimal::from(h.years));
        }
    }

    /// Positive appreciation makes later horizons strictly more valuable.
    #[test]
    fn prop_projected_value_grows_with_horizon(
        investment in arb_investment(),
        (shares, total) in arb_share_position(),
        rental in arb_monthly_rental(),
        rate in arb_positive_rate(),
    ) {
        let result = project(investment, shares, total, rental, rate).unwrap();
        let pv = |years| result.horizon(years).unwrap().projected_value;
        prop_assert!(pv(1) < pv(3));
        prop_assert!(pv(3) < pv(5));
    }

    /// Annual rental is exactly twelve monthly rentals.
    #[test]
    fn prop_annual_rental_is_twelve_months(
        investment in arb_investment(),
        (shares, total) in arb_share_position(),
        rental in arb_monthly_rental(),
        rate in arb_positive_rate(),
    ) {
        let result = project(investment, shares, total, rental, rate).unwrap();
        prop_assert_eq!(result.annual_rental, result.monthly_rental * Decimal::from(12));
    }
}
