use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::projection_model::{HorizonProjection, ProjectionResult};
use crate::constants::{MONTHS_PER_YEAR, PROJECTION_HORIZONS};
use crate::errors::CalculatorError;

type CalcResult<T> = std::result::Result<T, CalculatorError>;

/// Projects ownership, rental income and 1/3/5-year returns for a share position.
///
/// Appreciation compounds on `investment`, not on the whole property value
/// scaled by ownership. The two agree in exact arithmetic since the investment
/// is the owned slice of the property.
///
/// Business bounds (minimum investment, available shares) are the caller's
/// concern. The only inputs rejected here are those that would divide by zero
/// or make ROI meaningless: a non-positive `investment` or zero `total_shares`.
pub fn project(
    investment: Decimal,
    shares: u64,
    total_shares: u64,
    monthly_rental_total: Decimal,
    appreciation_rate_percent: Decimal,
) -> CalcResult<ProjectionResult> {
    if investment <= Decimal::ZERO {
        return Err(CalculatorError::InvalidInput(format!(
            "investment must be positive, got {}",
            investment
        )));
    }
    if total_shares == 0 {
        return Err(CalculatorError::InvalidInput(
            "total shares must be positive".to_string(),
        ));
    }

    let ownership_fraction = Decimal::from(shares)
        .checked_div(Decimal::from(total_shares))
        .ok_or(CalculatorError::Overflow("ownership fraction"))?;
    let monthly_rental = mul(monthly_rental_total, ownership_fraction, "monthly rental")?;
    let annual_rental = mul(
        monthly_rental,
        Decimal::from(MONTHS_PER_YEAR),
        "annual rental",
    )?;
    let appreciation_rate = appreciation_rate_percent / dec!(100);
    let growth_factor = Decimal::ONE
        .checked_add(appreciation_rate)
        .ok_or(CalculatorError::Overflow("growth factor"))?;

    let horizons = PROJECTION_HORIZONS
        .iter()
        .map(|&years| project_horizon(investment, annual_rental, growth_factor, years))
        .collect::<CalcResult<Vec<_>>>()?;

    Ok(ProjectionResult {
        ownership_percentage: mul(ownership_fraction, dec!(100), "ownership percentage")?,
        monthly_rental,
        annual_rental,
        horizons,
    })
}

fn project_horizon(
    investment: Decimal,
    annual_rental: Decimal,
    growth_factor: Decimal,
    years: u32,
) -> CalcResult<HorizonProjection> {
    let projected_value = mul(investment, compound(growth_factor, years)?, "projected value")?;
    let appreciation_gain = projected_value
        .checked_sub(investment)
        .ok_or(CalculatorError::Overflow("appreciation gain"))?;
    let total_return = mul(annual_rental, Decimal::from(years), "rental income")?
        .checked_add(appreciation_gain)
        .ok_or(CalculatorError::Overflow("total return"))?;
    let roi = total_return
        .checked_div(investment)
        .ok_or(CalculatorError::Overflow("roi"))
        .and_then(|ratio| mul(ratio, dec!(100), "roi"))?;

    Ok(HorizonProjection {
        years,
        projected_value,
        total_return,
        roi,
    })
}

/// `factor^years` by repeated multiplication so every step stays exact
/// within decimal precision.
fn compound(factor: Decimal, years: u32) -> CalcResult<Decimal> {
    (0..years).try_fold(Decimal::ONE, |acc, _| mul(acc, factor, "compound growth"))
}

fn mul(a: Decimal, b: Decimal, what: &'static str) -> CalcResult<Decimal> {
    a.checked_mul(b).ok_or(CalculatorError::Overflow(what))
}
