//! Projection domain models.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::CalculatorError;

/// The five explicit inputs of a return projection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    pub investment: Decimal,
    pub shares: u64,
    pub total_shares: u64,
    pub monthly_rental_total: Decimal,
    pub appreciation_rate_percent: Decimal,
}

impl ProjectionInput {
    pub fn project(&self) -> Result<ProjectionResult, CalculatorError> {
        super::project(
            self.investment,
            self.shares,
            self.total_shares,
            self.monthly_rental_total,
            self.appreciation_rate_percent,
        )
    }
}

/// Forecast for a single horizon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HorizonProjection {
    pub years: u32,
    pub projected_value: Decimal,
    pub total_return: Decimal,
    /// Total return as a percentage of the original investment.
    pub roi: Decimal,
}

/// Result of projecting a share position forward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub ownership_percentage: Decimal,
    pub monthly_rental: Decimal,
    pub annual_rental: Decimal,
    pub horizons: Vec<HorizonProjection>,
}

impl ProjectionResult {
    pub fn horizon(&self, years: u32) -> Option<&HorizonProjection> {
        self.horizons.iter().find(|h| h.years == years)
    }

    /// Copy of the result rounded to `dp` decimal places for display.
    ///
    /// Rounding happens on the finished figures only; the exact values stay
    /// available on `self`.
    pub fn rounded(&self, dp: u32) -> Self {
        let round = |d: Decimal| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        Self {
            ownership_percentage: round(self.ownership_percentage),
            monthly_rental: round(self.monthly_rental),
            annual_rental: round(self.annual_rental),
            horizons: self
                .horizons
                .iter()
                .map(|h| HorizonProjection {
                    years: h.years,
                    projected_value: round(h.projected_value),
                    total_return: round(h.total_return),
                    roi: round(h.roi),
                })
                .collect(),
        }
    }
}
