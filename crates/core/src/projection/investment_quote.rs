//! Share-quantized investment quote for a listing.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::projection_model::{ProjectionInput, ProjectionResult};
use crate::errors::{CalculatorError, Error, Result};
use crate::properties::EquityTerms;

/// A position being evaluated: what the user offers and what it buys.
///
/// `share_count * price_per_share` never exceeds `principal`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentQuote {
    pub principal: Decimal,
    pub share_count: u64,
    pub price_per_share: Decimal,
    pub total_shares: u64,
    pub monthly_rental_total: Decimal,
    pub appreciation_rate_percent: Decimal,
}

impl InvestmentQuote {
    /// Quote for an entered amount: buys `floor(principal / price_per_share)` shares.
    pub fn from_amount(principal: Decimal, terms: &EquityTerms) -> Result<Self> {
        if principal < Decimal::ZERO {
            return Err(Error::invalid_input("Investment amount cannot be negative"));
        }
        if terms.price_per_share <= Decimal::ZERO {
            return Err(Error::invalid_input("Price per share must be positive"));
        }
        let share_count = principal
            .checked_div(terms.price_per_share)
            .map(|shares| shares.floor())
            .and_then(|shares| shares.to_u64())
            .ok_or(CalculatorError::Overflow("share count"))?;
        Ok(Self::build(principal, share_count, terms))
    }

    /// Quote for a share count: the principal is exactly what the shares cost.
    pub fn from_shares(shares: u64, terms: &EquityTerms) -> Result<Self> {
        let principal = terms
            .price_per_share
            .checked_mul(Decimal::from(shares))
            .ok_or(CalculatorError::Overflow("principal"))?;
        Ok(Self::build(principal, shares, terms))
    }

    fn build(principal: Decimal, share_count: u64, terms: &EquityTerms) -> Self {
        Self {
            principal,
            share_count,
            price_per_share: terms.price_per_share,
            total_shares: terms.total_shares,
            monthly_rental_total: terms.monthly_rental,
            appreciation_rate_percent: terms.appreciation_rate,
        }
    }

    /// Amount actually spent on whole shares.
    pub fn invested_amount(&self) -> Decimal {
        self.price_per_share * Decimal::from(self.share_count)
    }

    /// Amount entered but not spendable on a whole share.
    pub fn leftover(&self) -> Decimal {
        self.principal - self.invested_amount()
    }

    pub fn projection_input(&self) -> ProjectionInput {
        ProjectionInput {
            investment: self.principal,
            shares: self.share_count,
            total_shares: self.total_shares,
            monthly_rental_total: self.monthly_rental_total,
            appreciation_rate_percent: self.appreciation_rate_percent,
        }
    }

    /// Projects with `investment = principal`.
    pub fn project(&self) -> Result<ProjectionResult> {
        Ok(self.projection_input().project()?)
    }
}
