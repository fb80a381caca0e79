//! Investment domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::projection::{InvestmentQuote, ProjectionResult};

/// A confirmed share purchase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub user_id: String,
    pub property_id: String,
    pub shares: u64,
    pub price_per_share: Decimal,
    pub amount: Decimal,
    pub created_at: NaiveDateTime,
}

/// Input model for recording a purchase
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvestment {
    pub user_id: String,
    pub property_id: String,
    pub shares: u64,
    pub price_per_share: Decimal,
    pub amount: Decimal,
}

/// What the calculator is given: an amount to invest or a share count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum CalculatorInput {
    Amount(Decimal),
    Shares(u64),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentCalculation {
    pub property_id: String,
    pub quote: InvestmentQuote,
    pub invested_amount: Decimal,
    pub projection: ProjectionResult,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BuySharesRequest {
    pub property_id: String,
    pub shares: u64,
}
