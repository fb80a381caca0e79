//! Dashboard read models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::users::{KycStatus, User};

/// Aggregate of a user's investments in one property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingSummary {
    pub property_id: String,
    pub property_title: String,
    pub shares: u64,
    pub invested_amount: Decimal,
    pub ownership_percentage: Decimal,
    pub monthly_rental: Decimal,
    pub projected_value_5y: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub user: User,
    pub kyc_status: KycStatus,
    pub favorites_count: usize,
    pub holdings_count: usize,
    pub total_invested: Decimal,
    pub total_shares: u64,
    pub monthly_rental_income: Decimal,
    pub projected_value_5y: Decimal,
    pub holdings: Vec<HoldingSummary>,
}
