use chrono::NaiveDateTime;
use diesel::prelude::*;
use propvest_core::investments::{Investment, NewInvestment};
use propvest_core::Result;
use serde::{Deserialize, Serialize};

use crate::utils::{count_from_db, count_to_db, parse_decimal_tolerant};

#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::investments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct InvestmentDB {
    pub id: String,
    pub user_id: String,
    pub property_id: String,
    pub shares: i64,
    pub price_per_share: String,
    pub amount: String,
    pub created_at: NaiveDateTime,
}

impl InvestmentDB {
    pub fn from_new(id: String, new_investment: NewInvestment, now: NaiveDateTime) -> Result<Self> {
        Ok(Self {
            id,
            shares: count_to_db(new_investment.shares, "shares")?,
            user_id: new_investment.user_id,
            property_id: new_investment.property_id,
            price_per_share: new_investment.price_per_share.to_string(),
            amount: new_investment.amount.to_string(),
            created_at: now,
        })
    }
}

impl From<InvestmentDB> for Investment {
    fn from(db: InvestmentDB) -> Self {
        Investment {
            shares: count_from_db(db.shares, "shares"),
            price_per_share: parse_decimal_tolerant(&db.price_per_share, "price_per_share"),
            amount: parse_decimal_tolerant(&db.amount, "amount"),
            id: db.id,
            user_id: db.user_id,
            property_id: db.property_id,
            created_at: db.created_at,
        }
    }
}
