use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use propvest_core::investments::{Investment, InvestmentRepositoryTrait, NewInvestment};
use propvest_core::properties::PropertyStatus;
use propvest_core::users::KycStatus;
use propvest_core::{Error, Result};

use super::model::InvestmentDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{investments, properties};
use crate::users::current_kyc_status;
use crate::utils::count_to_db;

pub struct InvestmentRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl InvestmentRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        InvestmentRepository { pool, writer }
    }
}

/// Takes `shares` out of the listing's free float inside the caller's
/// transaction, marking it sold out when nothing is left. The listing must
/// still be `AVAILABLE` when the write runs.
fn reserve_shares(conn: &mut SqliteConnection, property_id: &str, shares: i64) -> Result<()> {
    let (status, available): (String, Option<i64>) = properties::table
        .find(property_id)
        .select((properties::status, properties::available_shares))
        .first(conn)
        .into_core()?;
    if status != PropertyStatus::Available.as_str() {
        return Err(Error::ConstraintViolation(format!(
            "Property {} is {}",
            property_id, status
        )));
    }
    let available = available.ok_or_else(|| {
        Error::ConstraintViolation(format!(
            "Property {} is not open for fractional investment",
            property_id
        ))
    })?;
    if available < shares {
        return Err(Error::ConstraintViolation(format!(
            "Only {} shares are available",
            available
        )));
    }

    let remaining = available - shares;
    let now = Utc::now().naive_utc();
    diesel::update(properties::table.find(property_id))
        .set((
            properties::available_shares.eq(Some(remaining)),
            properties::updated_at.eq(now),
        ))
        .execute(conn)
        .into_core()?;
    if remaining == 0 {
        diesel::update(properties::table.find(property_id))
            .set(properties::status.eq(PropertyStatus::SoldOut.as_str()))
            .execute(conn)
            .into_core()?;
    }
    debug!("Reserved {} shares of {}, {} left", shares, property_id, remaining);
    Ok(())
}

#[async_trait]
impl InvestmentRepositoryTrait for InvestmentRepository {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Investment>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = investments::table
            .filter(investments::user_id.eq(user_id))
            .select(InvestmentDB::as_select())
            .order(investments::created_at.desc())
            .load::<InvestmentDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Investment::from).collect())
    }

    fn get_by_id(&self, investment_id: &str) -> Result<Investment> {
        let mut conn = get_connection(&self.pool)?;
        let row = investments::table
            .find(investment_id)
            .select(InvestmentDB::as_select())
            .first::<InvestmentDB>(&mut conn)
            .into_core()?;
        Ok(Investment::from(row))
    }

    async fn purchase(&self, new_investment: NewInvestment) -> Result<Investment> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Investment> {
                if current_kyc_status(conn, &new_investment.user_id)? != KycStatus::Approved {
                    return Err(Error::PermissionDenied(
                        "KYC verification must be approved before investing".to_string(),
                    ));
                }
                let shares = count_to_db(new_investment.shares, "shares")?;
                reserve_shares(conn, &new_investment.property_id, shares)?;

                let row = InvestmentDB::from_new(
                    Uuid::new_v4().to_string(),
                    new_investment,
                    Utc::now().naive_utc(),
                )?;
                let inserted = diesel::insert_into(investments::table)
                    .values(&row)
                    .returning(InvestmentDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Investment::from(inserted))
            })
            .await
    }
}
