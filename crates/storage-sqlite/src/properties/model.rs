//! Database model for property listings.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use log::error;
use propvest_core::properties::{
    EquityTerms, NewProperty, Property, PropertyKind, PropertyStatus, PropertyUpdate,
};
use propvest_core::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::{
    count_from_db, count_to_db, parse_decimal_tolerant, small_count_from_db, small_count_to_db,
};

/// One row of `properties`. Equity terms are flattened into nullable columns
/// and are present only when all share columns are set.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::properties)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDB {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub kind: String,
    pub status: String,
    pub city: String,
    pub location: String,
    pub price: String,
    pub area_sqft: Option<i32>,
    pub bedrooms: Option<i32>,
    pub builder_id: Option<String>,
    pub agent_id: Option<String>,
    pub image_url: Option<String>,
    pub price_per_share: Option<String>,
    pub total_shares: Option<i64>,
    pub available_shares: Option<i64>,
    pub monthly_rental: Option<String>,
    pub appreciation_rate: Option<String>,
    pub min_investment: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Equity columns in storage form.
struct EquityColumns {
    price_per_share: Option<String>,
    total_shares: Option<i64>,
    available_shares: Option<i64>,
    monthly_rental: Option<String>,
    appreciation_rate: Option<String>,
    min_investment: Option<String>,
}

impl EquityColumns {
    fn from_terms(terms: Option<&EquityTerms>) -> Result<Self> {
        Ok(match terms {
            Some(t) => Self {
                price_per_share: Some(t.price_per_share.to_string()),
                total_shares: Some(count_to_db(t.total_shares, "total_shares")?),
                available_shares: Some(count_to_db(t.available_shares, "available_shares")?),
                monthly_rental: Some(t.monthly_rental.to_string()),
                appreciation_rate: Some(t.appreciation_rate.to_string()),
                min_investment: Some(t.min_investment.to_string()),
            },
            None => Self {
                price_per_share: None,
                total_shares: None,
                available_shares: None,
                monthly_rental: None,
                appreciation_rate: None,
                min_investment: None,
            },
        })
    }
}

impl PropertyDB {
    pub fn from_new(id: String, new_property: NewProperty, now: NaiveDateTime) -> Result<Self> {
        let equity = EquityColumns::from_terms(new_property.equity.as_ref())?;
        Ok(Self {
            id,
            title: new_property.title,
            description: new_property.description,
            kind: new_property.kind.as_str().to_string(),
            status: new_property.status.as_str().to_string(),
            city: new_property.city,
            location: new_property.location,
            price: new_property.price.to_string(),
            area_sqft: small_count_to_db(new_property.area_sqft, "area_sqft")?,
            bedrooms: small_count_to_db(new_property.bedrooms, "bedrooms")?,
            builder_id: new_property.builder_id,
            agent_id: new_property.agent_id,
            image_url: new_property.image_url,
            price_per_share: equity.price_per_share,
            total_shares: equity.total_shares,
            available_shares: equity.available_shares,
            monthly_rental: equity.monthly_rental,
            appreciation_rate: equity.appreciation_rate,
            min_investment: equity.min_investment,
            created_at: now,
            updated_at: now,
        })
    }

    /// Row for an update; `created_at` is carried over from the stored row.
    pub fn from_update(
        update: PropertyUpdate,
        created_at: NaiveDateTime,
        now: NaiveDateTime,
    ) -> Result<Self> {
        let equity = EquityColumns::from_terms(update.equity.as_ref())?;
        Ok(Self {
            id: update.id,
            title: update.title,
            description: update.description,
            kind: update.kind.as_str().to_string(),
            status: update.status.as_str().to_string(),
            city: update.city,
            location: update.location,
            price: update.price.to_string(),
            area_sqft: small_count_to_db(update.area_sqft, "area_sqft")?,
            bedrooms: small_count_to_db(update.bedrooms, "bedrooms")?,
            builder_id: update.builder_id,
            agent_id: update.agent_id,
            image_url: update.image_url,
            price_per_share: equity.price_per_share,
            total_shares: equity.total_shares,
            available_shares: equity.available_shares,
            monthly_rental: equity.monthly_rental,
            appreciation_rate: equity.appreciation_rate,
            min_investment: equity.min_investment,
            created_at,
            updated_at: now,
        })
    }

    fn equity_terms(&self) -> Option<EquityTerms> {
        let price_per_share = self.price_per_share.as_deref()?;
        let total_shares = self.total_shares?;
        let available_shares = self.available_shares?;
        let decimal_or_zero = |value: &Option<String>, field: &str| {
            value
                .as_deref()
                .map(|v| parse_decimal_tolerant(v, field))
                .unwrap_or(Decimal::ZERO)
        };
        Some(EquityTerms {
            price_per_share: parse_decimal_tolerant(price_per_share, "price_per_share"),
            total_shares: count_from_db(total_shares, "total_shares"),
            available_shares: count_from_db(available_shares, "available_shares"),
            monthly_rental: decimal_or_zero(&self.monthly_rental, "monthly_rental"),
            appreciation_rate: decimal_or_zero(&self.appreciation_rate, "appreciation_rate"),
            min_investment: decimal_or_zero(&self.min_investment, "min_investment"),
        })
    }
}

impl From<PropertyDB> for Property {
    fn from(db: PropertyDB) -> Self {
        let equity = db.equity_terms();
        let kind = db.kind.parse().unwrap_or_else(|_| {
            error!("Unknown kind '{}' on property {}", db.kind, db.id);
            PropertyKind::default()
        });
        // An unreadable status hides the listing rather than offering it.
        let status = db.status.parse().unwrap_or_else(|_| {
            error!("Unknown status '{}' on property {}", db.status, db.id);
            PropertyStatus::Unlisted
        });
        Property {
            price: parse_decimal_tolerant(&db.price, "price"),
            area_sqft: small_count_from_db(db.area_sqft),
            bedrooms: small_count_from_db(db.bedrooms),
            id: db.id,
            title: db.title,
            description: db.description,
            kind,
            status,
            city: db.city,
            location: db.location,
            builder_id: db.builder_id,
            agent_id: db.agent_id,
            image_url: db.image_url,
            equity,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
