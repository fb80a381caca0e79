//! Property listing domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::MONTHS_PER_YEAR;
use crate::errors::{Error, Result};

/// Listing category. Commercial listings usually carry equity terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyKind {
    #[default]
    Residential,
    Commercial,
}

impl PropertyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::Residential => "RESIDENTIAL",
            PropertyKind::Commercial => "COMMERCIAL",
        }
    }
}

impl FromStr for PropertyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RESIDENTIAL" => Ok(PropertyKind::Residential),
            "COMMERCIAL" => Ok(PropertyKind::Commercial),
            other => Err(Error::invalid_input(format!("Unknown property kind '{}'", other))),
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    #[default]
    Available,
    SoldOut,
    Unlisted,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "AVAILABLE",
            PropertyStatus::SoldOut => "SOLD_OUT",
            PropertyStatus::Unlisted => "UNLISTED",
        }
    }
}

impl FromStr for PropertyStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AVAILABLE" => Ok(PropertyStatus::Available),
            "SOLD_OUT" => Ok(PropertyStatus::SoldOut),
            "UNLISTED" => Ok(PropertyStatus::Unlisted),
            other => Err(Error::invalid_input(format!(
                "Unknown property status '{}'",
                other
            ))),
        }
    }
}

/// Fractional-equity terms of a listing held through an SPV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityTerms {
    pub price_per_share: Decimal,
    pub total_shares: u64,
    pub available_shares: u64,
    /// Monthly rental income of the whole property.
    pub monthly_rental: Decimal,
    /// Expected annual appreciation, 8.5 meaning 8.5%/year.
    pub appreciation_rate: Decimal,
    pub min_investment: Decimal,
}

impl EquityTerms {
    /// Gross annual rental yield on the total share capital, in percent.
    pub fn rental_yield_percent(&self) -> Option<Decimal> {
        let capital = self
            .price_per_share
            .checked_mul(Decimal::from(self.total_shares))?;
        if capital.is_zero() {
            return None;
        }
        self.monthly_rental
            .checked_mul(Decimal::from(MONTHS_PER_YEAR))?
            .checked_div(capital)?
            .checked_mul(dec!(100))
    }

    pub fn sold_shares(&self) -> u64 {
        self.total_shares.saturating_sub(self.available_shares)
    }

    pub fn validate(&self) -> Result<()> {
        if self.price_per_share <= Decimal::ZERO {
            return Err(Error::invalid_input("Price per share must be positive"));
        }
        if self.total_shares == 0 {
            return Err(Error::invalid_input("Total shares must be positive"));
        }
        if self.available_shares > self.total_shares {
            return Err(Error::invalid_input(format!(
                "Available shares ({}) exceed total shares ({})",
                self.available_shares, self.total_shares
            )));
        }
        if self.min_investment < Decimal::ZERO {
            return Err(Error::invalid_input("Minimum investment cannot be negative"));
        }
        if self.monthly_rental < Decimal::ZERO {
            return Err(Error::invalid_input("Monthly rental cannot be negative"));
        }
        Ok(())
    }
}

/// Domain model representing a listed property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub kind: PropertyKind,
    pub status: PropertyStatus,
    pub city: String,
    pub location: String,
    pub price: Decimal,
    pub area_sqft: Option<u32>,
    pub bedrooms: Option<u32>,
    pub builder_id: Option<String>,
    pub agent_id: Option<String>,
    pub image_url: Option<String>,
    pub equity: Option<EquityTerms>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Property {
    pub fn rental_yield_percent(&self) -> Option<Decimal> {
        self.equity.as_ref().and_then(EquityTerms::rental_yield_percent)
    }

    pub fn appreciation_rate(&self) -> Option<Decimal> {
        self.equity.as_ref().map(|e| e.appreciation_rate)
    }

    /// Equity terms, or a validation error for listings that cannot be
    /// invested in.
    pub fn require_equity(&self) -> Result<&EquityTerms> {
        self.equity.as_ref().ok_or_else(|| {
            Error::invalid_input(format!(
                "Property {} is not open for fractional investment",
                self.id
            ))
        })
    }
}

/// Input model for creating a new property
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub kind: PropertyKind,
    #[serde(default)]
    pub status: PropertyStatus,
    pub city: String,
    #[serde(default)]
    pub location: String,
    pub price: Decimal,
    pub area_sqft: Option<u32>,
    pub bedrooms: Option<u32>,
    pub builder_id: Option<String>,
    pub agent_id: Option<String>,
    pub image_url: Option<String>,
    pub equity: Option<EquityTerms>,
}

impl NewProperty {
    pub fn validate(&self) -> Result<()> {
        validate_listing(&self.title, &self.city, self.price, self.equity.as_ref())
    }
}

/// Input model for updating a property
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PropertyUpdate {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub kind: PropertyKind,
    pub status: PropertyStatus,
    pub city: String,
    pub location: String,
    pub price: Decimal,
    pub area_sqft: Option<u32>,
    pub bedrooms: Option<u32>,
    pub builder_id: Option<String>,
    pub agent_id: Option<String>,
    pub image_url: Option<String>,
    pub equity: Option<EquityTerms>,
}

impl PropertyUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::invalid_input("Property id is required for updates"));
        }
        validate_listing(&self.title, &self.city, self.price, self.equity.as_ref())
    }
}

fn validate_listing(
    title: &str,
    city: &str,
    price: Decimal,
    equity: Option<&EquityTerms>,
) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::invalid_input("Property title cannot be empty"));
    }
    if city.trim().is_empty() {
        return Err(Error::invalid_input("Property city cannot be empty"));
    }
    if price <= Decimal::ZERO {
        return Err(Error::invalid_input("Property price must be positive"));
    }
    if let Some(terms) = equity {
        terms.validate()?;
    }
    Ok(())
}

/// Sort order of the listing pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertySort {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    YieldDesc,
    AppreciationDesc,
    TitleAsc,
}

/// Listing filter. Every field is optional; an empty filter keeps everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyFilter {
    pub search: Option<String>,
    pub kind: Option<PropertyKind>,
    pub status: Option<PropertyStatus>,
    pub city: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_yield: Option<Decimal>,
    pub builder_id: Option<String>,
    pub agent_id: Option<String>,
    pub equity_only: bool,
    pub sort: PropertySort,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}
