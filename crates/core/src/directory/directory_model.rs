//! Builder and agent directory models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Domain model representing a developer/builder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Builder {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub established_year: Option<i32>,
    pub city: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new builder
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewBuilder {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub established_year: Option<i32>,
    pub city: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
}

impl NewBuilder {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_input("Builder name cannot be empty"));
        }
        Ok(())
    }
}

/// Domain model representing a sales agent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub agency: Option<String>,
    pub city: Option<String>,
    pub rating: Option<Decimal>,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new agent
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewAgent {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub agency: Option<String>,
    pub city: Option<String>,
    pub rating: Option<Decimal>,
}

impl NewAgent {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_input("Agent name cannot be empty"));
        }
        if !self.email.contains('@') {
            return Err(Error::invalid_input(format!(
                "Agent email '{}' is not valid",
                self.email
            )));
        }
        if let Some(rating) = self.rating {
            if rating < Decimal::ZERO || rating > Decimal::from(5) {
                return Err(Error::invalid_input("Agent rating must be between 0 and 5"));
            }
        }
        Ok(())
    }
}
