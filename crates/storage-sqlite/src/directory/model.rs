//! Database models for builders and agents.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use propvest_core::directory::{Agent, Builder, NewAgent, NewBuilder};
use serde::{Deserialize, Serialize};

use crate::utils::parse_optional_decimal;

#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::builders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BuilderDB {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub established_year: Option<i32>,
    pub city: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: NaiveDateTime,
}

impl BuilderDB {
    pub fn from_new(id: String, new_builder: NewBuilder, now: NaiveDateTime) -> Self {
        Self {
            id,
            name: new_builder.name,
            description: new_builder.description,
            established_year: new_builder.established_year,
            city: new_builder.city,
            website: new_builder.website,
            logo_url: new_builder.logo_url,
            created_at: now,
        }
    }
}

impl From<BuilderDB> for Builder {
    fn from(db: BuilderDB) -> Self {
        Builder {
            id: db.id,
            name: db.name,
            description: db.description,
            established_year: db.established_year,
            city: db.city,
            website: db.website,
            logo_url: db.logo_url,
            created_at: db.created_at,
        }
    }
}

#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::agents)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AgentDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub agency: Option<String>,
    pub city: Option<String>,
    pub rating: Option<String>,
    pub created_at: NaiveDateTime,
}

impl AgentDB {
    pub fn from_new(id: String, new_agent: NewAgent, now: NaiveDateTime) -> Self {
        Self {
            id,
            name: new_agent.name,
            email: new_agent.email,
            phone: new_agent.phone,
            agency: new_agent.agency,
            city: new_agent.city,
            rating: new_agent.rating.map(|r| r.to_string()),
            created_at: now,
        }
    }
}

impl From<AgentDB> for Agent {
    fn from(db: AgentDB) -> Self {
        Agent {
            rating: parse_optional_decimal(db.rating.as_deref(), "rating"),
            id: db.id,
            name: db.name,
            email: db.email,
            phone: db.phone,
            agency: db.agency,
            city: db.city,
            created_at: db.created_at,
        }
    }
}
