use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use propvest_core::properties::{NewProperty, Property, PropertyRepositoryTrait, PropertyUpdate};
use propvest_core::Result;

use super::model::PropertyDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::properties;
use crate::schema::properties::dsl::*;

pub struct PropertyRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PropertyRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PropertyRepository { pool, writer }
    }
}

#[async_trait]
impl PropertyRepositoryTrait for PropertyRepository {
    fn get_by_id(&self, property_id: &str) -> Result<Property> {
        let mut conn = get_connection(&self.pool)?;
        let row = properties
            .find(property_id)
            .select(PropertyDB::as_select())
            .first::<PropertyDB>(&mut conn)
            .into_core()?;
        Ok(Property::from(row))
    }

    fn list(&self) -> Result<Vec<Property>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = properties
            .select(PropertyDB::as_select())
            .order(created_at.desc())
            .load::<PropertyDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Property::from).collect())
    }

    async fn create(&self, new_property: NewProperty) -> Result<Property> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Property> {
                let property_id = new_property
                    .id
                    .clone()
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or_else(|| Uuid::new_v4().to_string());
                let row = PropertyDB::from_new(property_id, new_property, Utc::now().naive_utc())?;
                let inserted = diesel::insert_into(properties::table)
                    .values(&row)
                    .returning(PropertyDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Property::from(inserted))
            })
            .await
    }

    async fn update(&self, property_update: PropertyUpdate) -> Result<Property> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Property> {
                let existing = properties
                    .find(&property_update.id)
                    .select(PropertyDB::as_select())
                    .first::<PropertyDB>(conn)
                    .into_core()?;
                let row = PropertyDB::from_update(
                    property_update,
                    existing.created_at,
                    Utc::now().naive_utc(),
                )?;
                let updated = diesel::update(properties.find(&row.id))
                    .set(&row)
                    .returning(PropertyDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Property::from(updated))
            })
            .await
    }

    async fn delete(&self, property_id: &str) -> Result<usize> {
        let property_id = property_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(properties.find(property_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
