use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use propvest_core::favorites::{Favorite, FavoriteRepositoryTrait};
use propvest_core::Result;

use super::model::FavoriteDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::favorites;

pub struct FavoriteRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl FavoriteRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        FavoriteRepository { pool, writer }
    }
}

fn insert_favorite(conn: &mut SqliteConnection, user_id: &str, property_id: &str) -> Result<bool> {
    let row = FavoriteDB {
        user_id: user_id.to_string(),
        property_id: property_id.to_string(),
        created_at: Utc::now().naive_utc(),
    };
    let inserted = diesel::insert_or_ignore_into(favorites::table)
        .values(&row)
        .execute(conn)
        .into_core()?;
    Ok(inserted == 1)
}

fn delete_favorite(conn: &mut SqliteConnection, user_id: &str, property_id: &str) -> Result<usize> {
    diesel::delete(favorites::table.find((user_id, property_id)))
        .execute(conn)
        .into_core()
}

#[async_trait]
impl FavoriteRepositoryTrait for FavoriteRepository {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Favorite>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = favorites::table
            .filter(favorites::user_id.eq(user_id))
            .select(FavoriteDB::as_select())
            .order(favorites::created_at.desc())
            .load::<FavoriteDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Favorite::from).collect())
    }

    fn count_for_user(&self, user_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        let count: i64 = favorites::table
            .filter(favorites::user_id.eq(user_id))
            .count()
            .get_result(&mut conn)
            .into_core()?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    async fn add(&self, user_id: &str, property_id: &str) -> Result<bool> {
        let (user_id, property_id) = (user_id.to_string(), property_id.to_string());
        self.writer
            .exec(move |conn: &mut SqliteConnection| insert_favorite(conn, &user_id, &property_id))
            .await
    }

    async fn remove(&self, user_id: &str, property_id: &str) -> Result<usize> {
        let (user_id, property_id) = (user_id.to_string(), property_id.to_string());
        self.writer
            .exec(move |conn: &mut SqliteConnection| delete_favorite(conn, &user_id, &property_id))
            .await
    }

    async fn toggle(&self, user_id: &str, property_id: &str) -> Result<bool> {
        let (user_id, property_id) = (user_id.to_string(), property_id.to_string());
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<bool> {
                if delete_favorite(conn, &user_id, &property_id)? > 0 {
                    return Ok(false);
                }
                insert_favorite(conn, &user_id, &property_id)
            })
            .await
    }
}
