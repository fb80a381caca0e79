use chrono::NaiveDateTime;
use diesel::prelude::*;
use propvest_core::favorites::Favorite;
use serde::{Deserialize, Serialize};

#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(primary_key(user_id, property_id))]
#[diesel(table_name = crate::schema::favorites)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct FavoriteDB {
    pub user_id: String,
    pub property_id: String,
    pub created_at: NaiveDateTime,
}

impl From<FavoriteDB> for Favorite {
    fn from(db: FavoriteDB) -> Self {
        Favorite {
            user_id: db.user_id,
            property_id: db.property_id,
            created_at: db.created_at,
        }
    }
}
