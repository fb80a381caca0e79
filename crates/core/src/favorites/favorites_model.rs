//! Favorites domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A property saved by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub user_id: String,
    pub property_id: String,
    pub created_at: NaiveDateTime,
}

/// Favorite state of a property after a mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteToggle {
    pub property_id: String,
    pub is_favorite: bool,
}
