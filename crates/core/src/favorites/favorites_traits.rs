use crate::errors::Result;
use crate::favorites::favorites_model::{Favorite, FavoriteToggle};
use crate::properties::Property;
use async_trait::async_trait;

/// Trait for favorites repository operations
#[async_trait]
pub trait FavoriteRepositoryTrait: Send + Sync {
    /// Favorites of a user, newest first.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Favorite>>;
    fn count_for_user(&self, user_id: &str) -> Result<usize>;
    /// Returns true when a row was inserted.
    async fn add(&self, user_id: &str, property_id: &str) -> Result<bool>;
    async fn remove(&self, user_id: &str, property_id: &str) -> Result<usize>;
    /// Flips the favorite in a single write transaction, returning the new state.
    async fn toggle(&self, user_id: &str, property_id: &str) -> Result<bool>;
}

/// Trait for favorites service operations
#[async_trait]
pub trait FavoriteServiceTrait: Send + Sync {
    async fn toggle_favorite(&self, user_id: &str, property_id: &str) -> Result<FavoriteToggle>;
    async fn add_favorite(&self, user_id: &str, property_id: &str) -> Result<FavoriteToggle>;
    async fn remove_favorite(&self, user_id: &str, property_id: &str) -> Result<FavoriteToggle>;
    fn list_favorite_ids(&self, user_id: &str) -> Result<Vec<String>>;
    fn list_favorite_properties(&self, user_id: &str) -> Result<Vec<Property>>;
    fn count_favorites(&self, user_id: &str) -> Result<usize>;
}
