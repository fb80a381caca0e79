use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use super::favorites_model::FavoriteToggle;
use super::favorites_traits::{FavoriteRepositoryTrait, FavoriteServiceTrait};
use crate::errors::{Error, Result};
use crate::properties::{Property, PropertyRepositoryTrait};

pub struct FavoriteService {
    repository: Arc<dyn FavoriteRepositoryTrait>,
    property_repository: Arc<dyn PropertyRepositoryTrait>,
}

impl FavoriteService {
    pub fn new(
        repository: Arc<dyn FavoriteRepositoryTrait>,
        property_repository: Arc<dyn PropertyRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            property_repository,
        }
    }

    fn ensure_property(&self, property_id: &str) -> Result<()> {
        self.property_repository
            .get_by_id(property_id)
            .map(|_| ())
            .map_err(|e| {
                if e.is_not_found() {
                    Error::NotFound(format!("Property {}", property_id))
                } else {
                    e
                }
            })
    }
}

#[async_trait]
impl FavoriteServiceTrait for FavoriteService {
    async fn toggle_favorite(&self, user_id: &str, property_id: &str) -> Result<FavoriteToggle> {
        self.ensure_property(property_id)?;
        let is_favorite = self.repository.toggle(user_id, property_id).await?;
        debug!(
            "User {} toggled favorite {} -> {}",
            user_id, property_id, is_favorite
        );
        Ok(FavoriteToggle {
            property_id: property_id.to_string(),
            is_favorite,
        })
    }

    async fn add_favorite(&self, user_id: &str, property_id: &str) -> Result<FavoriteToggle> {
        self.ensure_property(property_id)?;
        self.repository.add(user_id, property_id).await?;
        Ok(FavoriteToggle {
            property_id: property_id.to_string(),
            is_favorite: true,
        })
    }

    async fn remove_favorite(&self, user_id: &str, property_id: &str) -> Result<FavoriteToggle> {
        self.repository.remove(user_id, property_id).await?;
        Ok(FavoriteToggle {
            property_id: property_id.to_string(),
            is_favorite: false,
        })
    }

    fn list_favorite_ids(&self, user_id: &str) -> Result<Vec<String>> {
        Ok(self
            .repository
            .list_for_user(user_id)?
            .into_iter()
            .map(|f| f.property_id)
            .collect())
    }

    fn list_favorite_properties(&self, user_id: &str) -> Result<Vec<Property>> {
        let mut properties = Vec::new();
        for favorite in self.repository.list_for_user(user_id)? {
            match self.property_repository.get_by_id(&favorite.property_id) {
                Ok(property) => properties.push(property),
                Err(e) if e.is_not_found() => {
                    warn!(
                        "Favorite {} of user {} points at a missing property",
                        favorite.property_id, user_id
                    );
                }
                Err(e) => return Err(e),
            }
        }
        Ok(properties)
    }

    fn count_favorites(&self, user_id: &str) -> Result<usize> {
        self.repository.count_for_user(user_id)
    }
}
