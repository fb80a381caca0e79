use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use super::properties_filter::apply_filter;
use super::properties_model::{
    EquityTerms, NewProperty, Property, PropertyFilter, PropertyStatus, PropertyUpdate,
};
use super::properties_traits::{PropertyRepositoryTrait, PropertyServiceTrait};
use crate::directory::DirectoryRepositoryTrait;
use crate::errors::{Error, Result};

/// Service for managing property listings
pub struct PropertyService {
    repository: Arc<dyn PropertyRepositoryTrait>,
    directory: Arc<dyn DirectoryRepositoryTrait>,
}

impl PropertyService {
    pub fn new(
        repository: Arc<dyn PropertyRepositoryTrait>,
        directory: Arc<dyn DirectoryRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            directory,
        }
    }

    /// Referenced builder and agent must exist.
    fn check_references(&self, builder_id: Option<&str>, agent_id: Option<&str>) -> Result<()> {
        if let Some(id) = builder_id {
            self.directory
                .get_builder(id)
                .map_err(|e| not_found_as(e, format!("Builder {}", id)))?;
        }
        if let Some(id) = agent_id {
            self.directory
                .get_agent(id)
                .map_err(|e| not_found_as(e, format!("Agent {}", id)))?;
        }
        Ok(())
    }
}

fn not_found_as(err: Error, what: String) -> Error {
    if err.is_not_found() {
        Error::NotFound(what)
    } else {
        err
    }
}

/// A fully subscribed listing is sold out no matter what status was sent.
fn normalized_status(status: PropertyStatus, equity: Option<&EquityTerms>) -> PropertyStatus {
    match (status, equity) {
        (PropertyStatus::Available, Some(terms)) if terms.available_shares == 0 => {
            PropertyStatus::SoldOut
        }
        _ => status,
    }
}

#[async_trait]
impl PropertyServiceTrait for PropertyService {
    fn get_property(&self, property_id: &str) -> Result<Property> {
        self.repository
            .get_by_id(property_id)
            .map_err(|e| not_found_as(e, format!("Property {}", property_id)))
    }

    fn list_properties(&self, filter: &PropertyFilter) -> Result<Vec<Property>> {
        let properties = self.repository.list()?;
        let total = properties.len();
        let listed = apply_filter(properties, filter);
        debug!("Property filter kept {} of {} listings", listed.len(), total);
        Ok(listed)
    }

    async fn create_property(&self, mut new_property: NewProperty) -> Result<Property> {
        new_property.validate()?;
        self.check_references(
            new_property.builder_id.as_deref(),
            new_property.agent_id.as_deref(),
        )?;
        new_property.title = new_property.title.trim().to_string();
        new_property.city = new_property.city.trim().to_string();
        new_property.status = normalized_status(new_property.status, new_property.equity.as_ref());

        let created = self.repository.create(new_property).await?;
        info!("Listed property {} ({})", created.id, created.kind);
        Ok(created)
    }

    async fn update_property(&self, mut property_update: PropertyUpdate) -> Result<Property> {
        property_update.validate()?;
        // Existence check first so a missing id reports as not found.
        self.get_property(&property_update.id)?;
        self.check_references(
            property_update.builder_id.as_deref(),
            property_update.agent_id.as_deref(),
        )?;
        property_update.status =
            normalized_status(property_update.status, property_update.equity.as_ref());
        self.repository.update(property_update).await
    }

    async fn delete_property(&self, property_id: &str) -> Result<()> {
        let deleted = self.repository.delete(property_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Property {}", property_id)));
        }
        info!("Deleted property {}", property_id);
        Ok(())
    }
}
