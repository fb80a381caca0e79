use crate::errors::Result;
use crate::properties::properties_model::{NewProperty, Property, PropertyFilter, PropertyUpdate};
use async_trait::async_trait;

/// Trait for property repository operations
#[async_trait]
pub trait PropertyRepositoryTrait: Send + Sync {
    fn get_by_id(&self, property_id: &str) -> Result<Property>;
    fn list(&self) -> Result<Vec<Property>>;
    async fn create(&self, new_property: NewProperty) -> Result<Property>;
    async fn update(&self, property_update: PropertyUpdate) -> Result<Property>;
    async fn delete(&self, property_id: &str) -> Result<usize>;
}

/// Trait for property service operations
#[async_trait]
pub trait PropertyServiceTrait: Send + Sync {
    fn get_property(&self, property_id: &str) -> Result<Property>;
    fn list_properties(&self, filter: &PropertyFilter) -> Result<Vec<Property>>;
    async fn create_property(&self, new_property: NewProperty) -> Result<Property>;
    async fn update_property(&self, property_update: PropertyUpdate) -> Result<Property>;
    async fn delete_property(&self, property_id: &str) -> Result<()>;
}
