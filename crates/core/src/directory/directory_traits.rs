use crate::directory::directory_model::{Agent, Builder, NewAgent, NewBuilder};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for builder/agent repository operations
#[async_trait]
pub trait DirectoryRepositoryTrait: Send + Sync {
    fn list_builders(&self) -> Result<Vec<Builder>>;
    fn get_builder(&self, builder_id: &str) -> Result<Builder>;
    async fn create_builder(&self, new_builder: NewBuilder) -> Result<Builder>;
    fn list_agents(&self) -> Result<Vec<Agent>>;
    fn get_agent(&self, agent_id: &str) -> Result<Agent>;
    async fn create_agent(&self, new_agent: NewAgent) -> Result<Agent>;
}

/// Trait for builder/agent service operations
#[async_trait]
pub trait DirectoryServiceTrait: Send + Sync {
    fn list_builders(&self) -> Result<Vec<Builder>>;
    fn get_builder(&self, builder_id: &str) -> Result<Builder>;
    async fn create_builder(&self, new_builder: NewBuilder) -> Result<Builder>;
    fn list_agents(&self) -> Result<Vec<Agent>>;
    fn get_agent(&self, agent_id: &str) -> Result<Agent>;
    async fn create_agent(&self, new_agent: NewAgent) -> Result<Agent>;
}
