use crate::directory::directory_model::{Agent, Builder, NewAgent, NewBuilder};
use crate::directory::directory_traits::{DirectoryRepositoryTrait, DirectoryServiceTrait};
use crate::errors::Result;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

pub struct DirectoryService {
    repository: Arc<dyn DirectoryRepositoryTrait>,
}

impl DirectoryService {
    pub fn new(repository: Arc<dyn DirectoryRepositoryTrait>) -> Self {
        DirectoryService { repository }
    }
}

#[async_trait]
impl DirectoryServiceTrait for DirectoryService {
    fn list_builders(&self) -> Result<Vec<Builder>> {
        let mut builders = self.repository.list_builders()?;
        builders.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(builders)
    }

    fn get_builder(&self, builder_id: &str) -> Result<Builder> {
        self.repository.get_builder(builder_id)
    }

    async fn create_builder(&self, mut new_builder: NewBuilder) -> Result<Builder> {
        new_builder.validate()?;
        new_builder.name = new_builder.name.trim().to_string();
        debug!("Creating builder '{}'", new_builder.name);
        self.repository.create_builder(new_builder).await
    }

    fn list_agents(&self) -> Result<Vec<Agent>> {
        let mut agents = self.repository.list_agents()?;
        agents.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(agents)
    }

    fn get_agent(&self, agent_id: &str) -> Result<Agent> {
        self.repository.get_agent(agent_id)
    }

    async fn create_agent(&self, mut new_agent: NewAgent) -> Result<Agent> {
        new_agent.validate()?;
        new_agent.name = new_agent.name.trim().to_string();
        new_agent.email = new_agent.email.trim().to_lowercase();
        debug!("Creating agent '{}'", new_agent.name);
        self.repository.create_agent(new_agent).await
    }
}
