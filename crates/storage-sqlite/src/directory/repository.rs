use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use propvest_core::directory::{Agent, Builder, DirectoryRepositoryTrait, NewAgent, NewBuilder};
use propvest_core::Result;

use super::model::{AgentDB, BuilderDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{agents, builders};

pub struct DirectoryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl DirectoryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        DirectoryRepository { pool, writer }
    }
}

fn new_id(requested: Option<String>) -> String {
    requested
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

#[async_trait]
impl DirectoryRepositoryTrait for DirectoryRepository {
    fn list_builders(&self) -> Result<Vec<Builder>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = builders::table
            .select(BuilderDB::as_select())
            .order(builders::name.asc())
            .load::<BuilderDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Builder::from).collect())
    }

    fn get_builder(&self, builder_id: &str) -> Result<Builder> {
        let mut conn = get_connection(&self.pool)?;
        let row = builders::table
            .find(builder_id)
            .select(BuilderDB::as_select())
            .first::<BuilderDB>(&mut conn)
            .into_core()?;
        Ok(Builder::from(row))
    }

    async fn create_builder(&self, new_builder: NewBuilder) -> Result<Builder> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Builder> {
                let id = new_id(new_builder.id.clone());
                let row = BuilderDB::from_new(id, new_builder, Utc::now().naive_utc());
                let inserted = diesel::insert_into(builders::table)
                    .values(&row)
                    .returning(BuilderDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Builder::from(inserted))
            })
            .await
    }

    fn list_agents(&self) -> Result<Vec<Agent>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = agents::table
            .select(AgentDB::as_select())
            .order(agents::name.asc())
            .load::<AgentDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Agent::from).collect())
    }

    fn get_agent(&self, agent_id: &str) -> Result<Agent> {
        let mut conn = get_connection(&self.pool)?;
        let row = agents::table
            .find(agent_id)
            .select(AgentDB::as_select())
            .first::<AgentDB>(&mut conn)
            .into_core()?;
        Ok(Agent::from(row))
    }

    async fn create_agent(&self, new_agent: NewAgent) -> Result<Agent> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Agent> {
                let id = new_id(new_agent.id.clone());
                let row = AgentDB::from_new(id, new_agent, Utc::now().naive_utc());
                let inserted = diesel::insert_into(agents::table)
                    .values(&row)
                    .returning(AgentDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Agent::from(inserted))
            })
            .await
    }
}
