mod model;
mod repository;

pub use model::{AgentDB, BuilderDB};
pub use repository::DirectoryRepository;
