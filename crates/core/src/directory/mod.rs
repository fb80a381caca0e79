//! Directory module - builders and agents behind the listings.

mod directory_model;
mod directory_service;
mod directory_traits;

pub use directory_model::{Agent, Builder, NewAgent, NewBuilder};
pub use directory_service::DirectoryService;
pub use directory_traits::{DirectoryRepositoryTrait, DirectoryServiceTrait};
