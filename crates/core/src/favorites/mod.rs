//! Favorites module - properties saved by users.

mod favorites_model;
mod favorites_service;
mod favorites_traits;

pub use favorites_model::{Favorite, FavoriteToggle};
pub use favorites_service::FavoriteService;
pub use favorites_traits::{FavoriteRepositoryTrait, FavoriteServiceTrait};
