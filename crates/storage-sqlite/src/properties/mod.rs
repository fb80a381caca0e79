mod model;
mod repository;

pub use model::PropertyDB;
pub use repository::PropertyRepository;
