mod model;
mod repository;

pub use model::{KycRecordDB, UserDB};
pub(crate) use repository::current_kyc_status;
pub use repository::UserRepository;
